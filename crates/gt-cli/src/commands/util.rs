//! Shared utilities for CLI commands.

use anyhow::{Context, Result};
use gt_core::units::format_number;
use gt_core::{Additive, DisplayPrefs, Journal, Plant, VolumeUnit};

/// Looks up a plant by ID or name, failing with a helpful message.
pub fn require_plant<'a>(journal: &'a Journal, key: &str) -> Result<&'a Plant> {
    journal
        .find_plant(key)
        .with_context(|| format!("no plant with ID or name '{key}'. Run 'gt plants' to list them."))
}

/// Prefixes every line of `text` with `prefix`.
pub fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"• Bloom  -  2ml/l"`: an additive's dosage in the preferred units.
pub fn additive_line(additive: &Additive, prefs: DisplayPrefs) -> String {
    let description = additive.description.as_deref().unwrap_or("(unnamed)");
    additive.amount.map_or_else(
        || format!("• {description}"),
        |amount| {
            let unit = prefs.measurement_unit;
            format!(
                "• {description}  -  {}{}/{}",
                format_number(VolumeUnit::Ml.convert(unit, amount)),
                unit.label(),
                prefs.delivery_unit.label()
            )
        },
    )
}
