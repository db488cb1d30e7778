//! Waterings command for listing a plant's feeding history.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use gt_core::{DisplayPrefs, English, Journal, Markup, SummaryContext, TimeUnit, time_ago};

use super::util::{indent, require_plant};

pub fn run<W: Write>(
    writer: &mut W,
    journal: &Journal,
    key: &str,
    prefs: DisplayPrefs,
    now: DateTime<Utc>,
    html: bool,
) -> Result<()> {
    let plant = require_plant(journal, key)?;
    let markup = if html { Markup::Html } else { Markup::Plain };
    let ctx = SummaryContext::new(&English, prefs, now).with_markup(markup);

    let waterings: Vec<_> = plant.waterings().collect();
    writeln!(writer, "Waterings for {} ({})", plant.name, waterings.len())?;

    for water in waterings {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} ({} ago)",
            water.date.format("%Y-%m-%d %H:%M UTC"),
            time_ago(water.date, now, TimeUnit::Year)
        )?;

        let summary = water.summary(&ctx);
        if !summary.is_empty() {
            writeln!(writer, "{}", indent(&summary, "  "))?;
        }
        if let Some(notes) = &water.notes {
            writeln!(writer, "  Notes: {notes}")?;
        }
    }

    Ok(())
}
