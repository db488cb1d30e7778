//! Plants command for listing every plant with its short summary.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use gt_core::{DisplayPrefs, English, Journal, Markup, PlantStage, SummaryContext};
use serde::Serialize;

use super::util::indent;

/// Plant data for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PlantEntry {
    pub id: String,
    pub name: String,
    pub strain: Option<String>,
    pub stage: PlantStage,
    pub days_in_stage: i64,
    pub summary: String,
}

pub fn run<W: Write>(
    writer: &mut W,
    journal: &Journal,
    prefs: DisplayPrefs,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let ctx = SummaryContext::new(&English, prefs, now).with_markup(Markup::Plain);

    if json {
        let entries: Vec<PlantEntry> = journal
            .plants
            .iter()
            .map(|plant| PlantEntry {
                id: plant.id.to_string(),
                name: plant.name.clone(),
                strain: plant.strain.clone(),
                stage: plant.stage(),
                days_in_stage: plant.days_in_stage(now),
                summary: plant.short_summary(&ctx),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *writer, &entries)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "PLANTS ({})", journal.plants.len())?;

    if journal.plants.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No plants in journal.")?;
        return Ok(());
    }

    for plant in &journal.plants {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} [{}] - {}",
            plant.name,
            plant.id,
            plant.stage().label(&English)
        )?;
        writeln!(writer, "{}", indent(&plant.short_summary(&ctx), "  "))?;
    }

    Ok(())
}
