//! Stages command for a plant's time spent per stage.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use gt_core::time::to_days;
use gt_core::{English, Journal, PlantStage};
use serde::Serialize;

use super::show::write_stage_lines;
use super::util::require_plant;

/// Stage duration for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct StageEntry {
    pub stage: PlantStage,
    pub days: i64,
    pub duration_ms: i64,
}

pub fn run<W: Write>(
    writer: &mut W,
    journal: &Journal,
    key: &str,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let plant = require_plant(journal, key)?;

    if json {
        let entries: Vec<StageEntry> = plant
            .calculate_stage_time(now)
            .into_iter()
            .map(|(stage, time)| StageEntry {
                stage,
                days: to_days(time),
                duration_ms: time.num_milliseconds(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *writer, &entries)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Stages for {} (currently {})",
        plant.name,
        plant.stage().label(&English)
    )?;
    write_stage_lines(writer, plant, now)?;

    Ok(())
}
