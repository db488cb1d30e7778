//! Status command for showing where the journal lives and what it holds.

use std::io::Write;

use anyhow::Result;
use gt_core::Journal;

use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config, journal: &Journal) -> Result<()> {
    writeln!(writer, "Grow journal status")?;
    writeln!(writer, "Journal: {}", config.journal_dir.display())?;
    writeln!(writer, "Plants: {}", journal.plants.len())?;
    writeln!(writer, "Gardens: {}", journal.gardens.len())?;
    writeln!(writer, "Schedules: {}", journal.schedules.len())?;
    writeln!(
        writer,
        "Units: {} additives, {} water, {}",
        config.display.measurement_unit.label(),
        config.display.delivery_unit.label(),
        config.display.temperature_unit.label()
    )?;

    Ok(())
}
