//! Gardens command for listing gardens and the plants they hold.

use std::io::Write;

use anyhow::Result;
use gt_core::{English, Journal};

pub fn run<W: Write>(writer: &mut W, journal: &Journal) -> Result<()> {
    if journal.gardens.is_empty() {
        writeln!(writer, "No gardens in journal.")?;
        return Ok(());
    }

    for (index, garden) in journal.gardens.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        let plants: Vec<_> = journal.garden_plants(garden).collect();
        let noun = if plants.len() == 1 { "plant" } else { "plants" };
        writeln!(writer, "{} ({} {noun})", garden.name, plants.len())?;
        for plant in plants {
            writeln!(
                writer,
                "  - {} [{}] - {}",
                plant.name,
                plant.id,
                plant.stage().label(&English)
            )?;
        }
    }

    Ok(())
}
