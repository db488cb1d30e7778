//! Schedules command for listing feeding schedules in display order.

use std::io::Write;

use anyhow::Result;
use gt_core::{DisplayPrefs, English, FeedingSchedule, FeedingScheduleDate, Journal};

use super::util::{additive_line, indent};

pub fn run<W: Write>(
    writer: &mut W,
    journal: &Journal,
    prefs: DisplayPrefs,
    json: bool,
) -> Result<()> {
    if json {
        let sorted: Vec<FeedingSchedule> = journal
            .schedules
            .iter()
            .cloned()
            .map(|mut schedule| {
                schedule.sort_schedules();
                schedule
            })
            .collect();
        serde_json::to_writer_pretty(&mut *writer, &sorted)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "SCHEDULES ({})", journal.schedules.len())?;

    if journal.schedules.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No feeding schedules in journal.")?;
        return Ok(());
    }

    for schedule in &journal.schedules {
        writeln!(writer)?;
        if schedule.description.is_empty() {
            writeln!(writer, "{}", schedule.name)?;
        } else {
            writeln!(writer, "{} - {}", schedule.name, schedule.description)?;
        }

        for entry in schedule.schedules() {
            writeln!(writer, "  {}", describe_entry(entry))?;
            for additive in &entry.additives {
                writeln!(writer, "{}", indent(&additive_line(additive, prefs), "    "))?;
            }
        }
    }

    Ok(())
}

/// `"Seedling-Vegetation, days 1-7"`.
fn describe_entry(entry: &FeedingScheduleDate) -> String {
    let stages = match (entry.stage_range.first(), entry.stage_range.last()) {
        (Some(start), Some(end)) if start == end => start.label(&English).to_string(),
        (Some(start), Some(end)) => {
            format!("{}-{}", start.label(&English), end.label(&English))
        }
        _ => "Any stage".to_string(),
    };
    let days = match (entry.date_range.first(), entry.date_range.last()) {
        (Some(start), Some(end)) if start == end => format!("day {start}"),
        (Some(start), Some(end)) => format!("days {start}-{end}"),
        _ => "any day".to_string(),
    };
    format!("{stages}, {days}")
}
