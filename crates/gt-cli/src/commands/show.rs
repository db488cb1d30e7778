//! Show command: a plant's long summary, stage timeline and the feeding
//! schedule entry that applies to it today.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use gt_core::time::to_days;
use gt_core::{DisplayPrefs, English, Journal, Markup, Plant, SummaryContext, TimeUnit};

use super::util::{additive_line, indent, require_plant};

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

    writeln!(writer, "{} [{}]", plant.name, plant.id)?;
    let medium = plant.medium.label(&English);
    if plant.is_clone {
        writeln!(writer, "Medium: {medium} (clone)")?;
    } else {
        writeln!(writer, "Medium: {medium}")?;
    }
    if let Some(details) = &plant.medium_details {
        writeln!(writer, "Details: {details}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", plant.long_summary(&ctx))?;
    writeln!(writer)?;

    writeln!(writer, "Stages:")?;
    write_stage_lines(writer, plant, now)?;

    write_feeding(writer, journal, plant, prefs, now)?;

    Ok(())
}

/// Writes one line per stage, latest stage first.
pub(crate) fn write_stage_lines<W: Write>(
    writer: &mut W,
    plant: &Plant,
    now: DateTime<Utc>,
) -> Result<()> {
    for (stage, time) in plant.calculate_stage_time(now).iter().rev() {
        let days = to_days(*time);
        writeln!(
            writer,
            "  {:<12}{:>4} {}",
            stage.label(&English),
            days,
            TimeUnit::Day.label(days)
        )?;
    }
    Ok(())
}

fn write_feeding<W: Write>(
    writer: &mut W,
    journal: &Journal,
    plant: &Plant,
    prefs: DisplayPrefs,
    now: DateTime<Utc>,
) -> Result<()> {
    let stage = plant.stage();
    // Schedule days count from 1 on the day the stage starts.
    let day = plant.days_in_stage(now) + 1;

    for schedule in &journal.schedules {
        if let Some(entry) = schedule.entry_for(stage, day) {
            writeln!(writer)?;
            writeln!(writer, "Feeding ({}):", schedule.name)?;
            for additive in &entry.additives {
                writeln!(writer, "{}", indent(&additive_line(additive, prefs), "  "))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::commands::util::fixtures::{day, journal};

    fn render_at(key: &str, now: DateTime<Utc>, html: bool) -> Result<String> {
        let mut output = Vec::new();
        run(
            &mut output,
            &journal(),
            key,
            DisplayPrefs::default(),
            now,
            html,
        )?;
        Ok(String::from_utf8(output)?)
    }

    fn render(key: &str, html: bool) -> Result<String> {
        render_at(key, day(42), html)
    }

    #[test]
    fn show_command_plain() {
        assert_snapshot!(render("p1", false).unwrap(), @r"
        Blue Dream [p1]
        Medium: Soil

        Sativa - Planted 42 days ago / 12f

        Last watered 2 days ago
        6.2 pH 1.5l
         + 2.0ml additives

        Stages:
          Flowering     12 days
          Vegetation    30 days

        Feeding (Base):
          • Bloom  -  2ml/l
        ");
    }

    #[test]
    fn show_command_html_summary() {
        let output = render("Northern Lights", true).unwrap();
        assert!(output.contains("<b>Planted 32 days ago</b> / <b>0p</b>"), "{output}");
        assert!(output.contains("  Planted        0 days"), "{output}");
        assert!(!output.contains("Feeding"), "{output}");
    }

    #[test]
    fn feeding_day_one_is_first_day_of_stage() {
        // Flowering starts on day 30 and the schedule covers days 1-14.
        let first = render_at("p1", day(30), false).unwrap();
        assert!(first.contains("Feeding (Base):"), "{first}");

        let last = render_at("p1", day(43), false).unwrap();
        assert!(last.contains("Feeding (Base):"), "{last}");

        let after = render_at("p1", day(44), false).unwrap();
        assert!(!after.contains("Feeding"), "{after}");
    }

    #[test]
    fn show_command_unknown_plant() {
        assert!(render("p9", false).is_err());
    }
}
