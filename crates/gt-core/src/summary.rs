//! Human-readable summaries of plants and waterings.
//!
//! Summaries are built for either an HTML-capable text view ([`Markup::Html`],
//! using `<b>`, `<br/>` and `&nbsp;`) or a terminal ([`Markup::Plain`]).

use chrono::{DateTime, Utc};

use crate::action::Water;
use crate::plant::Plant;
use crate::stage::PlantStage;
use crate::strings::{StringKey, Strings};
use crate::time::{TimeUnit, time_ago, to_days};
use crate::units::{DisplayPrefs, TempUnit, VolumeUnit, format_decimal, format_number};

/// Output flavour for rendered summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    #[default]
    Html,
    Plain,
}

impl Markup {
    fn bold(self, text: &str) -> String {
        match self {
            Self::Html => format!("<b>{text}</b>"),
            Self::Plain => text.to_string(),
        }
    }

    const fn line_break(self) -> &'static str {
        match self {
            Self::Html => "<br/>",
            Self::Plain => "\n",
        }
    }

    const fn indent(self) -> &'static str {
        match self {
            Self::Html => "&nbsp;&nbsp;&nbsp;&nbsp;",
            Self::Plain => "    ",
        }
    }

    /// Drops trailing whitespace and line breaks.
    fn trim_end(self, mut text: String) -> String {
        loop {
            let trimmed_len = text.trim_end().len();
            text.truncate(trimmed_len);
            match text.strip_suffix(self.line_break()) {
                Some(rest) => {
                    let len = rest.len();
                    text.truncate(len);
                }
                None => return text,
            }
        }
    }
}

/// Everything a summary needs besides the data itself.
#[derive(Clone, Copy)]
pub struct SummaryContext<'a> {
    pub strings: &'a dyn Strings,
    pub prefs: DisplayPrefs,
    pub markup: Markup,
    /// Reference time for "ago" phrases and for stages still in progress.
    pub now: DateTime<Utc>,
}

impl<'a> SummaryContext<'a> {
    pub fn new(strings: &'a dyn Strings, prefs: DisplayPrefs, now: DateTime<Utc>) -> Self {
        Self {
            strings,
            prefs,
            markup: Markup::default(),
            now,
        }
    }

    #[must_use]
    pub const fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    fn delivery(&self, ml: f64) -> String {
        let unit = self.prefs.delivery_unit;
        format!(
            "{}{}",
            format_decimal(VolumeUnit::Ml.convert(unit, ml)),
            unit.label()
        )
    }

    fn measurement(&self, ml: f64) -> String {
        let unit = self.prefs.measurement_unit;
        format!(
            "{}{}",
            format_decimal(VolumeUnit::Ml.convert(unit, ml)),
            unit.label()
        )
    }

    /// Additive dosage per delivery unit, whole amounts without a fraction.
    fn dosage(&self, ml: f64) -> String {
        let unit = self.prefs.measurement_unit;
        format!(
            "{}{}/{}",
            format_number(VolumeUnit::Ml.convert(unit, ml)),
            unit.label(),
            self.prefs.delivery_unit.label()
        )
    }
}

impl Plant {
    /// One- to three-line overview for plant lists.
    pub fn short_summary(&self, ctx: &SummaryContext<'_>) -> String {
        let m = ctx.markup;
        let mut summary = String::new();

        if self.stage() == PlantStage::Harvested {
            summary.push_str(ctx.strings.get(StringKey::Harvested));
            return summary;
        }

        let planted = time_ago(self.plant_date, ctx.now, TimeUnit::Day);
        summary.push_str(&m.bold(&planted.to_string()));
        summary.push_str(&self.stage_segment(ctx));

        if let Some(water) = self.last_water() {
            let ago = time_ago(water.date, ctx.now, TimeUnit::Year);
            summary.push_str(m.line_break());
            summary.push_str(&ctx.strings.format(StringKey::WateredAgo, &ago.formatted()));
            summary.push_str(m.line_break());
            summary.push_str(&water_levels(water, ctx));
        }

        m.trim_end(summary)
    }

    /// Detailed overview including strain and additive totals. The total is
    /// printed for every watering, `0.0` when nothing was added.
    pub fn long_summary(&self, ctx: &SummaryContext<'_>) -> String {
        let m = ctx.markup;
        let mut summary = String::new();

        if let Some(strain) = &self.strain {
            summary.push_str(strain);
            summary.push_str(" - ");
        }

        if self.stage() == PlantStage::Harvested {
            summary.push_str(ctx.strings.get(StringKey::Harvested));
            return m.trim_end(summary);
        }

        let planted = time_ago(self.plant_date, ctx.now, TimeUnit::Day);
        summary.push_str(&m.bold(
            &ctx.strings
                .format(StringKey::PlantedAgo, &planted.formatted()),
        ));
        summary.push_str(&self.stage_segment(ctx));

        if let Some(water) = self.last_water() {
            let ago = time_ago(water.date, ctx.now, TimeUnit::Year);
            summary.push_str(m.line_break());
            summary.push_str(m.line_break());
            summary.push_str(
                &ctx.strings
                    .format(StringKey::LastWateredAgo, &ago.formatted()),
            );
            summary.push_str(m.line_break());
            summary.push_str(&water_levels(water, ctx));

            summary = m.trim_end(summary);
            summary.push_str(m.line_break());
            summary.push_str(" + ");
            summary.push_str(&m.bold(&ctx.measurement(water.total_additives())));
            summary.push(' ');
            summary.push_str(ctx.strings.get(StringKey::Additives));
        }

        m.trim_end(summary)
    }

    /// `" / 12f"`: whole days in the current stage and its initial.
    fn stage_segment(&self, ctx: &SummaryContext<'_>) -> String {
        let stage = self.stage();
        self.calculate_stage_time(ctx.now)
            .get(&stage)
            .map(|time| {
                let label = format!("{}{}", to_days(*time), stage.initial(ctx.strings));
                format!(" / {}", ctx.markup.bold(&label))
            })
            .unwrap_or_default()
    }
}

/// `"6.2 pH ➙ 6.5 pH 1.5l"` for the headline of a watering.
fn water_levels(water: &Water, ctx: &SummaryContext<'_>) -> String {
    let m = ctx.markup;
    let mut out = String::new();

    if let Some(ph) = water.ph {
        out.push_str(&m.bold(&format!("{} pH", format_decimal(ph))));
        out.push(' ');

        if let Some(runoff) = water.runoff {
            out.push_str("➙ ");
            out.push_str(&m.bold(&format!("{} pH", format_decimal(runoff))));
            out.push(' ');
        }
    }

    if let Some(amount) = water.amount {
        out.push_str(&m.bold(&ctx.delivery(amount)));
    }

    out
}

impl Water {
    /// Full breakdown of a watering: pH, dissolved solids, amount,
    /// temperature and each additive's dosage.
    pub fn summary(&self, ctx: &SummaryContext<'_>) -> String {
        let m = ctx.markup;
        let strings = ctx.strings;
        let mut lines: Vec<String> = Vec::new();

        let mut levels = Vec::new();
        if let Some(ph) = self.ph {
            levels.push(format!(
                "{}{}",
                m.bold(strings.get(StringKey::SummaryPh)),
                format_decimal(ph)
            ));
        }
        if let Some(runoff) = self.runoff {
            levels.push(format!(
                "{}{}",
                m.bold(strings.get(StringKey::SummaryOutPh)),
                format_decimal(runoff)
            ));
        }
        if !levels.is_empty() {
            lines.push(levels.join(", "));
        }

        let mut feed = Vec::new();
        if let Some(ppm) = self.ppm {
            if ctx.prefs.tds_ec {
                feed.push(format!(
                    "{}{}",
                    m.bold("EC: "),
                    format_decimal(ppm * 2.0 / 1000.0)
                ));
            } else {
                feed.push(format!("{}{:.0}", m.bold("PPM: "), ppm.trunc()));
            }
        }
        if let Some(amount) = self.amount {
            feed.push(format!(
                "{}{}",
                m.bold(strings.get(StringKey::SummaryAmount)),
                ctx.delivery(amount)
            ));
        }
        if let Some(temp) = self.temp {
            let unit = ctx.prefs.temperature_unit;
            feed.push(format!(
                "{}{}º{}",
                m.bold(strings.get(StringKey::SummaryTemp)),
                format_decimal(TempUnit::Celsius.convert(unit, temp)),
                unit.label()
            ));
        }
        if !feed.is_empty() {
            lines.push(feed.join(", "));
        }

        let mut summary = lines.join(m.line_break());

        if !self.additives.is_empty() {
            if !summary.is_empty() {
                summary.push_str(m.line_break());
            }
            summary.push_str(&m.bold(strings.get(StringKey::SummaryAdditives)));

            for additive in &self.additives {
                let Some(amount) = additive.amount else {
                    continue;
                };
                summary.push_str(m.line_break());
                summary.push_str(m.indent());
                summary.push_str("• ");
                summary.push_str(additive.description.as_deref().unwrap_or_default());
                summary.push_str("  -  ");
                summary.push_str(&ctx.dosage(amount));
            }
        }

        summary
    }
}
