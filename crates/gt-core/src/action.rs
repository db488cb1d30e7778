//! Timestamped events in a plant's history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stage::PlantStage;
use crate::strings::{StringKey, Strings};

/// An event recorded against a plant.
///
/// Serialized with a `type` discriminator matching the journal export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// A named grower task such as topping or flushing.
    #[serde(rename = "Action")]
    Empty(EmptyAction),
    /// A free-form note.
    Note(NoteAction),
    /// The plant moved to a new stage.
    StageChange(StageChange),
    /// The plant was watered or fed.
    Water(Water),
}

impl Action {
    /// When the action happened.
    pub const fn date(&self) -> DateTime<Utc> {
        match self {
            Self::Empty(a) => a.date,
            Self::Note(a) => a.date,
            Self::StageChange(a) => a.date,
            Self::Water(a) => a.date,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match self {
            Self::Empty(a) => a.notes.as_deref(),
            Self::Note(a) => a.notes.as_deref(),
            Self::StageChange(a) => a.notes.as_deref(),
            Self::Water(a) => a.notes.as_deref(),
        }
    }

    pub const fn as_stage_change(&self) -> Option<&StageChange> {
        match self {
            Self::StageChange(change) => Some(change),
            _ => None,
        }
    }

    pub const fn as_water(&self) -> Option<&Water> {
        match self {
            Self::Water(water) => Some(water),
            _ => None,
        }
    }
}

/// Grower tasks that carry no data beyond their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionName {
    Fim,
    Flush,
    FoliarFeed,
    Lst,
    Lollipop,
    PesticideApplication,
    Top,
    Transplanted,
    Trim,
}

impl ActionName {
    pub const ALL: [Self; 9] = [
        Self::Fim,
        Self::Flush,
        Self::FoliarFeed,
        Self::Lst,
        Self::Lollipop,
        Self::PesticideApplication,
        Self::Top,
        Self::Transplanted,
        Self::Trim,
    ];

    #[must_use]
    pub const fn label_key(self) -> StringKey {
        match self {
            Self::Fim => StringKey::ActionFim,
            Self::Flush => StringKey::ActionFlush,
            Self::FoliarFeed => StringKey::ActionFoliarFeed,
            Self::Lst => StringKey::ActionLst,
            Self::Lollipop => StringKey::ActionLollipop,
            Self::PesticideApplication => StringKey::ActionPesticideApplication,
            Self::Top => StringKey::ActionTopped,
            Self::Transplanted => StringKey::ActionTransplanted,
            Self::Trim => StringKey::ActionTrim,
        }
    }

    pub fn label<'a>(self, strings: &'a dyn Strings) -> &'a str {
        strings.get(self.label_key())
    }

    /// ARGB colour used to tag the action in timelines.
    #[must_use]
    pub const fn colour(self) -> u32 {
        match self {
            Self::Fim => 0x9AFF_CC80,
            Self::Flush => 0x9AFF_E082,
            Self::FoliarFeed => 0x9AE6_EE9C,
            Self::Lst => 0x9AFF_F59D,
            Self::Lollipop => 0x9AFF_D180,
            Self::PesticideApplication => 0x9AEF_9A9A,
            Self::Top => 0x9ABC_AAA4,
            Self::Transplanted => 0x9AFF_FF8D,
            Self::Trim => 0x9AFF_AB91,
        }
    }

    /// Printed labels of every action, in declaration order.
    pub fn names(strings: &dyn Strings) -> Vec<String> {
        Self::ALL
            .iter()
            .map(|name| name.label(strings).to_string())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionName>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteAction {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageChange {
    #[serde(default)]
    pub new_stage: PlantStage,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StageChange {
    pub const fn new(new_stage: PlantStage, date: DateTime<Utc>) -> Self {
        Self {
            new_stage,
            date,
            notes: None,
        }
    }
}

/// A watering or feeding.
///
/// Amounts are millilitres and temperatures degrees Celsius; conversion to
/// the user's units happens at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Water {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    /// pH of the runoff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runoff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    #[serde(default)]
    pub additives: Vec<Additive>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Water {
    /// A watering at `date` with no measurements.
    pub const fn at(date: DateTime<Utc>) -> Self {
        Self {
            ppm: None,
            ph: None,
            runoff: None,
            amount: None,
            temp: None,
            additives: Vec::new(),
            date,
            notes: None,
        }
    }

    /// Sum of all additive amounts, ignoring those without one.
    pub fn total_additives(&self) -> f64 {
        self.additives.iter().filter_map(|a| a.amount).sum()
    }
}

/// A nutrient or solution component and its dosage in millilitres per
/// delivery unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Additive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
