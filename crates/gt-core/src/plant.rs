//! Plants and the views derived from their action history.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::action::{Action, StageChange, Water};
use crate::stage::{PlantMedium, PlantStage};
use crate::time::to_days;
use crate::types::PlantId;

/// Time spent in each stage, keyed in lifecycle order.
pub type StageTimes = BTreeMap<PlantStage, Duration>;

/// A plant and its append-only history of actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub plant_date: DateTime<Utc>,
    /// Grown from a cutting rather than a seed.
    #[serde(default, rename = "clone")]
    pub is_clone: bool,
    #[serde(default)]
    pub medium: PlantMedium,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_details: Option<String>,
    /// Paths of photos taken of the plant.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<Action>,
}

/// Older exports write `null` for empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Plant {
    /// Creates a plant with a fresh ID and no history.
    pub fn new(name: impl Into<String>, plant_date: DateTime<Utc>) -> Self {
        Self {
            id: PlantId::generate(),
            name: name.into(),
            strain: None,
            plant_date,
            is_clone: false,
            medium: PlantMedium::default(),
            medium_details: None,
            images: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Appends an action to the history.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// The stage named by the most recent stage change, or `Planted` if the
    /// plant has never changed stage.
    pub fn stage(&self) -> PlantStage {
        self.actions
            .iter()
            .rev()
            .find_map(Action::as_stage_change)
            .map_or(PlantStage::Planted, |change| change.new_stage)
    }

    /// The most recent watering, if any.
    pub fn last_water(&self) -> Option<&Water> {
        self.actions.iter().rev().find_map(Action::as_water)
    }

    /// Waterings, newest first.
    pub fn waterings(&self) -> impl Iterator<Item = &Water> {
        self.actions.iter().rev().filter_map(Action::as_water)
    }

    /// Stage changes grouped by stage, most recently entered stage first.
    ///
    /// A stage entered more than once is positioned by its latest entry but
    /// reports its earliest one. A plant with no stage changes reports a
    /// single `Planted` change dated at the plant date.
    pub fn stages(&self) -> Vec<(PlantStage, StageChange)> {
        let mut stages: Vec<(PlantStage, StageChange)> = Vec::new();

        for change in self.actions.iter().rev().filter_map(Action::as_stage_change) {
            match stages.iter_mut().find(|(stage, _)| *stage == change.new_stage) {
                Some((_, existing)) => *existing = change.clone(),
                None => stages.push((change.new_stage, change.clone())),
            }
        }

        if stages.is_empty() {
            stages.push((
                PlantStage::Planted,
                StageChange::new(PlantStage::Planted, self.plant_date),
            ));
        }

        stages
    }

    /// Time spent in each stage the plant has entered.
    ///
    /// Each stage runs from its recorded start until the start of the next
    /// later stage; the latest stage runs until `now`, or until harvest if the
    /// plant was harvested. When a stage was entered more than once, the last
    /// entry counts, so going back to an earlier stage leaves it with a
    /// negative span.
    pub fn calculate_stage_time(&self, now: DateTime<Utc>) -> StageTimes {
        let mut starts: BTreeMap<PlantStage, DateTime<Utc>> = BTreeMap::new();
        let mut end = now;

        for change in self.actions.iter().filter_map(Action::as_stage_change) {
            starts.insert(change.new_stage, change.date);
            if change.new_stage == PlantStage::Harvested {
                end = change.date;
            }
        }

        if starts.is_empty() {
            return BTreeMap::from([(PlantStage::Planted, Duration::zero())]);
        }

        let mut times = StageTimes::new();
        let mut next_start = end;
        for (stage, start) in starts.into_iter().rev() {
            times.insert(stage, next_start - start);
            next_start = start;
        }

        times
    }

    /// Whole days spent in the current stage so far, never below zero.
    pub fn days_in_stage(&self, now: DateTime<Utc>) -> i64 {
        self.calculate_stage_time(now)
            .get(&self.stage())
            .copied()
            .map_or(0, to_days)
    }
}
