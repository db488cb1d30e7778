//! Feeding schedules: which additives to use at which stage and day.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::action::Additive;
use crate::stage::PlantStage;
use crate::types::{ScheduleDateId, ScheduleId, ValidationError};

/// A named feeding plan made of dated entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingSchedule {
    pub id: ScheduleId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "schedules")]
    entries: Vec<FeedingScheduleDate>,
}

impl FeedingSchedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ScheduleId::generate(),
            name: name.into(),
            description: String::new(),
            entries: Vec::new(),
        }
    }

    /// Entries in display order: by the first stage of their stage range,
    /// then by the first day of their date range.
    pub fn schedules(&self) -> Vec<&FeedingScheduleDate> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.display_cmp(b));
        entries
    }

    /// Reorders the stored entries into display order.
    pub fn sort_schedules(&mut self) {
        self.entries.sort_by(FeedingScheduleDate::display_cmp);
    }

    pub fn push(&mut self, entry: FeedingScheduleDate) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry, in display order, that applies to `day` of `stage`.
    /// Days are numbered from 1, the day the stage started.
    pub fn entry_for(&self, stage: PlantStage, day: i64) -> Option<&FeedingScheduleDate> {
        self.schedules()
            .into_iter()
            .find(|entry| entry.covers(stage, day))
    }
}

/// One entry of a feeding schedule.
///
/// Both ranges hold either a single value or a start and an end, inclusive.
/// `date_range` counts days since the start of the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingScheduleDate {
    pub id: ScheduleDateId,
    #[serde(default)]
    pub date_range: Vec<i64>,
    #[serde(default)]
    pub stage_range: Vec<PlantStage>,
    #[serde(default)]
    pub additives: Vec<Additive>,
}

impl FeedingScheduleDate {
    /// Creates an entry, checking that each range has one or two values.
    pub fn new(
        date_range: Vec<i64>,
        stage_range: Vec<PlantStage>,
        additives: Vec<Additive>,
    ) -> Result<Self, ValidationError> {
        check_range_len("date range", date_range.len())?;
        check_range_len("stage range", stage_range.len())?;
        Ok(Self {
            id: ScheduleDateId::generate(),
            date_range,
            stage_range,
            additives,
        })
    }

    pub fn first_stage(&self) -> Option<PlantStage> {
        self.stage_range.first().copied()
    }

    pub fn first_day(&self) -> Option<i64> {
        self.date_range.first().copied()
    }

    /// Whether the entry applies to `day` of `stage`.
    ///
    /// Entries with an empty range never apply.
    pub fn covers(&self, stage: PlantStage, day: i64) -> bool {
        let stages = match (self.stage_range.first(), self.stage_range.last()) {
            (Some(start), Some(end)) => *start <= stage && stage <= *end,
            _ => false,
        };
        let days = match (self.date_range.first(), self.date_range.last()) {
            (Some(start), Some(end)) => *start <= day && day <= *end,
            _ => false,
        };
        stages && days
    }

    /// Entries with empty ranges sort before all others.
    fn display_cmp(&self, other: &Self) -> Ordering {
        self.first_stage()
            .cmp(&other.first_stage())
            .then_with(|| self.first_day().cmp(&other.first_day()))
    }
}

const fn check_range_len(field: &'static str, len: usize) -> Result<(), ValidationError> {
    if len == 1 || len == 2 {
        Ok(())
    } else {
        Err(ValidationError::RangeLength { field, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(days: &[i64], stages: &[PlantStage]) -> FeedingScheduleDate {
        FeedingScheduleDate::new(days.to_vec(), stages.to_vec(), Vec::new()).unwrap()
    }

    #[test]
    fn schedules_sort_by_stage_then_day() {
        let mut schedule = FeedingSchedule::new("Base");
        schedule.push(entry(&[8, 14], &[PlantStage::Flower]));
        schedule.push(entry(&[1, 7], &[PlantStage::Vegetation, PlantStage::Flower]));
        schedule.push(entry(&[1, 7], &[PlantStage::Flower]));
        schedule.push(entry(&[1], &[PlantStage::Seedling]));

        let order: Vec<_> = schedule
            .schedules()
            .iter()
            .map(|e| (e.first_stage().unwrap(), e.first_day().unwrap()))
            .collect();
        assert_eq!(
            order,
            vec![
                (PlantStage::Seedling, 1),
                (PlantStage::Vegetation, 1),
                (PlantStage::Flower, 1),
                (PlantStage::Flower, 8),
            ]
        );
    }

    #[test]
    fn sort_schedules_reorders_storage() {
        let mut schedule = FeedingSchedule::new("Base");
        schedule.push(entry(&[5], &[PlantStage::Flower]));
        schedule.push(entry(&[5], &[PlantStage::Germination]));
        schedule.sort_schedules();

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["schedules"][0]["stageRange"][0], "GERMINATION");
        assert_eq!(json["schedules"][1]["stageRange"][0], "FLOWER");
    }

    #[test]
    fn empty_ranges_sort_first_and_never_apply() {
        let json = r#"{
            "id": "s1",
            "name": "Odd",
            "schedules": [
                {"id": "a", "dateRange": [1, 7], "stageRange": ["SEEDLING"]},
                {"id": "b", "dateRange": [], "stageRange": []}
            ]
        }"#;
        let schedule: FeedingSchedule = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = schedule.schedules().iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(
            schedule
                .entry_for(PlantStage::Seedling, 3)
                .map(|e| e.id.as_str()),
            Some("a")
        );
    }

    #[test]
    fn covers_uses_inclusive_ranges() {
        let ranged = entry(&[1, 7], &[PlantStage::Vegetation, PlantStage::Flower]);
        assert!(ranged.covers(PlantStage::Vegetation, 1));
        assert!(ranged.covers(PlantStage::Flower, 7));
        assert!(!ranged.covers(PlantStage::Flower, 8));
        assert!(!ranged.covers(PlantStage::Seedling, 3));

        let point = entry(&[3], &[PlantStage::Seedling]);
        assert!(point.covers(PlantStage::Seedling, 3));
        assert!(!point.covers(PlantStage::Seedling, 4));
    }

    #[test]
    fn entry_for_prefers_display_order() {
        let mut schedule = FeedingSchedule::new("Base");
        schedule.push(entry(&[1, 14], &[PlantStage::Flower]));
        schedule.push(entry(&[1, 14], &[PlantStage::Vegetation, PlantStage::Flower]));

        let found = schedule.entry_for(PlantStage::Flower, 2).unwrap();
        assert_eq!(found.first_stage(), Some(PlantStage::Vegetation));
        assert!(schedule.entry_for(PlantStage::Drying, 2).is_none());
    }

    #[test]
    fn new_rejects_bad_range_lengths() {
        let err = FeedingScheduleDate::new(vec![1, 2, 3], vec![PlantStage::Flower], Vec::new())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::RangeLength {
                field: "date range",
                len: 3
            }
        );
        assert!(FeedingScheduleDate::new(vec![1], Vec::new(), Vec::new()).is_err());
    }
}
