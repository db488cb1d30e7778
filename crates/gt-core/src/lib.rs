//! Core domain logic for the grow journal.
//!
//! This crate contains the fundamental types and logic for:
//! - Plants and their append-only action history
//! - Stage timelines: current stage and time spent per stage
//! - Feeding schedules and their display ordering
//! - Summaries rendered through a replaceable string catalogue

pub mod action;
pub mod journal;
pub mod plant;
pub mod schedule;
pub mod stage;
pub mod strings;
pub mod summary;
pub mod time;
pub mod types;
pub mod units;

pub use action::{Action, ActionName, Additive, EmptyAction, NoteAction, StageChange, Water};
pub use journal::{Garden, Journal, JournalError};
pub use plant::{Plant, StageTimes};
pub use schedule::{FeedingSchedule, FeedingScheduleDate};
pub use stage::{PlantMedium, PlantStage};
pub use strings::{English, StringKey, Strings};
pub use summary::{Markup, SummaryContext};
pub use time::{TimeAgo, TimeUnit, time_ago};
pub use types::{PlantId, ScheduleDateId, ScheduleId, ValidationError};
pub use units::{DisplayPrefs, TempUnit, VolumeUnit};
