//! CLI subcommand implementations.

pub mod gardens;
pub mod plants;
pub mod schedules;
pub mod show;
pub mod stages;
pub mod status;
pub mod waterings;

mod util;
