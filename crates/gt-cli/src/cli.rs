//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Grow journal viewer.
///
/// Reads a journal exported from the grow tracker and prints plant summaries,
/// stage timelines and feeding schedules.
#[derive(Debug, Parser)]
#[command(name = "gt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Journal directory, overriding the configured one.
    #[arg(short, long, global = true)]
    pub journal: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the journal location and what it contains.
    Status,

    /// List plants with a short summary each.
    Plants {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a plant's detailed summary and stage timeline.
    Show {
        /// Plant ID or name.
        plant: String,

        /// Render with HTML markup instead of plain text.
        #[arg(long)]
        html: bool,
    },

    /// List a plant's waterings, newest first.
    Waterings {
        /// Plant ID or name.
        plant: String,

        /// Render with HTML markup instead of plain text.
        #[arg(long)]
        html: bool,
    },

    /// Show how long a plant spent in each stage.
    Stages {
        /// Plant ID or name.
        plant: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List feeding schedules in display order.
    Schedules {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List gardens and the plants in them.
    Gardens,
}
