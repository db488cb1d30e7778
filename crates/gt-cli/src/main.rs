use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gt_cli::commands::{gardens, plants, schedules, show, stages, status, waterings};
use gt_cli::{Cli, Commands, Config};
use gt_core::Journal;

/// Load config and read the journal it points at.
fn open_journal(config_path: Option<&Path>, journal_dir: Option<&Path>) -> Result<(Journal, Config)> {
    let mut config = Config::load_from(config_path).context("failed to load configuration")?;
    if let Some(dir) = journal_dir {
        config.journal_dir = dir.to_path_buf();
    }
    tracing::debug!(?config, "loaded configuration");

    let journal = Journal::from_json_dir(&config.journal_dir).with_context(|| {
        format!("failed to read journal in {}", config.journal_dir.display())
    })?;
    Ok((journal, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let (journal, config) = open_journal(cli.config.as_deref(), cli.journal.as_deref())?;
    let prefs = config.display;
    let now = Utc::now();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Status => status::run(&mut out, &config, &journal)?,
        Commands::Plants { json } => plants::run(&mut out, &journal, prefs, now, *json)?,
        Commands::Show { plant, html } => show::run(&mut out, &journal, plant, prefs, now, *html)?,
        Commands::Waterings { plant, html } => {
            waterings::run(&mut out, &journal, plant, prefs, now, *html)?;
        }
        Commands::Stages { plant, json } => stages::run(&mut out, &journal, plant, now, *json)?,
        Commands::Schedules { json } => schedules::run(&mut out, &journal, prefs, *json)?,
        Commands::Gardens => gardens::run(&mut out, &journal)?,
    }

    out.flush()?;
    Ok(())
}
