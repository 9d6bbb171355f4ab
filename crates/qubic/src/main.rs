//! Qubic - 4x4x4 tic-tac-toe
//!
//! Terminal play, line listing, and preference management.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SettingsAction};
use qubic::{Preferences, Session};
use qubic_core::{LineFamily, winning_lines};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            settings,
            time_limit,
            timer,
            no_timer,
        } => run_play(&settings, time_limit, Command::timer_override(timer, no_timer)),
        Command::Lines => {
            print_lines();
            Ok(())
        }
        Command::Settings { settings, action } => run_settings(&settings, action),
    }
}

/// Play a game on stdin/stdout
#[instrument(skip(settings), fields(settings = %settings.display()))]
fn run_play(settings: &Path, time_limit: Option<u32>, timer: Option<bool>) -> Result<()> {
    let prefs = Preferences::load(settings)?.with_overrides(time_limit, timer);
    info!(?prefs, "Starting game");

    let mut session = Session::new(prefs);
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())
}

/// Print every winning line with its family
fn print_lines() {
    for (i, line) in winning_lines().iter().enumerate() {
        let family = LineFamily::of_index(i).map(|f| f.to_string()).unwrap_or_default();
        let cells: Vec<String> = line.iter().map(|p| p.to_string()).collect();
        println!("{:>2}  {:<19} {}", i, family, cells.join(" "));
    }
}

/// Show or update saved preferences
#[instrument(skip(settings), fields(settings = %settings.display()))]
fn run_settings(settings: &Path, action: SettingsAction) -> Result<()> {
    let prefs = Preferences::load(settings)?;
    match action {
        SettingsAction::Show => {}
        SettingsAction::Set { time_limit, timer } => {
            let updated = prefs.with_overrides(time_limit, timer);
            updated.save(settings)?;
            return print_prefs(&updated);
        }
    }
    print_prefs(&prefs)
}

fn print_prefs(prefs: &Preferences) -> Result<()> {
    print!("{}", toml::to_string(prefs)?);
    Ok(())
}
