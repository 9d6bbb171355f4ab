//! Command-line interface for qubic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Qubic - 4x4x4 tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "qubic")]
#[command(about = "Play 4x4x4 tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game at the prompt
    Play {
        /// Preferences file
        #[arg(long, default_value = "qubic.toml")]
        settings: PathBuf,

        /// Seconds per turn (overrides preferences for this game)
        #[arg(long)]
        time_limit: Option<u32>,

        /// Time each turn
        #[arg(long, conflicts_with = "no_timer")]
        timer: bool,

        /// Do not time turns
        #[arg(long)]
        no_timer: bool,
    },

    /// List the 76 winning lines in evaluation order
    Lines,

    /// Show or change saved preferences
    Settings {
        /// Preferences file
        #[arg(long, default_value = "qubic.toml")]
        settings: PathBuf,

        /// What to do with them
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Preference actions
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the current preferences
    Show,

    /// Update and save preferences
    Set {
        /// Seconds per turn
        #[arg(long)]
        time_limit: Option<u32>,

        /// Whether turns are timed
        #[arg(long)]
        timer: Option<bool>,
    },
}

impl Command {
    /// Timer override implied by `--timer` / `--no-timer`.
    pub fn timer_override(timer: bool, no_timer: bool) -> Option<bool> {
        match (timer, no_timer) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
