//! Persisted user preferences.
//!
//! Two values survive between sessions: the turn time limit and whether
//! the turn timer runs at all. They are stored as a small TOML file.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Shortest allowed turn limit, in seconds.
pub const MIN_TURN_SECS: u32 = 5;

/// Longest allowed turn limit, in seconds.
pub const MAX_TURN_SECS: u32 = 600;

/// User preferences for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Seconds each player has per turn.
    #[serde(default = "default_turn_time_limit")]
    turn_time_limit_secs: u32,

    /// Whether turns are timed.
    #[serde(default)]
    timer_enabled: bool,
}

#[instrument]
fn default_turn_time_limit() -> u32 {
    30
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            turn_time_limit_secs: default_turn_time_limit(),
            timer_enabled: false,
        }
    }
}

impl Preferences {
    /// Seconds each player has per turn.
    pub fn turn_time_limit_secs(&self) -> u32 {
        self.turn_time_limit_secs
    }

    /// Whether turns are timed.
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    /// Creates preferences, clamping the limit into the allowed range.
    #[instrument]
    pub fn new(turn_time_limit_secs: u32, timer_enabled: bool) -> Self {
        Self {
            turn_time_limit_secs: turn_time_limit_secs.clamp(MIN_TURN_SECS, MAX_TURN_SECS),
            timer_enabled,
        }
    }

    /// Returns a copy with the given overrides applied.
    #[instrument(skip(self))]
    pub fn with_overrides(self, time_limit: Option<u32>, timer_enabled: Option<bool>) -> Self {
        Self::new(
            time_limit.unwrap_or(self.turn_time_limit_secs),
            timer_enabled.unwrap_or(self.timer_enabled),
        )
    }

    /// Loads preferences from a TOML file; a missing file yields defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No preferences file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read preferences: {}", e)))?;
        let raw: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse preferences: {}", e)))?;
        let prefs = Self::new(raw.turn_time_limit_secs, raw.timer_enabled);

        info!(
            turn_time_limit_secs = prefs.turn_time_limit_secs,
            timer_enabled = prefs.timer_enabled,
            "Preferences loaded"
        );
        Ok(prefs)
    }

    /// Writes preferences to a TOML file, creating parent directories.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::new(format!("Failed to create directory: {}", e)))?;
        }
        let content = toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize preferences: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::new(format!("Failed to write preferences: {}", e)))?;
        info!("Preferences saved");
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(Preferences::new(1, true).turn_time_limit_secs(), MIN_TURN_SECS);
        assert_eq!(Preferences::new(10_000, true).turn_time_limit_secs(), MAX_TURN_SECS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let prefs: Preferences = toml::from_str("timer_enabled = true").unwrap();
        assert!(prefs.timer_enabled());
        assert_eq!(prefs.turn_time_limit_secs(), 30);
    }

    #[test]
    fn test_overrides() {
        let prefs = Preferences::default().with_overrides(Some(45), None);
        assert_eq!(prefs.turn_time_limit_secs(), 45);
        assert!(!prefs.timer_enabled());
    }
}
