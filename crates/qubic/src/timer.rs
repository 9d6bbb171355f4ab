//! Turn countdown that decides when a turn should be skipped.
//!
//! The timer owns no clock. The caller feeds it elapsed time at whatever
//! cadence it polls, and applies a skip to the game when it reports expiry.

use std::time::Duration;
use tracing::{debug, instrument};

/// Outcome of advancing the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Time remains on the current turn.
    Running(Duration),
    /// The turn ran out during this tick.
    Expired,
    /// The timer is disabled or has already fired for this turn.
    Idle,
}

/// Per-turn countdown.
#[derive(Debug, Clone)]
pub struct TurnTimer {
    limit: Duration,
    enabled: bool,
    elapsed: Duration,
    fired: bool,
}

impl TurnTimer {
    /// Creates a timer with the given per-turn limit.
    #[instrument]
    pub fn new(limit: Duration, enabled: bool) -> Self {
        Self {
            limit,
            enabled,
            elapsed: Duration::ZERO,
            fired: false,
        }
    }

    /// Per-turn limit.
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Whether the timer counts down at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Time left on the current turn, `None` when disabled.
    pub fn remaining(&self) -> Option<Duration> {
        self.enabled.then(|| self.limit.saturating_sub(self.elapsed))
    }

    /// Advances the countdown. Expiry is reported once per turn.
    pub fn tick(&mut self, elapsed: Duration) -> TimerEvent {
        if !self.enabled || self.fired {
            return TimerEvent::Idle;
        }
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.elapsed >= self.limit {
            self.fired = true;
            debug!(limit_secs = self.limit.as_secs(), "Turn timer expired");
            TimerEvent::Expired
        } else {
            TimerEvent::Running(self.limit - self.elapsed)
        }
    }

    /// Starts a fresh countdown for the next turn.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.fired = false;
    }
}
