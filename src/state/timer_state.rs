//! Countdown state and its transitions

use serde::{Deserialize, Serialize};

/// Externally visible phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Result of advancing the countdown by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Time is still left; carries the remaining milliseconds
    Remaining(u64),
    /// Paused, nothing was subtracted
    Frozen(u64),
    /// The countdown crossed zero on this tick
    Expired,
    /// No countdown is active
    Inactive,
}

/// Countdown state owned by the timer controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    remaining_millis: u64,
    is_paused: bool,
    is_running: bool,
    last_tick_timestamp: i64,
    completed: bool,
}

impl TimerState {
    /// Create an idle state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining_millis(&self) -> u64 {
        self.remaining_millis
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn last_tick_timestamp(&self) -> i64 {
        self.last_tick_timestamp
    }

    pub fn phase(&self) -> Phase {
        match (self.is_running, self.is_paused) {
            (true, true) => Phase::Paused,
            (true, false) => Phase::Running,
            _ if self.completed => Phase::Completed,
            _ => Phase::Idle,
        }
    }

    /// Begin a fresh countdown of `millis` at wall-clock time `now`
    pub fn start(&mut self, millis: u64, now: i64) {
        *self = Self {
            remaining_millis: millis,
            is_paused: false,
            is_running: true,
            last_tick_timestamp: now,
            completed: false,
        };
    }

    /// Subtract the wall-clock time elapsed since the previous tick.
    ///
    /// A clock that stepped backwards contributes no elapsed time.
    pub fn advance(&mut self, now: i64) -> Progress {
        if !self.is_running {
            return Progress::Inactive;
        }
        if self.is_paused {
            return Progress::Frozen(self.remaining_millis);
        }

        let delta = now.saturating_sub(self.last_tick_timestamp).max(0) as u64;
        self.remaining_millis = self.remaining_millis.saturating_sub(delta);
        self.last_tick_timestamp = now;

        if self.remaining_millis == 0 {
            self.is_running = false;
            self.is_paused = false;
            self.last_tick_timestamp = 0;
            self.completed = true;
            Progress::Expired
        } else {
            Progress::Remaining(self.remaining_millis)
        }
    }

    /// Freeze the countdown. Returns false when there was nothing to pause.
    pub fn pause(&mut self) -> bool {
        if !self.is_running || self.is_paused {
            return false;
        }
        self.is_paused = true;
        true
    }

    /// Unfreeze the countdown without charging the paused interval
    pub fn resume(&mut self, now: i64) -> bool {
        if !self.is_running || !self.is_paused {
            return false;
        }
        self.is_paused = false;
        self.last_tick_timestamp = now;
        true
    }

    /// Return to the idle baseline
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Re-enter a running (possibly paused) countdown after the screen was rebuilt
    pub fn resume_from_saved(&mut self, remaining_millis: u64, is_paused: bool, now: i64) {
        *self = Self {
            remaining_millis,
            is_paused,
            is_running: true,
            last_tick_timestamp: now,
            completed: false,
        };
    }
}

/// Format remaining time as `m:ss.mmm`
pub fn format_remaining(millis: u64) -> String {
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1_000;
    let millis = millis % 1_000;
    format!("{}:{:02}.{:03}", minutes, seconds, millis)
}
