//! Status document printed by the `status` command

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    services::{Clock, Notifier, Scheduler, View},
    state::{Phase, TimerController},
};

/// Snapshot of the timer for the `status` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub phase: Phase,
    pub remaining_millis: u64,
    pub display: String,
    pub is_paused: bool,
    pub is_running: bool,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl StatusResponse {
    /// Capture the controller's current status
    pub fn from_controller<C, S, V, N>(controller: &TimerController<C, S, V, N>) -> Self
    where
        C: Clock,
        S: Scheduler,
        V: View,
        N: Notifier,
    {
        let state = controller.state();
        let (last_action, last_action_time) = controller.last_action();

        Self {
            phase: controller.phase(),
            remaining_millis: state.remaining_millis(),
            display: controller.screen().display.clone(),
            is_paused: state.is_paused(),
            is_running: state.is_running(),
            uptime: controller.uptime(),
            last_action,
            last_action_time,
            timestamp: Utc::now(),
        }
    }
}
