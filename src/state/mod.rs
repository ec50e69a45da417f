//! State management module
//! 
//! This module contains the countdown state, the screen model and the
//! controller that ties them together.

pub mod saved_state;
pub mod screen;
pub mod timer_controller;
pub mod timer_state;

// Re-export main types
pub use saved_state::SavedState;
pub use screen::{Button, ButtonId, InputField, Screen};
pub use timer_controller::{format_uptime, TimerController, TimerSettings};
pub use timer_state::{format_remaining, Phase, Progress, TimerState};
