//! Countdown - A single-screen terminal countdown timer
//! 
//! This library provides the countdown state machine, the controller that
//! keeps the screen in step with it, and the single-threaded session loop
//! that drives ticks, user commands and screen rebuilds.

pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use messages::Locale;
pub use state::{TimerController, TimerSettings};
pub use tasks::run_session;
