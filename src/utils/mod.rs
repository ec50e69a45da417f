//! Utility functions module
//! 
//! This module contains utility functions used throughout the application.

pub mod runtime;
pub mod signals;

// Re-export main functions
pub use runtime::run_to_completion;
pub use signals::{forward_signals, session_signals};
