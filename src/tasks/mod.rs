//! Background tasks module
//! 
//! This module contains the session loop and the tasks that feed it events.

pub mod input_reader;
pub mod session;

// Re-export main functions
pub use input_reader::read_commands;
pub use session::{run_session, SessionEvent};
