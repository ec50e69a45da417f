//! Command module
//! 
//! This module turns lines typed on stdin into timer commands and applies
//! them to the controller.

pub mod handlers;
pub mod responses;

pub use handlers::{handle_command, Flow};
pub use responses::StatusResponse;

/// A single line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put text into the input field and submit it
    Submit(String),
    /// Click the start button with the current input
    Start,
    /// Click the pause/continue button
    TogglePause,
    /// Click the reset button
    Reset,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Interpret one input line. Blank lines carry no command.
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let command = match trimmed.to_lowercase().as_str() {
            "s" | "start" => Command::Start,
            "p" | "pause" | "c" | "continue" => Command::TogglePause,
            "r" | "reset" => Command::Reset,
            "status" => Command::Status,
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Submit(trimmed.to_string()),
        };
        Some(command)
    }
}
