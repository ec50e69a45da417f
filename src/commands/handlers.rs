//! Command handlers

use std::io::Write;
use tracing::{debug, warn};

use crate::{
    messages::MessageId,
    services::{Clock, Notifier, Scheduler, View},
    state::{ButtonId, TimerController},
};
use super::{responses::StatusResponse, Command};

/// Whether the session should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the controller. Text output (status, help) goes to `out`.
pub fn handle_command<C, S, V, N, W>(
    controller: &mut TimerController<C, S, V, N>,
    command: Command,
    out: &mut W,
) -> Flow
where
    C: Clock,
    S: Scheduler,
    V: View,
    N: Notifier,
    W: Write,
{
    debug!("Handling command {:?}", command);

    match command {
        Command::Submit(text) => {
            controller.set_input_text(text);
            controller.submit_input();
        }
        Command::Start => {
            controller.press(ButtonId::Start);
        }
        Command::TogglePause => {
            controller.press(ButtonId::Pause);
        }
        Command::Reset => {
            controller.press(ButtonId::Reset);
        }
        Command::Status => {
            let status = StatusResponse::from_controller(controller);
            match serde_json::to_string_pretty(&status) {
                Ok(json) => write_block(out, &json),
                Err(e) => warn!("Failed to serialize status: {}", e),
            }
            controller.redraw();
        }
        Command::Help => {
            write_block(out, controller.text(MessageId::Help));
            controller.redraw();
        }
        Command::Quit => return Flow::Quit,
    }

    Flow::Continue
}

fn write_block<W: Write>(out: &mut W, text: &str) {
    if let Err(e) = writeln!(out, "\r\x1b[2K{}", text).and_then(|_| out.flush()) {
        warn!("Failed to write command output: {}", e);
    }
}
