//! Session loop: drives ticks, commands and screen rebuilds on one thread

use std::io::Write;
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};
use tracing::{debug, info};

use crate::{
    commands::{handle_command, Command, Flow},
    services::{Clock, LoopScheduler, Notifier, View},
    state::TimerController,
};

/// Everything the session loop reacts to besides the tick deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Command(Command),
    /// The terminal was resized; the screen is rebuilt
    Resized,
    Shutdown,
}

/// Run the countdown until quit, shutdown, or the event channel closes.
///
/// Ticks and events are handled strictly one at a time, so a reset or pause
/// is always observed by the next tick. Returns the controller so callers can
/// inspect the final state.
pub async fn run_session<C, V, N, F, W>(
    mut controller: TimerController<C, LoopScheduler, V, N>,
    mut events: mpsc::UnboundedReceiver<SessionEvent>,
    mut make_view: F,
    mut out: W,
) -> TimerController<C, LoopScheduler, V, N>
where
    C: Clock,
    V: View,
    N: Notifier,
    F: FnMut() -> V,
    W: Write,
{
    info!("Session started");

    loop {
        let deadline = controller.scheduler().deadline();

        tokio::select! {
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(handle) = controller.scheduler_mut().take_due(Instant::now()) {
                    controller.tick(handle);
                }
            }
            event = events.recv() => match event {
                Some(SessionEvent::Command(command)) => {
                    if handle_command(&mut controller, command, &mut out) == Flow::Quit {
                        info!("Quit requested");
                        break;
                    }
                }
                Some(SessionEvent::Resized) => {
                    debug!("Screen resized, rebuilding");
                    controller = controller.rebuild(make_view());
                }
                Some(SessionEvent::Shutdown) => {
                    info!("Shutdown signal received");
                    break;
                }
                None => {
                    debug!("Event channel closed");
                    break;
                }
            }
        }
    }

    info!("Session ended in phase {:?}", controller.phase());
    controller
}
