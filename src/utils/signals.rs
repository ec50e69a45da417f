//! Signal handling for shutdown and screen rebuilds

use std::io;

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM, SIGWINCH};
use signal_hook_tokio::Signals;
use tokio::sync::mpsc;
use tracing::info;

use crate::tasks::SessionEvent;

/// Register the signals the session reacts to
pub fn session_signals() -> io::Result<Signals> {
    Signals::new([SIGTERM, SIGINT, SIGWINCH])
}

/// Map a raw signal number onto a session event
pub fn signal_event(signal: i32) -> SessionEvent {
    match signal {
        SIGWINCH => SessionEvent::Resized,
        _ => SessionEvent::Shutdown,
    }
}

/// Forward signals (SIGTERM, SIGINT, SIGWINCH) to the session
pub async fn forward_signals(mut signals: Signals, tx: mpsc::UnboundedSender<SessionEvent>) {
    while let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
        if tx.send(signal_event(signal)).is_err() {
            break;
        }
    }
}
