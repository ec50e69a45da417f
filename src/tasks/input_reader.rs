//! Reads user commands from a line-oriented input

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, warn};

use crate::commands::Command;
use super::session::SessionEvent;

/// Forward each non-blank line as a command until input ends.
///
/// End of input only stops reading; a running countdown keeps going.
pub async fn read_commands<R>(reader: R, tx: mpsc::UnboundedSender<SessionEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let Some(command) = Command::parse(&line) else {
                    continue;
                };
                if tx.send(SessionEvent::Command(command)).is_err() {
                    debug!("Session gone, stopping input reader");
                    break;
                }
            }
            Ok(None) => {
                debug!("Input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_parsed_lines_and_skips_blanks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        read_commands(&b"5\n\n p \nquit\n"[..], tx).await;

        assert_eq!(
            rx.recv().await,
            Some(SessionEvent::Command(Command::Submit("5".to_string())))
        );
        assert_eq!(rx.recv().await, Some(SessionEvent::Command(Command::TogglePause)));
        assert_eq!(rx.recv().await, Some(SessionEvent::Command(Command::Quit)));
        assert_eq!(rx.recv().await, None);
    }
}
