//! Transient messages and completion alerts

use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

/// Non-blocking user notifications
pub trait Notifier {
    /// Show a short message that does not block input
    fn show_transient_message(&mut self, text: &str);

    /// Pulse the device for `duration`
    fn vibrate(&mut self, duration: Duration);
}

/// Terminal notifier: messages go on their own line, vibration rings the bell
#[derive(Debug)]
pub struct TerminalNotifier<W: Write> {
    out: W,
    bell: bool,
}

impl TerminalNotifier<io::Stdout> {
    pub fn stdout(bell: bool) -> Self {
        Self::new(io::stdout(), bell)
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W, bell: bool) -> Self {
        Self { out, bell }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, bytes: &[u8]) {
        if let Err(e) = self.out.write_all(bytes).and_then(|_| self.out.flush()) {
            warn!("Failed to write notification: {}", e);
        }
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn show_transient_message(&mut self, text: &str) {
        // Clear the countdown line first so the message is not appended to it
        let line = format!("\r\x1b[2K{}\n", text);
        self.write(line.as_bytes());
    }

    fn vibrate(&mut self, duration: Duration) {
        debug!("Vibrate for {}ms (bell={})", duration.as_millis(), self.bell);
        if self.bell {
            self.write(b"\x07");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_written_on_a_cleared_line() {
        let mut notifier = TerminalNotifier::new(Vec::new(), true);
        notifier.show_transient_message("Time's up!");
        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(out, "\r\x1b[2KTime's up!\n");
    }

    #[test]
    fn vibration_rings_the_bell_unless_disabled() {
        let mut loud = TerminalNotifier::new(Vec::new(), true);
        loud.vibrate(Duration::from_millis(500));
        assert_eq!(loud.into_inner(), b"\x07");

        let mut quiet = TerminalNotifier::new(Vec::new(), false);
        quiet.vibrate(Duration::from_millis(500));
        assert!(quiet.into_inner().is_empty());
    }
}
