//! Drawing the timer screen

use std::io::{self, Write};
use tracing::warn;

use crate::state::{Button, Screen};

/// Receives the screen model whenever the controller changes it
pub trait View {
    fn render(&mut self, screen: &Screen);
}

/// Redraws the whole screen on a single terminal line
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render(&mut self, screen: &Screen) {
        let line = format!("\r\x1b[2K{}", render_line(screen));
        if let Err(e) = self.out.write_all(line.as_bytes()).and_then(|_| self.out.flush()) {
            warn!("Failed to draw timer screen: {}", e);
        }
    }
}

/// Plain-text layout: display, then visible buttons. Disabled buttons use parentheses.
pub fn render_line(screen: &Screen) -> String {
    let buttons: Vec<String> = [&screen.start, &screen.pause, &screen.reset]
        .into_iter()
        .filter(|button| button.visible)
        .map(render_button)
        .collect();

    if screen.display.is_empty() {
        buttons.join(" ")
    } else {
        format!("{:>10}  {}", screen.display, buttons.join(" "))
    }
}

fn render_button(button: &Button) -> String {
    if button.enabled {
        format!("[{}]", button.label)
    } else {
        format!("({})", button.label)
    }
}
