//! Widget model for the single timer screen

use crate::messages::{Locale, MessageId};

/// Identifies one of the three screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Start,
    Pause,
    Reset,
}

/// A clickable control whose label and availability the controller sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
    pub visible: bool,
}

impl Button {
    fn new(label: &str, visible: bool) -> Self {
        Self {
            label: label.to_string(),
            enabled: true,
            visible,
        }
    }

    /// Clicks only land on buttons that are shown and enabled
    pub fn is_clickable(&self) -> bool {
        self.visible && self.enabled
    }
}

/// Text entry for the countdown duration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub text: String,
    pub keyboard_visible: bool,
}

/// Everything a view needs to draw the timer screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub input: InputField,
    pub start: Button,
    pub pause: Button,
    pub reset: Button,
    pub display: String,
}

impl Screen {
    /// Initial layout: only the start control is shown
    pub fn new(locale: Locale) -> Self {
        Self {
            input: InputField::default(),
            start: Button::new(locale.text(MessageId::StartLabel), true),
            pause: Button::new(locale.text(MessageId::PauseLabel), false),
            reset: Button::new(locale.text(MessageId::ResetLabel), false),
            display: String::new(),
        }
    }

    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::Start => &self.start,
            ButtonId::Pause => &self.pause,
            ButtonId::Reset => &self.reset,
        }
    }

    /// Show pause/reset and lock the start control while counting down
    pub(crate) fn show_countdown_controls(&mut self) {
        self.start.enabled = false;
        self.pause.visible = true;
        self.reset.visible = true;
    }

    /// Hide pause/reset and make start available again
    pub(crate) fn show_idle_controls(&mut self) {
        self.start.enabled = true;
        self.pause.visible = false;
        self.reset.visible = false;
    }

    pub(crate) fn set_pause_label(&mut self, locale: Locale, paused: bool) {
        let id = if paused {
            MessageId::ContinueLabel
        } else {
            MessageId::PauseLabel
        };
        self.pause.label = locale.text(id).to_string();
    }
}
