//! User-facing text, keyed by identifier and resolved per locale

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Every piece of text the timer shows to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    InvalidNumber,
    TimesUp,
    Finished,
    StartLabel,
    PauseLabel,
    ContinueLabel,
    ResetLabel,
    Help,
}

impl Locale {
    /// Resolve a message for this locale
    pub fn text(self, id: MessageId) -> &'static str {
        match self {
            Locale::En => english(id),
            Locale::Ru => russian(id),
        }
    }
}

fn english(id: MessageId) -> &'static str {
    match id {
        MessageId::InvalidNumber => "Invalid number input",
        MessageId::TimesUp => "Time's up!",
        MessageId::Finished => "Finished",
        MessageId::StartLabel => "Start",
        MessageId::PauseLabel => "Pause",
        MessageId::ContinueLabel => "Continue",
        MessageId::ResetLabel => "Reset",
        MessageId::Help => concat!(
            "Type a number of seconds and press Enter to start.\n",
            "  s, start     start with the current input\n",
            "  p, pause     pause or continue (also c, continue)\n",
            "  r, reset     stop and clear the countdown\n",
            "  status       print the timer status as JSON\n",
            "  ?, help      show this help\n",
            "  q, quit      exit (also exit)",
        ),
    }
}

fn russian(id: MessageId) -> &'static str {
    match id {
        MessageId::InvalidNumber => "Неверный ввод числа",
        MessageId::TimesUp => "Время вышло!",
        MessageId::Finished => "Конец!",
        MessageId::StartLabel => "Старт",
        MessageId::PauseLabel => "Пауза",
        MessageId::ContinueLabel => "Продолжить",
        MessageId::ResetLabel => "Сброс",
        MessageId::Help => concat!(
            "Введите число секунд и нажмите Enter для запуска.\n",
            "  s, start     запуск с текущим вводом\n",
            "  p, pause     пауза или продолжение (также c, continue)\n",
            "  r, reset     остановить и сбросить таймер\n",
            "  status       вывести состояние таймера в JSON\n",
            "  ?, help      показать эту справку\n",
            "  q, quit      выход (также exit)",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MessageId; 8] = [
        MessageId::InvalidNumber,
        MessageId::TimesUp,
        MessageId::Finished,
        MessageId::StartLabel,
        MessageId::PauseLabel,
        MessageId::ContinueLabel,
        MessageId::ResetLabel,
        MessageId::Help,
    ];

    #[test]
    fn every_message_is_translated() {
        for id in ALL {
            assert!(!Locale::En.text(id).is_empty(), "{:?} missing in en", id);
            assert!(!Locale::Ru.text(id).is_empty(), "{:?} missing in ru", id);
            assert_ne!(Locale::En.text(id), Locale::Ru.text(id));
        }
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default().text(MessageId::Finished), "Finished");
    }
}
