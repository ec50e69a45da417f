//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{messages::Locale, state::TimerSettings};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "A single-screen terminal countdown timer")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Seconds to count down from; typed into the input field and submitted at startup
    pub seconds: Option<String>,

    /// Delay between display refreshes in milliseconds
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Length of the completion alert in milliseconds
    #[arg(long, default_value = "500")]
    pub vibrate_ms: u64,

    /// Language for messages and button labels
    #[arg(short, long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Do not ring the terminal bell when the countdown finishes
    #[arg(long)]
    pub no_bell: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Countdown tunables derived from the flags
    pub fn settings(&self) -> TimerSettings {
        TimerSettings {
            tick_interval: Duration::from_millis(self.tick_ms),
            vibration: Duration::from_millis(self.vibrate_ms),
            locale: self.locale,
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_timer_settings() {
        let config = Config::try_parse_from(["countdown"]).unwrap();
        assert_eq!(config.seconds, None);
        assert_eq!(config.settings(), TimerSettings::default());
        assert_eq!(config.log_level(), "warn");
        assert!(!config.no_bell);
    }

    #[test]
    fn parses_all_flags() {
        let config = Config::try_parse_from([
            "countdown", "90", "--tick-ms", "100", "--vibrate-ms", "250", "--locale", "ru",
            "--no-bell", "-v",
        ])
        .unwrap();

        assert_eq!(config.seconds.as_deref(), Some("90"));
        let settings = config.settings();
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
        assert_eq!(settings.vibration, Duration::from_millis(250));
        assert_eq!(settings.locale, Locale::Ru);
        assert!(config.no_bell);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_tick_interval() {
        assert!(Config::try_parse_from(["countdown", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn seconds_are_kept_as_raw_text() {
        let config = Config::try_parse_from(["countdown", "abc"]).unwrap();
        assert_eq!(config.seconds.as_deref(), Some("abc"));
    }
}
