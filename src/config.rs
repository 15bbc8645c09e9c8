use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";
pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when logging is switched off with `QUIZ_LOG_FILE=off`.
    pub log_file: Option<PathBuf>,
    /// Redraw interval of the event loop. Never affects quiz state.
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            tick: DEFAULT_TICK,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("QUIZ_LOG_FILE") {
            let value = value.trim();
            config.log_file = if value.eq_ignore_ascii_case("off") {
                None
            } else if value.is_empty() {
                config.log_file
            } else {
                Some(PathBuf::from(value))
            };
        }

        if let Some(ms) = lookup("QUIZ_TICK_MS").and_then(|v| v.trim().parse::<u64>().ok())
            && ms > 0
        {
            config.tick = Duration::from_millis(ms);
        }

        config
    }
}
