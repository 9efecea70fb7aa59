//! Environment configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODE_SWITCH_DELAY_MS: u64 = 500;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub content_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
    pub mode_switch_delay: Duration,
    pub suggestion_limit: usize,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            content_dir: env_string_opt("FOLIO_CONTENT_DIR").map(PathBuf::from),
            log_file: env_string_opt("FOLIO_LOG_FILE").map(PathBuf::from),
            debug: env_flag("FOLIO_DEBUG"),
            mode_switch_delay: Duration::from_millis(
                env_parse("FOLIO_MODE_SWITCH_DELAY_MS").unwrap_or(DEFAULT_MODE_SWITCH_DELAY_MS),
            ),
            suggestion_limit: env_parse("FOLIO_SUGGESTION_LIMIT")
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string_opt(key).and_then(|value| value.trim().parse().ok())
}
