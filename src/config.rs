#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{Level, metadata::LevelFilter};

/// Environment variable selecting the output format of `grade-vocab`.
pub const FORMAT_ENV: &str = "GRADE_VOCAB_FORMAT";

/// Environment variable selecting the log level of `grade-vocab`.
pub const LOG_ENV: &str = "GRADE_VOCAB_LOG";

/// How the inspection binary renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human readable tables.
    #[default]
    Table,
    /// Pretty printed JSON.
    Json,
}

/// Parses the optional output format value, defaulting to
/// `OutputFormat::Table` when unset or unrecognised.
fn parse_output_format(val: Option<String>) -> OutputFormat {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("table")
    {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    }
}

/// Parses the optional log level value, defaulting to `Level::INFO` when
/// unset or unrecognised.
fn parse_log_level(val: Option<String>) -> Level {
    val.and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// Settings read from the environment once per process.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Default output format.
    format:    OutputFormat,
    /// Minimum level for emitted log events.
    log_level: Level,
}

impl ConfigState {
    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format:    parse_output_format(lookup(FORMAT_ENV)),
            log_level: parse_log_level(lookup(LOG_ENV)),
        }
    }

    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Returns the configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the log level as a subscriber filter.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_level(self.log_level)
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<ConfigState> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> &'static ConfigState {
    CONFIG_SLOT.get_or_init(ConfigState::from_env)
}
