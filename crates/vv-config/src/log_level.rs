use crate::DEFAULT_LOG_LEVEL;

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Configured log verbosity.
///
/// Parsing never fails: an unknown or non-string value in `config.toml` or
/// `VV_LOG_LEVEL` falls back to the default level rather than aborting
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    pub fn parse_lenient(s: &str) -> Self {
        Self(LevelFilter::from_str(s.trim()).unwrap_or(DEFAULT_LOG_LEVEL))
    }

    /// One step more verbose per `steps`, capped at trace. Used for `-v`.
    pub fn raised_by(self, steps: u8) -> Self {
        let raised = LevelFilter::iter()
            .skip_while(|level| *level != self.0)
            .nth(usize::from(steps))
            .unwrap_or(LevelFilter::Trace);
        Self(raised)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)
            .map(|s| Self::parse_lenient(&s))
            .unwrap_or_default())
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().to_lowercase())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
