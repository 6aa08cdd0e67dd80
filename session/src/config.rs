//! Session configuration.

use quill_core::{IdGenerator, SequentialIds, UuidIds};
use quill_store::Store;
use quill_subscription::{DEFAULT_CAPACITY, MAX_CAPACITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How new record ids are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Uuid,
    /// "1", "2", "3", ... in creation order.
    Sequential,
}

impl IdStrategy {
    /// A generator whose ids do not collide with those already in `existing`.
    pub fn generator(self, existing: &Store) -> Box<dyn IdGenerator + Send> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => {
                let first = existing
                    .highest_numeric_id()
                    .map_or(1, |id| id.saturating_add(1));
                Box::new(SequentialIds::starting_at(first))
            }
        }
    }
}

/// Session settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Comment events buffered per post before slow subscribers lag.
    pub event_capacity: usize,
    pub id_strategy: IdStrategy,
    /// `tracing` filter directive used by [`crate::telemetry`].
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_CAPACITY,
            id_strategy: IdStrategy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 || self.event_capacity > MAX_CAPACITY {
            return Err(ConfigError::invalid(
                "event_capacity",
                format!("must be between 1 and {MAX_CAPACITY}"),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::invalid("log_level", "must not be empty"));
        }
        Ok(())
    }
}

/// Errors loading a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}
