use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;
use crate::tag::SKIP_MARKER;

/// Projector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Fail on values no dispatch rule matches instead of skipping them
    pub strict: bool,
    /// Tag that excludes a record field
    pub skip_marker: String,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            skip_marker: SKIP_MARKER.to_string(),
        }
    }
}

impl ProjectorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ProjectError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a key lookup (`ROWCAST_STRICT`,
    /// `ROWCAST_SKIP_MARKER`), falling back to defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProjectError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("ROWCAST_STRICT") {
            config.strict = parse_flag(&raw).ok_or_else(|| {
                ProjectError::Config(format!("ROWCAST_STRICT: `{}` is not a boolean", raw))
            })?;
        }
        if let Some(marker) = lookup("ROWCAST_SKIP_MARKER") {
            config.skip_marker = marker;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ProjectError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.skip_marker.is_empty() {
            return Err(ProjectError::Config("skip_marker must not be empty".to_string()));
        }
        if self.skip_marker.parse::<usize>().is_ok() {
            return Err(ProjectError::Config(format!(
                "skip_marker `{}` would shadow a column index",
                self.skip_marker
            )));
        }
        Ok(())
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
