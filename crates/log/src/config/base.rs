//! Core configuration types

use serde::{Deserialize, Serialize};

use crate::level::Severity;

/// Logging configuration
///
/// One shape serves both the factory ([`crate::build`]) and strategies
/// ([`crate::LogStrategy::init`]). It is read, never mutated, by either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base profile
    pub environment: Environment,

    /// Minimum level name, resolved with [`Severity::resolve`]
    pub level: String,

    /// Output encoding; derived from the environment when absent
    pub encoding: Option<Encoding>,

    /// Output destinations
    ///
    /// The factory falls back to stdout/stderr when this is absent. A
    /// strategy treats an absent section as "nothing to build".
    pub sinks: Option<SinkConfig>,
}

/// Output destinations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Sinks for records below error: `stdout`, `stderr` or file paths
    pub outputs: Vec<String>,

    /// Sinks for error records and above
    pub err_outputs: Vec<String>,
}

/// Base profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    /// Console output, `dpanic` panics
    #[default]
    Development,
    /// JSON output
    Production,
}

/// Output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Encoding {
    /// Human-readable line with a colored level label
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            level: "info".to_string(),
            encoding: None,
            sinks: None,
        }
    }
}

impl Config {
    /// Resolved minimum severity
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::resolve(&self.level)
    }

    /// Encoding in effect: explicit, or chosen by the environment
    #[must_use]
    pub fn effective_encoding(&self) -> Encoding {
        self.encoding.unwrap_or(match self.environment {
            Environment::Production => Encoding::Json,
            Environment::Development => Encoding::Console,
        })
    }

    /// Whether `dpanic` records panic
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Set the minimum level name
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the encoding
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the sink section
    #[must_use]
    pub fn with_sinks(mut self, sinks: SinkConfig) -> Self {
        self.sinks = Some(sinks);
        self
    }
}

impl SinkConfig {
    /// Sink section with the given outputs and error outputs
    #[must_use]
    pub fn new<O, E>(outputs: O, err_outputs: E) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            outputs: outputs.into_iter().map(Into::into).collect(),
            err_outputs: err_outputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl Environment {
    /// `"production"` selects production, anything else development
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        if name == "production" {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl Encoding {
    /// `"json"` selects JSON, anything else console
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        if name == "json" { Self::Json } else { Self::Console }
    }

    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
        }
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self::resolve(&name)
    }
}

impl From<Environment> for String {
    fn from(environment: Environment) -> Self {
        environment.as_str().to_string()
    }
}

impl From<String> for Encoding {
    fn from(name: String) -> Self {
        Self::resolve(&name)
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        encoding.as_str().to_string()
    }
}
