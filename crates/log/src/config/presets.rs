//! Configuration presets for common scenarios

use super::{Config, Encoding, Environment, SinkConfig};

/// Prefix of the environment variables read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "SWITCHLOG";

impl Config {
    /// Development configuration (console, debug level, console streams)
    ///
    /// This is what an absent configuration means to [`crate::build`].
    #[must_use]
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            level: "debug".to_string(),
            encoding: Some(Encoding::Console),
            sinks: Some(SinkConfig::default()),
        }
    }

    /// Production configuration (JSON, info level, console streams)
    #[must_use]
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            level: "info".to_string(),
            encoding: Some(Encoding::Json),
            sinks: Some(SinkConfig::default()),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `SWITCHLOG_ENV`, `SWITCHLOG_LEVEL`, `SWITCHLOG_ENCODING`,
    /// `SWITCHLOG_OUTPUTS` and `SWITCHLOG_ERR_OUTPUTS`; the two sink lists are
    /// comma separated.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source
    ///
    /// Unset variables keep their [`Config::default`] value. The sink section
    /// is only present when at least one of the sink variables is set.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}_{suffix}"));
        let mut config = Self::default();

        if let Some(environment) = var("ENV") {
            config.environment = Environment::resolve(environment.trim());
        }
        if let Some(level) = var("LEVEL") {
            config.level = level.trim().to_string();
        }
        if let Some(encoding) = var("ENCODING") {
            config.encoding = Some(Encoding::resolve(encoding.trim()));
        }

        let outputs = var("OUTPUTS");
        let err_outputs = var("ERR_OUTPUTS");
        if outputs.is_some() || err_outputs.is_some() {
            config.sinks = Some(SinkConfig {
                outputs: outputs.as_deref().map(split_list).unwrap_or_default(),
                err_outputs: err_outputs.as_deref().map(split_list).unwrap_or_default(),
            });
        }

        config
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
