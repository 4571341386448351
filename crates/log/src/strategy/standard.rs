//! The standard strategy: a tracing backend built from environment, level and
//! sinks

use std::fmt;

use crate::builder::LoggerBuilder;
use crate::config::Config;
use crate::core::LogResult;
use crate::level::Severity;
use crate::logger::{Field, Logger, TracingLogger};
use crate::strategy::LogStrategy;

/// Strategy owning a [`TracingLogger`]
///
/// The environment picks the profile (production writes JSON, development
/// writes console lines) unless the config names an encoding. Without a sink
/// section `init` builds nothing.
///
/// The strategy is itself a [`Logger`] that forwards to its backend; logging
/// through it before a successful `init` panics.
#[derive(Debug, Clone, Default)]
pub struct StandardLogStrategy {
    logger: Option<TracingLogger>,
}

impl StandardLogStrategy {
    /// Create an uninitialized strategy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a backend has been built
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.logger.is_some()
    }

    #[track_caller]
    fn backend(&self) -> &TracingLogger {
        match &self.logger {
            Some(logger) => logger,
            None => panic!("logger is not initialized, call init first"),
        }
    }
}

impl LogStrategy for StandardLogStrategy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn init(&mut self, config: &Config) -> LogResult<()> {
        if config.sinks.is_none() {
            tracing::debug!("no sink section, standard strategy left uninitialized");
            return Ok(());
        }

        // a failed build keeps the previous backend
        let logger = LoggerBuilder::from_config(config.clone()).build()?;
        self.logger = Some(logger);
        Ok(())
    }

    #[track_caller]
    fn logger(&self) -> &dyn Logger {
        self.backend()
    }

    fn sync(&self) -> LogResult<()> {
        match &self.logger {
            Some(logger) => logger.sync(),
            None => Ok(()),
        }
    }
}

impl Logger for StandardLogStrategy {
    fn enabled(&self, severity: Severity) -> bool {
        self.logger
            .as_ref()
            .is_some_and(|logger| logger.enabled(severity))
    }

    #[track_caller]
    fn log(&self, severity: Severity, args: &[&dyn fmt::Display]) {
        self.backend().log(severity, args);
    }

    #[track_caller]
    fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.backend().logf(severity, args);
    }

    #[track_caller]
    fn logw(&self, severity: Severity, msg: &str, fields: &[Field<'_>]) {
        self.backend().logw(severity, msg, fields);
    }

    fn sync(&self) -> LogResult<()> {
        LogStrategy::sync(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Encoding, Environment, SinkConfig};
    use crate::core::LogError;

    #[test]
    fn test_init_without_sinks_builds_nothing() {
        let mut strategy = StandardLogStrategy::new();
        assert!(strategy.init(&Config::default()).is_ok());
        assert!(!strategy.is_initialized());
        assert!(LogStrategy::sync(&strategy).is_ok());
        assert!(!strategy.enabled(Severity::Fatal));
    }

    #[test]
    #[should_panic(expected = "logger is not initialized")]
    fn test_logger_before_init_panics() {
        let strategy = StandardLogStrategy::new();
        let _ = strategy.logger();
    }

    #[test]
    #[should_panic(expected = "logger is not initialized")]
    fn test_logging_before_init_panics() {
        let strategy = StandardLogStrategy::new();
        strategy.info(&[&"too early"]);
    }

    #[test]
    fn test_init_applies_level() {
        let mut strategy = StandardLogStrategy::new();
        let config = Config {
            environment: Environment::Production,
            level: "warn".to_string(),
            encoding: None,
            sinks: Some(SinkConfig::default()),
        };
        strategy.init(&config).unwrap();

        assert!(strategy.is_initialized());
        assert!(strategy.logger().enabled(Severity::Warn));
        assert!(!strategy.logger().enabled(Severity::Info));
    }

    #[test]
    fn test_init_surfaces_build_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").join("app.log");
        let config = Config::default()
            .with_encoding(Encoding::Json)
            .with_sinks(SinkConfig::new([missing.to_str().unwrap()], ["stderr"]));

        let mut strategy = StandardLogStrategy::new();
        let err = strategy.init(&config).unwrap_err();

        assert!(matches!(err, LogError::OpenSink { .. }));
        assert!(!strategy.is_initialized());
    }

    #[test]
    fn test_failed_reinit_keeps_previous_backend() {
        let mut strategy = StandardLogStrategy::new();
        strategy
            .init(&Config::default().with_sinks(SinkConfig::default()))
            .unwrap();

        let bad = Config::default().with_sinks(SinkConfig::new([""], Vec::<String>::new()));
        assert!(strategy.init(&bad).is_err());
        assert!(strategy.is_initialized());
    }
}
