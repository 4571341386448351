//! Logger builder implementation
//!
//! Translates a [`Config`] into a private tracing subscriber:
//! - `format`: console and JSON layer construction

#[macro_use]
mod format;

// External dependencies
use tracing::Dispatch;
use tracing_subscriber::{Registry, filter::LevelFilter, layer::SubscriberExt};

// Internal crates
use crate::config::{Config, Encoding};
use crate::core::LogResult;
use crate::logger::TracingLogger;
use crate::writer::Sinks;

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the logger
    ///
    /// The subscriber is owned by the returned logger and is not installed as
    /// the global default, so any number of loggers can coexist.
    ///
    /// # Errors
    ///
    /// Returns error if a sink identifier is blank or a file sink cannot be
    /// opened.
    pub fn build(self) -> LogResult<TracingLogger> {
        let severity = self.config.severity();
        let encoding = self.config.effective_encoding();
        let sinks = Sinks::open(self.config.sinks.as_ref())?;

        let filter = LevelFilter::from_level(severity.as_tracing());
        let writer = sinks.make_writer();

        let dispatch = match encoding {
            Encoding::Console => Dispatch::new(
                Registry::default()
                    .with(filter)
                    .with(create_console_layer!(writer)),
            ),
            Encoding::Json => Dispatch::new(
                Registry::default()
                    .with(filter)
                    .with(create_json_layer!(writer)),
            ),
        };

        tracing::debug!(
            environment = self.config.environment.as_str(),
            encoding = encoding.as_str(),
            level = %severity,
            "logger built"
        );

        Ok(TracingLogger::new(
            dispatch,
            severity,
            self.config.is_development(),
            sinks,
        ))
    }
}
