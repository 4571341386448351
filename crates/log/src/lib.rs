//! # switchlog - swappable logging strategies over tracing
//!
//! A small [`Logger`] interface with leveled methods in three argument styles,
//! a factory that turns a declarative [`Config`] into a ready logger, and a
//! [`LogStrategy`] indirection so the backend can change without touching
//! call sites.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use switchlog::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     let logger = switchlog::build(Some(&Config::production().with_level("warn")))?;
//!     let _guard = SyncGuard::new(&logger);
//!
//!     logger.warn(&[&"disk almost full:", &93, &"%"]);
//!     switchlog::infof!(logger, "filtered out: {}", 1);
//!     logger.errorw("upload failed", &[("bucket", "logs".into()), ("attempt", 3.into())]);
//!     Ok(())
//! }
//! ```
//!
//! ## Strategies
//!
//! ```rust,no_run
//! use switchlog::prelude::*;
//!
//! # fn main() -> LogResult<()> {
//! let mut context = LogContext::with_strategy(StandardLogStrategy::new());
//! context.init(&Config::default().with_sinks(SinkConfig::new(["app.log"], ["stderr"])))?;
//! context.logger().info(&[&"application started"]);
//! context.sync()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod builder;
mod config;
mod core;
mod level;
mod logger;
mod macros;
mod strategy;
mod writer;

// Public API
pub use builder::LoggerBuilder;
pub use config::{Config, ENV_PREFIX, Encoding, Environment, SinkConfig};
pub use crate::core::{LogError, LogResult};
pub use level::Severity;
pub use logger::{Field, Logger, SyncGuard, TARGET, TracingLogger, field_value};
pub use strategy::{LogContext, LogStrategy, StandardLogStrategy};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Encoding, Environment, LogContext, LogError, LogResult, LogStrategy, Logger,
        Severity, SinkConfig, StandardLogStrategy, SyncGuard, TracingLogger,
    };
}

/// Build a logger from `config`, or with development defaults when absent
///
/// Development defaults: console encoding with colored levels, debug level,
/// stdout for regular records and stderr for errors.
///
/// # Errors
///
/// Returns error if a configured sink cannot be opened.
pub fn build(config: Option<&Config>) -> LogResult<TracingLogger> {
    let config = config.cloned().unwrap_or_else(Config::development);
    LoggerBuilder::from_config(config).build()
}

/// Build a logger with development defaults
///
/// # Errors
///
/// Returns error if the console streams cannot be set up.
pub fn default_logger() -> LogResult<TracingLogger> {
    build(None)
}
