//! Pluggable logging strategies
//!
//! A [`LogStrategy`] knows how to build and own one backend configuration.
//! [`LogContext`] holds at most one strategy and forwards to it, so callers
//! can swap backends without touching their logging calls.

mod standard;

use std::fmt;

use crate::config::Config;
use crate::core::LogResult;
use crate::logger::Logger;

pub use standard::StandardLogStrategy;

/// A backend configuration that can be initialized, used and flushed
pub trait LogStrategy: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Build the backend from `config`
    ///
    /// # Errors
    ///
    /// Returns error if the backend cannot be built.
    fn init(&mut self, config: &Config) -> LogResult<()>;

    /// The backend logger
    ///
    /// # Panics
    ///
    /// Panics when no backend was built. That is a programming error in the
    /// caller, not a runtime condition.
    #[track_caller]
    fn logger(&self) -> &dyn Logger;

    /// Flush the backend; a no-op when nothing was built
    ///
    /// # Errors
    ///
    /// Returns the flush error of the backend.
    fn sync(&self) -> LogResult<()>;
}

/// Holder of a replaceable strategy
#[derive(Default)]
pub struct LogContext {
    strategy: Option<Box<dyn LogStrategy>>,
}

impl LogContext {
    /// Create an empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context holding `strategy`
    #[must_use]
    pub fn with_strategy(strategy: impl LogStrategy + 'static) -> Self {
        let mut context = Self::new();
        context.set_strategy(strategy);
        context
    }

    /// Replace the held strategy
    pub fn set_strategy(&mut self, strategy: impl LogStrategy + 'static) {
        let previous = self.strategy.replace(Box::new(strategy));
        tracing::debug!(
            strategy = self.strategy.as_ref().map(|s| s.name()),
            replaced = previous.as_ref().map(|s| s.name()),
            "log strategy set"
        );
    }

    /// Whether a strategy is set
    #[must_use]
    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    /// Initialize the held strategy; a no-op without one
    ///
    /// # Errors
    ///
    /// Returns the strategy's init error.
    pub fn init(&mut self, config: &Config) -> LogResult<()> {
        match self.strategy.as_mut() {
            Some(strategy) => strategy.init(config),
            None => Ok(()),
        }
    }

    /// The held strategy's logger
    ///
    /// # Panics
    ///
    /// Panics when no strategy is set, or when the strategy has not built a
    /// backend.
    #[track_caller]
    pub fn logger(&self) -> &dyn Logger {
        match self.strategy.as_deref() {
            Some(strategy) => strategy.logger(),
            None => panic!("log strategy is not set"),
        }
    }

    /// Flush the held strategy; a no-op without one
    ///
    /// # Errors
    ///
    /// Returns the strategy's flush error.
    pub fn sync(&self) -> LogResult<()> {
        match self.strategy.as_deref() {
            Some(strategy) => strategy.sync(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkConfig;
    use crate::level::Severity;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls instead of logging
    #[derive(Default)]
    struct CountingStrategy {
        inits: Arc<AtomicUsize>,
        syncs: Arc<AtomicUsize>,
    }

    impl LogStrategy for CountingStrategy {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn init(&mut self, _config: &Config) -> LogResult<()> {
            self.inits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn logger(&self) -> &dyn Logger {
            panic!("counting strategy has no logger")
        }

        fn sync(&self) -> LogResult<()> {
            self.syncs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_empty_context_is_a_noop() {
        let mut context = LogContext::new();
        assert!(!context.has_strategy());
        assert!(context.init(&Config::default()).is_ok());
        assert!(context.sync().is_ok());
        assert!(context.sync().is_ok());
    }

    #[test]
    #[should_panic(expected = "log strategy is not set")]
    fn test_empty_context_logger_panics() {
        let context = LogContext::new();
        let _ = context.logger();
    }

    #[test]
    fn test_context_forwards() {
        let strategy = CountingStrategy::default();
        let inits = Arc::clone(&strategy.inits);
        let syncs = Arc::clone(&strategy.syncs);

        let mut context = LogContext::with_strategy(strategy);
        context.init(&Config::default()).unwrap();
        context.sync().unwrap();
        context.sync().unwrap();

        assert_eq!(inits.load(Ordering::SeqCst), 1);
        assert_eq!(syncs.load(Ordering::SeqCst), 2);
        assert!(format!("{context:?}").contains("counting"));
    }

    #[test]
    fn test_set_strategy_replaces() {
        let first = CountingStrategy::default();
        let first_inits = Arc::clone(&first.inits);
        let mut context = LogContext::with_strategy(first);

        context.set_strategy(StandardLogStrategy::new());
        context
            .init(&Config::default().with_sinks(SinkConfig::default()))
            .unwrap();

        assert_eq!(first_inits.load(Ordering::SeqCst), 0);
        assert!(context.logger().enabled(Severity::Info));
        assert!(!context.logger().enabled(Severity::Debug));
    }
}
