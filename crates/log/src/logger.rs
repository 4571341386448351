//! The `Logger` interface and its tracing-backed implementation
//!
//! Every leveled method comes in three argument styles:
//!
//! - `info(&[&a, &b])` joins the arguments with spaces,
//! - `infof(format_args!(..))` formats a template (see [`crate::infof!`]),
//! - `infow(msg, &[("key", value)])` attaches structured key/value pairs.
//!
//! The reported `caller` is the line that called the leveled method. Each
//! forwarding layer is `#[track_caller]`, and the innermost one receives the
//! resolved [`Location`] as an explicit argument.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use serde_json::Value;
use tracing::Dispatch;

use crate::core::LogResult;
use crate::level::Severity;
use crate::writer::Sinks;

/// Target attached to every record
pub const TARGET: &str = "switchlog";

/// A structured key/value pair
pub type Field<'a> = (&'a str, Value);

/// Leveled logging interface
///
/// Implementors provide the four primitives; the per-level methods forward to
/// them unchanged. `debug`, `info`, `warn` and `error` never panic.
pub trait Logger: Send + Sync {
    /// Whether records at `severity` are written
    fn enabled(&self, severity: Severity) -> bool;

    /// Log the arguments joined by single spaces
    #[track_caller]
    fn log(&self, severity: Severity, args: &[&dyn fmt::Display]);

    /// Log a formatted template
    #[track_caller]
    fn logf(&self, severity: Severity, args: fmt::Arguments<'_>);

    /// Log a message with key/value pairs
    #[track_caller]
    fn logw(&self, severity: Severity, msg: &str, fields: &[Field<'_>]);

    /// Flush buffered output of every sink
    fn sync(&self) -> LogResult<()>;

    #[track_caller]
    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Debug, args);
    }

    #[track_caller]
    fn info(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Info, args);
    }

    #[track_caller]
    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Warn, args);
    }

    #[track_caller]
    fn error(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Error, args);
    }

    /// Log, then panic in development mode
    #[track_caller]
    fn dpanic(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::DPanic, args);
    }

    /// Log, then panic
    #[track_caller]
    fn panic(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Panic, args);
    }

    /// Log, then exit the process
    #[track_caller]
    fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.log(Severity::Fatal, args);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Debug, args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Info, args);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Warn, args);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Error, args);
    }

    #[track_caller]
    fn dpanicf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::DPanic, args);
    }

    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Panic, args);
    }

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Fatal, args);
    }

    #[track_caller]
    fn debugw(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::Debug, msg, fields);
    }

    #[track_caller]
    fn infow(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::Info, msg, fields);
    }

    #[track_caller]
    fn warnw(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::Warn, msg, fields);
    }

    #[track_caller]
    fn errorw(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::Error, msg, fields);
    }

    #[track_caller]
    fn dpanicw(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::DPanic, msg, fields);
    }

    #[track_caller]
    fn panicw(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::Panic, msg, fields);
    }

    #[track_caller]
    fn fatalw(&self, msg: &str, fields: &[Field<'_>]) {
        self.logw(Severity::Fatal, msg, fields);
    }
}

/// Convert any serializable value into a field value
///
/// Values that fail to serialize are logged as a descriptive string rather
/// than dropped.
pub fn field_value<T: serde::Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}

/// Logger backed by a private tracing [`Dispatch`]
///
/// The dispatcher is never installed globally; records reach it through
/// [`tracing::dispatcher::with_default`] for the duration of each call.
/// Cloning is cheap and clones share sinks.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    dispatch: Dispatch,
    severity: Severity,
    development: bool,
    sinks: Sinks,
}

impl TracingLogger {
    pub(crate) fn new(
        dispatch: Dispatch,
        severity: Severity,
        development: bool,
        sinks: Sinks,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                dispatch,
                severity,
                development,
                sinks,
            }),
        }
    }

    /// Minimum severity written
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.inner.severity
    }

    /// Whether `dpanic` panics
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.inner.development
    }

    /// The backend dispatcher
    ///
    /// Useful to route plain `tracing` macros through the same configuration:
    ///
    /// ```rust,no_run
    /// let logger = switchlog::default_logger()?;
    /// tracing::dispatcher::with_default(logger.dispatch(), || {
    ///     tracing::info!(answer = 42, "routed through switchlog");
    /// });
    /// # Ok::<(), switchlog::LogError>(())
    /// ```
    #[must_use]
    pub fn dispatch(&self) -> &Dispatch {
        &self.inner.dispatch
    }

    fn emit(
        &self,
        severity: Severity,
        message: &dyn fmt::Display,
        fields: Option<&KeyValues<'_>>,
        caller: &'static Location<'static>,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let caller = Caller(caller);
        let label = severity.extended_label();
        let fields = fields.map(tracing::field::display);

        tracing::dispatcher::with_default(&self.inner.dispatch, || match severity {
            Severity::Debug => tracing::event!(
                target: TARGET,
                tracing::Level::DEBUG,
                caller = %caller,
                fields = fields,
                "{message}"
            ),
            Severity::Info => tracing::event!(
                target: TARGET,
                tracing::Level::INFO,
                caller = %caller,
                fields = fields,
                "{message}"
            ),
            Severity::Warn => tracing::event!(
                target: TARGET,
                tracing::Level::WARN,
                caller = %caller,
                fields = fields,
                "{message}"
            ),
            Severity::Error | Severity::DPanic | Severity::Panic | Severity::Fatal => {
                tracing::event!(
                    target: TARGET,
                    tracing::Level::ERROR,
                    caller = %caller,
                    severity = label,
                    fields = fields,
                    "{message}"
                );
            }
        });
    }

    /// Side effects of the severities above error
    ///
    /// These run even when the record itself was filtered out.
    #[track_caller]
    fn finish(&self, severity: Severity, message: impl FnOnce() -> String) {
        match severity {
            Severity::DPanic if self.inner.development => panic!("{}", message()),
            Severity::Panic => panic!("{}", message()),
            Severity::Fatal => {
                // exiting regardless; a flush error has nowhere to go
                let _ = self.sync();
                std::process::exit(1);
            }
            _ => {}
        }
    }
}

impl Logger for TracingLogger {
    fn enabled(&self, severity: Severity) -> bool {
        severity >= self.inner.severity
    }

    #[track_caller]
    fn log(&self, severity: Severity, args: &[&dyn fmt::Display]) {
        let message = Joined(args);
        self.emit(severity, &message, None, Location::caller());
        self.finish(severity, || message.to_string());
    }

    #[track_caller]
    fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.emit(severity, &args, None, Location::caller());
        self.finish(severity, || args.to_string());
    }

    #[track_caller]
    fn logw(&self, severity: Severity, msg: &str, fields: &[Field<'_>]) {
        let pairs = KeyValues(fields);
        let pairs = (!fields.is_empty()).then_some(&pairs);
        self.emit(severity, &msg, pairs, Location::caller());
        self.finish(severity, || msg.to_string());
    }

    fn sync(&self) -> LogResult<()> {
        self.inner.sinks.sync()
    }
}

/// Syncs a logger when dropped
///
/// A sync error on drop is reported through the global `tracing` dispatcher;
/// call [`SyncGuard::finish`] to receive it instead.
#[must_use = "the logger is synced when the guard is dropped"]
pub struct SyncGuard<'a, L: Logger + ?Sized> {
    logger: &'a L,
    armed: bool,
}

impl<'a, L: Logger + ?Sized> SyncGuard<'a, L> {
    /// Guard `logger` until the end of the scope
    pub fn new(logger: &'a L) -> Self {
        Self {
            logger,
            armed: true,
        }
    }

    /// Sync now and return the result
    pub fn finish(mut self) -> LogResult<()> {
        self.armed = false;
        self.logger.sync()
    }
}

impl<L: Logger + ?Sized> fmt::Debug for SyncGuard<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncGuard")
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

impl<L: Logger + ?Sized> Drop for SyncGuard<'_, L> {
    fn drop(&mut self) {
        if self.armed
            && let Err(e) = self.logger.sync()
        {
            tracing::warn!(error = %e, "logger sync on drop failed");
        }
    }
}

struct Caller(&'static Location<'static>);

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.file(), self.0.line())
    }
}

struct Joined<'a>(&'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

/// Renders pairs as a JSON object, keeping their order
struct KeyValues<'a>(&'a [Field<'a>]);

impl fmt::Display for KeyValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{value}", Value::from(*key))?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_joined() {
        let count = 3;
        assert_eq!(Joined(&[&"retries", &count, &'!']).to_string(), "retries 3 !");
        assert_eq!(Joined(&[]).to_string(), "");
    }

    #[test]
    fn test_key_values_keep_order_and_escape() {
        let fields = [("zeta", json!(1)), ("a\"b", json!("x y")), ("nested", json!({"k": [1, 2]}))];
        assert_eq!(
            KeyValues(&fields).to_string(),
            r#"{"zeta":1,"a\"b":"x y","nested":{"k":[1,2]}}"#
        );
    }

    #[test]
    fn test_field_value() {
        assert_eq!(field_value("alice"), json!("alice"));
        assert_eq!(field_value(&[1, 2]), json!([1, 2]));
    }

    #[test]
    fn test_caller_display() {
        let location = Location::caller();
        let rendered = Caller(location).to_string();
        assert_eq!(rendered, format!("{}:{}", location.file(), location.line()));
    }
}
