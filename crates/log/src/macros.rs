//! Convenience macros for the template and keyed argument styles
//!
//! Each macro accepts anything that derefs to a [`Logger`](crate::Logger):
//! a logger value, a reference, a `Box<dyn Logger>` or an `Arc`.

/// Log a formatted template at the given severity
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.logf($severity, format_args!($($arg)+))
    }};
}

/// Log a message with `key => value` pairs at the given severity
///
/// Values may be any `serde::Serialize` type.
#[macro_export]
macro_rules! logw {
    ($logger:expr, $severity:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.logw($severity, $msg, &[$(($key, $crate::field_value(&$value))),*])
    }};
}

/// Debug template
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Info template
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Warn template
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Error template
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Error template; panics in development mode
#[macro_export]
macro_rules! dpanicf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::DPanic, $($arg)+)
    };
}

/// Error template, then panic
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Panic, $($arg)+)
    };
}

/// Error template, then exit the process
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
