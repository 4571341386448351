//! Log severities and level name resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::LogError;

/// Ordered log severity
///
/// The three levels above [`Severity::Error`] have side effects on top of
/// logging: `DPanic` panics in development mode, `Panic` always panics and
/// `Fatal` exits the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
    /// Error that panics in development mode
    DPanic,
    /// Error that always panics
    Panic,
    /// Error that exits the process
    Fatal,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Self; 7] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::DPanic,
        Self::Panic,
        Self::Fatal,
    ];

    /// Resolve a configured level name
    ///
    /// Only `debug`, `info`, `warn`, `error` and `fatal` are recognized;
    /// anything else, including the empty string, resolves to
    /// [`Severity::Info`].
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" => Self::Warn,
            "error" => Self::Error,
            "fatal" => Self::Fatal,
            _ => Self::Info,
        }
    }

    /// Upper-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::DPanic => "DPANIC",
            Self::Panic => "PANIC",
            Self::Fatal => "FATAL",
        }
    }

    /// Backend level the record is emitted at
    #[must_use]
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error | Self::DPanic | Self::Panic | Self::Fatal => tracing::Level::ERROR,
        }
    }

    /// Label for severities the backend cannot name itself
    pub(crate) const fn extended_label(self) -> Option<&'static str> {
        match self {
            Self::DPanic | Self::Panic | Self::Fatal => Some(self.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parser accepting all seven names, case-insensitively
///
/// Configuration does not go through this; see [`Severity::resolve`].
impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("debug", Severity::Debug)]
    #[case("info", Severity::Info)]
    #[case("warn", Severity::Warn)]
    #[case("error", Severity::Error)]
    #[case("fatal", Severity::Fatal)]
    fn test_resolve_recognized(#[case] name: &str, #[case] expected: Severity) {
        assert_eq!(Severity::resolve(name), expected);
    }

    #[rstest]
    #[case("")]
    #[case("panic")]
    #[case("dpanic")]
    #[case("DEBUG")]
    #[case("warning")]
    #[case("invalid-level")]
    fn test_resolve_falls_back_to_info(#[case] name: &str) {
        assert_eq!(Severity::resolve(name), Severity::Info);
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Error < Severity::DPanic);
        assert!(Severity::Panic < Severity::Fatal);
        assert!(Severity::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tracing_mapping() {
        assert_eq!(Severity::Warn.as_tracing(), tracing::Level::WARN);
        assert_eq!(Severity::Fatal.as_tracing(), tracing::Level::ERROR);
        assert_eq!(Severity::Fatal.extended_label(), Some("FATAL"));
        assert_eq!(Severity::Error.extended_label(), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("dpanic".parse::<Severity>().unwrap(), Severity::DPanic);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warn);
        assert!(matches!(
            "verbose".parse::<Severity>(),
            Err(LogError::UnknownLevel(name)) if name == "verbose"
        ));
    }

    proptest! {
        #[test]
        fn resolve_unknown_names_to_info(name in "\\PC*") {
            prop_assume!(!["debug", "info", "warn", "error", "fatal"].contains(&name.as_str()));
            prop_assert_eq!(Severity::resolve(&name), Severity::Info);
        }
    }
}
