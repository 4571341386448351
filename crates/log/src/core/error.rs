//! Error handling for switchlog
//!
//! All fallible operations return [`LogResult<T>`]. Nothing in this crate
//! retries: an error is reported once, to the caller that asked for the work.

use std::io;

/// Result type for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// A sink identifier was empty or blank
    #[error("invalid sink identifier: {0:?}")]
    InvalidSink(String),

    /// A file sink could not be opened
    #[error("failed to open sink '{sink}': {source}")]
    OpenSink {
        /// Sink identifier as given in the configuration
        sink: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Flushing a sink failed
    #[error("failed to sync sink '{sink}': {source}")]
    Sync {
        /// Sink identifier as given in the configuration
        sink: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Strict level parsing rejected the input
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),
}

impl LogError {
    /// Sink identifier this error refers to, if any
    #[must_use]
    pub fn sink(&self) -> Option<&str> {
        match self {
            Self::InvalidSink(sink) | Self::OpenSink { sink, .. } | Self::Sync { sink, .. } => {
                Some(sink)
            }
            Self::UnknownLevel(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = LogError::OpenSink {
            sink: "/nope/app.log".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(error.to_string().contains("/nope/app.log"));
        assert!(error.to_string().contains("no such directory"));
        assert_eq!(error.sink(), Some("/nope/app.log"));

        let error = LogError::UnknownLevel("loud".to_string());
        assert_eq!(error.to_string(), "unknown log level: \"loud\"");
        assert_eq!(error.sink(), None);
    }

    #[test]
    fn test_error_source_is_io() {
        use std::error::Error as _;

        let error = LogError::Sync {
            sink: "stdout".to_string(),
            source: io::Error::other("broken pipe"),
        };
        let source = error.source().expect("sync error keeps its io source");
        assert_eq!(source.to_string(), "broken pipe");
    }
}
