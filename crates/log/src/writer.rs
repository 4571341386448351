//! Sink implementations
//!
//! A sink identifier is `stdout`, `stderr` or a file path (optionally written
//! as a `file://` URL). Files are opened once, in append mode, and shared by
//! every record the logger writes.

// Standard library
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Arc;

// External dependencies
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

// Internal crates
use crate::config::SinkConfig;
use crate::core::{LogError, LogResult};

const STDOUT: &str = "stdout";
const STDERR: &str = "stderr";

/// One opened destination
#[derive(Debug, Clone)]
pub(crate) enum Sink {
    Stdout,
    Stderr,
    File { name: String, file: Arc<File> },
}

impl Sink {
    /// Open a sink from its identifier
    pub(crate) fn open(identifier: &str) -> LogResult<Self> {
        match identifier.trim() {
            "" => Err(LogError::InvalidSink(identifier.to_string())),
            STDOUT => Ok(Self::Stdout),
            STDERR => Ok(Self::Stderr),
            path => {
                let path = path.strip_prefix("file://").unwrap_or(path);
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LogError::OpenSink {
                        sink: identifier.to_string(),
                        source,
                    })?;
                Ok(Self::File {
                    name: identifier.to_string(),
                    file: Arc::new(file),
                })
            }
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Stdout => STDOUT,
            Self::Stderr => STDERR,
            Self::File { name, .. } => name,
        }
    }

    fn make_writer(&self) -> BoxMakeWriter {
        match self {
            Self::Stdout => BoxMakeWriter::new(io::stdout),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
            Self::File { file, .. } => BoxMakeWriter::new(Arc::clone(file)),
        }
    }

    /// Flush console streams; flush file contents to disk
    pub(crate) fn sync(&self) -> LogResult<()> {
        let result = match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
            Self::File { file, .. } => file.sync_data(),
        };
        result.map_err(|source| LogError::Sync {
            sink: self.name().to_string(),
            source,
        })
    }
}

/// The destinations of one logger, split by severity
#[derive(Debug, Clone)]
pub(crate) struct Sinks {
    outputs: Vec<Sink>,
    err_outputs: Vec<Sink>,
}

impl Sinks {
    /// Open every configured sink; empty lists fall back to stdout/stderr
    pub(crate) fn open(config: Option<&SinkConfig>) -> LogResult<Self> {
        let (outputs, err_outputs) = match config {
            Some(config) => (
                open_all(&config.outputs, Sink::Stdout)?,
                open_all(&config.err_outputs, Sink::Stderr)?,
            ),
            None => (vec![Sink::Stdout], vec![Sink::Stderr]),
        };
        Ok(Self {
            outputs,
            err_outputs,
        })
    }

    /// Writer routing error records to `err_outputs` and the rest to `outputs`
    pub(crate) fn make_writer(&self) -> BoxMakeWriter {
        let outputs =
            tee(&self.outputs).with_filter(|meta: &Metadata<'_>| *meta.level() != Level::ERROR);
        let err_outputs =
            tee(&self.err_outputs).with_filter(|meta: &Metadata<'_>| *meta.level() == Level::ERROR);
        BoxMakeWriter::new(outputs.and(err_outputs))
    }

    /// Sync every sink, reporting the first failure
    pub(crate) fn sync(&self) -> LogResult<()> {
        let mut first_error = None;
        for sink in self.outputs.iter().chain(&self.err_outputs) {
            if let Err(e) = sink.sync() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    #[cfg(test)]
    pub(crate) fn outputs(&self) -> &[Sink] {
        &self.outputs
    }

    #[cfg(test)]
    pub(crate) fn err_outputs(&self) -> &[Sink] {
        &self.err_outputs
    }
}

fn open_all(identifiers: &[String], fallback: Sink) -> LogResult<Vec<Sink>> {
    if identifiers.is_empty() {
        return Ok(vec![fallback]);
    }
    identifiers.iter().map(|id| Sink::open(id)).collect()
}

fn tee(sinks: &[Sink]) -> BoxMakeWriter {
    sinks
        .iter()
        .map(Sink::make_writer)
        .reduce(|all, next| BoxMakeWriter::new(all.and(next)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::sink))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_console_streams() {
        assert!(matches!(Sink::open("stdout"), Ok(Sink::Stdout)));
        assert!(matches!(Sink::open(" stderr "), Ok(Sink::Stderr)));
    }

    #[test]
    fn test_open_blank_identifier() {
        assert!(matches!(Sink::open("  "), Err(LogError::InvalidSink(_))));
    }

    #[test]
    fn test_open_file_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = Sink::open(path.to_str().unwrap()).unwrap();

        assert!(path.exists());
        assert_eq!(sink.name(), path.to_str().unwrap());
        assert!(sink.sync().is_ok());
    }

    #[test]
    fn test_open_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("url.log");
        let sink = Sink::open(&format!("file://{}", path.display())).unwrap();

        assert!(matches!(sink, Sink::File { .. }));
        assert!(path.exists());
    }

    #[test]
    fn test_open_file_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        let err = Sink::open(path.to_str().unwrap()).unwrap_err();

        assert!(matches!(err, LogError::OpenSink { .. }));
    }

    #[test]
    fn test_empty_lists_use_console_streams() {
        let sinks = Sinks::open(Some(&SinkConfig::default())).unwrap();
        assert!(matches!(sinks.outputs(), [Sink::Stdout]));
        assert!(matches!(sinks.err_outputs(), [Sink::Stderr]));

        let sinks = Sinks::open(None).unwrap();
        assert!(matches!(sinks.outputs(), [Sink::Stdout]));
        assert!(matches!(sinks.err_outputs(), [Sink::Stderr]));
    }

    #[test]
    fn test_one_bad_sink_fails_the_whole_set() {
        let config = SinkConfig::new(["stdout", ""], ["stderr"]);
        assert!(matches!(
            Sinks::open(Some(&config)),
            Err(LogError::InvalidSink(_))
        ));
    }

    #[test]
    fn test_sync_console_streams_repeatedly() {
        let sinks = Sinks::open(None).unwrap();
        for _ in 0..3 {
            assert!(sinks.sync().is_ok());
        }
    }
}
