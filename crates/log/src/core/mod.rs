//! Core types shared by every part of the logging layer.
//!
//! ### [`error`] - Error handling
//! [`LogError`] covers sink, flush and level parsing failures. Programming
//! errors (logging through a strategy that was never initialized) are panics,
//! not `LogError`s.

pub mod error;

pub use error::{LogError, LogResult};
