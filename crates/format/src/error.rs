//! Decoding Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Underlying I/O and date parsing
//! failures are kept as children of the raised [`ErrorKind`].

use derive_more::{Display, Error};

/// A decoding error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Apart from [`ErrorKind::Io`], every variant means the same thing to a
/// caller: this input is not a usable index record, skip it and move on.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fewer bytes were available than the named field requires.
    #[display("input truncated while reading {_0}")]
    Truncated(#[error(not(source))] &'static str),
    /// The input is not a download cache index record at all.
    #[display("not a valid cache index record: {_0}")]
    InvalidFormat(#[error(not(source))] String),
    /// The record declares a format version this decoder has no layout for.
    #[display("unsupported format version: {_0}")]
    UnsupportedVersion(#[error(not(source))] u32),
    /// The record is structurally sound but a required value is empty.
    #[display("{_0} not found in file")]
    MissingField(#[error(not(source))] &'static str),
    /// A `date` header was present but is not a valid HTTP date.
    #[display("failed to parse HTTP date: {_0}")]
    DateParse(#[error(not(source))] String),
    /// Reading from the byte source failed for a reason other than running
    /// out of input.
    #[display("I/O error")]
    Io,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The bytes either describe a record or they don't; only the source
        // itself can fail transiently.
        matches!(self, ErrorKind::Io)
    }
}
