//! Errors raised while loading or ranking players.
//!
//! Every error is terminal: rankers never return a partial result alongside
//! an error, and nothing is retried.

use std::error::Error;
use std::fmt;

use crate::error::codes::ErrorCode;

/// Failure reported by a [`PlayerStream`](crate::stream::PlayerStream).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// `next_player()` was called with nothing remaining.
    Exhausted,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Exhausted => f.write_str("no more players to fetch"),
        }
    }
}

impl Error for StreamError {}

/// An error carrying a stable code and a human message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankError {
    pub code: ErrorCode,
    pub message: String,
}

impl RankError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_interval(interval: usize) -> Self {
        Self::new(
            ErrorCode::InvalidInterval,
            format!("reporting interval must be > 0 (got {interval})"),
        )
    }

    /// Prefix the message with where the failure happened (e.g. a path).
    pub fn with_context(mut self, context: &str) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error for RankError {}

impl From<StreamError> for RankError {
    fn from(err: StreamError) -> Self {
        RankError::new(ErrorCode::StreamExhausted, err.to_string())
    }
}

impl From<std::io::Error> for RankError {
    fn from(err: std::io::Error) -> Self {
        RankError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<csv::Error> for RankError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return RankError::new(ErrorCode::Io, err.to_string());
        }
        RankError::new(ErrorCode::CsvParse, err.to_string())
    }
}
