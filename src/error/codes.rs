use std::fmt;
use std::str::FromStr;

/// Stable error codes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Io,
    CsvParse,
    InvalidInterval,
    StreamExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode;

impl ErrorCode {
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::Io,
        ErrorCode::CsvParse,
        ErrorCode::InvalidInterval,
        ErrorCode::StreamExhausted,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Io => "E_IO",
            ErrorCode::CsvParse => "E_CSV_PARSE",
            ErrorCode::InvalidInterval => "E_INVALID_INTERVAL",
            ErrorCode::StreamExhausted => "E_STREAM_EXHAUSTED",
        }
    }

    /// A short, stable reason label for human output.
    #[inline]
    pub const fn reason(self) -> &'static str {
        match self {
            ErrorCode::Io => "file read error",
            ErrorCode::CsvParse => "player CSV parse failure",
            ErrorCode::InvalidInterval => "reporting interval must be positive",
            ErrorCode::StreamExhausted => "player stream exhausted",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown error code")
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E_IO" => Ok(ErrorCode::Io),
            "E_CSV_PARSE" => Ok(ErrorCode::CsvParse),
            "E_INVALID_INTERVAL" => Ok(ErrorCode::InvalidInterval),
            "E_STREAM_EXHAUSTED" => Ok(ErrorCode::StreamExhausted),
            _ => Err(UnknownErrorCode),
        }
    }
}
