//! `--delimiter` flag parsing.

use std::fmt;

/// Why a delimiter flag was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    Empty,
    InvalidHex,
    InvalidValue,
    Unusable(u8),
}

impl fmt::Display for DelimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterError::Empty => write!(f, "delimiter is empty"),
            DelimiterError::InvalidHex => write!(f, "invalid hex delimiter; expected 0xNN"),
            DelimiterError::InvalidValue => {
                write!(f, "delimiter must be a name, 0xNN, or one ASCII character")
            }
            DelimiterError::Unusable(byte) => write!(f, "unusable delimiter byte 0x{byte:02X}"),
        }
    }
}

impl std::error::Error for DelimiterError {}

const NAMED: [(&str, u8); 5] = [
    ("comma", b','),
    ("tab", b'\t'),
    ("semicolon", b';'),
    ("pipe", b'|'),
    ("caret", b'^'),
];

/// Parse a delimiter flag: a name (comma, tab, semicolon, pipe, caret),
/// a two-digit hex byte `0xNN`, or a single ASCII character.
pub fn parse_delimiter_arg(raw: &str) -> Result<u8, DelimiterError> {
    if raw.is_empty() {
        return Err(DelimiterError::Empty);
    }

    let lower = raw.to_ascii_lowercase();
    if let Some((_, byte)) = NAMED.iter().find(|(name, _)| *name == lower) {
        return Ok(*byte);
    }

    if let Some(hex) = lower.strip_prefix("0x") {
        if hex.len() != 2 {
            return Err(DelimiterError::InvalidHex);
        }
        let byte = u8::from_str_radix(hex, 16).map_err(|_| DelimiterError::InvalidHex)?;
        return usable(byte);
    }

    match raw.as_bytes() {
        [byte] => usable(*byte),
        _ => Err(DelimiterError::InvalidValue),
    }
}

/// Quote, line breaks, NUL and non-ASCII bytes cannot separate fields.
#[inline]
fn usable(byte: u8) -> Result<u8, DelimiterError> {
    match byte {
        0 | b'"' | b'\r' | b'\n' | 0x80..=0xFF => Err(DelimiterError::Unusable(byte)),
        _ => Ok(byte),
    }
}
