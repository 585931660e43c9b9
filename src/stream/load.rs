//! Load players from `name,level` CSV.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::rank::RankError;
use crate::player::Player;

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Strip a UTF-8 BOM if present.
#[inline]
pub fn strip_utf8_bom(input: &[u8]) -> &[u8] {
    input.strip_prefix(&UTF8_BOM).unwrap_or(input)
}

/// Read every player from a CSV file.
///
/// The file must have a header row with `name` and `level` columns; other
/// columns are ignored. A header-only file yields an empty population.
pub fn load_players(path: &Path, delimiter: Option<u8>) -> Result<Vec<Player>, RankError> {
    let bytes = fs::read(path)
        .map_err(|err| RankError::from(err).with_context(&path.display().to_string()))?;
    parse_players(&bytes, delimiter)
}

/// Parse players from raw CSV bytes.
pub fn parse_players(input: &[u8], delimiter: Option<u8>) -> Result<Vec<Player>, RankError> {
    let input = strip_utf8_bom(input);
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.unwrap_or(b','))
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(input);

    let mut players = Vec::new();
    for row in reader.deserialize::<Player>() {
        players.push(row?);
    }
    tracing::debug!(count = players.len(), "loaded players");
    Ok(players)
}
