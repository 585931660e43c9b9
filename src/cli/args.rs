use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use super::delimiter::parse_delimiter_arg;
use crate::rank::{Algorithm, DEFAULT_REPORTING_INTERVAL};

/// CLI argument parsing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "leaderboard",
    about = "Rank players and extract the top tier, offline or as a stream.",
    override_usage = "leaderboard <players.csv> [--algorithm heap|quickselect|online] [--interval <n>] [--delimiter <delim>] [--json]"
)]
pub struct Args {
    /// Players CSV path (header row with `name` and `level`).
    #[arg(value_name = "PLAYERS_CSV")]
    pub players: PathBuf,

    /// Ranking algorithm: heap, quickselect, or online.
    #[arg(
        long,
        short = 'a',
        value_name = "ALGORITHM",
        default_value = "heap",
        value_parser = parse_algorithm
    )]
    pub algorithm: Algorithm,

    /// Online only: top-set size and cutoff reporting interval (default: 50).
    #[arg(long, short = 'i', value_name = "N", default_value_t = DEFAULT_REPORTING_INTERVAL)]
    pub interval: usize,

    /// Force a CSV delimiter (comma/tab/semicolon/pipe/caret, 0xNN, or single ASCII byte).
    #[arg(long, value_name = "DELIM", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Emit JSON output (single object).
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn new(
        players: PathBuf,
        algorithm: Algorithm,
        interval: usize,
        delimiter: Option<u8>,
        json: bool,
    ) -> Self {
        Self {
            players,
            algorithm,
            interval,
            delimiter,
            json,
        }
    }
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, String> {
    Algorithm::from_str(raw).map_err(|err| err.to_string())
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    parse_delimiter_arg(raw).map_err(|err| err.to_string())
}
