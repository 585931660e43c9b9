//! Pipeline orchestration: load → rank → render.

use std::error::Error;

use crate::cli::args::Args;
use crate::cli::exit::Outcome;
use crate::error::rank::RankError;
use crate::output::human::{RankedBody, join_lines, render_ranked, render_refusal};
use crate::output::json::{JsonOutput, render_json};
use crate::player::Player;
use crate::rank::offline::{heap_rank, quick_select_rank};
use crate::rank::online::rank_incoming;
use crate::rank::{Algorithm, RankingResult};
use crate::stream::VectorPlayerStream;
use crate::stream::load::load_players;

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

/// Rank an already-loaded population with the chosen algorithm.
///
/// Offline algorithms reorder `players`; the online algorithm streams a
/// copy so `players` is left untouched.
pub fn rank_players(
    algorithm: Algorithm,
    players: &mut Vec<Player>,
    reporting_interval: usize,
) -> Result<RankingResult, RankError> {
    match algorithm {
        Algorithm::Heap => Ok(heap_rank(players)),
        Algorithm::QuickSelect => Ok(quick_select_rank(players)),
        Algorithm::Online => {
            let mut stream = VectorPlayerStream::new(players.clone());
            rank_incoming(&mut stream, reporting_interval)
        }
    }
}

pub fn run(args: &Args) -> Result<PipelineResult, Box<dyn Error>> {
    let file = args.players.to_string_lossy().to_string();
    let interval = (args.algorithm == Algorithm::Online).then_some(args.interval);

    let ranked = load_players(&args.players, args.delimiter).and_then(|mut players| {
        let population = players.len();
        rank_players(args.algorithm, &mut players, args.interval).map(|r| (population, r))
    });

    match ranked {
        Ok((population, result)) => {
            let output = if args.json {
                let mut text =
                    render_json(&JsonOutput::ranked(file, args.algorithm, population, interval, result))?;
                text.push('\n');
                text
            } else {
                join_lines(&render_ranked(&RankedBody {
                    algorithm: args.algorithm,
                    population,
                    result: &result,
                }))
            };
            Ok(PipelineResult {
                outcome: Outcome::Ranked,
                output,
            })
        }
        Err(error) => {
            tracing::warn!(code = %error.code, "ranking refused: {}", error.message());
            let output = if args.json {
                let mut text =
                    render_json(&JsonOutput::refusal(file, args.algorithm, interval, &error))?;
                text.push('\n');
                text
            } else {
                join_lines(&render_refusal(&error))
            };
            Ok(PipelineResult {
                outcome: Outcome::Refusal,
                output,
            })
        }
    }
}
