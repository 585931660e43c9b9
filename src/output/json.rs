// JSON output schema

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::rank::RankError;
use crate::player::Player;
use crate::rank::{Algorithm, RankingResult};

pub const SCHEMA_VERSION: &str = "leaderboard.v0";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Ranked,
    Refusal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Refusal {
    pub code: String,
    pub reason: String,
    pub message: String,
}

impl From<&RankError> for Refusal {
    fn from(error: &RankError) -> Self {
        Self {
            code: error.code.as_str().to_string(),
            reason: error.code.reason().to_string(),
            message: error.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub outcome: Outcome,
    pub file: String,
    pub algorithm: String,
    pub population: Option<usize>,
    pub reporting_interval: Option<usize>,
    pub top: Vec<Player>,
    pub cutoffs: BTreeMap<usize, u64>,
    pub elapsed_ms: Option<f64>,
    pub refusal: Option<Refusal>,
}

impl JsonOutput {
    pub fn ranked(
        file: String,
        algorithm: Algorithm,
        population: usize,
        reporting_interval: Option<usize>,
        result: RankingResult,
    ) -> Self {
        let elapsed_ms = result.elapsed_ms();
        Self {
            version: SCHEMA_VERSION,
            outcome: Outcome::Ranked,
            file,
            algorithm: algorithm.as_str().to_string(),
            population: Some(population),
            reporting_interval,
            top: result.top,
            cutoffs: result.cutoffs,
            elapsed_ms: Some(elapsed_ms),
            refusal: None,
        }
    }

    pub fn refusal(
        file: String,
        algorithm: Algorithm,
        reporting_interval: Option<usize>,
        error: &RankError,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION,
            outcome: Outcome::Refusal,
            file,
            algorithm: algorithm.as_str().to_string(),
            population: None,
            reporting_interval,
            top: Vec::new(),
            cutoffs: BTreeMap::new(),
            elapsed_ms: None,
            refusal: Some(Refusal::from(error)),
        }
    }
}

pub fn render_json(output: &JsonOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string(output)
}
