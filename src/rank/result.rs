use std::collections::BTreeMap;
use std::time::Duration;

use crate::player::Player;

/// Output of every ranking call.
#[derive(Debug, Clone, Default)]
pub struct RankingResult {
    /// Selected players, ascending by level (ties by name).
    pub top: Vec<Player>,
    /// Population milestone -> minimum level in the top set at that point.
    /// Always empty for offline algorithms.
    pub cutoffs: BTreeMap<usize, u64>,
    /// Compute time only; stream fetches are excluded.
    pub elapsed: Duration,
}

impl RankingResult {
    pub fn new(top: Vec<Player>, cutoffs: BTreeMap<usize, u64>, elapsed: Duration) -> Self {
        Self {
            top,
            cutoffs,
            elapsed,
        }
    }

    pub fn offline(top: Vec<Player>, elapsed: Duration) -> Self {
        Self::new(top, BTreeMap::new(), elapsed)
    }

    pub fn levels(&self) -> Vec<u64> {
        self.top.iter().map(|player| player.level).collect()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}
