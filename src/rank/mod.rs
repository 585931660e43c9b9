//! Selection engine: offline top-10% and online streaming top-K.

pub mod heap;
pub mod offline;
pub mod online;
pub mod result;

use std::fmt;
use std::str::FromStr;

pub use result::RankingResult;

/// Default reporting interval for online ranking.
pub const DEFAULT_REPORTING_INTERVAL: usize = 50;

/// Which ranking algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Heapify everything, pop the top 10%.
    Heap,
    /// Partition around the 90th percentile position, sort the tail.
    QuickSelect,
    /// Bounded min-heap over a stream, with periodic cutoffs.
    Online,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Heap, Algorithm::QuickSelect, Algorithm::Online];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Heap => "heap",
            Algorithm::QuickSelect => "quickselect",
            Algorithm::Online => "online",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}'; expected heap, quickselect, or online",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heap" => Ok(Algorithm::Heap),
            "quickselect" | "quick-select" | "select" => Ok(Algorithm::QuickSelect),
            "online" | "stream" => Ok(Algorithm::Online),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
