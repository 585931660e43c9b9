//! Online ranking over a stream that is never fully materialized.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::error::rank::RankError;
use crate::player::Player;
use crate::player::order::{min_level, sort_players};
use crate::rank::heap::{make_min_heap, replace_min};
use crate::rank::result::RankingResult;
use crate::stream::PlayerStream;

/// Drain `stream`, keeping the `reporting_interval` highest-level players
/// seen and recording the entry cutoff after every `reporting_interval`
/// players plus once more for the final count.
///
/// Memory is bounded by `reporting_interval` players. `elapsed` covers the
/// selection and bookkeeping only; time spent inside `next_player()` is
/// not counted.
///
/// A newcomer displaces the current minimum only when its level is
/// strictly greater, so among equal levels the earliest arrival keeps its
/// place.
///
/// Fails with `E_INVALID_INTERVAL` before reading anything when
/// `reporting_interval` is zero.
pub fn rank_incoming<S>(
    stream: &mut S,
    reporting_interval: usize,
) -> Result<RankingResult, RankError>
where
    S: PlayerStream + ?Sized,
{
    if reporting_interval == 0 {
        return Err(RankError::invalid_interval(reporting_interval));
    }

    let mut tracker = TopTracker::new(reporting_interval, stream.remaining());
    let mut elapsed = Duration::ZERO;

    while stream.remaining() > 0 {
        let player = stream.next_player()?;
        let start = Instant::now();
        tracker.observe(player);
        elapsed += start.elapsed();
    }

    let start = Instant::now();
    let result = tracker.finish();
    elapsed += start.elapsed();

    tracing::debug!(
        algorithm = "online",
        population = result.population,
        reporting_interval,
        selected = result.top.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "online ranking finished"
    );
    Ok(RankingResult::new(result.top, result.cutoffs, elapsed))
}

struct Finished {
    top: Vec<Player>,
    cutoffs: BTreeMap<usize, u64>,
    population: usize,
}

/// Bounded top-K state: an unordered buffer until it fills, a min-heap
/// afterwards.
struct TopTracker {
    capacity: usize,
    buffer: Vec<Player>,
    heap_ordered: bool,
    seen: usize,
    cutoffs: BTreeMap<usize, u64>,
}

impl TopTracker {
    fn new(capacity: usize, expected: usize) -> Self {
        Self {
            capacity,
            buffer: Vec::with_capacity(capacity.min(expected)),
            heap_ordered: false,
            seen: 0,
            cutoffs: BTreeMap::new(),
        }
    }

    fn observe(&mut self, player: Player) {
        self.seen += 1;

        if !self.heap_ordered {
            self.buffer.push(player);
            if self.buffer.len() == self.capacity {
                make_min_heap(&mut self.buffer);
                self.heap_ordered = true;
            }
        } else if self.buffer.first().is_some_and(|min| player > *min) {
            replace_min(&mut self.buffer, player);
        }

        if self.seen % self.capacity == 0 {
            self.record_cutoff();
        }
    }

    /// Minimum level in the tracked set. Before the buffer is heap-ordered
    /// the minimum can sit anywhere, so it is scanned for.
    fn current_cutoff(&self) -> Option<u64> {
        if self.heap_ordered {
            self.buffer.first().map(|player| player.level)
        } else {
            min_level(&self.buffer)
        }
    }

    fn record_cutoff(&mut self) {
        if let Some(level) = self.current_cutoff() {
            tracing::trace!(milestone = self.seen, level, "cutoff recorded");
            self.cutoffs.insert(self.seen, level);
        }
    }

    fn finish(mut self) -> Finished {
        if self.seen > 0 && !self.cutoffs.contains_key(&self.seen) {
            self.record_cutoff();
        }
        sort_players(&mut self.buffer);
        Finished {
            top: self.buffer,
            cutoffs: self.cutoffs,
            population: self.seen,
        }
    }
}
