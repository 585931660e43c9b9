//! Offline ranking: the whole population is in memory.
//!
//! Both rankers take `&mut Vec<Player>` because they reorder the caller's
//! collection as part of the selection. The resulting order is a documented
//! post-condition, not something to rely on for anything else.

use std::collections::BinaryHeap;
use std::time::Instant;

use crate::player::Player;
use crate::player::order::sort_players;
use crate::rank::result::RankingResult;

/// Number of players that make the top 10% of a population of `n`.
#[inline]
pub const fn top_count(n: usize) -> usize {
    n / 10
}

/// Early-stopping heapsort: heapify into a max-heap, pop the top 10%,
/// sort the popped players ascending.
///
/// O(N + K log N) time. On return `players` holds the remaining
/// `N - N/10` players in max-heap order; the selected players are moved
/// out into the result.
pub fn heap_rank(players: &mut Vec<Player>) -> RankingResult {
    let start = Instant::now();
    let population = players.len();
    let count = top_count(population);

    let mut heap = BinaryHeap::from(std::mem::take(players));
    let mut top = Vec::with_capacity(count);
    while top.len() < count {
        match heap.pop() {
            Some(player) => top.push(player),
            None => break,
        }
    }
    *players = heap.into_vec();

    sort_players(&mut top);
    let elapsed = start.elapsed();

    tracing::debug!(
        algorithm = "heap",
        population,
        selected = top.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "offline ranking finished"
    );
    RankingResult::offline(top, elapsed)
}

/// Partition-based selection: place the player belonging at sorted index
/// `N - N/10` and copy out everything at or after it.
///
/// Expected O(N) selection (introselect, no quadratic worst case) plus
/// O(K log K) for the final sort. On return `players` still holds all N
/// players, partitioned: everything before index `N - N/10` has a level
/// <= everything from that index on.
pub fn quick_select_rank(players: &mut Vec<Player>) -> RankingResult {
    let start = Instant::now();
    let population = players.len();
    let split = population - top_count(population);

    let mut top = if split < population {
        players.select_nth_unstable(split);
        players[split..].to_vec()
    } else {
        Vec::new()
    };

    sort_players(&mut top);
    let elapsed = start.elapsed();

    tracing::debug!(
        algorithm = "quickselect",
        population,
        selected = top.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "offline ranking finished"
    );
    RankingResult::offline(top, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::heap::is_min_heap;
    use std::cmp::Reverse;

    fn players(levels: &[u64]) -> Vec<Player> {
        levels
            .iter()
            .enumerate()
            .map(|(idx, &level)| Player::new(format!("P{idx:03}"), level))
            .collect()
    }

    #[test]
    fn top_count_floors() {
        assert_eq!(top_count(0), 0);
        assert_eq!(top_count(9), 0);
        assert_eq!(top_count(10), 1);
        assert_eq!(top_count(132), 13);
    }

    #[test]
    fn heap_rank_leaves_remainder_as_max_heap() {
        let mut input = players(&[5, 3, 8, 1, 9, 2, 7, 4, 6, 0, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
        let result = heap_rank(&mut input);
        assert_eq!(result.levels(), vec![19, 20]);
        assert_eq!(input.len(), 18);
        let reversed: Vec<Reverse<u64>> = input.iter().map(|p| Reverse(p.level)).collect();
        assert!(is_min_heap(&reversed));
    }

    #[test]
    fn quick_select_rank_keeps_population_partitioned() {
        let mut input = players(&[5, 3, 8, 1, 9, 2, 7, 4, 6, 0, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
        let result = quick_select_rank(&mut input);
        assert_eq!(result.levels(), vec![19, 20]);
        assert_eq!(input.len(), 20);
        let split = 18;
        let low_max = input[..split].iter().map(|p| p.level).max().unwrap();
        let high_min = input[split..].iter().map(|p| p.level).min().unwrap();
        assert!(low_max <= high_min);
    }

    #[test]
    fn empty_population_is_empty_result() {
        let mut empty: Vec<Player> = Vec::new();
        assert!(heap_rank(&mut empty).top.is_empty());
        assert!(quick_select_rank(&mut empty).top.is_empty());
    }
}
