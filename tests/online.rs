mod helpers;

use std::collections::BTreeMap;

use helpers::{brute_force_top, levels, names, players};
use leaderboard::error::codes::ErrorCode;
use leaderboard::error::rank::StreamError;
use leaderboard::player::Player;
use leaderboard::rank::online::rank_incoming;
use leaderboard::stream::load::load_players;
use leaderboard::stream::{PlayerStream, VectorPlayerStream};
use proptest::prelude::*;

/// Brute-force cutoffs: for each milestone, the minimum of the best
/// `interval` levels among the first `milestone` players.
fn expected_cutoffs(input: &[u64], interval: usize) -> BTreeMap<usize, u64> {
    let mut milestones: Vec<usize> = (1..=input.len() / interval).map(|m| m * interval).collect();
    if !input.is_empty() && input.len() % interval != 0 {
        milestones.push(input.len());
    }
    milestones
        .into_iter()
        .map(|m| {
            let best = brute_force_top(&input[..m], interval);
            (m, best[0])
        })
        .collect()
}

#[test]
fn stream_of_132_with_interval_50() {
    let population = load_players(&helpers::fixture_path("players_132.csv"), None).unwrap();
    let input = levels(&population);
    let mut stream = VectorPlayerStream::new(population);

    let result = rank_incoming(&mut stream, 50).unwrap();

    assert_eq!(stream.remaining(), 0);
    assert_eq!(result.cutoffs.keys().copied().collect::<Vec<_>>(), vec![50, 100, 132]);
    assert_eq!(result.cutoffs, expected_cutoffs(&input, 50));
    assert_eq!(result.top.len(), 50);
    assert_eq!(levels(&result.top), brute_force_top(&input, 50));
}

#[test]
fn dividing_length_has_no_extra_final_entry() {
    let input: Vec<u64> = (0..100).rev().collect();
    let mut stream = VectorPlayerStream::new(players(&input));
    let result = rank_incoming(&mut stream, 25).unwrap();
    assert_eq!(
        result.cutoffs,
        BTreeMap::from([(25, 75), (50, 75), (75, 75), (100, 75)])
    );
}

#[test]
fn rising_levels_raise_the_cutoff() {
    let input: Vec<u64> = (1..=10).collect();
    let mut stream = VectorPlayerStream::new(players(&input));
    let result = rank_incoming(&mut stream, 3).unwrap();
    assert_eq!(
        result.cutoffs,
        BTreeMap::from([(3, 1), (6, 4), (9, 7), (10, 8)])
    );
    assert_eq!(levels(&result.top), vec![8, 9, 10]);
}

#[test]
fn short_stream_returns_everyone_sorted() {
    let mut stream = VectorPlayerStream::new(players(&[30, 10, 20]));
    let result = rank_incoming(&mut stream, 50).unwrap();
    assert_eq!(levels(&result.top), vec![10, 20, 30]);
    assert_eq!(result.cutoffs, BTreeMap::from([(3, 10)]));
}

#[test]
fn zero_interval_is_refused_before_reading() {
    let mut stream = VectorPlayerStream::new(players(&[1, 2, 3, 4]));
    let err = rank_incoming(&mut stream, 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInterval);
    assert_eq!(stream.remaining(), 4);
    assert_eq!(stream.consumed(), 0);
}

#[test]
fn earliest_arrival_wins_ties_at_the_boundary() {
    let input = vec![
        Player::new("FIRST", 7),
        Player::new("SECOND", 7),
        Player::new("THIRD", 7),
    ];
    let mut stream = VectorPlayerStream::new(input);
    let result = rank_incoming(&mut stream, 2).unwrap();
    assert_eq!(names(&result.top), vec!["FIRST", "SECOND"]);
}

/// Claims more players than it can deliver.
struct OverreportingStream {
    inner: VectorPlayerStream,
}

impl PlayerStream for OverreportingStream {
    fn next_player(&mut self) -> Result<Player, StreamError> {
        self.inner.next_player()
    }

    fn remaining(&self) -> usize {
        self.inner.remaining() + 1
    }
}

#[test]
fn malformed_stream_surfaces_exhaustion() {
    let mut stream = OverreportingStream {
        inner: VectorPlayerStream::new(players(&[1, 2])),
    };
    let err = rank_incoming(&mut stream, 1).unwrap_err();
    assert_eq!(err.code, ErrorCode::StreamExhausted);
}

#[test]
fn works_through_a_trait_object() {
    let mut stream: Box<dyn PlayerStream> = Box::new(VectorPlayerStream::new(players(&[4, 8, 2])));
    let result = rank_incoming(stream.as_mut(), 2).unwrap();
    assert_eq!(levels(&result.top), vec![4, 8]);
}

proptest! {
    #[test]
    fn cutoffs_match_brute_force(
        input in prop::collection::vec(0u64..100, 0..300),
        interval in 1usize..40,
    ) {
        let mut stream = VectorPlayerStream::new(players(&input));
        let result = rank_incoming(&mut stream, interval).unwrap();

        prop_assert_eq!(result.cutoffs, expected_cutoffs(&input, interval));
        prop_assert_eq!(levels(&result.top), brute_force_top(&input, interval));
    }
}
