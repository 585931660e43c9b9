#![allow(dead_code)]

use std::path::{Path, PathBuf};

use leaderboard::player::Player;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture should be readable")
}

/// Players named `P000`, `P001`, ... in the given level order.
pub fn players(levels: &[u64]) -> Vec<Player> {
    levels
        .iter()
        .enumerate()
        .map(|(idx, &level)| Player::new(format!("P{idx:03}"), level))
        .collect()
}

pub fn levels(players: &[Player]) -> Vec<u64> {
    players.iter().map(|player| player.level).collect()
}

pub fn names(players: &[Player]) -> Vec<&str> {
    players.iter().map(|player| player.name.as_str()).collect()
}

/// Levels of the `k` best players, ascending. Reference answer for tests.
pub fn brute_force_top(levels: &[u64], k: usize) -> Vec<u64> {
    let mut sorted = levels.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.truncate(k);
    sorted.reverse();
    sorted
}
