use std::cmp::Ordering;

use super::Player;

/// Deterministic ascending order: level asc, then name asc.
///
/// Every ranker finishes with this so equal-level players in a `top`
/// sequence always appear in ascending name order, independent of the
/// order the selection step happened to leave them in.
#[inline]
pub fn ascending(left: &Player, right: &Player) -> Ordering {
    match left.level.cmp(&right.level) {
        Ordering::Equal => left.name.cmp(&right.name),
        ord => ord,
    }
}

/// Sort players by level asc, name asc.
pub fn sort_players(items: &mut [Player]) {
    items.sort_by(ascending);
}

/// Returns true if `items` is non-descending by level.
pub fn is_sorted_by_level(items: &[Player]) -> bool {
    items.windows(2).all(|pair| pair[0].level <= pair[1].level)
}

/// Smallest level in `items`, if any. Does not assume any layout.
pub fn min_level(items: &[Player]) -> Option<u64> {
    items.iter().map(|player| player.level).min()
}
