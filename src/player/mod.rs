pub mod order;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scored, named record. Players compare by `level` only; `name` is an
/// opaque identifier and never participates in `Ord` or `Eq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, level: u64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for Player {}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level.cmp(&other.level)
    }
}
