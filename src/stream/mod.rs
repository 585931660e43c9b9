//! Sequential, single-pass player sources.

pub mod load;

use crate::error::rank::StreamError;
use crate::player::Player;

/// A pull-based producer of players.
///
/// Consumers must treat `remaining() > 0` as the only continuation test;
/// a source that cannot report an accurate count does not fit this trait.
pub trait PlayerStream {
    /// The next player in arrival order.
    fn next_player(&mut self) -> Result<Player, StreamError>;

    /// Number of players not yet produced.
    fn remaining(&self) -> usize;
}

/// A stream over an owned, in-memory list of players.
#[derive(Debug, Clone)]
pub struct VectorPlayerStream {
    players: Vec<Player>,
    index: usize,
}

impl VectorPlayerStream {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players, index: 0 }
    }

    /// Number of players already produced.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl From<Vec<Player>> for VectorPlayerStream {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}

impl PlayerStream for VectorPlayerStream {
    fn next_player(&mut self) -> Result<Player, StreamError> {
        let player = self
            .players
            .get(self.index)
            .cloned()
            .ok_or(StreamError::Exhausted)?;
        self.index += 1;
        Ok(player)
    }

    fn remaining(&self) -> usize {
        self.players.len() - self.index
    }
}
