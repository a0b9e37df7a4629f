//! Built-in strategies.
//!
//! Candidates arrive sorted by origin, so the first candidate moves the
//! least advanced pawn and the last moves the most advanced one.

use crate::core::{BoardState, GameRng, Move, PlayerId};

use super::Strategy;

/// Uniformly random choice.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Registry name.
    pub const NAME: &'static str = "random";

    /// Create a random strategy with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose(&mut self, candidates: &[Move], _board: &dyn BoardState) -> Option<Move> {
        self.rng.choose(candidates).copied()
    }
}

/// Always moves the least advanced pawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstStrategy;

impl FirstStrategy {
    /// Registry name.
    pub const NAME: &'static str = "first";
}

impl Strategy for FirstStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose(&mut self, candidates: &[Move], _board: &dyn BoardState) -> Option<Move> {
        candidates.first().copied()
    }
}

/// Always moves the most advanced pawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastStrategy;

impl LastStrategy {
    /// Registry name.
    pub const NAME: &'static str = "last";
}

impl Strategy for LastStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose(&mut self, candidates: &[Move], _board: &dyn BoardState) -> Option<Move> {
        candidates.last().copied()
    }
}

/// Strikes an opponent whenever it can, otherwise runs its lead pawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrikerStrategy;

impl StrikerStrategy {
    /// Registry name.
    pub const NAME: &'static str = "striker";
}

impl Strategy for StrikerStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn choose(&mut self, candidates: &[Move], board: &dyn BoardState) -> Option<Move> {
        // The board is rotated, so "us" is always seat 0.
        let me = PlayerId::new(0);
        candidates
            .iter()
            .find(|mv| board.owner_of(mv.to).is_some_and(|owner| owner != me))
            .or_else(|| candidates.last())
            .copied()
    }
}
