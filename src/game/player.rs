//! A seated strategy.
//!
//! Strategies always think they sit in seat 0. `Player` does the
//! translation: candidates are rotated by `-(seat * dots)` spots on the way
//! in, the board is read through a shifted view, and the answer is rotated
//! back before the game sees it.

use crate::core::{Move, MutableBoardState, PlayerId, RulesConfig};
use crate::strategy::Strategy;

use super::history::History;

/// A strategy bound to a seat.
pub struct Player {
    strategy: Box<dyn Strategy>,
    seat: PlayerId,
    dots: i32,
    board_size: i32,
}

impl Player {
    /// Seat `strategy` at `seat`.
    #[must_use]
    pub fn new(strategy: Box<dyn Strategy>, seat: PlayerId, rules: &RulesConfig) -> Self {
        Self {
            strategy,
            seat,
            dots: rules.dots(),
            board_size: rules.board_size(),
        }
    }

    /// The seat this player occupies.
    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    /// The strategy's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// Spots added to every real position to reach this player's frame.
    #[must_use]
    pub fn rotation(&self) -> i32 {
        -(self.seat.index() as i32 * self.dots)
    }

    /// Hand the strategy a rotated view of the ledger.
    pub fn initialize(&mut self, history: &History) {
        self.strategy
            .initialize(history.view(self.rotation(), self.board_size));
    }

    /// Ask the strategy for a move. The answer is in board coordinates.
    pub fn choose(&mut self, candidates: &[Move], state: &MutableBoardState) -> Option<Move> {
        let rotation = self.rotation();
        let rotated: Vec<Move> = candidates
            .iter()
            .map(|mv| mv.shift(rotation, self.board_size))
            .collect();
        let view = state.shifted_view(self.seat.index());

        self.strategy
            .choose(&rotated, &view)
            .map(|mv| mv.shift(-rotation, self.board_size))
    }

    /// Report the final placing.
    pub fn finalize(&mut self, finish_index: usize) {
        self.strategy.finalize(finish_index);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("strategy", &self.strategy.name())
            .field("seat", &self.seat)
            .finish()
    }
}
