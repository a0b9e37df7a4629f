//! Legality filter for candidate moves.
//!
//! A `RuleEvaluator` is scoped to one board state and one player's start
//! position. It narrows potential moves in four passes:
//!
//! 1. drop stationary moves
//! 2. drop moves that overshoot the home lane or stop short in Begin
//! 3. drop illegal strikes on your own pawns and home-lane stacking
//! 4. apply forced-move precedence (leave start, else claim start)

use tracing::trace;

use crate::core::{BoardState, Layer, Move, Position, RulesConfig};

/// Pure legality check for one player's candidate moves.
pub struct RuleEvaluator<'a> {
    state: &'a dyn BoardState,
    start: Position,
    pawns_per_player: usize,
    self_strike_allowed: bool,
}

impl<'a> RuleEvaluator<'a> {
    /// Scope an evaluator to `state` and the mover's `start` position.
    #[must_use]
    pub fn new(state: &'a dyn BoardState, start: Position, config: &RulesConfig) -> Self {
        Self {
            state,
            start,
            pawns_per_player: config.pawns_per_player,
            self_strike_allowed: config.self_strike_allowed,
        }
    }

    /// Narrow `candidates` to the moves the rules allow for `roll`.
    #[must_use]
    pub fn evaluate(&self, candidates: &[Move], roll: u32) -> Vec<Move> {
        let legal: Vec<Move> = candidates
            .iter()
            .copied()
            .filter(|mv| !mv.is_stationary())
            .filter(|mv| self.in_bounds(mv))
            .filter(|mv| self.strike_allowed(mv))
            .collect();

        let result = self.forced(legal);
        trace!(
            start = %self.start,
            roll,
            candidates = candidates.len(),
            legal = result.len(),
            "evaluated moves"
        );
        result
    }

    fn in_bounds(&self, mv: &Move) -> bool {
        match mv.to.layer {
            Layer::Home => mv.to.spot < self.start.spot + self.pawns_per_player as i32,
            Layer::Event => true,
            // Start is an Event position, so a plain Begin target never matches.
            Layer::Begin => mv.to == self.start,
        }
    }

    fn strike_allowed(&self, mv: &Move) -> bool {
        if mv.from == self.start {
            return true;
        }
        match mv.to.layer {
            Layer::Begin => true,
            Layer::Event => {
                self.self_strike_allowed
                    || self.state.owner_of(mv.to) != self.state.owner_of(mv.from)
            }
            Layer::Home => self.state.owner_of(mv.to).is_none(),
        }
    }

    fn forced(&self, legal: Vec<Move>) -> Vec<Move> {
        let leaving = Self::only(&legal, |mv| mv.from == self.start);
        if leaving.len() == 1 {
            return leaving;
        }
        let claiming = Self::only(&legal, |mv| mv.to == self.start);
        if claiming.len() == 1 {
            return claiming;
        }
        legal
    }

    fn only(moves: &[Move], predicate: impl Fn(&Move) -> bool) -> Vec<Move> {
        moves.iter().copied().filter(|mv| predicate(mv)).collect()
    }
}
