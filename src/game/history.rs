//! Append-only move ledger.

use std::sync::{Arc, PoisonError, RwLock};

use im::Vector;

use crate::core::Move;

/// Every move applied during one game, strikes included, in order.
///
/// Cloning shares the ledger; the owning `Game` is the only writer.
#[derive(Clone, Debug, Default)]
pub struct History {
    moves: Arc<RwLock<Vector<Move>>>,
}

impl History {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an applied move.
    pub fn push(&self, mv: Move) {
        self.moves
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(mv);
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cheap copy of the ledger as it stands now.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Move> {
        self.moves.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// A read handle that rotates every move by `rotation` spots.
    #[must_use]
    pub fn view(&self, rotation: i32, board_size: i32) -> HistoryView {
        HistoryView {
            history: self.clone(),
            rotation,
            board_size,
        }
    }
}

/// A strategy's window onto the ledger, in its own seat-0 frame.
#[derive(Clone, Debug)]
pub struct HistoryView {
    history: History,
    rotation: i32,
    board_size: i32,
}

impl HistoryView {
    /// All moves so far, rotated.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .snapshot()
            .iter()
            .map(|mv| mv.shift(self.rotation, self.board_size))
            .collect()
    }

    /// The most recent move, rotated.
    #[must_use]
    pub fn last(&self) -> Option<Move> {
        self.history
            .snapshot()
            .last()
            .map(|mv| mv.shift(self.rotation, self.board_size))
    }

    /// Number of moves so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True if no move has been applied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_push_and_snapshot() {
        let history = History::new();
        assert!(history.is_empty());

        let mv = Move::new(Position::begin(34), Position::event(0));
        history.push(mv);
        let snapshot = history.snapshot();
        history.push(Move::new(Position::event(0), Position::event(3)));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_view_rotates_and_follows_writer() {
        let history = History::new();
        let view = history.view(-10, 40);
        assert!(view.is_empty());
        assert_eq!(view.last(), None);

        history.push(Move::new(Position::begin(4), Position::event(10)));
        assert_eq!(view.len(), 1);
        assert_eq!(
            view.last(),
            Some(Move::new(Position::begin(34), Position::event(0)))
        );
        assert_eq!(view.moves().len(), 1);
    }
}
