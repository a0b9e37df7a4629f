//! Externally driven strategy.
//!
//! `ManualStrategy` is the engine's one blocking point. On its turn it
//! publishes a `PendingChoice` on a channel and waits for the other side to
//! resolve it. Cancelling the choice, dropping it, or dropping the receiving
//! end all yield no move for that turn; the game then falls back to a random
//! legal move and keeps running.
//!
//! ```
//! use std::thread;
//! use rust_ludo::core::{Move, MutableBoardState, Position, RulesConfig};
//! use rust_ludo::strategy::{ManualStrategy, Strategy};
//!
//! let (mut strategy, requests) = ManualStrategy::new("alice");
//! let actor = thread::spawn(move || {
//!     let pending = requests.recv().unwrap();
//!     let first = pending.candidates()[0];
//!     pending.resolve(first);
//! });
//!
//! let state = MutableBoardState::new(&RulesConfig::default(), 4);
//! let mv = Move::new(Position::begin(34), Position::event(0));
//! assert_eq!(strategy.choose(&[mv], &state), Some(mv));
//! actor.join().unwrap();
//! ```

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, warn};

use crate::core::{BoardState, Move};

use super::Strategy;

/// A choice waiting for an external decision.
#[derive(Debug)]
pub struct PendingChoice {
    candidates: Vec<Move>,
    reply: Sender<Option<Move>>,
}

impl PendingChoice {
    /// Legal moves, rotated so the deciding player sits in seat 0.
    #[must_use]
    pub fn candidates(&self) -> &[Move] {
        &self.candidates
    }

    /// Answer with a move.
    pub fn resolve(self, mv: Move) {
        // The game may already have moved on; nothing to do then.
        let _ = self.reply.send(Some(mv));
    }

    /// Abort the turn without a move.
    pub fn cancel(self) {
        let _ = self.reply.send(None);
    }
}

/// Strategy that waits for an external actor on every non-empty turn.
#[derive(Debug)]
pub struct ManualStrategy {
    name: String,
    requests: Sender<PendingChoice>,
}

impl ManualStrategy {
    /// Create the strategy and the receiver the external actor listens on.
    #[must_use]
    pub fn new(name: impl Into<String>) -> (Self, Receiver<PendingChoice>) {
        let (requests, receiver) = channel();
        let strategy = Self {
            name: name.into(),
            requests,
        };
        (strategy, receiver)
    }
}

impl Strategy for ManualStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&mut self, candidates: &[Move], _board: &dyn BoardState) -> Option<Move> {
        if candidates.is_empty() {
            return None;
        }

        let (reply, answer) = channel();
        let pending = PendingChoice {
            candidates: candidates.to_vec(),
            reply,
        };
        if self.requests.send(pending).is_err() {
            warn!(strategy = %self.name, "manual choice channel closed");
            return None;
        }

        match answer.recv() {
            Ok(Some(mv)) => Some(mv),
            Ok(None) => {
                debug!(strategy = %self.name, "manual choice cancelled");
                None
            }
            Err(_) => {
                warn!(strategy = %self.name, "manual choice dropped without an answer");
                None
            }
        }
    }

    fn finalize(&mut self, finish_index: usize) {
        debug!(strategy = %self.name, finish_index, "manual player finished");
    }
}
