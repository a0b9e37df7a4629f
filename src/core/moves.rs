//! Moves: a pawn travelling from one position to another.
//!
//! ## Text form
//!
//! `<FROM->TO>` with both endpoints in `Position` text form, for example
//! `<B-6->B0>` or `<E38->H2>`. The parser is strict and never fails loudly:
//! anything malformed parses to `None`, since move text usually comes from
//! logs or external tools.
//!
//! ```
//! use rust_ludo::core::{Move, Position};
//!
//! let mv = Move::new(Position::begin(34), Position::event(0));
//! assert_eq!(mv.to_string(), "<B34->E0>");
//! assert_eq!(Move::parse("<B34->E0>"), Some(mv));
//! assert_eq!(Move::parse("<B34E0>"), None);
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::position::Position;

/// Shortest well-formed text: `<` + 2-char endpoint + `->` + 2-char endpoint + `>`.
const MIN_TEXT_LEN: usize = 8;

/// A pawn move. Ordered by `(from, to)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the pawn starts.
    pub from: Position,
    /// Where the pawn lands.
    pub to: Position,
}

impl Move {
    /// Create a move between two positions.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Create a move from optional endpoints, failing if either is missing.
    pub fn try_new(from: Option<Position>, to: Option<Position>) -> Result<Self, EngineError> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self::new(from, to)),
            _ => Err(EngineError::InvalidMove),
        }
    }

    /// True if the pawn would not change position.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.from == self.to
    }

    /// Translate both endpoints by `spots` and normalize them.
    ///
    /// `m.shift(s, n).shift(-s, n)` restores any move whose spots are
    /// already normalized for `n`.
    #[must_use]
    pub fn shift(&self, spots: i32, board_size: i32) -> Self {
        Self::new(
            self.from.move_by(spots).normalize(board_size),
            self.to.move_by(spots).normalize(board_size),
        )
    }

    /// Parse the text form. Returns `None` on any malformed input.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() < MIN_TEXT_LEN || !text.starts_with('<') || !text.ends_with('>') {
            return None;
        }

        let arrow = text.find("->")?;
        // Each endpoint needs a layer code and at least one digit.
        if arrow < 3 || arrow + 2 > text.len() - 3 {
            return None;
        }

        let from = Position::parse(&text[1..arrow])?;
        let to = Position::parse(&text[arrow + 2..text.len() - 1])?;
        Some(Self::new(from, to))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}->{}>", self.from, self.to)
    }
}
