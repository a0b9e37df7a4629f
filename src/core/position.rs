//! Board coordinates.
//!
//! A `Position` is a `(layer, spot)` pair. Spots are plain signed integers;
//! `normalize` folds them into `[0, board_size)` whenever wraparound matters.
//!
//! ## Text form
//!
//! `<layer code><spot>`, e.g. `B34`, `E0`, `H-2`.
//!
//! ```
//! use rust_ludo::core::{Layer, Position};
//!
//! let pos = Position::new(Layer::Begin, -6).normalize(40);
//! assert_eq!(pos, Position::new(Layer::Begin, 34));
//! assert_eq!(pos.to_string(), "B34");
//! assert_eq!(Position::parse("B34"), Some(pos));
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::layer::Layer;

/// A spot on one of the board layers.
///
/// Ordered by layer first, then spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// The layer this spot lives on.
    pub layer: Layer,
    /// Coordinate within the layer.
    pub spot: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(layer: Layer, spot: i32) -> Self {
        Self { layer, spot }
    }

    /// Shorthand for a `Begin` position.
    #[must_use]
    pub const fn begin(spot: i32) -> Self {
        Self::new(Layer::Begin, spot)
    }

    /// Shorthand for an `Event` position.
    #[must_use]
    pub const fn event(spot: i32) -> Self {
        Self::new(Layer::Event, spot)
    }

    /// Shorthand for a `Home` position.
    #[must_use]
    pub const fn home(spot: i32) -> Self {
        Self::new(Layer::Home, spot)
    }

    /// Fold the spot into `[0, |board_size|)`, keeping the layer.
    ///
    /// Idempotent, and the identity for spots already in range.
    /// `board_size` must be non-zero.
    #[must_use]
    pub fn normalize(self, board_size: i32) -> Self {
        Self::new(self.layer, self.spot.rem_euclid(board_size))
    }

    /// Shift the spot by `delta` without normalizing.
    #[must_use]
    pub const fn move_by(self, delta: i32) -> Self {
        Self::new(self.layer, self.spot + delta)
    }

    /// Same spot on the next layer.
    pub fn next_layer(self) -> Result<Self, EngineError> {
        Ok(Self::new(self.layer.next()?, self.spot))
    }

    /// Parse the text form. Returns `None` on any malformed input.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let layer = Layer::from_code(chars.next()?)?;
        let spot = chars.as_str().parse::<i32>().ok()?;
        Some(Self::new(layer, spot))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.layer.code(), self.spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range_is_identity() {
        let pos = Position::event(17);
        assert_eq!(pos.normalize(40), pos);
    }

    #[test]
    fn test_normalize_wraps_both_directions() {
        assert_eq!(Position::event(42).normalize(40), Position::event(2));
        assert_eq!(Position::begin(-6).normalize(40), Position::begin(34));
        assert_eq!(Position::home(-41).normalize(40), Position::home(39));
        assert_eq!(Position::event(40).normalize(40), Position::event(0));
    }

    #[test]
    fn test_normalize_negative_board_size() {
        assert_eq!(Position::event(-3).normalize(-40), Position::event(37));
    }

    #[test]
    fn test_move_by_does_not_normalize() {
        assert_eq!(Position::event(38).move_by(5), Position::event(43));
        assert_eq!(Position::event(2).move_by(-5), Position::event(-3));
    }

    #[test]
    fn test_next_layer_keeps_spot() {
        assert_eq!(Position::begin(0).next_layer(), Ok(Position::event(0)));
        assert_eq!(Position::event(3).next_layer(), Ok(Position::home(3)));
        assert!(Position::home(3).next_layer().is_err());
    }

    #[test]
    fn test_ordering_layer_first() {
        assert!(Position::begin(39) < Position::event(0));
        assert!(Position::event(39) < Position::home(0));
        assert!(Position::event(3) < Position::event(4));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Position::parse("E12"), Some(Position::event(12)));
        assert_eq!(Position::parse("B-6"), Some(Position::begin(-6)));
        assert_eq!(Position::parse("H0"), Some(Position::home(0)));
        assert_eq!(Position::parse(""), None);
        assert_eq!(Position::parse("E"), None);
        assert_eq!(Position::parse("X3"), None);
        assert_eq!(Position::parse("E3x"), None);
        assert_eq!(Position::parse("3"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::begin(-6).to_string(), "B-6");
        assert_eq!(Position::home(2).to_string(), "H2");
    }

    #[test]
    fn test_position_serialization() {
        let pos = Position::home(3);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
