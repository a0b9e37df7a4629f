//! Board layers.
//!
//! Every position lives on one of three layers:
//! - `Begin`: the off-board holding area where unplayed and struck pawns wait
//! - `Event`: the shared circular track
//! - `Home`: a player's private finishing lane
//!
//! Layers are ordered `Begin < Event < Home`, which is also the direction a
//! pawn travels.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// One of the three board layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Holding area before a pawn enters the track.
    Begin,
    /// The shared track.
    Event,
    /// The private finishing lane.
    Home,
}

impl Layer {
    /// All layers in travel order.
    pub const ALL: [Layer; 3] = [Layer::Begin, Layer::Event, Layer::Home];

    /// Signed index: Begin = -1, Event = 0, Home = 1.
    #[must_use]
    pub const fn index(self) -> i8 {
        match self {
            Layer::Begin => -1,
            Layer::Event => 0,
            Layer::Home => 1,
        }
    }

    /// Single-character code used by the text codecs.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Layer::Begin => 'B',
            Layer::Event => 'E',
            Layer::Home => 'H',
        }
    }

    /// Decode a layer from its single-character code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(Layer::Begin),
            'E' => Some(Layer::Event),
            'H' => Some(Layer::Home),
            _ => None,
        }
    }

    /// The layer a pawn reaches after crossing a layer boundary.
    ///
    /// Fails on `Home`, which has no successor.
    pub fn next(self) -> Result<Self, EngineError> {
        match self {
            Layer::Begin => Ok(Layer::Event),
            Layer::Event => Ok(Layer::Home),
            Layer::Home => Err(EngineError::InvalidTransition { from: self }),
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_index_order() {
        assert_eq!(Layer::Begin.index(), -1);
        assert_eq!(Layer::Event.index(), 0);
        assert_eq!(Layer::Home.index(), 1);

        assert!(Layer::Begin < Layer::Event);
        assert!(Layer::Event < Layer::Home);
    }

    #[test]
    fn test_layer_codes() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_code(layer.code()), Some(layer));
        }
        assert_eq!(Layer::from_code('X'), None);
        assert_eq!(Layer::from_code('b'), None);
    }

    #[test]
    fn test_layer_next() {
        assert_eq!(Layer::Begin.next(), Ok(Layer::Event));
        assert_eq!(Layer::Event.next(), Ok(Layer::Home));
        assert_eq!(
            Layer::Home.next(),
            Err(EngineError::InvalidTransition { from: Layer::Home })
        );
    }
}
