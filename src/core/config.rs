//! Rules configuration.
//!
//! `RulesConfig` carries the handful of numbers the rules depend on. It is
//! serde-derivable so embedding applications can load it from whatever
//! format they like; the engine only asks that it `validate()`.
//!
//! ## Board geometry
//!
//! - The track has `player_count * dots_per_player` spots.
//! - Player `p` enters the track at `E(p * dots_per_player)` (its start).
//! - Player `p` waits at `B(p * dots_per_player - die_faces)`, normalized,
//!   so only a full-face roll carries a waiting pawn onto its start. This
//!   needs `die_faces <= dots_per_player` and `die_faces < board size`,
//!   which `validate()` enforces.
//! - Player `p`'s home lane is `H(start) .. H(start + pawns_per_player)`.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::PlayerId;
use super::position::Position;

/// Rules parameters shared by every board in a game or tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Seats on the board (1-255).
    pub player_count: usize,

    /// Faces on the die. Rolling the top face grants another turn.
    pub die_faces: u32,

    /// Pawns each seated player races.
    pub pawns_per_player: usize,

    /// Track spots between consecutive start positions.
    pub dots_per_player: usize,

    /// May a pawn land on a spot already held by its own player?
    pub self_strike_allowed: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            die_faces: 6,
            pawns_per_player: 4,
            dots_per_player: 10,
            self_strike_allowed: false,
        }
    }
}

impl RulesConfig {
    /// Create the classic four-seat configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the die face count.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u32) -> Self {
        self.die_faces = faces;
        self
    }

    /// Set pawns per player.
    #[must_use]
    pub fn with_pawns_per_player(mut self, pawns: usize) -> Self {
        self.pawns_per_player = pawns;
        self
    }

    /// Set track spots per player.
    #[must_use]
    pub fn with_dots_per_player(mut self, dots: usize) -> Self {
        self.dots_per_player = dots;
        self
    }

    /// Allow or forbid landing on your own pawn.
    #[must_use]
    pub fn with_self_strike(mut self, allowed: bool) -> Self {
        self.self_strike_allowed = allowed;
        self
    }

    /// Check the ordering invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=255).contains(&self.player_count) {
            return Err(EngineError::InvalidConfig(format!(
                "player_count must be 1-255, got {}",
                self.player_count
            )));
        }
        if self.die_faces < 1 {
            return Err(EngineError::InvalidConfig("die_faces must be at least 1".to_string()));
        }
        if self.pawns_per_player < 1 {
            return Err(EngineError::InvalidConfig(
                "pawns_per_player must be at least 1".to_string(),
            ));
        }
        if self.pawns_per_player >= self.dots_per_player {
            return Err(EngineError::InvalidConfig(format!(
                "pawns_per_player ({}) must be less than dots_per_player ({})",
                self.pawns_per_player, self.dots_per_player
            )));
        }
        if self.pawns_per_player >= self.die_faces as usize {
            return Err(EngineError::InvalidConfig(format!(
                "pawns_per_player ({}) must be less than die_faces ({})",
                self.pawns_per_player, self.die_faces
            )));
        }
        let Some(board_size) = self.board_size_checked() else {
            return Err(EngineError::InvalidConfig("board is too large".to_string()));
        };
        // A waiting pawn must cross its own start with one full-face roll.
        if self.die_faces as usize > self.dots_per_player {
            return Err(EngineError::InvalidConfig(format!(
                "die_faces ({}) must not exceed dots_per_player ({}): begin positions sit one full roll behind each start",
                self.die_faces, self.dots_per_player
            )));
        }
        if self.die_faces as i64 >= board_size as i64 {
            return Err(EngineError::InvalidConfig(format!(
                "die_faces ({}) must be less than the board size ({}): a full roll from begin would not move",
                self.die_faces, board_size
            )));
        }
        Ok(())
    }

    fn board_size_checked(&self) -> Option<i32> {
        let size = self.player_count.checked_mul(self.dots_per_player)?;
        i32::try_from(size).ok()
    }

    /// Spots on the shared track.
    #[must_use]
    pub fn board_size(&self) -> i32 {
        (self.player_count * self.dots_per_player) as i32
    }

    /// Spot offset between consecutive seats.
    #[must_use]
    pub fn dots(&self) -> i32 {
        self.dots_per_player as i32
    }

    /// Where `player` enters the track.
    #[must_use]
    pub fn start_position(&self, player: PlayerId) -> Position {
        Position::event(player.index() as i32 * self.dots())
    }

    /// Where `player`'s waiting pawns sit.
    #[must_use]
    pub fn begin_position(&self, player: PlayerId) -> Position {
        Position::begin(player.index() as i32 * self.dots() - self.die_faces as i32)
            .normalize(self.board_size())
    }
}
