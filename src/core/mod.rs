//! Core engine types: coordinates, moves, seats, board state, dice, RNG,
//! configuration and errors.
//!
//! Everything here is rules-agnostic plumbing; the race rules themselves
//! live in `rules`.

pub mod config;
pub mod die;
pub mod error;
pub mod layer;
pub mod moves;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use config::RulesConfig;
pub use die::{Die, FixedRolls, RollSource};
pub use error::{EngineError, EngineResult};
pub use layer::Layer;
pub use moves::Move;
pub use player::{PlayerId, PlayerMap};
pub use position::Position;
pub use rng::GameRng;
pub use state::{BoardState, ImmutableBoardState, MutableBoardState, Pawns, ShiftedBoardState};
