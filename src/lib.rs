//! # rust-ludo
//!
//! A deterministic rules engine and tournament runner for Ludo-style board
//! races ("Mens-erger-je-niet").
//!
//! ## Design Principles
//!
//! 1. **Seat-Agnostic Strategies**: every strategy plays as if it sat in
//!    seat 0. Moves, board views and history are rotated for it.
//!
//! 2. **No Hidden Randomness**: dice, games and strategies are all seeded
//!    explicitly. The same seed replays the same game.
//!
//! 3. **Configuration Over Convention**: board size, die faces, pawn count
//!    and self-strike rules come from `RulesConfig`.
//!
//! ## Architecture
//!
//! - **Layers**: a pawn is in Begin (waiting), Event (the shared track) or
//!   Home (its private lane). Crossing your own start moves up a layer.
//!
//! - **Persistent Snapshots**: `ImmutableBoardState` shares structure via
//!   `im-rs`, so renderers can keep one per turn cheaply.
//!
//! - **Parallel Brackets**: tournaments run one rayon task per bracket and
//!   sum their counters.
//!
//! ## Modules
//!
//! - `core`: positions, moves, seats, board state, dice, RNG, config, errors
//! - `rules`: move generation, legality and turn order
//! - `game`: the turn loop, perspective rotation and move history
//! - `strategy`: the `Strategy` trait, registry, built-in and manual players
//! - `tournament`: repeated games, finish tallies and scoring

pub mod core;
pub mod game;
pub mod rules;
pub mod strategy;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    BoardState, Die, EngineError, EngineResult, FixedRolls, GameRng, ImmutableBoardState, Layer,
    Move, MutableBoardState, PlayerId, Position, RollSource, RulesConfig,
};

pub use crate::game::{Game, GameOutcome, History, HistoryView};

pub use crate::rules::{Board, RuleEvaluator};

pub use crate::strategy::{ManualStrategy, PendingChoice, Strategy, StrategyFactory, StrategyRegistry};

pub use crate::tournament::{EventCounter, Tournament, TournamentConfig};
