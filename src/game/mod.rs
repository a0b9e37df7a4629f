//! Running games.
//!
//! - `Game`: seats a bracket of strategies on a `Board` and plays it out
//! - `Player`: rotates the board so every strategy plays from seat 0
//! - `History`: the shared ledger of applied moves
//!
//! ## Example
//!
//! ```
//! use rust_ludo::core::RulesConfig;
//! use rust_ludo::game::Game;
//! use rust_ludo::strategy::{FirstStrategy, LastStrategy, Strategy};
//!
//! let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(FirstStrategy), Box::new(LastStrategy)];
//! let outcome = Game::new(RulesConfig::default(), strategies, 7).unwrap().play();
//! assert_eq!(outcome.finish_order.len(), 2);
//! ```

mod game;
mod history;
mod player;

pub use game::{Game, GameOutcome};
pub use history::{History, HistoryView};
pub use player::Player;
