//! Race rules.
//!
//! - `Board`: move generation, move application and turn order
//! - `RuleEvaluator`: narrows potential moves to legal ones
//!
//! Strike moves (sending an opponent back to Begin) are produced by the
//! board directly and never pass through the evaluator.

pub mod board;
pub mod evaluator;

pub use board::Board;
pub use evaluator::RuleEvaluator;
