//! Decision-making agents.
//!
//! A `Strategy` picks one move per turn from the legal candidates. Every
//! strategy reasons as if it sat in seat 0: candidates, board view and
//! history all arrive rotated, and the chosen move is rotated back by the
//! game before it is applied.
//!
//! Strategies are resolved by name through a `StrategyFactory`. The
//! `StrategyRegistry` implementation maps names to constructor closures,
//! populated at startup.
//!
//! ## Example
//!
//! ```
//! use rust_ludo::strategy::{StrategyFactory, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_builtins();
//! let strategy = registry.get_strategy("random", 7).unwrap();
//! assert_eq!(strategy.name(), "random");
//! assert!(registry.get_strategy("oracle", 7).is_err());
//! ```

mod builtin;
mod manual;

pub use builtin::{FirstStrategy, LastStrategy, RandomStrategy, StrikerStrategy};
pub use manual::{ManualStrategy, PendingChoice};

use rustc_hash::FxHashMap;

use crate::core::{BoardState, EngineError, Move};
use crate::game::HistoryView;

/// A pluggable decision maker.
pub trait Strategy: Send {
    /// Stable display name, also the key results are tallied under.
    fn name(&self) -> &str;

    /// Called once before the first `choose`, with a rotated history view.
    fn initialize(&mut self, history: HistoryView) {
        let _ = history;
    }

    /// Pick one of `candidates`. Called every turn, even when `candidates`
    /// is empty. Returning `None` or a move outside `candidates` makes the
    /// game pick a random legal move instead.
    fn choose(&mut self, candidates: &[Move], board: &dyn BoardState) -> Option<Move>;

    /// Called once when the game ends with this strategy's 0-based finish
    /// position.
    fn finalize(&mut self, finish_index: usize) {
        let _ = finish_index;
    }
}

/// Resolves strategies by name.
pub trait StrategyFactory: Sync {
    /// Build a fresh strategy instance seeded with `seed`.
    fn get_strategy(&self, name: &str, seed: u64) -> Result<Box<dyn Strategy>, EngineError>;
}

type Constructor = Box<dyn Fn(u64) -> Box<dyn Strategy> + Send + Sync>;

/// Name → constructor registry.
#[derive(Default)]
pub struct StrategyRegistry {
    constructors: FxHashMap<String, Constructor>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategies.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(RandomStrategy::NAME, |seed| Box::new(RandomStrategy::new(seed)));
        registry.register(FirstStrategy::NAME, |_| Box::new(FirstStrategy));
        registry.register(LastStrategy::NAME, |_| Box::new(LastStrategy));
        registry.register(StrikerStrategy::NAME, |_| Box::new(StrikerStrategy));
        registry
    }

    /// Register a constructor under `name`.
    ///
    /// Panics if the name is already taken.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(u64) -> Box<dyn Strategy> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            panic!("Strategy '{}' already registered", name);
        }
        self.constructors.insert(name, Box::new(constructor));
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl StrategyFactory for StrategyRegistry {
    fn get_strategy(&self, name: &str, seed: u64) -> Result<Box<dyn Strategy>, EngineError> {
        self.constructors
            .get(name)
            .map(|constructor| constructor(seed))
            .ok_or_else(|| EngineError::UnknownStrategy(name.to_string()))
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry").field("names", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = StrategyRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["first", "last", "random", "striker"]);
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("striker"));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_get_strategy_builds_fresh_instances() {
        let registry = StrategyRegistry::with_builtins();
        for name in registry.names() {
            let strategy = registry.get_strategy(name, 1).unwrap();
            assert_eq!(strategy.name(), name);
        }
    }

    #[test]
    fn test_unknown_strategy() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        match registry.get_strategy("ghost", 0) {
            Err(err) => assert_eq!(err, EngineError::UnknownStrategy("ghost".to_string())),
            Ok(_) => panic!("expected an unknown strategy error"),
        }
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = StrategyRegistry::new();
        registry.register("cautious", |_| Box::new(FirstStrategy));
        assert!(registry.contains("cautious"));
        assert!(registry.get_strategy("cautious", 3).is_ok());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut registry = StrategyRegistry::with_builtins();
        registry.register("first", |_| Box::new(FirstStrategy));
    }
}
