//! Tournaments: many games per bracket, many brackets in parallel.
//!
//! A bracket is an ordered list of strategy names, seated in that order.
//! Each bracket runs its games one after another on a single rayon task;
//! brackets share nothing and their `EventCounter`s are summed at the end,
//! so the result does not depend on scheduling.
//!
//! ## Seeding
//!
//! Game `g` of bracket `b` plays with
//! `derive_seed(derive_seed(seed, b), g)`, and each seat's strategy gets
//! its own stream below that. A tournament therefore replays exactly for a
//! given `TournamentConfig::seed`.
//!
//! ## Example
//!
//! ```
//! use rust_ludo::core::RulesConfig;
//! use rust_ludo::strategy::StrategyRegistry;
//! use rust_ludo::tournament::{Tournament, TournamentConfig};
//!
//! let brackets = vec![vec!["random".to_string(), "striker".to_string()]];
//! let tournament = Tournament::new(TournamentConfig::new().with_games(2), RulesConfig::default(), brackets);
//! let counter = tournament.run(&StrategyRegistry::with_builtins()).unwrap();
//! assert_eq!(counter.total(), 4);
//! ```

mod config;
mod counter;

pub use config::TournamentConfig;
pub use counter::{EventCounter, ACCURACY, RANK_SCORES};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::{EngineError, GameRng, RulesConfig};
use crate::game::Game;
use crate::strategy::{Strategy, StrategyFactory};

/// Offset separating strategy seed streams from the game's own streams.
const STRATEGY_STREAM: u64 = 1 << 32;

/// A set of brackets played under one rule set.
#[derive(Clone, Debug)]
pub struct Tournament {
    config: TournamentConfig,
    rules: RulesConfig,
    brackets: Vec<Vec<String>>,
}

impl Tournament {
    /// Create a tournament.
    #[must_use]
    pub fn new(config: TournamentConfig, rules: RulesConfig, brackets: Vec<Vec<String>>) -> Self {
        Self {
            config,
            rules,
            brackets,
        }
    }

    /// Tournament settings.
    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Rules every game plays by.
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// The brackets, in order.
    #[must_use]
    pub fn brackets(&self) -> &[Vec<String>] {
        &self.brackets
    }

    /// Seed for game `game` of bracket `bracket`.
    #[must_use]
    pub fn game_seed(&self, bracket: usize, game: usize) -> u64 {
        GameRng::derive_seed(
            GameRng::derive_seed(self.config.seed, bracket as u64),
            game as u64,
        )
    }

    /// Play every bracket and sum the finish positions.
    ///
    /// Fails before any game is played if the rules or a bracket are
    /// invalid, and otherwise on the first strategy `factory` cannot build.
    pub fn run(&self, factory: &dyn StrategyFactory) -> Result<EventCounter, EngineError> {
        self.validate()?;
        info!(
            brackets = self.brackets.len(),
            games_per_bracket = self.config.games_per_bracket,
            seed = self.config.seed,
            "tournament started"
        );

        let counter = match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
                pool.install(|| self.run_all(factory))?
            }
            None => self.run_all(factory)?,
        };

        info!(events = counter.total(), "tournament finished");
        Ok(counter)
    }

    /// Play all games of one bracket on the calling thread.
    pub fn run_bracket(
        &self,
        bracket_index: usize,
        factory: &dyn StrategyFactory,
    ) -> Result<EventCounter, EngineError> {
        let names = self.brackets.get(bracket_index).ok_or_else(|| {
            EngineError::InvalidBracket(format!("no bracket at index {}", bracket_index))
        })?;

        let mut counter = EventCounter::new();
        for game_index in 0..self.config.games_per_bracket {
            let seed = self.game_seed(bracket_index, game_index);
            let strategies = names
                .iter()
                .enumerate()
                .map(|(seat, name)| {
                    factory.get_strategy(name, GameRng::derive_seed(seed, STRATEGY_STREAM + seat as u64))
                })
                .collect::<Result<Vec<Box<dyn Strategy>>, _>>()?;

            let outcome = Game::new(self.rules.clone(), strategies, seed)?.play();
            for (finish_index, (_, name)) in outcome.finish_order.iter().enumerate() {
                counter.record(name, finish_index);
            }
        }

        debug!(
            bracket = bracket_index,
            games = self.config.games_per_bracket,
            "bracket finished"
        );
        Ok(counter)
    }

    fn run_all(&self, factory: &dyn StrategyFactory) -> Result<EventCounter, EngineError> {
        let counters = (0..self.brackets.len())
            .into_par_iter()
            .map(|bracket_index| self.run_bracket(bracket_index, factory))
            .collect::<Result<Vec<_>, _>>()?;

        let mut total = EventCounter::new();
        for counter in &counters {
            total.merge(counter);
        }
        Ok(total)
    }

    fn validate(&self) -> Result<(), EngineError> {
        self.rules.validate()?;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.is_empty() || bracket.len() > self.rules.player_count {
                return Err(EngineError::InvalidBracket(format!(
                    "bracket {} seats {} strategies on {} seats",
                    index,
                    bracket.len(),
                    self.rules.player_count
                )));
            }
        }
        Ok(())
    }
}
