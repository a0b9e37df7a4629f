//! Finish-position tallies and scoring.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Points per finishing place. Places past the table score nothing.
pub const RANK_SCORES: [u64; 4] = [6, 3, 1, 0];

/// Fixed-point multiplier kept through the integer division by games played.
pub const ACCURACY: u64 = 1000;

/// How often each strategy finished in each place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounter {
    events: FxHashMap<String, Vec<u64>>,
}

impl EventCounter {
    /// Create an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finish of `name` in place `finish_index` (0-based).
    pub fn record(&mut self, name: &str, finish_index: usize) {
        let places = self.events.entry(name.to_string()).or_default();
        if places.len() <= finish_index {
            places.resize(finish_index + 1, 0);
        }
        places[finish_index] += 1;
    }

    /// Finishes of `name` in place `finish_index`.
    #[must_use]
    pub fn count(&self, name: &str, finish_index: usize) -> u64 {
        self.events
            .get(name)
            .and_then(|places| places.get(finish_index))
            .copied()
            .unwrap_or(0)
    }

    /// All recorded finishes.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.events.values().flatten().sum()
    }

    /// Games `name` took part in, i.e. its finishes across all places.
    #[must_use]
    pub fn games_played(&self, name: &str) -> u64 {
        self.events.get(name).map_or(0, |places| places.iter().sum())
    }

    /// Strategy names seen, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.events.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Add `other`'s tallies into this counter.
    pub fn merge(&mut self, other: &EventCounter) {
        for (name, places) in &other.events {
            let mine = self.events.entry(name.clone()).or_default();
            if mine.len() < places.len() {
                mine.resize(places.len(), 0);
            }
            for (slot, count) in mine.iter_mut().zip(places) {
                *slot += count;
            }
        }
    }

    /// One comparable score per strategy, best first.
    ///
    /// Each finish earns `RANK_SCORES[place] * ACCURACY`; the sum is divided
    /// by the games that strategy played so strategies with different game
    /// counts compare fairly. Ties are broken by name.
    #[must_use]
    pub fn normalized_scores(&self) -> Vec<(String, u64)> {
        let mut scores: Vec<(String, u64)> = self
            .events
            .iter()
            .map(|(name, places)| {
                let played: u64 = places.iter().sum();
                let points: u64 = places
                    .iter()
                    .enumerate()
                    .map(|(place, count)| count * RANK_SCORES.get(place).copied().unwrap_or(0))
                    .sum();
                let score = if played == 0 {
                    0
                } else {
                    points * ACCURACY / played
                };
                (name.clone(), score)
            })
            .collect();

        scores.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scores
    }
}
