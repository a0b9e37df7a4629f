//! The die and its randomness source.
//!
//! A `Die` never reaches for a global RNG: it owns a `RollSource`, which is
//! a seeded `GameRng` in play and a `FixedRolls` script in tests.

use super::error::EngineError;
use super::rng::GameRng;

/// Source of die rolls.
pub trait RollSource: Send {
    /// Produce a roll in `1..=faces`.
    fn next_roll(&mut self, faces: u32) -> u32;
}

impl RollSource for GameRng {
    fn next_roll(&mut self, faces: u32) -> u32 {
        self.roll(faces)
    }
}

/// Scripted rolls, cycled forever. Values are clamped onto the die.
#[derive(Clone, Debug)]
pub struct FixedRolls {
    rolls: Vec<u32>,
    cursor: usize,
}

impl FixedRolls {
    /// Cycle through `rolls`. An empty script always rolls 1.
    #[must_use]
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// Always roll the same value.
    #[must_use]
    pub fn always(roll: u32) -> Self {
        Self::new(vec![roll])
    }
}

impl RollSource for FixedRolls {
    fn next_roll(&mut self, faces: u32) -> u32 {
        if self.rolls.is_empty() {
            return 1;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll.clamp(1, faces)
    }
}

/// A die with a fixed number of faces.
pub struct Die {
    faces: u32,
    source: Box<dyn RollSource>,
}

impl Die {
    /// Create a die. Fails if `faces` is zero.
    pub fn new(faces: u32, source: impl RollSource + 'static) -> Result<Self, EngineError> {
        if faces < 1 {
            return Err(EngineError::InvalidDie { faces });
        }
        Ok(Self {
            faces,
            source: Box::new(source),
        })
    }

    /// Create a die driven by a seeded `GameRng`.
    pub fn seeded(faces: u32, seed: u64) -> Result<Self, EngineError> {
        Self::new(faces, GameRng::new(seed))
    }

    /// Number of faces; also the roll that grants an extra turn.
    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Roll the die.
    pub fn roll(&mut self) -> u32 {
        self.source.next_roll(self.faces)
    }
}

impl std::fmt::Debug for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Die").field("faces", &self.faces).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_rejects_zero_faces() {
        let err = Die::new(0, FixedRolls::always(1)).unwrap_err();
        assert_eq!(err, EngineError::InvalidDie { faces: 0 });
    }

    #[test]
    fn test_fixed_rolls_cycle() {
        let mut die = Die::new(6, FixedRolls::new(vec![6, 2, 3])).unwrap();
        let rolls: Vec<_> = (0..5).map(|_| die.roll()).collect();
        assert_eq!(rolls, vec![6, 2, 3, 6, 2]);
    }

    #[test]
    fn test_fixed_rolls_clamped() {
        let mut die = Die::new(6, FixedRolls::new(vec![9, 0])).unwrap();
        assert_eq!(die.roll(), 6);
        assert_eq!(die.roll(), 1);
    }

    #[test]
    fn test_seeded_die_is_deterministic() {
        let mut a = Die::seeded(6, 11).unwrap();
        let mut b = Die::seeded(6, 11).unwrap();
        for _ in 0..50 {
            let roll = a.roll();
            assert_eq!(roll, b.roll());
            assert!((1..=6).contains(&roll));
        }
    }
}
