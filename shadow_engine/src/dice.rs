//! Damage rolls.
//!
//! Combat draws every hit through a [`DamageRoller`], so play can use a seeded RNG while
//! tests feed exact values.

use std::collections::VecDeque;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::DamageRange;

/// Source of damage values for a single blow.
pub trait DamageRoller {
    /// Produce the damage for one blow drawn from `range`.
    fn roll(&mut self, range: DamageRange) -> u32;
}

/// Uniform rolls from a seeded standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRoller {
    rng: StdRng,
    seed: u64,
}
impl SeededRoller {
    /// Create a roller with the given seed. Equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a roller with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this roller
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
impl DamageRoller for SeededRoller {
    fn roll(&mut self, range: DamageRange) -> u32 {
        if range.max <= range.min {
            return range.min;
        }
        self.rng.random_range(range.min..=range.max)
    }
}

/// Replays a fixed list of values, ignoring the requested range.
///
/// Once the script runs dry each roll falls back to the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    rolls: VecDeque<u32>,
}
impl ScriptedRoller {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}
impl DamageRoller for ScriptedRoller {
    fn roll(&mut self, range: DamageRange) -> u32 {
        self.rolls.pop_front().unwrap_or_else(|| {
            warn!("scripted roller exhausted; using minimum of {range}");
            range.min
        })
    }
}
