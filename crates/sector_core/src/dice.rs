//! Injectable randomness.
//!
//! All randomness in the core (attack rolls, reputation draws) goes through
//! [`Dice`]. Production code uses [`SeededDice`]; tests and replays can pin
//! exact faces with [`ScriptedDice`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of die rolls.
pub trait Dice {
    /// Roll a die with `faces` sides, returning `1..=faces`.
    ///
    /// A zero-sided die reads as a one-sided die.
    fn roll_die(&mut self, faces: u32) -> u32;

    /// Roll a six-sided die.
    fn roll_d6(&mut self) -> u32 {
        self.roll_die(6)
    }
}

/// Deterministic dice seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededDice {
    /// Create dice from a seed. Equal seeds give equal roll sequences.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed these dice were created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for SeededDice {
    fn roll_die(&mut self, faces: u32) -> u32 {
        self.rng.gen_range(1..=faces.max(1))
    }
}

/// Dice that replay a fixed list of faces, cycling when exhausted.
///
/// Faces larger than the die being rolled are clamped to its top face.
/// An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Dice that return `faces` in order.
    #[must_use]
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub const fn rolls(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll_die(&mut self, faces: u32) -> u32 {
        let top = faces.max(1);
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, top)
    }
}
