// src/engine/picker.rs
// Randomness source for fragment selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice over a non-empty list.
///
/// Every pick is independent; nothing remembers what was chosen last turn,
/// so the same fragment can come up twice in a row.
pub trait Picker {
    /// Index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    fn pick(&mut self, candidates: &'static [&'static str]) -> &'static str {
        debug_assert!(!candidates.is_empty(), "picker called with no candidates");
        candidates[self.pick_index(candidates.len()) % candidates.len()]
    }
}

/// Thread-local RNG, fresh handle per pick.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded RNG for reproducible conversations (`chat --seed`).
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Picker for SeededPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
