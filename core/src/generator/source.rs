use alloc::vec::Vec;
use rand::prelude::*;

/// Supplies the index of the neighbor to carve toward.
///
/// Implementations should return a value in `0..len`, anything larger is reduced modulo `len` by the
/// generator. `len` is never zero.
pub trait IndexSource {
    fn next_index(&mut self, len: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Uniform random choice driven by a seeded small PRNG.
#[derive(Clone, Debug)]
pub struct SeededIndexSource {
    rng: SmallRng,
}

impl SeededIndexSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededIndexSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of choices, wrapping around at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceIndexSource {
    choices: Vec<usize>,
    position: usize,
}

impl SequenceIndexSource {
    pub fn new(choices: impl Into<Vec<usize>>) -> Self {
        Self {
            choices: choices.into(),
            position: 0,
        }
    }

    /// Always picks the first candidate.
    pub fn first_available() -> Self {
        Self::new([0])
    }
}

impl IndexSource for SequenceIndexSource {
    fn next_index(&mut self, _len: usize) -> usize {
        if self.choices.is_empty() {
            return 0;
        }
        let choice = self.choices[self.position % self.choices.len()];
        self.position += 1;
        choice
    }
}
