//! Random sources for maze carving
//!
//! Generation only ever asks for a uniform index below some bound, so the
//! whole RNG surface is one trait method. Seeded `Pcg32` is the production
//! source; `ScriptedSource` replays a fixed sequence for tests and replays.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::MazeError;

/// A source of uniform indices
pub trait RandomSource {
    /// Return an index in `0..bound`. Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> Result<usize, MazeError>;
}

impl RandomSource for Pcg32 {
    fn next_index(&mut self, bound: usize) -> Result<usize, MazeError> {
        Ok(self.random_range(0..bound))
    }
}

/// Seeded PCG source
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Draw a fresh seed from the thread RNG
pub fn random_seed() -> u64 {
    rand::rng().random()
}

/// Uniform in-place Fisher-Yates shuffle
///
/// Walks a counter down from `len`, swapping the slot it leaves behind with
/// a uniformly chosen slot below the old counter. Consumes exactly
/// `items.len()` draws.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R) -> Result<(), MazeError>
where
    R: RandomSource + ?Sized,
{
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.next_index(counter)?;
        counter -= 1;
        items.swap(counter, index);
    }
    Ok(())
}

/// Finite, pre-recorded sequence of indices
///
/// Each value is reduced modulo the requested bound. Running dry is an
/// error rather than a silent fallback to some fixed order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> Result<usize, MazeError> {
        let value = self
            .values
            .pop_front()
            .ok_or(MazeError::RandomSourceExhausted)?;
        Ok(value % bound.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = seeded(42);
        let mut items = [1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut items, &mut rng).unwrap();
        let mut sorted = items;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_shuffle_scripted_identity() {
        // Always picking the top slot leaves the order untouched
        let mut rng = ScriptedSource::new([3, 2, 1, 0]);
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng).unwrap();
        assert_eq!(items, ['a', 'b', 'c', 'd']);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_shuffle_scripted_swaps() {
        // counter=4 picks 0: swap(3,0) -> d b c a
        // counter=3 picks 2: swap(2,2) -> d b c a
        // counter=2 picks 0: swap(1,0) -> b d c a
        // counter=1 picks 0: swap(0,0)
        let mut rng = ScriptedSource::new([0, 2, 0, 0]);
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng).unwrap();
        assert_eq!(items, ['b', 'd', 'c', 'a']);
    }

    #[test]
    fn test_shuffle_uniform() {
        // Every one of the 24 orderings of 4 items should show up at a
        // roughly equal rate
        let mut rng = seeded(7);
        let mut counts = std::collections::HashMap::new();
        let trials = 24_000;
        for _ in 0..trials {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng).unwrap();
            *counts.entry(items).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 24);
        for &count in counts.values() {
            assert!((800..1200).contains(&count), "biased count {count}");
        }
    }

    #[test]
    fn test_scripted_exhaustion() {
        let mut rng = ScriptedSource::new([1]);
        assert_eq!(rng.next_index(4), Ok(1));
        assert_eq!(rng.next_index(4), Err(MazeError::RandomSourceExhausted));
    }

    #[test]
    fn test_scripted_reduces_modulo_bound() {
        let mut rng = ScriptedSource::new([9, 9]);
        assert_eq!(rng.next_index(4), Ok(1));
        assert_eq!(rng.next_index(1), Ok(0));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = seeded(1234);
        let mut b = seeded(1234);
        for bound in 1..50 {
            assert_eq!(a.next_index(bound), b.next_index(bound));
        }
    }
}
