//! Benchmark fixtures for limvec.
//!
//! - [`seeded_values`]: deterministic pseudo-random input via ChaCha8
//! - [`filled`]: a `LimitedVec` pre-loaded with seeded values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use limvec::LimitedVec;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` pseudo-random `u32` values, identical for identical seeds.
pub fn seeded_values(count: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.next_u32()).collect()
}

/// A `LimitedVec` with ceiling `max_capacity` holding `count` seeded values.
///
/// Returns `None` if `count > max_capacity`.
pub fn filled(max_capacity: usize, count: usize, seed: u64) -> Option<LimitedVec<u32>> {
    let mut v = LimitedVec::with_capacity(max_capacity, 0).ok()?;
    v.add_all(seeded_values(count, seed)).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_deterministic() {
        assert_eq!(seeded_values(16, 42), seeded_values(16, 42));
        assert_ne!(seeded_values(16, 42), seeded_values(16, 43));
    }

    #[test]
    fn filled_respects_ceiling() {
        let v = filled(100, 95, 7).unwrap();
        assert_eq!(v.len(), 95);
        assert_eq!(v.current_capacity(), 100);
        assert!(filled(10, 11, 7).is_none());
    }
}
