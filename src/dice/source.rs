//! Cryptographically secure source of dice rolls.
//!
//! Every draw goes through the fallible `try_fill_bytes` path so that an
//! unavailable entropy source surfaces as an error instead of a panic or a
//! silent fallback to a weaker generator.

use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};
use thiserror::Error;

/// Errors that can occur while drawing random values.
#[derive(Debug, Clone, Error)]
pub enum RandomError {
    #[error("random source failure: {0}")]
    SourceFailure(String),
}

/// Uniform random draws backed by a cryptographic generator.
///
/// Values below `n` are produced by rejection sampling over 32-bit words,
/// so no residue of `2^32 mod n` skews the distribution.
pub struct RandomSource<R: RngCore + CryptoRng> {
    rng: R,
    /// Successful draws so far.
    draws: u64,
}

impl RandomSource<OsRng> {
    /// Creates a source that reads the operating system generator on every draw.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl RandomSource<ChaCha20Rng> {
    /// Creates a reproducible ChaCha20 source from a fixed seed.
    ///
    /// Intended for tests and benchmarks; generated secrets should come
    /// from [`RandomSource::os`].
    pub fn seeded(seed: [u8; 32]) -> Self {
        Self::new(ChaCha20Rng::from_seed(seed))
    }
}

impl<R: RngCore + CryptoRng> RandomSource<R> {
    /// Wraps an existing cryptographic generator.
    pub fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Draws a value uniformly distributed over `0..n`.
    ///
    /// `n` must be non-zero.
    pub fn below(&mut self, n: u32) -> Result<u32, RandomError> {
        debug_assert!(n > 0, "cannot draw below zero");
        // Largest multiple of n that fits in u32; words at or above it are redrawn.
        let zone = u32::MAX - (u32::MAX % n);
        loop {
            let mut buf = [0u8; 4];
            self.rng.try_fill_bytes(&mut buf).map_err(|e| {
                tracing::warn!(error = %e, "random source unavailable");
                RandomError::SourceFailure(e.to_string())
            })?;

            let word = u32::from_le_bytes(buf);
            if word < zone {
                self.draws += 1;
                return Ok(word % n);
            }
            tracing::trace!(word, zone, "rejected biased draw");
        }
    }

    /// Rolls one six-sided die, returning a face in `1..=6`.
    #[inline]
    pub fn roll_die(&mut self) -> Result<u8, RandomError> {
        Ok(self.below(6)? as u8 + 1)
    }

    /// Returns the number of successful draws.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Default for RandomSource<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FailingRng;
    use super::*;

    #[test]
    fn test_roll_die_in_range() {
        let mut source = RandomSource::seeded([7u8; 32]);
        for _ in 0..1000 {
            let face = source.roll_die().unwrap();
            assert!((1..=6).contains(&face));
        }
        assert_eq!(source.draws(), 1000);
    }

    #[test]
    fn test_every_face_appears() {
        let mut source = RandomSource::seeded([1u8; 32]);
        let mut seen = [0u32; 6];
        for _ in 0..600 {
            seen[(source.roll_die().unwrap() - 1) as usize] += 1;
        }
        assert!(seen.iter().all(|&count| count > 0), "faces seen: {:?}", seen);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = RandomSource::seeded([0x42u8; 32]);
        let mut b = RandomSource::seeded([0x42u8; 32]);

        let rolls_a: Vec<u8> = (0..20).map(|_| a.roll_die().unwrap()).collect();
        let rolls_b: Vec<u8> = (0..20).map(|_| b.roll_die().unwrap()).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_os_source_draws() {
        let mut source = RandomSource::os();
        assert!(source.below(26).unwrap() < 26);
    }

    #[test]
    fn test_failure_is_propagated() {
        let mut source = RandomSource::new(FailingRng);
        assert!(matches!(
            source.roll_die(),
            Err(RandomError::SourceFailure(_))
        ));
        assert_eq!(source.draws(), 0);
    }
}
