//! Fair coin-flip level generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::level_generator::LevelGenerator;
use crate::node::{MAX_HEIGHT, levels_required};

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`CoinFlip`] level generator.
#[non_exhaustive]
pub enum CoinFlipError {
    /// The number of levels must be non-zero.
    #[error("total must be non-zero.")]
    ZeroTotal,
    /// The number of levels must not exceed [`MAX_HEIGHT`].
    #[error("total must not exceed the maximum height of 10.")]
    TotalTooLarge,
}

/// A level generator tossing a fair coin.
///
/// Starting from level 0, the level is incremented while a coin flip succeeds
/// and the configured total has not been reached. Level `n` is therefore
/// reached with probability `1/2^(n+1)`, halving the node population per
/// level, which keeps the expected search cost logarithmic.
///
/// The generator owns its random number generator, seeded exactly once when
/// the generator is constructed. Two generators never share a random stream,
/// and a given seed reproduces the same sequence of levels.
#[derive(Debug, Clone)]
pub struct CoinFlip {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The random number generator.
    rng: SmallRng,
}

impl CoinFlip {
    /// Create a new coin-flip level generator with `total` number of levels,
    /// seeded from the thread-local random number generator.
    ///
    /// # Errors
    ///
    /// `total` must be between 1 and [`MAX_HEIGHT`] inclusive.
    #[inline]
    pub fn new(total: usize) -> Result<Self, CoinFlipError> {
        Self::checked(total, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Create a new coin-flip level generator with `total` number of levels
    /// and a fixed seed, for reproducible level sequences.
    ///
    /// # Errors
    ///
    /// `total` must be between 1 and [`MAX_HEIGHT`] inclusive.
    #[inline]
    pub fn with_seed(total: usize, seed: u64) -> Result<Self, CoinFlipError> {
        Self::checked(total, SmallRng::seed_from_u64(seed))
    }

    fn checked(total: usize, rng: SmallRng) -> Result<Self, CoinFlipError> {
        if total == 0 {
            return Err(CoinFlipError::ZeroTotal);
        }
        if total > MAX_HEIGHT {
            return Err(CoinFlipError::TotalTooLarge);
        }
        Ok(CoinFlip { total, rng })
    }

    /// Full-height generator seeded from the thread-local RNG.
    pub(crate) fn standard() -> Self {
        CoinFlip {
            total: MAX_HEIGHT,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Full-height generator with a fixed seed.
    pub(crate) fn standard_seeded(seed: u64) -> Self {
        CoinFlip {
            total: MAX_HEIGHT,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generator with just enough levels for `capacity` elements.
    pub(crate) fn sized_for(capacity: usize) -> Self {
        CoinFlip {
            total: levels_required(capacity).min(MAX_HEIGHT),
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// A generator with the same total but an independent random stream.
    pub(crate) fn reseeded(&self) -> Self {
        CoinFlip {
            total: self.total,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl LevelGenerator for CoinFlip {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn level(&mut self) -> usize {
        let mut level = 0;
        while level + 1 < self.total && self.rng.random::<bool>() {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{CoinFlip, CoinFlipError};
    use crate::level_generator::LevelGenerator;
    use crate::node::MAX_HEIGHT;

    #[test]
    fn invalid_total() {
        assert_eq!(CoinFlip::new(0).err(), Some(CoinFlipError::ZeroTotal));
        assert_eq!(
            CoinFlip::new(MAX_HEIGHT + 1).err(),
            Some(CoinFlipError::TotalTooLarge)
        );
    }

    #[rstest]
    fn levels_in_range(#[values(1, 2, 5, MAX_HEIGHT)] n: usize) -> Result<()> {
        let mut generator = CoinFlip::with_seed(n, 0x5eed)?;
        assert_eq!(generator.total(), n);
        for _ in 0..100_000 {
            let level = generator.level();
            assert!((0..n).contains(&level));
        }

        // Both extremes must actually occur.
        let mut found = false;
        for _ in 0..100_000 {
            if generator.level() == 0 {
                found = true;
                break;
            }
        }
        if !found {
            bail!("Failed to generate a level-0 node.");
        }

        found = false;
        for _ in 0..1_000_000 {
            if generator.level() == n - 1 {
                found = true;
                break;
            }
        }
        if !found {
            bail!("Failed to generate a level-{} node.", n - 1);
        }

        Ok(())
    }

    #[test]
    fn seed_reproduces_sequence() -> Result<()> {
        let mut a = CoinFlip::with_seed(MAX_HEIGHT, 42)?;
        let mut b = CoinFlip::with_seed(MAX_HEIGHT, 42)?;
        for _ in 0..1000 {
            assert_eq!(a.level(), b.level());
        }
        Ok(())
    }

    #[test]
    fn single_level_stays_flat() -> Result<()> {
        let mut generator = CoinFlip::new(1)?;
        for _ in 0..1000 {
            assert_eq!(generator.level(), 0);
        }
        Ok(())
    }
}
