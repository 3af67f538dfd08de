//! RNG oracle for deterministic random number generation.
//!
//! Critical rolls, variance bands, status chances and reflection chances all
//! draw from this oracle. Implementations are stateless functions of a seed;
//! the engine derives one seed per draw with [`compute_seed`], so identical
//! game seeds and call sequences reproduce identical outcomes.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        self.next_u32(seed) as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Returns true with probability `chance` (clamped to `[0, 1]`).
    fn chance(&self, seed: u64, chance: f64) -> bool {
        if chance <= 0.0 {
            return false;
        }
        if chance >= 1.0 {
            return true;
        }
        self.unit(seed) < chance
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Oracle that returns the same value for every seed.
///
/// Pins variance and chance rolls in tests: `ConstantRng::MIN` makes every
/// chance succeed and every variance roll land on the low edge of its band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstantRng(pub u32);

impl ConstantRng {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(u32::MAX);
    /// Unit value 0.5: variance factor exactly 1.0.
    pub const MID: Self = Self(1 << 31);
}

impl RngOracle for ConstantRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Compute deterministic seed from engine state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed the engine was created with
/// * `nonce` - Cast sequence number (increments each cast)
/// * `actor_id` - Actor performing the cast
/// * `context` - Draw index within the cast, so every roll is independent
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn unit_stays_below_one() {
        assert_eq!(ConstantRng::MIN.unit(0), 0.0);
        assert!(ConstantRng::MAX.unit(0) < 1.0);
        assert_eq!(ConstantRng::MID.unit(0), 0.5);
    }

    #[test]
    fn chance_edges() {
        assert!(ConstantRng::MAX.chance(0, 1.0));
        assert!(!ConstantRng::MIN.chance(0, 0.0));
        assert!(ConstantRng::MIN.chance(0, 0.01));
        assert!(!ConstantRng::MAX.chance(0, 0.99));
    }

    #[test]
    fn seeds_differ_per_context() {
        let a = compute_seed(7, 1, 3, 0);
        let b = compute_seed(7, 1, 3, 1);
        let c = compute_seed(7, 2, 3, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
