//! Random [`BigInt`] generation.

use rand_core::{CryptoRng, OsRng, TryRngCore};

use super::BigInt;
use crate::uint::Uint;

impl BigInt {
    /// Uniform random value in `[0, bound)`, from the operating system RNG.
    ///
    /// Panics when `bound <= 0`.
    pub fn rand(bound: &BigInt) -> BigInt {
        Self::rand_from_rng(&mut OsRng.unwrap_err(), bound)
    }

    /// Uniform random value in `[0, bound)` from the supplied RNG.
    pub fn rand_from_rng<R: CryptoRng + ?Sized>(rng: &mut R, bound: &BigInt) -> BigInt {
        assert!(
            !bound.is_negative() && !bound.magnitude().is_zero_vartime(),
            "bound must be positive"
        );
        BigInt::from_uint(Uint::random_mod(rng, bound.magnitude()))
    }

    /// Uniform random value with exactly `bits` bits (the top bit is set),
    /// from the operating system RNG.
    ///
    /// Panics when `bits` is zero.
    pub fn rand_bitlen(bits: u32) -> BigInt {
        Self::rand_bitlen_from_rng(&mut OsRng.unwrap_err(), bits)
    }

    /// Uniform random value with exactly `bits` bits from the supplied RNG.
    pub fn rand_bitlen_from_rng<R: CryptoRng + ?Sized>(rng: &mut R, bits: u32) -> BigInt {
        assert!(bits > 0, "bit length must be non-zero");
        let mut magnitude = Uint::random_bits(rng, bits - 1);
        magnitude.set_bit(bits - 1);
        BigInt::from_uint(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use rand_core::SeedableRng;

    use super::BigInt;

    #[test]
    fn rand_below_bound() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        let bound = BigInt::from(1_000_000u64);
        for _ in 0..50 {
            let x = BigInt::rand_from_rng(&mut rng, &bound);
            assert!(x >= BigInt::zero() && x < bound);
        }
    }

    #[test]
    fn rand_bitlen_is_exact() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(8);
        for bits in [1u32, 2, 63, 64, 65, 256] {
            for _ in 0..10 {
                assert_eq!(BigInt::rand_bitlen_from_rng(&mut rng, bits).bit_len(), bits);
            }
        }
    }

    #[test]
    fn os_rng_paths() {
        let bound = BigInt::from(1000);
        let x = BigInt::rand(&bound);
        assert!(x < bound);
        assert_eq!(BigInt::rand_bitlen(128).bit_len(), 128);
    }
}
