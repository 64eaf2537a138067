//! Random number generator support.

use rand_core::RngCore;

use super::Uint;
use crate::limb::{Limb, nlimbs};
use crate::primitives::Word;

impl Uint {
    /// Sample a uniform value in `[0, 2^bit_length)`.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        if bit_length == 0 {
            return Self::zero();
        }

        let n = nlimbs(bit_length);
        let mut limbs = vec![Limb::ZERO; n];
        for limb in limbs.iter_mut() {
            *limb = Limb(rng.next_u64());
        }

        let partial = bit_length % Limb::BITS;
        if partial != 0 {
            limbs[n - 1].0 &= Word::MAX >> (Limb::BITS - partial);
        }

        limbs.into()
    }

    /// Sample a uniform value in `[0, modulus)` by rejection sampling.
    ///
    /// The number of iterations depends only on the modulus (public); the
    /// accepted candidate is compared in constant time.
    pub fn random_mod<R: RngCore + ?Sized>(rng: &mut R, modulus: &Self) -> Self {
        debug_assert!(!modulus.is_zero_vartime());
        let bits = modulus.bit_len();

        loop {
            let n = Self::random_bits(rng, bits);
            if n.ct_lt_value(modulus).into() {
                return n;
            }
        }
    }
}
