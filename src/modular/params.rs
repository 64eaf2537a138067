//! Modulus-specific Montgomery form parameters.

use crate::limb::Limb;
use crate::primitives::invert_mod_word;
use crate::uint::Uint;

/// Parameters to efficiently go to/from the Montgomery form for an odd
/// modulus provided at runtime.
///
/// Derived once per modulus and immutable afterwards. Derivation is
/// variable-time in the modulus, which is public by the time a reduction
/// context is built for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MontyParams {
    /// The modulus, trimmed to its minimal width.
    modulus: Uint,

    /// 1 in Montgomery form (a.k.a. `R mod modulus` where `R = 2^(64 * nlimbs)`).
    one: Uint,

    /// `R^2 mod modulus`, used to move into Montgomery form.
    r2: Uint,

    /// `-modulus^-1 mod 2^64`, the Montgomery reduction factor.
    mod_neg_inv: Limb,

    /// Bit length of the modulus.
    bit_len: u32,
}

impl MontyParams {
    /// Instantiates parameters for the given modulus.
    ///
    /// Returns `None` when the modulus is even or not greater than one,
    /// the mathematical preconditions of Montgomery reduction here.
    pub fn new(modulus: &Uint) -> Option<Self> {
        let mut modulus = modulus.clone();
        modulus.trim();

        if !bool::from(modulus.is_odd()) || modulus.bit_len() < 2 {
            return None;
        }

        let n = modulus.nlimbs();
        let bit_len = modulus.bit_len();

        let r = Uint::power_of_two(n as u32 * Limb::BITS)
            .rem(&modulus)
            .to_width(n);
        let r2 = r.mul(&r).rem(&modulus).to_width(n);
        let mod_neg_inv = Limb(invert_mod_word(modulus.as_limbs()[0].0).wrapping_neg());

        Some(Self {
            modulus,
            one: r,
            r2,
            mod_neg_inv,
            bit_len,
        })
    }

    /// The modulus, trimmed to `nlimbs()` limbs.
    pub fn modulus(&self) -> &Uint {
        &self.modulus
    }

    /// 1 in Montgomery form.
    pub fn one(&self) -> &Uint {
        &self.one
    }

    /// `R^2 mod modulus`.
    pub fn r2(&self) -> &Uint {
        &self.r2
    }

    /// `-modulus^-1 mod 2^64`.
    pub fn mod_neg_inv(&self) -> Limb {
        self.mod_neg_inv
    }

    /// Width of the Montgomery domain in limbs.
    pub fn nlimbs(&self) -> usize {
        self.modulus.nlimbs()
    }

    /// Bit length of the modulus.
    pub fn bit_len(&self) -> u32 {
        self.bit_len
    }
}
