//! Heap-allocated unsigned big integer magnitudes.

mod add;
mod bits;
mod cmp;
mod ct;
mod div;
pub(crate) mod encoding;
mod gcd;
mod mul;
pub(crate) mod rand;
mod sub;

use core::fmt;

use subtle::Choice;
use zeroize::Zeroize;

use crate::limb::Limb;
use crate::primitives::Word;

/// Unsigned magnitude of a big integer.
///
/// Limbs are stored least significant first. Unlike a fixed-precision
/// integer, the width grows as needed; unlike a canonical representation,
/// high zero limbs are tolerated and ignored by comparison. Constant-time
/// producers rely on that: they emit results at the public modulus width
/// rather than trimming by (secret) value.
#[derive(Clone, Default)]
pub(crate) struct Uint {
    limbs: Vec<Limb>,
}

impl Uint {
    /// Get the value `0` represented as succinctly as possible.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Get the value `0` with the given number of limbs.
    pub fn zero_with(nlimbs: usize) -> Self {
        Self {
            limbs: vec![Limb::ZERO; nlimbs],
        }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        Self {
            limbs: vec![Limb::ONE],
        }
    }

    /// Construct from a single word.
    pub fn from_word(n: Word) -> Self {
        Self {
            limbs: vec![Limb(n)],
        }
    }

    /// Construct from a `u128`.
    pub fn from_u128(n: u128) -> Self {
        Self {
            limbs: vec![Limb(n as Word), Limb((n >> Word::BITS) as Word)],
        }
    }

    /// Number of limbs in the current representation.
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Borrow the limbs.
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Borrow the limbs mutably.
    pub fn as_limbs_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }

    /// Is this value zero?
    ///
    /// Runs in time dependent on the representation width only.
    pub fn is_zero(&self) -> Choice {
        self.limbs
            .iter()
            .fold(Choice::from(1), |acc, limb| acc & limb.is_zero())
    }

    /// Is this value zero? Variable-time.
    pub fn is_zero_vartime(&self) -> bool {
        self.limbs.iter().all(|limb| limb.0 == 0)
    }

    /// Is this value odd?
    pub fn is_odd(&self) -> Choice {
        self.limbs
            .first()
            .copied()
            .unwrap_or(Limb::ZERO)
            .lsb_to_choice()
    }

    /// Return the same value represented with exactly `width` limbs.
    ///
    /// Grows by zero-padding. Shrinking asserts (in debug builds) that only
    /// zero limbs are dropped; widths are derived from public moduli, so
    /// this never branches on secret data.
    pub fn to_width(&self, width: usize) -> Self {
        let mut limbs = self.limbs.clone();
        if width < limbs.len() {
            debug_assert!(
                limbs[width..].iter().all(|l| l.0 == 0),
                "shrinking would drop non-zero limbs"
            );
        }
        limbs.resize(width, Limb::ZERO);
        Self { limbs }
    }

    /// Drop high zero limbs. Variable-time in the representation.
    pub fn trim(&mut self) {
        while let Some(last) = self.limbs.last() {
            if last.0 != 0 {
                break;
            }
            self.limbs.pop();
        }
    }
}

impl From<Vec<Limb>> for Uint {
    fn from(limbs: Vec<Limb>) -> Uint {
        Self { limbs }
    }
}

impl fmt::Debug for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl Zeroize for Uint {
    fn zeroize(&mut self) {
        self.limbs.as_mut_slice().zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::Uint;

    #[test]
    fn zero_and_one() {
        assert!(bool::from(Uint::zero().is_zero()));
        assert!(!bool::from(Uint::one().is_zero()));
        assert!(bool::from(Uint::one().is_odd()));
    }

    #[test]
    fn padded_zero_is_zero() {
        assert!(bool::from(Uint::zero_with(4).is_zero()));
        assert!(Uint::zero_with(4).is_zero_vartime());
    }

    #[test]
    fn width_round_trip() {
        let x = Uint::from_word(42);
        let wide = x.to_width(4);
        assert_eq!(wide.nlimbs(), 4);
        assert_eq!(wide, x);

        let mut narrow = wide;
        narrow.trim();
        assert_eq!(narrow.nlimbs(), 1);
    }
}
