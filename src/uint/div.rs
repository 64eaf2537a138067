//! [`Uint`] division. Variable-time throughout; the callers are decimal
//! encoding, variable-time reduction, and public-value setup paths.

use core::cmp::Ordering;

use super::Uint;
use crate::limb::Limb;
use crate::primitives::{WideWord, Word};

impl Uint {
    /// Computes `self / rhs` and `self % rhs` by binary long division.
    ///
    /// Panics when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero_vartime(), "division by zero");

        let mut divisor = rhs.clone();
        divisor.trim();
        let mut dividend = self.clone();
        dividend.trim();

        if dividend.cmp_vartime(&divisor) == Ordering::Less {
            return (Self::zero(), dividend);
        }

        let bits = dividend.bit_len();
        let mut quotient = Self::zero_with(dividend.nlimbs());
        // One spare limb: the remainder stays below `2 * divisor` after the
        // shift, before the conditional subtraction brings it back down.
        let mut rem = Self::zero_with(divisor.nlimbs() + 1);

        for i in (0..bits).rev() {
            rem.shl1_assign();
            if dividend.bit(i) {
                rem.limbs[0].0 |= 1;
            }
            if rem.cmp_vartime(&divisor) != Ordering::Less {
                let borrow = rem.sbb_assign(&divisor, Limb::ZERO);
                debug_assert_eq!(borrow, Limb::ZERO);
                quotient.set_bit(i);
            }
        }

        quotient.trim();
        rem.trim();
        (quotient, rem)
    }

    /// Computes `self % rhs`.
    pub fn rem(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).1
    }

    /// Computes `self / rhs` and `self % rhs` for a single-limb divisor.
    ///
    /// Panics when `rhs` is zero.
    pub fn div_rem_limb(&self, rhs: Limb) -> (Self, Limb) {
        assert!(rhs.0 != 0, "division by zero");

        let mut quotient = Self::zero_with(self.nlimbs());
        let mut rem: Word = 0;

        for i in (0..self.nlimbs()).rev() {
            let cur = ((rem as WideWord) << Word::BITS) | (self.limbs[i].0 as WideWord);
            quotient.limbs[i] = Limb((cur / rhs.0 as WideWord) as Word);
            rem = (cur % rhs.0 as WideWord) as Word;
        }

        quotient.trim();
        (quotient, Limb(rem))
    }
}

#[cfg(test)]
mod tests {
    use super::Uint;
    use crate::limb::Limb;

    #[test]
    fn div_rem_small() {
        let (q, r) = Uint::from_word(100).div_rem(&Uint::from_word(7));
        assert_eq!(q, Uint::from_word(14));
        assert_eq!(r, Uint::from_word(2));
    }

    #[test]
    fn div_rem_dividend_smaller() {
        let (q, r) = Uint::from_word(3).div_rem(&Uint::from_word(7));
        assert!(q.is_zero_vartime());
        assert_eq!(r, Uint::from_word(3));
    }

    #[test]
    fn div_rem_multi_limb() {
        // (2^96 + 5) / 2^64 = 2^32 rem 5
        let dividend = Uint::power_of_two(96).add(&Uint::from_word(5));
        let divisor = Uint::power_of_two(64);
        let (q, r) = dividend.div_rem(&divisor);
        assert_eq!(q, Uint::from_word(1 << 32));
        assert_eq!(r, Uint::from_word(5));
    }

    #[test]
    fn div_rem_exact() {
        let a = Uint::from_u128(0xDEAD_BEEF_0000_0000_1234);
        let b = Uint::from_word(0x1_0000);
        let product = a.mul(&b);
        let (q, r) = product.div_rem(&a);
        assert_eq!(q, b);
        assert!(r.is_zero_vartime());
    }

    #[test]
    fn div_rem_limb() {
        let x = Uint::from_u128(10_000_000_000_000_000_000_000_000_000_007);
        let (q, r) = x.div_rem_limb(Limb(10));
        assert_eq!(q, Uint::from_u128(1_000_000_000_000_000_000_000_000_000_000));
        assert_eq!(r, Limb(7));
    }
}
