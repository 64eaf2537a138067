//! [`Uint`] subtraction operations.

use super::Uint;
use crate::limb::Limb;

impl Uint {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow (a full mask when the subtraction underflowed).
    pub fn sbb(&self, rhs: &Self, borrow: Limb) -> (Self, Limb) {
        Self::chain(self, rhs, borrow, |a, b, c| a.borrowing_sub(b, c))
    }

    /// Computes `self - rhs` for `self >= rhs`.
    ///
    /// Panics in debug builds when the subtraction would underflow; callers
    /// on variable-time paths establish the ordering first.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (mut ret, borrow) = self.sbb(rhs, Limb::ZERO);
        debug_assert_eq!(borrow, Limb::ZERO, "subtraction underflow");
        ret.trim();
        ret
    }

    /// Computes `self -= rhs + borrow` in place at the current width,
    /// returning the borrow out. `rhs` must not be wider than `self`.
    pub fn sbb_assign(&mut self, rhs: &Self, mut borrow: Limb) -> Limb {
        debug_assert!(rhs.limbs.len() <= self.limbs.len());

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let r = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let (res, b) = limb.borrowing_sub(r, borrow);
            *limb = res;
            borrow = b;
        }

        borrow
    }

    /// Replace `self` with its two's complement negation at the current
    /// width, i.e. `2^(64 * nlimbs) - self` (zero stays zero).
    pub fn wrapping_neg_assign(&mut self) {
        let mut carry = Limb::ONE;
        for limb in self.limbs.iter_mut() {
            let (res, c) = Limb(!limb.0).carrying_add(Limb::ZERO, carry);
            *limb = res;
            carry = c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Uint;
    use crate::limb::Limb;

    #[test]
    fn sbb_no_borrow() {
        let (res, borrow) = Uint::one().sbb(&Uint::one(), Limb::ZERO);
        assert!(res.is_zero_vartime());
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn sbb_with_borrow() {
        let (res, borrow) = Uint::zero_with(1).sbb(&Uint::one(), Limb::ZERO);
        assert_eq!(res, Uint::from_word(u64::MAX));
        assert_eq!(borrow, Limb::MAX);
    }

    #[test]
    fn sub_across_limbs() {
        let a = Uint::from_u128(1u128 << 64);
        assert_eq!(a.sub(&Uint::one()), Uint::from_word(u64::MAX));
    }

    #[test]
    fn wrapping_neg() {
        let mut a = Uint::from_word(1).to_width(2);
        a.wrapping_neg_assign();
        assert_eq!(a, Uint::from_u128(u128::MAX));
    }
}
