//! [`Uint`] addition operations.

use subtle::Choice;

use super::Uint;
use crate::limb::Limb;

impl Uint {
    /// Perform a carry chain-like operation over the limbs of the inputs,
    /// constructing a result from the returned limbs and carry.
    ///
    /// If one of the two values has fewer limbs than the other, passes
    /// [`Limb::ZERO`] as the value for that limb.
    pub(crate) fn chain<F>(a: &Self, b: &Self, mut carry: Limb, f: F) -> (Self, Limb)
    where
        F: Fn(Limb, Limb, Limb) -> (Limb, Limb),
    {
        let len = a.limbs.len().max(b.limbs.len());
        let mut limbs = Vec::with_capacity(len);

        for i in 0..len {
            let &x = a.limbs.get(i).unwrap_or(&Limb::ZERO);
            let &y = b.limbs.get(i).unwrap_or(&Limb::ZERO);
            let (limb, c) = f(x, y, carry);
            limbs.push(limb);
            carry = c;
        }

        (limbs.into(), carry)
    }

    /// Computes `self + rhs + carry`, returning the result along with the new
    /// carry. The result has `max(self.nlimbs(), rhs.nlimbs())` limbs.
    pub fn adc(&self, rhs: &Self, carry: Limb) -> (Self, Limb) {
        Self::chain(self, rhs, carry, |a, b, c| a.carrying_add(b, c))
    }

    /// Computes `self + rhs`, growing the representation so the result is
    /// always exact.
    pub fn add(&self, rhs: &Self) -> Self {
        let (mut ret, carry) = self.adc(rhs, Limb::ZERO);
        ret.limbs.push(carry);
        ret.trim();
        ret
    }

    /// Computes `self += rhs + carry` in place at the current width,
    /// returning the carry out. `rhs` must not be wider than `self`;
    /// missing limbs are treated as zero.
    pub fn adc_assign(&mut self, rhs: &Self, mut carry: Limb) -> Limb {
        debug_assert!(rhs.limbs.len() <= self.limbs.len());

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let r = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let (res, c) = limb.carrying_add(r, carry);
            *limb = res;
            carry = c;
        }

        carry
    }

    /// Conditionally computes `self += rhs` in place, returning the carry out.
    ///
    /// The addition is always executed; `choice` selects between `rhs` and
    /// zero limb by limb, so the time pattern is independent of it.
    pub fn conditional_adc_assign(&mut self, rhs: &Self, choice: Choice) -> Limb {
        debug_assert!(rhs.limbs.len() <= self.limbs.len());
        let mask = Limb(u64::from(choice.unwrap_u8()).wrapping_neg());
        let mut carry = Limb::ZERO;

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let r = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let (res, c) = limb.carrying_add(Limb(r.0 & mask.0), carry);
            *limb = res;
            carry = c;
        }

        carry
    }
}

#[cfg(test)]
mod tests {
    use subtle::Choice;

    use super::Uint;
    use crate::limb::Limb;

    #[test]
    fn add_grows() {
        let a = Uint::from_word(u64::MAX);
        let sum = a.add(&Uint::one());
        assert_eq!(sum, Uint::from_u128(1u128 << 64));
    }

    #[test]
    fn adc_mixed_widths() {
        let a = Uint::from_u128(u128::MAX);
        let (res, carry) = a.adc(&Uint::one(), Limb::ZERO);
        assert!(res.is_zero_vartime());
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    fn conditional_adc_assign_no_op() {
        let mut a = Uint::from_word(5);
        let carry = a.conditional_adc_assign(&Uint::from_word(3), Choice::from(0));
        assert_eq!(carry, Limb::ZERO);
        assert_eq!(a, Uint::from_word(5));

        let carry = a.conditional_adc_assign(&Uint::from_word(3), Choice::from(1));
        assert_eq!(carry, Limb::ZERO);
        assert_eq!(a, Uint::from_word(8));
    }
}
