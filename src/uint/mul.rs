//! [`Uint`] multiplication operations.

use super::Uint;
use crate::limb::Limb;

impl Uint {
    /// Multiply `self` by `rhs`.
    ///
    /// Schoolbook multiplication. The result always has
    /// `self.nlimbs() + rhs.nlimbs()` limbs, which constant-time callers
    /// rely on: a product of two modulus-width operands is exactly the
    /// double-width input expected by Montgomery reduction.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut ret = Self::zero_with(self.nlimbs() + rhs.nlimbs());

        for i in 0..self.nlimbs() {
            let mut carry = Limb::ZERO;

            for j in 0..rhs.nlimbs() {
                let k = i + j;
                let (n, c) = ret.limbs[k].mac(self.limbs[i], rhs.limbs[j], carry);
                ret.limbs[k] = n;
                carry = c;
            }

            ret.limbs[i + rhs.nlimbs()] = carry;
        }

        ret
    }

    /// Computes `self = self * scale + addend` in place, growing by one limb
    /// when the final carry is non-zero.
    pub fn mul_add_limb_assign(&mut self, scale: Limb, addend: Limb) {
        let mut carry = addend;
        for limb in self.limbs.iter_mut() {
            let (res, c) = Limb::ZERO.mac(*limb, scale, carry);
            *limb = res;
            carry = c;
        }
        if carry.0 != 0 {
            self.limbs.push(carry);
        }
    }
}
