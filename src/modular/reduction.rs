//! Montgomery reduction and multiplication.

use subtle::Choice;

use super::params::MontyParams;
use crate::limb::Limb;
use crate::uint::Uint;

/// Montgomery reduction: given `x < modulus * R`, computes
/// `x * R^-1 mod modulus` where `R = 2^(64 * nlimbs)`.
///
/// Algorithm 14.32 in Handbook of Applied Cryptography
/// <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>.
///
/// `x` must be exactly twice the modulus width; the result has the modulus
/// width. Constant-time in the value of `x`.
pub(crate) fn montgomery_reduction(x: &mut Uint, params: &MontyParams) -> Uint {
    let n = params.nlimbs();
    debug_assert_eq!(x.nlimbs(), 2 * n);

    let mod_neg_inv = params.mod_neg_inv();
    let modulus = params.modulus().as_limbs();
    let t = x.as_limbs_mut();
    let mut meta_carry = Limb::ZERO;

    for i in 0..n {
        let u = t[i].wrapping_mul(mod_neg_inv);

        let (_, mut carry) = t[i].mac(u, modulus[0], Limb::ZERO);
        for j in 1..n {
            let (limb, c) = t[i + j].mac(u, modulus[j], carry);
            t[i + j] = limb;
            carry = c;
        }

        let (sum, c) = t[i + n].carrying_add(carry, meta_carry);
        t[i + n] = sum;
        meta_carry = c;
    }

    // Division by R is taking the upper half of the limbs. The value there
    // is at most `2 * modulus` (with `meta_carry` as its top bit), so a
    // single conditional correction completes the reduction.
    let mut out = Uint::from(t[n..].to_vec());
    let borrow = out.sbb_assign(params.modulus(), Limb::ZERO);

    // The subtraction only underflowed if there was no meta carry.
    let add_back = Choice::from((borrow.0 & !meta_carry.0.wrapping_neg() & 1) as u8);
    out.conditional_adc_assign(params.modulus(), add_back);

    out
}

/// Montgomery product: `a * b * R^-1 mod modulus` for `a, b < modulus` at
/// the modulus width.
pub(crate) fn mont_mul(a: &Uint, b: &Uint, params: &MontyParams) -> Uint {
    debug_assert_eq!(a.nlimbs(), params.nlimbs());
    debug_assert_eq!(b.nlimbs(), params.nlimbs());
    let mut wide = a.mul(b);
    montgomery_reduction(&mut wide, params)
}

/// Convert a reduced value into the Montgomery domain: `a * R mod modulus`.
pub(crate) fn to_montgomery(a: &Uint, params: &MontyParams) -> Uint {
    mont_mul(a, params.r2(), params)
}

/// Convert a value out of the Montgomery domain: `a * R^-1 mod modulus`.
pub(crate) fn from_montgomery(a: &Uint, params: &MontyParams) -> Uint {
    let mut wide = a.to_width(2 * params.nlimbs());
    montgomery_reduction(&mut wide, params)
}
