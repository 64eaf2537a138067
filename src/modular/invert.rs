//! Modular inversion algorithms.
//!
//! Two interchangeable strategies with the same `a * r == 1 (mod m)`
//! contract for odd `m > 1`:
//!
//! - [`invert_mod_vartime`]: extended Euclidean algorithm, fast but with
//!   operand-dependent timing. Only reached from variable-time scopes.
//! - [`invert_mod_ct`]: divstep iteration after Bernstein-Yang
//!   (<https://eprint.iacr.org/2019/266>, the safegcd family). A fixed
//!   number of branch-free steps derived from the modulus bit length, so
//!   the time and memory-access pattern is independent of the operand.
//!   Correct for any odd modulus, prime or composite.

use core::cmp::Ordering;

use subtle::{Choice, ConditionallySelectable};

use super::params::MontyParams;
use crate::limb::Limb;
use crate::uint::Uint;

/// Number of divsteps guaranteed to reach `g = 0` for inputs of the given
/// bit length (Bernstein-Yang 2019, section 11 bounds).
const fn divstep_iterations(bits: u32) -> u32 {
    if bits < 46 {
        (49 * bits + 80) / 17
    } else {
        (49 * bits + 57) / 17
    }
}

/// `delta > 0`, branch-free. `delta` stays far from `i64::MIN`.
#[inline]
fn delta_gt_zero(delta: i64) -> Choice {
    Choice::from(((delta.wrapping_neg() as u64 >> 63) & 1) as u8)
}

/// `m - x` for `x` in `[0, m)`, with `-0 = 0`. Fixed width.
fn mod_neg(x: &Uint, m: &Uint, zero: &Uint) -> Uint {
    let mut neg = m.clone();
    let borrow = neg.sbb_assign(x, Limb::ZERO);
    debug_assert_eq!(borrow, Limb::ZERO);
    neg.ct_assign(zero, x.is_zero());
    neg
}

/// `x + y mod m` when `choice` is set, `x` otherwise. All width `m`.
fn add_mod_conditional(x: &Uint, y: &Uint, m: &Uint, choice: Choice) -> Uint {
    let mut sum = x.clone();
    let carry = sum.conditional_adc_assign(y, choice);
    let mut diff = sum.clone();
    let borrow = diff.sbb_assign(m, Limb::ZERO);

    // Keep the raw sum only when it was already reduced: no carry out and
    // the trial subtraction borrowed.
    let revert = borrow.lsb_to_choice() & !carry.lsb_to_choice();
    Uint::select(&diff, &sum, revert)
}

/// `x / 2 mod m` in place for odd `m`: add `m` when `x` is odd, then shift.
fn half_mod(x: &mut Uint, m: &Uint) {
    let is_odd = x.is_odd();
    let carry = x.conditional_adc_assign(m, is_odd);
    x.shr1_assign();
    let top = x.nlimbs() - 1;
    x.as_limbs_mut()[top].0 |= carry.0 << (Limb::BITS - 1);
}

/// Sign-magnitude addition `a + (add ? b : 0)` at a fixed width wide enough
/// that the magnitude sum cannot carry out. Branch-free.
fn signed_add_ct(
    a_sign: Choice,
    a: &Uint,
    b_sign: Choice,
    b: &Uint,
    add: Choice,
) -> (Choice, Uint) {
    debug_assert_eq!(a.nlimbs(), b.nlimbs());
    let b_masked = Uint::select(&Uint::zero_with(b.nlimbs()), b, add);

    let same_sign = !(a_sign ^ b_sign);

    let mut sum = a.clone();
    let carry = sum.adc_assign(&b_masked, Limb::ZERO);
    debug_assert_eq!(carry, Limb::ZERO, "magnitude sum overflowed its width");

    let mut diff = a.clone();
    let borrow = diff.sbb_assign(&b_masked, Limb::ZERO);
    let b_bigger = borrow.lsb_to_choice();
    let mut neg_diff = diff.clone();
    neg_diff.wrapping_neg_assign();

    let mag_diff = Uint::select(&diff, &neg_diff, b_bigger);
    let sign_diff = Choice::conditional_select(&a_sign, &b_sign, b_bigger);

    let mag = Uint::select(&mag_diff, &sum, same_sign);
    let sign = Choice::conditional_select(&sign_diff, &a_sign, same_sign);
    (sign, mag)
}

/// Constant-time modular inversion of `a` (reduced, at the modulus width).
///
/// Returns the candidate inverse and a [`Choice`] that is set iff the
/// inverse exists (`gcd(a, m) == 1`).
///
/// Divstep state: signed `f`, `g` with `|f|, |g| <= m` and `f` odd, plus
/// coefficients `d`, `e` in `[0, m)` maintaining `f == d*a (mod m)` and
/// `g == e*a (mod m)`. After the fixed iteration count, `g = 0` and
/// `f = ±gcd(a, m)`; the inverse is then `±d mod m`.
pub(crate) fn invert_mod_ct(a: &Uint, params: &MontyParams) -> (Uint, Choice) {
    let n = params.nlimbs();
    debug_assert_eq!(a.nlimbs(), n);
    let m = params.modulus();
    let zero_n = Uint::zero_with(n);

    // f and g carry one spare limb: intermediate magnitude sums reach 2m.
    let mut f = m.to_width(n + 1);
    let mut f_sign = Choice::from(0);
    let mut g = a.to_width(n + 1);
    let mut g_sign = Choice::from(0);
    let mut d = Uint::zero_with(n);
    let mut e = Uint::one().to_width(n);
    let mut delta: i64 = 1;

    for _ in 0..divstep_iterations(params.bit_len()) {
        let g_odd = g.is_odd();
        let swap = delta_gt_zero(delta) & g_odd;

        // Conditionally (delta, f, g, d, e) <- (-delta, g, -f, e, -d mod m).
        delta = i64::conditional_select(&delta, &delta.wrapping_neg(), swap);
        Uint::ct_swap(&mut f, &mut g, swap);
        Choice::conditional_swap(&mut f_sign, &mut g_sign, swap);
        g_sign ^= swap;
        Uint::ct_swap(&mut d, &mut e, swap);
        let e_neg = mod_neg(&e, m, &zero_n);
        e.ct_assign(&e_neg, swap);

        delta += 1;

        // g <- (g + g_odd*f) / 2; the sum is even by construction.
        (g_sign, g) = signed_add_ct(g_sign, &g, f_sign, &f, g_odd);
        g.shr1_assign();

        // e mirrors g: e <- (e + g_odd*d) / 2 mod m.
        e = add_mod_conditional(&e, &d, m, g_odd);
        half_mod(&mut e, m);
    }

    // g has converged to zero and f to ±gcd(a, m).
    let ok = f.ct_eq_value(&Uint::one());
    let d_neg = mod_neg(&d, m, &zero_n);
    let inv = Uint::select(&d, &d_neg, f_sign);
    (inv, ok)
}

/// Variable-time modular inversion by the extended Euclidean algorithm.
///
/// `m` must be positive and greater than one; `a` may be unreduced.
/// Returns `None` when no inverse exists.
pub(crate) fn invert_mod_vartime(a: &Uint, m: &Uint) -> Option<Uint> {
    let one = Uint::one();
    if m.bit_len() < 2 {
        return None;
    }

    let mut r = m.clone();
    r.trim();
    let mut newr = a.rem(&r);
    let mut t = Uint::zero();
    let mut newt = one.clone();

    while !newr.is_zero_vartime() {
        let (q, rem) = r.div_rem(&newr);
        let product = q.mul(&newt);

        // newt' = t - q*newt (mod m), avoiding signed intermediates.
        let candidate = if t.cmp_vartime(&product) != Ordering::Less {
            t.sub(&product)
        } else {
            let diff = product.sub(&t).rem(m);
            if diff.is_zero_vartime() {
                Uint::zero()
            } else {
                m.sub(&diff)
            }
        };

        t = core::mem::replace(&mut newt, candidate);
        r = core::mem::replace(&mut newr, rem);
    }

    if r == one { Some(t) } else { None }
}
