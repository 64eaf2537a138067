//! Modular exponentiation in the Montgomery domain.

use subtle::ConstantTimeEq;

use super::params::MontyParams;
use super::reduction::mont_mul;
use crate::limb::Limb;
use crate::uint::Uint;

const WINDOW: u32 = 4;
const WINDOW_MASK: u64 = (1 << WINDOW) - 1;

/// Raise `base` (in Montgomery form, reduced) to `exponent`, returning the
/// result in Montgomery form.
///
/// Fixed 4-bit windows with a constant-time table lookup: the memory access
/// pattern is independent of the base. The exponent's bit length is leaked
/// in the time pattern; every caller in this crate passes a public exponent
/// (a public modulus minus two, or a primality-test decomposition).
pub(crate) fn pow_mont(base: &Uint, exponent: &Uint, params: &MontyParams) -> Uint {
    debug_assert_eq!(base.nlimbs(), params.nlimbs());

    let exp_bits = exponent.bit_len();
    if exp_bits == 0 {
        return params.one().clone();
    }

    // powers[i] contains base^i in Montgomery form.
    let mut powers = Vec::with_capacity(1 << WINDOW);
    powers.push(params.one().clone());
    for i in 1..1usize << WINDOW {
        powers.push(mont_mul(&powers[i - 1], base, params));
    }

    // WINDOW divides Limb::BITS, so windows never straddle a limb boundary.
    let windows = exp_bits.div_ceil(WINDOW);
    let mut z = params.one().clone();

    for w in (0..windows).rev() {
        if w != windows - 1 {
            for _ in 0..WINDOW {
                z = mont_mul(&z, &z, params);
            }
        }

        let limb = exponent.as_limbs()[(w * WINDOW / Limb::BITS) as usize].0;
        let idx = (limb >> (w * WINDOW % Limb::BITS)) & WINDOW_MASK;

        // Constant-time lookup in the array of powers.
        let mut power = powers[0].clone();
        for (j, p) in powers.iter().enumerate().skip(1) {
            power.ct_assign(p, (j as u64).ct_eq(&idx));
        }
        z = mont_mul(&z, &power, params);
    }

    z
}

#[cfg(test)]
mod tests {
    use super::pow_mont;
    use crate::modular::{MontyParams, from_montgomery, to_montgomery};
    use crate::uint::Uint;

    fn pow_u64(base: u64, exp: u64, modulus: u64) -> u64 {
        let mut acc = 1u128;
        let mut base = u128::from(base) % u128::from(modulus);
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % u128::from(modulus);
            }
            base = base * base % u128::from(modulus);
            exp >>= 1;
        }
        acc as u64
    }

    #[test]
    fn matches_plain_exponentiation() {
        let m = 1_000_000_007u64;
        let params = MontyParams::new(&Uint::from_word(m)).unwrap();

        for (base, exp) in [(2u64, 10u64), (3, 0), (7, 65537), (999, 1_000_000_005)] {
            let base_mont = to_montgomery(&Uint::from_word(base), &params);
            let z = pow_mont(&base_mont, &Uint::from_word(exp), &params);
            assert_eq!(
                from_montgomery(&z, &params),
                Uint::from_word(pow_u64(base, exp, m)),
                "{base}^{exp}"
            );
        }
    }

    #[test]
    fn fermat_little_theorem() {
        // p prime, a^(p-1) == 1 mod p.
        let p = 0xFFFF_FFFF_0000_0001u64; // Goldilocks prime
        let params = MontyParams::new(&Uint::from_word(p)).unwrap();
        let a = to_montgomery(&Uint::from_word(123_456_789), &params);
        let z = pow_mont(&a, &Uint::from_word(p - 1), &params);
        assert_eq!(from_montgomery(&z, &params), Uint::one());
    }
}
