//! Greatest common divisor. Binary (Stein) algorithm, variable-time;
//! coprimality is queried on public values or inside variable-time scopes.

use core::cmp::Ordering;

use super::Uint;

impl Uint {
    /// Computes `gcd(self, rhs)`.
    pub fn gcd(&self, rhs: &Self) -> Self {
        let mut a = self.clone();
        a.trim();
        let mut b = rhs.clone();
        b.trim();

        if a.is_zero_vartime() {
            return b;
        }
        if b.is_zero_vartime() {
            return a;
        }

        let az = a.trailing_zeros();
        let bz = b.trailing_zeros();
        let common_twos = az.min(bz);
        a.shr_assign(az);
        b.shr_assign(bz);

        // Both odd from here on.
        loop {
            if a.cmp_vartime(&b) == Ordering::Greater {
                core::mem::swap(&mut a, &mut b);
            }
            b = b.sub(&a);
            if b.is_zero_vartime() {
                break;
            }
            b.shr_assign(b.trailing_zeros());
        }

        a.shl_assign(common_twos);
        a
    }
}

#[cfg(test)]
mod tests {
    use super::Uint;

    #[test]
    fn gcd_small() {
        let gcd = Uint::from_word(12).gcd(&Uint::from_word(18));
        assert_eq!(gcd, Uint::from_word(6));

        let gcd = Uint::from_word(17).gcd(&Uint::from_word(4));
        assert_eq!(gcd, Uint::one());
    }

    #[test]
    fn gcd_with_zero() {
        assert_eq!(Uint::zero().gcd(&Uint::from_word(5)), Uint::from_word(5));
        assert_eq!(Uint::from_word(5).gcd(&Uint::zero()), Uint::from_word(5));
    }

    #[test]
    fn gcd_multi_limb() {
        // 2^128 - 1 is divisible by 3; 9 shares exactly one factor of 3.
        let m = Uint::from_u128(u128::MAX);
        assert_eq!(m.gcd(&Uint::from_word(9)), Uint::from_word(3));
        assert_eq!(m.gcd(&Uint::from_word(14)), Uint::one());
    }

    #[test]
    fn gcd_powers_of_two() {
        let a = Uint::from_word(48);
        let b = Uint::from_word(64);
        assert_eq!(a.gcd(&b), Uint::from_word(16));
    }
}
