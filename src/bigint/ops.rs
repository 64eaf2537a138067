//! Exact signed arithmetic operators for [`BigInt`].

use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};

use super::BigInt;
use crate::uint::Uint;

/// Add two sign-magnitude values.
fn signed_add(lhs_neg: bool, lhs: &Uint, rhs_neg: bool, rhs: &Uint) -> BigInt {
    if lhs_neg == rhs_neg {
        let mut sum = lhs.add(rhs);
        sum.trim();
        BigInt::from_sign_magnitude(lhs_neg, sum)
    } else {
        match lhs.cmp_vartime(rhs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::from_sign_magnitude(lhs_neg, lhs.sub(rhs)),
            Ordering::Less => BigInt::from_sign_magnitude(rhs_neg, rhs.sub(lhs)),
        }
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> BigInt {
        signed_add(
            self.is_negative(),
            self.magnitude(),
            rhs.is_negative(),
            rhs.magnitude(),
        )
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> BigInt {
        signed_add(
            self.is_negative(),
            self.magnitude(),
            !rhs.is_negative(),
            rhs.magnitude(),
        )
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> BigInt {
        let mut product = self.magnitude().mul(rhs.magnitude());
        product.trim();
        BigInt::from_sign_magnitude(self.is_negative() != rhs.is_negative(), product)
    }
}

macro_rules! impl_binop_forwarding {
    ($($op:ident :: $fn:ident),+) => {
        $(
            impl $op for BigInt {
                type Output = BigInt;
                fn $fn(self, rhs: Self) -> BigInt {
                    $op::$fn(&self, &rhs)
                }
            }

            impl $op<&BigInt> for BigInt {
                type Output = BigInt;
                fn $fn(self, rhs: &BigInt) -> BigInt {
                    $op::$fn(&self, rhs)
                }
            }

            impl $op<BigInt> for &BigInt {
                type Output = BigInt;
                fn $fn(self, rhs: BigInt) -> BigInt {
                    $op::$fn(self, &rhs)
                }
            }

            impl $op<i64> for &BigInt {
                type Output = BigInt;
                fn $fn(self, rhs: i64) -> BigInt {
                    $op::$fn(self, &BigInt::from(rhs))
                }
            }

            impl $op<i64> for BigInt {
                type Output = BigInt;
                fn $fn(self, rhs: i64) -> BigInt {
                    $op::$fn(&self, &BigInt::from(rhs))
                }
            }
        )+
    };
}

impl_binop_forwarding!(Add::add, Sub::sub, Mul::mul);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_sign_magnitude(!self.is_negative(), self.magnitude().clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn add_sub_signs() {
        let cases: [(i64, i64); 9] = [
            (5, 8),
            (5, -8),
            (-5, 8),
            (-5, -8),
            (8, -5),
            (0, 7),
            (7, 0),
            (0, 0),
            (-3, 3),
        ];
        for (a, b) in cases {
            assert_eq!(
                BigInt::from(a) + BigInt::from(b),
                BigInt::from(a + b),
                "{a} + {b}"
            );
            assert_eq!(
                BigInt::from(a) - BigInt::from(b),
                BigInt::from(a - b),
                "{a} - {b}"
            );
        }
    }

    #[test]
    fn mul_signs() {
        for (a, b) in [(3i64, 7i64), (-3, 7), (3, -7), (-3, -7), (0, 5), (-5, 0)] {
            assert_eq!(BigInt::from(a) * BigInt::from(b), BigInt::from(a * b));
        }
    }

    #[test]
    fn literal_rhs() {
        let a = BigInt::from(10);
        assert_eq!(&a + 5, BigInt::from(15));
        assert_eq!(&a - 15, BigInt::from(-5));
        assert_eq!(a * -2, BigInt::from(-20));
    }

    #[test]
    fn neg() {
        assert_eq!(-BigInt::from(5), BigInt::from(-5));
        assert_eq!(-BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn carries_across_limbs() {
        let a = BigInt::from(u64::MAX);
        let sum = &a + &a;
        assert_eq!(sum, BigInt::from(u128::from(u64::MAX) * 2));
    }
}
