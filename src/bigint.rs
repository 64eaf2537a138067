//! Arbitrary-precision signed integers.

mod encoding;
mod ops;
mod prime;
mod rand;

use core::cmp::Ordering;

use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::uint::Uint;

/// Arbitrary-precision signed integer.
///
/// Sign-magnitude representation; zero is never negative. Raw `BigInt`
/// arithmetic is exact and carries no modulus and no timing contract.
/// Constant-time guarantees live in [`Modulus`][crate::Modulus] operations,
/// which consume and produce `BigInt` values reduced to the modulus range.
#[derive(Clone, Default)]
pub struct BigInt {
    negative: bool,
    magnitude: Uint,
}

impl BigInt {
    /// The value `0`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The value `1`.
    pub fn one() -> Self {
        Self {
            negative: false,
            magnitude: Uint::one(),
        }
    }

    /// Construct from a sign and magnitude, normalizing negative zero.
    pub(crate) fn from_sign_magnitude(negative: bool, magnitude: Uint) -> Self {
        let negative = negative && !magnitude.is_zero_vartime();
        Self {
            negative,
            magnitude,
        }
    }

    /// Construct a non-negative value from a magnitude, preserving its width.
    pub(crate) fn from_uint(magnitude: Uint) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// Borrow the magnitude.
    pub(crate) fn magnitude(&self) -> &Uint {
        &self.magnitude
    }

    /// Take the magnitude out of a non-negative value.
    pub(crate) fn into_magnitude(self) -> Uint {
        debug_assert!(!self.negative);
        self.magnitude
    }

    /// Is this value negative?
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Is this value odd?
    pub fn is_odd(&self) -> bool {
        self.magnitude.is_odd().into()
    }

    /// Effective bit length of the magnitude. Zero has bit length 0.
    pub fn bit_len(&self) -> u32 {
        self.magnitude.bit_len()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// The unique representative `r` of `self` with `0 <= r < modulus`.
    ///
    /// Always available, independent of the timing mode: computing a
    /// canonical representative is not itself treated as a secret-dependent
    /// timing hazard in this design.
    ///
    /// Panics when `modulus <= 0`; a non-positive modulus is a caller bug,
    /// not a data error.
    pub fn rem_euclid(&self, modulus: &Self) -> Self {
        assert!(
            !modulus.negative && !modulus.magnitude.is_zero_vartime(),
            "modulus must be positive"
        );

        let mut r = self.magnitude.rem(&modulus.magnitude);
        if self.negative && !r.is_zero_vartime() {
            r = modulus.magnitude.sub(&r);
        }
        Self::from_uint(r)
    }

    /// Is `gcd(self, modulus) == 1`?
    ///
    /// `0` is coprime to nothing and `1` is coprime to everything.
    pub fn is_coprime(&self, modulus: &Self) -> bool {
        if self.magnitude.is_zero_vartime() {
            return false;
        }
        if self.magnitude.bit_len() == 1 {
            // |self| == 1
            return true;
        }
        self.magnitude.gcd(&modulus.magnitude) == Uint::one()
    }

    /// Raise to an exact (unmodulated) power.
    pub fn pow(&self, exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        let mut exp = exp;

        while exp != 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp != 0 {
                base = &base * &base;
            }
        }

        acc
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.magnitude == other.magnitude
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp_vartime(&other.magnitude),
            (true, true) => other.magnitude.cmp_vartime(&self.magnitude),
        }
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero_vartime()
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self::one()
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.negative = false;
        self.magnitude.zeroize();
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                BigInt::from_uint(Uint::from_word(n as u64))
            }
        })+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                BigInt::from_sign_magnitude(n < 0, Uint::from_word(n.unsigned_abs() as u64))
            }
        })+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for BigInt {
    fn from(n: u128) -> BigInt {
        BigInt::from_uint(Uint::from_u128(n))
    }
}

impl From<i128> for BigInt {
    fn from(n: i128) -> BigInt {
        BigInt::from_sign_magnitude(n < 0, Uint::from_u128(n.unsigned_abs()))
    }
}
