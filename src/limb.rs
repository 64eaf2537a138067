//! Big integers are represented as a vector of smaller CPU word-size
//! integers called "limbs".

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::primitives::{Word, borrowing_sub, carrying_add, carrying_mul_add};

/// Calculate the number of limbs required to represent the given number of bits.
#[inline(always)]
pub(crate) const fn nlimbs(bits: u32) -> usize {
    bits.div_ceil(Limb::BITS) as usize
}

/// One word of a big integer, least significant digit first in a magnitude.
///
/// All bits of the inner [`Word`] are used; there is no reserved carry bit.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner word in bits.
    pub const BITS: u32 = Word::BITS;

    /// Is this limb equal to zero?
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Convert the least significant bit to a [`Choice`].
    #[inline]
    pub fn lsb_to_choice(self) -> Choice {
        Choice::from((self.0 & 1) as u8)
    }

    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// The borrow is a full mask: [`Limb::MAX`] when borrowed, [`Limb::ZERO`] otherwise.
    #[inline(always)]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Computes `self + (b * c) + carry`, returning the result along with the new carry.
    #[inline(always)]
    pub const fn mac(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    pub const fn wrapping_mul(self, rhs: Limb) -> Limb {
        Limb(self.0.wrapping_mul(rhs.0))
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Limb(Word::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl From<u8> for Limb {
    fn from(n: u8) -> Limb {
        Limb(n.into())
    }
}

impl From<u32> for Limb {
    fn from(n: u32) -> Limb {
        Limb(n.into())
    }
}

impl From<u64> for Limb {
    fn from(n: u64) -> Limb {
        Limb(n)
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::LowerHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::UpperHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl zeroize::DefaultIsZeroes for Limb {}
