//! [`Uint`] comparisons.
//!
//! Equality and ordering compare numeric values: representations of
//! different widths compare equal when the extra high limbs are zero.

use core::cmp::Ordering;

use subtle::{Choice, ConstantTimeEq};

use super::Uint;
use crate::limb::Limb;

impl Uint {
    /// Constant-time equality over the numeric values.
    ///
    /// The time pattern depends on the representation widths (public), not
    /// the limb values.
    pub fn ct_eq_value(&self, other: &Self) -> Choice {
        let len = self.limbs.len().max(other.limbs.len());
        let mut eq = Choice::from(1);

        for i in 0..len {
            let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let b = other.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            eq &= a.ct_eq(&b);
        }

        eq
    }

    /// Constant-time `self < other` over the numeric values.
    pub fn ct_lt_value(&self, other: &Self) -> Choice {
        // `self < other` iff `self - other` borrows.
        let len = self.limbs.len().max(other.limbs.len());
        let mut borrow = Limb::ZERO;

        for i in 0..len {
            let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let b = other.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            (_, borrow) = a.borrowing_sub(b, borrow);
        }

        borrow.lsb_to_choice()
    }

    /// Variable-time value comparison.
    pub fn cmp_vartime(&self, other: &Self) -> Ordering {
        let len = self.limbs.len().max(other.limbs.len());

        for i in (0..len).rev() {
            let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let b = other.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            match a.0.cmp(&b.0) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for Uint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq_value(other).into()
    }
}

impl Eq for Uint {}

impl PartialOrd for Uint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}
