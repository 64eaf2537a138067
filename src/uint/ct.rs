//! Constant-time assignment and selection for [`Uint`]s of equal width.

use subtle::{Choice, ConditionallySelectable};

use super::Uint;
use crate::limb::Limb;

impl Uint {
    /// Conditionally assign `other` to `self`. Both must have the same width.
    pub fn ct_assign(&mut self, other: &Self, choice: Choice) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());
        for (a, b) in self.limbs.iter_mut().zip(other.limbs.iter()) {
            *a = Limb::conditional_select(a, b, choice);
        }
    }

    /// Conditionally swap `a` and `b`. Both must have the same width.
    pub fn ct_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        debug_assert_eq!(a.limbs.len(), b.limbs.len());
        for (x, y) in a.limbs.iter_mut().zip(b.limbs.iter_mut()) {
            let t = Limb::conditional_select(x, y, choice);
            *y = Limb::conditional_select(y, x, choice);
            *x = t;
        }
    }

    /// Return `a` when the choice is unset, `b` otherwise. Equal widths.
    pub fn select(a: &Self, b: &Self, choice: Choice) -> Self {
        debug_assert_eq!(a.limbs.len(), b.limbs.len());
        let mut ret = a.clone();
        ret.ct_assign(b, choice);
        ret
    }
}

#[cfg(test)]
mod tests {
    use subtle::Choice;

    use super::Uint;

    #[test]
    fn select_and_swap() {
        let a = Uint::from_word(1);
        let b = Uint::from_word(2);

        assert_eq!(Uint::select(&a, &b, Choice::from(0)), a);
        assert_eq!(Uint::select(&a, &b, Choice::from(1)), b);

        let (mut x, mut y) = (a.clone(), b.clone());
        Uint::ct_swap(&mut x, &mut y, Choice::from(1));
        assert_eq!(x, b);
        assert_eq!(y, a);
    }
}
