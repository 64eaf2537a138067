//! Base-10 parsing and encoding for magnitudes, plus hex formatting.

use core::fmt;

use super::Uint;
use crate::limb::Limb;
use crate::primitives::Word;

/// Number of decimal digits that always fit in one limb.
const LIMB_LOG10: usize = 19;

/// `10^LIMB_LOG10`.
const LIMB_MAX10: Word = 10u64.pow(LIMB_LOG10 as u32);

/// The failure result for decimal parsing operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseBigIntError {
    /// The input was empty (or a bare sign).
    Empty,
    /// The input contained a character outside `0-9` (after the sign).
    InvalidDigit,
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty decimal string"),
            Self::InvalidDigit => write!(f, "invalid decimal digit"),
        }
    }
}

impl core::error::Error for ParseBigIntError {}

/// Parse an unsigned decimal digit string.
pub(crate) fn parse_decimal(digits: &[u8]) -> Result<Uint, ParseBigIntError> {
    if digits.is_empty() {
        return Err(ParseBigIntError::Empty);
    }

    let mut ret = Uint::zero();
    for chunk in digits.chunks(LIMB_LOG10) {
        let mut chunk_val: Word = 0;
        for &c in chunk {
            if !c.is_ascii_digit() {
                return Err(ParseBigIntError::InvalidDigit);
            }
            chunk_val = chunk_val * 10 + Word::from(c - b'0');
        }
        let scale = 10u64.pow(chunk.len() as u32);
        ret.mul_add_limb_assign(Limb(scale), Limb(chunk_val));
    }

    ret.trim();
    Ok(ret)
}

/// Format a magnitude as a decimal digit string.
pub(crate) fn to_decimal(value: &Uint) -> String {
    if value.is_zero_vartime() {
        return "0".into();
    }

    let mut x = value.clone();
    x.trim();

    // Low-order groups of 19 digits first.
    let mut groups = Vec::new();
    while !x.is_zero_vartime() {
        let (q, r) = x.div_rem_limb(Limb(LIMB_MAX10));
        groups.push(r.0);
        x = q;
    }

    let mut out = String::with_capacity(groups.len() * LIMB_LOG10);
    let mut groups = groups.into_iter().rev();
    if let Some(top) = groups.next() {
        out.push_str(&top.to_string());
    }
    for group in groups {
        out.push_str(&format!("{group:019}"));
    }
    out
}

impl fmt::LowerHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.as_limbs().is_empty() {
            return fmt::LowerHex::fmt(&Limb::ZERO, f);
        }
        for limb in self.as_limbs().iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.as_limbs().is_empty() {
            return fmt::UpperHex::fmt(&Limb::ZERO, f);
        }
        for limb in self.as_limbs().iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}
