//! Decimal parsing and formatting for [`BigInt`].

use core::fmt;
use core::str::FromStr;

use super::BigInt;
use crate::uint::encoding::{self, ParseBigIntError};

impl BigInt {
    /// Parse a decimal string with an optional leading `-` or `+`.
    pub fn from_decimal(s: &str) -> Result<Self, ParseBigIntError> {
        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            Some((b'+', rest)) => (false, rest),
            _ => (false, bytes),
        };

        let magnitude = encoding::parse_decimal(digits)?;
        Ok(Self::from_sign_magnitude(negative, magnitude))
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", encoding::to_decimal(self.magnitude()))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        fmt::LowerHex::fmt(self.magnitude(), f)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        fmt::UpperHex::fmt(self.magnitude(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{BigInt, ParseBigIntError};

    #[test]
    fn parse_signs() {
        assert_eq!("42".parse::<BigInt>().unwrap(), BigInt::from(42));
        assert_eq!("-42".parse::<BigInt>().unwrap(), BigInt::from(-42));
        assert_eq!("+42".parse::<BigInt>().unwrap(), BigInt::from(42));
        assert_eq!("-0".parse::<BigInt>().unwrap(), BigInt::zero());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("12x".parse::<BigInt>(), Err(ParseBigIntError::InvalidDigit));
    }

    #[test]
    fn display_round_trip() {
        for s in [
            "0",
            "-1",
            "12345678901234567890123456789012345678901234567890",
            "-340282366920938463463374607431768211455",
        ] {
            assert_eq!(s.parse::<BigInt>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn parse_2_128() {
        let parsed: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
        assert_eq!(parsed, BigInt::from(2).pow(128));
    }
}
