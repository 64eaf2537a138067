#![allow(dead_code)]
//! Helpers shared by the integration suites.

pub mod fixtures;

use mpc_bigint::BigInt;
use num_bigint::BigInt as OracleInt;

/// Convert to the `num-bigint` oracle representation.
pub fn to_oracle(x: &BigInt) -> OracleInt {
    x.to_string().parse().expect("decimal round-trip")
}

/// Convert from the `num-bigint` oracle representation.
pub fn from_oracle(x: &OracleInt) -> BigInt {
    x.to_string().parse().expect("decimal round-trip")
}
