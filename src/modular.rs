//! Montgomery-based modular arithmetic for odd moduli: precomputed
//! parameters, reduction, multiplication, exponentiation, and the two
//! modular-inversion algorithms.

pub(crate) mod invert;
pub(crate) mod params;
pub(crate) mod pow;
pub(crate) mod reduction;

pub(crate) use invert::{invert_mod_ct, invert_mod_vartime};
pub(crate) use params::MontyParams;
pub(crate) use pow::pow_mont;
pub(crate) use reduction::{from_montgomery, mont_mul, to_montgomery};
