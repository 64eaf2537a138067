//! Modular big-integer arithmetic engine for multi-party computation
//! protocols.
//!
//! The crate provides arbitrary-precision integers ([`BigInt`]) and odd
//! moduli with precomputed Montgomery reduction contexts ([`Modulus`]),
//! under an explicit timing-safety contract:
//!
//! - **Constant-time mode** (the default): modular operations require
//!   reduced operands, checked with constant-time comparisons, and execute
//!   in time independent of operand values. Passing an out-of-range
//!   operand is a fatal contract violation, not a recoverable error.
//! - **Variable-time mode**: entered lexically via [`VartimeScope`] (or
//!   [`with_vartime`]) for public data only. Operands of any sign and
//!   magnitude are silently normalized, and faster operand-dependent
//!   algorithms may be used.
//!
//! The mode is tracked per thread as a nestable scope stack, so concurrent
//! protocol sessions cannot relax each other's checks.
//!
//! ```
//! use mpc_bigint::{BigInt, InvAlgo, Modulus, with_vartime};
//!
//! let m = Modulus::new(&BigInt::from(37));
//!
//! // Constant-time mode: operands must already be reduced.
//! assert_eq!(m.add(&BigInt::from(5), &BigInt::from(8)), BigInt::from(13));
//!
//! // Variable-time scope: negative and overflowed operands are reduced.
//! let c = with_vartime(|| m.add(&BigInt::from(-8), &BigInt::from(5)));
//! assert_eq!(c, BigInt::from(34));
//!
//! // Side-channel-resistant inversion works for composite moduli too.
//! let inv = m.inv(&BigInt::from(2), InvAlgo::Scr);
//! assert_eq!(m.mul(&inv, &BigInt::from(2)), BigInt::from(1));
//! ```

mod bigint;
mod guard;
mod limb;
mod modular;
mod modulus;
mod primitives;
mod uint;
mod vartime;

pub use crate::bigint::BigInt;
pub use crate::guard::{Violation, ViolationHandler, set_violation_handler};
pub use crate::modulus::{InvAlgo, ModuloScope, Modulus};
pub use crate::uint::encoding::ParseBigIntError;
pub use crate::vartime::{TimingMode, VartimeScope, with_vartime};
