//! Invariant-violation reporting.
//!
//! Both violation kinds are programming/security-contract errors, not
//! recoverable runtime conditions: an un-reduced operand reaching a
//! constant-time path may already be a side-channel-relevant logic error,
//! so the library refuses to silently repair it. Reporting goes through an
//! injectable handler: the default panics with a fixed message (which test
//! harnesses intercept via `catch_unwind`/`should_panic`), and production
//! embedders may install a handler that aborts the process instead.

use core::fmt;
use std::sync::Mutex;

/// A violated library invariant. Always fatal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    /// A `Modulus` was constructed from an even value or a value not
    /// greater than one, outside the Montgomery-context precondition.
    InvalidModulus,
    /// A negative or non-reduced operand reached a constant-time operation.
    OperandOutOfRange,
    /// A modular inverse was requested for an operand that is not coprime
    /// to the modulus.
    NotInvertible,
}

impl Violation {
    /// The fixed message reported for this violation.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidModulus => "modulus must be an odd value greater than one",
            Self::OperandOutOfRange => "operand out of range for constant-time operation",
            Self::NotInvertible => "operand is not invertible for the modulus",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Handler invoked on every [`Violation`]. Must diverge.
pub type ViolationHandler = fn(Violation) -> !;

fn default_handler(violation: Violation) -> ! {
    panic!("invariant violation: {violation}");
}

static HANDLER: Mutex<ViolationHandler> = Mutex::new(default_handler);

/// Install a process-wide violation handler.
///
/// Applies to all threads. Intended for embedders that must escalate
/// contract violations to process termination (or route them into their
/// own fatal-error facility) instead of unwinding.
pub fn set_violation_handler(handler: ViolationHandler) {
    *lock_handler() = handler;
}

pub(crate) fn violation(violation: Violation) -> ! {
    let handler = *lock_handler();
    handler(violation)
}

fn lock_handler() -> std::sync::MutexGuard<'static, ViolationHandler> {
    // The lock is only held to copy a function pointer; it cannot be
    // poisoned by a panicking handler.
    match HANDLER.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::Violation;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            Violation::OperandOutOfRange.message(),
            "operand out of range for constant-time operation"
        );
        assert_eq!(
            Violation::OperandOutOfRange.to_string(),
            Violation::OperandOutOfRange.message()
        );
    }

    #[test]
    fn default_handler_panics_with_message() {
        let caught = std::panic::catch_unwind(|| {
            super::violation(Violation::InvalidModulus);
        })
        .expect_err("handler must diverge");

        let message = caught
            .downcast_ref::<String>()
            .expect("panic payload is a formatted string");
        assert!(message.contains("odd value greater than one"));
    }
}
