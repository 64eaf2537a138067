//! Execution-mode scoping: constant-time by default, variable-time by
//! explicit, lexically scoped opt-in.
//!
//! The mode stack is owned by the calling thread. Multi-party protocols run
//! one computation per peer concurrently; a process-global flag would let
//! one session's variable-time scope relax the checks of another session's
//! constant-time-sensitive arithmetic, so each thread gets an independent
//! stack initialized to [`TimingMode::ConstantTime`].

use core::cell::RefCell;
use core::marker::PhantomData;

thread_local! {
    static MODE_STACK: RefCell<Vec<TimingMode>> = const { RefCell::new(Vec::new()) };
}

/// Execution mode consulted by every modular operation at call time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TimingMode {
    /// Operand ranges are strictly checked and operations execute in time
    /// independent of operand values. The default.
    ConstantTime,
    /// Out-of-range operands are silently normalized; timing may depend on
    /// operand values. Only for public data.
    VariableTime,
}

impl TimingMode {
    /// The mode currently active on this thread: the innermost live
    /// [`VartimeScope`], or [`TimingMode::ConstantTime`] when none is.
    pub fn current() -> TimingMode {
        MODE_STACK.with(|stack| {
            stack
                .borrow()
                .last()
                .copied()
                .unwrap_or(TimingMode::ConstantTime)
        })
    }
}

/// Is the current thread inside a variable-time scope?
pub(crate) fn is_vartime() -> bool {
    TimingMode::current() == TimingMode::VariableTime
}

/// RAII guard entering variable-time mode for the current thread.
///
/// Restores the previous mode when dropped, on every exit path including
/// unwinding. Scopes nest: an inner scope is idempotent, and leaving it
/// restores the enclosing scope's mode rather than the baseline.
///
/// The guard is deliberately `!Send`: a scope belongs to the execution
/// context that opened it.
#[must_use = "the scope is vartime only while the guard lives"]
#[derive(Debug)]
pub struct VartimeScope {
    _not_send: PhantomData<*const ()>,
}

impl VartimeScope {
    /// Push variable-time mode onto this thread's stack.
    pub fn new() -> Self {
        MODE_STACK.with(|stack| stack.borrow_mut().push(TimingMode::VariableTime));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Default for VartimeScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VartimeScope {
    fn drop(&mut self) {
        MODE_STACK.with(|stack| {
            let popped = stack.borrow_mut().pop();
            debug_assert_eq!(popped, Some(TimingMode::VariableTime));
        });
    }
}

/// Run `f` inside a variable-time scope.
pub fn with_vartime<R>(f: impl FnOnce() -> R) -> R {
    let _scope = VartimeScope::new();
    f()
}

#[cfg(test)]
mod tests {
    use super::{TimingMode, VartimeScope, with_vartime};

    #[test]
    fn default_is_constant_time() {
        assert_eq!(TimingMode::current(), TimingMode::ConstantTime);
    }

    #[test]
    fn scope_restores_on_drop() {
        {
            let _scope = VartimeScope::new();
            assert_eq!(TimingMode::current(), TimingMode::VariableTime);
        }
        assert_eq!(TimingMode::current(), TimingMode::ConstantTime);
    }

    #[test]
    fn nested_scopes_restore_outer() {
        let _outer = VartimeScope::new();
        {
            let _inner = VartimeScope::new();
            assert_eq!(TimingMode::current(), TimingMode::VariableTime);
        }
        // Inner exit restores the outer scope, not the baseline.
        assert_eq!(TimingMode::current(), TimingMode::VariableTime);
    }

    #[test]
    fn scope_restored_across_unwinding() {
        let caught = std::panic::catch_unwind(|| {
            let _scope = VartimeScope::new();
            panic!("boom");
        });
        assert!(caught.is_err());
        assert_eq!(TimingMode::current(), TimingMode::ConstantTime);
    }

    #[test]
    fn closure_helper() {
        let mode = with_vartime(TimingMode::current);
        assert_eq!(mode, TimingMode::VariableTime);
        assert_eq!(TimingMode::current(), TimingMode::ConstantTime);
    }

    #[test]
    fn scopes_do_not_leak_across_threads() {
        let _scope = VartimeScope::new();
        let other = std::thread::spawn(TimingMode::current)
            .join()
            .expect("thread");
        assert_eq!(other, TimingMode::ConstantTime);
    }
}
