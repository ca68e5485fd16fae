//! Scoped floating-point environment.
//!
//! Rust floats never trap: `log10(-1.0)` is NaN and `log10(0.0)` is
//! `-inf`, and computation carries on. What remains configurable is whether
//! such invalid operations are *reported*. The policy is per thread and is
//! changed through an RAII guard that restores the previous policy when it
//! goes out of scope, including during unwinding.
//!
//! # Policies
//!
//! - [`InvalidOp::Warn`] (default) - one `tracing::warn!` per call that
//!   turned finite inputs into non-finite outputs
//! - [`InvalidOp::Ignore`] - silent
//!
//! # Usage
//!
//! ```rust
//! use gsdf_core::fpenv::{self, InvalidOp};
//!
//! assert_eq!(fpenv::invalid_op(), InvalidOp::Warn);
//! {
//!     let _guard = fpenv::ignore_invalid();
//!     assert_eq!(fpenv::invalid_op(), InvalidOp::Ignore);
//! }
//! assert_eq!(fpenv::invalid_op(), InvalidOp::Warn);
//! ```

use crate::Elementwise;
use std::cell::Cell;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// What to do when an operation produces a non-finite result from a
/// finite input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvalidOp {
    /// Emit a warning with the operation name and element count.
    #[default]
    Warn,
    /// Say nothing.
    Ignore,
}

thread_local! {
    static INVALID_OP: Cell<InvalidOp> = const { Cell::new(InvalidOp::Warn) };
}

/// Current invalid-operation policy of this thread.
#[inline]
pub fn invalid_op() -> InvalidOp {
    INVALID_OP.with(Cell::get)
}

/// Restores the previous invalid-operation policy on drop.
///
/// The guard is tied to the thread that created it and cannot be sent
/// elsewhere.
#[must_use = "the policy is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct FpEnvGuard {
    prev: InvalidOp,
    _not_send: PhantomData<*const ()>,
}

impl Drop for FpEnvGuard {
    fn drop(&mut self) {
        INVALID_OP.with(|cell| cell.set(self.prev));
    }
}

/// Sets the invalid-operation policy until the returned guard is dropped.
pub fn set_invalid_op(policy: InvalidOp) -> FpEnvGuard {
    let prev = INVALID_OP.with(|cell| cell.replace(policy));
    FpEnvGuard {
        prev,
        _not_send: PhantomData,
    }
}

/// Silences invalid-operation reports until the guard is dropped.
pub fn ignore_invalid() -> FpEnvGuard {
    set_invalid_op(InvalidOp::Ignore)
}

/// Runs `f` with the given policy, restoring the previous one afterwards.
///
/// # Example
///
/// ```rust
/// use gsdf_core::fpenv::{self, InvalidOp};
///
/// let seen = fpenv::with_invalid_op(InvalidOp::Ignore, fpenv::invalid_op);
/// assert_eq!(seen, InvalidOp::Ignore);
/// ```
pub fn with_invalid_op<R>(policy: InvalidOp, f: impl FnOnce() -> R) -> R {
    let _guard = set_invalid_op(policy);
    f()
}

/// Maps `input` through `f`, reporting invalid operations per the current
/// policy of the calling thread.
///
/// An element counts as invalid when its input was finite and its output
/// is not. Non-finite inputs propagate without being reported.
pub fn map_checked<E, F>(input: E, op: &'static str, f: F) -> E::Output
where
    E: Elementwise,
    F: Fn(f64) -> f64 + Send + Sync,
{
    match invalid_op() {
        InvalidOp::Ignore => input.map_elements(f),
        InvalidOp::Warn => {
            let invalid = AtomicUsize::new(0);
            let out = input.map_elements(|v| {
                let r = f(v);
                if v.is_finite() && !r.is_finite() {
                    invalid.fetch_add(1, Ordering::Relaxed);
                }
                r
            });
            let count = invalid.into_inner();
            if count > 0 {
                warn!(op, count, "invalid value encountered");
            }
            out
        }
    }
}
