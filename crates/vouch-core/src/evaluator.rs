//! Rule execution with panic shielding
//!
//! A check that panics is a failed check, never a crashed session. Every
//! execution path runs under `catch_unwind`; the payload is discarded.

use crate::check::{AsyncRule, DeferredCheck, SyncRule};
use crate::verdict::Verdict;
use futures::future::FutureExt;
use std::panic::{self, AssertUnwindSafe};

/// Run a synchronous rule to its verdict
pub(crate) fn run_rule(rule: SyncRule) -> Verdict {
    match panic::catch_unwind(AssertUnwindSafe(rule)) {
        Ok(verdict) => verdict,
        Err(_) => Verdict::Fail,
    }
}

/// Invoke a future-returning rule to obtain its deferred check
///
/// Returns `None` when the rule panics before producing a future; the caller
/// delivers that as an immediate failure.
pub(crate) fn invoke_rule(rule: AsyncRule) -> Option<DeferredCheck> {
    panic::catch_unwind(AssertUnwindSafe(rule)).ok()
}

/// Wrap a deferred check so a panic settles as a failure
pub(crate) fn shield(fut: DeferredCheck) -> DeferredCheck {
    AssertUnwindSafe(fut)
        .catch_unwind()
        .map(|settled| settled.unwrap_or(Verdict::Fail))
        .boxed()
}
