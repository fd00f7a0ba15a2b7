//! Vouch Core - Validation-rule orchestration
//!
//! This crate runs caller-supplied checks against named fields of a target,
//! tolerating synchronous predicates, future-returning rules, and bare
//! deferred values, and aggregates their verdicts into one report that stays
//! consistent under out-of-order asynchronous completion.

mod check;
mod error;
mod evaluator;
mod registry;
mod report;
mod session;
mod verdict;

pub use check::{
    marker, AsyncRule, Check, CheckDescriptor, CheckKind, DeferredCheck, IntoCheck, Severity,
    SyncRule,
};
pub use error::{Result, VouchError};
pub use registry::PendingRegistry;
pub use report::RunReport;
pub use session::Session;
pub use verdict::{IntoVerdict, Verdict};
