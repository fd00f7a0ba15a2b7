//! Check classification and descriptor types
//!
//! A check arrives as whatever the caller had on hand: a plain predicate, a
//! future-returning function, a bare future, or something that is none of
//! these. Classification happens once, at the registration boundary, through
//! [`IntoCheck`]; downstream code only ever matches the resulting [`Check`]
//! tag.

use crate::error::{Result, VouchError};
use crate::verdict::{IntoVerdict, Verdict};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Severity attached to a check at registration
///
/// Warn failures are recorded separately and never affect overall validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Fail,
    Warn,
}

/// Boxed synchronous rule, consumed by its single evaluation
pub type SyncRule = Box<dyn FnOnce() -> Verdict + Send + 'static>;

/// Boxed future that resolves to a check's verdict
pub type DeferredCheck = BoxFuture<'static, Verdict>;

/// Boxed callable producing a deferred check when invoked
pub type AsyncRule = Box<dyn FnOnce() -> DeferredCheck + Send + 'static>;

/// A classified check, built once at the registration boundary
pub enum Check {
    /// Plain callable, evaluated inline under the synchronous rule
    Sync(SyncRule),
    /// Callable returning a future; invoked at registration, settled later
    AsyncFn(AsyncRule),
    /// Bare future standing in for a verdict
    Deferred(DeferredCheck),
    /// Anything else; skipped without touching the report
    Unsupported,
}

/// The classification tag of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Sync,
    AsyncFn,
    Deferred,
    Unsupported,
}

impl Check {
    /// The classification tag, without consuming the check
    pub fn kind(&self) -> CheckKind {
        match self {
            Check::Sync(_) => CheckKind::Sync,
            Check::AsyncFn(_) => CheckKind::AsyncFn,
            Check::Deferred(_) => CheckKind::Deferred,
            Check::Unsupported => CheckKind::Unsupported,
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Check").field(&self.kind()).finish()
    }
}

/// Markers that pin down which [`IntoCheck`] conversion applies
///
/// Never named at call sites; the compiler infers the right one from the
/// shape of the check value.
pub mod marker {
    /// Synchronous callables
    pub enum Sync {}
    /// Future-returning callables
    pub enum Async {}
    /// Bare futures
    pub enum Deferred {}
    /// Plain values, none of which are runnable
    pub enum Value {}
}

/// Conversion from a caller-supplied check value into a classified [`Check`]
pub trait IntoCheck<M> {
    fn into_check(self) -> Check;
}

impl<F, V> IntoCheck<marker::Sync> for F
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoVerdict,
{
    fn into_check(self) -> Check {
        Check::Sync(Box::new(move || self().into_verdict()))
    }
}

// The async settlement rule is attached here, once: rejection fails,
// fulfilment passes no matter what it resolved to. Ok(false) still passes;
// only the sync path inspects returned values.
impl<F, Fut, T, E> IntoCheck<marker::Async> for F
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    fn into_check(self) -> Check {
        Check::AsyncFn(Box::new(move || {
            self()
                .map(|outcome| match outcome {
                    Ok(_) => Verdict::Pass,
                    Err(_) => Verdict::Fail,
                })
                .boxed()
        }))
    }
}

impl<Fut, T, E> IntoCheck<marker::Deferred> for Fut
where
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    fn into_check(self) -> Check {
        Check::Deferred(
            self.map(|outcome| match outcome {
                Ok(_) => Verdict::Pass,
                Err(_) => Verdict::Fail,
            })
            .boxed(),
        )
    }
}

macro_rules! unsupported_check {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCheck<marker::Value> for $ty {
                fn into_check(self) -> Check {
                    Check::Unsupported
                }
            }
        )*
    };
}

// A malformed rule must not abort validation of the rest of the target, so
// plain values classify as Unsupported instead of failing to register.
unsupported_check!(bool, i32, i64, u32, u64, f32, f64, (), &str, String, serde_json::Value);

impl<T> IntoCheck<marker::Value> for Vec<T> {
    fn into_check(self) -> Check {
        Check::Unsupported
    }
}

impl<T> IntoCheck<marker::Value> for Option<T> {
    fn into_check(self) -> Check {
        Check::Unsupported
    }
}

/// A named check bound to a field, with its severity
///
/// Immutable once built; consumed by its single evaluation.
#[derive(Debug)]
pub struct CheckDescriptor {
    field: String,
    statement: String,
    severity: Severity,
    check: Check,
}

impl CheckDescriptor {
    /// Build a descriptor; the field and statement must be non-empty
    pub fn new<M>(
        field: impl Into<String>,
        statement: impl Into<String>,
        check: impl IntoCheck<M>,
    ) -> Result<Self> {
        let field = field.into();
        let statement = statement.into();

        if field.is_empty() {
            return Err(VouchError::EmptyField { statement });
        }
        if statement.is_empty() {
            return Err(VouchError::EmptyStatement { field });
        }

        Ok(Self {
            field,
            statement,
            severity: Severity::Fail,
            check: check.into_check(),
        })
    }

    /// Set the severity (defaults to [`Severity::Fail`])
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The classification of the wrapped check
    pub fn kind(&self) -> CheckKind {
        self.check.kind()
    }

    pub(crate) fn into_parts(self) -> (String, String, Severity, Check) {
        (self.field, self.statement, self.severity, self.check)
    }
}
