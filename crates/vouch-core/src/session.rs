//! Session orchestration: registration, dispatch, staging, and settlement

use crate::check::{Check, CheckDescriptor, CheckKind, DeferredCheck, IntoCheck, Severity};
use crate::evaluator;
use crate::registry::PendingRegistry;
use crate::report::RunReport;
use crate::verdict::Verdict;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};

/// One verdict arriving from a deferred check
struct Settlement {
    field: String,
    statement: String,
    severity: Severity,
    verdict: Verdict,
}

/// A single validation run over a named target
///
/// The session owns its report, its pending registry, and every deferred
/// check wired during registration. Sync verdicts land before the
/// constructor returns; deferred verdicts land during [`Session::settle`],
/// in completion order.
pub struct Session {
    name: String,
    report: RunReport,
    pending: PendingRegistry,
    settlements: FuturesUnordered<BoxFuture<'static, Settlement>>,
}

impl Session {
    /// Start a session and run the definition callback exactly once
    pub fn new(name: impl Into<String>, definition: impl FnOnce(&mut Session)) -> Self {
        let mut session = Session {
            name: name.into(),
            report: RunReport::new(),
            pending: PendingRegistry::new(),
            settlements: FuturesUnordered::new(),
        };
        definition(&mut session);
        session
    }

    /// Register one check against a field
    ///
    /// Sync checks are evaluated before this returns. Async checks are
    /// invoked now and settled later. A panicking rule is a failure, never
    /// an unwind into the caller. Unsupported check values are skipped
    /// without touching the report, so one malformed rule cannot abort the
    /// rest of the target.
    pub fn register<M>(
        &mut self,
        field: impl Into<String>,
        statement: impl Into<String>,
        severity: Severity,
        check: impl IntoCheck<M>,
    ) {
        let descriptor = match CheckDescriptor::new(field, statement, check) {
            Ok(descriptor) => descriptor.with_severity(severity),
            Err(err) => {
                warn!(session = %self.name, error = %err, "skipping invalid check registration");
                return;
            }
        };
        self.dispatch(descriptor);
    }

    fn dispatch(&mut self, descriptor: CheckDescriptor) {
        let (field, statement, severity, check) = descriptor.into_parts();

        match check {
            Check::Sync(rule) => {
                self.report.bump_test_counter();
                let verdict = evaluator::run_rule(rule);
                self.report.record(&field, &statement, severity, verdict);
            }
            Check::AsyncFn(rule) => {
                self.report.bump_test_counter();
                match evaluator::invoke_rule(rule) {
                    Some(fut) => {
                        self.report.mark_async();
                        self.push_settlement(field, statement, severity, fut);
                    }
                    // A panic during invocation means no future was ever
                    // produced; the throw lands as an immediate failure and
                    // the async latch stays off.
                    None => self.report.record(&field, &statement, severity, Verdict::Fail),
                }
            }
            Check::Deferred(fut) => {
                self.report.bump_test_counter();
                self.report.mark_async();
                self.push_settlement(field, statement, severity, fut);
            }
            Check::Unsupported => {
                debug!(session = %self.name, field = %field, "ignoring unsupported check value");
            }
        }
    }

    fn push_settlement(
        &mut self,
        field: String,
        statement: String,
        severity: Severity,
        fut: DeferredCheck,
    ) {
        let shielded = evaluator::shield(fut);
        self.settlements.push(
            shielded
                .map(move |verdict| Settlement {
                    field,
                    statement,
                    severity,
                    verdict,
                })
                .boxed(),
        );
    }

    /// Stage a descriptor for the next drain pass
    ///
    /// Staged checks run under the synchronous rule, so only sync
    /// descriptors are accepted; anything else is dropped here rather than
    /// misread at drain time.
    pub fn stage(&mut self, descriptor: CheckDescriptor) {
        if descriptor.kind() != CheckKind::Sync {
            warn!(
                session = %self.name,
                field = %descriptor.field(),
                kind = ?descriptor.kind(),
                "dropping staged check; only sync checks can be staged"
            );
            return;
        }
        self.pending.stage(descriptor);
    }

    /// Run every staged check in staging order and deliver its verdict
    ///
    /// The registry is emptied up front; checks staged while a drain is in
    /// progress wait for the next one. Each staged check counts toward
    /// `test_count` here, not at staging time.
    pub fn drain(&mut self) {
        let batch = self.pending.take_all();
        debug!(session = %self.name, staged = batch.len(), "draining staged checks");
        for descriptor in batch {
            self.dispatch(descriptor);
        }
    }

    /// Drive outstanding deferred checks to completion
    ///
    /// Verdicts apply in completion order, which need not match
    /// registration order. Safe to call repeatedly; checks registered after
    /// one settle pass are picked up by the next. No timeouts: a check that
    /// never completes keeps this future pending, so callers wanting a bound
    /// must race their check against a timer before registering it.
    pub async fn settle(&mut self) {
        while let Some(settlement) = self.settlements.next().await {
            debug!(
                session = %self.name,
                field = %settlement.field,
                verdict = ?settlement.verdict,
                "deferred check settled"
            );
            self.report.record(
                &settlement.field,
                &settlement.statement,
                settlement.severity,
                settlement.verdict,
            );
        }
    }

    /// The name of the validation target
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The aggregated report; still subject to change while deferred checks
    /// are outstanding
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Number of staged checks awaiting the next drain
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// True while deferred checks remain unsettled
    pub fn has_unsettled(&self) -> bool {
        !self.settlements.is_empty()
    }
}
