//! Verdict type and interpretation of synchronous rule results

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn is_fail(self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

/// Interpretation of a synchronous rule's return value
///
/// Only an explicit `false` or an `Err` fails; every other value passes,
/// including `()` from rules that assert nothing. Deferred checks never go
/// through this trait; their resolution value is ignored entirely.
pub trait IntoVerdict {
    fn into_verdict(self) -> Verdict;
}

impl IntoVerdict for Verdict {
    fn into_verdict(self) -> Verdict {
        self
    }
}

impl IntoVerdict for bool {
    fn into_verdict(self) -> Verdict {
        if self {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl IntoVerdict for () {
    fn into_verdict(self) -> Verdict {
        Verdict::Pass
    }
}

impl<T, E> IntoVerdict for Result<T, E>
where
    T: IntoVerdict,
{
    fn into_verdict(self) -> Verdict {
        match self {
            Ok(inner) => inner.into_verdict(),
            Err(_) => Verdict::Fail,
        }
    }
}
