//! Vouch Enforce - Leaf comparison predicates
//!
//! Pure, stateless predicates over a value and an options bag. They know
//! nothing about sessions or reports; callers wrap them in closures and
//! register those closures as checks.

mod compare;

pub use compare::{length_equals, longer_than, shorter_than, CompareOptions, HasLength};
