//! Length comparison predicates

use serde::{Deserialize, Serialize};

/// Values that compare by length
///
/// Strings and collections measure the same way, so one predicate serves
/// both. String length counts characters, not bytes.
pub trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// Options bag for the comparison predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareOptions {
    /// The length bound to compare against
    pub test_against: usize,
}

/// True if the value's length is strictly below the bound
pub fn shorter_than<V: HasLength + ?Sized>(value: &V, options: &CompareOptions) -> bool {
    value.length() < options.test_against
}

/// True if the value's length is strictly above the bound
pub fn longer_than<V: HasLength + ?Sized>(value: &V, options: &CompareOptions) -> bool {
    value.length() > options.test_against
}

/// True if the value's length equals the bound exactly
pub fn length_equals<V: HasLength + ?Sized>(value: &V, options: &CompareOptions) -> bool {
    value.length() == options.test_against
}
