//! Error types for Vouch

use thiserror::Error;

/// The main error type for Vouch operations
///
/// Nothing inside a running session is fatal; these errors only reject
/// malformed registrations at the boundary.
#[derive(Debug, Error)]
pub enum VouchError {
    #[error("Check field name is empty (statement: {statement:?})")]
    EmptyField { statement: String },

    #[error("Check statement is empty (field: {field:?})")]
    EmptyStatement { field: String },
}

/// Result type alias for Vouch operations
pub type Result<T> = std::result::Result<T, VouchError>;
