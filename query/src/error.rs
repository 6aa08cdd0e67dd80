//! Query error types.

use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while resolving reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A requested record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A stored reference points at a missing record.
    ///
    /// The mutation rules make this unreachable; seeing it means the store
    /// was modified around them.
    #[error("Dangling reference: {from} points to missing {kind} {id}")]
    DanglingReference {
        from: String,
        kind: &'static str,
        id: String,
    },
}

impl QueryError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn dangling_reference(from: impl Into<String>, kind: &'static str, id: impl ToString) -> Self {
        Self::DanglingReference {
            from: from.into(),
            kind,
            id: id.to_string(),
        }
    }
}

