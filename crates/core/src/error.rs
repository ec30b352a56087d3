//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Absent items
/// are not errors: lookups yield `0` and removals report `false`. File and
/// serialization failures belong to the persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (e.g. a quantity that is not a number).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_renders_message() {
        let err = DomainError::invalid_argument("Quantity must be a number");
        assert_eq!(err.to_string(), "invalid argument: Quantity must be a number");
        let DomainError::InvalidArgument(msg) = err;
        assert_eq!(msg, "Quantity must be a number");
    }
}
