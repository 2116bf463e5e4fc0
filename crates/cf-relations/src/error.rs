//! Relation evaluation errors.

use cf_core::CfError;
use thiserror::Error;

/// Result type for relation evaluation.
pub type RelationResult<T> = Result<T, RelationError>;

/// A relation evaluated outside the domain where its algebra is defined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    /// Mach number must be positive and finite.
    #[error("Mach number out of domain: {value}")]
    Mach { value: f64 },

    /// Specific-heat ratio must be finite and greater than one.
    #[error("Specific-heat ratio out of domain: {value}")]
    Gamma { value: f64 },

    /// Undefined algebra inside the expression.
    #[error("Undefined expression: {0}")]
    Numeric(#[from] CfError),
}
