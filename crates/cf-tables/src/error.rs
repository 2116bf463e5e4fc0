//! Table generation errors.

use thiserror::Error;

/// Result type for sweep and table operations.
pub type TableResult<T> = Result<T, TableError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Sweep bounds or step violate the grid invariants.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: String },

    /// Regime name not recognised.
    #[error("Unknown flow regime: {name}")]
    UnknownRegime { name: String },
}
