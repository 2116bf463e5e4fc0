//! cf-tables: Mach sweeps over compressible-flow relations, rendered as LaTeX tables.
//!
//! Provides:
//! - Flow regime column schemas
//! - Sweep grid definitions (inclusive, restartable)
//! - Sweep execution with whole-row skipping of undefined points
//! - `longtable` document rendering
//!
//! # Example
//!
//! ```
//! use cf_tables::{FlowRegime, SweepParameters, execute_sweep, render_document};
//!
//! let params = SweepParameters::new(1.0, 4.0, 0.01, 1.4).unwrap();
//! let result = execute_sweep(FlowRegime::NormalShock, &params);
//! let latex = render_document([&result]);
//! assert!(latex.contains("2.00 & 0.5774"));
//! ```

pub mod error;
pub mod regime;
pub mod render;
pub mod sweep_executor;
pub mod sweeps;

// Re-exports for ergonomics
pub use error::{TableError, TableResult};
pub use regime::{Column, FlowRegime, MACH_PRECISION, RATIO_PRECISION};
pub use render::{LatexDocument, render_document, render_table};
pub use sweep_executor::{
    FlowRow, SkippedPoint, SweepResult, evaluate_column, evaluate_row, execute_sweep,
};
pub use sweeps::{MAX_POINTS, MachGrid, SweepParameters};
