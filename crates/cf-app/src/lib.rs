//! Shared application service layer for compflow.
//!
//! Centralises configuration handling, sweep execution, document assembly
//! and output writing so the CLI stays a thin front end.

pub mod error;
pub mod hash;
pub mod project_service;
pub mod table_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use hash::document_digest;
pub use project_service::{
    Overrides, TableSetSummary, apply_overrides, list_table_sets, load_project, save_project,
    validate_project,
};
pub use table_service::{
    GeneratedDocument, PointEvaluation, WrittenDocument, build_documents, evaluate_point,
    generate, write_document,
};
