//! cf-core: stable foundation for compflow.
//!
//! Contains:
//! - numeric (Real + tolerances + checked real-valued float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CfError, CfResult};
pub use numeric::*;
