//! cf-relations: closed-form compressible-flow relations for a perfect gas.
//!
//! Provides:
//! - Isentropic ratios to stagnation conditions
//! - Fanno line ratios (friction, constant area)
//! - Rayleigh line ratios (heat transfer, constant area)
//! - Normal shock jump relations
//!
//! Every relation has the signature `fn(mach, gamma) -> RelationResult<f64>`
//! and fails with a [`RelationError`] instead of returning `inf` or NaN.
//!
//! # Example
//!
//! ```
//! use cf_relations::{isentropic, normal_shock};
//!
//! let t = isentropic::temperature_ratio(1.0, 1.4).unwrap();
//! assert!((t - 0.8333).abs() < 1e-4);
//!
//! let p = normal_shock::static_pressure_ratio(2.0, 1.4).unwrap();
//! assert!((p - 4.5).abs() < 1e-12);
//! ```

pub mod common;
pub mod error;
pub mod fanno;
pub mod isentropic;
pub mod normal_shock;
pub mod rayleigh;

pub use common::{RatioFn, check_inputs, stagnation_factor};
pub use error::{RelationError, RelationResult};
