//! Shared building blocks for the perfect-gas relations.

use crate::error::{RelationError, RelationResult};
use cf_core::{Real, real_pow};

/// Signature shared by every ratio function: `(mach, gamma) -> ratio`.
pub type RatioFn = fn(Real, Real) -> RelationResult<Real>;

/// Domain check applied at the top of every relation.
pub fn check_inputs(mach: Real, gamma: Real) -> RelationResult<()> {
    if !mach.is_finite() || mach <= 0.0 {
        return Err(RelationError::Mach { value: mach });
    }
    if !gamma.is_finite() || gamma <= 1.0 {
        return Err(RelationError::Gamma { value: gamma });
    }
    Ok(())
}

/// Stagnation factor `1 + (γ-1)/2 · M²`.
#[inline]
pub fn stagnation_factor(mach: Real, gamma: Real) -> Real {
    1.0 + 0.5 * (gamma - 1.0) * mach * mach
}

/// `[2/(γ+1) · (1 + (γ-1)/2 · M²)]^exponent`, the sonic-normalised stagnation factor.
pub fn sonic_factor_pow(
    mach: Real,
    gamma: Real,
    exponent: Real,
    what: &'static str,
) -> RelationResult<Real> {
    let base = 2.0 / (gamma + 1.0) * stagnation_factor(mach, gamma);
    Ok(real_pow(base, exponent, what)?)
}
