//! Stationary normal shock in a perfect gas.
//!
//! Upstream conditions carry the subscript x, downstream conditions y. The
//! relations are plain algebra in `mach_x`; the physical branch is `mach_x > 1`
//! but subsonic inputs are evaluated wherever the algebra stays defined.

use crate::common::{check_inputs, stagnation_factor};
use crate::error::RelationResult;
use cf_core::{Real, checked_div, real_pow, real_sqrt};

/// Downstream Mach number M_y.
pub fn downstream_mach(mach_x: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach_x, gamma)?;
    let denom = gamma * mach_x * mach_x - 0.5 * (gamma - 1.0);
    let m_y2 = checked_div(stagnation_factor(mach_x, gamma), denom, "M_y")?;
    Ok(real_sqrt(m_y2, "M_y")?)
}

/// P_y/P_x
pub fn static_pressure_ratio(mach_x: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach_x, gamma)?;
    Ok(1.0 + 2.0 * gamma / (gamma + 1.0) * (mach_x * mach_x - 1.0))
}

/// ρ_y/ρ_x
pub fn density_ratio(mach_x: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach_x, gamma)?;
    let m2 = mach_x * mach_x;
    Ok(checked_div(
        (gamma + 1.0) * m2,
        (gamma - 1.0) * m2 + 2.0,
        "rho_y/rho_x",
    )?)
}

/// T_y/T_x, from the equation of state.
pub fn temperature_ratio(mach_x: Real, gamma: Real) -> RelationResult<Real> {
    let p = static_pressure_ratio(mach_x, gamma)?;
    let rho = density_ratio(mach_x, gamma)?;
    Ok(checked_div(p, rho, "T_y/T_x")?)
}

/// P_ty/P_tx in closed form.
pub fn total_pressure_ratio(mach_x: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach_x, gamma)?;
    let m2 = mach_x * mach_x;
    let compression = checked_div(
        (gamma + 1.0) * m2,
        (gamma - 1.0) * m2 + 2.0,
        "P_ty/P_tx",
    )?;
    let expansion = checked_div(
        gamma + 1.0,
        2.0 * gamma * m2 - (gamma - 1.0),
        "P_ty/P_tx",
    )?;
    let a = real_pow(compression, gamma / (gamma - 1.0), "P_ty/P_tx")?;
    let b = real_pow(expansion, 1.0 / (gamma - 1.0), "P_ty/P_tx")?;
    Ok(a * b)
}

/// P_ty/P_tx through the static pressure jump and the isentropic stagnation
/// relation on each side of the shock.
pub fn total_pressure_ratio_via_static(mach_x: Real, gamma: Real) -> RelationResult<Real> {
    let p_jump = static_pressure_ratio(mach_x, gamma)?;
    let mach_y = downstream_mach(mach_x, gamma)?;
    let stag = checked_div(
        stagnation_factor(mach_y, gamma),
        stagnation_factor(mach_x, gamma),
        "P_ty/P_tx",
    )?;
    Ok(p_jump * real_pow(stag, gamma / (gamma - 1.0), "P_ty/P_tx")?)
}
