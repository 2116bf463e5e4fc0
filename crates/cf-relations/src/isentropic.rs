//! Isentropic flow of a perfect gas.
//!
//! Static-to-stagnation ratios, the area ratio to the choked throat and the
//! mass-flow parameter, all as functions of Mach number and γ.

use crate::common::{check_inputs, sonic_factor_pow, stagnation_factor};
use crate::error::RelationResult;
use cf_core::{Real, checked_div, real_pow};

/// T/Tt
pub fn temperature_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    Ok(checked_div(1.0, stagnation_factor(mach, gamma), "T/Tt")?)
}

/// P/Pt
pub fn pressure_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    Ok(real_pow(
        stagnation_factor(mach, gamma),
        -gamma / (gamma - 1.0),
        "P/Pt",
    )?)
}

/// ρ/ρt
pub fn density_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    Ok(real_pow(
        stagnation_factor(mach, gamma),
        -1.0 / (gamma - 1.0),
        "rho/rhot",
    )?)
}

/// A/A*, area relative to the sonic throat passing the same mass flow.
pub fn area_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let choke_exp = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    let factor = sonic_factor_pow(mach, gamma, choke_exp, "A/A*")?;
    Ok(checked_div(factor, mach, "A/A*")?)
}

/// Mass-flow parameter, tabulated as MFP·√(R/gc) = √γ · M · (1 + (γ-1)/2 · M²)^(-(γ+1)/(2(γ-1))).
pub fn mass_flow_parameter(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let choke_exp = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    let decay = real_pow(stagnation_factor(mach, gamma), -choke_exp, "MFP")?;
    Ok(gamma.sqrt() * mach * decay)
}
