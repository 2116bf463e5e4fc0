//! Fanno line: adiabatic flow with wall friction in a constant-area duct.
//!
//! All ratios are referenced to the sonic (starred) state reached at the end of
//! the maximum duct length 4fL*/D.

use crate::common::{check_inputs, sonic_factor_pow, stagnation_factor};
use crate::error::RelationResult;
use cf_core::{Real, checked_div, real_ln, real_sqrt};

/// 4fL*/D, the friction length needed to reach M = 1.
pub fn friction_parameter(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let m2 = mach * mach;
    let reciprocal = checked_div(1.0 - m2, gamma * m2, "4fL*/D")?;
    let log_arg = checked_div((gamma + 1.0) * m2, 2.0 + (gamma - 1.0) * m2, "4fL*/D")?;
    let log_term = (gamma + 1.0) / (2.0 * gamma) * real_ln(log_arg, "4fL*/D")?;
    Ok(reciprocal + log_term)
}

/// I/I*, the impulse function pA(1 + γM²) over its sonic value.
pub fn impulse_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let root = real_sqrt(
        2.0 * (gamma + 1.0) * stagnation_factor(mach, gamma),
        "I/I*",
    )?;
    Ok(checked_div(1.0 + gamma * mach * mach, mach * root, "I/I*")?)
}

/// T/T*
pub fn temperature_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    Ok(checked_div(
        gamma + 1.0,
        2.0 + (gamma - 1.0) * mach * mach,
        "T/T*",
    )?)
}

/// Pt/Pt*, which also equals the isentropic A/A* at the same Mach number.
pub fn stagnation_pressure_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let choke_exp = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    let factor = sonic_factor_pow(mach, gamma, choke_exp, "Pt/Pt*")?;
    Ok(checked_div(factor, mach, "Pt/Pt*")?)
}

/// P/P*
pub fn pressure_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let inner = checked_div(gamma + 1.0, 2.0 + (gamma - 1.0) * mach * mach, "P/P*")?;
    Ok(checked_div(real_sqrt(inner, "P/P*")?, mach, "P/P*")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAMMA: Real = 1.4;

    fn close(a: Real, b: Real, tol: Real) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn sonic_reference_state() {
        assert!(close(friction_parameter(1.0, GAMMA).unwrap(), 0.0, 1e-9));
        assert!(close(impulse_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(temperature_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(stagnation_pressure_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(pressure_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
    }

    #[test]
    fn supersonic_reference_values() {
        assert!(close(friction_parameter(2.0, GAMMA).unwrap(), 0.3050, 5e-5));
        assert!(close(temperature_ratio(2.0, GAMMA).unwrap(), 0.6667, 5e-5));
        assert!(close(pressure_ratio(2.0, GAMMA).unwrap(), 0.4082, 5e-5));
        assert!(close(stagnation_pressure_ratio(2.0, GAMMA).unwrap(), 1.6875, 5e-5));
        assert!(close(impulse_ratio(2.0, GAMMA).unwrap(), 1.1227, 5e-5));
    }

    #[test]
    fn subsonic_reference_values() {
        // M = 0.5
        assert!(close(friction_parameter(0.5, GAMMA).unwrap(), 1.0691, 5e-5));
        assert!(close(temperature_ratio(0.5, GAMMA).unwrap(), 1.1429, 5e-5));
        assert!(close(pressure_ratio(0.5, GAMMA).unwrap(), 2.1381, 5e-5));
        assert!(close(stagnation_pressure_ratio(0.5, GAMMA).unwrap(), 1.3398, 5e-5));
    }

    #[test]
    fn friction_parameter_is_non_negative() {
        for m in [0.1, 0.5, 0.99, 1.01, 2.0, 4.0] {
            assert!(friction_parameter(m, GAMMA).unwrap() >= 0.0);
        }
    }

    #[test]
    fn zero_mach_is_out_of_domain() {
        assert!(friction_parameter(0.0, GAMMA).is_err());
        assert!(pressure_ratio(0.0, GAMMA).is_err());
    }
}
