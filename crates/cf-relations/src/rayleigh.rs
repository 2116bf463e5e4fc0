//! Rayleigh line: frictionless flow with heat transfer in a constant-area duct.

use crate::common::{check_inputs, sonic_factor_pow, stagnation_factor};
use crate::error::RelationResult;
use cf_core::{Real, checked_div};

/// φ(M²) = M²(1 + (γ-1)/2 · M²) / (1 + γM²)²
///
/// Heat-addition function; the stagnation-temperature ratio is φ(M²)/φ(1).
pub fn phi(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let m2 = mach * mach;
    let denom = (1.0 + gamma * m2).powi(2);
    Ok(checked_div(m2 * stagnation_factor(mach, gamma), denom, "phi(M^2)")?)
}

/// Tt/Tt*
pub fn stagnation_temperature_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    // φ(1) = 1 / (2(γ+1))
    Ok(2.0 * (gamma + 1.0) * phi(mach, gamma)?)
}

/// T/T*
pub fn temperature_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    let m2 = mach * mach;
    Ok(checked_div(
        (gamma + 1.0).powi(2) * m2,
        (1.0 + gamma * m2).powi(2),
        "T/T*",
    )?)
}

/// Pt/Pt*
pub fn stagnation_pressure_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    let static_ratio = pressure_ratio(mach, gamma)?;
    let stagnation = sonic_factor_pow(mach, gamma, gamma / (gamma - 1.0), "Pt/Pt*")?;
    Ok(static_ratio * stagnation)
}

/// P/P*
pub fn pressure_ratio(mach: Real, gamma: Real) -> RelationResult<Real> {
    check_inputs(mach, gamma)?;
    Ok(checked_div(gamma + 1.0, 1.0 + gamma * mach * mach, "P/P*")?)
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
        assert!(close(stagnation_temperature_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(temperature_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(stagnation_pressure_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(pressure_ratio(1.0, GAMMA).unwrap(), 1.0, 1e-9));
        assert!(close(phi(1.0, GAMMA).unwrap(), 1.0 / 4.8, 1e-12));
    }

    #[test]
    fn reference_values() {
        assert!(close(stagnation_temperature_ratio(2.0, GAMMA).unwrap(), 0.7934, 5e-5));
        assert!(close(temperature_ratio(2.0, GAMMA).unwrap(), 0.5289, 5e-5));
        assert!(close(stagnation_pressure_ratio(2.0, GAMMA).unwrap(), 1.5031, 5e-5));
        assert!(close(pressure_ratio(2.0, GAMMA).unwrap(), 0.3636, 5e-5));

        assert!(close(stagnation_temperature_ratio(0.5, GAMMA).unwrap(), 0.6914, 5e-5));
        assert!(close(temperature_ratio(0.5, GAMMA).unwrap(), 0.7901, 5e-5));
        assert!(close(stagnation_pressure_ratio(0.5, GAMMA).unwrap(), 1.1141, 5e-5));
        assert!(close(pressure_ratio(0.5, GAMMA).unwrap(), 1.7778, 5e-5));
    }

    #[test]
    fn stagnation_temperature_peaks_at_sonic() {
        for m in [0.2, 0.8, 1.2, 3.0] {
            assert!(stagnation_temperature_ratio(m, GAMMA).unwrap() < 1.0);
        }
    }

    #[test]
    fn zero_mach_is_out_of_domain() {
        assert!(phi(0.0, GAMMA).is_err());
        assert!(pressure_ratio(0.0, GAMMA).is_err());
    }
}
