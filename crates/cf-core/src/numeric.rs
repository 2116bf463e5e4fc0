use crate::{CfError, CfResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CfError::NonFinite { what, value: v })
    }
}

/// Real-valued division. A zero denominator is an error, never `inf`.
pub fn checked_div(num: Real, den: Real, what: &'static str) -> CfResult<Real> {
    if den == 0.0 {
        return Err(CfError::DivisionByZero { what });
    }
    ensure_finite(num / den, what)
}

/// Real-valued power.
///
/// A negative base is only accepted with an integral exponent; `powf` would
/// otherwise hand back NaN.
pub fn real_pow(base: Real, exponent: Real, what: &'static str) -> CfResult<Real> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(CfError::NegativeBase {
            what,
            base,
            exponent,
        });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(CfError::DivisionByZero { what });
    }
    ensure_finite(base.powf(exponent), what)
}

pub fn real_sqrt(v: Real, what: &'static str) -> CfResult<Real> {
    if v < 0.0 {
        return Err(CfError::NegativeBase {
            what,
            base: v,
            exponent: 0.5,
        });
    }
    ensure_finite(v.sqrt(), what)
}

pub fn real_ln(v: Real, what: &'static str) -> CfResult<Real> {
    if v <= 0.0 {
        return Err(CfError::NonPositiveLog { what, value: v });
    }
    ensure_finite(v.ln(), what)
}
