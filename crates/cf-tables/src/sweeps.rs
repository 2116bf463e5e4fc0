//! Mach number grid generation.
//!
//! A sweep is defined by inclusive bounds and a fixed step. Points are computed
//! as `start + i * step`, so long grids do not accumulate rounding drift.

use crate::error::{TableError, TableResult};
use cf_core::Real;
use std::fmt;

/// Fraction of a step tolerated when deciding whether `stop` is on the grid.
const STEP_TOLERANCE: Real = 1e-9;

/// Largest number of grid points a single sweep may hold.
pub const MAX_POINTS: usize = 1_000_000;

/// Immutable definition of one Mach grid at one specific-heat ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepParameters {
    start: Real,
    stop: Real,
    step: Real,
    gamma: Real,
    len: usize,
}

impl SweepParameters {
    /// Validate and build a sweep.
    ///
    /// Requires finite values, `stop >= start`, `step > 0`, `gamma > 1` and at
    /// most [`MAX_POINTS`] grid points.
    pub fn new(start: Real, stop: Real, step: Real, gamma: Real) -> TableResult<Self> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite() && gamma.is_finite()) {
            return Err(TableError::InvalidSweep {
                what: "sweep values must be finite".to_string(),
            });
        }
        if step <= 0.0 {
            return Err(TableError::InvalidSweep {
                what: format!("step must be positive (got {step})"),
            });
        }
        if stop < start {
            return Err(TableError::InvalidSweep {
                what: format!("stop ({stop}) must not be below start ({start})"),
            });
        }
        if gamma <= 1.0 {
            return Err(TableError::InvalidSweep {
                what: format!("specific-heat ratio must be greater than 1 (got {gamma})"),
            });
        }

        let spans = ((stop - start) / step + STEP_TOLERANCE).floor();
        if !spans.is_finite() || spans >= MAX_POINTS as Real {
            return Err(TableError::InvalidSweep {
                what: format!(
                    "grid from {start} to {stop} step {step} exceeds {MAX_POINTS} points"
                ),
            });
        }

        Ok(Self {
            start,
            stop,
            step,
            gamma,
            len: spans as usize + 1,
        })
    }

    pub fn start(&self) -> Real {
        self.start
    }

    pub fn stop(&self) -> Real {
        self.stop
    }

    pub fn step(&self) -> Real {
        self.step
    }

    /// Specific-heat ratio γ evaluated over this grid.
    pub fn gamma(&self) -> Real {
        self.gamma
    }

    /// Number of grid points, `stop` included when within tolerance.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a valid sweep contains at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Fresh iterator over the grid. Call again to restart.
    pub fn grid(&self) -> MachGrid {
        MachGrid {
            start: self.start,
            step: self.step,
            next: 0,
            len: self.len,
        }
    }
}

impl fmt::Display for SweepParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M = {} to {} step {} (gamma = {}, {} points)",
            self.start,
            self.stop,
            self.step,
            self.gamma,
            self.len()
        )
    }
}

/// Lazy iterator over the Mach numbers of a sweep.
#[derive(Debug, Clone)]
pub struct MachGrid {
    start: Real,
    step: Real,
    next: usize,
    len: usize,
}

impl Iterator for MachGrid {
    type Item = Real;

    fn next(&mut self) -> Option<Real> {
        if self.next >= self.len {
            return None;
        }
        let value = self.start + self.next as Real * self.step;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MachGrid {}
