//! Sweep execution: evaluate a regime's column schema over a Mach grid.
//!
//! A row is only kept when every column evaluated; the first failing column
//! discards the whole row and the point is recorded as skipped.

use crate::regime::FlowRegime;
use crate::sweeps::SweepParameters;
use cf_core::Real;
use cf_relations::{RelationError, RelationResult};
use tracing::{debug, info};

/// One fully evaluated table row.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRow {
    /// Mach number (upstream Mach for normal shocks)
    pub mach: Real,
    /// One value per column of the regime schema, in schema order
    pub values: Vec<Real>,
}

/// Grid point whose row was discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPoint {
    pub mach: Real,
    /// Schema column that failed first
    pub column: &'static str,
    pub error: RelationError,
}

/// Result of sweeping one regime at one γ.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub regime: FlowRegime,
    pub parameters: SweepParameters,
    /// Rows in grid order
    pub rows: Vec<FlowRow>,
    /// Points dropped because a relation was undefined
    pub skipped: Vec<SkippedPoint>,
}

impl SweepResult {
    pub fn gamma(&self) -> Real {
        self.parameters.gamma()
    }

    /// Number of grid points visited (emitted plus skipped).
    pub fn num_points(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }

    /// Mach numbers of emitted rows.
    pub fn mach_values(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.mach).collect()
    }

    /// Values of one schema column across emitted rows.
    pub fn column_values(&self, index: usize) -> Vec<Real> {
        self.rows
            .iter()
            .filter_map(|r| r.values.get(index).copied())
            .collect()
    }
}

/// Evaluate every column of `regime` at one point.
///
/// On failure the error carries the name of the column that failed.
pub fn evaluate_row(
    regime: FlowRegime,
    mach: Real,
    gamma: Real,
) -> Result<FlowRow, (&'static str, RelationError)> {
    let values = regime
        .columns()
        .iter()
        .map(|col| (col.eval)(mach, gamma).map_err(|e| (col.name, e)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FlowRow { mach, values })
}

/// Evaluate one relation of a regime by column name.
pub fn evaluate_column(
    regime: FlowRegime,
    column: &str,
    mach: Real,
    gamma: Real,
) -> Option<RelationResult<Real>> {
    regime
        .columns()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(column))
        .map(|c| (c.eval)(mach, gamma))
}

/// Sweep `regime` across the grid of `parameters`.
pub fn execute_sweep(regime: FlowRegime, parameters: &SweepParameters) -> SweepResult {
    let gamma = parameters.gamma();
    let mut rows = Vec::with_capacity(parameters.len().min(4096));
    let mut skipped = Vec::new();

    for mach in parameters.grid() {
        match evaluate_row(regime, mach, gamma) {
            Ok(row) => rows.push(row),
            Err((column, error)) => {
                debug!(%regime, mach, column, %error, "skipping undefined row");
                skipped.push(SkippedPoint {
                    mach,
                    column,
                    error,
                });
            }
        }
    }

    info!(
        %regime,
        gamma,
        rows = rows.len(),
        skipped = skipped.len(),
        "sweep complete"
    );

    SweepResult {
        regime,
        parameters: *parameters,
        rows,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isentropic_drops_zero_mach_row_only() {
        let params = SweepParameters::new(0.0, 4.0, 0.01, 1.4).unwrap();
        let result = execute_sweep(FlowRegime::Isentropic, &params);

        assert_eq!(result.num_points(), 401);
        assert_eq!(result.rows.len(), 400);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].mach, 0.0);
        assert!(matches!(
            result.skipped[0].error,
            RelationError::Mach { .. }
        ));
    }

    #[test]
    fn rows_carry_one_value_per_column() {
        let params = SweepParameters::new(1.0, 2.0, 0.5, 1.4).unwrap();
        let result = execute_sweep(FlowRegime::NormalShock, &params);
        assert_eq!(result.rows.len(), 3);
        for row in &result.rows {
            assert_eq!(row.values.len(), FlowRegime::NormalShock.columns().len());
        }
    }

    #[test]
    fn failed_row_is_never_partially_kept() {
        // Below the critical upstream Mach the shock relations are undefined
        let params = SweepParameters::new(0.1, 0.3, 0.1, 1.4).unwrap();
        let result = execute_sweep(FlowRegime::NormalShock, &params);
        assert!(result.rows.is_empty());
        assert_eq!(result.skipped.len(), 3);
        assert!(result.skipped.iter().all(|s| s.column == "My"));
    }

    #[test]
    fn evaluate_column_by_name() {
        let v = evaluate_column(FlowRegime::NormalShock, "py/px", 2.0, 1.4)
            .unwrap()
            .unwrap();
        assert!((v - 4.5).abs() < 1e-12);
        assert!(evaluate_column(FlowRegime::Fanno, "nope", 2.0, 1.4).is_none());
    }

    #[test]
    fn column_values_follow_schema_order() {
        let params = SweepParameters::new(2.0, 2.0, 0.1, 1.4).unwrap();
        let result = execute_sweep(FlowRegime::NormalShock, &params);
        let py_px = result.column_values(2);
        assert_eq!(py_px.len(), 1);
        assert!((py_px[0] - 4.5).abs() < 1e-12);
        assert_eq!(result.mach_values(), vec![2.0]);
    }
}
