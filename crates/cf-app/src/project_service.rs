//! Configuration loading, saving, validation and overrides.

use cf_project::{TableProject, TableSetDef};
use cf_tables::FlowRegime;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Summary of a table set for listing.
#[derive(Debug, Clone)]
pub struct TableSetSummary {
    pub regime: FlowRegime,
    pub gamma_values: Vec<f64>,
    pub points_per_table: usize,
    pub output: PathBuf,
}

/// Load a configuration file (YAML, or JSON by extension).
pub fn load_project(path: &Path) -> AppResult<TableProject> {
    if !path.exists() {
        return Err(AppError::ConfigRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        });
    }
    Ok(cf_project::load(path)?)
}

/// Write a configuration file as YAML.
pub fn save_project(path: &Path, project: &TableProject) -> AppResult<()> {
    Ok(cf_project::save_yaml(path, project)?)
}

/// Validate configuration structure and sweep bounds.
pub fn validate_project(project: &TableProject) -> AppResult<()> {
    Ok(cf_project::validate_project(project)?)
}

/// Summaries of every table set, in configuration order.
///
/// Fails on the first set whose sweep is invalid.
pub fn list_table_sets(project: &TableProject) -> AppResult<Vec<TableSetSummary>> {
    project
        .tables
        .iter()
        .map(|t| -> AppResult<TableSetSummary> {
            let sweeps = t.sweeps()?;
            Ok(TableSetSummary {
                regime: t.regime,
                gamma_values: t.gamma_values.clone(),
                points_per_table: sweeps.first().map_or(0, |p| p.len()),
                output: t.output.clone(),
            })
        })
        .collect()
}

/// Command-line overrides applied on top of a loaded or default configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Keep only table sets of this regime.
    pub regime: Option<FlowRegime>,
    pub gamma_values: Option<Vec<f64>>,
    pub mach_start: Option<f64>,
    pub mach_stop: Option<f64>,
    pub mach_step: Option<f64>,
    /// Route every remaining table set into this single document.
    pub output: Option<PathBuf>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.regime.is_none()
            && self.gamma_values.is_none()
            && self.mach_start.is_none()
            && self.mach_stop.is_none()
            && self.mach_step.is_none()
            && self.output.is_none()
    }
}

/// Apply overrides and re-validate.
pub fn apply_overrides(
    mut project: TableProject,
    overrides: &Overrides,
) -> AppResult<TableProject> {
    if let Some(regime) = overrides.regime {
        project.tables.retain(|t| t.regime == regime);
        if project.tables.is_empty() {
            project.tables.push(default_table_set(regime));
        }
    }

    for table in &mut project.tables {
        if let Some(gammas) = &overrides.gamma_values {
            table.gamma_values = gammas.clone();
        }
        if let Some(start) = overrides.mach_start {
            table.mach_start = start;
        }
        if let Some(stop) = overrides.mach_stop {
            table.mach_stop = stop;
        }
        if let Some(step) = overrides.mach_step {
            table.mach_step = step;
        }
        if let Some(output) = &overrides.output {
            table.output = output.clone();
        }
    }

    validate_project(&project)?;
    Ok(project)
}

/// Default table set for a regime, taken from the default configuration.
fn default_table_set(regime: FlowRegime) -> TableSetDef {
    TableProject::default()
        .tables
        .into_iter()
        .find(|t| t.regime == regime)
        .unwrap_or_else(|| {
            TableSetDef::new(regime, 0.01, 4.0, vec![1.4], format!("{regime}_table.tex"))
        })
}
