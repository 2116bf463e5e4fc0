//! Table configuration schema.

use cf_tables::{FlowRegime, SweepParameters, TableResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current schema version written by this crate.
pub const LATEST_VERSION: u32 = 1;

/// A set of tables to generate, grouped into documents by output path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableProject {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableSetDef>,
}

/// One regime swept over one Mach range at one or more γ values.
///
/// ```yaml
/// regime: isentropic
/// mach_start: 0.0
/// mach_stop: 4.0
/// mach_step: 0.01
/// gamma_values: [1.4, 1.33, 1.3]
/// output: compressible_flow_tables.tex
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSetDef {
    pub regime: FlowRegime,
    pub mach_start: f64,
    pub mach_stop: f64,
    #[serde(default = "default_mach_step")]
    pub mach_step: f64,
    #[serde(default = "default_gamma_values")]
    pub gamma_values: Vec<f64>,
    pub output: PathBuf,
}

fn default_mach_step() -> f64 {
    0.01
}

fn default_gamma_values() -> Vec<f64> {
    vec![1.4]
}

impl TableSetDef {
    pub fn new(
        regime: FlowRegime,
        mach_start: f64,
        mach_stop: f64,
        gamma_values: Vec<f64>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            regime,
            mach_start,
            mach_stop,
            mach_step: default_mach_step(),
            gamma_values,
            output: output.into(),
        }
    }

    /// One validated sweep per γ, in configuration order.
    pub fn sweeps(&self) -> TableResult<Vec<SweepParameters>> {
        self.gamma_values
            .iter()
            .map(|&gamma| {
                SweepParameters::new(self.mach_start, self.mach_stop, self.mach_step, gamma)
            })
            .collect()
    }
}

impl Default for TableProject {
    /// The four classic table documents.
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "Compressible flow tables".to_string(),
            tables: vec![
                TableSetDef::new(
                    FlowRegime::Isentropic,
                    0.0,
                    4.0,
                    vec![1.4, 1.33, 1.3],
                    "compressible_flow_tables.tex",
                ),
                TableSetDef::new(
                    FlowRegime::Fanno,
                    0.01,
                    4.0,
                    vec![1.4],
                    "fanno_flow_table.tex",
                ),
                TableSetDef::new(
                    FlowRegime::Rayleigh,
                    0.01,
                    4.0,
                    vec![1.4],
                    "rayleigh_flow_table.tex",
                ),
                TableSetDef::new(
                    FlowRegime::NormalShock,
                    1.0,
                    4.0,
                    vec![1.4],
                    "normal_shock_table.tex",
                ),
            ],
        }
    }
}
