//! Flow regimes and their table column schemas.

use crate::error::TableError;
use cf_relations::{RatioFn, fanno, isentropic, normal_shock, rayleigh};
use std::fmt;
use std::str::FromStr;

/// Decimal places used for the Mach number column.
pub const MACH_PRECISION: usize = 2;

/// Decimal places used for every ratio column.
pub const RATIO_PRECISION: usize = 4;

/// Flow model tabulated by one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FlowRegime {
    /// Isentropic ratios to stagnation conditions
    Isentropic,
    /// Adiabatic flow with friction
    Fanno,
    /// Frictionless flow with heat transfer
    Rayleigh,
    /// Normal shock jump conditions
    NormalShock,
}

/// One computed column: header markup, display precision and the ratio function.
#[derive(Clone, Copy)]
pub struct Column {
    /// Short plain-text name (CLI output, logs)
    pub name: &'static str,
    /// LaTeX header cell
    pub header: &'static str,
    /// Decimal places when rendered
    pub precision: usize,
    /// `(mach, gamma) -> ratio`
    pub eval: RatioFn,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("header", &self.header)
            .field("precision", &self.precision)
            .finish()
    }
}

const fn ratio(name: &'static str, header: &'static str, eval: RatioFn) -> Column {
    Column {
        name,
        header,
        precision: RATIO_PRECISION,
        eval,
    }
}

static ISENTROPIC_COLUMNS: [Column; 5] = [
    ratio("T/Tt", "$T/T_t$", isentropic::temperature_ratio),
    ratio("P/Pt", "$P/P_t$", isentropic::pressure_ratio),
    ratio("rho/rhot", r"$\rho/\rho_t$", isentropic::density_ratio),
    ratio("A/A*", "$A/A^*$", isentropic::area_ratio),
    ratio("MFP", r"$MFP\sqrt{R/g_c}$", isentropic::mass_flow_parameter),
];

static FANNO_COLUMNS: [Column; 5] = [
    ratio("4fL*/D", "$4f L^*/D$", fanno::friction_parameter),
    ratio("I/I*", "$I/I^*$", fanno::impulse_ratio),
    ratio("T/T*", "$T/T^*$", fanno::temperature_ratio),
    ratio("Pt/Pt*", "$P_t/P_t^*$", fanno::stagnation_pressure_ratio),
    ratio("P/P*", "$P/P^*$", fanno::pressure_ratio),
];

static RAYLEIGH_COLUMNS: [Column; 5] = [
    ratio("phi", r"$\phi(M^2)$", rayleigh::phi),
    ratio("Tt/Tt*", "$T_t/T_t^*$", rayleigh::stagnation_temperature_ratio),
    ratio("T/T*", "$T/T^*$", rayleigh::temperature_ratio),
    ratio("Pt/Pt*", "$P_t/P_t^*$", rayleigh::stagnation_pressure_ratio),
    ratio("P/P*", "$P/P^*$", rayleigh::pressure_ratio),
];

static NORMAL_SHOCK_COLUMNS: [Column; 5] = [
    ratio("My", "$M_y$", normal_shock::downstream_mach),
    ratio("Pty/Ptx", "$P_{ty}/P_{tx}$", normal_shock::total_pressure_ratio),
    ratio("Py/Px", "$P_y/P_x$", normal_shock::static_pressure_ratio),
    ratio("rhoy/rhox", r"$\rho_y/\rho_x$", normal_shock::density_ratio),
    ratio("Ty/Tx", "$T_y/T_x$", normal_shock::temperature_ratio),
];

impl FlowRegime {
    pub const ALL: [FlowRegime; 4] = [
        FlowRegime::Isentropic,
        FlowRegime::Fanno,
        FlowRegime::Rayleigh,
        FlowRegime::NormalShock,
    ];

    /// Ratio columns in table order (the Mach column is implicit and first).
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Isentropic => &ISENTROPIC_COLUMNS,
            Self::Fanno => &FANNO_COLUMNS,
            Self::Rayleigh => &RAYLEIGH_COLUMNS,
            Self::NormalShock => &NORMAL_SHOCK_COLUMNS,
        }
    }

    /// Header of the leading Mach column.
    pub fn mach_header(self) -> &'static str {
        match self {
            Self::NormalShock => "$M_x$",
            _ => "$M$",
        }
    }

    /// Total column count including the Mach column.
    pub fn column_count(self) -> usize {
        self.columns().len() + 1
    }

    /// Section heading stem, completed with γ by the renderer.
    pub fn title(self) -> &'static str {
        match self {
            Self::Isentropic => "Compressible Flow Table",
            Self::Fanno => "Fanno Flow Table",
            Self::Rayleigh => "Rayleigh Flow Table",
            Self::NormalShock => "Normal Shock Table",
        }
    }

    /// Caption stem, completed with γ by the renderer.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Isentropic => "Compressible flow properties",
            Self::Fanno => "Fanno line flow properties",
            Self::Rayleigh => "Rayleigh line flow properties",
            Self::NormalShock => "Normal shock properties",
        }
    }

    /// Identifier used in configuration files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Isentropic => "isentropic",
            Self::Fanno => "fanno",
            Self::Rayleigh => "rayleigh",
            Self::NormalShock => "normal_shock",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FlowRegime {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "isentropic" => Ok(Self::Isentropic),
            "fanno" => Ok(Self::Fanno),
            "rayleigh" => Ok(Self::Rayleigh),
            "normal_shock" | "shock" => Ok(Self::NormalShock),
            _ => Err(TableError::UnknownRegime {
                name: s.to_string(),
            }),
        }
    }
}
