use thiserror::Error;

pub type CfResult<T> = Result<T, CfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Division by zero in {what}")]
    DivisionByZero { what: &'static str },

    #[error("Negative base {base} raised to fractional power {exponent} in {what}")]
    NegativeBase {
        what: &'static str,
        base: f64,
        exponent: f64,
    },

    #[error("Logarithm of non-positive value {value} in {what}")]
    NonPositiveLog { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
