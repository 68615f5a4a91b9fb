use thiserror::Error;

use crate::components::ConfigError;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("No real solution: discriminant {discriminant} is negative")]
    NoRealSolution { discriminant: f64 },

    #[error("Degenerate equilibrium: drag coefficient term is {0}")]
    DegenerateEquilibrium(f64),

    #[error("Non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Passes `value` through when finite, otherwise names the offending quantity.
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, SpecError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpecError::NonFinite { quantity, value })
    }
}
