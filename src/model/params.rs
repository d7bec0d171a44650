// src/model/params.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by parameter validation before any simulation work starts.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} must be strictly positive, got {1}")]
    NonPositivePrice(&'static str, f64),
    #[error("{0} must be a finite number")]
    NonFiniteParameter(&'static str),
    #[error("sensitivity must be non-negative, got {0}")]
    NegativeSensitivity(f64),
}

/// The parameter bundle for one simulation run.
///
/// This is the exact shape an external serving layer deserializes from a
/// request body, so the field names double as wire names. A missing field is
/// a deserialization error at that boundary; the unsigned integer types make
/// negative inventory or base demand unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Starting (list) price. Also the competitor anchor on day 1.
    pub initial_price: f64,
    /// Unit cost. Expected below initial_price but not enforced.
    pub cost_price: f64,
    /// Stock available for the whole run.
    pub total_inventory: u32,
    /// Configured baseline demand (units/day before adjustments).
    pub base_demand: u32,
    /// Demand lost per unit of price (linear elasticity slope).
    pub sensitivity: f64,
}

impl SimulationParams {
    /// Rejects malformed parameters. cost_price >= initial_price is a
    /// questionable configuration but a valid one, so it passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("initial_price", self.initial_price),
            ("cost_price", self.cost_price),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteParameter(name));
            }
            if value <= 0.0 {
                return Err(ValidationError::NonPositivePrice(name, value));
            }
        }
        if !self.sensitivity.is_finite() {
            return Err(ValidationError::NonFiniteParameter("sensitivity"));
        }
        if self.sensitivity < 0.0 {
            return Err(ValidationError::NegativeSensitivity(self.sensitivity));
        }
        Ok(())
    }
}
