use serde::{Serialize, Deserialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Cost applied at the output layer, shared across the whole network.
///
/// - `Quadratic` — `(actual - target)² / 2` per output, derivative `actual - target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFunction {
    Quadratic,
}

impl CostFunction {
    pub fn function(&self, actual: f64, target: f64) -> f64 {
        match self {
            CostFunction::Quadratic => (actual - target).powi(2) / 2.0,
        }
    }

    pub fn derivative(&self, actual: f64, target: f64) -> f64 {
        match self {
            CostFunction::Quadratic => actual - target,
        }
    }

    /// Scalar cost of one output vector: the sum of the per-entry costs.
    pub fn total(&self, actual: &Matrix, target: &Matrix) -> Result<f64> {
        Ok(actual.zip_with(target, |a, y| self.function(a, y))?.sum())
    }

    /// Per-entry gradient of the cost with respect to `actual`.
    pub fn gradient(&self, actual: &Matrix, target: &Matrix) -> Result<Matrix> {
        actual.zip_with(target, |a, y| self.derivative(a, y))
    }
}

impl FromStr for CostFunction {
    type Err = Error;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "quadratic" => Ok(CostFunction::Quadratic),
            _ => Err(Error::UnknownFunction { kind: "cost", name: name.to_string() }),
        }
    }
}
