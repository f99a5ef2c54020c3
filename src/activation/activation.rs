use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::str::FromStr;

use crate::error::Error;

/// Element-wise nonlinearity applied after a layer's affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
    Identity,
    Tanh,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => x.max(0.0),
            ActivationFunction::Identity => x,
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Element-wise derivative of the activation.
    ///
    /// ReLU only branches on `x < 0`, so its derivative at exactly zero is `1`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "relu" => Ok(ActivationFunction::ReLU),
            "identity" => Ok(ActivationFunction::Identity),
            "tanh" => Ok(ActivationFunction::Tanh),
            _ => Err(Error::UnknownFunction { kind: "activation", name: name.to_string() }),
        }
    }
}
