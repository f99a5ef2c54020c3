use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `batch_size`    — samples per mini-batch; may exceed the dataset size,
///                     in which case each epoch is a single batch
/// - `learning_rate` — step size of the averaged gradient update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate,
        }
    }

    /// Parses and validates a config from JSON such as
    /// `{"epochs": 30, "batch_size": 10, "learning_rate": 0.1}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file previously written as JSON.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig("epochs must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig("batch_size must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
