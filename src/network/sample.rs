use crate::{error::Result, math::matrix::Matrix};

/// A training pair: `input` is `[input_size × 1]`, `target` is `[output_size × 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Matrix,
    pub target: Matrix,
}

impl Sample {
    pub fn new(input: Matrix, target: Matrix) -> Sample {
        Sample { input, target }
    }

    /// Builds a sample from two flat vectors, each becoming a column matrix.
    pub fn from_slices(input: &[f64], target: &[f64]) -> Result<Sample> {
        Ok(Sample {
            input: Matrix::from_vector(input)?,
            target: Matrix::from_vector(target)?,
        })
    }
}
