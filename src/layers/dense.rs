use rand::Rng;

use crate::{activation::activation::ActivationFunction, error::Result, math::matrix::Matrix};

/// One fully connected layer: `output = activation(weights × input + biases)`.
///
/// `weights` is `[size × input_size]`, `biases` is `[size × 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub(crate) weights: Matrix,
    pub(crate) biases: Matrix,
    pub(crate) activator: ActivationFunction,
}

impl Layer {
    /// Zero-filled layer; call `randomize` before training.
    /// Both `size` and `input_size` must be positive.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Result<Layer> {
        Ok(Layer {
            weights: Matrix::zeros(size, input_size)?,
            biases: Matrix::zeros(size, 1)?,
            activator: activation,
        })
    }

    pub fn size(&self) -> usize {
        self.weights.rows()
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activator
    }

    /// Redraws every weight and bias from N(0, 1).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weights = self.weights.redraw_normal(rng);
        self.biases = self.biases.redraw_normal(rng);
    }

    /// Pre-activation `z = W·input + b`.
    pub fn weighted_input(&self, input: &Matrix) -> Result<Matrix> {
        self.weights.multiply(input)?.add(&self.biases)
    }

    pub fn activate(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.activator.function(x))
    }

    /// Element-wise `σ'(z)`.
    pub fn activation_derivative(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.activator.derivative(x))
    }

    pub fn feed_from(&self, input: &Matrix) -> Result<Matrix> {
        Ok(self.activate(&self.weighted_input(input)?))
    }

    /// Subtracts the given gradients, each scaled by `rate`.
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, rate: f64) -> Result<()> {
        let weights = self.weights.sub(&weights_grad.scale(rate))?;
        let biases = self.biases.sub(&biases_grad.scale(rate))?;
        self.weights = weights;
        self.biases = biases;
        Ok(())
    }
}
