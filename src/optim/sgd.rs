use crate::{error::Result, layers::dense::Layer, math::matrix::Matrix, network::gradients::Gradients};

/// Average-gradient steepest descent.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to a layer from gradients summed over `batch_len` samples:
    /// `param -= grad * (learning_rate / batch_len)`.
    pub fn step(&self, layer: &mut Layer, weights_grad: &Matrix, biases_grad: &Matrix, batch_len: usize) -> Result<()> {
        layer.apply_gradients(weights_grad, biases_grad, self.learning_rate / batch_len as f64)
    }

    /// Applies `step` to every layer, pairing layers with gradients by index.
    pub fn step_all(&self, layers: &mut [Layer], gradients: &Gradients, batch_len: usize) -> Result<()> {
        for (layer, (nabla_w, nabla_b)) in layers.iter_mut().zip(gradients.iter()) {
            self.step(layer, nabla_w, nabla_b, batch_len)?;
        }
        Ok(())
    }
}
