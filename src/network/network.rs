use std::borrow::Borrow;

use log::debug;
use rand::Rng;

use crate::{
    activation::activation::ActivationFunction,
    error::{Error, Result},
    layers::dense::Layer,
    loss::cost_function::CostFunction,
    math::matrix::Matrix,
    network::{gradients::Gradients, sample::Sample},
    optim::sgd::Sgd,
    train::{epoch_stats::EpochStats, loop_fn::train_loop, train_config::TrainConfig},
};

/// A layered feedforward perceptron trained with mini-batch SGD.
///
/// Weights and biases are owned and updated in place by `update_batch` and
/// `train`, which take `&mut self`; the network is a single-writer object.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input_size: usize,
    cost: CostFunction,
    layers: Vec<Layer>,
}

impl Network {
    /// Creates a network with no layers that accepts `[input_size × 1]` inputs.
    pub fn new(input_size: usize, cost: CostFunction) -> Result<Network> {
        if input_size == 0 {
            return Err(Error::InvalidShape("network input size must be positive".into()));
        }
        Ok(Network {
            input_size,
            cost,
            layers: Vec::new(),
        })
    }

    /// Appends a zero-filled layer fed by the previous layer's output.
    pub fn add_layer(&mut self, size: usize, activation: ActivationFunction) -> Result<&mut Self> {
        let previous_size = self.output_size();
        self.layers.push(Layer::new(size, previous_size, activation)?);
        Ok(self)
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Width of the last layer, or the input size when there are no layers.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(self.input_size, Layer::size)
    }

    pub fn cost_function(&self) -> CostFunction {
        self.cost
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Redraws every weight and bias from N(0, 1).
    pub fn randomize_weights_and_biases<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for layer in &mut self.layers {
            layer.randomize(rng);
        }
        debug!("randomized {} layers", self.layers.len());
    }

    /// Forward pass through every layer in order.
    pub fn feed_forward(&self, input: &Matrix) -> Result<Matrix> {
        self.check_input(input)?;
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.feed_from(&current)?;
        }
        Ok(current)
    }

    /// Per-layer gradients of the cost for one `(x, y)` pair.
    pub fn backpropagation(&self, x: &Matrix, y: &Matrix) -> Result<Gradients> {
        self.backward(x, y).map(|(gradients, _)| gradients)
    }

    /// Sums backpropagation gradients over `batch`, then takes one averaged
    /// descent step on every layer. Returns the summed cost of the batch.
    ///
    /// An empty batch leaves the network unchanged.
    pub fn update_batch<S: Borrow<Sample>>(&mut self, batch: &[S], learning_rate: f64) -> Result<f64> {
        if batch.is_empty() {
            return Ok(0.0);
        }

        let mut acc = Gradients::zeros_like(&self.layers);
        let mut cost = 0.0;

        for sample in batch {
            let sample = sample.borrow();
            let (delta, output) = self.backward(&sample.input, &sample.target)?;
            cost += self.cost.total(&output, &sample.target)?;
            acc.accumulate(&delta)?;
        }

        Sgd::new(learning_rate).step_all(&mut self.layers, &acc, batch.len())?;
        Ok(cost)
    }

    /// Runs `epochs` passes of shuffled mini-batch SGD over `data`.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        data: &[Sample],
        epochs: usize,
        batch_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Vec<EpochStats>> {
        let config = TrainConfig::new(epochs, batch_size, learning_rate);
        train_loop(self, data, &config, rng)
    }

    fn check_input(&self, input: &Matrix) -> Result<()> {
        if input.shape() != (self.input_size, 1) {
            return Err(Error::ShapeMismatch {
                op: "feed_forward",
                left: input.shape(),
                right: (self.input_size, 1),
            });
        }
        Ok(())
    }

    /// Backpropagation that also hands back the final activation.
    fn backward(&self, x: &Matrix, y: &Matrix) -> Result<(Gradients, Matrix)> {
        let Some(last) = self.layers.len().checked_sub(1) else {
            return Err(Error::InvalidShape("cannot backpropagate through a network with no layers".into()));
        };
        self.check_input(x)?;

        // activations[i] is the input entering layer i; activations[last + 1] is the output.
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        let mut zs = Vec::with_capacity(self.layers.len());
        activations.push(x.clone());

        for (i, layer) in self.layers.iter().enumerate() {
            let z = layer.weighted_input(&activations[i])?;
            activations.push(layer.activate(&z));
            zs.push(z);
        }

        let output = activations[last + 1].clone();

        // δ_L = ∇C(a_L, y) ⊙ σ'(z_L)
        let mut delta = self.cost
            .gradient(&output, y)?
            .hadamard(&self.layers[last].activation_derivative(&zs[last]))?;

        // Built back to front, reversed at the end.
        let mut nabla_b = Vec::with_capacity(self.layers.len());
        let mut nabla_w = Vec::with_capacity(self.layers.len());
        nabla_w.push(delta.multiply(&activations[last].transpose())?);
        nabla_b.push(delta.clone());

        for l in (0..last).rev() {
            // δ_l = (W_{l+1}ᵀ · δ_{l+1}) ⊙ σ'(z_l)
            delta = self.layers[l + 1].weights()
                .transpose()
                .multiply(&delta)?
                .hadamard(&self.layers[l].activation_derivative(&zs[l]))?;
            nabla_w.push(delta.multiply(&activations[l].transpose())?);
            nabla_b.push(delta.clone());
        }

        nabla_b.reverse();
        nabla_w.reverse();
        Ok((Gradients { nabla_b, nabla_w }, output))
    }
}
