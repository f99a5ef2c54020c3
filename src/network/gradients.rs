use crate::{error::{Error, Result}, layers::dense::Layer, math::matrix::Matrix};

/// Per-layer gradients of the cost. Index `i` has the shapes of layer `i`'s
/// biases (`nabla_b`) and weights (`nabla_w`).
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub nabla_b: Vec<Matrix>,
    pub nabla_w: Vec<Matrix>,
}

impl Gradients {
    /// Zero gradients shaped like every layer's parameters.
    pub fn zeros_like(layers: &[Layer]) -> Gradients {
        Gradients {
            nabla_b: layers.iter()
                .map(|layer| Matrix::zeros_unchecked(layer.biases().rows(), layer.biases().cols()))
                .collect(),
            nabla_w: layers.iter()
                .map(|layer| Matrix::zeros_unchecked(layer.weights().rows(), layer.weights().cols()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nabla_w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nabla_w.is_empty()
    }

    /// Adds `other` into `self`, layer by layer.
    pub fn accumulate(&mut self, other: &Gradients) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::InvalidShape(format!(
                "cannot accumulate gradients for {} layers into {} layers",
                other.len(), self.len()
            )));
        }
        for (acc, delta) in self.nabla_b.iter_mut().zip(&other.nabla_b) {
            *acc = acc.add(delta)?;
        }
        for (acc, delta) in self.nabla_w.iter_mut().zip(&other.nabla_w) {
            *acc = acc.add(delta)?;
        }
        Ok(())
    }

    /// `(nabla_w, nabla_b)` pairs in layer order.
    pub fn iter(&self) -> impl Iterator<Item = (&Matrix, &Matrix)> {
        self.nabla_w.iter().zip(self.nabla_b.iter())
    }
}
