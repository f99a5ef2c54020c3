pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{Gradients, Network, Sample};
pub use loss::cost_function::CostFunction;
pub use optim::sgd::Sgd;
pub use train::{evaluate_accuracy, train_loop, EpochStats, TrainConfig};
