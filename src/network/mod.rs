pub mod gradients;
pub mod network;
pub mod sample;

pub use gradients::Gradients;
pub use network::Network;
pub use sample::Sample;
