use serde::{Serialize, Deserialize};

/// Per-epoch training statistics returned by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Number of `update_batch` calls made in this epoch.
    pub batches: usize,
    /// Mean per-sample cost, measured during the forward passes of this epoch
    /// (before each batch's update is applied).
    pub mean_cost: f64,
    pub elapsed_ms: u64,
}
