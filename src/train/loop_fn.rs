use std::time::Instant;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::network::network::Network;
use crate::network::sample::Sample;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of shuffled mini-batch SGD.
///
/// Each epoch draws a fresh uniform permutation of `data`, splits it into
/// contiguous batches of `config.batch_size` (the last may be shorter) and
/// calls `Network::update_batch` on each in turn.
///
/// The config is validated before any work starts. A shape error in any
/// sample halts training immediately; updates from earlier batches remain.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    data: &[Sample],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    config.validate()?;

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let (total_cost, batches) = run_one_epoch(network, data, config, rng)?;
        let mean_cost = if data.is_empty() { 0.0 } else { total_cost / data.len() as f64 };
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        info!(
            "epoch {}/{}: mean cost {:.6} over {} batches ({} ms)",
            epoch, config.epochs, mean_cost, batches, elapsed_ms
        );

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            batches,
            mean_cost,
            elapsed_ms,
        });
    }

    Ok(history)
}

/// Fraction of samples whose output argmax equals the target argmax.
/// Returns `0.0` for an empty set.
pub fn evaluate_accuracy(network: &Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0;
    for sample in samples {
        let output = network.feed_forward(&sample.input)?;
        if output.argmax()? == sample.target.argmax()? {
            correct += 1;
        }
    }
    Ok(correct as f64 / samples.len() as f64)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One full pass over the data. Returns the summed cost and the batch count.
fn run_one_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    data: &[Sample],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<(f64, usize)> {
    let mut total_cost = 0.0;
    let mut batches = 0;

    for batch in shuffled_batches(data, config.batch_size, rng) {
        total_cost += network.update_batch(batch.as_slice(), config.learning_rate)?;
        batches += 1;
        debug!("batch {}: {} samples", batches, batch.len());
    }

    Ok((total_cost, batches))
}

/// Uniform permutation of `data` split into contiguous batches of `batch_size`;
/// the last batch may be shorter.
fn shuffled_batches<'a, R: Rng + ?Sized>(
    data: &'a [Sample],
    batch_size: usize,
    rng: &mut R,
) -> Vec<Vec<&'a Sample>> {
    // Shuffle references so each input stays paired with its target.
    let mut shuffled: Vec<&Sample> = data.iter().collect();
    shuffled.shuffle(rng);
    shuffled.chunks(batch_size).map(|chunk| chunk.to_vec()).collect()
}
