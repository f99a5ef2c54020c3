// The library lives in src/lib.rs; this binary trains the 1-D threshold task.
// Usage:
//   cargo run -- [config.json]
// where config.json looks like {"epochs": 30, "batch_size": 10, "learning_rate": 0.1}.
use perceptron_nn::{
    evaluate_accuracy, train_loop, ActivationFunction, CostFunction, Network, Result, Sample, TrainConfig,
};
use rand::Rng;

fn threshold_samples<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<Sample>> {
    (0..n)
        .map(|_| {
            let x = rng.gen::<f64>() * 2.0;
            let y = if x > 1.0 { [0.0, 1.0] } else { [1.0, 0.0] };
            Sample::from_slices(&[x], &y)
        })
        .collect()
}

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::new(30, 10, 0.1),
    };

    let mut rng = rand::thread_rng();
    let mut network = Network::new(1, CostFunction::Quadratic)?;
    network
        .add_layer(30, ActivationFunction::Sigmoid)?
        .add_layer(2, ActivationFunction::Sigmoid)?;
    network.randomize_weights_and_biases(&mut rng);

    let train = threshold_samples(10_000, &mut rng)?;
    let test = threshold_samples(1_000, &mut rng)?;

    let history = train_loop(&mut network, &train, &config, &mut rng)?;
    for stats in &history {
        println!("Epoch {}: mean cost = {:.6}", stats.epoch, stats.mean_cost);
    }
    println!("Test accuracy: {:.1}%", evaluate_accuracy(&network, &test)? * 100.0);
    Ok(())
}
