use perceptron_nn::{ActivationFunction, CostFunction, Matrix, Network, Sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> perceptron_nn::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let mut network = Network::new(2, CostFunction::Quadratic)?;
    network
        .add_layer(30, ActivationFunction::Sigmoid)?
        .add_layer(2, ActivationFunction::Sigmoid)?;
    network.randomize_weights_and_biases(&mut rng);

    // Label is [0, 1] when x1 + x2 > 2, otherwise [1, 0].
    let data = (0..10_000)
        .map(|_| {
            let x = [rng.gen::<f64>() * 2.0, rng.gen::<f64>() * 2.0];
            let y = if x[0] + x[1] > 2.0 { [0.0, 1.0] } else { [1.0, 0.0] };
            Sample::from_slices(&x, &y)
        })
        .collect::<perceptron_nn::Result<Vec<_>>>()?;

    let history = network.train(&data, 30, 10, 0.1, &mut rng)?;
    for stats in history.iter().step_by(5) {
        println!("Epoch {}: mean cost = {:.6}", stats.epoch, stats.mean_cost);
    }

    for point in [[0.2, 0.3], [1.5, 1.8], [0.9, 1.0], [1.2, 0.9]] {
        let output = network.feed_forward(&Matrix::from_vector(&point)?)?;
        println!("Input: {:?} -> class {} {}", point, output.argmax()?, output);
    }
    Ok(())
}
