use perceptron_nn::{
    evaluate_accuracy, ActivationFunction, CostFunction, Matrix, Network, Sample,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn classifier(input_size: usize, rng: &mut StdRng) -> Network {
    let mut network = Network::new(input_size, CostFunction::Quadratic).unwrap();
    network
        .add_layer(30, ActivationFunction::Sigmoid).unwrap()
        .add_layer(2, ActivationFunction::Sigmoid).unwrap();
    network.randomize_weights_and_biases(rng);
    network
}

fn samples<F>(n: usize, input_size: usize, rng: &mut StdRng, above: F) -> Vec<Sample>
where
    F: Fn(&[f64]) -> bool,
{
    (0..n)
        .map(|_| {
            let x: Vec<f64> = (0..input_size).map(|_| rng.gen::<f64>() * 2.0).collect();
            let y = if above(&x) { [0.0, 1.0] } else { [1.0, 0.0] };
            Sample::from_slices(&x, &y).unwrap()
        })
        .collect()
}

#[test]
fn learns_one_dimensional_threshold() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = classifier(1, &mut rng);
    let train = samples(10_000, 1, &mut rng, |x| x[0] > 1.0);
    let test = samples(1_000, 1, &mut rng, |x| x[0] > 1.0);

    let history = network.train(&train, 30, 10, 0.1, &mut rng).unwrap();
    assert_eq!(history.len(), 30);
    assert_eq!(history[0].batches, 1_000);

    let accuracy = evaluate_accuracy(&network, &test).unwrap();
    assert!(accuracy >= 0.9, "accuracy was {}", accuracy);
}

#[test]
fn learns_sum_threshold() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = classifier(2, &mut rng);
    let train = samples(10_000, 2, &mut rng, |x| x[0] + x[1] > 2.0);
    let test = samples(1_000, 2, &mut rng, |x| x[0] + x[1] > 2.0);

    network.train(&train, 30, 10, 0.1, &mut rng).unwrap();

    let accuracy = evaluate_accuracy(&network, &test).unwrap();
    assert!(accuracy >= 0.9, "accuracy was {}", accuracy);
}

#[test]
fn batch_of_one_matches_scaled_gradient() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut network = classifier(2, &mut rng);
    let sample = Sample::from_slices(&[0.4, 1.7], &[0.0, 1.0]).unwrap();
    let learning_rate = 0.3;

    let before = network.clone();
    let grads = before.backpropagation(&sample.input, &sample.target).unwrap();

    network.update_batch(&[sample], learning_rate).unwrap();

    for (i, (old, new)) in before.layers().iter().zip(network.layers()).enumerate() {
        let want_w = old.weights().sub(&grads.nabla_w[i].scale(learning_rate / 1.0)).unwrap();
        let want_b = old.biases().sub(&grads.nabla_b[i].scale(learning_rate / 1.0)).unwrap();
        assert_eq!(new.weights(), &want_w);
        assert_eq!(new.biases(), &want_b);
    }
}

#[test]
fn feed_forward_is_pure() {
    let mut rng = StdRng::seed_from_u64(5);
    let network = classifier(1, &mut rng);
    let input = Matrix::from_vector(&[0.75]).unwrap();
    let first = network.feed_forward(&input).unwrap();
    let second = network.feed_forward(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.shape(), (2, 1));
}

#[test]
fn randomization_depends_on_seed() {
    let a = classifier(3, &mut StdRng::seed_from_u64(1));
    let b = classifier(3, &mut StdRng::seed_from_u64(1));
    let c = classifier(3, &mut StdRng::seed_from_u64(2));
    assert_eq!(a, b);
    assert_ne!(a, c);
}
