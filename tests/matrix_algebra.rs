use approx::assert_relative_eq;
use perceptron_nn::{Error, Matrix};

fn fib() -> Matrix {
    Matrix::from_data(vec![vec![1.0, 1.0], vec![1.0, 0.0]]).unwrap()
}

fn grid(data: &[&[f64]]) -> Matrix {
    Matrix::from_data(data.iter().map(|row| row.to_vec()).collect()).unwrap()
}

#[test]
fn fibonacci_matrix() {
    let vec = Matrix::from_vector(&[1.0, 0.0]).unwrap();
    assert_eq!(fib().multiply(&vec).unwrap(), Matrix::from_vector(&[1.0, 1.0]).unwrap());
    assert_eq!(fib().add(&fib()).unwrap(), grid(&[&[2.0, 2.0], &[2.0, 0.0]]));
    assert_eq!(fib().hadamard(&fib()).unwrap(), fib());
    assert_eq!(fib().sub(&fib()).unwrap(), Matrix::zeros(2, 2).unwrap());
    assert_eq!(fib().multiply(&fib()).unwrap(), grid(&[&[2.0, 1.0], &[1.0, 1.0]]));
    assert_eq!(fib().scale(3.0), grid(&[&[3.0, 3.0], &[3.0, 0.0]]));
}

#[test]
fn add_then_sub_restores_operand() {
    let a = grid(&[&[1.0, -2.0, 3.0], &[4.0, 5.0, -6.0]]);
    let b = grid(&[&[7.0, 8.0, 9.0], &[-1.0, 0.0, 2.0]]);
    assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);

    let c = grid(&[&[0.1, 0.7], &[1.3, -0.2]]);
    let d = grid(&[&[0.35, -2.1], &[9.8, 0.05]]);
    let back = c.add(&d).unwrap().sub(&d).unwrap();
    for (row_a, row_b) in back.data().iter().zip(c.data()) {
        for (x, y) in row_a.iter().zip(row_b) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}

#[test]
fn multiply_is_associative() {
    let a = grid(&[&[0.5, -1.0, 2.0], &[1.5, 0.25, -0.75]]);
    let b = grid(&[&[1.0, 2.0], &[-0.5, 0.3], &[0.2, -1.1]]);
    let c = grid(&[&[0.9, -0.4, 1.2], &[0.1, 0.6, -0.8]]);
    let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
    let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
    assert_eq!(left.shape(), (2, 3));
    for (row_l, row_r) in left.data().iter().zip(right.data()) {
        for (x, y) in row_l.iter().zip(row_r) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}

#[test]
fn double_transpose_is_identity() {
    let a = grid(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(a.transpose().transpose(), a);
    assert_eq!(a.transpose().shape(), (3, 2));
}

#[test]
fn mismatched_shapes_are_rejected() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(2, 4).unwrap();
    let err = a.add(&b).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { op: "add", left: (2, 3), right: (2, 4) }));
    assert_eq!(err.to_string(), "shape mismatch in `add`: left is (2, 3), right is (2, 4)");
}

#[test]
fn apply_function_variants() {
    let a = grid(&[&[1.0, 4.0], &[9.0, 16.0]]);
    assert_eq!(a.map(f64::sqrt), grid(&[&[1.0, 2.0], &[3.0, 4.0]]));
    let b = grid(&[&[1.0, 1.0], &[2.0, 2.0]]);
    assert_eq!(a.zip_with(&b, f64::max).unwrap(), a);
    assert_eq!(a.zip_with(&b, |x, y| x - y).unwrap(), a.sub(&b).unwrap());
}
