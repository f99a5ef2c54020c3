use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use std::ops::Mul;

use crate::error::{Error, Result};

/// Dense row-major matrix of `f64`.
///
/// Every operation returns a fresh `Matrix`; nothing mutates in place.
/// Equality is exact: shapes must match and every entry must be bit-for-bit
/// equal as an `f64` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix. Both dimensions must be positive.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        check_dimensions(rows, cols)?;
        Ok(Matrix::zeros_unchecked(rows, cols))
    }

    /// Callers guarantee `rows > 0 && cols > 0`.
    pub(crate) fn zeros_unchecked(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from a pre-filled grid. Rejects empty and ragged grids.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::InvalidShape("matrix must have at least one row and one column".into())),
        };

        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::InvalidShape(format!(
                "row {} has {} entries, expected {}", i, row.len(), cols
            )));
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    /// Builds an `n x 1` column vector.
    pub fn from_vector(vector: &[f64]) -> Result<Matrix> {
        if vector.is_empty() {
            return Err(Error::InvalidShape("column vector must not be empty".into()));
        }
        Ok(Matrix {
            rows: vector.len(),
            cols: 1,
            data: vector.iter().map(|&x| vec![x]).collect(),
        })
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both draws are taken from (0, 1] to avoid ln(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// `rows x cols` matrix of independent standard normal draws.
    pub fn random_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
        Ok(Matrix::zeros(rows, cols)?.redraw_normal(rng))
    }

    /// Same shape as `self`, every entry replaced by an independent N(0, 1) draw.
    pub fn redraw_normal<R: Rng + ?Sized>(&self, rng: &mut R) -> Matrix {
        self.map(|_| Matrix::sample_standard_normal(rng))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with_op("add", other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with_op("sub", other, |a, b| a - b)
    }

    /// Standard matrix product; requires `self.cols == other.rows`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut res = Matrix::zeros_unchecked(self.rows, other.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * other.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        self.map(|x| x * scalar)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with_op("hadamard", other, |a, b| a * b)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros_unchecked(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, mut functor: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Combines two same-shape matrices entry by entry.
    pub fn zip_with<F>(&self, other: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.zip_with_op("zip_with", other, functor)
    }

    /// Returns the single column as a flat vector. Requires `cols == 1`.
    pub fn vectorize(&self) -> Result<Vec<f64>> {
        if self.cols != 1 {
            return Err(Error::ShapeMismatch {
                op: "vectorize",
                left: self.shape(),
                right: (self.rows, 1),
            });
        }
        Ok(self.data.iter().map(|row| row[0]).collect())
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    /// Index of the largest entry of a column vector; the first maximum wins on ties.
    pub fn argmax(&self) -> Result<usize> {
        let values = self.vectorize()?;
        let Some(&first) = values.first() else {
            return Err(Error::InvalidShape("argmax of an empty vector".into()));
        };
        let mut best_index = 0;
        let mut best_value = first;
        for (i, &value) in values.iter().enumerate().skip(1) {
            if value > best_value {
                best_value = value;
                best_index = i;
            }
        }
        Ok(best_index)
    }

    fn zip_with_op<F>(&self, op: &'static str, other: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(other.data.iter())
                .map(|(row_a, row_b)| {
                    row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
                })
                .collect(),
        })
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidShape(format!(
            "matrix must have at least one row and one column, got {}x{}", rows, cols
        )));
    }
    Ok(())
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in &self.data {
            writeln!(f, "\t{:?}", row)?;
        }
        write!(f, "]")
    }
}
