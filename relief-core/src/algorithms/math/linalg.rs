#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/linalg_test.rs"]
mod linalg_test;

use crate::utils::GenericResult;

/// A pivot magnitude below which a matrix is considered singular.
const SINGULARITY_EPSILON: f64 = 1e-12;

/// A dense row major matrix.
pub type Matrix = Vec<Vec<f64>>;

/// Returns `Aᵗ·A` for matrix `a` with `n` columns.
pub fn gram_matrix(a: &[Vec<f64>]) -> Matrix {
    let columns = a.first().map_or(0, |row| row.len());
    let mut result = vec![vec![0.; columns]; columns];

    for row in a {
        for i in 0..columns {
            for j in 0..columns {
                result[i][j] += row[i] * row[j];
            }
        }
    }

    result
}

/// Returns `Aᵗ·y` for matrix `a` and vector `y` of the same amount of rows.
pub fn transpose_multiply_vector(a: &[Vec<f64>], y: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), y.len());

    let columns = a.first().map_or(0, |row| row.len());

    a.iter().zip(y.iter()).fold(vec![0.; columns], |mut acc, (row, &value)| {
        acc.iter_mut().zip(row.iter()).for_each(|(acc, &x)| *acc += x * value);
        acc
    })
}

/// Returns `A·x` for a square matrix `a` and vector `x`.
pub fn multiply_vector(a: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    a.iter().map(|row| row.iter().zip(x.iter()).map(|(a, x)| a * x).sum()).collect()
}

/// Inverts a square matrix using Gauss-Jordan elimination with partial pivoting.
pub fn invert_matrix(matrix: &[Vec<f64>]) -> GenericResult<Matrix> {
    let size = matrix.len();
    if matrix.iter().any(|row| row.len() != size) {
        return Err(format!("cannot invert non square matrix of {size} rows").into());
    }

    let mut left = matrix.to_vec();
    let mut right = (0..size).map(|i| (0..size).map(|j| if i == j { 1. } else { 0. }).collect()).collect::<Matrix>();

    for column in 0..size {
        let pivot_row = (column..size)
            .max_by(|&a, &b| left[a][column].abs().total_cmp(&left[b][column].abs()))
            .unwrap_or(column);

        if left[pivot_row][column].abs() < SINGULARITY_EPSILON {
            return Err(format!("cannot invert singular matrix, zero pivot at column {column}").into());
        }

        left.swap(column, pivot_row);
        right.swap(column, pivot_row);

        let pivot = left[column][column];
        left[column].iter_mut().for_each(|value| *value /= pivot);
        right[column].iter_mut().for_each(|value| *value /= pivot);

        let (pivot_left, pivot_right) = (left[column].clone(), right[column].clone());

        for row in (0..size).filter(|&row| row != column) {
            let factor = left[row][column];
            if factor == 0. {
                continue;
            }

            left[row].iter_mut().zip(pivot_left.iter()).for_each(|(value, pivot)| *value -= factor * pivot);
            right[row].iter_mut().zip(pivot_right.iter()).for_each(|(value, pivot)| *value -= factor * pivot);
        }
    }

    Ok(right)
}

/// Solves ordinary least squares using the normal equation `w = (XᵗX)⁻¹ Xᵗ y`.
pub fn solve_normal_equation(design: &[Vec<f64>], targets: &[f64]) -> GenericResult<Vec<f64>> {
    if design.is_empty() {
        return Err("cannot fit a model without samples".into());
    }

    if design.len() != targets.len() {
        return Err(format!("design matrix has {} rows, but there are {} targets", design.len(), targets.len()).into());
    }

    let gram_inverse = invert_matrix(&gram_matrix(design))?;
    let moments = transpose_multiply_vector(design, targets);

    Ok(multiply_vector(&gram_inverse, &moments))
}
