//! Checked dense vector math.
//!
//! Every binary operation verifies that both operands have the same
//! dimension, and normalization refuses zero-length input instead of
//! producing NaN components.
//!
//! # Examples
//!
//! ```
//! use lamague_core::vector;
//!
//! let v = vector::normalize(&[3.0, 4.0], "example").unwrap();
//! assert!((v[0] - 0.6).abs() < 1e-12);
//! assert!(vector::normalize(&[0.0, 0.0], "example").is_err());
//! ```

use crate::errors::NumericError;

/// Dense vector of `f64` components.
pub type Vector = Vec<f64>;

/// Fail unless `a` and `b` have the same number of components.
pub fn ensure_same_dim(a: &[f64], b: &[f64]) -> Result<(), NumericError> {
    if a.len() != b.len() {
        return Err(NumericError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Fail on an empty vector or any NaN/infinite component.
pub fn ensure_finite(v: &[f64], context: &str) -> Result<(), NumericError> {
    if v.is_empty() {
        return Err(NumericError::EmptyVector);
    }
    if v.iter().any(|x| !x.is_finite()) {
        return Err(NumericError::NonFinite {
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Dot product. Dimensions must match.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, NumericError> {
    ensure_same_dim(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean norm.
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scale `v` to unit length.
pub fn normalize(v: &[f64], context: &str) -> Result<Vector, NumericError> {
    let n = norm(v);
    if n == 0.0 || !n.is_finite() {
        return Err(NumericError::ZeroNorm {
            context: context.to_string(),
        });
    }
    Ok(v.iter().map(|x| x / n).collect())
}

/// `a + b`.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vector, NumericError> {
    ensure_same_dim(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// `a - b`.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vector, NumericError> {
    ensure_same_dim(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// `k * v`.
pub fn scale(v: &[f64], k: f64) -> Vector {
    v.iter().map(|x| x * k).collect()
}

/// `wa * a + wb * b`.
pub fn weighted_sum(a: &[f64], wa: f64, b: &[f64], wb: f64) -> Result<Vector, NumericError> {
    ensure_same_dim(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| wa * x + wb * y).collect())
}

/// Euclidean distance between `a` and `b`.
pub fn distance(a: &[f64], b: &[f64]) -> Result<f64, NumericError> {
    Ok(norm(&sub(a, b)?))
}

/// Component-wise arithmetic mean of equally sized vectors.
pub fn mean<'a, I>(vectors: I) -> Result<Vector, NumericError>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next().ok_or(NumericError::EmptyVector)?;
    let mut acc = first.to_vec();
    let mut count = 1usize;
    for v in iter {
        ensure_same_dim(&acc, v)?;
        for (slot, x) in acc.iter_mut().zip(v) {
            *slot += x;
        }
        count += 1;
    }
    let n = count as f64;
    Ok(acc.into_iter().map(|x| x / n).collect())
}
