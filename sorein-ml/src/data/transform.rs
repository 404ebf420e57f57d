//! Numeric transforms applied by the data pipeline.

use crate::error::MlError;
use ndarray::{Array2, ArrayView2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Z-score normalize using the global mean and population standard deviation.
///
/// Computes `(x - mean) / (std + epsilon)` over all elements, so constant input
/// maps to zeros instead of dividing by zero.
pub fn zscore(data: ArrayView2<'_, f64>, epsilon: f64) -> Result<Array2<f64>, MlError> {
    let mean = data
        .mean()
        .ok_or_else(|| MlError::invalid_input("cannot normalize an empty array"))?;
    let std = data.std(0.0);
    if std == 0.0 {
        tracing::warn!(
            rows = data.nrows(),
            cols = data.ncols(),
            "Normalizing zero-variance data"
        );
    }
    let denom = std + epsilon;
    Ok(data.mapv(|x| (x - mean) / denom))
}

/// Add independent `N(0, std_dev)` noise to every element.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    data: ArrayView2<'_, f64>,
    std_dev: f64,
    rng: &mut R,
) -> Result<Array2<f64>, MlError> {
    if data.is_empty() {
        return Err(MlError::invalid_input("cannot augment an empty array"));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(MlError::config(format!(
            "noise standard deviation must be finite and non-negative, got {std_dev}"
        )));
    }
    let normal = Normal::new(0.0, std_dev).map_err(|e| {
        MlError::config(format!("invalid noise standard deviation {std_dev}: {e}"))
    })?;
    Ok(data.mapv(|x| x + normal.sample(&mut *rng)))
}
