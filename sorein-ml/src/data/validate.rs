//! Numeric data validation.

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// Returns `true` when `data` is non-empty and every element is finite.
pub fn validate_array<S, D>(data: &ArrayBase<S, D>) -> bool
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    !data.is_empty() && data.iter().all(|v| v.is_finite())
}

/// Summary of the non-finite values found in an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericQualityReport {
    pub shape: Vec<usize>,
    pub total_values: usize,
    pub nan_count: usize,
    pub infinite_count: usize,
    pub passed: bool,
}

impl NumericQualityReport {
    pub fn from_array<S, D>(data: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let mut nan_count = 0;
        let mut infinite_count = 0;
        for value in data.iter() {
            if value.is_nan() {
                nan_count += 1;
            } else if value.is_infinite() {
                infinite_count += 1;
            }
        }
        let total_values = data.len();
        Self {
            shape: data.shape().to_vec(),
            total_values,
            nan_count,
            infinite_count,
            passed: total_values > 0 && nan_count == 0 && infinite_count == 0,
        }
    }
}
