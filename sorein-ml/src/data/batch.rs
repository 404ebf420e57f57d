//! Row-wise batching.

use crate::error::MlError;
use ndarray::{ArrayView2, s};

/// Number of batches needed to cover `n_rows` rows; zero when `batch_size` is zero,
/// since no batch can be formed.
pub fn batch_count(n_rows: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    n_rows.div_ceil(batch_size)
}

/// Split `data` along the sample axis into consecutive slices of at most
/// `batch_size` rows. The last slice holds the remainder.
pub fn split_rows(
    data: ArrayView2<'_, f64>,
    batch_size: usize,
) -> Result<Vec<ArrayView2<'_, f64>>, MlError> {
    if batch_size == 0 {
        return Err(MlError::invalid_input("batch_size must be greater than zero"));
    }
    let n_rows = data.nrows();
    let mut batches = Vec::with_capacity(batch_count(n_rows, batch_size));
    for start in (0..n_rows).step_by(batch_size) {
        let end = (start + batch_size).min(n_rows);
        batches.push(data.slice_move(s![start..end, ..]));
    }
    Ok(batches)
}
