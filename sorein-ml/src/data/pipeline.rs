//! The data pipeline: normalization, augmentation and batching of 2-D numeric arrays.
//!
//! [`DataPipeline`] is the capability set a training loop depends on. Callers pick an
//! implementation when they construct it; [`StandardPipeline`] is the production one,
//! and test harnesses can supply their own implementation of the trait.
//!
//! Every data-bearing operation checks, in order, that the pipeline has been
//! initialized and that the input is non-empty.

use crate::config::PipelineConfig;
use crate::data::batch::split_rows;
use crate::data::transform::{add_gaussian_noise, zscore};
use crate::data::validate::validate_array;
use crate::error::MlError;
use ndarray::{Array2, ArrayView2};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Preprocess / augment / batch contract over `(n_samples, n_features)` arrays.
pub trait DataPipeline {
    /// Mark the pipeline ready for use. Calling it again is a no-op.
    fn initialize(&mut self) -> Result<(), MlError>;

    fn is_initialized(&self) -> bool;

    fn config(&self) -> &PipelineConfig;

    /// Normalize `raw_data` (when enabled) and return a new array of the same shape.
    fn preprocess(&mut self, raw_data: ArrayView2<'_, f64>) -> Result<Array2<f64>, MlError>;

    /// Perturb `data` with noise (when enabled) and return a new array of the same shape.
    fn augment(&mut self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>, MlError>;

    /// [`batch_process_with`](Self::batch_process_with) using the configured batch size.
    fn batch_process(
        &mut self,
        raw_data: ArrayView2<'_, f64>,
    ) -> Result<Vec<Array2<f64>>, MlError> {
        let batch_size = self.config().batch_size;
        self.batch_process_with(raw_data, batch_size)
    }

    /// Split `raw_data` into row batches of at most `batch_size` rows and run
    /// `preprocess` then `augment` on each, keeping input order.
    fn batch_process_with(
        &mut self,
        raw_data: ArrayView2<'_, f64>,
        batch_size: usize,
    ) -> Result<Vec<Array2<f64>>, MlError> {
        ensure_ready(self.is_initialized(), raw_data)?;
        let batches = split_rows(raw_data, batch_size)?;
        tracing::debug!(
            rows = raw_data.nrows(),
            batch_size,
            batches = batches.len(),
            "Processing batches"
        );
        batches
            .into_iter()
            .map(|batch| {
                let processed = self.preprocess(batch)?;
                self.augment(processed.view())
            })
            .collect()
    }

    /// `false` for empty data or data containing NaN or infinite values.
    fn validate_data(&self, data: ArrayView2<'_, f64>) -> bool {
        validate_array(&data)
    }
}

/// Shared precondition check for data-bearing operations.
pub fn ensure_ready(initialized: bool, data: ArrayView2<'_, f64>) -> Result<(), MlError> {
    if !initialized {
        return Err(MlError::NotInitialized);
    }
    if data.is_empty() {
        return Err(MlError::invalid_input(format!(
            "expected non-empty data, got shape {:?}",
            data.shape()
        )));
    }
    Ok(())
}

/// Z-score normalization followed by additive Gaussian noise.
#[derive(Debug)]
pub struct StandardPipeline {
    config: PipelineConfig,
    is_initialized: bool,
    processed_data: Option<Array2<f64>>,
    rng: StdRng,
}

impl StandardPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            is_initialized: false,
            processed_data: None,
            rng,
        }
    }

    /// Output of the most recent successful `preprocess` call.
    pub fn processed_data(&self) -> Option<&Array2<f64>> {
        self.processed_data.as_ref()
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl DataPipeline for StandardPipeline {
    fn initialize(&mut self) -> Result<(), MlError> {
        if self.is_initialized {
            return Ok(());
        }
        self.config.validate()?;
        self.is_initialized = true;
        tracing::info!(
            normalize = self.config.normalize,
            augment = self.config.augment,
            noise_std = self.config.noise_std,
            batch_size = self.config.batch_size,
            seeded = self.config.seed.is_some(),
            "Data pipeline initialized"
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn preprocess(&mut self, raw_data: ArrayView2<'_, f64>) -> Result<Array2<f64>, MlError> {
        ensure_ready(self.is_initialized, raw_data)?;
        let processed = if self.config.normalize {
            zscore(raw_data, self.config.epsilon)?
        } else {
            raw_data.to_owned()
        };
        tracing::debug!(
            rows = processed.nrows(),
            cols = processed.ncols(),
            normalized = self.config.normalize,
            "Preprocessed data"
        );
        self.processed_data = Some(processed.clone());
        Ok(processed)
    }

    fn augment(&mut self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>, MlError> {
        ensure_ready(self.is_initialized, data)?;
        let augmented = if self.config.augment {
            add_gaussian_noise(data, self.config.noise_std, &mut self.rng)?
        } else {
            data.to_owned()
        };
        tracing::debug!(
            rows = augmented.nrows(),
            cols = augmented.ncols(),
            augmented = self.config.augment,
            "Augmented data"
        );
        Ok(augmented)
    }
}
