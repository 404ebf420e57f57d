//! # sorein-ml — numeric data pipeline for model training
//!
//! Preprocesses, augments, batches and validates 2-D `f64` arrays of shape
//! `(n_samples, n_features)` before they reach a training loop.
//!
//! ```no_run
//! use ndarray::Array2;
//! use sorein_ml::{DataPipeline, PipelineConfig, StandardPipeline};
//!
//! # fn main() -> Result<(), sorein_ml::MlError> {
//! let mut pipeline = StandardPipeline::new(PipelineConfig::default().with_seed(42));
//! pipeline.initialize()?;
//!
//! let raw = Array2::from_shape_fn((100, 5), |(r, c)| (r * 5 + c) as f64);
//! for batch in pipeline.batch_process_with(raw.view(), 20)? {
//!     assert!(pipeline.validate_data(batch.view()));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;

// Re-exports
pub use config::{ConfigOverrides, MlConfig, PipelineConfig, PipelineOverrides, load_config};
pub use data::{DataPipeline, NumericQualityReport, StandardPipeline, validate_array};
pub use error::MlError;
