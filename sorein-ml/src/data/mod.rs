//! Data pipeline — normalization, augmentation, batching, validation.

pub mod batch;
pub mod pipeline;
pub mod transform;
pub mod validate;

pub use batch::{batch_count, split_rows};
pub use pipeline::{DataPipeline, StandardPipeline, ensure_ready};
pub use validate::{NumericQualityReport, validate_array};
