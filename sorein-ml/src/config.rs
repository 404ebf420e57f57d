//! Configuration types for the sorein-ml crate.
//!
//! Settings resolve through `figment` layers: built-in defaults, the user's
//! `~/.config/sorein/config.toml`, the workspace's `.sorein/config.toml`,
//! `SOREIN_` environment variables and finally per-field caller overrides.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::MlError;

/// Top-level configuration for sorein-ml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MlConfig {
    /// Data pipeline configuration.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Data pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Z-score normalize input in `preprocess`.
    #[serde(default = "default_true")]
    pub normalize: bool,
    /// Add Gaussian noise in `augment`.
    #[serde(default = "default_true")]
    pub augment: bool,
    /// Standard deviation of the additive noise.
    #[serde(default = "default_noise_std")]
    pub noise_std: f64,
    /// Added to the standard deviation before dividing during normalization.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Rows per batch when `batch_process` is called without an explicit size.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Seed for the noise generator (OS entropy if not set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            augment: true,
            noise_std: default_noise_std(),
            epsilon: default_epsilon(),
            batch_size: default_batch_size(),
            seed: None,
        }
    }
}

impl PipelineConfig {
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_augment(mut self, augment: bool) -> Self {
        self.augment = augment;
        self
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that numeric settings are usable.
    pub fn validate(&self) -> Result<(), MlError> {
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(MlError::config(format!(
                "noise_std must be a finite non-negative number, got {}",
                self.noise_std
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(MlError::config(format!(
                "epsilon must be a finite positive number, got {}",
                self.epsilon
            )));
        }
        if self.batch_size == 0 {
            return Err(MlError::config("batch_size must be greater than zero"));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_noise_std() -> f64 {
    0.1
}

fn default_epsilon() -> f64 {
    1e-8
}

fn default_batch_size() -> usize {
    32
}

/// Caller-supplied settings applied on top of every other configuration layer.
///
/// Only fields that are `Some` are applied; unset fields keep whatever the
/// files, environment or defaults provide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub pipeline: PipelineOverrides,
}

/// Per-field overrides for [`PipelineConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub augment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Environment prefix; nested keys are separated by `__`
/// (e.g. `SOREIN_PIPELINE__NOISE_STD=0.05`).
pub const ENV_PREFIX: &str = "SOREIN_";

const CONFIG_DIR: &str = ".sorein";
const CONFIG_FILE: &str = "config.toml";

/// Existing config files, lowest priority first: the user file, then the
/// workspace file.
pub fn config_files(workspace: Option<&Path>) -> Vec<PathBuf> {
    let user = directories::ProjectDirs::from("dev", "sorein", "sorein")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE));
    let local = workspace.map(|ws| ws.join(CONFIG_DIR).join(CONFIG_FILE));
    [user, local]
        .into_iter()
        .flatten()
        .filter(|path| path.is_file())
        .collect()
}

/// Resolve the configuration.
///
/// Layers, later ones winning field by field: built-in defaults, the files from
/// [`config_files`], `SOREIN_` environment variables, then `overrides`.
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&ConfigOverrides>,
) -> Result<MlConfig, MlError> {
    let files = config_files(workspace);
    let figment = files
        .iter()
        .fold(
            Figment::from(Serialized::defaults(MlConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(overrides.cloned().unwrap_or_default()));

    let config: MlConfig = figment.extract().map_err(Box::new)?;
    tracing::debug!(
        files = ?files,
        pipeline = ?config.pipeline,
        "Resolved pipeline configuration"
    );
    Ok(config)
}
