//! Launch configuration overrides loaded from JSON
//!
//! A launch config file replaces selected production hyperparameters
//! without restating the rest. Every section and field is optional; absent
//! fields keep the preset or option defaults. Debug launches ignore the
//! model section entirely since the debug shape is fixed.

use anyhow::{Context, Result};
use megarun_core::{GptOptions, ModelPreset};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides for a production launch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfigFile {
    /// Model shape overrides
    pub model: ModelOverrides,
    /// Training schedule overrides
    pub schedule: ScheduleOverrides,
    /// Optimizer overrides
    pub optimizer: OptimizerOverrides,
}

/// Model shape overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOverrides {
    /// Number of model-parallel partitions
    pub model_parallel_size: Option<usize>,
    /// Number of transformer layers
    pub num_layers: Option<usize>,
    /// Hidden dimension
    pub hidden_size: Option<usize>,
    /// Number of attention heads
    pub num_attention_heads: Option<usize>,
    /// Per-device batch size
    pub batch_size: Option<usize>,
}

/// Training schedule overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleOverrides {
    /// Training sequence length
    pub seq_length: Option<usize>,
    /// Maximum position embeddings
    pub max_position_embeddings: Option<usize>,
    /// Total training iterations
    pub train_iters: Option<usize>,
}

/// Optimizer overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerOverrides {
    /// Peak learning rate
    pub learning_rate: Option<f64>,
    /// Learning rate decay style
    pub lr_decay_style: Option<String>,
    /// Weight decay
    pub weight_decay: Option<f64>,
    /// Gradient clipping threshold
    pub clip_grad: Option<f64>,
    /// Warmup fraction of total iterations
    pub warmup: Option<f64>,
}

impl LaunchConfigFile {
    /// Load overrides from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON launch config
    ///
    /// # Returns
    /// Parsed overrides, or an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read launch config: {:?}", path))?;
        let config: LaunchConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse launch config: {:?}", path))?;
        Ok(config)
    }

    /// Apply the model section on top of a preset
    pub fn apply_model(&self, preset: &mut ModelPreset) {
        if let Some(v) = self.model.model_parallel_size {
            preset.model_parallel_size = v;
        }
        if let Some(v) = self.model.num_layers {
            preset.num_layers = v;
        }
        if let Some(v) = self.model.hidden_size {
            preset.hidden_size = v;
        }
        if let Some(v) = self.model.num_attention_heads {
            preset.num_attention_heads = v;
        }
        if let Some(v) = self.model.batch_size {
            preset.batch_size = v;
        }
    }

    /// Apply the schedule and optimizer sections on top of the options
    pub fn apply_options(&self, options: &mut GptOptions) {
        if let Some(v) = self.schedule.seq_length {
            options.seq_length = v;
        }
        if let Some(v) = self.schedule.max_position_embeddings {
            options.max_position_embeddings = v;
        }
        if let Some(v) = self.schedule.train_iters {
            options.train_iters = v;
        }
        if let Some(v) = self.optimizer.learning_rate {
            options.learning_rate = v;
        }
        if let Some(v) = self.optimizer.lr_decay_style.clone() {
            options.lr_decay_style = v;
        }
        if let Some(v) = self.optimizer.weight_decay {
            options.weight_decay = v;
        }
        if let Some(v) = self.optimizer.clip_grad {
            options.clip_grad = v;
        }
        if let Some(v) = self.optimizer.warmup {
            options.warmup = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_changes_nothing() {
        let config = LaunchConfigFile::default();
        let mut preset = ModelPreset::production();
        config.apply_model(&mut preset);
        assert_eq!(preset, ModelPreset::production());
    }

    #[test]
    fn test_partial_config_from_file() {
        let config_json = r#"{
            "model": {
                "hidden_size": 4096,
                "num_layers": 24
            },
            "optimizer": {
                "learning_rate": 6e-5
            }
        }"#;

        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(config_json.as_bytes()).expect("Failed to write config");
        file.flush().expect("Failed to flush");

        let config = LaunchConfigFile::from_file(file.path()).expect("Failed to load config");

        let mut preset = ModelPreset::production();
        config.apply_model(&mut preset);
        assert_eq!(preset.hidden_size, 4096);
        assert_eq!(preset.num_layers, 24);
        // untouched fields keep the production defaults
        assert_eq!(preset.num_attention_heads, 32);
        assert_eq!(preset.model_parallel_size, 4);

        let mut options = GptOptions::new(preset);
        config.apply_options(&mut options);
        assert_eq!(options.learning_rate, 6e-5);
        assert_eq!(options.train_iters, 320_000);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"not json").expect("Failed to write");
        file.flush().expect("Failed to flush");

        assert!(LaunchConfigFile::from_file(file.path()).is_err());
    }
}
