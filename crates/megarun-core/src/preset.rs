//! Model-size presets for pretraining launches
//!
//! A preset fixes the model shape forwarded to the training entry point.
//! Debug launches use a small single-GPU shape; production launches start
//! from the large default shape, which a launch config file may override
//! field by field.

use serde::{Deserialize, Serialize};

/// Model shape forwarded to the training entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPreset {
    /// Number of partitions the model parameters are split across
    pub model_parallel_size: usize,
    /// Number of transformer layers
    pub num_layers: usize,
    /// Hidden dimension
    pub hidden_size: usize,
    /// Number of attention heads
    pub num_attention_heads: usize,
    /// Per-device batch size
    pub batch_size: usize,
}

impl ModelPreset {
    /// Fixed shape for debug launches
    ///
    /// These values are constants; a debug launch never consults the
    /// environment or a config file for its model shape.
    pub fn debug() -> Self {
        Self {
            model_parallel_size: 1,
            num_layers: 4,
            hidden_size: 1024,
            num_attention_heads: 16,
            batch_size: 4,
        }
    }

    /// Default production shape
    ///
    /// Serves as the starting point for production launches; individual
    /// fields may be overridden by a launch config file.
    pub fn production() -> Self {
        Self {
            model_parallel_size: 4,
            num_layers: 50,
            hidden_size: 8192,
            num_attention_heads: 32,
            batch_size: 4,
        }
    }
}
