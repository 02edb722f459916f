//! Assembly of the training-flag vector forwarded to the entry point
//!
//! The external trainer receives its entire configuration as command-line
//! flags. `GptOptions` covers the model shape, training schedule, and
//! optimizer hyperparameters; `CheckpointOptions` covers the activation
//! checkpointing toggles appended after them. Both produce a stable flag
//! order so an assembled command is reproducible.

use crate::paths::LaunchPaths;
use crate::preset::ModelPreset;
use std::path::Path;

/// Model, schedule, and optimizer flags for the training entry point
#[derive(Debug, Clone)]
pub struct GptOptions {
    /// Model shape
    pub preset: ModelPreset,
    /// Training sequence length
    pub seq_length: usize,
    /// Maximum position embeddings
    pub max_position_embeddings: usize,
    /// Total training iterations
    pub train_iters: usize,
    /// Peak learning rate
    pub learning_rate: f64,
    /// Learning rate decay style
    pub lr_decay_style: String,
    /// Weight decay
    pub weight_decay: f64,
    /// Gradient clipping threshold
    pub clip_grad: f64,
    /// Warmup fraction of total iterations
    pub warmup: f64,
    /// Tokenizer implementation selected in the trainer
    pub tokenizer_type: String,
    /// Train/validation/test split weights
    pub data_split: String,
    /// Distributed communication backend
    pub distributed_backend: String,
    /// Train in 16-bit floating point
    pub fp16: bool,
}

impl GptOptions {
    /// Build the default option set for a given model shape
    pub fn new(preset: ModelPreset) -> Self {
        Self {
            preset,
            seq_length: 1024,
            max_position_embeddings: 1024,
            train_iters: 320_000,
            learning_rate: 1.5e-4,
            lr_decay_style: "cosine".to_string(),
            weight_decay: 1e-2,
            clip_grad: 1.0,
            warmup: 0.01,
            tokenizer_type: "GPT2BPETokenizer".to_string(),
            data_split: "949,50,1".to_string(),
            distributed_backend: "nccl".to_string(),
            fp16: true,
        }
    }

    /// Render the full flag vector
    ///
    /// # Arguments
    /// * `paths` - Dataset, vocabulary, merge-rule, and checkpoint paths
    /// * `backend_config` - Resolved backend engine config document
    ///
    /// # Returns
    /// Flags in a fixed order: model shape, schedule, data paths,
    /// optimizer, precision, then the backend engine flags.
    pub fn to_args(&self, paths: &LaunchPaths, backend_config: &Path) -> Vec<String> {
        let mut args = vec![
            "--model-parallel-size".to_string(),
            self.preset.model_parallel_size.to_string(),
            "--num-layers".to_string(),
            self.preset.num_layers.to_string(),
            "--hidden-size".to_string(),
            self.preset.hidden_size.to_string(),
            "--num-attention-heads".to_string(),
            self.preset.num_attention_heads.to_string(),
            "--batch-size".to_string(),
            self.preset.batch_size.to_string(),
            "--seq-length".to_string(),
            self.seq_length.to_string(),
            "--max-position-embeddings".to_string(),
            self.max_position_embeddings.to_string(),
            "--train-iters".to_string(),
            self.train_iters.to_string(),
            "--save".to_string(),
            paths.checkpoint_dir.display().to_string(),
            "--load".to_string(),
            paths.checkpoint_dir.display().to_string(),
            "--resume-dataloader".to_string(),
            "--train-data".to_string(),
            paths.train_data.display().to_string(),
            "--vocab-file".to_string(),
            paths.vocab_file.display().to_string(),
            "--merge-file".to_string(),
            paths.merge_file.display().to_string(),
            "--lazy-loader".to_string(),
            "--tokenizer-type".to_string(),
            self.tokenizer_type.clone(),
            "--split".to_string(),
            self.data_split.clone(),
            "--distributed-backend".to_string(),
            self.distributed_backend.clone(),
            "--lr".to_string(),
            format!("{:e}", self.learning_rate),
            "--lr-decay-style".to_string(),
            self.lr_decay_style.clone(),
            "--weight-decay".to_string(),
            format!("{:e}", self.weight_decay),
            "--clip-grad".to_string(),
            self.clip_grad.to_string(),
            "--warmup".to_string(),
            self.warmup.to_string(),
        ];
        if self.fp16 {
            args.push("--fp16".to_string());
        }
        args.push("--deepspeed".to_string());
        args.push("--deepspeed_config".to_string());
        args.push(backend_config.display().to_string());
        args
    }
}

/// Activation checkpointing options appended after the training flags
///
/// Each boolean toggle contributes exactly one flag when enabled and
/// nothing when disabled; toggles compose additively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointOptions {
    /// Layers per checkpointed block
    pub checkpoint_num_layers: usize,
    /// Partition activations across model-parallel ranks
    pub partition_activations: bool,
    /// Offload checkpointed activations to CPU memory
    pub checkpoint_in_cpu: bool,
    /// Synchronize ranks after each layer
    pub synchronize_each_layer: bool,
    /// Store checkpointed activations in contiguous buffers
    pub contiguous_checkpointing: bool,
    /// Profile the backward pass
    pub profile_backward: bool,
}

impl Default for CheckpointOptions {
    fn default() -> Self {
        Self {
            checkpoint_num_layers: 1,
            partition_activations: false,
            checkpoint_in_cpu: false,
            synchronize_each_layer: false,
            contiguous_checkpointing: false,
            profile_backward: false,
        }
    }
}

impl CheckpointOptions {
    /// Render the checkpointing flag vector
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--checkpoint-activations".to_string(),
            "--deepspeed-activation-checkpointing".to_string(),
            "--checkpoint-num-layers".to_string(),
            self.checkpoint_num_layers.to_string(),
        ];
        if self.partition_activations {
            args.push("--partition-activations".to_string());
        }
        if self.checkpoint_in_cpu {
            args.push("--checkpoint-in-cpu".to_string());
        }
        if self.synchronize_each_layer {
            args.push("--synchronize-each-layer".to_string());
        }
        if self.contiguous_checkpointing {
            args.push("--contiguous-checkpointing".to_string());
        }
        if self.profile_backward {
            args.push("--profile-backward".to_string());
        }
        args
    }
}
