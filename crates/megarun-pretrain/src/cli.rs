//! Command-line interface for the pretraining launcher
//!
//! Every switch can also come from the environment, keeping the tool usable
//! from job schedulers that configure runs through exported variables. The
//! topology variables (`NUM_WORKERS`, `NUM_GPUS_PER_WORKER`) and the
//! checkpointing toggles (`PA`, `PA_CPU`, `SYNCHRONIZE`, `CC`, `PROFILE`)
//! keep their historical names.

use clap::Parser;
use megarun_core::command::{DEFAULT_ENTRY_POINT, DEFAULT_LAUNCHER};
use std::path::PathBuf;

/// Launch a distributed GPT-2 pretraining job
#[derive(Parser, Debug)]
#[command(name = "megarun-pretrain")]
#[command(about = "Launch distributed GPT-2 pretraining", long_about = None)]
pub struct Cli {
    /// Backend engine config document; only its basename is kept and
    /// resolved relative to the base directory
    #[arg(value_name = "CONFIG")]
    pub backend_config: Option<PathBuf>,

    /// Use the fixed single-GPU debug shape and topology
    #[arg(long, env = "DEBUG_RUN")]
    pub debug: bool,

    /// Number of worker nodes (production launches)
    #[arg(long, env = "NUM_WORKERS", value_name = "N")]
    pub num_workers: Option<usize>,

    /// Number of GPUs per worker node (production launches)
    #[arg(long, env = "NUM_GPUS_PER_WORKER", value_name = "N")]
    pub num_gpus_per_worker: Option<usize>,

    /// JSON launch config overriding production hyperparameters
    #[arg(long, value_name = "PATH")]
    pub launch_config: Option<PathBuf>,

    /// Directory sibling files are resolved against; defaults to the
    /// directory containing this executable
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Training dataset path
    #[arg(long, value_name = "PATH")]
    pub train_data: Option<PathBuf>,

    /// Tokenizer vocabulary file
    #[arg(long, value_name = "PATH")]
    pub vocab_file: Option<PathBuf>,

    /// Tokenizer merge-rule file
    #[arg(long, value_name = "PATH")]
    pub merge_file: Option<PathBuf>,

    /// Checkpoint save/load directory
    #[arg(long, value_name = "PATH")]
    pub checkpoint_dir: Option<PathBuf>,

    /// Launcher program
    #[arg(long, default_value = DEFAULT_LAUNCHER)]
    pub launcher: String,

    /// Training entry point handed to the launcher
    #[arg(long, default_value = DEFAULT_ENTRY_POINT)]
    pub entry_point: String,

    /// Layers per checkpointed block
    #[arg(long, default_value_t = 1, value_name = "N")]
    pub checkpoint_num_layers: usize,

    /// Partition activations across model-parallel ranks
    #[arg(long, env = "PA")]
    pub partition_activations: bool,

    /// Offload checkpointed activations to CPU memory
    #[arg(long, env = "PA_CPU")]
    pub checkpoint_in_cpu: bool,

    /// Synchronize ranks after each layer
    #[arg(long, env = "SYNCHRONIZE")]
    pub synchronize_each_layer: bool,

    /// Store checkpointed activations in contiguous buffers
    #[arg(long, env = "CC")]
    pub contiguous_checkpointing: bool,

    /// Profile the backward pass
    #[arg(long, env = "PROFILE")]
    pub profile_backward: bool,

    /// Print the assembled command without launching it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments forwarded verbatim to the launched command
    #[arg(last = true, value_name = "ARGS")]
    pub passthrough: Vec<String>,
}
