//! Resolution of CLI arguments into a concrete launcher invocation
//!
//! `resolve` is a pure function of its inputs so the debug/production
//! branching and flag assembly can be tested without touching the process
//! environment or spawning anything.

use crate::cli::Cli;
use crate::config::LaunchConfigFile;
use anyhow::{bail, Context, Result};
use megarun_core::{
    CheckpointOptions, GptOptions, LaunchPaths, LauncherInvocation, ModelPreset, Topology,
};
use std::path::PathBuf;

/// Combine CLI arguments and config-file overrides into a launcher command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments (env-backed values already filled in)
/// * `config` - Launch config overrides; ignored for the model shape in
///   debug mode
/// * `base_dir` - Directory sibling files are resolved against
///
/// # Returns
/// The fully assembled invocation, or an error if the production topology
/// is missing or invalid
pub fn resolve(cli: &Cli, config: &LaunchConfigFile, base_dir: PathBuf) -> Result<LauncherInvocation> {
    let (preset, topology) = if cli.debug {
        (ModelPreset::debug(), Topology::DEBUG)
    } else {
        let mut preset = ModelPreset::production();
        config.apply_model(&mut preset);

        let num_workers = cli
            .num_workers
            .context("NUM_WORKERS must be set (env or --num-workers) for a production launch")?;
        let num_gpus_per_worker = cli.num_gpus_per_worker.context(
            "NUM_GPUS_PER_WORKER must be set (env or --num-gpus-per-worker) for a production launch",
        )?;
        let topology = Topology::new(num_workers, num_gpus_per_worker)?;
        (preset, topology)
    };

    if preset.hidden_size % preset.num_attention_heads != 0 {
        bail!(
            "hidden size {} is not divisible by {} attention heads",
            preset.hidden_size,
            preset.num_attention_heads
        );
    }

    let mut paths = LaunchPaths::new(base_dir);
    if let Some(train_data) = &cli.train_data {
        paths.train_data = train_data.clone();
    }
    if let Some(vocab_file) = &cli.vocab_file {
        paths.vocab_file = vocab_file.clone();
    }
    if let Some(merge_file) = &cli.merge_file {
        paths.merge_file = merge_file.clone();
    }
    if let Some(checkpoint_dir) = &cli.checkpoint_dir {
        paths.checkpoint_dir = checkpoint_dir.clone();
    }
    let backend_config = paths.backend_config(cli.backend_config.as_deref());

    let mut gpt_options = GptOptions::new(preset);
    if !cli.debug {
        config.apply_options(&mut gpt_options);
    }

    let checkpoint_options = CheckpointOptions {
        checkpoint_num_layers: cli.checkpoint_num_layers,
        partition_activations: cli.partition_activations,
        checkpoint_in_cpu: cli.checkpoint_in_cpu,
        synchronize_each_layer: cli.synchronize_each_layer,
        contiguous_checkpointing: cli.contiguous_checkpointing,
        profile_backward: cli.profile_backward,
    };

    let mut options = gpt_options.to_args(&paths, &backend_config);
    options.extend(checkpoint_options.to_args());

    Ok(LauncherInvocation {
        program: cli.launcher.clone(),
        num_nodes: topology.num_workers,
        num_gpus: topology.num_gpus_per_worker,
        entry_point: cli.entry_point.clone(),
        passthrough: cli.passthrough.clone(),
        options,
    })
}
