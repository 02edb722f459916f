//! Pretraining launcher binary
//!
//! Resolves a launch plan from CLI arguments, environment variables, and an
//! optional launch config file, then hands off to the external distributed
//! launcher. The launcher's exit code becomes this process's exit code.
//!
//! # Usage
//!
//! ```bash
//! NUM_WORKERS=16 NUM_GPUS_PER_WORKER=8 megarun-pretrain \
//!   [zero3_offload.json] \
//!   [--debug] \
//!   [--partition-activations] [--checkpoint-in-cpu] \
//!   [--dry-run] \
//!   [-- --extra-trainer-flag value]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use megarun_core::paths::default_base_dir;
use megarun_pretrain::{cli::Cli, config::LaunchConfigFile, plan};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    debug!("CLI arguments: {:?}", cli);

    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => default_base_dir()?,
    };

    let config = match &cli.launch_config {
        Some(path) => LaunchConfigFile::from_file(path)
            .with_context(|| format!("Failed to load launch config: {:?}", path))?,
        None => LaunchConfigFile::default(),
    };

    let invocation = plan::resolve(&cli, &config, base_dir)?;

    info!(
        num_nodes = invocation.num_nodes,
        num_gpus = invocation.num_gpus,
        debug = cli.debug,
        "Resolved launch topology"
    );

    if cli.dry_run {
        println!("{}", invocation.render());
        return Ok(());
    }

    let code = invocation.spawn()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
