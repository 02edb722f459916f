//! Construction and dispatch of the external launcher command
//!
//! The launcher receives the node and GPU-per-node counts, the training
//! entry point, any passthrough arguments verbatim, and the assembled
//! training flags. Stdio is inherited so the launcher's own output is the
//! tool's output, and its exit status is propagated unchanged.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::{error, info};

/// Launcher program used when none is given on the CLI
pub const DEFAULT_LAUNCHER: &str = "deepspeed";
/// Training entry point handed to the launcher
pub const DEFAULT_ENTRY_POINT: &str = "pretrain_gpt2.py";

/// A fully assembled launcher command
#[derive(Debug, Clone)]
pub struct LauncherInvocation {
    /// Launcher program name or path
    pub program: String,
    /// Node count forwarded as `--num_nodes`
    pub num_nodes: usize,
    /// GPU-per-node count forwarded as `--num_gpus`
    pub num_gpus: usize,
    /// Training entry point file
    pub entry_point: String,
    /// Arguments forwarded verbatim, before the assembled options
    pub passthrough: Vec<String>,
    /// Assembled training and checkpointing flags
    pub options: Vec<String>,
}

impl LauncherInvocation {
    /// Argument vector passed to the launcher program
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![
            "--num_nodes".to_string(),
            self.num_nodes.to_string(),
            "--num_gpus".to_string(),
            self.num_gpus.to_string(),
            self.entry_point.clone(),
        ];
        argv.extend(self.passthrough.iter().cloned());
        argv.extend(self.options.iter().cloned());
        argv
    }

    /// Single-line rendering of the full command, for logs and dry runs
    pub fn render(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.argv());
        parts.join(" ")
    }

    /// Run the launcher and wait for it to finish
    ///
    /// Stdio is inherited. No retry or recovery is attempted; failure is
    /// entirely surfaced by the launcher's own output and exit status.
    ///
    /// # Returns
    /// The launcher's exit code; death by signal maps to 1
    pub fn spawn(&self) -> Result<i32> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.argv());
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        info!("Executing: {}", self.render());

        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to start launcher `{}`", self.program))?;
        let status = child
            .wait()
            .with_context(|| format!("failed waiting for launcher `{}`", self.program))?;

        let code = status.code().unwrap_or(1);
        if status.success() {
            info!("Launcher completed successfully");
        } else {
            error!("Launcher exited with status {code}");
        }
        Ok(code)
    }
}
