//! Path resolution for data and backend configuration files
//!
//! All sibling files are resolved against a base directory, which defaults
//! to the directory containing the running executable. None of these files
//! are parsed here; their formats belong to the external training framework.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Backend engine config used when no path argument is supplied
pub const DEFAULT_BACKEND_CONFIG: &str = "ds_zero_stage_2_config.json";

/// Default dataset path relative to the base directory
pub const DEFAULT_TRAIN_DATA: &str = "data/webtext";
/// Default vocabulary file relative to the base directory
pub const DEFAULT_VOCAB_FILE: &str = "data/gpt2-vocab.json";
/// Default merge-rule file relative to the base directory
pub const DEFAULT_MERGE_FILE: &str = "data/gpt2-merges.txt";
/// Default checkpoint save/load directory relative to the base directory
pub const DEFAULT_CHECKPOINT_DIR: &str = "checkpoints/gpt2_ds";

/// Paths forwarded (unparsed) to the training entry point
#[derive(Debug, Clone)]
pub struct LaunchPaths {
    /// Directory sibling files are resolved against
    pub base_dir: PathBuf,
    /// Training dataset path
    pub train_data: PathBuf,
    /// Tokenizer vocabulary file
    pub vocab_file: PathBuf,
    /// Tokenizer merge-rule file
    pub merge_file: PathBuf,
    /// Checkpoint save/load directory
    pub checkpoint_dir: PathBuf,
}

impl LaunchPaths {
    /// Build the default path set rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        let train_data = base_dir.join(DEFAULT_TRAIN_DATA);
        let vocab_file = base_dir.join(DEFAULT_VOCAB_FILE);
        let merge_file = base_dir.join(DEFAULT_MERGE_FILE);
        let checkpoint_dir = base_dir.join(DEFAULT_CHECKPOINT_DIR);
        Self {
            base_dir,
            train_data,
            vocab_file,
            merge_file,
            checkpoint_dir,
        }
    }

    /// Resolve the backend engine config document
    ///
    /// With no argument the path defaults to a fixed sibling of the base
    /// directory. With an argument, only its basename is kept and resolved
    /// relative to the base directory, matching the original launcher's
    /// behavior of ignoring any directory components in the argument.
    pub fn backend_config(&self, arg: Option<&Path>) -> PathBuf {
        match arg.and_then(Path::file_name) {
            Some(name) => self.base_dir.join(name),
            None => self.base_dir.join(DEFAULT_BACKEND_CONFIG),
        }
    }
}

/// Base directory used when none is given on the CLI
///
/// # Returns
/// The directory containing the running executable
pub fn default_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_defaults_to_sibling() {
        let paths = LaunchPaths::new(PathBuf::from("/opt/megarun"));
        assert_eq!(
            paths.backend_config(None),
            PathBuf::from("/opt/megarun/ds_zero_stage_2_config.json")
        );
    }

    #[test]
    fn test_backend_config_keeps_basename_only() {
        let paths = LaunchPaths::new(PathBuf::from("/opt/megarun"));
        let arg = PathBuf::from("/somewhere/else/zero3_offload.json");
        assert_eq!(
            paths.backend_config(Some(&arg)),
            PathBuf::from("/opt/megarun/zero3_offload.json")
        );
    }

    #[test]
    fn test_default_siblings_are_rooted_at_base() {
        let paths = LaunchPaths::new(PathBuf::from("/opt/megarun"));
        assert_eq!(paths.train_data, PathBuf::from("/opt/megarun/data/webtext"));
        assert_eq!(
            paths.vocab_file,
            PathBuf::from("/opt/megarun/data/gpt2-vocab.json")
        );
        assert_eq!(
            paths.merge_file,
            PathBuf::from("/opt/megarun/data/gpt2-merges.txt")
        );
    }
}
