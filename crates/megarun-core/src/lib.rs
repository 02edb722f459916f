//! Core building blocks for the megarun pretraining launcher
//!
//! This crate implements the configuration-and-dispatch step that precedes a
//! distributed pretraining run: model-size presets, cluster topology, path
//! resolution for data and backend configuration files, assembly of the
//! training-flag vector, and construction of the external launcher command.
//!
//! The training loop, model-parallel engine, and communication backend are
//! external collaborators invoked by name; nothing here parses their files or
//! implements their semantics.

pub mod command;
pub mod options;
pub mod paths;
pub mod preset;
pub mod topology;

pub use command::LauncherInvocation;
pub use options::{CheckpointOptions, GptOptions};
pub use paths::LaunchPaths;
pub use preset::ModelPreset;
pub use topology::{Topology, TopologyError};
