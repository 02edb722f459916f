//! Distributed GPT-2 pretraining launcher
//!
//! This crate resolves a launch plan (model preset, cluster topology, data
//! and config paths, training flags) from CLI arguments, environment
//! variables, and an optional launch config file, then dispatches the
//! external launcher that starts the training entry point.

pub mod cli;
pub mod config;
pub mod plan;
