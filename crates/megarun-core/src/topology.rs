//! Cluster topology for the distributed launcher

use thiserror::Error;

/// Validation errors for a launch topology
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkers(usize),
    #[error("GPUs per worker must be at least 1, got {0}")]
    InvalidGpus(usize),
}

/// Worker/GPU topology handed to the external launcher
///
/// `num_workers` becomes the launcher's node count and
/// `num_gpus_per_worker` its GPU-per-node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    /// Number of compute nodes participating in the job
    pub num_workers: usize,
    /// Number of GPUs used on each node
    pub num_gpus_per_worker: usize,
}

impl Topology {
    /// Topology used by debug launches regardless of the environment
    pub const DEBUG: Topology = Topology {
        num_workers: 1,
        num_gpus_per_worker: 1,
    };

    /// Build a validated topology
    ///
    /// # Arguments
    /// * `num_workers` - Node count, from `NUM_WORKERS` in production
    /// * `num_gpus_per_worker` - GPUs per node, from `NUM_GPUS_PER_WORKER`
    ///
    /// # Returns
    /// The topology, or an error if either count is zero
    pub fn new(num_workers: usize, num_gpus_per_worker: usize) -> Result<Self, TopologyError> {
        if num_workers == 0 {
            return Err(TopologyError::InvalidWorkers(num_workers));
        }
        if num_gpus_per_worker == 0 {
            return Err(TopologyError::InvalidGpus(num_gpus_per_worker));
        }
        Ok(Self {
            num_workers,
            num_gpus_per_worker,
        })
    }

    /// Total number of GPU ranks in the job
    pub fn world_size(&self) -> usize {
        self.num_workers * self.num_gpus_per_worker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_topology() {
        let topology = Topology::new(16, 8).expect("topology should be valid");
        assert_eq!(topology.num_workers, 16);
        assert_eq!(topology.num_gpus_per_worker, 8);
        assert_eq!(topology.world_size(), 128);
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert_eq!(Topology::new(0, 8), Err(TopologyError::InvalidWorkers(0)));
    }

    #[test]
    fn test_zero_gpus_rejected() {
        assert_eq!(Topology::new(4, 0), Err(TopologyError::InvalidGpus(0)));
    }

    #[test]
    fn test_debug_topology_is_single_gpu() {
        assert_eq!(Topology::DEBUG.world_size(), 1);
    }
}
