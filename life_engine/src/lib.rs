//! Distributed toroidal Game of Life engine.
//!
//! The grid lives as a flat cell vector replicated on every worker. Each
//! round the workers step their own index slice against the complete
//! previous grid, then a collective exchange reassembles the fragments in
//! rank order and hands every worker the identical next grid.

pub mod cluster;
pub mod config;
pub mod error;
pub mod grid;
pub mod partition;
pub mod patterns;
pub mod step;

pub use cluster::Cluster;
pub use config::SimConfig;
pub use error::{ConfigError, Error, PartitionError, Result, SyncError};
pub use grid::Grid;
pub use partition::Partition;
