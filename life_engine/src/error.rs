//! Error taxonomy: configuration, partitioning and exchange failures are
//! all fatal; the lock-step protocol has no well-defined recovery.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Invalid simulation parameters, rejected before any round executes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("worker count must be at least 1")]
    ZeroWorkers,
    #[error("live fraction must be within 0.0..=1.0, got {0}")]
    LiveFraction(f64),
    #[error("expected {expected} cells for a {width}x{height} grid, got {got}")]
    CellCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },
    #[error("replacement grid is {new_width}x{new_height} but the cluster was built for {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        new_width: usize,
        new_height: usize,
    },
}

/// The cell index space cannot be split as requested.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("cannot split {cells} cells across {workers} workers")]
    TooManyWorkers { cells: usize, workers: usize },
}

/// The collective exchange did not complete.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("a worker disconnected before the exchange completed")]
    WorkerGone,
    #[error("no fragment received for rank {rank}")]
    MissingFragment { rank: usize },
    #[error("exchange reassembled {got} cells, expected {expected}")]
    ShortExchange { got: usize, expected: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Partition(#[from] PartitionError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error("failed to start the worker runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
