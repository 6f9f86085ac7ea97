//! Worker cluster and the per-round collective exchange.
//!
//! Every worker is a long-lived tokio task holding the complete previous
//! grid. A round is: each worker steps its own slice, hands the fragment
//! back over the shared channel, and blocks until the reassembled next
//! grid is installed on it. `advance` drives exactly one such collective.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::config::SimConfig;
use crate::error::{ConfigError, Error, PartitionError, Result, SyncError};
use crate::grid::Grid;
use crate::partition::Partition;
use crate::step::step_local;

enum WorkerMsg {
    /// The complete grid for the next round; the worker steps its slice.
    Install(Grid),
    /// Global stop, broadcast instead of a grid so no worker is left
    /// blocking in the collective alone.
    Stop,
}

struct Fragment {
    rank: usize,
    cells: Vec<bool>,
}

/// A fixed set of stepping workers advancing one grid in lock-step.
///
/// The cluster owns the runtime the workers live on and the display-facing
/// snapshot of the last completed round. Workers never share state by
/// reference; grids and fragments move over channels by value.
#[derive(Debug)]
pub struct Cluster {
    runtime: Runtime,
    install_txs: Vec<mpsc::Sender<WorkerMsg>>,
    fragment_rx: mpsc::Receiver<Fragment>,
    handles: Vec<JoinHandle<()>>,
    partitions: Vec<Partition>,
    snapshot: Grid,
}

impl Cluster {
    /// Seed a random grid from the validated config and spawn the workers.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::random(config.width, config.height, config.live_fraction, &mut rng);
        Self::with_grid(config.workers, grid)
    }

    /// Spawn `workers` stepping tasks over an explicit initial grid and
    /// install that grid on all of them.
    pub fn with_grid(workers: usize, grid: Grid) -> Result<Self> {
        if workers == 0 {
            return Err(ConfigError::ZeroWorkers.into());
        }
        let cells = grid.len();
        if cells > 0 && workers > cells {
            return Err(PartitionError::TooManyWorkers { cells, workers }.into());
        }

        let partitions = Partition::split(cells, workers);
        let runtime = Runtime::new()?;
        let (fragment_tx, fragment_rx) = mpsc::channel(workers);
        let mut install_txs = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);
        for partition in &partitions {
            let (install_tx, install_rx) = mpsc::channel(1);
            handles.push(runtime.spawn(worker_loop(*partition, install_rx, fragment_tx.clone())));
            install_txs.push(install_tx);
        }

        // Initial install: every worker starts round 1 from the same seed grid.
        runtime.block_on(async {
            for tx in &install_txs {
                tx.send(WorkerMsg::Install(grid.clone()))
                    .await
                    .map_err(|_| SyncError::WorkerGone)?;
            }
            Ok::<(), SyncError>(())
        })?;

        info!(workers, cells, "life cluster started");
        Ok(Cluster {
            runtime,
            install_txs,
            fragment_rx,
            handles,
            partitions,
            snapshot: grid,
        })
    }

    /// Grid of the last completed round. Safe to render at any time; it is
    /// only replaced after an exchange has fully completed.
    pub fn snapshot(&self) -> &Grid {
        &self.snapshot
    }

    pub fn workers(&self) -> usize {
        self.partitions.len()
    }

    /// Complete one round: gather every worker's fragment, reassemble the
    /// grid in rank order, and install the result on all workers so they
    /// begin the next round from the identical value.
    pub fn advance(&mut self) -> Result<&Grid> {
        let next = {
            let Cluster {
                runtime,
                install_txs,
                fragment_rx,
                partitions,
                snapshot,
                ..
            } = self;
            let width = snapshot.width();
            let height = snapshot.height();

            runtime.block_on(async {
                // Gather: one fragment per rank. Workers only compute after an
                // install, so all fragments received here belong to this round.
                let mut fragments: Vec<Option<Vec<bool>>> = vec![None; partitions.len()];
                for _ in 0..partitions.len() {
                    let fragment = fragment_rx.recv().await.ok_or(SyncError::WorkerGone)?;
                    debug_assert!(fragments[fragment.rank].is_none());
                    fragments[fragment.rank] = Some(fragment.cells);
                }

                // Reassemble: partitions are contiguous in rank order, so the
                // concatenation is the full grid with no gaps or overlaps.
                let mut cells = Vec::with_capacity(width * height);
                for (rank, fragment) in fragments.into_iter().enumerate() {
                    match fragment {
                        Some(fragment) => cells.extend(fragment),
                        None => return Err(SyncError::MissingFragment { rank }.into()),
                    }
                }
                let expected = width * height;
                if cells.len() != expected {
                    return Err(SyncError::ShortExchange {
                        got: cells.len(),
                        expected,
                    }
                    .into());
                }
                let grid = Grid::from_cells(width, height, cells)?;

                // Broadcast: every worker gets the complete next grid.
                for tx in install_txs.iter() {
                    tx.send(WorkerMsg::Install(grid.clone()))
                        .await
                        .map_err(|_| SyncError::WorkerGone)?;
                }
                trace!("exchange complete");
                Ok::<Grid, Error>(grid)
            })?
        };
        self.snapshot = next;
        Ok(&self.snapshot)
    }

    /// Replace the grid on every worker mid-run. Drains the in-flight
    /// round first so stale fragments cannot mix with the new grid.
    /// Dimensions are fixed for the cluster's lifetime.
    pub fn reset(&mut self, grid: Grid) -> Result<()> {
        if grid.width() != self.snapshot.width() || grid.height() != self.snapshot.height() {
            return Err(ConfigError::DimensionMismatch {
                width: self.snapshot.width(),
                height: self.snapshot.height(),
                new_width: grid.width(),
                new_height: grid.height(),
            }
            .into());
        }
        {
            let Cluster {
                runtime,
                install_txs,
                fragment_rx,
                partitions,
                ..
            } = self;
            runtime.block_on(async {
                for _ in 0..partitions.len() {
                    fragment_rx.recv().await.ok_or(SyncError::WorkerGone)?;
                }
                for tx in install_txs.iter() {
                    tx.send(WorkerMsg::Install(grid.clone()))
                        .await
                        .map_err(|_| SyncError::WorkerGone)?;
                }
                Ok::<(), Error>(())
            })?;
        }
        debug!("cluster reset with a fresh grid");
        self.snapshot = grid;
        Ok(())
    }

    /// Stop all workers and wait for them to exit.
    pub fn shutdown(mut self) {
        self.stop_workers();
    }

    fn stop_workers(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        let Cluster {
            runtime,
            install_txs,
            handles,
            ..
        } = self;
        runtime.block_on(async {
            for tx in install_txs.iter() {
                // A worker that already exited has closed its channel.
                let _ = tx.send(WorkerMsg::Stop).await;
            }
            for handle in handles.drain(..) {
                let _ = handle.await;
            }
        });
        info!("life cluster stopped");
    }
}

impl Drop for Cluster {
    fn drop(&mut self) {
        self.stop_workers();
    }
}

async fn worker_loop(
    partition: Partition,
    mut installs: mpsc::Receiver<WorkerMsg>,
    fragments: mpsc::Sender<Fragment>,
) {
    while let Some(msg) = installs.recv().await {
        match msg {
            WorkerMsg::Install(grid) => {
                let cells = step_local(&grid, &partition);
                let fragment = Fragment {
                    rank: partition.rank,
                    cells,
                };
                if fragments.send(fragment).await.is_err() {
                    // Cluster gone; nothing left to contribute to.
                    break;
                }
            }
            WorkerMsg::Stop => break,
        }
    }
    trace!(rank = partition.rank, "worker stopped");
}
