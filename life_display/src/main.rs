// Rendering collaborator: owns the cluster, paces the rounds, draws the
// snapshot of the last completed exchange.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use life_engine::patterns;
use life_engine::{Cluster, Grid, SimConfig};

mod ui;

/// Conway's Game of Life on a torus, stepped by a worker cluster.
#[derive(Parser, Debug)]
#[command(name = "life_display")]
struct Args {
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// Fraction of live cells at startup
    #[arg(short = 'r', long, default_value_t = 0.2)]
    ratio: f64,
    /// Number of stepping workers
    #[arg(short = 'w', long, default_value_t = num_cpus::get())]
    workers: usize,
    /// Fix the RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = SimConfig {
        width: args.width,
        height: args.height,
        workers: args.workers,
        live_fraction: args.ratio,
        seed: args.seed,
    };
    config
        .validate()
        .context("invalid simulation configuration")?;
    let cluster = Cluster::new(&config).context("failed to start the cluster")?;
    info!(
        width = config.width,
        height = config.height,
        workers = config.workers,
        "starting simulation"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 980.0]),
        ..Default::default()
    };
    let app = LifeApp::new(&config, cluster);
    eframe::run_native("Game of Life", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| anyhow::anyhow!("window error: {err}"))
}

pub struct LifeApp {
    cluster: Cluster,
    grid: Grid, // snapshot of the last completed round, rendered each frame
    live_fraction: f64,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    pub fn new(config: &SimConfig, cluster: Cluster) -> Self {
        let grid = cluster.snapshot().clone();
        Self {
            cluster,
            grid,
            live_fraction: config.live_fraction,
            is_running: true,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Drive one collective round and take the new snapshot. An exchange
    /// failure is fatal for the simulation; the display just stops pacing.
    pub fn advance_generation(&mut self) {
        match self.cluster.advance() {
            Ok(grid) => {
                self.grid = grid.clone();
                self.generation += 1;
            }
            Err(err) => {
                error!("round failed: {err}");
                self.is_running = false;
            }
        }
    }

    pub fn clear_grid(&mut self) {
        let grid = Grid::dead(self.grid.width(), self.grid.height());
        self.install(grid);
    }

    pub fn reseed_random(&mut self) {
        let mut rng = StdRng::from_entropy();
        let grid = Grid::random(
            self.grid.width(),
            self.grid.height(),
            self.live_fraction,
            &mut rng,
        );
        self.install(grid);
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let mut grid = Grid::dead(self.grid.width(), self.grid.height());
            let origin = (self.grid.width() / 2, self.grid.height() / 2);
            patterns::stamp(&mut grid, pattern, origin);
            self.install(grid);
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let mut grid = self.grid.clone();
        grid.toggle_xy(x, y);
        match self.cluster.reset(grid.clone()) {
            Ok(()) => self.grid = grid,
            Err(err) => {
                error!("toggle failed: {err}");
                self.is_running = false;
            }
        }
    }

    fn install(&mut self, grid: Grid) {
        match self.cluster.reset(grid.clone()) {
            Ok(()) => {
                self.grid = grid;
                self.generation = 0;
            }
            Err(err) => {
                error!("reset failed: {err}");
                self.is_running = false;
            }
        }
    }
}
