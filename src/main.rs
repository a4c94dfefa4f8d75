/*
 * Boid Arena
 *
 * Boids flock on a grid-scaled canvas by three rules (separation, alignment,
 * cohesion); a boid with no neighbors cruises towards a wandering target.
 * Boids leaving one edge of the canvas re-enter on the opposite edge.
 *
 * Set RUST_LOG=boid_arena=debug (or trace) for simulation logs.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use boid_arena::{app, ArenaConfig};

#[derive(Debug, Parser)]
#[command(name = "boid-arena", about = "Boid flocking arena with toroidal wraparound")]
struct Cli {
    /// JSON configuration file; missing fields fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of boids scattered at startup
    #[arg(long)]
    boids: Option<usize>,

    /// Simulation ticks per second
    #[arg(long)]
    framerate: Option<f32>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Find neighbors in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    info!(
        boids = config.initial_boids,
        framerate = config.framerate,
        seed = ?config.rng_seed,
        "starting boid arena"
    );
    app::run(config).context("failed to launch the arena")?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(cli: &Cli) -> Result<ArenaConfig> {
    let mut config = match &cli.config {
        Some(path) => ArenaConfig::from_json_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ArenaConfig::default(),
    };

    if let Some(boids) = cli.boids {
        config.initial_boids = boids;
    }
    if let Some(framerate) = cli.framerate {
        config.framerate = framerate;
    }
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    if cli.parallel {
        config.parallel_neighbors = true;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
