use std::error::Error;
use std::io;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use term_life::{Simulation, presets, rendering::TerminalSink};

#[derive(Parser)]
#[command(name = "term-life", about = "Conway's Game of Life on a toroidal grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 25)]
    height: usize,

    /// Fraction of the grid seeded with random live cells
    #[arg(long, default_value_t = 0.25)]
    fraction: f64,

    /// Generations per second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// RNG seed for a reproducible universe
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named preset pattern instead of random soup
    #[arg(long)]
    pattern: Option<String>,

    /// Stop after this many generations (default: run until killed)
    #[arg(long)]
    generations: Option<u64>,

    /// Compute each generation with row-parallel workers
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Frames own stdout; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut sim = match &cli.pattern {
        Some(name) => {
            let pattern = presets::find(name)
                .ok_or_else(|| format!("unknown pattern '{name}'"))?;
            let mut sim = Simulation::empty(cli.width, cli.height)?;
            let x = (cli.width as i32 - pattern.width as i32) / 2;
            let y = (cli.height as i32 - pattern.height as i32) / 2;
            sim.place(&pattern, x, y);
            sim
        }
        None => Simulation::with_seed(cli.width, cli.height, cli.fraction, seed)?,
    };

    info!(
        width = cli.width,
        height = cli.height,
        seed,
        parallel = cli.parallel,
        "starting simulation"
    );

    let tick = Duration::from_secs_f64(1.0 / cli.fps.max(1.0));
    let mut sink = TerminalSink::new(io::stdout())?;

    loop {
        if cli.parallel {
            sim.advance_parallel();
        } else {
            sim.advance();
        }

        let status = format!(
            "gen {:>6}  pop {:>6}  {}x{}",
            sim.generation(),
            sim.population(),
            cli.width,
            cli.height
        );
        sink.present(&sim.render(), &status)?;

        if cli.generations.is_some_and(|max| sim.generation() >= max) {
            break;
        }
        thread::sleep(tick);
    }

    Ok(())
}
