// main.rs - Terminal shell: runs one automaton at a fixed frame rate

use clap::{Parser, ValueEnum};
use tracing::{Level, info};

use automata::{Automaton, BriansBrain, GameOfLife};

mod error;
mod runner;
mod surface;

use error::TermError;
use runner::{RunOptions, run};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Conway's Game of Life
    Life,
    /// Brian's Brain
    Brain,
}

/// Runs a toroidal cellular automaton in the terminal.
#[derive(Parser, Debug)]
#[command(name = "automata-term", version)]
struct Args {
    /// Which automaton to run.
    #[arg(long, value_enum, default_value_t = Kind::Life)]
    automaton: Kind,
    /// Seed for the random starting grid. Picked at random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Probability that a cell starts active.
    #[arg(long)]
    density: Option<f64>,
    /// Upper bound on generations per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
    /// Stop after this many generations.
    #[arg(long, value_name = "COUNT")]
    generations: Option<u64>,
    /// Log at debug level to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            seed: self.seed.unwrap_or_else(rand::random),
            density: self.density,
            fps: self.fps,
            generations: self.generations,
        }
    }
}

fn main() -> Result<(), TermError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let options = args.run_options();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(TermError::Runtime)?;

    let (name, generation) = runtime.block_on(async {
        match args.automaton {
            Kind::Life => run::<GameOfLife>(&options).await.map(|g| (GameOfLife::NAME, g)),
            Kind::Brain => run::<BriansBrain>(&options).await.map(|g| (BriansBrain::NAME, g)),
        }
    })?;

    info!(automaton = name, generation, seed = options.seed, "run finished");
    Ok(())
}
