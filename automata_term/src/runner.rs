// runner.rs - tokio-driven frame loop for one automaton

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use automata::{Automaton, CellState, Simulation, Surface};

use crate::error::TermError;
use crate::surface::{TERM_LAYOUT, TermGuard, TermSurface};

/// Knobs for one run, usually filled from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seed: u64,
    pub density: Option<f64>,
    pub fps: u32,
    pub generations: Option<u64>,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleRun,
    Randomize,
    Clear,
    Quit,
}

pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyCommand::Quit),
        KeyCode::Char(' ') => Some(KeyCommand::ToggleRun),
        KeyCode::Char('r') => Some(KeyCommand::Randomize),
        KeyCode::Char('c') => Some(KeyCommand::Clear),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Key commands waiting in the terminal's input queue, without blocking.
fn pending_commands() -> io::Result<Vec<KeyCommand>> {
    let mut commands = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            commands.extend(key_command(key));
        }
    }
    Ok(commands)
}

enum Wake {
    Tick,
    Interrupt,
}

/// Whether the loop keeps going after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

fn limit_reached<A: Automaton>(sim: &Simulation<A>, limit: Option<u64>) -> bool {
    limit.is_some_and(|limit| sim.generation() >= limit)
}

/// Applies this tick's key commands, then steps unless a command already
/// redrew or the generation limit is reached.
pub fn tick<A, R, D>(
    sim: &mut Simulation<A>,
    commands: &[KeyCommand],
    limit: Option<u64>,
    rng: &mut R,
    surface: &mut D,
) -> Result<Flow, D::Error>
where
    A: Automaton,
    R: rand::Rng + ?Sized,
    D: Surface + ?Sized,
{
    let mut drawn = false;
    for &command in commands {
        debug!(?command, "key");
        match command {
            KeyCommand::Quit => return Ok(Flow::Stop),
            KeyCommand::ToggleRun => sim.toggle_running(),
            KeyCommand::Randomize => {
                sim.randomize(rng, surface)?;
                drawn = true;
            }
            KeyCommand::Clear => {
                sim.clear(surface)?;
                drawn = true;
            }
        }
    }
    if !drawn && !limit_reached(sim, limit) {
        sim.frame(surface)?;
    }
    Ok(if limit_reached(sim, limit) { Flow::Stop } else { Flow::Continue })
}

/// Runs `A` until the user quits, Ctrl-C arrives or the generation limit is
/// hit. Returns the last generation reached.
pub async fn run<A: Automaton>(options: &RunOptions) -> Result<u64, TermError> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut sim = Simulation::<A>::default();
    sim.layout = TERM_LAYOUT;
    if let Some(density) = options.density {
        sim.set_density(density);
    }
    info!(automaton = A::NAME, seed = options.seed, density = sim.density(), "run starting");

    let status_row = sim.grid().rows() as u16;
    let mut surface = TermSurface::default();
    let mut out = io::stdout();
    let _guard = TermGuard::enter()?;

    sim.randomize(&mut rng, &mut surface)?;
    sim.set_running(true);
    surface.present(&mut out, status_row, &status_line(&sim))?;
    if limit_reached(&sim, options.generations) {
        return Ok(sim.generation());
    }

    let period = Duration::from_secs_f64(1.0 / f64::from(options.fps.max(1)));
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let wake = tokio::select! {
            _ = &mut ctrl_c => Wake::Interrupt,
            _ = ticker.tick() => Wake::Tick,
        };
        if let Wake::Interrupt = wake {
            debug!("interrupted");
            break;
        }

        let flow = tick(
            &mut sim,
            &pending_commands()?,
            options.generations,
            &mut rng,
            &mut surface,
        )?;
        surface.present(&mut out, status_row, &status_line(&sim))?;
        if flow == Flow::Stop {
            break;
        }
    }

    Ok(sim.generation())
}

fn status_line<A: Automaton>(sim: &Simulation<A>) -> String {
    let mut line = format!(
        "{} | generation {} | {}",
        A::NAME,
        sim.generation(),
        if sim.is_running() { "running" } else { "stopped" },
    );
    for (state, count) in sim.census() {
        line.push_str(&format!(" | {} {}", state.label(), count));
    }
    line.push_str(" | space start/stop, r randomize, c clear, q quit");
    line
}
