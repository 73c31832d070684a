//! Cellular automata on a fixed-size toroidal grid.
//!
//! Two rules ship with the crate, [`GameOfLife`] and [`BriansBrain`]. Both go
//! through the same pipeline: [`create_grid`] builds generation 0,
//! [`update_grid`] maps one generation to the next, and [`draw_grid`] hands a
//! snapshot to a [`Surface`]. [`Simulation`] ties them together for a
//! front-end's frame loop.

pub mod automaton;
pub mod brians_brain;
pub mod driver;
pub mod game_of_life;
pub mod grid;
pub mod palette;
pub mod patterns;
pub mod render;

pub use automaton::{
    Automaton, CellState, SeedMode, create_grid, create_grid_with, update_grid, update_grid_into,
};
pub use brians_brain::{BrainState, BriansBrain};
pub use driver::Simulation;
pub use game_of_life::{GameOfLife, LifeState};
pub use grid::Grid;
pub use palette::Rgb;
pub use patterns::Pattern;
pub use render::{CellRect, Layout, Surface, draw_grid};
