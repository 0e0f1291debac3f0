//! # Ant Forage
//!
//! An ant colony foraging for food on a cave grid.
//!
//! Ants leave the nest in search of food, laying a home trail as they go.
//! Once they find food they carry it back along the home trail while laying a
//! food trail for the others. Both trails evaporate every tick, so only the
//! paths that keep being used survive.

pub mod ant;
pub mod cell_data;
pub mod cli;
pub mod direction;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod terrain;

pub use ant::{Ant, Mode};
pub use cell_data::{CellData, CellKind};
pub use cli::Args;
pub use direction::Direction;
pub use error::{Result, SimError};
pub use grid::{Cell, Grid};
pub use simulation::{AntColonySimulator, Command, Params, SimEvent, SimulationListener, SimulationWorker, Snapshot};
pub use terrain::{MapFile, OpenField, TerrainSource};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        AntColonySimulator, Args, CellKind, Command, Grid, Result, SimError, SimEvent, SimulationWorker,
        TerrainSource,
    };
}
