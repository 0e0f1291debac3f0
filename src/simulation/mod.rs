pub mod driver;
pub mod engine;
pub mod params;
pub mod snapshot;

pub use driver::{Command, SimulationWorker};
pub use engine::{AntColonySimulator, FOOD_PLACEMENT_RADIUS};
pub use params::Params;
pub use snapshot::{SimEvent, SimulationListener, Snapshot};
