use crate::ant::Ant;
use crate::cell_data::CellData;
use crate::grid::Grid;
use std::sync::mpsc;

/// Owned, read-only copy of the simulation state after a tick
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub tick: u64,
    pub grid: Grid<CellData>,
    pub ants: Vec<Ant>,
    pub nest: Option<(i32, i32)>,
    pub delivered_food: u32,
    pub total_food: u32,
}

/// Notifications published by the simulator
#[derive(Clone, Debug)]
pub enum SimEvent {
    /// Nest placed and population cleared
    Initialized(Snapshot),
    /// A tick completed
    GridReady(Snapshot),
    /// Food counters changed
    FoodCount { delivered: u32, total: u32 },
}

/// Receives every [`SimEvent`] the simulator publishes
pub trait SimulationListener {
    fn on_event(&mut self, event: &SimEvent);
}

impl SimulationListener for mpsc::Sender<SimEvent> {
    fn on_event(&mut self, event: &SimEvent) {
        // A dropped receiver just means nobody is watching anymore
        let _ = self.send(event.clone());
    }
}

impl<F: FnMut(&SimEvent)> SimulationListener for F {
    fn on_event(&mut self, event: &SimEvent) {
        self(event)
    }
}
