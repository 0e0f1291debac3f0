use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::simulation::engine::AntColonySimulator;
use crate::simulation::snapshot::SimEvent;
use std::sync::mpsc;
use std::thread;

/// Requests accepted by a [`SimulationWorker`], applied strictly in arrival order
#[derive(Clone, Debug)]
pub enum Command {
    SetMaxAnts(i32),
    SetMaxAntSteps(i32),
    SetPheromoneStrength(i32),
    SetPheromoneSpread(i32),
    SetPheromoneDecay(i32),
    ResetParams,
    Setup(Grid<bool>),
    Initialize,
    PlaceNest { x: i32, y: i32 },
    PlaceFood { x: i32, y: i32 },
    /// Run this many ticks back to back
    Step(u32),
    Reset,
    Shutdown,
}

/// Runs one simulator on a dedicated thread.
///
/// The worker is the only owner of the simulator, so commands can only land
/// between ticks. Events come back through the receiver returned by
/// [`SimulationWorker::spawn`].
pub struct SimulationWorker {
    tx: mpsc::Sender<Command>,
    handle: Option<thread::JoinHandle<AntColonySimulator>>,
}

impl SimulationWorker {
    pub fn spawn(mut simulator: AntColonySimulator) -> Result<(Self, mpsc::Receiver<SimEvent>)> {
        let (tx, rx) = mpsc::channel::<Command>();
        let (event_tx, event_rx) = mpsc::channel::<SimEvent>();
        simulator.set_listener(Box::new(event_tx));

        let handle = thread::Builder::new()
            .name("ant-forage-sim".into())
            .spawn(move || {
                while let Ok(command) = rx.recv() {
                    if let Command::Shutdown = command {
                        break;
                    }
                    apply(&mut simulator, command);
                }
                simulator
            })?;

        Ok((
            Self {
                tx,
                handle: Some(handle),
            },
            event_rx,
        ))
    }

    pub fn send(&self, command: Command) -> Result<()> {
        self.tx.send(command).map_err(|_| SimError::DriverClosed)
    }

    /// Finish the queued commands, stop the thread and hand back the simulator
    pub fn join(mut self) -> Result<AntColonySimulator> {
        let _ = self.tx.send(Command::Shutdown);
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| SimError::DriverClosed),
            None => Err(SimError::DriverClosed),
        }
    }
}

impl Drop for SimulationWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("simulation worker thread panicked");
            }
        }
    }
}

fn apply(simulator: &mut AntColonySimulator, command: Command) {
    let outcome = match command {
        Command::SetMaxAnts(n) => {
            simulator.set_max_ants(n);
            Ok(())
        }
        Command::SetMaxAntSteps(n) => {
            simulator.set_max_ant_steps(n);
            Ok(())
        }
        Command::SetPheromoneStrength(v) => {
            simulator.set_pheromone_strength(v);
            Ok(())
        }
        Command::SetPheromoneSpread(v) => {
            simulator.set_pheromone_spread(v);
            Ok(())
        }
        Command::SetPheromoneDecay(v) => {
            simulator.set_pheromone_decay(v);
            Ok(())
        }
        Command::ResetParams => {
            simulator.reset_params();
            Ok(())
        }
        Command::Setup(terrain) => {
            simulator.setup(terrain);
            Ok(())
        }
        Command::Initialize => simulator.initialize().map(|_| ()),
        Command::PlaceNest { x, y } => simulator.place_nest(x, y),
        Command::PlaceFood { x, y } => {
            simulator.place_food(x, y);
            Ok(())
        }
        Command::Step(ticks) => (0..ticks).try_for_each(|_| simulator.step().map(|_| ())),
        Command::Reset => {
            simulator.reset();
            Ok(())
        }
        Command::Shutdown => Ok(()),
    };

    if let Err(err) = outcome {
        log::error!("simulation command failed: {}", err);
    }
}
