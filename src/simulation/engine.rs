use crate::ant::{Ant, Mode};
use crate::cell_data::{CellData, CellKind};
use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::simulation::params::Params;
use crate::simulation::snapshot::{SimEvent, SimulationListener, Snapshot};

/// Radius of the Neumann patch turned into food by [`AntColonySimulator::place_food`]
pub const FOOD_PLACEMENT_RADIUS: u32 = 2;

/// Ant colony foraging on a rock/floor grid.
///
/// The simulator owns the grid and the population exclusively. Every call is
/// synchronous and runs to completion, so a tick can never interleave with a
/// parameter change or a food placement. All randomness comes from one
/// seeded generator, which makes runs reproducible per seed.
pub struct AntColonySimulator {
    terrain: Grid<bool>,
    grid: Grid<CellData>,
    ants: Vec<Ant>,
    params: Params,
    nest: Option<(i32, i32)>,
    delivered_food: u32,
    total_food: u32,
    tick: u64,
    next_ant_id: u32,
    rng: fastrand::Rng,
    listener: Option<Box<dyn SimulationListener + Send>>,
}

impl AntColonySimulator {
    /// Create a simulator with default parameters and an empty grid
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, Params::default())
    }

    /// Create a simulator with custom parameters and an empty grid
    pub fn with_params(seed: u64, params: Params) -> Self {
        Self {
            terrain: Grid::filled(0, 0, false),
            grid: Grid::filled(0, 0, CellData::default()),
            ants: Vec::new(),
            params,
            nest: None,
            delivered_food: 0,
            total_food: 0,
            tick: 0,
            next_ant_id: 0,
            rng: fastrand::Rng::with_seed(seed),
            listener: None,
        }
    }

    /// Register the observer that receives grid and food-count updates
    pub fn set_listener(&mut self, listener: Box<dyn SimulationListener + Send>) {
        self.listener = Some(listener);
    }

    /// Adopt a new rock/floor layout and reset everything built on top of it
    pub fn setup(&mut self, terrain: Grid<bool>) {
        log::info!("setting up {}x{} terrain", terrain.cols(), terrain.rows());
        self.terrain = terrain;
        self.reset();
    }

    /// Back to bare terrain: no ants, nest, food or pheromone, counters at zero
    pub fn reset(&mut self) {
        self.grid = self.terrain.map(|rock| CellData::from_terrain(*rock));
        self.ants.clear();
        self.nest = None;
        self.delivered_food = 0;
        self.total_food = 0;
        self.tick = 0;
        self.next_ant_id = 0;
    }

    /// Reset, then put the nest on a uniformly random floor cell
    pub fn initialize(&mut self) -> Result<Snapshot> {
        self.reset();

        let sites: Vec<(i32, i32)> = self
            .grid
            .iter()
            .filter(|(_, _, cell)| !cell.is_rock())
            .map(|(x, y, _)| (x, y))
            .collect();
        if sites.is_empty() {
            return Err(SimError::NoNestSite);
        }

        let (x, y) = sites[self.rng.usize(..sites.len())];
        self.put_nest(x, y)?;
        log::info!("nest placed at ({}, {})", x, y);

        let snapshot = self.snapshot();
        self.publish(SimEvent::Initialized(snapshot.clone()));
        Ok(snapshot)
    }

    /// Move the nest to `(x, y)`, which must be floor or the current nest
    pub fn place_nest(&mut self, x: i32, y: i32) -> Result<()> {
        match self.grid.get(x, y)?.kind() {
            CellKind::Floor | CellKind::Nest => {}
            _ => return Err(SimError::NoNestSite),
        }

        if let Some((nx, ny)) = self.nest {
            let old = self.grid.get_mut(nx, ny)?;
            if old.kind() == CellKind::Nest {
                old.set_kind(CellKind::Floor);
            }
        }
        self.put_nest(x, y)
    }

    fn put_nest(&mut self, x: i32, y: i32) -> Result<()> {
        self.grid.get_mut(x, y)?.set_kind(CellKind::Nest);
        self.nest = Some((x, y));
        Ok(())
    }

    /// Turn the floor cells around `(x, y)` into food.
    ///
    /// Returns how many cells became food. Clicks outside the grid are ignored.
    pub fn place_food(&mut self, x: i32, y: i32) -> u32 {
        if !self.grid.contains(x, y) {
            log::debug!("ignoring food placement outside the grid at ({}, {})", x, y);
            return 0;
        }

        let mut placed = 0;
        for (cx, cy) in self.patch(x, y, FOOD_PLACEMENT_RADIUS) {
            if let Ok(cell) = self.grid.get_mut(cx, cy) {
                if cell.kind() == CellKind::Floor {
                    cell.set_kind(CellKind::Food);
                    placed += 1;
                }
            }
        }

        if placed > 0 {
            self.total_food += placed;
            self.publish(SimEvent::FoodCount {
                delivered: self.delivered_food,
                total: self.total_food,
            });
        }
        placed
    }

    /// Advance the colony by one tick
    pub fn step(&mut self) -> Result<Snapshot> {
        self.tick += 1;

        if let Some((nx, ny)) = self.nest {
            self.adjust_population(nx, ny)?;
            self.emit_nest_scent(nx, ny)?;
        }

        let decay = self.params.pheromone_decay();
        for cell in self.grid.values_mut() {
            cell.decrement_pheromones(decay);
        }

        // Insertion order: earlier ants get first pick of contested cells
        for i in 0..self.ants.len() {
            self.advance_ant(i)?;
        }

        let snapshot = self.snapshot();
        self.publish(SimEvent::GridReady(snapshot.clone()));
        Ok(snapshot)
    }

    fn adjust_population(&mut self, nx: i32, ny: i32) -> Result<()> {
        let target = self.params.max_ants();

        if self.ants.len() < target {
            // One ant on the nest at a time, the newcomer waits until it is free
            if self.grid.get(nx, ny)?.kind() == CellKind::Nest {
                let direction = Direction::random(&mut self.rng);
                let ant = Ant::new(self.next_ant_id, nx, ny, direction, self.params.max_ant_steps());
                log::debug!("spawned ant {} facing {}", ant.id, direction);
                self.next_ant_id += 1;
                self.ants.push(ant);
                self.grid.get_mut(nx, ny)?.set_kind(CellKind::Ant);
            }
        } else if self.ants.len() > target {
            let ant = self.ants.remove(self.rng.usize(..self.ants.len()));
            log::debug!("removed ant {} at ({}, {})", ant.id, ant.x, ant.y);
            self.vacate(ant.x, ant.y)?;
        }

        Ok(())
    }

    fn emit_nest_scent(&mut self, nx: i32, ny: i32) -> Result<()> {
        let strength = self.params.pheromone_strength();
        for (x, y) in self.patch(nx, ny, self.params.pheromone_spread()) {
            let dist = self.grid.manhattan_distance(x, y, nx, ny)? as f32;
            self.grid.get_mut(x, y)?.increment_home_pheromone(strength, dist, 0.0);
        }
        Ok(())
    }

    fn advance_ant(&mut self, i: usize) -> Result<()> {
        let (x, y) = self.ants[i].position();
        let carrying = self.ants[i].has_food();

        let mut candidates = self.grid.directional_neighborhood(x, y, self.ants[i].direction())?;
        candidates.retain(|c| match c.data.kind() {
            CellKind::Rock | CellKind::Ant => false,
            CellKind::Food => !carrying,
            CellKind::Floor | CellKind::Nest => true,
        });

        let Some(destination) = self.ants[i].pick_destination(&candidates, &mut self.rng) else {
            self.ants[i].invert();
            return Ok(());
        };
        let (dx, dy) = destination.position();
        let target = destination.data.kind();

        self.vacate(x, y)?;
        self.deposit_trail(i)?;

        let ant = &mut self.ants[i];
        let mode_before = ant.mode();
        ant.move_to(dx, dy);
        if mode_before == Mode::Seek && ant.mode() == Mode::Return {
            log::debug!("ant {} gave up searching at ({}, {})", ant.id, dx, dy);
        }

        if !carrying && target == CellKind::Food {
            ant.pick_up_food();
            ant.invert();
            ant.return_home();
        } else if target == CellKind::Nest {
            let delivered = ant.has_food();
            if delivered {
                ant.drop_food();
            }
            ant.invert();
            ant.seek_food();

            if delivered {
                self.delivered_food += 1;
                log::info!(
                    "ant {} delivered food ({}/{})",
                    self.ants[i].id,
                    self.delivered_food,
                    self.total_food
                );
                self.publish(SimEvent::FoodCount {
                    delivered: self.delivered_food,
                    total: self.total_food,
                });
            }
        }

        self.grid.get_mut(dx, dy)?.set_kind(CellKind::Ant);
        Ok(())
    }

    /// Lay pheromone around ant `i` before it moves: returning carriers mark
    /// the food trail, seekers mark the home trail, anyone else lays nothing.
    fn deposit_trail(&mut self, i: usize) -> Result<()> {
        let ant = &self.ants[i];
        let (x, y) = ant.position();
        let mode = ant.mode();
        let carrying = ant.has_food();
        let traveled = ant.traveled_distance() as f32;
        let strength = self.params.pheromone_strength();

        for (cx, cy) in self.patch(x, y, self.params.pheromone_spread()) {
            let dist = self.grid.manhattan_distance(cx, cy, x, y)? as f32;
            let cell = self.grid.get_mut(cx, cy)?;
            match mode {
                Mode::Return if carrying => cell.increment_food_pheromone(strength, dist, traveled),
                Mode::Seek => cell.increment_home_pheromone(strength, dist, traveled),
                Mode::Return => {}
            }
        }
        Ok(())
    }

    /// Neumann neighborhood of `(x, y)` plus the center itself
    fn patch(&self, x: i32, y: i32, radius: u32) -> Vec<(i32, i32)> {
        let mut cells: Vec<(i32, i32)> = self
            .grid
            .neumann_neighborhood(x, y, radius)
            .map(|n| n.iter().map(|c| c.position()).collect())
            .unwrap_or_default();
        cells.push((x, y));
        cells
    }

    fn vacate(&mut self, x: i32, y: i32) -> Result<()> {
        let kind = if self.nest == Some((x, y)) {
            CellKind::Nest
        } else {
            CellKind::Floor
        };
        self.grid.get_mut(x, y)?.set_kind(kind);
        Ok(())
    }

    fn publish(&mut self, event: SimEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_event(&event);
        }
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            grid: self.grid.clone(),
            ants: self.ants.clone(),
            nest: self.nest,
            delivered_food: self.delivered_food,
            total_food: self.total_food,
        }
    }

    pub fn grid(&self) -> &Grid<CellData> {
        &self.grid
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn nest(&self) -> Option<(i32, i32)> {
        self.nest
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn delivered_food(&self) -> u32 {
        self.delivered_food
    }

    pub fn total_food(&self) -> u32 {
        self.total_food
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Target population. Takes effect one ant per tick.
    pub fn set_max_ants(&mut self, n: i32) {
        self.params.set_max_ants(n);
    }

    /// Search budget, applied to the living ants as well as future ones
    pub fn set_max_ant_steps(&mut self, n: i32) {
        if self.params.set_max_ant_steps(n) {
            let steps = self.params.max_ant_steps();
            for ant in &mut self.ants {
                ant.set_max_steps(steps);
            }
        }
    }

    pub fn set_pheromone_strength(&mut self, percent: i32) {
        self.params.set_pheromone_strength(percent);
    }

    pub fn set_pheromone_spread(&mut self, radius: i32) {
        self.params.set_pheromone_spread(radius);
    }

    pub fn set_pheromone_decay(&mut self, percent: i32) {
        self.params.set_pheromone_decay(percent);
    }

    pub fn reset_params(&mut self) {
        self.params.reset();
        let steps = self.params.max_ant_steps();
        for ant in &mut self.ants {
            ant.set_max_steps(steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_terrain_from_str;
    use crate::terrain::open_field;
    use std::sync::{Arc, Mutex};

    fn simulator(rows: usize, cols: usize, seed: u64) -> AntColonySimulator {
        let mut sim = AntColonySimulator::new(seed);
        sim.setup(open_field(rows, cols).unwrap());
        sim
    }

    fn count(sim: &AntColonySimulator, kind: CellKind) -> usize {
        sim.grid().iter().filter(|(_, _, c)| c.kind() == kind).count()
    }

    #[test]
    fn test_setup_builds_terrain_only_grid() {
        let sim = simulator(5, 6, 1);

        assert_eq!(sim.grid().rows(), 5);
        assert_eq!(sim.grid().cols(), 6);
        assert_eq!(count(&sim, CellKind::Rock), 18);
        assert_eq!(count(&sim, CellKind::Floor), 12);
        assert!(sim.ants().is_empty());
        assert_eq!(sim.nest(), None);
    }

    #[test]
    fn test_initialize_places_nest_on_floor() {
        for seed in 0..20 {
            let mut sim = simulator(6, 6, seed);
            let snapshot = sim.initialize().unwrap();

            let (x, y) = snapshot.nest.unwrap();
            assert_eq!(sim.grid().get(x, y).unwrap().kind(), CellKind::Nest);
            assert_eq!(count(&sim, CellKind::Nest), 1);
            assert!(snapshot.ants.is_empty());
        }
    }

    #[test]
    fn test_initialize_fails_without_floor() {
        let mut sim = AntColonySimulator::new(3);
        sim.setup(parse_terrain_from_str("###\n###\n").unwrap());

        assert!(matches!(sim.initialize(), Err(SimError::NoNestSite)));
    }

    #[test]
    fn test_place_nest_rejects_rock_and_out_of_bounds() {
        let mut sim = simulator(5, 5, 3);

        assert!(matches!(sim.place_nest(0, 0), Err(SimError::NoNestSite)));
        assert!(matches!(sim.place_nest(9, 9), Err(SimError::OutOfBounds { .. })));

        sim.place_nest(1, 1).unwrap();
        sim.place_nest(3, 3).unwrap();
        assert_eq!(sim.nest(), Some((3, 3)));
        assert_eq!(sim.grid().get(1, 1).unwrap().kind(), CellKind::Floor);
        assert_eq!(count(&sim, CellKind::Nest), 1);
    }

    #[test]
    fn test_place_food_converts_floor_patch() {
        let mut sim = simulator(9, 9, 4);
        sim.place_nest(4, 5).unwrap();

        let placed = sim.place_food(4, 4);

        // Radius-2 diamond has 13 cells, one of them is the nest
        assert_eq!(placed, 12);
        assert_eq!(sim.total_food(), 12);
        assert_eq!(count(&sim, CellKind::Food), 12);
        assert_eq!(sim.grid().get(4, 5).unwrap().kind(), CellKind::Nest);
    }

    #[test]
    fn test_place_food_clips_and_skips_rock() {
        let mut sim = simulator(5, 5, 4);

        // (2, 0) is border rock; only the floor below it turns into food
        assert_eq!(sim.place_food(2, 0), 4);
        assert_eq!(sim.grid().get(2, 0).unwrap().kind(), CellKind::Rock);
        assert_eq!(sim.grid().get(2, 2).unwrap().kind(), CellKind::Food);
    }

    #[test]
    fn test_place_food_out_of_bounds_is_ignored() {
        let mut sim = simulator(5, 5, 4);

        assert_eq!(sim.place_food(-1, 2), 0);
        assert_eq!(sim.place_food(5, 5), 0);
        assert_eq!(sim.total_food(), 0);
    }

    #[test]
    fn test_step_spawns_one_ant_per_tick() {
        let mut sim = simulator(12, 12, 5);
        sim.place_nest(6, 6).unwrap();
        sim.set_max_ants(3);

        for expected in 1..=3 {
            sim.step().unwrap();
            assert_eq!(sim.ants().len(), expected);
        }
        for _ in 0..5 {
            sim.step().unwrap();
            assert!(sim.ants().len() <= 3);
        }
    }

    #[test]
    fn test_lowering_target_removes_ants() {
        let mut sim = simulator(12, 12, 6);
        sim.place_nest(6, 6).unwrap();
        sim.set_max_ants(4);
        for _ in 0..30 {
            sim.step().unwrap();
        }
        assert_eq!(sim.ants().len(), 4);

        sim.set_max_ants(1);
        sim.step().unwrap();
        assert_eq!(sim.ants().len(), 3);
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.ants().len(), 1);
        assert_eq!(count(&sim, CellKind::Ant), 1);
    }

    #[test]
    fn test_culling_ant_on_nest_restores_nest() {
        let mut sim = simulator(7, 7, 6);
        sim.place_nest(3, 3).unwrap();
        sim.ants.push(Ant::new(0, 3, 3, Direction::NORTH, 150));
        sim.grid.get_mut(3, 3).unwrap().set_kind(CellKind::Ant);
        sim.set_max_ants(0);

        sim.step().unwrap();

        assert!(sim.ants().is_empty());
        assert_eq!(sim.grid().get(3, 3).unwrap().kind(), CellKind::Nest);
        assert_eq!(count(&sim, CellKind::Ant), 0);
    }

    #[test]
    fn test_nest_scent_and_evaporation() {
        let mut sim = simulator(9, 9, 7);
        sim.place_nest(4, 4).unwrap();
        sim.set_max_ants(0);
        sim.set_pheromone_decay(0);

        sim.step().unwrap();
        let center = sim.grid().get(4, 4).unwrap().home_pheromone();
        let near = sim.grid().get(4, 3).unwrap().home_pheromone();
        let edge = sim.grid().get(4, 2).unwrap().home_pheromone();
        let outside = sim.grid().get(4, 1).unwrap().home_pheromone();
        assert!((center - 1.0).abs() < 1e-6);
        assert!((near - 0.25).abs() < 1e-6);
        assert!(edge > 0.0 && edge < near);
        assert_eq!(outside, 0.0);

        // With the nest gone, evaporation drains the field
        sim.set_pheromone_decay(100);
        sim.nest = None;
        sim.step().unwrap();
        assert!(sim.grid().iter().all(|(_, _, c)| c.home_pheromone() == 0.0));
    }

    #[test]
    fn test_blocked_ant_turns_around() {
        // Single floor cell: the ant can never leave the nest
        let mut sim = AntColonySimulator::new(8);
        sim.setup(parse_terrain_from_str("###\n#.#\n###\n").unwrap());
        sim.place_nest(1, 1).unwrap();
        sim.set_max_ants(1);

        sim.step().unwrap();
        let facing = sim.ants()[0].direction();
        sim.step().unwrap();

        assert_eq!(sim.ants()[0].position(), (1, 1));
        assert_eq!(sim.ants()[0].direction(), facing.inverted());
        assert_eq!(sim.ants()[0].traveled_distance(), 0);
    }

    #[test]
    fn test_trail_deposit_depends_on_mode() {
        let mut sim = simulator(9, 9, 9);
        sim.set_pheromone_spread(1);

        let mut seeker = Ant::new(0, 3, 4, Direction::EAST, 150);
        seeker.move_to(4, 4);
        seeker.move_to(3, 4);
        seeker.move_to(4, 4);
        let mut carrier = Ant::new(1, 2, 2, Direction::EAST, 150);
        carrier.pick_up_food();
        carrier.return_home();
        let mut quitter = Ant::new(2, 6, 6, Direction::EAST, 150);
        quitter.return_home();
        sim.ants.extend([seeker, carrier, quitter]);

        for i in 0..3 {
            sim.deposit_trail(i).unwrap();
        }

        // Seeker with 3 steps: 1 / ((d + 1)^2 * sqrt(4))
        let home = |x, y| sim.grid().get(x, y).unwrap().home_pheromone();
        let food = |x, y| sim.grid().get(x, y).unwrap().food_pheromone();
        assert!((home(4, 4) - 0.5).abs() < 1e-6);
        assert!((home(5, 4) - 0.125).abs() < 1e-6);
        assert_eq!(food(4, 4), 0.0);
        assert_eq!(home(6, 4), 0.0);

        // Fresh carrier: 1 / (d + 1)^2
        assert!((food(2, 2) - 1.0).abs() < 1e-6);
        assert!((food(2, 1) - 0.25).abs() < 1e-6);
        assert_eq!(home(2, 2), 0.0);

        // Returning empty-handed lays nothing
        assert_eq!(home(6, 6), 0.0);
        assert_eq!(food(6, 6), 0.0);
    }

    #[test]
    fn test_seeker_picks_up_food() {
        let mut sim = simulator(5, 5, 10);
        sim.place_food(2, 0);
        sim.ants.push(Ant::new(0, 3, 3, Direction::NORTH, 150));
        sim.grid.get_mut(3, 3).unwrap().set_kind(CellKind::Ant);

        sim.step().unwrap();

        let ant = &sim.ants()[0];
        assert_eq!(ant.position(), (2, 2));
        assert!(ant.has_food());
        assert_eq!(ant.mode(), Mode::Return);
        assert_eq!(ant.direction(), Direction::SOUTH_EAST);
        assert_eq!(sim.grid().get(2, 2).unwrap().kind(), CellKind::Ant);
        assert_eq!(sim.grid().get(3, 3).unwrap().kind(), CellKind::Floor);
        assert_eq!(count(&sim, CellKind::Food), 3);
    }

    #[test]
    fn test_carrier_does_not_step_on_food() {
        let mut sim = simulator(5, 5, 10);
        sim.place_food(2, 0);
        let mut ant = Ant::new(0, 2, 2, Direction::NORTH, 150);
        ant.pick_up_food();
        ant.return_home();
        sim.ants.push(ant);
        sim.grid.get_mut(2, 2).unwrap().set_kind(CellKind::Ant);
        let food_cells = count(&sim, CellKind::Food);

        sim.step().unwrap();

        // Every open cell ahead is food, so the carrier can only turn around
        let ant = &sim.ants()[0];
        assert_eq!(ant.position(), (2, 2));
        assert_eq!(ant.direction(), Direction::SOUTH);
        assert!(ant.has_food());
        assert_eq!(ant.mode(), Mode::Return);
        assert_eq!(sim.total_food(), 4);
        assert_eq!(count(&sim, CellKind::Food), food_cells);
    }

    #[test]
    fn test_carrier_delivers_at_nest() {
        let mut sim = simulator(5, 5, 10);
        sim.place_nest(2, 2).unwrap();
        sim.set_max_ants(1);
        let mut ant = Ant::new(0, 2, 1, Direction::SOUTH, 150);
        ant.pick_up_food();
        ant.return_home();
        sim.ants.push(ant);
        sim.grid.get_mut(2, 1).unwrap().set_kind(CellKind::Ant);

        sim.step().unwrap();

        let ant = &sim.ants()[0];
        assert_eq!(sim.delivered_food(), 1);
        assert!(!ant.has_food());
        assert_eq!(ant.mode(), Mode::Seek);
        assert_eq!(ant.position(), (2, 2));
        assert_eq!(ant.direction(), Direction::NORTH);
        assert_eq!(sim.grid().get(2, 1).unwrap().kind(), CellKind::Floor);
        assert_eq!(sim.grid().get(2, 2).unwrap().kind(), CellKind::Ant);

        // Once the ant walks off, the nest tag comes back
        sim.step().unwrap();
        assert_ne!(sim.ants()[0].position(), (2, 2));
        assert_eq!(sim.grid().get(2, 2).unwrap().kind(), CellKind::Nest);
    }

    #[test]
    fn test_empty_handed_returner_resumes_seeking_at_nest() {
        let mut sim = simulator(5, 5, 10);
        sim.place_nest(2, 2).unwrap();
        sim.set_max_ants(1);
        let mut ant = Ant::new(0, 2, 1, Direction::SOUTH, 150);
        ant.return_home();
        sim.ants.push(ant);
        sim.grid.get_mut(2, 1).unwrap().set_kind(CellKind::Ant);

        sim.step().unwrap();

        let ant = &sim.ants()[0];
        assert_eq!(ant.position(), (2, 2));
        assert_eq!(ant.mode(), Mode::Seek);
        assert_eq!(ant.direction(), Direction::NORTH);
        assert_eq!(ant.traveled_distance(), 0);
        assert!(!ant.has_food());
        assert_eq!(sim.delivered_food(), 0);
    }

    #[test]
    fn test_reset_keeps_terrain() {
        let mut sim = simulator(7, 7, 11);
        sim.initialize().unwrap();
        sim.place_food(3, 3);
        sim.set_max_ants(5);
        for _ in 0..10 {
            sim.step().unwrap();
        }

        sim.reset();

        assert!(sim.ants().is_empty());
        assert_eq!(sim.nest(), None);
        assert_eq!(sim.delivered_food(), 0);
        assert_eq!(sim.total_food(), 0);
        assert_eq!(sim.tick(), 0);
        assert_eq!(count(&sim, CellKind::Rock), 24);
        assert_eq!(count(&sim, CellKind::Floor), 25);
        assert!(sim
            .grid()
            .iter()
            .all(|(_, _, c)| c.home_pheromone() == 0.0 && c.food_pheromone() == 0.0));
    }

    #[test]
    fn test_max_ant_steps_reaches_living_ants() {
        let mut sim = simulator(9, 9, 12);
        sim.place_nest(4, 4).unwrap();
        sim.set_max_ants(2);
        sim.step().unwrap();
        sim.step().unwrap();

        sim.set_max_ant_steps(7);
        assert!(sim.ants().iter().all(|a| a.max_steps() == 7));

        sim.set_max_ant_steps(1000);
        assert!(sim.ants().iter().all(|a| a.max_steps() == 7));

        sim.reset_params();
        assert!(sim.ants().iter().all(|a| a.max_steps() == Params::DEFAULT_MAX_ANT_STEPS));
        assert_eq!(sim.params().max_ants(), Params::DEFAULT_MAX_ANTS);
    }

    #[test]
    fn test_listener_receives_events() {
        let events: Arc<Mutex<Vec<SimEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        let mut sim = simulator(7, 7, 13);
        sim.set_listener(Box::new(move |event: &SimEvent| {
            sink.lock().unwrap().push(event.clone());
        }));
        sim.initialize().unwrap();
        sim.place_food(3, 3);
        sim.step().unwrap();

        let events = events.lock().unwrap();
        assert!(matches!(events[0], SimEvent::Initialized(_)));
        assert!(matches!(events[1], SimEvent::FoodCount { delivered: 0, .. }));
        assert!(matches!(events.last(), Some(SimEvent::GridReady(s)) if s.tick == 1));
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut sim = simulator(15, 15, seed);
            sim.initialize().unwrap();
            sim.place_food(3, 3);
            sim.place_food(11, 11);
            for _ in 0..80 {
                sim.step().unwrap();
            }
            sim.snapshot()
        };

        let a = run(99);
        let b = run(99);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.delivered_food, b.delivered_food);
        assert_eq!(
            a.ants.iter().map(|ant| ant.position()).collect::<Vec<_>>(),
            b.ants.iter().map(|ant| ant.position()).collect::<Vec<_>>()
        );
    }
}
