use crate::cell_data::{CellData, CellKind};
use crate::direction::Direction;
use crate::grid::Cell;

/// Behavior state of a forager
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Outbound, looking for food
    Seek,
    /// Inbound, heading for the nest
    Return,
}

/// One foraging agent
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    direction: Direction,
    mode: Mode,
    has_food: bool,
    traveled_distance: u32,
    max_steps: u32,
}

impl Ant {
    /// Create a seeking ant at `(x, y)` facing `direction`
    pub fn new(id: u32, x: i32, y: i32, direction: Direction, max_steps: u32) -> Self {
        Self {
            id,
            x,
            y,
            direction,
            mode: Mode::Seek,
            has_food: false,
            traveled_distance: 0,
            max_steps,
        }
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn has_food(&self) -> bool {
        self.has_food
    }

    /// Steps taken since the last mode switch
    #[inline]
    pub fn traveled_distance(&self) -> u32 {
        self.traveled_distance
    }

    #[inline]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn set_max_steps(&mut self, max_steps: u32) {
        self.max_steps = max_steps;
    }

    /// Move to `(x, y)`, facing along the step taken.
    ///
    /// A seeking ant that reaches `max_steps` gives up: it switches to
    /// [`Mode::Return`] and turns around.
    pub fn move_to(&mut self, x: i32, y: i32) {
        if let Some(direction) = Direction::from_delta(x - self.x, y - self.y) {
            self.direction = direction;
        }
        self.x = x;
        self.y = y;
        self.traveled_distance += 1;

        if self.mode == Mode::Seek && self.traveled_distance >= self.max_steps {
            self.return_home();
            self.invert();
        }
    }

    /// Turn around
    #[inline]
    pub fn invert(&mut self) {
        self.direction = self.direction.inverted();
    }

    pub fn pick_up_food(&mut self) {
        self.has_food = true;
    }

    pub fn drop_food(&mut self) {
        self.has_food = false;
    }

    pub fn seek_food(&mut self) {
        self.mode = Mode::Seek;
        self.traveled_distance = 0;
    }

    pub fn return_home(&mut self) {
        self.mode = Mode::Return;
        self.traveled_distance = 0;
    }

    /// Choose where to step next among `candidates`.
    ///
    /// Starts from a random candidate. A returning ant takes the first nest
    /// cell outright and otherwise climbs the home trail; a seeking ant takes
    /// the first food cell outright and otherwise climbs the food trail while
    /// avoiding the home trail. Only strict improvements replace the current
    /// pick. Returns `None` for an empty slice.
    pub fn pick_destination<'a>(
        &self,
        candidates: &'a [Cell<CellData>],
        rng: &mut fastrand::Rng,
    ) -> Option<&'a Cell<CellData>> {
        if candidates.is_empty() {
            return None;
        }

        let mut destination = &candidates[rng.usize(..candidates.len())];
        for neighbor in candidates {
            match self.mode {
                Mode::Return => {
                    if neighbor.data.kind() == CellKind::Nest {
                        destination = neighbor;
                        break;
                    }
                    if neighbor.data.home_pheromone() > destination.data.home_pheromone() {
                        destination = neighbor;
                    }
                }
                Mode::Seek => {
                    if neighbor.data.kind() == CellKind::Food {
                        destination = neighbor;
                        break;
                    }
                    if neighbor.data.food_pheromone() > destination.data.food_pheromone()
                        || neighbor.data.home_pheromone() < destination.data.home_pheromone()
                    {
                        destination = neighbor;
                    }
                }
            }
        }

        Some(destination)
    }
}
