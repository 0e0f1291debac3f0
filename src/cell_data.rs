/// Terrain or occupancy tag of a cell. A cell carries exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Floor,
    Rock,
    Ant,
    Food,
    Nest,
}

/// Payload of one simulation cell: its tag plus two pheromone fields in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellData {
    kind: CellKind,
    home_pheromone: f32,
    food_pheromone: f32,
}

impl CellData {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Terrain-only payload for a rock/floor flag
    pub fn from_terrain(rock: bool) -> Self {
        Self::new(if rock { CellKind::Rock } else { CellKind::Floor })
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    pub fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    #[inline]
    pub fn is_rock(&self) -> bool {
        self.kind == CellKind::Rock
    }

    #[inline]
    pub fn home_pheromone(&self) -> f32 {
        self.home_pheromone
    }

    #[inline]
    pub fn food_pheromone(&self) -> f32 {
        self.food_pheromone
    }

    /// Reinforce the home trail. Ignored if either distance is negative.
    pub fn increment_home_pheromone(&mut self, strength: f32, source_dist: f32, traveled_distance: f32) {
        if let Some(amount) = deposit(strength, source_dist, traveled_distance) {
            self.home_pheromone = (self.home_pheromone + amount).min(1.0);
        }
    }

    /// Reinforce the food trail. Ignored if either distance is negative.
    pub fn increment_food_pheromone(&mut self, strength: f32, source_dist: f32, traveled_distance: f32) {
        if let Some(amount) = deposit(strength, source_dist, traveled_distance) {
            self.food_pheromone = (self.food_pheromone + amount).min(1.0);
        }
    }

    /// Evaporate both fields by `rate`, floored at zero
    pub fn decrement_pheromones(&mut self, rate: f32) {
        self.home_pheromone = (self.home_pheromone - rate).max(0.0);
        self.food_pheromone = (self.food_pheromone - rate).max(0.0);
    }

    pub fn clear_pheromones(&mut self) {
        self.home_pheromone = 0.0;
        self.food_pheromone = 0.0;
    }
}

// strength / ((d + 1)^2 * sqrt(t + 1))
#[inline]
fn deposit(strength: f32, source_dist: f32, traveled_distance: f32) -> Option<f32> {
    if source_dist < 0.0 || traveled_distance < 0.0 {
        return None;
    }
    let spread = (source_dist + 1.0) * (source_dist + 1.0);
    Some((strength / (spread * (traveled_distance + 1.0).sqrt())).max(0.0))
}
