use std::ops::RangeInclusive;

/// Tunable knobs of the colony.
///
/// Strength and decay are stored as fractions but exchanged with the outside
/// world as integer percentages. Setters ignore values outside their range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    max_ants: usize,
    max_ant_steps: u32,
    pheromone_strength: f32,
    pheromone_spread: u32,
    pheromone_decay: f32,
}

impl Params {
    pub const MAX_ANTS_RANGE: RangeInclusive<i32> = 0..=100;
    pub const MAX_ANT_STEPS_RANGE: RangeInclusive<i32> = 0..=300;
    pub const PHEROMONE_STRENGTH_RANGE: RangeInclusive<i32> = 0..=100;
    pub const PHEROMONE_SPREAD_RANGE: RangeInclusive<i32> = 0..=5;
    pub const PHEROMONE_DECAY_RANGE: RangeInclusive<i32> = 0..=100;

    pub const DEFAULT_MAX_ANTS: usize = 20;
    pub const DEFAULT_MAX_ANT_STEPS: u32 = 150;
    pub const DEFAULT_PHEROMONE_STRENGTH: f32 = 1.0;
    pub const DEFAULT_PHEROMONE_SPREAD: u32 = 2;
    pub const DEFAULT_PHEROMONE_DECAY: f32 = 0.01;

    #[inline]
    pub fn max_ants(&self) -> usize {
        self.max_ants
    }

    #[inline]
    pub fn max_ant_steps(&self) -> u32 {
        self.max_ant_steps
    }

    /// Deposit strength as a fraction in `[0, 1]`
    #[inline]
    pub fn pheromone_strength(&self) -> f32 {
        self.pheromone_strength
    }

    /// Deposit strength as an integer percentage
    pub fn pheromone_strength_percent(&self) -> i32 {
        (self.pheromone_strength * 100.0).round() as i32
    }

    #[inline]
    pub fn pheromone_spread(&self) -> u32 {
        self.pheromone_spread
    }

    /// Per-tick evaporation as a fraction in `[0, 1]`
    #[inline]
    pub fn pheromone_decay(&self) -> f32 {
        self.pheromone_decay
    }

    /// Per-tick evaporation as an integer percentage
    pub fn pheromone_decay_percent(&self) -> i32 {
        (self.pheromone_decay * 100.0).round() as i32
    }

    pub fn set_max_ants(&mut self, n: i32) -> bool {
        if !accept("max_ants", n, &Self::MAX_ANTS_RANGE) {
            return false;
        }
        self.max_ants = n as usize;
        true
    }

    pub fn set_max_ant_steps(&mut self, n: i32) -> bool {
        if !accept("max_ant_steps", n, &Self::MAX_ANT_STEPS_RANGE) {
            return false;
        }
        self.max_ant_steps = n as u32;
        true
    }

    pub fn set_pheromone_strength(&mut self, percent: i32) -> bool {
        if !accept("pheromone_strength", percent, &Self::PHEROMONE_STRENGTH_RANGE) {
            return false;
        }
        self.pheromone_strength = percent as f32 / 100.0;
        true
    }

    pub fn set_pheromone_spread(&mut self, radius: i32) -> bool {
        if !accept("pheromone_spread", radius, &Self::PHEROMONE_SPREAD_RANGE) {
            return false;
        }
        self.pheromone_spread = radius as u32;
        true
    }

    pub fn set_pheromone_decay(&mut self, percent: i32) -> bool {
        if !accept("pheromone_decay", percent, &Self::PHEROMONE_DECAY_RANGE) {
            return false;
        }
        self.pheromone_decay = percent as f32 / 100.0;
        true
    }

    /// Restore every knob to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_ants: Self::DEFAULT_MAX_ANTS,
            max_ant_steps: Self::DEFAULT_MAX_ANT_STEPS,
            pheromone_strength: Self::DEFAULT_PHEROMONE_STRENGTH,
            pheromone_spread: Self::DEFAULT_PHEROMONE_SPREAD,
            pheromone_decay: Self::DEFAULT_PHEROMONE_DECAY,
        }
    }
}

fn accept(name: &str, value: i32, range: &RangeInclusive<i32>) -> bool {
    if range.contains(&value) {
        true
    } else {
        log::debug!(
            "ignoring {}={} (allowed {}..={})",
            name,
            value,
            range.start(),
            range.end()
        );
        false
    }
}
