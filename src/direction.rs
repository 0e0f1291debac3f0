use std::fmt;

/// Facing vector of an ant. Both components are in {-1, 0, 1} and never both zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction { dx: 0, dy: -1 };
    pub const NORTH_EAST: Direction = Direction { dx: 1, dy: -1 };
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const SOUTH_EAST: Direction = Direction { dx: 1, dy: 1 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };
    pub const SOUTH_WEST: Direction = Direction { dx: -1, dy: 1 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const NORTH_WEST: Direction = Direction { dx: -1, dy: -1 };

    /// All eight headings, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTH_EAST,
        Direction::EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH,
        Direction::SOUTH_WEST,
        Direction::WEST,
        Direction::NORTH_WEST,
    ];

    /// Heading that points along `(dx, dy)`, or `None` for a zero delta.
    ///
    /// Deltas longer than one cell are reduced to their sign.
    #[inline]
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        if dx == 0 && dy == 0 {
            return None;
        }
        Some(Self {
            dx: dx.signum() as i8,
            dy: dy.signum() as i8,
        })
    }

    /// Uniformly random heading
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    #[inline]
    pub const fn dx(self) -> i32 {
        self.dx as i32
    }

    #[inline]
    pub const fn dy(self) -> i32 {
        self.dy as i32
    }

    /// Heading pointing the opposite way
    #[inline]
    pub const fn inverted(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Compass abbreviation
    pub const fn as_str(self) -> &'static str {
        match (self.dx, self.dy) {
            (0, -1) => "n",
            (1, -1) => "ne",
            (1, 0) => "e",
            (1, 1) => "se",
            (0, 1) => "s",
            (-1, 1) => "sw",
            (-1, 0) => "w",
            _ => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
