use std::fmt;

/// Error types for the foraging simulation
#[derive(Debug)]
pub enum SimError {
    /// Grid coordinates outside the grid extent
    OutOfBounds { x: i32, y: i32 },
    /// Nest requested on rock, or the grid has no floor cell at all
    NoNestSite,
    /// Malformed terrain map
    InvalidTerrain(String),
    /// IO operation failed
    IoError(std::io::Error),
    /// The simulation worker has stopped and no longer accepts commands
    DriverClosed,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::OutOfBounds { x, y } => write!(f, "Out of bounds coordinates: ({}, {})", x, y),
            SimError::NoNestSite => write!(f, "No valid nest site"),
            SimError::InvalidTerrain(msg) => write!(f, "Invalid terrain: {}", msg),
            SimError::IoError(err) => write!(f, "IO error: {}", err),
            SimError::DriverClosed => write!(f, "Simulation worker is no longer running"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
