//! Vertical ocean model levels

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::SelectionError;

/// All model levels, shallowest first
pub const LEVELS: [u32; 15] = [
    500, 1500, 2500, 3500, 4500,
    5500, 6500, 7500, 8500, 9500,
    10500, 11500, 12500, 13500, 14500,
];

/// A validated vertical level. Always one of [`LEVELS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    /// The shallowest level, selected on startup
    pub const DEFAULT: Level = Level(LEVELS[0]);

    pub fn new(value: u32) -> Result<Self, SelectionError> {
        if LEVELS.contains(&value) {
            Ok(Level(value))
        } else {
            Err(SelectionError::InvalidLevel { level: value })
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Display depth in metres
    pub fn depth_m(&self) -> u32 {
        (self.0 + 50) / 100
    }

    /// Iterate every level in order
    pub fn all() -> impl Iterator<Item = Level> {
        LEVELS.iter().map(|&v| Level(v))
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEFAULT
    }
}

impl TryFrom<u32> for Level {
    type Error = SelectionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
