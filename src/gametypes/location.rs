use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add};

/// A cell of the maze. `x` runs along a row, `z` selects the row.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize, Serialize, Hash,
)]
pub struct Location {
    pub x: i32,
    pub z: i32,
}

impl Location {
    #[inline(always)]
    pub fn new(x: i32, z: i32) -> Location {
        Location { x, z }
    }

    /// Straight line distance between two cells.
    pub fn distance(&self, target: Location) -> f32 {
        let x = (self.x - target.x) as f32;
        let z = (self.z - target.z) as f32;

        (x * x + z * z).sqrt()
    }

    pub fn is_adjacent(&self, target: Location) -> bool {
        let x = (self.x - target.x).abs();
        let z = (self.z - target.z).abs();

        x <= 1 && z <= 1 && (x, z) != (0, 0)
    }

    //must be gaurenteed to fit within the Grid. Or errors will occur.
    #[inline]
    pub fn as_tile(&self, width: usize) -> usize {
        (self.z as usize) * width + self.x as usize
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, rhs: Location) -> Location {
        Location::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, z): (i32, i32)) -> Self {
        Location::new(x, z)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
