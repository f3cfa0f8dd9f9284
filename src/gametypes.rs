mod enums;
mod error;
mod location;
mod pathnode;

pub use enums::*;
pub use error::{MazeError, Result};
pub use location::*;
pub use pathnode::*;

///Maze Data Mins
pub const MIN_MAZE_WIDTH: usize = 3;
pub const MIN_MAZE_DEPTH: usize = 3;

pub const DEFAULT_MAX_STEPS: usize = 100_000;
