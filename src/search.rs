mod engine;
mod pathfinding;

pub use engine::*;
pub use pathfinding::*;
