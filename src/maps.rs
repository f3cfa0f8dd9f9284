mod endpoints;
mod grid;
mod maze;
mod overlay;

pub use endpoints::*;
pub use grid::*;
pub use maze::*;
pub use overlay::*;
