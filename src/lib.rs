#[macro_use]
extern crate derivative;

pub mod config;
pub mod containers;
pub mod gametypes;
pub mod maps;
pub mod search;

pub use config::{read_config, Config, LogLevel};
pub use gametypes::*;
pub use maps::{load_maze, pick_endpoints, Grid, MapAttribute, Maze, Overlay};
pub use search::{find_path, path_cost, reconstruct, SearchEngine};
