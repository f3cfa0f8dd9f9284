use crate::gametypes::*;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    #[default]
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

impl LogLevel {
    pub fn parse_enum(&self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Deserialize, Debug, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "String::from(\"data/mazes/sample.txt\")"))]
    pub maze: String,
    pub neighbors: NeighborSet,
    pub relax_policy: RelaxPolicy,
    /// Falls back to the maze's `S` marker, then to a random open cell.
    pub start: Option<Location>,
    /// Falls back to the maze's `G` marker, then to a random open cell.
    pub goal: Option<Location>,
    /// Seeds endpoint selection. Unset means a fresh seed every run.
    pub seed: Option<u64>,
    #[derivative(Default(value = "DEFAULT_MAX_STEPS"))]
    pub max_steps: usize,
    pub level_filter: LogLevel,
}

pub fn read_config(path: impl AsRef<Path>) -> Result<Config> {
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}
