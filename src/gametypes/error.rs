use crate::gametypes::{Location, NodeKey};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid search argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("Open set exhausted before the goal was reached")]
    NoPathFound,
    #[error("Parent chain ended at {0} before reaching the start")]
    ReconstructionBroken(Location),
    #[error("No search has been started")]
    NotStarted,
    #[error("Node {0} does not exist in the current search")]
    UnknownNode(NodeKey),
    #[error("Step budget of {0} exhausted before the search finished")]
    StepLimit(usize),
    #[error("Failed to parse maze at line {line}: {message}")]
    MazeParse { line: usize, message: String },
    #[error("Maze needs at least two open cells to pick endpoints")]
    NoEndpoints,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl MazeError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        MazeError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        MazeError::MazeParse {
            line,
            message: message.into(),
        }
    }
}
