use crate::gametypes::*;
use serde::{Deserialize, Serialize};

/// Where the engine is in its search lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Done,
    NoPathFound,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Done | SearchState::NoPathFound)
    }
}

/// Outcome of a single expansion step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The node selected from the open set. It is the current node for the next step.
    Advanced(NodeKey),
    /// The expanded node was the goal.
    Done(NodeKey),
    /// The open set ran dry before the goal was reached.
    NoPath,
}

impl StepResult {
    pub fn node(&self) -> Option<NodeKey> {
        match self {
            StepResult::Advanced(key) | StepResult::Done(key) => Some(*key),
            StepResult::NoPath => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, StepResult::Done(_))
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepResult::Advanced(_))
    }
}

/// What happens when a location already in the open set is discovered again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelaxPolicy {
    /// Overwrite costs and parent on every rediscovery.
    #[default]
    LastWrite,
    /// Overwrite only when the new `g` is strictly smaller.
    OnlyIfBetter,
}

impl RelaxPolicy {
    pub fn should_update(&self, current: &SearchNode, candidate: &Costs) -> bool {
        match self {
            RelaxPolicy::LastWrite => true,
            RelaxPolicy::OnlyIfBetter => candidate.g < current.g,
        }
    }
}

/// Neighbor offset sets a maze can be searched with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NeighborSet {
    #[default]
    Four,
    Eight,
}

const FOUR_DIRS: [Location; 4] = [
    Location { x: 1, z: 0 },
    Location { x: 0, z: 1 },
    Location { x: -1, z: 0 },
    Location { x: 0, z: -1 },
];

const EIGHT_DIRS: [Location; 8] = [
    Location { x: 1, z: 0 },
    Location { x: 0, z: 1 },
    Location { x: -1, z: 0 },
    Location { x: 0, z: -1 },
    Location { x: 1, z: 1 },
    Location { x: -1, z: 1 },
    Location { x: -1, z: -1 },
    Location { x: 1, z: -1 },
];

impl NeighborSet {
    pub fn offsets(&self) -> &'static [Location] {
        match self {
            NeighborSet::Four => &FOUR_DIRS,
            NeighborSet::Eight => &EIGHT_DIRS,
        }
    }
}
