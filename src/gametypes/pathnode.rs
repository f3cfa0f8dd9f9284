use super::*;
use std::fmt;

/// Handle of a [`SearchNode`] inside the engine's node slab.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub usize);

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The cost triple of a node. `f` is always `g + h`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Costs {
    pub g: f32,
    pub h: f32,
    pub f: f32,
}

impl Costs {
    pub fn new(g: f32, h: f32) -> Self {
        Self { g, h, f: g + h }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub g: f32,
    pub h: f32,
    pub f: f32,
    pub parent: Option<NodeKey>,
    pub location: Location,
}

impl SearchNode {
    pub fn new(location: Location, costs: Costs, parent: Option<NodeKey>) -> Self {
        Self {
            g: costs.g,
            h: costs.h,
            f: costs.f,
            parent,
            location,
        }
    }

    /// A node with zeroed costs and no parent, used for both search endpoints.
    pub fn endpoint(location: Location) -> Self {
        Self::new(location, Costs::default(), None)
    }

    pub fn costs(&self) -> Costs {
        Costs {
            g: self.g,
            h: self.h,
            f: self.f,
        }
    }

    pub fn set_costs(&mut self, costs: Costs, parent: NodeKey) {
        self.g = costs.g;
        self.h = costs.h;
        self.f = costs.g + costs.h;
        self.parent = Some(parent);
    }

    pub fn is_at(&self, other: &SearchNode) -> bool {
        self.location == other.location
    }
}
