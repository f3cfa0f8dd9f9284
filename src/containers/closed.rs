use crate::{containers::IndexMap, gametypes::*};

/// The closed set, kept in the order nodes were finalized.
#[derive(Debug, Default)]
pub struct ClosedSet {
    nodes: IndexMap<Location, NodeKey>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.nodes.contains_key(location)
    }

    pub fn get(&self, location: &Location) -> Option<NodeKey> {
        self.nodes.get(location).copied()
    }

    /// A location is only ever closed once. Returns false if it already was.
    pub fn insert(&mut self, location: Location, key: NodeKey) -> bool {
        if self.nodes.contains_key(&location) {
            return false;
        }

        self.nodes.insert(location, key);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, NodeKey)> + '_ {
        self.nodes.iter().map(|(location, key)| (*location, *key))
    }
}
