use crate::{containers::HashMap, gametypes::*};
use slab::Slab;
use std::collections::VecDeque;

/// The open set.
///
/// Keeps the handles in a persistent order: new discoveries are appended, and
/// every selection stable-sorts that order by `f` before taking the front.
/// Nodes that tie on `f` therefore keep the order they already had.
#[derive(Debug, Default)]
pub struct Frontier {
    order: VecDeque<NodeKey>,
    index: HashMap<Location, NodeKey>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(location)
    }

    pub fn get(&self, location: &Location) -> Option<NodeKey> {
        self.index.get(location).copied()
    }

    /// Returns false if the location was already open, in which case nothing changes.
    pub fn push(&mut self, key: NodeKey, location: Location) -> bool {
        if self.index.contains_key(&location) {
            return false;
        }

        self.index.insert(location, key);
        self.order.push_back(key);
        true
    }

    /// Removes and returns the node with the lowest `f`.
    pub fn pop_min(&mut self, nodes: &Slab<SearchNode>) -> Option<NodeKey> {
        self.order
            .make_contiguous()
            .sort_by(|a, b| nodes[a.0].f.total_cmp(&nodes[b.0].f));

        let key = self.order.pop_front()?;
        self.index.remove(&nodes[key.0].location);
        Some(key)
    }

    /// Handles in their current frontier order.
    pub fn iter(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(nodes: &mut Slab<SearchNode>, open: &mut Frontier, x: i32, f: f32) -> NodeKey {
        let location = Location::new(x, 0);
        let key = NodeKey(nodes.insert(SearchNode::new(location, Costs::new(f, 0.0), None)));
        assert!(open.push(key, location));
        key
    }

    #[test]
    fn test_pop_min_is_stable() {
        let mut nodes = Slab::new();
        let mut open = Frontier::new();
        let a = insert(&mut nodes, &mut open, 1, 3.0);
        let b = insert(&mut nodes, &mut open, 2, 2.0);
        let c = insert(&mut nodes, &mut open, 3, 3.0);
        let d = insert(&mut nodes, &mut open, 4, 2.0);

        assert_eq!(open.pop_min(&nodes), Some(b));
        assert_eq!(open.pop_min(&nodes), Some(d));
        assert_eq!(open.pop_min(&nodes), Some(a));
        assert_eq!(open.pop_min(&nodes), Some(c));
        assert_eq!(open.pop_min(&nodes), None);
        assert!(open.is_empty());
    }

    #[test]
    fn test_sorted_order_persists() {
        let mut nodes = Slab::new();
        let mut open = Frontier::new();
        let a = insert(&mut nodes, &mut open, 1, 1.0);
        let b = insert(&mut nodes, &mut open, 2, 5.0);
        let c = insert(&mut nodes, &mut open, 3, 4.0);

        assert_eq!(open.pop_min(&nodes), Some(a));
        assert_eq!(open.iter().collect::<Vec<_>>(), vec![c, b]);

        // b and a newcomer now tie with c; c was ahead of b after the last sort.
        nodes[b.0].f = 4.0;
        let d = insert(&mut nodes, &mut open, 4, 4.0);
        assert_eq!(open.pop_min(&nodes), Some(c));
        assert_eq!(open.pop_min(&nodes), Some(b));
        assert_eq!(open.pop_min(&nodes), Some(d));
    }

    #[test]
    fn test_lookup_by_location() {
        let mut nodes = Slab::new();
        let mut open = Frontier::new();
        let a = insert(&mut nodes, &mut open, 1, 1.0);

        assert!(open.contains(&Location::new(1, 0)));
        assert_eq!(open.get(&Location::new(1, 0)), Some(a));
        assert!(!open.push(NodeKey(99), Location::new(1, 0)));
        assert_eq!(open.len(), 1);

        open.pop_min(&nodes);
        assert!(!open.contains(&Location::new(1, 0)));

        insert(&mut nodes, &mut open, 2, 1.0);
        open.clear();
        assert!(open.is_empty());
        assert_eq!(open.get(&Location::new(2, 0)), None);
    }
}
