use crate::gametypes::*;
use slab::Slab;
use std::collections::VecDeque;

/// Walks parent links from `from` back to `start` and returns the cells in
/// walking order, start first and `from` last.
pub fn reconstruct(
    nodes: &Slab<SearchNode>,
    from: NodeKey,
    start: NodeKey,
) -> Result<VecDeque<Location>> {
    let start_node = nodes.get(start.0).ok_or(MazeError::UnknownNode(start))?;
    let mut current = *nodes.get(from.0).ok_or(MazeError::UnknownNode(from))?;
    let mut path = VecDeque::with_capacity(16);

    // A chain can never be longer than the slab, anything else is a cycle.
    for _ in 0..nodes.len() {
        if current.is_at(start_node) {
            path.push_front(start_node.location);
            return Ok(path);
        }

        path.push_front(current.location);

        current = match current.parent {
            Some(parent) => *nodes.get(parent.0).ok_or(MazeError::UnknownNode(parent))?,
            None => return Err(MazeError::ReconstructionBroken(current.location)),
        };
    }

    Err(MazeError::ReconstructionBroken(current.location))
}

/// Sum of step lengths along a path.
pub fn path_cost(path: &VecDeque<Location>) -> f32 {
    path.iter()
        .zip(path.iter().skip(1))
        .map(|(a, b)| a.distance(*b))
        .sum()
}
