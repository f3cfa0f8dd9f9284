use crate::{containers::*, gametypes::*, maps::Grid, search::reconstruct};
use log::{debug, info, trace, warn};
use slab::Slab;
use std::collections::VecDeque;

/// Step driven A* search over a [`Grid`].
///
/// The engine never loops on its own. [`begin_search`](Self::begin_search)
/// seeds the open set with the start node, then every call to
/// [`step`](Self::step) expands one node and selects the next one. The caller
/// decides when to stop, and the open and closed sets stay inspectable between
/// calls.
#[derive(Debug)]
pub struct SearchEngine<G> {
    grid: Option<G>,
    nodes: Slab<SearchNode>,
    open: Frontier,
    closed: ClosedSet,
    start: Option<NodeKey>,
    goal: Option<NodeKey>,
    last: Option<NodeKey>,
    state: SearchState,
    policy: RelaxPolicy,
    steps: usize,
}

impl<G: Grid> Default for SearchEngine<G> {
    fn default() -> Self {
        Self::new(RelaxPolicy::default())
    }
}

fn check_endpoint<G: Grid>(grid: &G, location: Location, name: &str) -> Result<()> {
    if !grid.in_bounds(location) {
        return Err(MazeError::invalid(format!(
            "{name} {location} is outside the searchable area of the {}x{} maze",
            grid.width(),
            grid.depth()
        )));
    }

    if grid.is_blocked(location) {
        return Err(MazeError::invalid(format!("{name} {location} is blocked")));
    }

    Ok(())
}

impl<G: Grid> SearchEngine<G> {
    pub fn new(policy: RelaxPolicy) -> Self {
        Self {
            grid: None,
            nodes: Slab::with_capacity(32),
            open: Frontier::new(),
            closed: ClosedSet::new(),
            start: None,
            goal: None,
            last: None,
            state: SearchState::Idle,
            policy,
            steps: 0,
        }
    }

    /// Starts a new search, throwing away whatever the previous one left behind.
    ///
    /// Fails with [`MazeError::InvalidArgument`] without touching the current
    /// state when either endpoint is outside the interior, blocked, or when both
    /// are the same cell.
    pub fn begin_search(&mut self, grid: G, start: Location, goal: Location) -> Result<NodeKey> {
        check_endpoint(&grid, start, "start")?;
        check_endpoint(&grid, goal, "goal")?;

        if start == goal {
            return Err(MazeError::invalid(format!(
                "start and goal are both {start}"
            )));
        }

        self.reset();

        let start_key = NodeKey(self.nodes.insert(SearchNode::endpoint(start)));
        let goal_key = NodeKey(self.nodes.insert(SearchNode::endpoint(goal)));

        self.open.push(start_key, start);
        self.grid = Some(grid);
        self.start = Some(start_key);
        self.goal = Some(goal_key);
        self.last = Some(start_key);
        self.state = SearchState::Searching;

        info!("Search started from {start} to {goal} ({:?})", self.policy);
        Ok(start_key)
    }

    /// Expands the node the previous step selected, or the start node on the first call.
    pub fn step(&mut self) -> Result<StepResult> {
        let current = self.last.ok_or(MazeError::NotStarted)?;
        self.step_from(current)
    }

    /// Expands `current_key` and moves the lowest `f` open node to the closed set.
    ///
    /// Once the search is done or out of nodes, the terminal result is returned
    /// again without touching any state.
    pub fn step_from(&mut self, current_key: NodeKey) -> Result<StepResult> {
        match self.state {
            SearchState::Idle => return Err(MazeError::NotStarted),
            SearchState::Done => {
                return self
                    .last
                    .map(StepResult::Done)
                    .ok_or(MazeError::NotStarted)
            }
            SearchState::NoPathFound => return Ok(StepResult::NoPath),
            SearchState::Searching => {}
        }

        let current = *self
            .nodes
            .get(current_key.0)
            .ok_or(MazeError::UnknownNode(current_key))?;
        let goal = self.goal_location()?;

        self.steps += 1;

        if current.location == goal {
            self.state = SearchState::Done;
            self.last = Some(current_key);
            info!(
                "Goal {goal} reached after {} steps, g = {:.2}",
                self.steps, current.g
            );
            return Ok(StepResult::Done(current_key));
        }

        let grid = self.grid.as_ref().ok_or(MazeError::NotStarted)?;
        let mut children = Vec::with_capacity(grid.directions().len());

        for dir in grid.directions() {
            let neighbor = current.location + *dir;

            if !grid.in_bounds(neighbor) || grid.is_blocked(neighbor) {
                continue;
            }

            if self.closed.contains(&neighbor) {
                continue;
            }

            children.push(neighbor);
        }

        for neighbor in children {
            let g = current.location.distance(neighbor) + current.g;
            let costs = Costs::new(g, neighbor.distance(goal));

            if !self.try_relax(neighbor, costs, current_key) {
                let node = SearchNode::new(neighbor, costs, Some(current_key));
                let key = NodeKey(self.nodes.insert(node));

                self.open.push(key, neighbor);
                trace!(
                    "Opened {neighbor} g = {:.2} h = {:.2} f = {:.2}",
                    costs.g,
                    costs.h,
                    costs.f
                );
            }
        }

        match self.open.pop_min(&self.nodes) {
            Some(key) => {
                let node = self.nodes[key.0];

                self.closed.insert(node.location, key);
                self.last = Some(key);
                debug!(
                    "Step {}: closed {} f = {:.2}, {} open, {} closed",
                    self.steps,
                    node.location,
                    node.f,
                    self.open.len(),
                    self.closed.len()
                );
                Ok(StepResult::Advanced(key))
            }
            None => {
                self.state = SearchState::NoPathFound;
                warn!(
                    "No path to {goal}: open set exhausted after {} steps",
                    self.steps
                );
                Ok(StepResult::NoPath)
            }
        }
    }

    /// Steps until the search ends or `max_steps` calls have been made.
    pub fn run(&mut self, max_steps: usize) -> Result<StepResult> {
        for _ in 0..max_steps {
            let result = self.step()?;

            if result.is_terminal() {
                return Ok(result);
            }
        }

        Err(MazeError::StepLimit(max_steps))
    }

    pub fn is_closed(&self, location: Location) -> bool {
        self.closed.contains(&location)
    }

    pub fn is_open(&self, location: Location) -> bool {
        self.open.contains(&location)
    }

    /// Applies the relaxation policy to `location` if it is already open.
    ///
    /// Returns false when the location is not open, so the caller has to add it.
    pub fn try_relax(&mut self, location: Location, costs: Costs, parent: NodeKey) -> bool {
        let key = match self.open.get(&location) {
            Some(key) => key,
            None => return false,
        };

        let node = &mut self.nodes[key.0];

        if self.policy.should_update(node, &costs) {
            trace!(
                "Relaxed {location} g {:.2} -> {:.2} via {parent}",
                node.g,
                costs.g
            );
            node.set_costs(costs, parent);
        }

        true
    }

    pub fn reconstruct(&self, from: NodeKey, start: NodeKey) -> Result<VecDeque<Location>> {
        reconstruct(&self.nodes, from, start)
    }

    /// Path from the start to the most recently selected node.
    pub fn path(&self) -> Result<VecDeque<Location>> {
        let start = self.start.ok_or(MazeError::NotStarted)?;
        let last = self.last.ok_or(MazeError::NotStarted)?;

        self.reconstruct(last, start)
    }

    /// Drops every node and returns to [`SearchState::Idle`].
    pub fn reset(&mut self) {
        self.grid = None;
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
        self.start = None;
        self.goal = None;
        self.last = None;
        self.state = SearchState::Idle;
        self.steps = 0;
    }

    fn goal_location(&self) -> Result<Location> {
        self.goal
            .and_then(|key| self.nodes.get(key.0))
            .map(|node| node.location)
            .ok_or(MazeError::NotStarted)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn policy(&self) -> RelaxPolicy {
        self.policy
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn grid(&self) -> Option<&G> {
        self.grid.as_ref()
    }

    pub fn start(&self) -> Option<NodeKey> {
        self.start
    }

    pub fn goal(&self) -> Option<NodeKey> {
        self.goal
    }

    pub fn last(&self) -> Option<NodeKey> {
        self.last
    }

    pub fn node(&self, key: NodeKey) -> Option<&SearchNode> {
        self.nodes.get(key.0)
    }

    /// Open nodes in frontier order.
    pub fn open_nodes(&self) -> impl Iterator<Item = (NodeKey, &SearchNode)> + '_ {
        self.open.iter().map(move |key| (key, &self.nodes[key.0]))
    }

    /// Closed nodes in the order they were selected.
    pub fn closed_nodes(&self) -> impl Iterator<Item = (NodeKey, &SearchNode)> + '_ {
        self.closed
            .iter()
            .map(move |(_, key)| (key, &self.nodes[key.0]))
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }
}

/// Runs a whole search in one call and returns the path from `start` to `goal`.
pub fn find_path<G: Grid>(
    grid: G,
    start: Location,
    goal: Location,
    policy: RelaxPolicy,
    max_steps: usize,
) -> Result<VecDeque<Location>> {
    let mut engine = SearchEngine::new(policy);

    engine.begin_search(grid, start, goal)?;

    match engine.run(max_steps)? {
        StepResult::Done(_) => engine.path(),
        _ => Err(MazeError::NoPathFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::Maze;
    use approx::assert_relative_eq;

    fn open_maze(width: usize, depth: usize) -> Maze {
        Maze::new(width, depth, NeighborSet::Four).unwrap()
    }

    #[test]
    fn test_begin_search() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::default();
        let start = engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();

        assert_eq!(engine.state(), SearchState::Searching);
        assert_eq!(engine.last(), Some(start));
        assert_eq!(engine.start(), Some(start));
        assert_eq!(engine.open_len(), 1);
        assert_eq!(engine.closed_len(), 0);
        assert!(engine.is_open(Location::new(1, 1)));

        let goal = engine.node(engine.goal().unwrap()).unwrap();
        assert_eq!(goal.location, Location::new(3, 3));
        assert_eq!(goal.costs(), Costs::default());
        assert_eq!(goal.parent, None);
    }

    #[test]
    fn test_invalid_begin_keeps_state() {
        let maze = "\
#####
#...#
#.#.#
#...#
#####
"
        .parse::<Maze>()
        .unwrap();
        let mut engine = SearchEngine::default();

        engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        let closed = engine.closed_len();

        let bad = [
            (Location::new(1, 1), Location::new(1, 1)),
            (Location::new(0, 1), Location::new(3, 3)),
            (Location::new(1, 1), Location::new(4, 3)),
            (Location::new(2, 2), Location::new(3, 3)),
            (Location::new(1, 1), Location::new(9, -3)),
        ];

        for (start, goal) in bad {
            assert!(matches!(
                engine.begin_search(&maze, start, goal),
                Err(MazeError::InvalidArgument { .. })
            ));
            assert_eq!(engine.state(), SearchState::Searching);
            assert_eq!(engine.closed_len(), closed);
        }
    }

    #[test]
    fn test_step_before_begin() {
        let mut engine: SearchEngine<&Maze> = SearchEngine::default();

        assert!(matches!(engine.step(), Err(MazeError::NotStarted)));
        assert!(matches!(engine.path(), Err(MazeError::NotStarted)));
        assert!(matches!(
            engine.step_from(NodeKey(0)),
            Err(MazeError::NotStarted)
        ));
    }

    #[test]
    fn test_first_step_closes_start() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::default();
        let start = engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();

        assert_eq!(engine.step().unwrap(), StepResult::Advanced(start));
        assert!(engine.is_closed(Location::new(1, 1)));
        assert!(!engine.is_open(Location::new(1, 1)));
        assert_eq!(
            engine
                .open_nodes()
                .map(|(_, node)| node.location)
                .collect::<Vec<_>>(),
            vec![Location::new(2, 1), Location::new(1, 2)]
        );

        let (_, right) = engine.open_nodes().next().unwrap();
        assert_relative_eq!(right.g, 1.0);
        assert_relative_eq!(right.h, 5.0_f32.sqrt());
        assert_relative_eq!(right.f, 1.0 + 5.0_f32.sqrt());
        assert_eq!(right.parent, Some(start));
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::default();

        engine
            .begin_search(&maze, Location::new(1, 1), Location::new(1, 2))
            .unwrap();

        let done = engine.run(100).unwrap();
        assert!(done.is_done());

        let closed = engine.closed_len();
        let steps = engine.steps();
        assert_eq!(engine.step().unwrap(), done);
        assert_eq!(engine.closed_len(), closed);
        assert_eq!(engine.steps(), steps);
        assert_eq!(
            engine.path().unwrap(),
            VecDeque::from(vec![Location::new(1, 1), Location::new(1, 2)])
        );
    }

    #[test]
    fn test_no_path_is_sticky() {
        let maze = "\
#####
#.#.#
#####
"
        .parse::<Maze>()
        .unwrap();
        let mut engine = SearchEngine::default();

        engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 1))
            .unwrap();

        assert!(matches!(engine.step().unwrap(), StepResult::Advanced(_)));
        assert_eq!(engine.step().unwrap(), StepResult::NoPath);
        assert_eq!(engine.state(), SearchState::NoPathFound);
        assert_eq!(engine.step().unwrap(), StepResult::NoPath);
        assert_eq!(engine.steps(), 2);
    }

    #[test]
    fn test_try_relax_and_is_closed_are_idempotent() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::default();
        let start = engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();
        engine.step().unwrap();

        let location = Location::new(2, 1);
        let costs = Costs::new(7.0, 2.0);

        assert!(engine.try_relax(location, costs, start));
        let once = *engine.node(engine.open.get(&location).unwrap()).unwrap();
        assert!(engine.try_relax(location, costs, start));
        let twice = *engine.node(engine.open.get(&location).unwrap()).unwrap();
        assert_eq!(once, twice);
        assert_relative_eq!(twice.f, 9.0);

        assert!(!engine.try_relax(Location::new(3, 3), costs, start));
        assert!(!engine.try_relax(Location::new(3, 3), costs, start));
        assert!(engine.is_closed(Location::new(1, 1)));
        assert!(engine.is_closed(Location::new(1, 1)));
        assert!(!engine.is_closed(Location::new(2, 1)));
    }

    #[test]
    fn test_only_if_better_keeps_cheaper_costs() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::new(RelaxPolicy::OnlyIfBetter);
        let start = engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();
        engine.step().unwrap();

        let location = Location::new(2, 1);
        assert!(engine.try_relax(location, Costs::new(7.0, 2.0), start));

        let node = engine.node(engine.open.get(&location).unwrap()).unwrap();
        assert_relative_eq!(node.g, 1.0);
    }

    #[test]
    fn test_step_from_unknown_node() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::default();

        engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();

        assert!(matches!(
            engine.step_from(NodeKey(40)),
            Err(MazeError::UnknownNode(NodeKey(40)))
        ));
    }

    #[test]
    fn test_reset() {
        let maze = open_maze(5, 5);
        let mut engine = SearchEngine::default();

        engine
            .begin_search(&maze, Location::new(1, 1), Location::new(3, 3))
            .unwrap();
        engine.run(3).unwrap_err();
        engine.reset();

        assert_eq!(engine.state(), SearchState::Idle);
        assert_eq!(engine.open_len(), 0);
        assert_eq!(engine.closed_len(), 0);
        assert!(engine.grid().is_none());
        assert!(engine.node(NodeKey(0)).is_none());
    }

    #[test]
    fn test_find_path() {
        let maze = open_maze(6, 3);
        let path = find_path(
            &maze,
            Location::new(1, 1),
            Location::new(4, 1),
            RelaxPolicy::LastWrite,
            DEFAULT_MAX_STEPS,
        )
        .unwrap();

        assert_eq!(
            path,
            (1..=4)
                .map(|x| Location::new(x, 1))
                .collect::<VecDeque<_>>()
        );
    }
}
