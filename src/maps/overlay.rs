use crate::{gametypes::*, maps::Grid, search::SearchEngine};
use std::{collections::VecDeque, fmt};

/// Text picture of a search in progress.
///
/// `S` start, `G` goal, `*` path, `x` closed, `o` open, `#` wall.
pub struct Overlay<'a, G> {
    engine: &'a SearchEngine<G>,
    path: Option<&'a VecDeque<Location>>,
}

impl<'a, G: Grid> Overlay<'a, G> {
    pub fn new(engine: &'a SearchEngine<G>) -> Self {
        Self { engine, path: None }
    }

    pub fn with_path(mut self, path: &'a VecDeque<Location>) -> Self {
        self.path = Some(path);
        self
    }

    fn endpoint(&self, key: Option<NodeKey>) -> Option<Location> {
        key.and_then(|key| self.engine.node(key))
            .map(|node| node.location)
    }

    fn cell(&self, grid: &G, location: Location) -> char {
        if Some(location) == self.endpoint(self.engine.start()) {
            'S'
        } else if Some(location) == self.endpoint(self.engine.goal()) {
            'G'
        } else if self.path.map_or(false, |path| path.contains(&location)) {
            '*'
        } else if self.engine.is_closed(location) {
            'x'
        } else if self.engine.is_open(location) {
            'o'
        } else if grid.is_blocked(location) {
            '#'
        } else {
            '.'
        }
    }
}

impl<'a, G: Grid> fmt::Display for Overlay<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = match self.engine.grid() {
            Some(grid) => grid,
            None => return Ok(()),
        };

        for z in 0..grid.depth() as i32 {
            for x in 0..grid.width() as i32 {
                write!(f, "{}", self.cell(grid, Location::new(x, z)))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
