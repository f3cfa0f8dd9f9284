use crate::{gametypes::*, maps::Grid};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MapAttribute {
    #[default]
    Walkable,
    Blocked,
}

/// A rectangular maze of walkable and blocked cells.
///
/// The text form has one row per line, row `z = 0` first. `#` is a wall, `.` or
/// a space is walkable, and `S` / `G` mark walkable cells that serve as the
/// default start and goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    depth: usize,
    attribute: Vec<MapAttribute>,
    directions: Vec<Location>,
    start: Option<Location>,
    goal: Option<Location>,
}

impl Maze {
    /// An all walkable maze.
    pub fn new(width: usize, depth: usize, neighbors: NeighborSet) -> Result<Self> {
        if width < MIN_MAZE_WIDTH || depth < MIN_MAZE_DEPTH {
            return Err(MazeError::invalid(format!(
                "maze must be at least {MIN_MAZE_WIDTH}x{MIN_MAZE_DEPTH}, got {width}x{depth}"
            )));
        }

        Ok(Self {
            width,
            depth,
            attribute: vec![MapAttribute::Walkable; width * depth],
            directions: neighbors.offsets().to_vec(),
            start: None,
            goal: None,
        })
    }

    pub fn with_neighbors(mut self, neighbors: NeighborSet) -> Self {
        self.directions = neighbors.offsets().to_vec();
        self
    }

    pub fn with_directions(mut self, directions: Vec<Location>) -> Self {
        self.directions = directions;
        self
    }

    fn contains(&self, location: Location) -> bool {
        location.x >= 0
            && location.z >= 0
            && (location.x as usize) < self.width
            && (location.z as usize) < self.depth
    }

    pub fn attribute(&self, location: Location) -> Option<MapAttribute> {
        if !self.contains(location) {
            return None;
        }

        self.attribute.get(location.as_tile(self.width)).copied()
    }

    /// Returns false when the location lies outside the maze.
    pub fn set_attribute(&mut self, location: Location, attribute: MapAttribute) -> bool {
        if !self.contains(location) {
            return false;
        }

        let tile = location.as_tile(self.width);
        self.attribute[tile] = attribute;
        true
    }

    /// The `S` marker from the text form, if there was one.
    pub fn marked_start(&self) -> Option<Location> {
        self.start
    }

    /// The `G` marker from the text form, if there was one.
    pub fn marked_goal(&self) -> Option<Location> {
        self.goal
    }

    /// Every walkable cell of the searchable interior, row by row.
    pub fn open_cells(&self) -> Vec<Location> {
        let mut locations = Vec::new();

        for z in 1..self.depth as i32 - 1 {
            for x in 1..self.width as i32 - 1 {
                let location = Location::new(x, z);

                if !self.is_blocked(location) {
                    locations.push(location);
                }
            }
        }

        locations
    }
}

impl Grid for Maze {
    fn width(&self) -> usize {
        self.width
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn is_blocked(&self, location: Location) -> bool {
        !matches!(self.attribute(location), Some(MapAttribute::Walkable))
    }

    fn directions(&self) -> &[Location] {
        &self.directions
    }
}

pub fn load_maze(path: impl AsRef<Path>, neighbors: NeighborSet) -> Result<Maze> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let maze = data.parse::<Maze>()?.with_neighbors(neighbors);

    info!(
        "Loaded maze {} ({}x{}, {} open cells)",
        path.display(),
        maze.width,
        maze.depth,
        maze.open_cells().len()
    );

    Ok(maze)
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let (first_line, first_row) = rows
            .first()
            .copied()
            .ok_or_else(|| MazeError::parse(1, "maze is empty"))?;
        let width = first_row.chars().count();

        if rows.len() < MIN_MAZE_DEPTH {
            return Err(MazeError::parse(
                first_line,
                format!("expected at least {MIN_MAZE_DEPTH} rows, found {}", rows.len()),
            ));
        }

        let mut maze = Maze::new(width, rows.len(), NeighborSet::Four)
            .map_err(|e| MazeError::parse(first_line, e.to_string()))?;

        for (z, (line, row)) in rows.iter().enumerate() {
            let cells = row.chars().count();

            if cells != width {
                return Err(MazeError::parse(
                    *line,
                    format!("expected {width} cells, found {cells}"),
                ));
            }

            for (x, c) in row.chars().enumerate() {
                let location = Location::new(x as i32, z as i32);
                let attribute = match c {
                    '#' => MapAttribute::Blocked,
                    '.' | ' ' => MapAttribute::Walkable,
                    'S' | 'G' => {
                        let marker = if c == 'S' {
                            &mut maze.start
                        } else {
                            &mut maze.goal
                        };

                        if marker.is_some() {
                            return Err(MazeError::parse(
                                *line,
                                format!("duplicate '{c}' marker at column {}", x + 1),
                            ));
                        }

                        *marker = Some(location);
                        MapAttribute::Walkable
                    }
                    other => {
                        return Err(MazeError::parse(
                            *line,
                            format!("unexpected character {other:?} at column {}", x + 1),
                        ))
                    }
                };

                maze.set_attribute(location, attribute);
            }
        }

        Ok(maze)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.depth as i32 {
            for x in 0..self.width as i32 {
                let location = Location::new(x, z);
                let c = if Some(location) == self.start {
                    'S'
                } else if Some(location) == self.goal {
                    'G'
                } else if self.is_blocked(location) {
                    '#'
                } else {
                    '.'
                };

                write!(f, "{c}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
