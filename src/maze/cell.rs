use super::Coord;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Declaration order, matching the argument order of `set_neighbors` and `set_walls`.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Order in which open neighbors are reported by `Grid::get_neighbors`.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Step from `coord` one cell in this direction, or `None` on underflow/overflow.
    /// Bounds against a grid are the caller's concern.
    pub fn step(self, coord: Coord) -> Option<Coord> {
        let (x, y) = coord;
        match self {
            Direction::North => y.checked_sub(1).map(|y| (x, y)),
            Direction::East => x.checked_add(1).map(|x| (x, y)),
            Direction::South => y.checked_add(1).map(|y| (x, y)),
            Direction::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// A single maze cell.
///
/// The cell does not know its own coordinate; the owning [`Grid`](super::Grid) does.
/// Neighbor and parent links are coordinates into that grid and carry no ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Wall flags indexed by `Direction`. `true` means the wall is up.
    walls: [bool; 4],
    visited: bool,
    examined: bool,
    /// Static adjacency indexed by `Direction`. `None` marks the grid border.
    neighbors: [Option<Coord>; 4],
    pub(crate) parent: Coord,
    pub(crate) rank: u32,
}

impl Cell {
    /// Creates a cell with every wall up, both traversal flags cleared and no neighbors.
    /// `coord` seeds the parent link so the cell starts out as its own root.
    pub fn new(coord: Coord) -> Self {
        Cell {
            walls: [true; 4],
            visited: false,
            examined: false,
            neighbors: [None; 4],
            parent: coord,
            rank: 0,
        }
    }

    pub fn set_walls(&mut self, north: bool, east: bool, south: bool, west: bool) {
        self.walls = [north, east, south, west];
    }

    pub fn has_all_walls(&self) -> bool {
        self.walls.iter().all(|&up| up)
    }

    pub fn wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub(crate) fn clear_wall(&mut self, direction: Direction) -> bool {
        std::mem::replace(&mut self.walls[direction.index()], false)
    }

    pub fn north(&self) -> bool {
        self.wall(Direction::North)
    }

    pub fn east(&self) -> bool {
        self.wall(Direction::East)
    }

    pub fn south(&self) -> bool {
        self.wall(Direction::South)
    }

    pub fn west(&self) -> bool {
        self.wall(Direction::West)
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn examine(&mut self) {
        self.examined = true;
    }

    pub fn examined(&self) -> bool {
        self.examined
    }

    /// Assigns the four static neighbors. `None` marks a side on the grid border.
    pub fn set_neighbors(
        &mut self,
        north: Option<Coord>,
        east: Option<Coord>,
        south: Option<Coord>,
        west: Option<Coord>,
    ) {
        self.neighbors = [north, east, south, west];
    }

    pub fn neighbor(&self, direction: Direction) -> Option<Coord> {
        self.neighbors[direction.index()]
    }

    /// Direction in which `coord` sits relative to this cell, if it is one of the static neighbors.
    pub fn direction_of(&self, coord: Coord) -> Option<Direction> {
        Direction::SCAN_ORDER
            .into_iter()
            .find(|&d| self.neighbor(d) == Some(coord))
    }

    pub fn parent(&self) -> Coord {
        self.parent
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }
}
