use rand::Rng;

use super::Coord;
use super::cell::{Cell, Direction};

/// Row-major storage for every cell of a maze.
///
/// Operations that touch two cells at once (wall checks, wall removal) live here
/// instead of on `Cell`, since only the grid can hand out both cells together.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a `width` x `height` grid with every wall up and no neighbors wired.
    pub fn new(width: u16, height: u16) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new((x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Creates a grid and wires the static north/east/south/west adjacency of every cell.
    pub fn with_neighbors(width: u16, height: u16) -> Self {
        let mut grid = Grid::new(width, height);
        grid.wire_neighbors();
        grid
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// A grid with zero rows or zero columns has no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.contains(coord)
            .then(|| &self.data[self.ravel_index(coord.0, coord.1)])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.contains(coord) {
            let idx = self.ravel_index(coord.0, coord.1);
            Some(&mut self.data[idx])
        } else {
            None
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.data.iter_mut()
    }

    /// Sets the static neighbors of the cell at `coord`. Does nothing if `coord` is outside the grid.
    /// A neighbor outside the grid is stored as absent.
    pub fn set_neighbors(
        &mut self,
        coord: Coord,
        north: Option<Coord>,
        east: Option<Coord>,
        south: Option<Coord>,
        west: Option<Coord>,
    ) {
        let [north, east, south, west] =
            [north, east, south, west].map(|n| n.filter(|&c| self.contains(c)));
        if let Some(cell) = self.get_mut(coord) {
            cell.set_neighbors(north, east, south, west);
        }
    }

    /// Wires every cell to the cells directly north, east, south and west of it.
    /// Sides on the border of the grid are left absent.
    pub fn wire_neighbors(&mut self) {
        for coord in self.coords() {
            let [north, east, south, west] = Direction::ALL.map(|d| {
                d.step(coord).filter(|&c| self.contains(c))
            });
            self.set_neighbors(coord, north, east, south, west);
        }
        tracing::debug!(
            "[grid] Wired neighbors for {}x{} grid",
            self.width,
            self.height
        );
    }

    /// Whether a wall still stands between `coord` and `neighbor`.
    ///
    /// Both sides must report the wall. Returns `false` if `neighbor` is not one of the
    /// static neighbors of `coord`.
    pub fn has_wall(&self, coord: Coord, neighbor: Coord) -> bool {
        let Some((direction, other)) = self.facing(coord, neighbor) else {
            return false;
        };
        let near = self[coord].wall(direction);
        let far = other.wall(direction.opposite());
        if near != far {
            tracing::warn!(
                "[grid] Wall between {:?} and {:?} disagrees: {} side is {}, {} side is {}",
                coord,
                neighbor,
                direction,
                near,
                direction.opposite(),
                far
            );
        }
        near && far
    }

    /// Knocks down the wall between `coord` and `neighbor`, clearing the flag on both sides.
    ///
    /// Does nothing if `neighbor` is not one of the static neighbors of `coord`.
    /// Returns `true` if either side had its wall up.
    pub fn knock_down_wall(&mut self, coord: Coord, neighbor: Coord) -> bool {
        let Some((direction, _)) = self.facing(coord, neighbor) else {
            return false;
        };
        let near = self[coord].clear_wall(direction);
        let far = self[neighbor].clear_wall(direction.opposite());
        near || far
    }

    /// Neighbors reachable from `coord` through a knocked-down wall, in north, south, east,
    /// west order. Empty if `coord` is outside the grid.
    pub fn get_neighbors(&self, coord: Coord) -> Vec<Coord> {
        let Some(cell) = self.get(coord) else {
            return Vec::new();
        };
        Direction::SCAN_ORDER
            .into_iter()
            .filter_map(|d| cell.neighbor(d))
            .filter(|&n| self.contains(n) && !self.has_wall(coord, n))
            .collect()
    }

    /// One of the four neighbor slots of `coord`, picked uniformly by direction.
    ///
    /// The pick is not filtered by walls: a border slot yields `None`, as does a `coord` outside
    /// the grid or a slot naming no cell of the grid.
    pub fn get_random_neighbor<R: Rng>(&self, coord: Coord, rng: &mut R) -> Option<Coord> {
        let cell = self.get(coord)?;
        let direction = Direction::SCAN_ORDER[rng.random_range(0..Direction::SCAN_ORDER.len())];
        cell.neighbor(direction).filter(|&n| self.contains(n))
    }

    /// The first open neighbor of `coord` (see [`Grid::get_neighbors`]) whose own walls are all up.
    pub fn neighbor_with_walls(&self, coord: Coord) -> Option<Coord> {
        self.get_neighbors(coord)
            .into_iter()
            .find(|&n| self[n].has_all_walls())
    }

    /// Pairs of cells joined by a knocked-down wall, each listed once from its west or north side.
    pub fn passages(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.coords()
            .flat_map(move |coord| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter_map(move |d| self[coord].neighbor(d).map(|n| (coord, n)))
            })
            .filter(move |&(coord, n)| self.contains(n) && !self.has_wall(coord, n))
    }

    /// Number of interior walls that have been knocked down.
    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    /// No wall knocked down and no cell visited or examined yet.
    pub fn is_untouched(&self) -> bool {
        self.passages().next().is_none() && self.cells().all(|c| !c.visited() && !c.examined())
    }

    /// Resolves `neighbor` to the side of `coord` it sits on and borrows its cell.
    fn facing(&self, coord: Coord, neighbor: Coord) -> Option<(Direction, &Cell)> {
        let direction = self.get(coord)?.direction_of(neighbor)?;
        let other = self.get(neighbor)?;
        Some((direction, other))
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.contains(index),
            "Cell {:?} is outside the {}x{} grid",
            index,
            self.width,
            self.height
        );
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        assert!(
            self.contains(index),
            "Cell {:?} is outside the {}x{} grid",
            index,
            self.width,
            self.height
        );
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.len(), 12);
        grid[(2, 1)].visit();
        assert!(grid[(2, 1)].visited());
        assert_eq!(grid[(2, 1)].parent(), (2, 1));
        assert!(grid.get((4, 0)).is_none());
        assert!(grid.get((0, 3)).is_none());
    }

    #[test]
    fn test_empty_grid() {
        assert!(Grid::new(0, 5).is_empty());
        assert!(Grid::new(5, 0).is_empty());
        assert!(!Grid::new(1, 1).is_empty());
        assert_eq!(Grid::new(0, 5).coords().count(), 0);
    }

    #[test]
    fn test_wire_neighbors_borders() {
        let grid = Grid::with_neighbors(3, 3);
        let corner = &grid[(0, 0)];
        assert_eq!(corner.neighbor(Direction::North), None);
        assert_eq!(corner.neighbor(Direction::West), None);
        assert_eq!(corner.neighbor(Direction::East), Some((1, 0)));
        assert_eq!(corner.neighbor(Direction::South), Some((0, 1)));

        let center = &grid[(1, 1)];
        assert_eq!(center.neighbor(Direction::North), Some((1, 0)));
        assert_eq!(center.neighbor(Direction::East), Some((2, 1)));
        assert_eq!(center.neighbor(Direction::South), Some((1, 2)));
        assert_eq!(center.neighbor(Direction::West), Some((0, 1)));

        let far = &grid[(2, 2)];
        assert_eq!(far.neighbor(Direction::East), None);
        assert_eq!(far.neighbor(Direction::South), None);
    }

    #[test]
    fn test_knock_down_wall_is_symmetric() {
        let mut grid = Grid::with_neighbors(3, 3);
        assert!(grid.has_wall((1, 1), (1, 0)));
        assert!(grid.knock_down_wall((1, 1), (1, 0)));
        assert!(!grid[(1, 1)].north());
        assert!(!grid[(1, 0)].south());
        assert!(!grid.has_wall((1, 1), (1, 0)));
        assert!(!grid.has_wall((1, 0), (1, 1)));
        // Knocking down the same wall again changes nothing
        assert!(!grid.knock_down_wall((1, 0), (1, 1)));
        // Other walls are untouched
        assert!(grid[(1, 1)].east());
        assert!(grid[(1, 1)].south());
        assert!(grid[(1, 1)].west());
    }

    #[test]
    fn test_knock_down_wall_non_neighbor_is_noop() {
        let mut grid = Grid::with_neighbors(3, 3);
        let before = grid.clone();
        assert!(!grid.knock_down_wall((0, 0), (2, 2)));
        assert!(!grid.knock_down_wall((0, 0), (0, 0)));
        assert!(!grid.knock_down_wall((0, 0), (9, 9)));
        assert!(!grid.knock_down_wall((9, 9), (0, 0)));
        assert_eq!(grid, before);
        assert!(!grid.has_wall((0, 0), (2, 2)));
    }

    #[test]
    fn test_unwired_grid_has_no_neighbors() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.knock_down_wall((0, 0), (1, 0)));
        assert!(!grid.has_wall((0, 0), (1, 0)));
        assert!(grid[(0, 0)].has_all_walls());
    }

    #[test]
    fn test_get_neighbors_only_open() {
        let mut grid = Grid::with_neighbors(3, 3);
        assert!(grid.get_neighbors((1, 1)).is_empty());
        grid.knock_down_wall((1, 1), (0, 1));
        grid.knock_down_wall((1, 1), (1, 2));
        grid.knock_down_wall((1, 1), (1, 0));
        // Fixed north, south, east, west order
        assert_eq!(grid.get_neighbors((1, 1)), vec![(1, 0), (1, 2), (0, 1)]);
        assert_eq!(grid.get_neighbors((1, 0)), vec![(1, 1)]);
        assert!(grid.get_neighbors((7, 7)).is_empty());
    }

    #[test]
    fn test_neighbor_with_walls() {
        let mut grid = Grid::with_neighbors(3, 1);
        // Nothing is open yet
        assert_eq!(grid.neighbor_with_walls((1, 0)), None);
        // An open neighbor has lost the shared wall, so it never has all its walls
        grid.knock_down_wall((1, 0), (2, 0));
        assert_eq!(grid.neighbor_with_walls((1, 0)), None);
        // Only reachable when one side alone reports the wall down
        grid[(1, 0)].set_walls(true, false, true, false);
        grid[(2, 0)].set_walls(true, true, true, true);
        assert_eq!(grid.neighbor_with_walls((1, 0)), Some((2, 0)));
    }

    #[test]
    fn test_has_wall_requires_both_sides() {
        let mut grid = Grid::with_neighbors(2, 1);
        grid[(0, 0)].set_walls(true, false, true, true);
        assert!(!grid.has_wall((0, 0), (1, 0)));
        assert!(!grid.has_wall((1, 0), (0, 0)));
        assert!(grid[(1, 0)].west());
    }

    #[test]
    fn test_get_random_neighbor() {
        let grid = Grid::with_neighbors(3, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let picks = (0..200)
            .map(|_| grid.get_random_neighbor((1, 1), &mut rng))
            .collect::<Vec<_>>();
        // Interior cell: every pick is a real neighbor and all four show up
        assert!(picks.iter().all(|p| p.is_some()));
        for n in [(1, 0), (2, 1), (1, 2), (0, 1)] {
            assert!(picks.contains(&Some(n)));
        }

        // Corner cell: border slots come back as None
        let picks = (0..200)
            .map(|_| grid.get_random_neighbor((0, 0), &mut rng))
            .collect::<Vec<_>>();
        assert!(picks.contains(&None));
        assert!(picks.contains(&Some((1, 0))));
        assert!(picks.contains(&Some((0, 1))));

        assert_eq!(grid.get_random_neighbor((3, 3), &mut rng), None);
    }

    #[test]
    fn test_out_of_grid_neighbor_is_absent() {
        let mut grid = Grid::with_neighbors(3, 3);
        grid.set_neighbors((0, 0), None, Some((9, 9)), Some((0, 1)), None);
        assert_eq!(grid[(0, 0)].neighbor(Direction::East), None);
        assert!(grid.get_neighbors((0, 0)).is_empty());
        assert_eq!(grid.neighbor_with_walls((0, 0)), None);
        assert!(!grid.knock_down_wall((0, 0), (9, 9)));

        // Wiring the cell directly bypasses the grid, but lookups still skip the bad slot
        grid[(0, 0)].set_neighbors(None, Some((9, 9)), Some((0, 1)), None);
        grid[(0, 0)].set_walls(true, false, true, true);
        assert!(grid.get_neighbors((0, 0)).is_empty());
        assert_eq!(grid.neighbor_with_walls((0, 0)), None);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_index_out_of_grid_panics() {
        let grid = Grid::new(3, 3);
        // Would otherwise alias (0, 1)
        let _ = &grid[(3, 0)];
    }

    #[test]
    fn test_is_untouched() {
        let mut grid = Grid::with_neighbors(2, 2);
        assert!(grid.is_untouched());
        grid[(1, 1)].visit();
        assert!(!grid.is_untouched());

        let mut grid = Grid::with_neighbors(2, 2);
        grid.knock_down_wall((0, 0), (0, 1));
        assert!(!grid.is_untouched());
        assert_eq!(grid.passages().collect::<Vec<_>>(), vec![((0, 0), (0, 1))]);
    }

    #[test]
    fn test_passage_count() {
        let mut grid = Grid::with_neighbors(3, 2);
        assert_eq!(grid.passage_count(), 0);
        grid.knock_down_wall((0, 0), (1, 0));
        grid.knock_down_wall((1, 1), (1, 0));
        assert_eq!(grid.passage_count(), 2);
        grid.knock_down_wall((1, 0), (0, 0));
        assert_eq!(grid.passage_count(), 2);
    }
}
