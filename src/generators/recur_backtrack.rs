use crate::{
    disjoint_set::DisjointSet,
    generators::{GenerationOptions, GenerationStats, get_rng},
    maze::{Coord, Direction, Grid},
};
use rand::Rng;

/// Static neighbors of `coord` not yet reached by the carve.
fn unvisited_neighbors(grid: &Grid, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |d| grid[coord].neighbor(d))
        .filter(move |&n| grid.get(n).is_some_and(|c| !c.visited()))
}

pub fn recursive_backtrack(grid: &mut Grid, options: &GenerationOptions) -> GenerationStats {
    if grid.is_empty() {
        return GenerationStats::default();
    }

    let mut rng = get_rng(options.seed);
    let uf = DisjointSet::new(options.rank_policy);
    uf.make_set(&mut *grid);

    let mut stats = GenerationStats {
        sets: grid.len(),
        ..Default::default()
    };

    // Initialize the starting point
    let start: Coord = (
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    );
    grid[start].visit();
    tracing::debug!("[backtrack] Starting carve at {:?}", start);

    // Initialize the stack with the starting point
    // The stack will keep only visited cells
    let mut stack = vec![start];

    'carve: while let Some(cell) = stack.pop() {
        if unvisited_neighbors(grid, cell).next().is_none() {
            // Every direction from here is exhausted
            grid[cell].examine();
            continue;
        }

        // Probe random directions until one lands on an unvisited cell.
        // Border slots and visited cells are simply retried.
        let neighbor = loop {
            if options.exhausted(stats.attempts) {
                break 'carve;
            }
            stats.attempts += 1;
            match grid.get_random_neighbor(cell, &mut rng) {
                Some(n) if !grid[n].visited() => break n,
                _ => continue,
            }
        };

        grid.knock_down_wall(cell, neighbor);
        uf.union(grid, cell, neighbor);
        grid[neighbor].visit();
        stats.passages += 1;
        stats.sets -= 1;

        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);
        // Put the neighbor to carve the maze in that neighbor's direction
        stack.push(neighbor);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_backtrack_visits_and_examines_every_cell() {
        let mut grid = Grid::with_neighbors(6, 5);
        let stats = recursive_backtrack(&mut grid, &GenerationOptions::seeded(8));
        assert_eq!(stats.sets, 1);
        assert!(grid.cells().all(|c| c.visited()));
        assert!(grid.cells().all(|c| c.examined()));
        // Probing retries count as attempts too
        assert!(stats.attempts >= stats.passages);
    }

    #[test]
    fn test_recursive_backtrack_single_row() {
        let mut grid = Grid::with_neighbors(5, 1);
        let stats = recursive_backtrack(&mut grid, &GenerationOptions::seeded(2));
        assert_eq!(stats.passages, 4);
        // A corridor: the outer walls of every cell stay up
        assert!(grid.cells().all(|c| c.north() && c.south()));
        assert!(grid[(0, 0)].west());
        assert!(grid[(4, 0)].east());
        for x in 0..4 {
            assert!(!grid.has_wall((x, 0), (x + 1, 0)));
        }
    }

    #[test]
    fn test_unvisited_neighbors() {
        let mut grid = Grid::with_neighbors(3, 3);
        assert_eq!(unvisited_neighbors(&grid, (1, 1)).count(), 4);
        grid[(1, 0)].visit();
        grid[(0, 1)].visit();
        assert_eq!(
            unvisited_neighbors(&grid, (1, 1)).collect::<Vec<_>>(),
            vec![(2, 1), (1, 2)]
        );
        assert_eq!(unvisited_neighbors(&grid, (0, 0)).count(), 0);
    }
}
