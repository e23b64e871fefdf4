//! Union-find over the cells of a [`Grid`].
//!
//! The forest lives inside the cells themselves (`parent` and `rank`), so a
//! [`DisjointSet`] only carries the merge policy. Every operation takes the grid it
//! works on, which keeps independent grids fully independent.
//!
//! The default operations never fail: a missing cell yields `None` or a no-op.
//! [`DisjointSet::try_find`] and [`DisjointSet::try_union`] report the same
//! situations as [`MazeError`]s instead.

use crate::error::MazeError;
use crate::maze::{Coord, Grid};

/// How `union` maintains ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankPolicy {
    /// Classic union by rank: the lower-rank root goes under the higher one, and a tie
    /// bumps the surviving root's rank.
    #[default]
    ByRank,
    /// Ranks are never written and stay at 0, so every union hangs the first root under
    /// the second. Connectivity is identical to `ByRank`; only tree height differs.
    Frozen,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisjointSet {
    policy: RankPolicy,
}

impl DisjointSet {
    pub fn new(policy: RankPolicy) -> Self {
        DisjointSet { policy }
    }

    pub fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Makes every cell of the grid its own singleton set with rank 0.
    ///
    /// Passing `None` or a grid with no rows or columns does nothing. Calling it again
    /// discards all previous unions.
    pub fn make_set<'a>(&self, grid: impl Into<Option<&'a mut Grid>>) {
        let Some(grid) = grid.into() else {
            return;
        };
        if grid.is_empty() {
            return;
        }
        let coords = grid.coords();
        for (coord, cell) in coords.zip(grid.cells_mut()) {
            cell.parent = coord;
            cell.rank = 0;
        }
        tracing::debug!(
            "[disjoint set] Reset {}x{} grid to singleton sets",
            grid.width(),
            grid.height()
        );
    }

    /// Returns the root of the set containing `cell`, compressing the path on the way.
    ///
    /// Returns `None` if `cell` is `None` or names no cell of the grid.
    pub fn find(&self, grid: &mut Grid, cell: impl Into<Option<Coord>>) -> Option<Coord> {
        let start = cell.into().filter(|&c| grid.contains(c))?;

        let mut root = start;
        while grid[root].parent != root {
            root = grid[root].parent;
        }

        let mut node = start;
        while node != root {
            let next = grid[node].parent;
            grid[node].parent = root;
            node = next;
        }

        Some(root)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` without touching anything if either side names no cell or both
    /// are already in the same set, which for maze generation means the wall between
    /// them must stay up.
    pub fn union(
        &self,
        grid: &mut Grid,
        a: impl Into<Option<Coord>>,
        b: impl Into<Option<Coord>>,
    ) -> bool {
        let (Some(a), Some(b)) = (a.into(), b.into()) else {
            return false;
        };
        let (Some(root_a), Some(root_b)) = (self.find(grid, a), self.find(grid, b)) else {
            return false;
        };
        if root_a == root_b {
            return false; // Already in same set
        }

        match grid[root_a].rank.cmp(&grid[root_b].rank) {
            std::cmp::Ordering::Greater => {
                grid[root_b].parent = root_a;
            }
            std::cmp::Ordering::Less => {
                grid[root_a].parent = root_b;
            }
            std::cmp::Ordering::Equal => {
                grid[root_a].parent = root_b;
                if self.policy == RankPolicy::ByRank {
                    grid[root_b].rank = grid[root_b].rank.saturating_add(1);
                }
            }
        }
        true
    }

    /// Whether `a` and `b` are both cells of the grid and share a root.
    pub fn same_set(&self, grid: &mut Grid, a: Coord, b: Coord) -> bool {
        match (self.find(grid, a), self.find(grid, b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    /// Number of disjoint sets, i.e. cells that are their own parent.
    pub fn set_count(&self, grid: &Grid) -> usize {
        grid.coords()
            .filter(|&coord| grid[coord].parent == coord)
            .count()
    }

    /// Like [`DisjointSet::find`], but reports a missing cell as an error.
    pub fn try_find(&self, grid: &mut Grid, cell: Coord) -> Result<Coord, MazeError> {
        Self::check(grid, cell)?;
        self.find(grid, cell).ok_or(MazeError::OutOfBounds {
            coord: cell,
            width: grid.width(),
            height: grid.height(),
        })
    }

    /// Like [`DisjointSet::union`], but reports a missing cell as an error.
    /// `Ok(false)` still means the two cells were already connected.
    pub fn try_union(&self, grid: &mut Grid, a: Coord, b: Coord) -> Result<bool, MazeError> {
        Self::check(grid, a)?;
        Self::check(grid, b)?;
        Ok(self.union(grid, a, b))
    }

    fn check(grid: &Grid, coord: Coord) -> Result<(), MazeError> {
        if grid.is_empty() {
            return Err(MazeError::EmptyGrid);
        }
        if !grid.contains(coord) {
            return Err(MazeError::OutOfBounds {
                coord,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(())
    }
}
