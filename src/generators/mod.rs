use rand::{SeedableRng, rngs::StdRng};

mod kruskal;
mod recur_backtrack;

use kruskal::randomized_kruskal;
use recur_backtrack::recursive_backtrack;

use crate::disjoint_set::{DisjointSet, RankPolicy};
use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::RecurBacktrack, Generator::Kruskal];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

/// Knobs shared by every generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOptions {
    /// Seed for the random number generator. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Upper bound on candidate walls examined before giving up. `None` runs until the
    /// grid is a single set.
    pub max_attempts: Option<usize>,
    /// Rank maintenance used by the union-find bookkeeping.
    pub rank_policy: RankPolicy,
}

impl GenerationOptions {
    pub fn seeded(seed: u64) -> Self {
        GenerationOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn exhausted(&self, attempts: usize) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

/// What a generation run did to the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Walls knocked down.
    pub passages: usize,
    /// Disjoint sets left once generation stopped. `1` means every cell is reachable.
    pub sets: usize,
    /// Candidate walls examined.
    pub attempts: usize,
}

/// Carves a maze into `grid`, which must have its neighbors wired and every wall up.
///
/// A grid that already has a knocked-down wall or a visited/examined cell is left as is:
/// no wall is touched, and the returned stats only report how many sets its open walls
/// leave. Build a fresh grid to generate again.
pub fn generate_maze(
    grid: &mut Grid,
    generator: Generator,
    options: &GenerationOptions,
) -> GenerationStats {
    if !grid.is_untouched() {
        let uf = DisjointSet::new(options.rank_policy);
        uf.make_set(&mut *grid);
        let passages = grid.passages().collect::<Vec<_>>();
        for (a, b) in passages {
            uf.union(grid, a, b);
        }
        let stats = GenerationStats {
            sets: uf.set_count(grid),
            ..Default::default()
        };
        tracing::warn!(
            "[generate] {}x{} grid was already carved, skipping {}: {:?}",
            grid.width(),
            grid.height(),
            generator,
            stats
        );
        return stats;
    }

    let stats = match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, options),
        Generator::Kruskal => randomized_kruskal(grid, options),
    };
    tracing::info!(
        "[generate] {} on {}x{} grid: {:?}",
        generator,
        grid.width(),
        grid.height(),
        stats
    );
    stats
}
