use rand::seq::SliceRandom;

use crate::{
    disjoint_set::DisjointSet,
    generators::{GenerationOptions, GenerationStats, get_rng},
    maze::{Coord, Direction, Grid},
};

/// Wall edge between two adjacent cells
#[derive(Clone, Copy, Debug)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Every standing wall between two cells, each listed once (from its west or north side).
fn candidate_edges(grid: &Grid) -> Vec<Edge> {
    grid.coords()
        .flat_map(|coord| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter_map(move |d| grid[coord].neighbor(d))
                .map(move |n| Edge {
                    cell1: coord,
                    cell2: n,
                })
        })
        .filter(|edge| grid.has_wall(edge.cell1, edge.cell2))
        .collect()
}

pub fn randomized_kruskal(grid: &mut Grid, options: &GenerationOptions) -> GenerationStats {
    if grid.is_empty() {
        return GenerationStats::default();
    }

    let uf = DisjointSet::new(options.rank_policy);
    uf.make_set(&mut *grid);

    let mut stats = GenerationStats {
        sets: grid.len(),
        ..Default::default()
    };

    // Shuffle edges randomly
    let mut edges = candidate_edges(grid);
    let mut rng = get_rng(options.seed);
    edges.shuffle(&mut rng);
    tracing::debug!("[kruskal] {} candidate walls", edges.len());

    for edge in edges {
        if stats.sets == 1 || options.exhausted(stats.attempts) {
            break;
        }
        stats.attempts += 1;

        // If cells are not yet connected, remove the wall between them
        if uf.find(grid, edge.cell1) != uf.find(grid, edge.cell2) {
            grid.knock_down_wall(edge.cell1, edge.cell2);
            uf.union(grid, edge.cell1, edge.cell2);
            stats.passages += 1;
            stats.sets -= 1;
            tracing::debug!(
                "[kruskal] Knocked down wall between {:?} and {:?}, {} sets left",
                edge.cell1,
                edge.cell2,
                stats.sets
            );
        }
    }

    stats
}
