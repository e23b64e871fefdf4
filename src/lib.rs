pub mod disjoint_set;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;

pub use disjoint_set::{DisjointSet, RankPolicy};
pub use error::MazeError;
pub use maze::{Cell, Coord, Direction, Grid};
