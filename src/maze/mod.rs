pub mod cell;
pub mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;

/// Cell coordinate as `(x, y)`: column first, then row. North is toward `y = 0`.
pub type Coord = (u16, u16);
