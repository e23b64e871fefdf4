use crate::maze::Coord;

/// Failures reported by the checked union-find operations.
///
/// The default operations never produce these; they degrade to `None` or a no-op instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Cell {coord:?} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: u16,
        height: u16,
    },
    #[error("Grid has no cells")]
    EmptyGrid,
}
