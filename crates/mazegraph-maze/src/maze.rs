use mazegraph_core::{Direction, Point};

/// Read-only view of a rectangular maze, as consumed by
/// [`MazeGraph`](crate::MazeGraph).
///
/// Cells are addressed `(0, 0)` to `(width - 1, height - 1)`. Each side of a
/// cell is asked about separately, so the two sides of a passage may answer
/// differently.
pub trait Maze {
    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    /// Whether a wall blocks the move from `p` in direction `dir`.
    fn is_wall(&self, p: Point, dir: Direction) -> bool;

    /// Cost of moving from `p` in direction `dir`. Only asked for open sides.
    fn weight(&self, p: Point, dir: Direction) -> i32;
}
