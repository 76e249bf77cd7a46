//! A concrete wall-and-weight maze stored as a flat cell buffer.
//!
//! [`GridMaze`] keeps, for every cell, one wall flag and one traversal weight
//! per [`Direction`]. Wall edits are symmetric (both cells sharing the wall
//! change together) and never open the outer border; weights are per side.

use mazegraph_core::{Direction, Point, Range};

use crate::maze::Maze;
#[cfg(feature = "serde")]
use crate::text::MazeError;

/// Walls and weights of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCell {
    /// Bit `d.index()` is set when direction `d` is walled.
    walls: u8,
    weights: [i32; 4],
}

impl MazeCell {
    /// Fully walled cell with unit weights.
    pub const CLOSED: Self = Self {
        walls: 0b1111,
        weights: [1; 4],
    };

    #[inline]
    pub fn has_wall(self, dir: Direction) -> bool {
        self.walls & (1 << dir.index()) != 0
    }

    #[inline]
    pub fn weight(self, dir: Direction) -> i32 {
        self.weights[dir.index()]
    }

    /// Number of open sides.
    pub fn openings(self) -> u32 {
        4 - self.walls.count_ones()
    }

    fn set_wall(&mut self, dir: Direction, wall: bool) {
        if wall {
            self.walls |= 1 << dir.index();
        } else {
            self.walls &= !(1 << dir.index());
        }
    }
}

impl Default for MazeCell {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// A rectangular maze of `width × height` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridMaze"))]
pub struct GridMaze {
    width: i32,
    height: i32,
    cells: Vec<MazeCell>,
}

impl GridMaze {
    /// Create a maze where every cell is walled on all four sides.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = Range::with_size(width, height).len();
        Self {
            width,
            height,
            cells: vec![MazeCell::CLOSED; len],
        }
    }

    /// Create a maze with every interior wall removed. Only the outer border
    /// remains.
    pub fn open(width: i32, height: i32) -> Self {
        let mut maze = Self::new(width, height);
        for p in maze.range() {
            maze.carve(p, Direction::Right);
            maze.carve(p, Direction::Below);
        }
        maze
    }

    /// The cells of the maze as a range anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// The cell at `p`, or `None` if out of range.
    pub fn cell(&self, p: Point) -> Option<MazeCell> {
        let i = self.range().index(p)?;
        Some(self.cells[i])
    }

    fn cell_mut(&mut self, p: Point) -> Option<&mut MazeCell> {
        let i = self.range().index(p)?;
        Some(&mut self.cells[i])
    }

    /// Whether the side `dir` of `p` is walled. Cells outside the maze are
    /// solid.
    pub fn has_wall(&self, p: Point, dir: Direction) -> bool {
        self.cell(p).is_none_or(|c| c.has_wall(dir))
    }

    /// Weight of leaving `p` through side `dir`, or `None` if out of range.
    pub fn weight_at(&self, p: Point, dir: Direction) -> Option<i32> {
        self.cell(p).map(|c| c.weight(dir))
    }

    /// Remove the wall between `p` and its neighbour in direction `dir`.
    ///
    /// Returns `false`, leaving the maze unchanged, if either cell is outside
    /// the maze.
    pub fn carve(&mut self, p: Point, dir: Direction) -> bool {
        self.set_wall(p, dir, false)
    }

    /// Put back the wall between `p` and its neighbour in direction `dir`.
    ///
    /// Returns `false` if either cell is outside the maze.
    pub fn build_wall(&mut self, p: Point, dir: Direction) -> bool {
        self.set_wall(p, dir, true)
    }

    fn set_wall(&mut self, p: Point, dir: Direction, wall: bool) -> bool {
        let q = dir.step(p);
        if !self.contains(p) || !self.contains(q) {
            return false;
        }
        if let Some(c) = self.cell_mut(p) {
            c.set_wall(dir, wall);
        }
        if let Some(c) = self.cell_mut(q) {
            c.set_wall(dir.opposite(), wall);
        }
        true
    }

    /// Set the weight of leaving `p` through side `dir`. The neighbour's
    /// side is not touched.
    ///
    /// Negative weights are stored as given; a graph built from the maze
    /// rejects them. Returns `false` if `p` is out of range.
    pub fn set_weight(&mut self, p: Point, dir: Direction, weight: i32) -> bool {
        match self.cell_mut(p) {
            Some(c) => {
                c.weights[dir.index()] = weight;
                true
            }
            None => false,
        }
    }

    /// Set the weight of both sides of the passage between `p` and its
    /// neighbour in direction `dir`.
    pub fn set_passage_weight(&mut self, p: Point, dir: Direction, weight: i32) -> bool {
        let q = dir.step(p);
        if !self.contains(p) || !self.contains(q) {
            return false;
        }
        self.set_weight(p, dir, weight);
        self.set_weight(q, dir.opposite(), weight);
        true
    }

    /// Total number of open sides over all cells. Every open passage counts
    /// twice, once from each side.
    pub fn openings(&self) -> usize {
        self.cells.iter().map(|c| c.openings() as usize).sum()
    }
}

/// Unchecked serialized form of a [`GridMaze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridMaze {
    width: i32,
    height: i32,
    cells: Vec<MazeCell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMaze> for GridMaze {
    type Error = MazeError;

    fn try_from(raw: RawGridMaze) -> Result<Self, MazeError> {
        let RawGridMaze {
            width,
            height,
            cells,
        } = raw;
        if width < 0 || height < 0 || Range::with_size(width, height).len() != cells.len() {
            return Err(MazeError::CellCount {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl Maze for GridMaze {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_wall(&self, p: Point, dir: Direction) -> bool {
        self.has_wall(p, dir)
    }

    fn weight(&self, p: Point, dir: Direction) -> i32 {
        self.weight_at(p, dir).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_fully_walled() {
        let m = GridMaze::new(3, 2);
        assert_eq!(m.range().len(), 6);
        assert_eq!(m.openings(), 0);
        for p in m.range() {
            for d in Direction::ALL {
                assert!(m.has_wall(p, d));
            }
        }
    }

    #[test]
    fn negative_dimensions_are_empty() {
        let m = GridMaze::new(-2, 5);
        assert_eq!(Maze::width(&m), 0);
        assert!(m.range().is_empty());
    }

    #[test]
    fn carve_is_symmetric() {
        let mut m = GridMaze::new(3, 3);
        assert!(m.carve(Point::new(1, 1), Direction::Above));
        assert!(!m.has_wall(Point::new(1, 1), Direction::Above));
        assert!(!m.has_wall(Point::new(1, 0), Direction::Below));
        assert_eq!(m.openings(), 2);
        assert!(m.build_wall(Point::new(1, 0), Direction::Below));
        assert!(m.has_wall(Point::new(1, 1), Direction::Above));
    }

    #[test]
    fn border_cannot_be_opened() {
        let mut m = GridMaze::new(2, 2);
        assert!(!m.carve(Point::new(0, 0), Direction::Left));
        assert!(!m.carve(Point::new(1, 1), Direction::Below));
        assert!(m.has_wall(Point::new(0, 0), Direction::Left));
        assert_eq!(m.openings(), 0);
    }

    #[test]
    fn open_keeps_only_the_border() {
        let m = GridMaze::open(3, 2);
        // 3x2 grid: 2 horizontal passages per row, 3 vertical ones.
        assert_eq!(m.openings(), 2 * (2 * 2 + 3));
        assert!(m.has_wall(Point::new(0, 0), Direction::Above));
        assert!(!m.has_wall(Point::new(0, 0), Direction::Right));
        assert!(!m.has_wall(Point::new(2, 0), Direction::Below));
    }

    #[test]
    fn weights_are_per_side() {
        let mut m = GridMaze::open(2, 1);
        let p = Point::new(0, 0);
        assert_eq!(m.weight_at(p, Direction::Right), Some(1));
        assert!(m.set_weight(p, Direction::Right, 5));
        assert_eq!(m.weight_at(p, Direction::Right), Some(5));
        assert_eq!(m.weight_at(Point::new(1, 0), Direction::Left), Some(1));
        assert!(m.set_passage_weight(p, Direction::Right, 7));
        assert_eq!(m.weight_at(Point::new(1, 0), Direction::Left), Some(7));
        assert!(!m.set_weight(Point::new(5, 5), Direction::Left, 1));
    }

    #[test]
    fn outside_is_solid() {
        let m = GridMaze::open(2, 2);
        assert!(m.has_wall(Point::new(-1, 0), Direction::Right));
        assert_eq!(m.weight_at(Point::new(9, 9), Direction::Left), None);
        assert_eq!(Maze::weight(&m, Point::new(9, 9), Direction::Left), 0);
    }
}
