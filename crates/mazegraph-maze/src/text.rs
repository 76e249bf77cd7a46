//! ASCII representation of a [`GridMaze`].
//!
//! A `w × h` maze is drawn on a `(2w + 1) × (2h + 1)` character grid:
//!
//! ```text
//! +-+-+-+
//! |   | |
//! +-+ + +
//! |    3|
//! +-+-+-+
//! ```
//!
//! Even rows and columns meet at `+` corners. Wall slots hold `-`
//! (horizontal) or `|` (vertical); a space in a wall slot is an open
//! passage of weight 1 and a digit is an open passage whose weight, in both
//! directions, is that digit. Cell slots (odd row, odd column) may hold any
//! character; [`GridMaze::render`] uses them for markers. The outer border
//! must be closed.

use std::fmt;

use mazegraph_core::{Direction, Point};

use crate::gridmaze::GridMaze;

/// Errors that can occur when reading a maze from text or, with the
/// `serde` feature, from a serialized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text has no lines.
    Empty,
    /// Line `line` (0-based) is not as wide as the first one.
    InconsistentWidth { line: usize },
    /// Line count or width is even, or smaller than 3.
    BadShape { width: usize, height: usize },
    /// An unexpected character, at text column `pos.x`, line `pos.y`.
    InvalidChar { ch: char, pos: Point },
    /// The outer border has a gap at text position `pos`.
    OpenBorder { pos: Point },
    /// A serialized maze whose cell list does not fit its dimensions.
    CellCount {
        width: i32,
        height: i32,
        cells: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze: empty text"),
            Self::InconsistentWidth { line } => {
                write!(f, "maze: line {line} has inconsistent width")
            }
            Self::BadShape { width, height } => write!(
                f,
                "maze: {width}x{height} characters is not a (2w+1)x(2h+1) drawing"
            ),
            Self::InvalidChar { ch, pos } => write!(
                f,
                "maze contains invalid character \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
            Self::OpenBorder { pos } => {
                write!(f, "maze: border is open at ({}, {})", pos.x, pos.y)
            }
            Self::CellCount {
                width,
                height,
                cells,
            } => write!(f, "maze: {width}x{height} cannot hold {cells} cells"),
        }
    }
}

impl std::error::Error for MazeError {}

/// What a wall slot holds.
enum Slot {
    Wall,
    Open(Option<i32>),
}

fn slot(ch: char, wall: char, pos: Point) -> Result<Slot, MazeError> {
    if ch == wall {
        return Ok(Slot::Wall);
    }
    if ch == ' ' {
        return Ok(Slot::Open(None));
    }
    match ch.to_digit(10) {
        Some(d) => Ok(Slot::Open(Some(d as i32))),
        None => Err(MazeError::InvalidChar { ch, pos }),
    }
}

impl GridMaze {
    /// Parse a maze from its ASCII drawing.
    ///
    /// Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<Vec<char>> = s
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.chars().collect())
            .collect();
        let Some(first) = lines.first() else {
            return Err(MazeError::Empty);
        };
        let cols = first.len();
        if let Some(line) = lines.iter().position(|l| l.len() != cols) {
            return Err(MazeError::InconsistentWidth { line });
        }
        let rows = lines.len();
        if rows < 3 || cols < 3 || rows % 2 == 0 || cols % 2 == 0 {
            return Err(MazeError::BadShape {
                width: cols,
                height: rows,
            });
        }

        let w = ((cols - 1) / 2) as i32;
        let h = ((rows - 1) / 2) as i32;
        let mut maze = GridMaze::new(w, h);

        for (r, line) in lines.iter().enumerate() {
            for (c, &ch) in line.iter().enumerate() {
                let pos = Point::new(c as i32, r as i32);
                match (r % 2 == 0, c % 2 == 0) {
                    (true, true) => {
                        if ch != '+' {
                            return Err(MazeError::InvalidChar { ch, pos });
                        }
                    }
                    // Wall above cell (x, y).
                    (true, false) => {
                        let cell = Point::new((c as i32 - 1) / 2, r as i32 / 2);
                        let border = cell.y == 0 || cell.y == h;
                        let s = slot(ch, '-', pos)?;
                        maze.apply_slot(s, cell, Direction::Above, border, pos)?;
                    }
                    // Wall left of cell (x, y).
                    (false, true) => {
                        let cell = Point::new(c as i32 / 2, (r as i32 - 1) / 2);
                        let border = cell.x == 0 || cell.x == w;
                        let s = slot(ch, '|', pos)?;
                        maze.apply_slot(s, cell, Direction::Left, border, pos)?;
                    }
                    (false, false) => {}
                }
            }
        }
        Ok(maze)
    }

    fn apply_slot(
        &mut self,
        slot: Slot,
        cell: Point,
        dir: Direction,
        border: bool,
        pos: Point,
    ) -> Result<(), MazeError> {
        let Slot::Open(weight) = slot else {
            return Ok(());
        };
        if border {
            return Err(MazeError::OpenBorder { pos });
        }
        self.carve(cell, dir);
        if let Some(weight) = weight {
            self.set_passage_weight(cell, dir, weight);
        }
        Ok(())
    }

    /// Draw the maze as ASCII, in the format [`GridMaze::parse`] reads.
    ///
    /// `marker` may return a character to show inside a cell. A passage is
    /// drawn as a digit when both of its sides carry the same weight in
    /// `0..=9` other than 1; any other weight is drawn as a plain gap.
    pub fn render(&self, mut marker: impl FnMut(Point) -> Option<char>) -> String {
        let w = self.range().width();
        let h = self.range().height();
        let mut out = String::with_capacity(((2 * w + 2) * (2 * h + 1)) as usize);

        for y in 0..=h {
            // Corner row: walls above row y.
            for x in 0..w {
                out.push('+');
                out.push(self.passage_char(Point::new(x, y), Direction::Above, '-'));
            }
            out.push('+');
            out.push('\n');
            if y == h {
                break;
            }
            // Cell row.
            for x in 0..=w {
                let p = Point::new(x, y);
                out.push(self.passage_char(p, Direction::Left, '|'));
                if x < w {
                    out.push(marker(p).unwrap_or(' '));
                }
            }
            out.push('\n');
        }
        out
    }

    fn passage_char(&self, p: Point, dir: Direction, wall: char) -> char {
        if self.has_wall(p, dir) {
            return wall;
        }
        let there = self.weight_at(dir.step(p), dir.opposite());
        match (self.weight_at(p, dir), there) {
            (Some(a), Some(b)) if a == b && a != 1 && (0..=9).contains(&a) => {
                char::from_digit(a as u32, 10).unwrap_or(' ')
            }
            _ => ' ',
        }
    }
}

impl fmt::Display for GridMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_| None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    const SMALL: &str = "\
+-+-+-+
|   | |
+-+ + +
|    3|
+-+-+-+";

    #[test]
    fn parse_small() {
        let m = GridMaze::parse(SMALL).unwrap();
        assert_eq!((m.width(), m.height()), (3, 2));
        assert!(!m.has_wall(Point::new(0, 0), Direction::Right));
        assert!(m.has_wall(Point::new(1, 0), Direction::Right));
        assert!(!m.has_wall(Point::new(1, 0), Direction::Below));
        assert!(!m.has_wall(Point::new(2, 0), Direction::Below));
        assert!(m.has_wall(Point::new(0, 0), Direction::Below));
        assert_eq!(m.weight_at(Point::new(1, 1), Direction::Right), Some(3));
        assert_eq!(m.weight_at(Point::new(2, 1), Direction::Left), Some(3));
        assert_eq!(m.weight_at(Point::new(0, 1), Direction::Right), Some(1));
    }

    #[test]
    fn render_reproduces_text() {
        let m = GridMaze::parse(SMALL).unwrap();
        assert_eq!(m.render(|_| None), format!("{SMALL}\n"));
        assert_eq!(m.to_string(), format!("{SMALL}\n"));
    }

    #[test]
    fn render_then_parse() {
        let mut m = GridMaze::open(4, 3);
        m.build_wall(Point::new(1, 1), Direction::Right);
        m.set_passage_weight(Point::new(0, 0), Direction::Below, 0);
        m.set_passage_weight(Point::new(2, 2), Direction::Right, 9);
        let back = GridMaze::parse(&m.to_string()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn markers_fill_cells() {
        let m = GridMaze::open(2, 1);
        let text = m.render(|p| (p == Point::new(1, 0)).then_some('*'));
        assert_eq!(text, "+-+-+\n|  *|\n+-+-+\n");
        // Markers are accepted back as cell content.
        assert_eq!(GridMaze::parse(&text).unwrap(), m);
    }

    #[test]
    fn surrounding_blank_lines_ignored() {
        let m = GridMaze::parse("\n\n+-+\n| |\n+-+\n\n").unwrap();
        assert_eq!(m.range().len(), 1);
    }

    #[test]
    fn errors() {
        assert_eq!(GridMaze::parse(""), Err(MazeError::Empty));
        assert_eq!(
            GridMaze::parse("+-+\n| |\n+-+-+"),
            Err(MazeError::InconsistentWidth { line: 2 })
        );
        assert_eq!(
            GridMaze::parse("+-+-\n|  |\n+--+"),
            Err(MazeError::BadShape {
                width: 4,
                height: 3
            })
        );
        assert_eq!(
            GridMaze::parse("+-+\n| |\n+x+"),
            Err(MazeError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 2)
            })
        );
        assert_eq!(
            GridMaze::parse("+-+\n| |\n*-+"),
            Err(MazeError::InvalidChar {
                ch: '*',
                pos: Point::new(0, 2)
            })
        );
        assert_eq!(
            GridMaze::parse("+-+\n  |\n+-+"),
            Err(MazeError::OpenBorder {
                pos: Point::new(0, 1)
            })
        );
    }

    #[test]
    fn error_messages() {
        let e = MazeError::InconsistentWidth { line: 4 };
        assert_eq!(e.to_string(), "maze: line 4 has inconsistent width");
        let e = MazeError::OpenBorder {
            pos: Point::new(2, 0),
        };
        assert!(e.to_string().contains("(2, 0)"));
    }
}
