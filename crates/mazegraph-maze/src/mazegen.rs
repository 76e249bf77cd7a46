//! Random maze generation.
//!
//! [`MazeGen::generate`] carves a perfect maze with an iterative
//! recursive-backtracker, optionally braids it (knocks down extra walls to
//! create loops), then draws a random weight for every open passage.

use mazegraph_core::{Direction, Point};
use rand::{Rng, RngExt};

use crate::gridmaze::GridMaze;

/// Parameters of [`MazeGen::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct MazeGenConfig {
    /// Probability (0.0–1.0) that each wall left after carving is removed.
    /// Zero keeps the maze perfect: exactly one path between any two cells.
    pub braid: f64,
    /// Smallest passage weight, inclusive.
    pub min_weight: i32,
    /// Largest passage weight, inclusive.
    pub max_weight: i32,
    /// Give both sides of a passage the same weight. When `false` each
    /// side is drawn independently.
    pub symmetric_weights: bool,
}

impl Default for MazeGenConfig {
    fn default() -> Self {
        Self {
            braid: 0.0,
            min_weight: 1,
            max_weight: 1,
            symmetric_weights: true,
        }
    }
}

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeGenConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MazeGenConfig::default())
    }

    pub fn with_config(rng: R, config: MazeGenConfig) -> Self {
        Self { rng, config }
    }

    /// Generate a `width × height` maze.
    ///
    /// The same seed and configuration always produce the same maze.
    pub fn generate(&mut self, width: i32, height: i32) -> GridMaze {
        let mut maze = GridMaze::new(width, height);
        if maze.range().is_empty() {
            return maze;
        }
        self.carve_backtracker(&mut maze);
        let braided = self.braid(&mut maze);
        self.assign_weights(&mut maze);
        log::debug!(
            "generated {}x{} maze, {} extra passages",
            maze.range().width(),
            maze.range().height(),
            braided
        );
        maze
    }

    /// Carve a spanning tree of passages, starting from a random cell.
    fn carve_backtracker(&mut self, maze: &mut GridMaze) {
        let range = maze.range();
        let mut visited = vec![false; range.len()];
        let start = Point::new(
            self.rng.random_range(0..range.width()),
            self.rng.random_range(0..range.height()),
        );

        let mut stack: Vec<Point> = vec![start];
        if let Some(i) = range.index(start) {
            visited[i] = true;
        }
        let mut dirs: Vec<Direction> = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            dirs.clear();
            dirs.extend(Direction::ALL.into_iter().filter(|d| {
                range.index(d.step(cur)).is_some_and(|i| !visited[i])
            }));
            if dirs.is_empty() {
                stack.pop();
                continue;
            }
            let d = dirs[self.rng.random_range(0..dirs.len())];
            let next = d.step(cur);
            maze.carve(cur, d);
            if let Some(i) = range.index(next) {
                visited[i] = true;
            }
            stack.push(next);
        }
    }

    /// Remove each remaining interior wall with probability `braid`.
    /// Returns the number of walls removed.
    fn braid(&mut self, maze: &mut GridMaze) -> usize {
        let p = self.config.braid;
        if p.is_nan() || p <= 0.0 {
            return 0;
        }
        let p = p.min(1.0);
        let range = maze.range();
        let mut removed = 0;
        for cell in range {
            for d in [Direction::Right, Direction::Below] {
                if !range.contains(d.step(cell)) || !maze.has_wall(cell, d) {
                    continue;
                }
                if self.rng.random_bool(p) {
                    maze.carve(cell, d);
                    removed += 1;
                }
            }
        }
        removed
    }

    fn assign_weights(&mut self, maze: &mut GridMaze) {
        let lo = self.config.min_weight.min(self.config.max_weight);
        let hi = self.config.min_weight.max(self.config.max_weight);
        let range = maze.range();
        for cell in range {
            if self.config.symmetric_weights {
                for d in [Direction::Right, Direction::Below] {
                    if !maze.has_wall(cell, d) {
                        let w = self.rng.random_range(lo..=hi);
                        maze.set_passage_weight(cell, d, w);
                    }
                }
            } else {
                for d in Direction::ALL {
                    if !maze.has_wall(cell, d) {
                        let w = self.rng.random_range(lo..=hi);
                        maze.set_weight(cell, d, w);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn generator(seed: u64, config: MazeGenConfig) -> MazeGen<StdRng> {
        MazeGen::with_config(StdRng::seed_from_u64(seed), config)
    }

    #[test]
    fn perfect_maze_is_a_spanning_tree() {
        let mut mg = generator(7, MazeGenConfig::default());
        let m = mg.generate(12, 8);
        // A tree on n cells has n - 1 passages, each open from both sides.
        assert_eq!(m.openings(), 2 * (12 * 8 - 1));
        for p in m.range() {
            assert!(m.cell(p).unwrap().openings() >= 1);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let config = MazeGenConfig {
            braid: 0.3,
            min_weight: 1,
            max_weight: 9,
            symmetric_weights: true,
        };
        let a = generator(42, config.clone()).generate(10, 10);
        let b = generator(42, config).generate(10, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn full_braid_opens_every_interior_wall() {
        let config = MazeGenConfig {
            braid: 1.0,
            ..MazeGenConfig::default()
        };
        let m = generator(3, config).generate(5, 4);
        assert_eq!(m, GridMaze::open(5, 4));
    }

    #[test]
    fn weights_within_bounds() {
        let config = MazeGenConfig {
            braid: 0.5,
            min_weight: 2,
            max_weight: 6,
            symmetric_weights: false,
        };
        let m = generator(11, config).generate(9, 9);
        for p in m.range() {
            for d in Direction::ALL {
                if !m.has_wall(p, d) {
                    let w = m.weight_at(p, d).unwrap();
                    assert!((2..=6).contains(&w), "weight {w} out of range");
                }
            }
        }
    }

    #[test]
    fn symmetric_weights_match_across_passages() {
        let config = MazeGenConfig {
            min_weight: 1,
            max_weight: 50,
            ..MazeGenConfig::default()
        };
        let m = generator(5, config).generate(8, 6);
        for p in m.range() {
            for d in Direction::ALL {
                if !m.has_wall(p, d) {
                    assert_eq!(m.weight_at(p, d), m.weight_at(d.step(p), d.opposite()));
                }
            }
        }
    }

    #[test]
    fn reversed_bounds_are_normalised() {
        let swapped = MazeGenConfig {
            min_weight: 4,
            max_weight: 2,
            ..MazeGenConfig::default()
        };
        let s = generator(1, swapped).generate(3, 3);
        for p in s.range() {
            for d in Direction::ALL {
                if !s.has_wall(p, d) {
                    assert!((2..=4).contains(&s.weight_at(p, d).unwrap()));
                }
            }
        }
    }

    #[test]
    fn fixed_weight() {
        let config = MazeGenConfig {
            braid: 0.2,
            min_weight: 4,
            max_weight: 4,
            symmetric_weights: false,
        };
        let m = generator(1, config).generate(6, 6);
        for p in m.range() {
            for d in Direction::ALL {
                if !m.has_wall(p, d) {
                    assert_eq!(m.weight_at(p, d), Some(4));
                }
            }
        }
    }

    #[test]
    fn empty_and_single_cell() {
        let mut mg = generator(0, MazeGenConfig::default());
        assert!(mg.generate(0, 5).range().is_empty());
        let one = mg.generate(1, 1);
        assert_eq!(one.openings(), 0);
    }
}
