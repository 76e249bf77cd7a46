//! Conversion of a [`Maze`] into a [`WeightedGraph`] of cells.

use std::ops::{Deref, DerefMut};

use mazegraph_core::{Direction, Point, Range};
use mazegraph_graph::{GraphError, WeightedGraph};

use crate::maze::Maze;

/// A weighted graph with one vertex per maze cell and one directed edge per
/// open side of a cell.
///
/// The edge from `p` through side `dir` carries `maze.weight(p, dir)`. The
/// reverse edge is built from the neighbour's own answers, so mazes with
/// one-way walls or asymmetric weights are represented faithfully.
///
/// `MazeGraph` dereferences to the underlying [`WeightedGraph<Point>`], so
/// observers are registered and algorithms run on it directly.
pub struct MazeGraph {
    graph: WeightedGraph<Point>,
}

impl MazeGraph {
    /// Build the graph of `maze`.
    ///
    /// Vertices are added column by column, and the graph locates a cell by
    /// its column-major index, so building stays linear in the cell count.
    /// Each cell's edges are added in [`Direction::ALL`] order, which is the
    /// order the traversals try them.
    ///
    /// A side reported open towards the outside of the maze yields
    /// [`GraphError::InvalidEdge`], as does a negative weight.
    pub fn new<M: Maze + ?Sized>(maze: &M) -> Result<Self, GraphError> {
        let cells = Range::with_size(maze.width().max(0), maze.height().max(0));
        let mut graph = WeightedGraph::with_locator(move |p: &Point| cells.column_index(*p));
        for p in cells.iter_columns() {
            graph.add_vertex(p)?;
        }
        for p in cells.iter_columns() {
            for dir in Direction::ALL {
                if maze.is_wall(p, dir) {
                    continue;
                }
                graph.add_edge(&p, &dir.step(p), maze.weight(p, dir))?;
            }
        }
        log::debug!(
            "maze graph: {} vertices, {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(Self { graph })
    }

    /// Unwrap the underlying graph.
    pub fn into_inner(self) -> WeightedGraph<Point> {
        self.graph
    }
}

impl Deref for MazeGraph {
    type Target = WeightedGraph<Point>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl DerefMut for MazeGraph {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.graph
    }
}
