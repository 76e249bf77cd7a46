//! Mazes for `mazegraph`: a wall-and-weight grid, random generation, an
//! ASCII format and conversion to a [`WeightedGraph`](mazegraph_graph::WeightedGraph).
//!
//! ```
//! use mazegraph_core::Point;
//! use mazegraph_maze::{GridMaze, MazeGraph};
//!
//! let maze = GridMaze::parse("+-+-+\n|   |\n+-+-+").unwrap();
//! let graph = MazeGraph::new(&maze).unwrap();
//! assert_eq!(graph.get_weight(&Point::new(0, 0), &Point::new(1, 0)), Ok(Some(1)));
//! ```

pub mod gridmaze;
pub mod maze;
pub mod mazegen;
pub mod mazegraph;
pub mod text;

pub use gridmaze::{GridMaze, MazeCell};
pub use maze::Maze;
pub use mazegen::{MazeGen, MazeGenConfig};
pub use mazegraph::MazeGraph;
pub use text::MazeError;
