//! Shared logic of the `maze-demo` binary: run a traversal over a maze
//! graph and turn what the observers saw into a printable report.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use mazegraph_core::Point;
use mazegraph_graph::{GraphError, LogObserver, Recorder};
use mazegraph_maze::{GridMaze, MazeGraph};

/// Default maze size.
pub const WIDTH: i32 = 20;
pub const HEIGHT: i32 = 10;

/// Algorithm selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    /// Every traversal, one after the other.
    All,
}

impl Algorithm {
    /// The traversals this choice stands for, in run order.
    pub fn traversals(self) -> &'static [Traversal] {
        match self {
            Self::Bfs => &[Traversal::Bfs],
            Self::Dfs => &[Traversal::Dfs],
            Self::Dijkstra => &[Traversal::Dijkstra],
            Self::All => &[Traversal::Bfs, Traversal::Dfs, Traversal::Dijkstra],
        }
    }
}

/// One graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Bfs,
    Dfs,
    Dijkstra,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
        })
    }
}

/// What one traversal produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub traversal: Traversal,
    /// Cells the traversal reported, in order.
    pub visited: Vec<Point>,
    /// The path it settled on, if it computes one.
    pub path: Option<Vec<Point>>,
    /// Dijkstra cost of reaching the end cell.
    pub cost: Option<u64>,
}

impl Report {
    /// Draw `maze` with path cells as `*` and other reported cells as `.`.
    pub fn render(&self, maze: &GridMaze) -> String {
        let visited: HashSet<Point> = self.visited.iter().copied().collect();
        let path: HashSet<Point> = self.path.iter().flatten().copied().collect();
        maze.render(|p| {
            if path.contains(&p) {
                Some('*')
            } else if visited.contains(&p) {
                Some('.')
            } else {
                None
            }
        })
    }
}

/// Maze graph with a recorder and a logger attached.
pub struct Solver {
    graph: MazeGraph,
    recorder: Rc<RefCell<Recorder<Point>>>,
}

impl Solver {
    pub fn new(maze: &GridMaze) -> Result<Self, GraphError> {
        let mut graph = MazeGraph::new(maze)?;
        let recorder = Rc::new(RefCell::new(Recorder::new()));
        graph.add_observer(LogObserver::new("maze"));
        graph.add_observer(Rc::clone(&recorder));
        Ok(Self { graph, recorder })
    }

    /// Run one traversal from `start` to `end`.
    pub fn run(
        &mut self,
        traversal: Traversal,
        start: Point,
        end: Point,
    ) -> Result<Report, GraphError> {
        self.recorder.borrow_mut().clear();
        match traversal {
            Traversal::Bfs => self.graph.do_bfs(&start, &end)?,
            Traversal::Dfs => self.graph.do_dfs(&start, &end)?,
            Traversal::Dijkstra => self.graph.do_dijkstra(&start, &end)?,
        }

        let rec = self.recorder.borrow();
        let report = match traversal {
            Traversal::Bfs => Report {
                traversal,
                visited: rec.visited(),
                path: None,
                cost: None,
            },
            // The DFS visits are its path.
            Traversal::Dfs => {
                let visited = rec.visited();
                let path = (!visited.is_empty()).then(|| visited.clone());
                Report {
                    traversal,
                    visited,
                    path,
                    cost: None,
                }
            }
            Traversal::Dijkstra => {
                let finished = rec.finished();
                let cost = finished.iter().find(|(p, _)| *p == end).map(|&(_, c)| c);
                Report {
                    traversal,
                    visited: finished.into_iter().map(|(p, _)| p).collect(),
                    path: rec.path(),
                    cost,
                }
            }
        };
        Ok(report)
    }
}
