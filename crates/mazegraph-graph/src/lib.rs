//! A generic directed, weighted graph with observable traversals.
//!
//! [`WeightedGraph`] stores unique vertices of any `PartialEq` type and
//! directed edges with non-negative integer weights. Three algorithms run
//! over it:
//!
//! - **Breadth-first search** ([`WeightedGraph::do_bfs`])
//! - **Depth-first search** ([`WeightedGraph::do_dfs`])
//! - **Dijkstra** shortest paths ([`WeightedGraph::do_dijkstra`])
//!
//! None of them return their result. Progress and outcome are delivered to
//! the registered [`GraphAlgorithmObserver`]s, in registration order.
//!
//! # Observers
//!
//! | Callback | BFS | DFS | Dijkstra |
//! |---|---|---|---|
//! | `bfs_has_begun` / `dfs_has_begun` / `dijkstra_has_begun` | first | first | first |
//! | `visit` | each discovered vertex | each vertex of the found path | – |
//! | `dijkstra_vertex_finished` | – | – | each reachable vertex |
//! | `search_is_over` | last | last | – |
//! | `dijkstra_is_over` | – | – | last, if `end` was reached |
//!
//! [`Recorder`] captures notifications for later inspection and
//! [`LogObserver`] forwards them to the `log` facade.

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod graph;
mod observer;
mod recorder;

pub use error::{EdgeError, GraphError, VertexRole};
pub use graph::WeightedGraph;
pub use observer::GraphAlgorithmObserver;
pub use recorder::{Event, LogObserver, Recorder};
