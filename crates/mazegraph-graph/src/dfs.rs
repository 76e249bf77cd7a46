//! Depth-first search with backtracking.

use crate::WeightedGraph;
use crate::error::{GraphError, VertexRole};
use crate::graph::Node;

impl<V: PartialEq> WeightedGraph<V> {
    /// Depth-first search from `start` to `end`.
    ///
    /// Edges are tried in insertion order and a vertex is entered at most
    /// once. Observers see `dfs_has_begun`, then one `visit` per vertex of
    /// the path that reached `end` (start first, dead ends omitted), then
    /// `search_is_over`. When `end` cannot be reached no vertex is
    /// reported.
    ///
    /// `start == end` reports the one-vertex path: a single `visit(start)`.
    /// Some DFS drivers skip the search in that case and report no visit;
    /// here `start` is visited, as in [`do_bfs`](Self::do_bfs).
    ///
    /// Fails without notifying anyone if `start` is not in the graph.
    pub fn do_dfs(&mut self, start: &V, end: &V) -> Result<(), GraphError> {
        let si = self
            .find(start)
            .ok_or(GraphError::VertexNotFound(VertexRole::Start))?;
        let ei = self.find(end);

        let nodes = &self.nodes;
        let observers = &mut self.observers;

        observers.notify(|o| o.dfs_has_begun());

        let path = match ei {
            Some(ei) => dfs_path(nodes, si, ei),
            None => Vec::new(),
        };
        for &i in path.iter() {
            observers.notify(|o| o.visit(&nodes[i].vertex));
        }

        observers.notify(|o| o.search_is_over());
        log::debug!("dfs path has {} vertices", path.len());
        Ok(())
    }
}

/// Arena indices of the first path from `start` to `end` found depth-first,
/// or an empty vector if there is none.
fn dfs_path<V>(nodes: &[Node<V>], start: usize, end: usize) -> Vec<usize> {
    if start == end {
        return vec![start];
    }

    let mut visited = vec![false; nodes.len()];
    visited[start] = true;

    // Each frame is a vertex on the current path and the next edge to try.
    // The frames themselves are the path.
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let Some(adj) = nodes[node].adjacencies.get(next) else {
            // Dead end: backtrack.
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let t = adj.target;
        if visited[t] {
            continue;
        }
        visited[t] = true;
        stack.push((t, 0));
        if t == end {
            return stack.into_iter().map(|(n, _)| n).collect();
        }
    }

    Vec::new()
}
