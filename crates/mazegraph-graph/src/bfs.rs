use crate::WeightedGraph;
use crate::error::{GraphError, VertexRole};

impl<V: PartialEq> WeightedGraph<V> {
    /// Breadth-first search from `start`, stopping as soon as `end` is
    /// visited.
    ///
    /// Observers see `bfs_has_begun`, then one `visit` per vertex in
    /// discovery order (starting with `start`), then `search_is_over`.
    /// Vertices are expanded level by level; within a level, in the order
    /// they were discovered, following each vertex's edges in insertion
    /// order. If `end` is unreachable or absent the whole reachable
    /// component is visited.
    ///
    /// Fails without notifying anyone if `start` is not in the graph.
    pub fn do_bfs(&mut self, start: &V, end: &V) -> Result<(), GraphError> {
        let si = self
            .find(start)
            .ok_or(GraphError::VertexNotFound(VertexRole::Start))?;
        let ei = self.find(end);

        let nodes = &self.nodes;
        let observers = &mut self.observers;

        observers.notify(|o| o.bfs_has_begun());

        let mut visited = vec![false; nodes.len()];
        visited[si] = true;
        observers.notify(|o| o.visit(&nodes[si].vertex));
        let mut count = 1usize;

        if ei != Some(si) {
            let mut frontier: Vec<usize> =
                nodes[si].adjacencies.iter().map(|a| a.target).collect();
            let mut next: Vec<usize> = Vec::new();
            // Vertices already placed in some frontier.
            let mut queued = vec![false; nodes.len()];

            'search: while !frontier.is_empty() {
                for &ni in frontier.iter() {
                    if visited[ni] {
                        continue;
                    }
                    visited[ni] = true;
                    count += 1;
                    observers.notify(|o| o.visit(&nodes[ni].vertex));
                    if ei == Some(ni) {
                        break 'search;
                    }
                }

                next.clear();
                for &ni in frontier.iter() {
                    for adj in nodes[ni].adjacencies.iter() {
                        let t = adj.target;
                        if !visited[t] && !queued[t] {
                            queued[t] = true;
                            next.push(t);
                        }
                    }
                }
                std::mem::swap(&mut frontier, &mut next);
            }
        }

        observers.notify(|o| o.search_is_over());
        log::debug!("bfs visited {count} of {} vertices", nodes.len());
        Ok(())
    }
}
