use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::WeightedGraph;
use crate::error::{GraphError, VertexRole};

/// Entry of the active set, ordered for `BinaryHeap` (a max-heap) so that
/// the lowest cost pops first and, among equal costs, the earliest entry.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Candidate {
    idx: usize,
    cost: u64,
    seq: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: PartialEq> WeightedGraph<V> {
    /// Dijkstra's shortest paths from `start`, then the path to `end`.
    ///
    /// The search does not stop at `end`: every vertex reachable from
    /// `start` is finished, in non-decreasing cost order, and each one is
    /// announced through `dijkstra_vertex_finished`. Afterwards
    /// `dijkstra_is_over` receives the cheapest path from `start` to `end`;
    /// it is not called at all when `end` is unreachable or absent.
    ///
    /// Fails without notifying anyone if `start` is not in the graph.
    pub fn do_dijkstra(&mut self, start: &V, end: &V) -> Result<(), GraphError> {
        let si = self
            .find(start)
            .ok_or(GraphError::VertexNotFound(VertexRole::Start))?;
        let ei = self.find(end);

        let nodes = &self.nodes;
        let observers = &mut self.observers;

        observers.notify(|o| o.dijkstra_has_begun());

        let n = nodes.len();
        // `None` means no path known yet.
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut finished = vec![false; n];
        let mut finished_count = 0usize;

        let mut active: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut seq = 0u64;
        dist[si] = Some(0);
        active.push(Candidate {
            idx: si,
            cost: 0,
            seq,
        });

        while let Some(Candidate { idx, cost, .. }) = active.pop() {
            // Skip stale entries.
            if finished[idx] {
                continue;
            }
            finished[idx] = true;
            finished_count += 1;
            observers.notify(|o| o.dijkstra_vertex_finished(&nodes[idx].vertex, cost));

            for adj in nodes[idx].adjacencies.iter() {
                let t = adj.target;
                if finished[t] {
                    continue;
                }
                // i32 weights summed over at most usize::MAX edges fit in u64.
                let tentative = cost + adj.cost();
                if dist[t].is_some_and(|d| d <= tentative) {
                    continue;
                }
                dist[t] = Some(tentative);
                pred[t] = Some(idx);
                seq += 1;
                active.push(Candidate {
                    idx: t,
                    cost: tentative,
                    seq,
                });
            }
        }

        log::debug!("dijkstra finished {finished_count} of {n} vertices");

        let Some(ei) = ei else {
            return Ok(());
        };
        let Some(path) = trace_path(&pred, si, ei) else {
            log::debug!("dijkstra: end vertex is unreachable");
            return Ok(());
        };
        let path: Vec<&V> = path.into_iter().map(|i| &nodes[i].vertex).collect();
        observers.notify(|o| o.dijkstra_is_over(&path));
        Ok(())
    }
}

/// Follow predecessor links back from `end`. Returns indices from `start`
/// to `end`, or `None` if `end` was never reached.
fn trace_path(pred: &[Option<usize>], start: usize, end: usize) -> Option<Vec<usize>> {
    if end == start {
        return Some(vec![start]);
    }
    if pred[end].is_none() {
        return None;
    }
    let mut path = vec![end];
    let mut cur = end;
    while let Some(prev) = pred[cur] {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    Some(path)
}
