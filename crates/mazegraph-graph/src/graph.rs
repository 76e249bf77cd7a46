use crate::error::{EdgeError, GraphError, VertexRole};
use crate::observer::{GraphAlgorithmObserver, Observers};

// ---------------------------------------------------------------------------
// Arena records
// ---------------------------------------------------------------------------

/// Directed edge owned by its source node. `target` indexes the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Adjacency {
    pub(crate) target: usize,
    pub(crate) weight: i32,
}

impl Adjacency {
    /// Weight widened for distance sums. Weights are never negative.
    #[inline]
    pub(crate) fn cost(self) -> u64 {
        u64::from(self.weight.unsigned_abs())
    }
}

/// A vertex and its outgoing edges, in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    pub(crate) vertex: V,
    pub(crate) adjacencies: Vec<Adjacency>,
}

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// A directed graph with non-negative integer edge weights.
///
/// Vertices are unique by value equality and keep their insertion order,
/// which decides tie-breaking in every traversal. Nodes live in an arena and
/// edges refer to their targets by index, so the graph is the sole owner of
/// everything it stores. There is no removal.
///
/// Adding an edge that already exists replaces its weight in place: the
/// graph holds at most one edge per ordered pair of vertices.
///
/// Vertex lookup is a linear scan unless the graph was built
/// [`with_locator`](WeightedGraph::with_locator).
pub struct WeightedGraph<V> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) observers: Observers<V>,
    locator: Option<Locator<V>>,
}

/// Maps a vertex to the arena position it occupies once added.
type Locator<V> = Box<dyn Fn(&V) -> Option<usize>>;

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedGraph<V> {
    /// Create an empty graph with no observers.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            observers: Observers::new(),
            locator: None,
        }
    }

    /// Create an empty graph whose vertex lookups go through `locator`.
    ///
    /// `locator` returns the position a vertex takes in insertion order,
    /// the way a grid maps a cell to its flat index. A located slot is
    /// trusted only after an equality check, so a wrong answer costs a
    /// linear scan, never a wrong result. `add_vertex` skips its duplicate
    /// scan when the vertex is located exactly at the end of the arena.
    pub fn with_locator(locator: impl Fn(&V) -> Option<usize> + 'static) -> Self {
        Self {
            locator: Some(Box::new(locator)),
            ..Self::new()
        }
    }

    /// Register an observer. Observers are notified in registration order
    /// and cannot be removed.
    pub fn add_observer(&mut self, observer: impl GraphAlgorithmObserver<V> + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.adjacencies.len()).sum()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.nodes.iter().map(|n| &n.vertex)
    }
}

impl<V: PartialEq> WeightedGraph<V> {
    /// Arena index of `vertex`: the located slot if it holds `vertex`,
    /// otherwise a linear scan.
    pub(crate) fn find(&self, vertex: &V) -> Option<usize> {
        self.locate(vertex)
            .filter(|&i| self.nodes.get(i).is_some_and(|n| n.vertex == *vertex))
            .or_else(|| self.nodes.iter().position(|n| n.vertex == *vertex))
    }

    fn locate(&self, vertex: &V) -> Option<usize> {
        self.locator.as_ref().and_then(|locate| locate(vertex))
    }

    /// Add `vertex` at the end of the vertex order.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if an equal vertex is
    /// already stored; the graph is left unchanged.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        let appended_in_place = self.locate(&vertex) == Some(self.nodes.len());
        if !appended_in_place && self.contains_vertex(&vertex) {
            return Err(GraphError::DuplicateVertex);
        }
        self.nodes.push(Node {
            vertex,
            adjacencies: Vec::new(),
        });
        Ok(())
    }

    /// Whether some stored vertex equals `vertex`.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.find(vertex).is_some()
    }

    /// Add the directed edge `from → to`.
    ///
    /// The checks run in a fixed order and the first failure is reported:
    /// negative weight, then missing `from`, then missing `to`. Re-adding an
    /// existing edge is a no-op for the same weight and otherwise replaces
    /// the weight, keeping the edge's position among `from`'s edges.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i32) -> Result<(), GraphError> {
        if weight < 0 {
            return Err(GraphError::InvalidEdge(EdgeError::NegativeWeight(weight)));
        }
        let fi = self
            .find(from)
            .ok_or(GraphError::InvalidEdge(EdgeError::MissingFrom))?;
        let ti = self
            .find(to)
            .ok_or(GraphError::InvalidEdge(EdgeError::MissingTo))?;

        let adjacencies = &mut self.nodes[fi].adjacencies;
        match adjacencies.iter_mut().find(|a| a.target == ti) {
            Some(adj) if adj.weight == weight => {}
            Some(adj) => {
                log::debug!(
                    "replacing weight of edge {fi} -> {ti}: {} -> {weight}",
                    adj.weight
                );
                adj.weight = weight;
            }
            None => adjacencies.push(Adjacency { target: ti, weight }),
        }
        Ok(())
    }

    /// Weight of the edge `from → to`, or `None` if there is no such edge.
    ///
    /// Fails if either vertex is absent (`from` is checked first), and also
    /// whenever the graph holds fewer than two vertices, even if both named
    /// vertices are present.
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<i32>, GraphError> {
        let fi = self
            .find(from)
            .ok_or(GraphError::VertexNotFound(VertexRole::From))?;
        let ti = self
            .find(to)
            .ok_or(GraphError::VertexNotFound(VertexRole::To))?;
        if self.nodes.len() < 2 {
            return Err(GraphError::InsufficientVertices(self.nodes.len()));
        }
        Ok(self.nodes[fi]
            .adjacencies
            .iter()
            .find(|a| a.target == ti)
            .map(|a| a.weight))
    }

    /// Outgoing edges of `vertex` as `(target, weight)` pairs in insertion
    /// order, or `None` if `vertex` is absent.
    pub fn edges_from<'a>(
        &'a self,
        vertex: &V,
    ) -> Option<impl Iterator<Item = (&'a V, i32)> + use<'a, V>> {
        let i = self.find(vertex)?;
        Some(
            self.nodes[i]
                .adjacencies
                .iter()
                .map(|a| (&self.nodes[a.target].vertex, a.weight)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> WeightedGraph<&'static str> {
        let mut g = WeightedGraph::new();
        for v in ["A", "B", "C", "D"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&"A", &"B", 1).unwrap();
        g.add_edge(&"A", &"C", 2).unwrap();
        g.add_edge(&"A", &"D", 3).unwrap();
        g.add_edge(&"B", &"C", 4).unwrap();
        g.add_edge(&"D", &"C", 5).unwrap();
        g
    }

    #[test]
    fn add_and_contains_vertex() {
        let g = abcd();
        for v in ["A", "B", "C", "D"] {
            assert!(g.contains_vertex(&v));
        }
        assert!(!g.contains_vertex(&"E"));
        assert_eq!(g.len(), 4);
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn duplicate_vertex_rejected() {
        let mut g = abcd();
        assert_eq!(g.add_vertex("A"), Err(GraphError::DuplicateVertex));
        assert_eq!(g.len(), 4);
    }

    #[test]
    fn edge_weights() {
        let g = abcd();
        assert_eq!(g.get_weight(&"A", &"B"), Ok(Some(1)));
        assert_eq!(g.get_weight(&"B", &"A"), Ok(None));
        assert_eq!(g.get_weight(&"A", &"C"), Ok(Some(2)));
        assert_eq!(g.get_weight(&"A", &"D"), Ok(Some(3)));
        assert_eq!(g.get_weight(&"B", &"C"), Ok(Some(4)));
        assert_eq!(g.get_weight(&"D", &"C"), Ok(Some(5)));
        assert_eq!(g.get_weight(&"B", &"D"), Ok(None));
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn weight_of_missing_vertex() {
        let g = abcd();
        assert_eq!(
            g.get_weight(&"X", &"A"),
            Err(GraphError::VertexNotFound(VertexRole::From))
        );
        assert_eq!(
            g.get_weight(&"A", &"X"),
            Err(GraphError::VertexNotFound(VertexRole::To))
        );
        assert_eq!(
            g.get_weight(&"X", &"Y"),
            Err(GraphError::VertexNotFound(VertexRole::From))
        );
    }

    #[test]
    fn weight_needs_two_vertices() {
        let mut g = WeightedGraph::new();
        g.add_vertex("A").unwrap();
        g.add_edge(&"A", &"A", 2).unwrap();
        assert_eq!(
            g.get_weight(&"A", &"A"),
            Err(GraphError::InsufficientVertices(1))
        );
        g.add_vertex("B").unwrap();
        assert_eq!(g.get_weight(&"A", &"A"), Ok(Some(2)));
    }

    #[test]
    fn empty_graph_reports_missing_vertex() {
        let g: WeightedGraph<&str> = WeightedGraph::new();
        assert!(g.is_empty());
        assert_eq!(
            g.get_weight(&"A", &"B"),
            Err(GraphError::VertexNotFound(VertexRole::From))
        );
    }

    #[test]
    fn invalid_edges_checked_in_order() {
        let mut g = abcd();
        assert_eq!(
            g.add_edge(&"X", &"Y", -1),
            Err(GraphError::InvalidEdge(EdgeError::NegativeWeight(-1)))
        );
        assert_eq!(
            g.add_edge(&"X", &"Y", 1),
            Err(GraphError::InvalidEdge(EdgeError::MissingFrom))
        );
        assert_eq!(
            g.add_edge(&"X", &"A", 1),
            Err(GraphError::InvalidEdge(EdgeError::MissingFrom))
        );
        assert_eq!(
            g.add_edge(&"A", &"Y", 1),
            Err(GraphError::InvalidEdge(EdgeError::MissingTo))
        );
        assert_eq!(
            g.add_edge(&"A", &"B", -5),
            Err(GraphError::InvalidEdge(EdgeError::NegativeWeight(-5)))
        );
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.get_weight(&"A", &"B"), Ok(Some(1)));
    }

    #[test]
    fn zero_weight_is_valid() {
        let mut g = abcd();
        g.add_edge(&"C", &"A", 0).unwrap();
        assert_eq!(g.get_weight(&"C", &"A"), Ok(Some(0)));
    }

    #[test]
    fn identical_edge_is_noop() {
        let mut g = abcd();
        g.add_edge(&"A", &"B", 1).unwrap();
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn re_adding_edge_replaces_weight_in_place() {
        let mut g = abcd();
        g.add_edge(&"A", &"C", 9).unwrap();
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.get_weight(&"A", &"C"), Ok(Some(9)));
        let edges: Vec<_> = g.edges_from(&"A").unwrap().collect();
        assert_eq!(edges, vec![(&"B", 1), (&"C", 9), (&"D", 3)]);
    }

    #[test]
    fn located_lookups() {
        // Vertices 10, 11, ... sit at positions 0, 1, ...
        let mut g =
            WeightedGraph::with_locator(|v: &u32| v.checked_sub(10).map(|i| i as usize));
        for v in 10..20 {
            g.add_vertex(v).unwrap();
        }
        assert_eq!(g.add_vertex(15), Err(GraphError::DuplicateVertex));
        g.add_edge(&12, &19, 4).unwrap();
        assert_eq!(g.get_weight(&12, &19), Ok(Some(4)));
        assert!(!g.contains_vertex(&20));
        assert_eq!(g.len(), 10);
    }

    #[test]
    fn wrong_locator_falls_back_to_scan() {
        let mut g = WeightedGraph::with_locator(|_: &&'static str| Some(0));
        for v in ["A", "B", "C"] {
            g.add_vertex(v).unwrap();
        }
        assert_eq!(g.add_vertex("C"), Err(GraphError::DuplicateVertex));
        g.add_edge(&"C", &"B", 2).unwrap();
        assert_eq!(g.get_weight(&"C", &"B"), Ok(Some(2)));
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn edges_from_missing_vertex() {
        let g = abcd();
        assert!(g.edges_from(&"Z").is_none());
        assert_eq!(g.edges_from(&"C").unwrap().count(), 0);
    }

    #[test]
    fn owned_vertex_values() {
        let mut g: WeightedGraph<String> = WeightedGraph::new();
        g.add_vertex("left".to_string()).unwrap();
        g.add_vertex("right".to_string()).unwrap();
        g.add_edge(&"left".to_string(), &"right".to_string(), 4)
            .unwrap();
        assert_eq!(
            g.get_weight(&"left".to_string(), &"right".to_string()),
            Ok(Some(4))
        );
    }
}
