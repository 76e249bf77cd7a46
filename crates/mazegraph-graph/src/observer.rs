use std::cell::RefCell;
use std::rc::Rc;

/// Listener notified while a graph algorithm runs.
///
/// Every callback has an empty default body, so an observer only implements
/// the notifications it cares about. Observers cannot steer the algorithm.
pub trait GraphAlgorithmObserver<V> {
    /// A breadth-first search is about to start.
    fn bfs_has_begun(&mut self) {}

    /// A depth-first search is about to start.
    fn dfs_has_begun(&mut self) {}

    /// Dijkstra's algorithm is about to start.
    fn dijkstra_has_begun(&mut self) {}

    /// A vertex was visited by BFS, or lies on the path found by DFS.
    fn visit(&mut self, _vertex: &V) {}

    /// Dijkstra moved `vertex` to the finished set with its final `cost`.
    fn dijkstra_vertex_finished(&mut self, _vertex: &V, _cost: u64) {}

    /// BFS or DFS has finished.
    fn search_is_over(&mut self) {}

    /// Dijkstra has finished; `path` runs from start to end.
    ///
    /// Only called when the end vertex was reached.
    fn dijkstra_is_over(&mut self, _path: &[&V]) {}
}

/// Shared handle, so the caller keeps access to an observer after handing
/// a clone of the `Rc` to the graph.
impl<V, O> GraphAlgorithmObserver<V> for Rc<RefCell<O>>
where
    O: GraphAlgorithmObserver<V> + ?Sized,
{
    fn bfs_has_begun(&mut self) {
        self.borrow_mut().bfs_has_begun();
    }

    fn dfs_has_begun(&mut self) {
        self.borrow_mut().dfs_has_begun();
    }

    fn dijkstra_has_begun(&mut self) {
        self.borrow_mut().dijkstra_has_begun();
    }

    fn visit(&mut self, vertex: &V) {
        self.borrow_mut().visit(vertex);
    }

    fn dijkstra_vertex_finished(&mut self, vertex: &V, cost: u64) {
        self.borrow_mut().dijkstra_vertex_finished(vertex, cost);
    }

    fn search_is_over(&mut self) {
        self.borrow_mut().search_is_over();
    }

    fn dijkstra_is_over(&mut self, path: &[&V]) {
        self.borrow_mut().dijkstra_is_over(path);
    }
}

pub(crate) type BoxedObserver<V> = Box<dyn GraphAlgorithmObserver<V>>;

/// Registered observers, notified in registration order.
pub(crate) struct Observers<V> {
    list: Vec<BoxedObserver<V>>,
}

impl<V> Observers<V> {
    pub(crate) fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub(crate) fn push(&mut self, observer: BoxedObserver<V>) {
        self.list.push(observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.list.len()
    }

    /// Deliver one notification to every observer.
    pub(crate) fn notify(&mut self, mut f: impl FnMut(&mut BoxedObserver<V>)) {
        for observer in self.list.iter_mut() {
            f(observer);
        }
    }
}
