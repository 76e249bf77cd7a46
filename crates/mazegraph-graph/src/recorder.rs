//! Ready-made observers: an in-memory [`Recorder`] and a [`LogObserver`]
//! that forwards notifications to the `log` facade.

use std::fmt;

use crate::observer::GraphAlgorithmObserver;

/// One observer notification, as captured by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<V> {
    BfsBegun,
    DfsBegun,
    DijkstraBegun,
    Visit(V),
    VertexFinished(V, u64),
    SearchOver,
    DijkstraOver(Vec<V>),
}

/// Observer that records every notification in arrival order.
#[derive(Debug, Clone)]
pub struct Recorder<V> {
    events: Vec<Event<V>>,
}

impl<V> Default for Recorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Recorder<V> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[Event<V>] {
        &self.events
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<V: Clone> Recorder<V> {
    /// Payloads of the visit notifications, in order.
    pub fn visited(&self) -> Vec<V> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Visit(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// `(vertex, cost)` pairs of the Dijkstra finished notifications.
    pub fn finished(&self) -> Vec<(V, u64)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::VertexFinished(v, cost) => Some((v.clone(), *cost)),
                _ => None,
            })
            .collect()
    }

    /// The most recent path reported by Dijkstra, if any.
    pub fn path(&self) -> Option<Vec<V>> {
        self.events.iter().rev().find_map(|e| match e {
            Event::DijkstraOver(path) => Some(path.clone()),
            _ => None,
        })
    }
}

impl<V: Clone> GraphAlgorithmObserver<V> for Recorder<V> {
    fn bfs_has_begun(&mut self) {
        self.events.push(Event::BfsBegun);
    }

    fn dfs_has_begun(&mut self) {
        self.events.push(Event::DfsBegun);
    }

    fn dijkstra_has_begun(&mut self) {
        self.events.push(Event::DijkstraBegun);
    }

    fn visit(&mut self, vertex: &V) {
        self.events.push(Event::Visit(vertex.clone()));
    }

    fn dijkstra_vertex_finished(&mut self, vertex: &V, cost: u64) {
        self.events.push(Event::VertexFinished(vertex.clone(), cost));
    }

    fn search_is_over(&mut self) {
        self.events.push(Event::SearchOver);
    }

    fn dijkstra_is_over(&mut self, path: &[&V]) {
        let path = path.iter().map(|&v| v.clone()).collect();
        self.events.push(Event::DijkstraOver(path));
    }
}

/// Observer that logs each notification under a fixed name.
///
/// Begin/end notifications go out at `info`, per-vertex ones at `debug`.
#[derive(Debug, Clone)]
pub struct LogObserver {
    name: String,
}

impl LogObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<V: fmt::Debug> GraphAlgorithmObserver<V> for LogObserver {
    fn bfs_has_begun(&mut self) {
        log::info!("{}: bfs has begun", self.name);
    }

    fn dfs_has_begun(&mut self) {
        log::info!("{}: dfs has begun", self.name);
    }

    fn dijkstra_has_begun(&mut self) {
        log::info!("{}: dijkstra has begun", self.name);
    }

    fn visit(&mut self, vertex: &V) {
        log::debug!("{}: visit {:?}", self.name, vertex);
    }

    fn dijkstra_vertex_finished(&mut self, vertex: &V, cost: u64) {
        log::debug!("{}: finished {:?} at cost {}", self.name, vertex, cost);
    }

    fn search_is_over(&mut self) {
        log::info!("{}: search is over", self.name);
    }

    fn dijkstra_is_over(&mut self, path: &[&V]) {
        log::info!("{}: dijkstra is over, path of {} vertices", self.name, path.len());
    }
}
