use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use common::{
    error::Error,
    types::{Edge, Measure},
};

use crate::solver::BellmanFordSolver;
use crate::traits::PathSolver;

/// Weighted directed graph over hashable vertex identifiers.
///
/// Vertices live in a set; each vertex owns an insertion-ordered list
/// of its outgoing edges. Every vertex in the set has an adjacency
/// entry (possibly empty) and no removed vertex keeps one — this holds
/// after every mutation. Duplicate edges are kept, so the structure is
/// a multigraph when the caller inserts the same triple twice.
///
/// `Clone` produces a deep copy: the copy shares no adjacency storage
/// with the original.
#[derive(Debug, Clone)]
pub struct Graph<V, D = f64> {
    vertices: HashSet<V>,
    adjacency: HashMap<V, Vec<Edge<V, D>>>,
}

impl<V, D> Graph<V, D>
where
    V: Eq + Hash + Clone,
    D: Measure,
{
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Membership test, no side effects.
    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// Inserts `v` with an empty outgoing-edge list.
    ///
    /// # Errors
    /// Returns `Error::DuplicateVertex` if `v` is already present.
    pub fn add_vertex(&mut self, v: V) -> Result<(), Error> {
        if self.has_vertex(&v) {
            return Err(Error::DuplicateVertex);
        }
        self.vertices.insert(v.clone());
        self.adjacency.insert(v, Vec::new());
        Ok(())
    }

    /// Removes `v`, its outgoing-edge list, and every edge elsewhere
    /// that targets `v`, so no dangling inbound edge survives.
    ///
    /// Returns `false` (no-op) when `v` is absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if !self.vertices.remove(v) {
            return false;
        }
        self.adjacency.remove(v);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.to != *v);
        }
        true
    }

    /// Appends the edge `(from, to, distance)` to `from`'s outgoing
    /// list. Duplicates and self-loops are allowed.
    ///
    /// # Errors
    /// Returns `Error::MissingVertex` unless both endpoints already
    /// exist as vertices.
    pub fn add_edge(&mut self, from: V, to: V, distance: D) -> Result<(), Error> {
        if !self.has_vertex(&from) || !self.has_vertex(&to) {
            return Err(Error::MissingVertex);
        }
        let edge = Edge {
            from: from.clone(),
            to,
            distance,
        };
        self.adjacency.entry(from).or_default().push(edge);
        Ok(())
    }

    /// Removes every outgoing edge from `from` whose target is `to`,
    /// regardless of distance.
    ///
    /// Returns `false` when either vertex is absent or no edge matched.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };
        let before = edges.len();
        edges.retain(|e| e.to != *to);
        edges.len() != before
    }

    /// Removes every exact match of the full `(from, to, distance)`
    /// triple from `from`'s outgoing list.
    ///
    /// Returns `false` when either endpoint is absent or no edge
    /// matched.
    pub fn remove_edge_exact(&mut self, edge: &Edge<V, D>) -> bool {
        if !self.has_vertex(&edge.from) || !self.has_vertex(&edge.to) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(&edge.from) else {
            return false;
        };
        let before = edges.len();
        edges.retain(|e| e != edge);
        edges.len() != before
    }

    /// True iff at least one outgoing edge from `from` targets `to`.
    /// An absent endpoint yields `false`, not an error.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        self.edges_from(from).iter().any(|e| e.to == *to)
    }

    /// Exact-triple membership test; `false` when an endpoint is
    /// absent.
    pub fn has_edge_exact(&self, edge: &Edge<V, D>) -> bool {
        if !self.has_vertex(&edge.from) || !self.has_vertex(&edge.to) {
            return false;
        }
        self.edges_from(&edge.from).iter().any(|e| e == edge)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    /// Count of edges incident to `v`: all of `v`'s outgoing edges plus
    /// every inbound edge from other vertices. A self-loop is counted
    /// once, via the outgoing pass — the inbound pass skips `v`'s own
    /// list.
    ///
    /// # Errors
    /// Returns `Error::MissingVertex` if `v` is absent.
    pub fn degree(&self, v: &V) -> Result<usize, Error> {
        let own = self.adjacency.get(v).ok_or(Error::MissingVertex)?;
        let mut degree = own.len();
        for (u, edges) in &self.adjacency {
            if u != v {
                degree += edges.iter().filter(|e| e.to == *v).count();
            }
        }
        Ok(degree)
    }

    /// Borrowed iteration over the vertex set. The order is the hash
    /// set's own and carries no guarantee.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Borrowed view of `v`'s outgoing edges in insertion order; empty
    /// for an absent vertex.
    pub fn edges_from(&self, v: &V) -> &[Edge<V, D>] {
        self.adjacency.get(v).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// Breadth-first traversal from `start` over directed edges,
    /// ignoring distances. `visit` runs exactly once per reachable
    /// vertex, the start first, neighbors in adjacency insertion order.
    /// No-op when `start` is absent.
    pub fn walk<F>(&self, start: &V, mut visit: F)
    where
        F: FnMut(&V),
    {
        if !self.has_vertex(start) {
            return;
        }

        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();

        queue.push_back(start.clone());
        visited.insert(start.clone());

        while let Some(current) = queue.pop_front() {
            visit(&current);

            for edge in self.edges_from(&current) {
                // insert() is false for an already-visited neighbor
                if visited.insert(edge.to.clone()) {
                    queue.push_back(edge.to.clone());
                }
            }
        }
    }

    /// Single-source shortest path via the default Bellman-Ford
    /// engine. See [`BellmanFordSolver`] for the algorithm and its
    /// error cases.
    pub fn shortest_path(&self, from: &V, to: &V) -> Result<Vec<Edge<V, D>>, Error> {
        BellmanFordSolver.shortest_path(self, from, to)
    }
}

impl<V, D> Default for Graph<V, D>
where
    V: Eq + Hash + Clone,
    D: Measure,
{
    fn default() -> Self {
        Self::new()
    }
}
