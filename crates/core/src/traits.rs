use std::hash::Hash;

use common::{
    error::Error,
    types::{Edge, Measure},
};

use crate::graph::Graph;

/// Trait for shortest-path engines over a [`Graph`].
pub trait PathSolver<V, D>
where
    V: Eq + Hash + Clone,
    D: Measure,
{
    /// Computes the shortest path from `from` to `to` as the ordered
    /// sequence of edges to traverse.
    ///
    /// Returns `Ok(path)` on success (empty when `from == to`),
    /// or `Err(e)` when an endpoint is missing, the target is
    /// unreachable, or a reachable negative cycle makes the answer
    /// ill-defined.
    fn shortest_path(
        &self,
        graph: &Graph<V, D>,
        from: &V,
        to: &V,
    ) -> Result<Vec<Edge<V, D>>, Error>;
}
