use std::collections::HashMap;
use std::hash::Hash;

use common::{
    error::Error,
    types::{Edge, Measure},
};

use crate::graph::Graph;
use crate::traits::PathSolver;

/// Sums the edge distances along a path. An empty path sums to zero.
pub fn path_distance<V, D: Measure>(path: &[Edge<V, D>]) -> D {
    path.iter()
        .fold(D::zero(), |total, edge| total + edge.distance)
}

/// Solver implementing Bellman-Ford single-source shortest paths with
/// negative-cycle detection.
///
/// Distances start at infinity (zero for the source) and are relaxed
/// over every stored edge for `|V| - 1` passes. Relaxation is
/// sequential and in place: an improvement made earlier in a pass is
/// visible to later edges of the same pass, which speeds convergence
/// without changing the fixed point. Each improvement records the edge
/// that produced it; the path is rebuilt by walking those predecessor
/// edges backward from the target.
///
/// An edge whose source is still at infinity is skipped, so an
/// unreachable negative cycle is ignored and integer distance types
/// never add to their infinity sentinel.
pub struct BellmanFordSolver;

impl<V, D> PathSolver<V, D> for BellmanFordSolver
where
    V: Eq + Hash + Clone,
    D: Measure,
{
    /// Computes the shortest path from `from` to `to`.
    ///
    /// # Errors
    /// - `Error::MissingVertex` if either endpoint is absent.
    /// - `Error::NegativeCycle` if one more scan after the `|V| - 1`
    ///   passes can still improve a distance; no partial path is
    ///   returned.
    /// - `Error::NoPath` if the target's distance is still infinite
    ///   after relaxation. Without this check the backward walk from an
    ///   unreached target would never arrive at `from`.
    fn shortest_path(
        &self,
        graph: &Graph<V, D>,
        from: &V,
        to: &V,
    ) -> Result<Vec<Edge<V, D>>, Error> {
        if !graph.has_vertex(from) || !graph.has_vertex(to) {
            return Err(Error::MissingVertex);
        }

        let mut distance: HashMap<V, D> = graph
            .vertices()
            .map(|v| (v.clone(), D::infinity()))
            .collect();
        distance.insert(from.clone(), D::zero());

        // Absence in this map is the "no predecessor" sentinel.
        let mut predecessor: HashMap<V, Edge<V, D>> = HashMap::new();

        for _ in 1..graph.order() {
            let mut updated = false;
            for u in graph.vertices() {
                for edge in graph.edges_from(u) {
                    let known = distance[u];
                    if known.is_infinite() {
                        continue;
                    }
                    let candidate = known + edge.distance;
                    if candidate < distance[&edge.to] {
                        distance.insert(edge.to.clone(), candidate);
                        predecessor.insert(edge.to.clone(), edge.clone());
                        updated = true;
                    }
                }
            }
            // A full pass without improvement has reached the fixed
            // point; later passes would change nothing.
            if !updated {
                break;
            }
        }

        // One more full scan: any remaining improvement proves a
        // negative cycle reachable from the source.
        for u in graph.vertices() {
            for edge in graph.edges_from(u) {
                let known = distance[u];
                if known.is_infinite() {
                    continue;
                }
                if known + edge.distance < distance[&edge.to] {
                    return Err(Error::NegativeCycle);
                }
            }
        }

        if from != to && distance[to].is_infinite() {
            return Err(Error::NoPath);
        }

        // Walk predecessor edges backward from the target. The walk
        // terminates at `from`, the only reached vertex without a
        // predecessor; when `from == to` the path is empty.
        let mut path = Vec::new();
        let mut cursor = to.clone();
        while let Some(edge) = predecessor.get(&cursor) {
            path.push(edge.clone());
            cursor = edge.from.clone();
        }
        path.reverse();
        Ok(path)
    }
}
