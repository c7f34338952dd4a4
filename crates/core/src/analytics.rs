use std::hash::Hash;

use common::{error::Error, types::Measure};

use crate::graph::Graph;
use crate::solver::path_distance;

impl<V, D> Graph<V, D>
where
    V: Eq + Hash + Clone,
    D: Measure,
{
    /// Finds the vertex with the greatest average shortest-path
    /// distance to the vertices it can reach.
    ///
    /// For every vertex the shortest path to each other vertex is
    /// computed and its distances summed; the average divides by the
    /// number of *reachable* peers only — an unreachable peer
    /// contributes to neither the sum nor the count. A vertex that
    /// reaches no peer at all has no defined average and is never the
    /// answer. Ties keep the first candidate encountered; the vertex
    /// set is unordered, so callers must not rely on which one that is.
    ///
    /// # Errors
    /// - `Error::EmptyGraph` when the graph has no vertices.
    /// - `Error::NoOtherVertices` when it has exactly one, since there
    ///   is nothing to average over.
    /// - `Error::NoPath` when no vertex can reach any peer, so no
    ///   average exists anywhere.
    /// - `Error::NegativeCycle` propagated from any of the underlying
    ///   shortest-path runs.
    pub fn find_furthest_vertex(&self) -> Result<V, Error> {
        if self.order() == 0 {
            return Err(Error::EmptyGraph);
        }
        if self.order() == 1 {
            return Err(Error::NoOtherVertices);
        }

        let mut furthest: Option<V> = None;
        let mut max_average = f64::NEG_INFINITY;

        for v in self.vertices() {
            let mut total = 0.0;
            let mut reachable = 0usize;

            for u in self.vertices() {
                if u == v {
                    continue;
                }
                match self.shortest_path(v, u) {
                    Ok(path) => {
                        total += path_distance(&path).as_f64();
                        reachable += 1;
                    }
                    Err(Error::NoPath) => continue,
                    Err(e) => return Err(e),
                }
            }

            if reachable == 0 {
                continue;
            }
            let average = total / reachable as f64;
            if average > max_average {
                max_average = average;
                furthest = Some(v.clone());
            }
        }

        furthest.ok_or(Error::NoPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn demo_network() -> Graph<u32, f64> {
        let mut g = Graph::new();
        for v in 1..=5 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(1, 2, 5.0).unwrap();
        g.add_edge(2, 3, 2.0).unwrap();
        g.add_edge(3, 4, 1.0).unwrap();
        g.add_edge(4, 5, 3.0).unwrap();
        g.add_edge(5, 1, 4.0).unwrap();
        g.add_edge(2, 5, 2.5).unwrap();
        g
    }

    /// Recomputes per-vertex averages with plain shortest-path calls so
    /// the query result can be checked against an independent maximum.
    fn averages(g: &Graph<u32, f64>) -> HashMap<u32, f64> {
        let mut result = HashMap::new();
        let vertices: Vec<u32> = g.vertices().copied().collect();
        for &v in &vertices {
            let mut total = 0.0;
            let mut count = 0;
            for &u in &vertices {
                if u == v {
                    continue;
                }
                if let Ok(path) = g.shortest_path(&v, &u) {
                    total += path_distance(&path);
                    count += 1;
                }
            }
            if count > 0 {
                result.insert(v, total / count as f64);
            }
        }
        result
    }

    #[test]
    fn empty_graph_is_an_error() {
        let g: Graph<u32, f64> = Graph::new();
        assert_eq!(g.find_furthest_vertex(), Err(Error::EmptyGraph));
    }

    #[test]
    fn single_vertex_has_no_average_to_compare() {
        let mut g: Graph<u32, f64> = Graph::new();
        g.add_vertex(1).unwrap();
        assert_eq!(g.find_furthest_vertex(), Err(Error::NoOtherVertices));
    }

    #[test]
    fn fully_disconnected_graph_has_no_answer() {
        let mut g: Graph<u32, f64> = Graph::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        assert_eq!(g.find_furthest_vertex(), Err(Error::NoPath));
    }

    #[test]
    fn furthest_vertex_has_the_maximum_recomputed_average() {
        let g = demo_network();
        let furthest = g.find_furthest_vertex().unwrap();

        let averages = averages(&g);
        let best = averages[&furthest];
        for (&v, &avg) in &averages {
            assert!(
                avg <= best,
                "vertex {v} has average {avg}, greater than winner's {best}"
            );
        }
    }

    #[test]
    fn furthest_vertex_is_deterministic_when_averages_are_distinct() {
        // Chain 1→2→3 with a long tail edge 3→4: averages differ
        // pairwise, so the winner does not depend on iteration order.
        let mut g: Graph<u32, f64> = Graph::new();
        for v in 1..=4 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 2.0).unwrap();
        g.add_edge(3, 4, 10.0).unwrap();

        let averages = averages(&g);
        let mut sorted: Vec<f64> = averages.values().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted.dedup();
        assert_eq!(sorted.len(), averages.len(), "fixture averages must be distinct");

        let furthest = g.find_furthest_vertex().unwrap();
        let (&expected, _) = averages
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert_eq!(furthest, expected);
    }

    #[test]
    fn unreachable_peers_are_excluded_from_the_average() {
        // 1→2 with weight 100, vertex 3 isolated. Vertex 1 averages
        // only over {2}; vertex 2 and 3 reach nobody and are skipped.
        let mut g: Graph<u32, f64> = Graph::new();
        for v in 1..=3 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(1, 2, 100.0).unwrap();

        assert_eq!(g.find_furthest_vertex(), Ok(1));
    }

    #[test]
    fn negative_cycle_propagates_from_the_inner_query() {
        let mut g: Graph<u32, f64> = Graph::new();
        for v in 1..=3 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 1, -2.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        assert_eq!(g.find_furthest_vertex(), Err(Error::NegativeCycle));
    }
}
