use thiserror::Error;

/// Errors raised by graph mutations and queries.
///
/// All variants are deterministic caller-input or graph-state errors:
/// they are raised synchronously at the offending call, never retried,
/// and the graph is left unchanged when one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Attempt to add a vertex that is already present.
    #[error("Vertex already exists in the graph.")]
    DuplicateVertex,

    /// An operation referenced a vertex that is not in the graph.
    #[error("Vertex does not exist in the graph.")]
    MissingVertex,

    /// The shortest-path scan found a cycle of net-negative weight
    /// reachable from the source, so "shortest" is ill-defined.
    #[error("Graph contains a negative cycle reachable from the source.")]
    NegativeCycle,

    /// The shortest-path target cannot be reached from the source.
    #[error("Target vertex is unreachable from the source.")]
    NoPath,

    /// The furthest-vertex query was asked of a graph with no vertices.
    #[error("Graph has no vertices.")]
    EmptyGraph,

    /// The furthest-vertex query needs at least two vertices to have
    /// an average distance to compare.
    #[error("Graph has a single vertex; average distance is undefined.")]
    NoOtherVertices,
}
