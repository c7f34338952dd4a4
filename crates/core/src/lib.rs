pub mod analytics;
pub mod graph;
pub mod solver;
pub mod traits;

pub use graph::Graph;
