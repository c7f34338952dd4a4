use std::fmt::Display;
use std::hash::Hash;

use wayfind_core::Graph;
use wayfind_core::solver::path_distance;

/// Runs the standard set of queries against a network and prints the
/// results.
///
/// Queries are independent: when one fails, its error kind is reported
/// and the remaining queries still run.
pub fn run_report<V>(graph: &Graph<V, f64>, sample_route: Option<(&V, &V)>)
where
    V: Eq + Hash + Clone + Display,
{
    println!(
        "Network: {} sites, {} links",
        graph.order(),
        graph.edge_count()
    );

    match graph.find_furthest_vertex() {
        Ok(site) => {
            println!("Most remote site by average travel distance: {site}");
            print_reachable(graph, &site);
        }
        Err(e) => eprintln!("Furthest-site query failed: {e}"),
    }

    if let Some((from, to)) = sample_route {
        match graph.shortest_path(from, to) {
            Ok(path) => {
                println!(
                    "Shortest route {from} -> {to}: total distance {}",
                    path_distance(&path)
                );
                for edge in &path {
                    println!("  {} -> {} ({})", edge.from, edge.to, edge.distance);
                }
            }
            Err(e) => eprintln!("Route query {from} -> {to} failed: {e}"),
        }
    }
}

fn print_reachable<V>(graph: &Graph<V, f64>, start: &V)
where
    V: Eq + Hash + Clone + Display,
{
    let mut sites = Vec::new();
    graph.walk(start, |v| sites.push(v.to_string()));
    println!("Sites reachable from {start}: {}", sites.join(", "));
}
