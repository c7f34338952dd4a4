pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod report;

use std::env;

use generator::NetworkGenerator;
use loader::NetworkLoader;
use wayfind_core::Graph;

fn main() {
    let source = parse_args();

    if let Err(e) = run(source) {
        eprintln!("planner failed: {e}");
        std::process::exit(1);
    }
}

/// Where the network comes from.
enum NetworkSource {
    Demo,
    Csv(String),
    Generated,
}

/// Parse command-line arguments to determine the network source.
fn parse_args() -> NetworkSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "demo".to_string());

    match source.as_str() {
        "demo" => NetworkSource::Demo,
        "gen" => NetworkSource::Generated,
        "csv" => {
            let path = args.get(2).expect("CSV path required for CSV mode").clone();
            NetworkSource::Csv(path)
        }
        _ => {
            eprintln!(
                "Usage: {} <demo|csv|gen> [path_to_csv]\n  - demo: query the built-in five-site network\n  - csv:  load a network from an edge-list CSV file\n  - gen:  generate a random network from Config.toml",
                args[0]
            );
            std::process::exit(1);
        }
    }
}

fn run(source: NetworkSource) -> Result<(), error::Error> {
    match source {
        NetworkSource::Demo => {
            println!("Querying the built-in demo network...");
            let graph = demo_network()?;
            report::run_report(&graph, Some((&1, &5)));
        }
        NetworkSource::Csv(path) => {
            println!("Loading network from {path}...");
            let graph = NetworkLoader::new(path).load()?;
            report::run_report(&graph, None);
        }
        NetworkSource::Generated => {
            let config = config::load_config()?;
            println!(
                "Generating a random network of {} sites...",
                config.generator.total_sites
            );
            let graph = NetworkGenerator::new(config.generator).build()?;
            report::run_report(&graph, None);
        }
    }
    Ok(())
}

/// Five sites on a one-way ring with a single shortcut link.
fn demo_network() -> Result<Graph<u32, f64>, error::Error> {
    let mut graph = Graph::new();
    for site in 1..=5 {
        graph.add_vertex(site)?;
    }
    graph.add_edge(1, 2, 5.0)?;
    graph.add_edge(2, 3, 2.0)?;
    graph.add_edge(3, 4, 1.0)?;
    graph.add_edge(4, 5, 3.0)?;
    graph.add_edge(5, 1, 4.0)?;
    graph.add_edge(2, 5, 2.5)?;
    Ok(graph)
}
