use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;

use super::error::Error;
use wayfind_core::Graph;

/// One row of the edge-list input: a directed link between two named
/// sites with a travel distance.
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Assembles an in-memory network from an edge-list CSV file. The core
/// graph itself has no I/O surface; all file handling lives here.
pub struct NetworkLoader {
    path: String,
}

impl NetworkLoader {
    pub fn new(path: String) -> Self {
        NetworkLoader { path }
    }

    /// Reads the edge list and builds the network. A site is registered
    /// the first time a row mentions it, so the file needs no separate
    /// vertex section. Repeated rows become parallel links.
    pub fn load(&self) -> Result<Graph<String, f64>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            eprintln!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut graph = Graph::new();
        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            for site in [&record.from, &record.to] {
                if !graph.has_vertex(site) {
                    graph.add_vertex(site.clone())?;
                }
            }
            graph.add_edge(record.from, record.to, record.distance)?;
        }
        Ok(graph)
    }
}
