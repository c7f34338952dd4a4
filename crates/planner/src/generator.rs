use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::GeneratorConfig;
use super::error::Error;
use wayfind_core::Graph;

/// Produces synthetic road networks for exercising the queries.
///
/// The generator owns its random source explicitly — a configured seed
/// reproduces the exact same network, an absent seed draws one from
/// the OS.
pub struct NetworkGenerator {
    config: GeneratorConfig,
    rng: SmallRng,
}

impl NetworkGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        NetworkGenerator { config, rng }
    }

    /// Builds a one-way ring over all sites, so every site can reach
    /// every other, then adds the configured number of random chords.
    /// All distances are drawn from the configured range.
    pub fn build(mut self) -> Result<Graph<u32, f64>, Error> {
        let total_sites = self.config.total_sites;
        let mut graph = Graph::new();

        for site in 0..total_sites {
            graph.add_vertex(site)?;
        }
        if total_sites == 0 {
            return Ok(graph);
        }

        for site in 0..total_sites {
            let distance = self.random_distance();
            graph.add_edge(site, (site + 1) % total_sites, distance)?;
        }

        for _ in 0..self.config.extra_links {
            let from = self.rng.random_range(0..total_sites);
            let to = self.rng.random_range(0..total_sites);
            let distance = self.random_distance();
            graph.add_edge(from, to, distance)?;
        }

        Ok(graph)
    }

    fn random_distance(&mut self) -> f64 {
        self.rng
            .random_range(self.config.min_distance..=self.config.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(total_sites: u32, extra_links: usize, seed: Option<u64>) -> GeneratorConfig {
        GeneratorConfig {
            total_sites,
            extra_links,
            min_distance: 1.0,
            max_distance: 20.0,
            seed,
        }
    }

    #[test]
    fn test_generated_network_has_expected_shape() {
        let graph = NetworkGenerator::new(test_config(10, 7, Some(1)))
            .build()
            .expect("generation should succeed");

        assert_eq!(graph.order(), 10);
        assert_eq!(graph.edge_count(), 17); // ring + chords

        for v in graph.vertices() {
            for edge in graph.edges_from(v) {
                assert!(edge.from < 10, "from site out of bounds");
                assert!(edge.to < 10, "to site out of bounds");
                assert!(
                    edge.distance >= 1.0 && edge.distance <= 20.0,
                    "distance out of bounds"
                );
            }
        }
    }

    #[test]
    fn test_ring_makes_every_site_reachable() {
        let graph = NetworkGenerator::new(test_config(8, 0, Some(2)))
            .build()
            .expect("generation should succeed");

        let mut visited = 0;
        graph.walk(&0, |_| visited += 1);
        assert_eq!(visited, 8);
    }

    #[test]
    fn test_fixed_seed_reproduces_the_network() {
        let a = NetworkGenerator::new(test_config(6, 5, Some(99)))
            .build()
            .expect("generation should succeed");
        let b = NetworkGenerator::new(test_config(6, 5, Some(99)))
            .build()
            .expect("generation should succeed");

        let mut sites: Vec<u32> = a.vertices().copied().collect();
        sites.sort_unstable();
        for v in sites {
            assert_eq!(a.edges_from(&v), b.edges_from(&v));
        }
    }

    #[test]
    fn test_empty_network_is_allowed() {
        let graph = NetworkGenerator::new(test_config(0, 3, Some(1)))
            .build()
            .expect("generation should succeed");
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
