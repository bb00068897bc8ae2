#![allow(dead_code)]

use common_subgraph::config::GeneticConfiguration;
use common_subgraph::generator::random_connected;
use common_subgraph::{Graph, Input};
use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn cycle(n: usize) -> Graph {
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    Graph::from_edges(n, &edges)
}

pub fn complete(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            edges.push((i, j));
        }
    }
    Graph::from_edges(n, &edges)
}

/// Small genetic configuration that keeps property tests fast.
pub fn small_config() -> GeneticConfiguration {
    GeneticConfiguration {
        population_size: 16,
        generations: 20,
        shuffle_period: 4,
        tribe_count: 2,
        crossover_probability: 0.9,
        mutation_probability: 0.5,
    }
}

/// Connected, undirected, unweighted, loop-free graph with 2 to 10 vertices.
#[derive(Clone, Debug)]
pub struct ArbitraryGraph(pub Graph);

impl Arbitrary for ArbitraryGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 9 + 2;
        let density = *g.choose(&[0.0, 0.2, 0.5, 0.8]).unwrap();
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        Self(random_connected(n, density, &mut rng))
    }
}

/// Two independent arbitrary graphs.
#[derive(Clone, Debug)]
pub struct ArbitraryInput(pub Input);

impl Arbitrary for ArbitraryInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let g1 = ArbitraryGraph::arbitrary(g).0;
        let g2 = ArbitraryGraph::arbitrary(g).0;
        Self(Input::new(g1, g2))
    }
}
