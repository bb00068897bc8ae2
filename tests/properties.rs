mod common;

use common::{small_config, ArbitraryGraph, ArbitraryInput};
use common_subgraph::error::GraphError;
use common_subgraph::genetic::Genetic;
use common_subgraph::mapping::{MinimumCommonSupergraph, SupergraphVertex};
use common_subgraph::mcsplit::McSplit;
use common_subgraph::supergraph::{build_supergraph, MaximumCommonSubgraphAlgorithm};
use common_subgraph::utils::orient;
use common_subgraph::Graph;
use quickcheck::{quickcheck, TestResult};

/// Re-extracts one input graph from the supergraph through the vertex origins.
fn embedded(
    supergraph: &MinimumCommonSupergraph,
    n: usize,
    side: impl Fn(&SupergraphVertex) -> Option<usize>,
) -> Vec<Vec<usize>> {
    let mut position = vec![0; n];
    for (k, vertex) in supergraph.vertices().iter().enumerate() {
        if let Some(v) = side(vertex) {
            position[v] = k;
        }
    }
    let adj = supergraph.adjacency_matrix();
    (0..n)
        .map(|u| (0..n).map(|v| adj[position[u]][position[v]]).collect())
        .collect()
}

quickcheck! {
    fn prop_exact_result_is_isomorphic_and_bounded(input: ArbitraryInput) -> bool {
        let input = input.0;
        let mcs = McSplit::new().compute(&input.g1, &input.g2).unwrap();

        mcs.size() <= input.g1.num_vertices().min(input.g2.num_vertices())
            && mcs.adjacency_matrix() == &mcs.adjacency_matrix_in_g2()
    }

    fn prop_exact_is_at_least_genetic(input: ArbitraryInput) -> bool {
        let (input, _) = orient(input.0);
        let exact = McSplit::new().compute(&input.g1, &input.g2).unwrap();
        let genetic = Genetic::new(small_config())
            .unwrap()
            .compute(&input.g1, &input.g2)
            .unwrap();

        genetic.adjacency_matrix() == &genetic.adjacency_matrix_in_g2()
            && exact.size() >= genetic.size()
    }

    fn prop_supergraph_embeds_both_graphs(input: ArbitraryInput) -> bool {
        let input = input.0;
        let (n1, n2) = (input.g1.num_vertices(), input.g2.num_vertices());
        let mcs = McSplit::new().compute(&input.g1, &input.g2).unwrap();
        let m = mcs.size();
        let supergraph = build_supergraph(mcs);

        supergraph.num_vertices() == n1 + n2 - m
            && &embedded(&supergraph, n1, SupergraphVertex::v1) == input.g1.adjacency_matrix()
            && &embedded(&supergraph, n2, SupergraphVertex::v2) == input.g2.adjacency_matrix()
    }

    fn prop_genetic_replay_is_deterministic(input: ArbitraryInput, seed: u64) -> bool {
        let (input, _) = orient(input.0);
        let first = Genetic::new(small_config()).unwrap().with_seed(seed);
        let second = Genetic::new(small_config()).unwrap().with_seed(seed);

        let a = first.compute(&input.g1, &input.g2).unwrap();
        let b = second.compute(&input.g1, &input.g2).unwrap();

        a.best_genome() == b.best_genome() && a.pairs() == b.pairs()
    }

    fn prop_self_loop_is_rejected(graph: ArbitraryGraph, vertex: usize) -> bool {
        let g = graph.0;
        let n = g.num_vertices();
        let vertex = vertex % n;
        let mut adj = g.adjacency_matrix().clone();
        adj[vertex][vertex] = 1;

        Graph::new(n, adj).validate() == Err(GraphError::SelfLoop { vertex })
    }

    fn prop_asymmetry_is_rejected(graph: ArbitraryGraph, i: usize, j: usize) -> TestResult {
        let g = graph.0;
        let n = g.num_vertices();
        let (i, j) = (i % n, j % n);
        if i == j {
            return TestResult::discard();
        }
        let (i, j) = (i.min(j), i.max(j));
        let mut adj = g.adjacency_matrix().clone();
        adj[i][j] = 1 - adj[i][j];

        let result = Graph::new(n, adj).validate();
        TestResult::from_bool(result == Err(GraphError::NotSymmetric { i, j }))
    }

    fn prop_isolated_vertex_is_rejected(graph: ArbitraryGraph) -> bool {
        let g = graph.0;
        let n = g.num_vertices();
        let mut adj = g.adjacency_matrix().clone();
        for row in adj.iter_mut() {
            row.push(0);
        }
        adj.push(vec![0; n + 1]);

        Graph::new(n + 1, adj).validate() == Err(GraphError::Disconnected)
    }
}
