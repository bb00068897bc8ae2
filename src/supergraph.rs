use crate::mapping::{MaximumCommonSubgraph, MinimumCommonSupergraph, SupergraphVertex};
use crate::{Graph, Result};
use log::debug;

/// Anything able to compute a maximum common subgraph of two validated graphs
pub trait MaximumCommonSubgraphAlgorithm {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<MaximumCommonSubgraph>;

    /// Short human readable name, used in reports and benchmark output.
    fn name(&self) -> &'static str;
}

impl<A: MaximumCommonSubgraphAlgorithm + ?Sized> MaximumCommonSubgraphAlgorithm for Box<A> {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<MaximumCommonSubgraph> {
        (**self).compute(g1, g2)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Builds a minimum common supergraph around the result of a subgraph algorithm
#[derive(Debug, Clone)]
pub struct MinimumCommonSupergraphAlgorithm<A> {
    algorithm: A,
}

impl<A: MaximumCommonSubgraphAlgorithm> MinimumCommonSupergraphAlgorithm<A> {
    pub fn new(algorithm: A) -> Self {
        MinimumCommonSupergraphAlgorithm { algorithm }
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn compute(&self, g1: &Graph, g2: &Graph) -> Result<MinimumCommonSupergraph> {
        let mcs = self.algorithm.compute(g1, g2)?;
        Ok(build_supergraph(mcs))
    }
}

/// Lays out the supergraph as `[core | graph 1 leftovers | graph 2 leftovers]`.
///
/// The core keeps the subgraph's order, leftovers are in ascending vertex index
/// order. Two supergraph vertices are adjacent iff they both come from graph 1 and
/// are adjacent there, or both come from graph 2 and are adjacent there. In
/// particular the two leftover blocks are never connected to each other.
pub fn build_supergraph(mcs: MaximumCommonSubgraph) -> MinimumCommonSupergraph {
    let g1_leftovers = mcs.vertices_from_g1_not_in_mcs();
    let g2_leftovers = mcs.vertices_from_g2_not_in_mcs();
    debug!(
        "building supergraph: core {}, graph 1 leftovers {}, graph 2 leftovers {}",
        mcs.size(),
        g1_leftovers.len(),
        g2_leftovers.len()
    );

    let vertices: Vec<SupergraphVertex> = mcs
        .pairs()
        .iter()
        .map(|&pair| SupergraphVertex::Common(pair))
        .chain(g1_leftovers.into_iter().map(SupergraphVertex::First))
        .chain(g2_leftovers.into_iter().map(SupergraphVertex::Second))
        .collect();

    let n = vertices.len();
    let n1 = mcs.size();
    let mut adjacency_matrix = vec![vec![0; n]; n];
    for i in 0..n {
        for j in 0..n {
            adjacency_matrix[i][j] = if i < n1 && j < n1 {
                mcs.adjacency_matrix()[i][j]
            } else {
                edge_between(&mcs, vertices[i], vertices[j])
            };
        }
    }

    MinimumCommonSupergraph::new(mcs, vertices, adjacency_matrix)
}

fn edge_between(mcs: &MaximumCommonSubgraph, a: SupergraphVertex, b: SupergraphVertex) -> usize {
    if let (Some(u), Some(v)) = (a.v1(), b.v1()) {
        return mcs.g1().get_edge(u, v);
    }
    if let (Some(u), Some(v)) = (a.v2(), b.v2()) {
        return mcs.g2().get_edge(u, v);
    }
    0
}
