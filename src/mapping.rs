use crate::genetic::Genome;
use crate::{AdjacencyMatrix, Graph};
use std::fmt;

/// A vertex `v1` of graph 1 matched to vertex `v2` of graph 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub v1: usize,
    pub v2: usize,
}

impl Pair {
    pub fn new(v1: usize, v2: usize) -> Self {
        Pair { v1, v2 }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v1, self.v2)
    }
}

/// One vertex of a minimum common supergraph and where it comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupergraphVertex {
    /// Part of the common core, present in both graphs
    Common(Pair),
    /// Only in graph 1
    First(usize),
    /// Only in graph 2
    Second(usize),
}

impl SupergraphVertex {
    pub fn v1(&self) -> Option<usize> {
        match *self {
            SupergraphVertex::Common(pair) => Some(pair.v1),
            SupergraphVertex::First(v1) => Some(v1),
            SupergraphVertex::Second(_) => None,
        }
    }

    pub fn v2(&self) -> Option<usize> {
        match *self {
            SupergraphVertex::Common(pair) => Some(pair.v2),
            SupergraphVertex::First(_) => None,
            SupergraphVertex::Second(v2) => Some(v2),
        }
    }
}

/// Result of a maximum common subgraph algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaximumCommonSubgraph {
    g1: Graph,
    g2: Graph,
    /// Sorted by `v1`
    pairs: Vec<Pair>,
    /// Induced from graph 1 over the matched vertices, in `pairs` order
    adjacency_matrix: AdjacencyMatrix,
    /// Present only for results of the genetic algorithm
    best_genome: Option<Genome>,
}

impl MaximumCommonSubgraph {
    pub fn new(g1: &Graph, g2: &Graph, mut pairs: Vec<Pair>, best_genome: Option<Genome>) -> Self {
        pairs.sort_by_key(|p| p.v1);
        let adjacency_matrix = pairs
            .iter()
            .map(|p| pairs.iter().map(|q| g1.get_edge(p.v1, q.v1)).collect())
            .collect();
        MaximumCommonSubgraph {
            g1: g1.clone(),
            g2: g2.clone(),
            pairs,
            adjacency_matrix,
            best_genome,
        }
    }

    pub fn exact(g1: &Graph, g2: &Graph, pairs: Vec<Pair>) -> Self {
        Self::new(g1, g2, pairs, None)
    }

    pub fn g1(&self) -> &Graph {
        &self.g1
    }

    pub fn g2(&self) -> &Graph {
        &self.g2
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.adjacency_matrix
    }

    pub fn best_genome(&self) -> Option<&Genome> {
        self.best_genome.as_ref()
    }

    pub fn from_genetic(&self) -> bool {
        self.best_genome.is_some()
    }

    /// Adjacency over the matched vertices as seen in graph 2, in `pairs` order.
    pub fn adjacency_matrix_in_g2(&self) -> AdjacencyMatrix {
        self.pairs
            .iter()
            .map(|p| self.pairs.iter().map(|q| self.g2.get_edge(p.v2, q.v2)).collect())
            .collect()
    }

    /// Ascending indices of graph 1 vertices outside the common subgraph.
    pub fn vertices_from_g1_not_in_mcs(&self) -> Vec<usize> {
        let mut matched = vec![false; self.g1.num_vertices()];
        for p in &self.pairs {
            matched[p.v1] = true;
        }
        (0..self.g1.num_vertices()).filter(|&v| !matched[v]).collect()
    }

    /// Ascending indices of graph 2 vertices outside the common subgraph.
    pub fn vertices_from_g2_not_in_mcs(&self) -> Vec<usize> {
        let mut matched = vec![false; self.g2.num_vertices()];
        for p in &self.pairs {
            matched[p.v2] = true;
        }
        (0..self.g2.num_vertices()).filter(|&v| !matched[v]).collect()
    }
}

/// Result of the minimum common supergraph construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumCommonSupergraph {
    mcs: MaximumCommonSubgraph,
    vertices: Vec<SupergraphVertex>,
    adjacency_matrix: AdjacencyMatrix,
}

impl MinimumCommonSupergraph {
    pub fn new(
        mcs: MaximumCommonSubgraph,
        vertices: Vec<SupergraphVertex>,
        adjacency_matrix: AdjacencyMatrix,
    ) -> Self {
        MinimumCommonSupergraph {
            mcs,
            vertices,
            adjacency_matrix,
        }
    }

    pub fn mcs(&self) -> &MaximumCommonSubgraph {
        &self.mcs
    }

    pub fn vertices(&self) -> &[SupergraphVertex] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.adjacency_matrix
    }

    pub fn as_graph(&self) -> Graph {
        Graph::from_adjacency_matrix(self.adjacency_matrix.clone())
    }
}
