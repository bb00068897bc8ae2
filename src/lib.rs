use crate::error::GraphError;

/// Row-major 0/1 adjacency matrix
pub type AdjacencyMatrix = Vec<Vec<usize>>;

/// Represents a simple undirected graph with adjacency matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Number of vertices
    n: usize,
    /// Adjacency matrix: adj[i][j] = 1 if vertices i and j are connected
    adj: AdjacencyMatrix,
}

impl Graph {
    /// Creates a graph without checking it. Call [`Graph::validate`] before matching.
    pub fn new(n: usize, adj: AdjacencyMatrix) -> Self {
        Graph { n, adj }
    }

    pub fn from_adjacency_matrix(adj: AdjacencyMatrix) -> Self {
        let n = adj.len();
        Graph { n, adj }
    }

    /// Builds a graph from an undirected edge list. Every endpoint must be below `n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj = vec![vec![0; n]; n];
        for &(u, v) in edges {
            debug_assert!(u < n && v < n, "edge ({}, {}) out of range for {} vertices", u, v, n);
            adj[u][v] = 1;
            adj[v][u] = 1;
        }
        Graph { n, adj }
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    pub fn get_edge(&self, u: usize, v: usize) -> usize {
        self.adj[u][v]
    }

    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adj[u][v] == 1
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.adj
    }

    /// Row sum of `vertex`.
    pub fn degree_of(&self, vertex: usize) -> usize {
        self.adj[vertex].iter().sum()
    }

    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[vertex]
            .iter()
            .enumerate()
            .filter(|(_, &edge)| edge == 1)
            .map(|(w, _)| w)
    }

    /// Every edge once, as `(i, j)` with `j < i`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut res = Vec::new();
        for i in 0..self.n {
            for j in 0..i {
                if self.adj[i][j] == 1 {
                    res.push((i, j));
                }
            }
        }
        res
    }

    /// Checks every structural invariant and reports the first one violated.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.validate_size()?;
        self.validate_undirected()?;
        self.validate_unweighted()?;
        self.validate_connected()
    }

    fn validate_size(&self) -> Result<(), GraphError> {
        if self.n < 2 {
            return Err(GraphError::TooFewVertices { n: self.n });
        }
        if self.adj.len() != self.n {
            return Err(GraphError::WrongHeight {
                actual: self.adj.len(),
                expected: self.n,
            });
        }
        for (row, values) in self.adj.iter().enumerate() {
            if values.len() != self.n {
                return Err(GraphError::WrongRowLength {
                    row,
                    actual: values.len(),
                    expected: self.n,
                });
            }
        }
        Ok(())
    }

    fn validate_undirected(&self) -> Result<(), GraphError> {
        for i in 0..self.n {
            if self.adj[i][i] != 0 {
                return Err(GraphError::SelfLoop { vertex: i });
            }
            for j in i + 1..self.n {
                if self.adj[i][j] != self.adj[j][i] {
                    return Err(GraphError::NotSymmetric { i, j });
                }
            }
        }
        Ok(())
    }

    fn validate_unweighted(&self) -> Result<(), GraphError> {
        for (i, row) in self.adj.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(GraphError::NotBinary { i, j, value });
                }
            }
        }
        Ok(())
    }

    fn validate_connected(&self) -> Result<(), GraphError> {
        let mut visited = vec![false; self.n];
        let mut stack = vec![0];
        visited[0] = true;
        while let Some(v) = stack.pop() {
            for w in self.neighbors(v) {
                if !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }
        if visited.iter().all(|&seen| seen) {
            Ok(())
        } else {
            Err(GraphError::Disconnected)
        }
    }
}

/// The two graphs of one problem instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub g1: Graph,
    pub g2: Graph,
}

impl Input {
    pub fn new(g1: Graph, g2: Graph) -> Self {
        Input { g1, g2 }
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        self.g1.validate()?;
        self.g2.validate()
    }
}

// Module declarations
pub mod bench;
pub mod config;
pub mod cost;
pub mod display;
pub mod error;
pub mod generator;
pub mod genetic;
pub mod mapping;
pub mod mcsplit;
pub mod parser;
pub mod supergraph;
pub mod utils;

pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod test_data;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.get_edge(0, 1), 1);
        assert_eq!(g.get_edge(1, 0), 1);
        assert_eq!(g.get_edge(0, 2), 0);
        assert!(g.validate().is_ok());
    }

    #[test]
    #[should_panic]
    fn test_from_edges_panics_on_out_of_range_endpoint() {
        Graph::from_edges(2, &[(0, 2)]);
    }

    #[test]
    fn test_degree_and_neighbors() {
        let g = test_data::case1().g1;
        assert_eq!(g.degree_of(1), 4);
        assert_eq!(g.degree_of(0), 1);
        assert_eq!(g.neighbors(6).collect::<Vec<_>>(), vec![3, 5, 7]);
    }

    #[test]
    fn test_list_of_edges() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(g.edges(), vec![(1, 0), (2, 1), (3, 0), (3, 2)]);
    }

    #[test]
    fn test_rejects_too_few_vertices() {
        let g = Graph::from_adjacency_matrix(vec![vec![0]]);
        assert_eq!(g.validate(), Err(GraphError::TooFewVertices { n: 1 }));
    }

    #[test]
    fn test_rejects_wrong_dimensions() {
        let g = Graph::new(3, vec![vec![0, 1, 0], vec![1, 0, 1]]);
        assert_eq!(
            g.validate(),
            Err(GraphError::WrongHeight {
                actual: 2,
                expected: 3
            })
        );

        let g = Graph::new(2, vec![vec![0, 1], vec![1]]);
        assert_eq!(
            g.validate(),
            Err(GraphError::WrongRowLength {
                row: 1,
                actual: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_rejects_self_loop() {
        let g = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![1, 1]]);
        assert_eq!(g.validate(), Err(GraphError::SelfLoop { vertex: 1 }));
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let g = Graph::from_adjacency_matrix(vec![vec![0, 1, 1], vec![1, 0, 0], vec![0, 0, 0]]);
        assert_eq!(g.validate(), Err(GraphError::NotSymmetric { i: 0, j: 2 }));
    }

    #[test]
    fn test_rejects_weighted_edge() {
        let g = Graph::from_adjacency_matrix(vec![vec![0, 2], vec![2, 0]]);
        assert_eq!(
            g.validate(),
            Err(GraphError::NotBinary {
                i: 0,
                j: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_rejects_disconnected_graph() {
        let g = Graph::from_edges(4, &[(0, 1), (2, 3)]);
        assert_eq!(g.validate(), Err(GraphError::Disconnected));
    }

    #[test]
    fn test_reference_cases_are_valid() {
        for input in test_data::all_cases() {
            assert!(input.validate().is_ok());
        }
    }
}
