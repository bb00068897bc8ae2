//! Reference graph pairs shared by the unit tests.

use crate::{AdjacencyMatrix, Graph, Input};

/// 8x8 graphs with a maximum common induced subgraph of 6 vertices.
pub fn case1() -> Input {
    let g1 = Graph::from_adjacency_matrix(vec![
        vec![0, 1, 0, 0, 0, 0, 0, 0],
        vec![1, 0, 1, 1, 0, 0, 0, 1],
        vec![0, 1, 0, 1, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 1, 0, 1, 0],
        vec![0, 0, 0, 1, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 1, 0],
        vec![0, 0, 0, 1, 0, 1, 0, 1],
        vec![0, 1, 0, 0, 0, 0, 1, 0],
    ]);
    let g2 = Graph::from_adjacency_matrix(vec![
        vec![0, 1, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 1, 0, 1, 0, 0, 1, 0],
        vec![0, 0, 1, 0, 1, 0, 0, 0],
        vec![0, 0, 0, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 1, 0],
        vec![0, 0, 1, 0, 0, 1, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 1, 0],
    ]);
    Input::new(g1, g2)
}

/// A single edge against a path of three vertices.
pub fn case2() -> Input {
    let g1 = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![1, 0]]);
    let g2 = Graph::from_adjacency_matrix(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
    Input::new(g1, g2)
}

/// 5x6 graphs where the second graph is bigger.
pub fn case3() -> Input {
    let g1 = Graph::from_adjacency_matrix(vec![
        vec![0, 0, 0, 1, 1],
        vec![0, 0, 1, 0, 1],
        vec![0, 1, 0, 0, 1],
        vec![1, 0, 0, 0, 0],
        vec![1, 1, 1, 0, 0],
    ]);
    let g2 = Graph::from_adjacency_matrix(vec![
        vec![0, 1, 0, 0, 1, 0],
        vec![1, 0, 0, 1, 0, 1],
        vec![0, 0, 0, 1, 0, 1],
        vec![0, 1, 1, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 1],
        vec![0, 1, 1, 1, 1, 0],
    ]);
    Input::new(g1, g2)
}

pub fn case4() -> Input {
    let g1 = Graph::from_edges(5, &[(0, 3), (0, 4), (1, 2), (1, 4), (2, 4)]);
    let g2 = Graph::from_edges(
        6,
        &[
            (0, 1),
            (0, 2),
            (0, 4),
            (1, 3),
            (1, 5),
            (2, 3),
            (2, 4),
            (2, 5),
            (3, 5),
            (4, 5),
        ],
    );
    Input::new(g1, g2)
}

/// `K4` minus an edge against `K3`.
pub fn case5() -> Input {
    let g1 = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)]);
    let g2 = Graph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
    Input::new(g1, g2)
}

pub fn all_cases() -> Vec<Input> {
    vec![case1(), case2(), case3(), case4(), case5()]
}

pub fn supergraph_case4() -> AdjacencyMatrix {
    Graph::from_edges(
        7,
        &[
            (0, 3),
            (0, 4),
            (0, 5),
            (0, 6),
            (1, 2),
            (1, 3),
            (1, 5),
            (1, 6),
            (2, 3),
            (2, 6),
            (5, 6),
        ],
    )
    .adjacency_matrix()
    .clone()
}
