//! Benchmark inputs.
//!
//! Pattern 1 and pattern 3 pairs are deterministic, pattern 2 and random graphs
//! take the random number generator from the caller.

use crate::error::ConfigError;
use crate::{Graph, Input, Result};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Vertices `0..n` where every consecutive pair of a triangle strip shares an edge:
/// triangles `(0, 1, 2)`, `(2, 3, 4)`, ...
fn triangle_strip(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in (0..n.saturating_sub(2)).step_by(2) {
        edges.extend([(i, i + 1), (i, i + 2), (i + 1, i + 2)]);
    }
    Graph::from_edges(n, &edges)
}

/// Wheel on `labels`: `labels[0]` is the hub, the rest form the rim in order.
fn wheel(labels: &[usize]) -> Graph {
    let n = labels.len();
    let mut edges = Vec::new();
    for i in 1..n {
        edges.push((labels[0], labels[i]));
    }
    for i in 1..n - 1 {
        edges.push((labels[i], labels[i + 1]));
    }
    edges.push((labels[1], labels[n - 1]));
    Graph::from_edges(n, &edges)
}

/// Path on `n` vertices against a strip of `n - 1` triangles on `2n - 1` vertices.
/// The path is isomorphic to a subgraph of the strip.
pub fn pattern1(n: usize) -> Result<Input> {
    if n < 2 {
        return Err(ConfigError::InvalidPatternSize {
            pattern: "1",
            n,
            reason: "at least 2 vertices are needed",
        }
        .into());
    }
    let path: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    Ok(Input::new(
        Graph::from_edges(n, &path),
        triangle_strip(2 * n - 1),
    ))
}

/// Two randomly relabelled copies of the wheel on `n` vertices.
pub fn pattern2<R: Rng>(n: usize, rng: &mut R) -> Result<Input> {
    if n < 4 {
        return Err(ConfigError::InvalidPatternSize {
            pattern: "2",
            n,
            reason: "at least 4 vertices are needed",
        }
        .into());
    }
    let mut labels1: Vec<usize> = (0..n).collect();
    labels1.shuffle(rng);
    let mut labels2: Vec<usize> = (0..n).collect();
    labels2.shuffle(rng);
    Ok(Input::new(wheel(&labels1), wheel(&labels2)))
}

/// Wheel on `n` vertices against a triangle strip on `n + 1` vertices.
pub fn pattern3(n: usize) -> Result<Input> {
    if n < 4 || n % 2 == 1 {
        return Err(ConfigError::InvalidPatternSize {
            pattern: "3",
            n,
            reason: "an even number of at least 4 vertices is needed",
        }
        .into());
    }
    let labels: Vec<usize> = (0..n).collect();
    Ok(Input::new(wheel(&labels), triangle_strip(n + 1)))
}

/// A fixed pair of isomorphic graphs on 7 vertices.
pub fn isomorphic_graphs_7() -> Input {
    Input::new(
        Graph::from_edges(
            7,
            &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (5, 6)],
        ),
        Graph::from_edges(
            7,
            &[(0, 2), (0, 3), (0, 6), (1, 3), (1, 5), (3, 5), (4, 6)],
        ),
    )
}

/// Random connected graph: a random spanning tree plus every other edge with
/// probability `density`.
pub fn random_connected<R: Rng>(n: usize, density: f64, rng: &mut R) -> Graph {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut edges = Vec::new();
    for i in 1..n {
        let parent = order[rng.gen_range(0..i)];
        edges.push((order[i], parent));
    }
    let tree = Graph::from_edges(n, &edges);

    let extra = (0..n)
        .tuple_combinations()
        .filter(|&(u, v)| !tree.is_adjacent(u, v) && rng.gen::<f64>() < density)
        .collect_vec();
    edges.extend(extra);
    Graph::from_edges(n, &edges)
}

fn write_graph<W: Write>(out: &mut W, g: &Graph) -> io::Result<()> {
    writeln!(out, "{}", g.num_vertices())?;
    for row in g.adjacency_matrix() {
        writeln!(out, "{}", row.iter().join(" "))?;
    }
    Ok(())
}

/// Writes both graphs in the solver's input format.
pub fn write_input<W: Write>(out: &mut W, input: &Input) -> io::Result<()> {
    write_graph(out, &input.g1)?;
    writeln!(out)?;
    write_graph(out, &input.g2)
}

pub fn write_input_file(path: impl AsRef<Path>, input: &Input) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_input(&mut out, input)?;
    out.flush()?;
    Ok(())
}
