//! Plain text reports of computed subgraphs and supergraphs.
//!
//! Every writer takes a `swapped` flag: when the solver swapped the inputs so that
//! graph 1 is the smaller one, the report swaps them back and shows vertices in the
//! order the caller passed them in.

use crate::mapping::{MaximumCommonSubgraph, MinimumCommonSupergraph};
use crate::{AdjacencyMatrix, Graph};
use itertools::Itertools;
use std::io::{self, Write};
use std::time::Duration;

const TEXT_PADDING: &str = "  ";
const MATRIX_PADDING: &str = "    ";
/// Bigger matrices are printed as adjacency lists
const ADJACENCY_MATRIX_SIZE_LIMIT: usize = 41;

/// Writes matrices up to the size limit as rows of 0/1, bigger ones as adjacency lists.
pub fn write_graph<W: Write>(out: &mut W, name: &str, adj: &AdjacencyMatrix) -> io::Result<()> {
    if adj.len() < ADJACENCY_MATRIX_SIZE_LIMIT {
        writeln!(out, "{}{} (adjacency matrix)", MATRIX_PADDING, name)?;
        for row in adj {
            writeln!(out, "{}{}", MATRIX_PADDING, row.iter().join(" "))?;
        }
        Ok(())
    } else {
        writeln!(out, "{}{} (adjacency list)", MATRIX_PADDING, name)?;
        write_adjacency_list(out, adj)
    }
}

/// One line `v: w1, w2, ...` per vertex with at least one neighbour.
pub fn write_adjacency_list<W: Write>(out: &mut W, adj: &AdjacencyMatrix) -> io::Result<()> {
    for (v, row) in adj.iter().enumerate() {
        let neighbors = row
            .iter()
            .enumerate()
            .filter(|(_, &edge)| edge == 1)
            .map(|(w, _)| w)
            .join(", ");
        if !neighbors.is_empty() {
            writeln!(out, "{}{}: {}", MATRIX_PADDING, v, neighbors)?;
        }
    }
    Ok(())
}

/// Mapping table `MCS | G1 | G2`. Missing sides are left blank, rows matched in
/// both graphs are marked with `*`.
pub fn write_mapping_table<W: Write>(
    out: &mut W,
    rows: &[(Option<usize>, Option<usize>)],
) -> io::Result<()> {
    writeln!(out, "{}{:<7}| {:<3}| {:<3}", MATRIX_PADDING, "MCS", "G1", "G2")?;
    writeln!(out, "{}-------+-----+----", MATRIX_PADDING)?;
    for (i, (v1, v2)) in rows.iter().enumerate() {
        let marker = if v1.is_some() && v2.is_some() { "*" } else { "" };
        writeln!(
            out,
            "{}{:<7}| {:<3}| {:<3}",
            MATRIX_PADDING,
            format!("{}{}", i, marker),
            cell(*v1),
            cell(*v2)
        )?;
    }
    Ok(())
}

fn cell(vertex: Option<usize>) -> String {
    vertex.map(|v| v.to_string()).unwrap_or_default()
}

fn oriented<T>(a: T, b: T, swapped: bool) -> (T, T) {
    if swapped {
        (b, a)
    } else {
        (a, b)
    }
}

fn write_input_graphs<W: Write>(
    out: &mut W,
    mcs: &MaximumCommonSubgraph,
    swapped: bool,
) -> io::Result<()> {
    let (g1, g2): (&Graph, &Graph) = oriented(mcs.g1(), mcs.g2(), swapped);
    writeln!(out, "{}Original input graphs:", TEXT_PADDING)?;
    write_graph(out, "G1", g1.adjacency_matrix())?;
    writeln!(out)?;
    write_graph(out, "G2", g2.adjacency_matrix())
}

fn write_best_genome<W: Write>(
    out: &mut W,
    mcs: &MaximumCommonSubgraph,
    swapped: bool,
) -> io::Result<()> {
    let Some(genome) = mcs.best_genome() else {
        return Ok(());
    };
    let (from, to) = oriented("G1", "G2", swapped);
    writeln!(
        out,
        "{}Best genome before reduction (distortion {}):",
        TEXT_PADDING,
        genome.distortion()
    )?;
    let assignment = genome
        .genes()
        .iter()
        .take(mcs.g1().num_vertices())
        .enumerate()
        .map(|(v, w)| format!("{}->{}", v, w))
        .join(" ");
    writeln!(out, "{}{} -> {}: {}", MATRIX_PADDING, from, to, assignment)
}

/// Report of a maximum common subgraph.
pub fn write_subgraph_report<W: Write>(
    out: &mut W,
    mcs: &MaximumCommonSubgraph,
    swapped: bool,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(
        out,
        "{}Number of vertices in the maximum common subgraph: {}",
        TEXT_PADDING,
        mcs.size()
    )?;
    writeln!(
        out,
        "{}Execution time: {} milliseconds",
        TEXT_PADDING,
        elapsed.as_millis()
    )?;
    writeln!(out)?;

    write_input_graphs(out, mcs, swapped)?;
    writeln!(out)?;

    writeln!(out, "{}The maximum common subgraph:", TEXT_PADDING)?;
    write_graph(out, "MCS", mcs.adjacency_matrix())?;
    writeln!(out)?;

    writeln!(out, "{}Vertex mapping table:", TEXT_PADDING)?;
    let rows = mcs
        .pairs()
        .iter()
        .map(|p| oriented(Some(p.v1), Some(p.v2), swapped))
        .collect_vec();
    write_mapping_table(out, &rows)?;

    if mcs.from_genetic() {
        writeln!(out)?;
        write_best_genome(out, mcs, swapped)?;
    }
    Ok(())
}

/// Report of a minimum common supergraph and the subgraph it was built around.
pub fn write_supergraph_report<W: Write>(
    out: &mut W,
    mcsg: &MinimumCommonSupergraph,
    swapped: bool,
    elapsed: Duration,
) -> io::Result<()> {
    let mcs = mcsg.mcs();
    writeln!(
        out,
        "{}Number of vertices in the maximum common subgraph: {}",
        TEXT_PADDING,
        mcs.size()
    )?;
    writeln!(
        out,
        "{}Number of vertices in the minimum common supergraph: {}",
        TEXT_PADDING,
        mcsg.num_vertices()
    )?;
    writeln!(
        out,
        "{}Execution time: {} milliseconds",
        TEXT_PADDING,
        elapsed.as_millis()
    )?;
    writeln!(out)?;

    write_input_graphs(out, mcs, swapped)?;
    writeln!(out)?;

    writeln!(out, "{}The maximum common subgraph:", TEXT_PADDING)?;
    write_graph(out, "mcs", mcs.adjacency_matrix())?;
    writeln!(out)?;
    writeln!(out, "{}The minimum common supergraph:", TEXT_PADDING)?;
    write_graph(out, "MCS", mcsg.adjacency_matrix())?;
    writeln!(out)?;

    writeln!(
        out,
        "{}Vertex mapping table ({} rows marked with * form the maximum common subgraph):",
        TEXT_PADDING,
        mcs.size()
    )?;
    let rows = mcsg
        .vertices()
        .iter()
        .map(|vertex| oriented(vertex.v1(), vertex.v2(), swapped))
        .collect_vec();
    write_mapping_table(out, &rows)?;

    if mcs.from_genetic() {
        writeln!(out)?;
        write_best_genome(out, mcs, swapped)?;
    }
    Ok(())
}
