//! Size sweeps over benchmark patterns and CSV export of the average timings.

use crate::genetic::Genetic;
use crate::mcsplit::McSplit;
use crate::supergraph::{build_supergraph, MaximumCommonSubgraphAlgorithm};
use crate::utils::{orient, time_it};
use crate::{Input, Result};
use log::info;
use std::collections::BTreeMap;
use std::io::Write;
use std::iter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Average over repeated runs of one algorithm on one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub average_millis: f64,
    pub mcs_size: usize,
    pub mcsg_size: usize,
}

/// Measurements of both algorithms for one input size
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeResult {
    pub exact: Option<Measurement>,
    pub approximation: Option<Measurement>,
}

pub type BenchmarkResults = BTreeMap<usize, SizeResult>;

/// Runs the supergraph construction `invocations` times and averages the wall-clock
/// time. Sizes are taken from the last run.
pub fn measure<A: MaximumCommonSubgraphAlgorithm + ?Sized>(
    algorithm: &A,
    input: &Input,
    invocations: usize,
) -> Result<Measurement> {
    let (input, _) = orient(input.clone());
    let invocations = invocations.max(1);
    let mut total_millis = 0.0;
    let mut sizes = (0, 0);

    for _ in 0..invocations {
        let (result, elapsed) = time_it(|| {
            algorithm
                .compute(&input.g1, &input.g2)
                .map(build_supergraph)
        });
        let mcsg = result?;
        total_millis += elapsed.as_secs_f64() * 1000.0;
        sizes = (mcsg.mcs().size(), mcsg.num_vertices());
    }

    Ok(Measurement {
        average_millis: total_millis / invocations as f64,
        mcs_size: sizes.0,
        mcsg_size: sizes.1,
    })
}

/// Measures the exact and the genetic algorithm on every size of `sizes_for_both`,
/// and only the genetic one on `sizes_for_approximation`.
pub fn evaluate<F>(
    sizes_for_both: &[usize],
    sizes_for_approximation: &[usize],
    invocations: usize,
    genetic: &Genetic,
    mut read: F,
) -> Result<BenchmarkResults>
where
    F: FnMut(usize) -> Result<Input>,
{
    let mut results = BenchmarkResults::new();
    let exact = McSplit::new();

    for &n in sizes_for_both {
        let input = read(n)?;
        let entry = results.entry(n).or_default();
        let measurement = measure(&exact, &input, invocations)?;
        info!("n = {}: exact {:?}", n, measurement);
        entry.exact = Some(measurement);
        let measurement = measure(genetic, &input, invocations)?;
        info!("n = {}: approximation {:?}", n, measurement);
        entry.approximation = Some(measurement);
    }

    for &n in sizes_for_approximation {
        let input = read(n)?;
        let measurement = measure(genetic, &input, invocations)?;
        info!("n = {}: approximation {:?}", n, measurement);
        results.entry(n).or_default().approximation = Some(measurement);
    }

    Ok(results)
}

fn record(name: &str, cells: impl Iterator<Item = Option<Measurement>>) -> Vec<String> {
    iter::once(name.to_string())
        .chain(cells.map(|m| m.map(|m| format!("{:.3}", m.average_millis)).unwrap_or_default()))
        .collect()
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, results: &BenchmarkResults) -> Result<()> {
    writer.write_record(
        iter::once("algorithm".to_string()).chain(results.keys().map(|n| n.to_string())),
    )?;
    writer.write_record(record("Exact", results.values().map(|r| r.exact)))?;
    writer.write_record(record(
        "Approximation",
        results.values().map(|r| r.approximation),
    ))?;
    writer.flush()?;
    Ok(())
}

/// CSV with a header `algorithm,<size1>,<size2>,...` and the rows `Exact` and
/// `Approximation`. Sizes without a measurement leave their cell empty.
pub fn write_execution_times<W: Write>(out: W, results: &BenchmarkResults) -> Result<()> {
    write_records(&mut csv::Writer::from_writer(out), results)
}

/// Writes `<dir>/<prefix><unix timestamp>.csv` and returns its path.
pub fn write_execution_times_file(
    dir: impl AsRef<Path>,
    prefix: &str,
    results: &BenchmarkResults,
) -> Result<PathBuf> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = dir.as_ref().join(format!("{}{}.csv", prefix, timestamp));
    write_records(&mut csv::Writer::from_path(&path)?, results)?;
    Ok(path)
}
