use clap::{Parser, ValueEnum};
use common_subgraph::{
    bench::{evaluate, write_execution_times_file, BenchmarkResults, Measurement},
    config::GeneticConfiguration,
    generator::{pattern1, pattern2, pattern3},
    genetic::{Genetic, DEFAULT_SEED},
    Result,
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

/// Empirical comparison of the exact and the genetic algorithm.
///
/// For every benchmark pattern the minimum common supergraph is computed over a
/// sweep of sizes. Small sizes run both algorithms, bigger ones only the genetic
/// algorithm. Average execution times are written to
/// `execution_times_<pattern>_<unix timestamp>.csv`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to evaluate
    #[arg(long, value_enum, default_value_t = Pattern::All)]
    pattern: Pattern,

    /// Number of timed runs averaged per size and algorithm
    #[arg(long, default_value_t = 1)]
    invocations: usize,

    /// Seed of the genetic algorithm and of the pattern 2 relabelling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Directory receiving the CSV files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Pattern {
    Pattern1,
    Pattern2,
    Pattern3,
    All,
}

fn describe(measurement: Option<Measurement>) -> String {
    match measurement {
        Some(m) => format!(
            "{:.3} ms (mcs {}, MCS {})",
            m.average_millis, m.mcs_size, m.mcsg_size
        ),
        None => "-".to_string(),
    }
}

fn print_results(results: &BenchmarkResults) {
    for (n, result) in results {
        println!(
            "  n = {:>3}: exact {}, approximation {}",
            n,
            describe(result.exact),
            describe(result.approximation)
        );
    }
}

fn run(args: &Args, pattern: Pattern, genetic: &Genetic) -> Result<()> {
    let (name, results) = match pattern {
        Pattern::Pattern1 => (
            "pattern1",
            evaluate(
                &[2, 5, 10, 15, 20, 21],
                &[25, 50, 75, 100],
                args.invocations,
                genetic,
                pattern1,
            )?,
        ),
        Pattern::Pattern2 => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            (
                "pattern2",
                evaluate(
                    &[5, 10, 15, 20, 25, 27],
                    &[50, 75, 100, 150, 200],
                    args.invocations,
                    genetic,
                    |n| pattern2(n, &mut rng),
                )?,
            )
        }
        Pattern::Pattern3 => (
            "pattern3",
            evaluate(
                &[4, 10, 14, 18],
                &[50, 74, 100, 150, 200],
                args.invocations,
                genetic,
                pattern3,
            )?,
        ),
        Pattern::All => {
            for pattern in [Pattern::Pattern1, Pattern::Pattern2, Pattern::Pattern3] {
                run(args, pattern, genetic)?;
            }
            return Ok(());
        }
    };

    println!("{}:", name);
    print_results(&results);
    let path = write_execution_times_file(
        &args.output_dir,
        &format!("execution_times_{}_", name),
        &results,
    )?;
    println!("Execution times written to {}", path.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let genetic = match Genetic::new(GeneticConfiguration::from_paper()) {
        Ok(genetic) => genetic.with_seed(args.seed),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, args.pattern, &genetic) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
