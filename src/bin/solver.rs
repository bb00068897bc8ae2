use clap::Parser;
use common_subgraph::{
    config::{AlgorithmType, GeneticConfiguration, ProblemType},
    display::{write_subgraph_report, write_supergraph_report},
    genetic::Genetic,
    mcsplit::McSplit,
    parser::read_input,
    supergraph::{MaximumCommonSubgraphAlgorithm, MinimumCommonSupergraphAlgorithm},
    utils::{orient, time_it},
    Result,
};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Maximum common subgraph and minimum common supergraph solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file containing both graphs
    #[arg(short, long)]
    input: PathBuf,

    /// Problem to solve: subgraph or supergraph
    #[arg(short, long, default_value = "subgraph")]
    problem: ProblemType,

    /// Maximum common subgraph algorithm: exact or genetic
    #[arg(short, long, default_value = "exact")]
    algorithm: AlgorithmType,

    /// Number of genomes (genetic)
    #[arg(long, default_value_t = 256)]
    population_size: usize,

    /// Number of generations (genetic)
    #[arg(long, default_value_t = 512)]
    generations: usize,

    /// Every n-th generation the whole population is shuffled (genetic)
    #[arg(long, default_value_t = 32)]
    shuffle_period: usize,

    /// Number of tribes, must divide the population size (genetic)
    #[arg(long, default_value_t = 4)]
    tribes: usize,

    /// Crossover probability (genetic)
    #[arg(long, default_value_t = 0.9)]
    crossover_probability: f64,

    /// Mutation probability (genetic)
    #[arg(long, default_value_t = 0.5)]
    mutation_probability: f64,

    /// Random seed (genetic)
    #[arg(long, default_value_t = common_subgraph::genetic::DEFAULT_SEED)]
    seed: u64,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output_file: Option<PathBuf>,
}

impl Args {
    fn genetic_configuration(&self) -> GeneticConfiguration {
        GeneticConfiguration {
            population_size: self.population_size,
            generations: self.generations,
            shuffle_period: self.shuffle_period,
            tribe_count: self.tribes,
            crossover_probability: self.crossover_probability,
            mutation_probability: self.mutation_probability,
        }
    }

    fn build_algorithm(&self) -> Result<Box<dyn MaximumCommonSubgraphAlgorithm>> {
        let algorithm: Box<dyn MaximumCommonSubgraphAlgorithm> = match self.algorithm {
            AlgorithmType::McSplit => Box::new(McSplit::new()),
            AlgorithmType::Genetic => {
                Box::new(Genetic::new(self.genetic_configuration())?.with_seed(self.seed))
            }
        };
        Ok(algorithm)
    }
}

fn run(args: &Args) -> Result<()> {
    let input = read_input(&args.input)?;
    println!(
        "Graphs of size {} and {}",
        input.g1.num_vertices(),
        input.g2.num_vertices()
    );
    let (input, swapped) = orient(input);
    if swapped {
        info!("graph 1 is bigger than graph 2, solving with swapped graphs");
    }

    let algorithm = args.build_algorithm()?;
    println!("Running {} for the {:?} problem...", algorithm.name(), args.problem);

    let mut out: Box<dyn Write> = match &args.output_file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.problem {
        ProblemType::MaximumCommonSubgraph => {
            let (mcs, elapsed) = time_it(|| algorithm.compute(&input.g1, &input.g2));
            write_subgraph_report(&mut out, &mcs?, swapped, elapsed)?;
        }
        ProblemType::MinimumCommonSupergraph => {
            let supergraph = MinimumCommonSupergraphAlgorithm::new(algorithm);
            let (mcsg, elapsed) = time_it(|| supergraph.compute(&input.g1, &input.g2));
            write_supergraph_report(&mut out, &mcsg?, swapped, elapsed)?;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output_file {
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Maximum Common Subgraph / Minimum Common Supergraph Solver");
    println!("==========================================================");
    println!();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
