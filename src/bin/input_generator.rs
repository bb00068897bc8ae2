use clap::{Parser, ValueEnum};
use common_subgraph::{
    generator::{
        isomorphic_graphs_7, pattern1, pattern2, pattern3, random_connected, write_input_file,
    },
    Input, Result,
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};

/// Input Generator for maximum common subgraph benchmark instances.
///
/// Every file holds two undirected, connected graphs in the format read by the
/// solver:
///
/// <n1>
/// <adjacency matrix of G1: n1 rows of n1 space-separated 0/1 values>
///
/// <n2>
/// <adjacency matrix of G2: n2 rows of n2 space-separated 0/1 values>
///
/// Patterns:
/// - pattern1: path on n vertices vs a strip of n-1 triangles (2n-1 vertices)
/// - pattern2: two randomly relabelled wheels on n vertices
/// - pattern3: wheel on n vertices vs a triangle strip on n+1 vertices (n even)
/// - isomorphic: a fixed pair of isomorphic graphs on 7 vertices
/// - random: random connected graphs on n1 and n2 vertices
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate benchmark inputs for the maximum common subgraph solver"
)]
struct Args {
    /// Which inputs to generate
    #[arg(long, value_enum, default_value_t = Pattern::All)]
    pattern: Pattern,

    /// Sizes to generate; defaults depend on the pattern
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Number of vertices of G1 (random pattern)
    #[arg(long, default_value_t = 8)]
    n1: usize,

    /// Number of vertices of G2 (random pattern)
    #[arg(long, default_value_t = 10)]
    n2: usize,

    /// Probability of an edge beyond the spanning tree (random pattern)
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Random seed for pattern2 and random graphs
    #[arg(long, default_value_t = 13)]
    seed: u64,

    /// Output directory
    #[arg(long, default_value = "inputs")]
    output_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Pattern {
    Pattern1,
    Pattern2,
    Pattern3,
    Isomorphic,
    Random,
    All,
}

/// `tiny`, `small`, `medium` or `big` depending on the given upper bounds.
fn size_class(n: usize, bounds: [usize; 3]) -> &'static str {
    if n < bounds[0] {
        "tiny"
    } else if n < bounds[1] {
        "small"
    } else if n < bounds[2] {
        "medium"
    } else {
        "big"
    }
}

fn sizes_or(sizes: &[usize], default: &[usize]) -> Vec<usize> {
    if sizes.is_empty() {
        default.to_vec()
    } else {
        sizes.to_vec()
    }
}

fn write(dir: &Path, name: String, input: &Input) -> Result<()> {
    let path = dir.join(name);
    write_input_file(&path, input)?;
    println!(
        "Wrote {} ({} x {} vertices)",
        path.display(),
        input.g1.num_vertices(),
        input.g2.num_vertices()
    );
    Ok(())
}

fn generate(args: &Args, pattern: Pattern, rng: &mut StdRng) -> Result<()> {
    let dir = args.output_dir.as_path();
    match pattern {
        Pattern::Pattern1 => {
            for n in sizes_or(&args.sizes, &[2, 5, 10, 15, 20, 21, 25, 50, 75, 100]) {
                let input = pattern1(n)?;
                let name = format!(
                    "smaller_graph_isomorphic_to_subgraph__pattern1__{}_{}x{}.txt",
                    size_class(n, [5, 15, 25]),
                    n,
                    2 * n - 1
                );
                write(dir, name, &input)?;
            }
        }
        Pattern::Pattern2 => {
            let default = [5, 10, 15, 20, 25, 28, 30, 50, 75, 100, 150, 200];
            for n in sizes_or(&args.sizes, &default) {
                let name = format!(
                    "isomorphic_graphs__pattern2__{}_{}x{}.txt",
                    size_class(n, [5, 15, 35]),
                    n,
                    n
                );
                write(dir, name, &pattern2(n, rng)?)?;
            }
        }
        Pattern::Pattern3 => {
            for n in sizes_or(&args.sizes, &[4, 10, 14, 18, 50, 74, 100, 150, 200]) {
                let name = format!(
                    "nonisomorphic_graphs__pattern3__{}_{}x{}.txt",
                    size_class(n, [4, 14, 24]),
                    n,
                    n + 1
                );
                write(dir, name, &pattern3(n)?)?;
            }
        }
        Pattern::Isomorphic => {
            write(
                dir,
                "isomorphic_graphs__small_7x7.txt".to_string(),
                &isomorphic_graphs_7(),
            )?;
        }
        Pattern::Random => {
            let input = Input::new(
                random_connected(args.n1, args.density, rng),
                random_connected(args.n2, args.density, rng),
            );
            input.validate()?;
            let name = format!("random__{}x{}__seed{}.txt", args.n1, args.n2, args.seed);
            write(dir, name, &input)?;
        }
        Pattern::All => {
            for pattern in [
                Pattern::Pattern1,
                Pattern::Pattern2,
                Pattern::Pattern3,
                Pattern::Isomorphic,
            ] {
                generate(args, pattern, rng)?;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        eprintln!("Error creating {}: {}", args.output_dir.display(), e);
        std::process::exit(1);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    if let Err(e) = generate(&args, args.pattern, &mut rng) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
