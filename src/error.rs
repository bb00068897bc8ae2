use thiserror::Error;

/// A structural invariant of [`crate::Graph`] that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph must have at least 2 vertices, got {n}")]
    TooFewVertices { n: usize },

    #[error("adjacency matrix has wrong height: actual {actual}, expected {expected}")]
    WrongHeight { actual: usize, expected: usize },

    #[error("row {row} of adjacency matrix has wrong length: actual {actual}, expected {expected}")]
    WrongRowLength {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("vertex {vertex} has an edge to itself")]
    SelfLoop { vertex: usize },

    #[error("adjacency matrix is not symmetric: vertices {i} and {j} have contradicting relations")]
    NotSymmetric { i: usize, j: usize },

    #[error("graph must be unweighted, but M[{i}][{j}] = {value}")]
    NotBinary { i: usize, j: usize, value: usize },

    #[error("graph must be connected")]
    Disconnected,
}

/// Invalid matcher or generator parameters. Reported before any search work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population size must be at least 1")]
    ZeroPopulation,

    #[error("number of tribes must be at least 1")]
    ZeroTribes,

    #[error("population size {population_size} must be divisible by the number of tribes {tribe_count}")]
    IndivisiblePopulation {
        population_size: usize,
        tribe_count: usize,
    },

    #[error("tribe size {tribe_size} must be divisible by 2")]
    OddTribeSize { tribe_size: usize },

    #[error("shuffle period must be at least 1")]
    ZeroShufflePeriod,

    #[error("{name} probability must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("graph 1 ({n1} vertices) must not be bigger than graph 2 ({n2} vertices)")]
    FirstGraphLarger { n1: usize, n2: usize },

    #[error("pattern {pattern} cannot be generated for n = {n}: {reason}")]
    InvalidPatternSize {
        pattern: &'static str,
        n: usize,
        reason: &'static str,
    },
}

/// Broken internal invariant during a search. Never caused by user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("unable to remove label class {index}, only {len} present")]
    MissingLabelClass { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
