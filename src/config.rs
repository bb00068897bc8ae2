use crate::error::ConfigError;
use std::fmt;

/// Which problem the solver answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemType {
    MaximumCommonSubgraph,
    MinimumCommonSupergraph,
}

impl std::str::FromStr for ProblemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subgraph" | "mcs" | "maximum-common-subgraph" => Ok(ProblemType::MaximumCommonSubgraph),
            "supergraph" | "mcsg" | "minimum-common-supergraph" => {
                Ok(ProblemType::MinimumCommonSupergraph)
            }
            _ => Err(format!(
                "Invalid problem: {}. Use 'subgraph' or 'supergraph'",
                s
            )),
        }
    }
}

/// Which maximum common subgraph algorithm is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmType {
    McSplit,
    Genetic,
}

impl std::str::FromStr for AlgorithmType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" | "mcsplit" | "mc-split" => Ok(AlgorithmType::McSplit),
            "genetic" | "approx" | "approximate" => Ok(AlgorithmType::Genetic),
            _ => Err(format!(
                "Invalid algorithm: {}. Use 'exact' or 'genetic'",
                s
            )),
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmType::McSplit => write!(f, "McSplit"),
            AlgorithmType::Genetic => write!(f, "Genetic"),
        }
    }
}

/// Parameters of the genetic algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticConfiguration {
    /// Number of genomes in the population
    pub population_size: usize,
    /// Number of generations to evolve
    pub generations: usize,
    /// Every `shuffle_period`-th generation the whole population is shuffled,
    /// otherwise only within tribes
    pub shuffle_period: usize,
    /// Number of equally sized tribes
    pub tribe_count: usize,
    pub crossover_probability: f64,
    pub mutation_probability: f64,
}

impl GeneticConfiguration {
    /// Parameters used for the published measurements.
    pub fn from_paper() -> Self {
        GeneticConfiguration {
            population_size: 256,
            generations: 512,
            shuffle_period: 32,
            tribe_count: 4,
            crossover_probability: 0.9,
            mutation_probability: 0.5,
        }
    }

    pub fn tribe_size(&self) -> usize {
        self.population_size / self.tribe_count
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.tribe_count == 0 {
            return Err(ConfigError::ZeroTribes);
        }
        if self.population_size % self.tribe_count != 0 {
            return Err(ConfigError::IndivisiblePopulation {
                population_size: self.population_size,
                tribe_count: self.tribe_count,
            });
        }
        if self.tribe_size() % 2 != 0 {
            return Err(ConfigError::OddTribeSize {
                tribe_size: self.tribe_size(),
            });
        }
        if self.shuffle_period == 0 {
            return Err(ConfigError::ZeroShufflePeriod);
        }
        check_probability("crossover", self.crossover_probability)?;
        check_probability("mutation", self.mutation_probability)
    }
}

impl Default for GeneticConfiguration {
    fn default() -> Self {
        Self::from_paper()
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
