//! Genetic approximation of the maximum common subgraph.
//!
//! A genome is a permutation of graph 2 vertices where graph 1 vertex `i` is
//! assigned to `genes[i]`. Fitness is the structural distortion of that assignment
//! (see [`crate::cost::distortion`]), lower is fitter. The population is split into
//! equally sized tribes which are shuffled, crossed over and mutated for a fixed
//! number of generations. The fittest genome ever seen is finally trimmed to a
//! distortion-free vertex mapping by [`reduce`].

use crate::config::GeneticConfiguration;
use crate::cost::{distance_matrix, distortion, pair_distortion, DistanceMatrix};
use crate::error::ConfigError;
use crate::mapping::{MaximumCommonSubgraph, Pair};
use crate::supergraph::MaximumCommonSubgraphAlgorithm;
use crate::{Graph, Result};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seed used when none is given, makes every run reproducible.
pub const DEFAULT_SEED: u64 = 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    genes: Vec<usize>,
    distortion: usize,
}

impl Genome {
    pub fn create(genes: Vec<usize>, d1: &DistanceMatrix, d2: &DistanceMatrix) -> Self {
        let distortion = distortion(d1, d2, &genes);
        Genome { genes, distortion }
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn distortion(&self) -> usize {
        self.distortion
    }

    /// Swaps two distinct random genes, reverting when the distortion grows.
    pub fn mutate<R: Rng>(&mut self, d1: &DistanceMatrix, d2: &DistanceMatrix, rng: &mut R) {
        let len = self.genes.len();
        if len < 2 {
            return;
        }
        let i = rng.gen_range(0..len);
        let mut j = rng.gen_range(0..len - 1);
        if j == i {
            j += 1;
        }
        self.genes.swap(i, j);

        let new_distortion = distortion(d1, d2, &self.genes);
        if new_distortion > self.distortion {
            self.genes.swap(i, j);
        } else {
            self.distortion = new_distortion;
        }
    }

    /// Cycle crossover. Cycles alternate between parents: the first cycle of the
    /// first child comes from `self`, the second from `other`, and so on. The
    /// second child gets the complementary alleles.
    pub fn crossover(
        &self,
        other: &Genome,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
    ) -> [Genome; 2] {
        let len = self.genes.len();
        let mut position = vec![0; len];
        for (index, &gene) in self.genes.iter().enumerate() {
            position[gene] = index;
        }

        let mut child1: Vec<Option<usize>> = vec![None; len];
        let mut child2: Vec<Option<usize>> = vec![None; len];
        let mut cycle = 0;
        for start in 0..len {
            if child1[start].is_some() {
                continue;
            }
            let mut j = start;
            while child1[j].is_none() {
                if cycle % 2 == 0 {
                    child1[j] = Some(self.genes[j]);
                    child2[j] = Some(other.genes[j]);
                } else {
                    child1[j] = Some(other.genes[j]);
                    child2[j] = Some(self.genes[j]);
                }
                j = position[other.genes[j]];
            }
            cycle += 1;
        }

        [
            Genome::create(child1.into_iter().flatten().collect(), d1, d2),
            Genome::create(child2.into_iter().flatten().collect(), d1, d2),
        ]
    }
}

/// All genomes of one run, laid out tribe after tribe
#[derive(Debug, Clone)]
pub struct Population {
    genomes: Vec<Genome>,
    tribe_count: usize,
}

impl Population {
    pub fn new(genomes: Vec<Genome>, tribe_count: usize) -> Self {
        Population {
            genomes,
            tribe_count,
        }
    }

    /// `size` random permutations of `0..genome_size`.
    pub fn generate<R: Rng>(
        size: usize,
        genome_size: usize,
        tribe_count: usize,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
        rng: &mut R,
    ) -> Self {
        let genomes = (0..size)
            .map(|_| {
                let mut genes: Vec<usize> = (0..genome_size).collect();
                genes.shuffle(rng);
                Genome::create(genes, d1, d2)
            })
            .collect();
        Population::new(genomes, tribe_count)
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn tribe_size(&self) -> usize {
        self.genomes.len() / self.tribe_count
    }

    pub fn shuffle_all<R: Rng>(&mut self, rng: &mut R) {
        self.genomes.shuffle(rng);
    }

    pub fn shuffle_within_tribes<R: Rng>(&mut self, rng: &mut R) {
        let tribe_size = self.tribe_size();
        if tribe_size == 0 {
            return;
        }
        for tribe in self.genomes.chunks_mut(tribe_size) {
            tribe.shuffle(rng);
        }
    }

    /// First genome of minimal distortion.
    pub fn best(&self) -> Option<&Genome> {
        self.genomes.iter().min_by_key(|genome| genome.distortion)
    }

    /// Crosses the genomes at `i1` and `i2` over and keeps the two fittest of
    /// parents and children. The fitter parent's slot receives the fittest one.
    /// Returns that slot.
    pub fn crossover(
        &mut self,
        i1: usize,
        i2: usize,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
    ) -> usize {
        let (fitter, weaker) = if self.genomes[i1].distortion < self.genomes[i2].distortion {
            (i1, i2)
        } else {
            (i2, i1)
        };

        let [child1, child2] = self.genomes[i1].crossover(&self.genomes[i2], d1, d2);
        let mut family = [
            self.genomes[i1].clone(),
            self.genomes[i2].clone(),
            child1,
            child2,
        ];
        family.sort_by_key(|genome| genome.distortion);
        let [best, second, _, _] = family;

        self.genomes[fitter] = best;
        self.genomes[weaker] = second;
        fitter
    }
}

/// Turns a genome into the largest distortion-free mapping it contains.
///
/// For every window start `skip`, positions from `skip` onwards are accepted
/// greedily as long as they keep every distance to the already accepted positions.
/// The largest accepted set over all window starts wins, earlier starts win ties.
pub fn reduce(d1: &DistanceMatrix, d2: &DistanceMatrix, genes: &[usize]) -> Vec<Pair> {
    let n1 = d1.len();
    let mut best: Vec<Pair> = Vec::new();

    for skip in 0..n1.saturating_sub(1) {
        let mut accepted: Vec<usize> = Vec::new();
        for i in skip..n1 {
            if accepted
                .iter()
                .all(|&j| pair_distortion(d1, d2, genes, j, i) == 0)
            {
                accepted.push(i);
            }
        }
        if accepted.len() > best.len() {
            best = accepted.iter().map(|&i| Pair::new(i, genes[i])).collect();
        }
    }

    best
}

/// Genetic maximum common subgraph algorithm. Requires `|G1| <= |G2|`.
#[derive(Debug, Clone)]
pub struct Genetic {
    config: GeneticConfiguration,
    seed: u64,
}

impl Genetic {
    pub fn new(config: GeneticConfiguration) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Genetic {
            config,
            seed: DEFAULT_SEED,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> &GeneticConfiguration {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn evolve(&self, d1: &DistanceMatrix, d2: &DistanceMatrix, genome_size: usize) -> Result<Genome> {
        let conf = &self.config;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut population = Population::generate(
            conf.population_size,
            genome_size,
            conf.tribe_count,
            d1,
            d2,
            &mut rng,
        );
        let tribe_size = population.tribe_size();
        let mut best = population
            .best()
            .cloned()
            .ok_or(ConfigError::ZeroPopulation)?;

        for generation in 0..conf.generations {
            if generation % conf.shuffle_period == 0 {
                population.shuffle_all(&mut rng);
            } else {
                population.shuffle_within_tribes(&mut rng);
            }

            for tribe in 0..conf.tribe_count {
                let start = tribe * tribe_size;
                for i in (1..tribe_size).step_by(2) {
                    if rng.gen::<f64>() > conf.crossover_probability {
                        continue;
                    }
                    let fitter = population.crossover(start + i - 1, start + i, d1, d2);
                    if population.genomes[fitter].distortion < best.distortion {
                        best = population.genomes[fitter].clone();
                    }
                }
            }

            for genome in population.genomes.iter_mut() {
                if rng.gen::<f64>() <= conf.mutation_probability {
                    genome.mutate(d1, d2, &mut rng);
                    if genome.distortion < best.distortion {
                        best = genome.clone();
                    }
                }
            }

            trace!("generation {}: best distortion {}", generation, best.distortion);
        }

        Ok(best)
    }
}

impl MaximumCommonSubgraphAlgorithm for Genetic {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<MaximumCommonSubgraph> {
        let (n1, n2) = (g1.num_vertices(), g2.num_vertices());
        if n1 > n2 {
            return Err(ConfigError::FirstGraphLarger { n1, n2 }.into());
        }
        debug!(
            "genetic search on {} and {} vertices with {:?}, seed {}",
            n1, n2, self.config, self.seed
        );

        let d1 = distance_matrix(g1);
        let d2 = distance_matrix(g2);
        let best = self.evolve(&d1, &d2, n2)?;
        let pairs = reduce(&d1, &d2, &best.genes);
        debug!(
            "best distortion {}, reduced to {} pairs",
            best.distortion,
            pairs.len()
        );

        Ok(MaximumCommonSubgraph::new(g1, g2, pairs, Some(best)))
    }

    fn name(&self) -> &'static str {
        "Genetic"
    }
}
