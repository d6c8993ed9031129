use std::fmt::{self, Display, Formatter};

use genome::{Gene, Genotype};
use itertools::Itertools;
use located_error::prelude::*;

mod error;
pub use error::ConfigError;

pub const DEFAULT_GENES              : [&str; 3] = ["Gene1", "Gene2", "Gene3"];
pub const DEFAULT_NUM_FAMILIES       : u32 = 100;
pub const DEFAULT_CHILDREN_PER_FAMILY: u32 = 3;

/// Immutable simulation parameters.
/// # Fields
/// - `genes`              : ordered list of simulated genes. Order defines the output column order.
/// - `genotypes`          : set of genotypes founder individuals are uniformly drawn from.
/// - `num_families`       : number of simulated families.
/// - `children_per_family`: number of children simulated for each family.
/// - `seed`               : optional RNG seed. `None` yields a non-reproducible run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    genes              : Vec<Gene>,
    genotypes          : Vec<Genotype>,
    num_families       : u32,
    children_per_family: u32,
    seed               : Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            genes              : DEFAULT_GENES.iter().map(|name| Gene::new(name).expect("Invalid default gene")).collect(),
            genotypes          : Genotype::ALL.to_vec(),
            num_families       : DEFAULT_NUM_FAMILIES,
            children_per_family: DEFAULT_CHILDREN_PER_FAMILY,
            seed               : None,
        }
    }
}

impl SimConfig {
    /// # Errors
    /// - if `genes` or `genotypes` is empty, or carries duplicate values.
    /// - if `num_families` or `children_per_family` is zero.
    pub fn new(genes: Vec<Gene>, genotypes: Vec<Genotype>, num_families: u32, children_per_family: u32) -> Result<Self, ConfigError> {
        use ConfigError::*;
        if genes.is_empty() {
            return Err(EmptyGeneSet)
        }
        if let Some(gene) = genes.iter().duplicates().next() {
            return Err(DuplicateGene(gene.to_string()))
        }
        if genotypes.is_empty() {
            return Err(EmptyGenotypeSet)
        }
        if let Some(genotype) = genotypes.iter().duplicates().next() {
            return Err(DuplicateGenotype(genotype.to_string()))
        }
        if num_families == 0 {
            return Err(ZeroFamilies)
        }
        if children_per_family == 0 {
            return Err(ZeroChildren)
        }
        Ok(Self{genes, genotypes, num_families, children_per_family, seed: None})
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }

    pub fn num_families(&self) -> u32 {
        self.num_families
    }

    pub fn children_per_family(&self) -> u32 {
        self.children_per_family
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Expected number of rows within the assembled dataset.
    pub fn num_children(&self) -> usize {
        self.num_families as usize * self.children_per_family as usize
    }

    /// Position of a gene within the configured gene list.
    pub fn gene_index(&self, name: &str) -> Option<usize> {
        self.genes.iter().position(|gene| gene.name() == name)
    }

    /// Instantiate the random number generator of a run. Seeded if `self.seed` is set.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None       => fastrand::Rng::new(),
        }
    }
}

impl TryFrom<&parser::FamilySims> for SimConfig {
    type Error = anyhow::Error;

    fn try_from(args: &parser::FamilySims) -> Result<Self> {
        let genes = args.genes.iter()
            .map(|name| Gene::new(name).map_err(ConfigError::from))
            .collect::<Result<Vec<Gene>, _>>()
            .loc("While parsing --genes")?;

        let genotypes = args.genotypes.iter()
            .map(|genotype| genotype.parse::<Genotype>().map_err(ConfigError::from))
            .collect::<Result<Vec<Genotype>, _>>()
            .loc("While parsing --genotypes")?;

        let config = Self::new(genes, genotypes, args.families, args.children)
            .loc("Invalid simulation parameters")?;
        Ok(config.with_seed(args.seed))
    }
}

impl Display for SimConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "genes: [{}] - genotypes: [{}] - families: {} - children per family: {} - seed: {}",
            self.genes.iter().join(", "),
            self.genotypes.iter().join(", "),
            self.num_families,
            self.children_per_family,
            self.seed.map_or_else(|| String::from("None"), |seed| seed.to_string())
        )
    }
}
