use std::{fmt::{self, Display, Formatter}, str::FromStr};

use crate::{Allele, Phenotype};

mod error;
pub use error::GenotypeError;

/// Diploid genotype of a single gene.
///
/// Alleles are always kept in ascending order, so that a heterozygous genotype is
/// always represented as `Aa`, and never as `aA`.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Genotype([Allele; 2]);

impl Genotype {
    pub const HOMOZYGOUS_DOMINANT : Self = Self([Allele::Dominant, Allele::Dominant]);
    pub const HETEROZYGOUS        : Self = Self([Allele::Dominant, Allele::Recessive]);
    pub const HOMOZYGOUS_RECESSIVE: Self = Self([Allele::Recessive, Allele::Recessive]);

    /// Every possible genotype, in canonical order: `AA`, `Aa`, `aa`
    pub const ALL: [Self; 3] = [Self::HOMOZYGOUS_DOMINANT, Self::HETEROZYGOUS, Self::HOMOZYGOUS_RECESSIVE];

    /// Build a genotype from two alleles, regardless of their order.
    #[must_use]
    pub fn new(first: Allele, second: Allele) -> Self {
        let mut alleles = [first, second];
        alleles.sort_unstable();
        Self(alleles)
    }

    #[must_use]
    pub fn alleles(&self) -> [Allele; 2] {
        self.0
    }

    #[must_use]
    pub fn contains(&self, allele: Allele) -> bool {
        self.0.contains(&allele)
    }

    #[must_use]
    pub fn is_homozygous(&self) -> bool {
        self.0[0] == self.0[1]
    }

    #[must_use]
    pub fn phenotype(&self) -> Phenotype {
        Phenotype::from(self)
    }

    /// Simulate meiosis: transmit one of the two alleles, uniformly at random.
    pub fn meiosis(&self, rng: &mut fastrand::Rng) -> Allele {
        self.0[usize::from(rng.bool())]
    }

    /// Combine two gametes into a canonical genotype.
    #[must_use]
    pub fn fertilize(paternal: Allele, maternal: Allele) -> Self {
        Self::new(paternal, maternal)
    }
}

impl FromStr for Genotype {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [first, second] = chars.as_slice() else {
            return Err(GenotypeError::InvalidLength(s.to_string()))
        };

        let parse = |c: char| Allele::try_from(c)
            .map_err(|source| GenotypeError::InvalidAllele{genotype: s.to_string(), source});
        Ok(Self::new(parse(*first)?, parse(*second)?))
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Route through pad() so that width/alignment flags are honored.
        f.pad(&format!("{}{}", self.0[0], self.0[1]))
    }
}
