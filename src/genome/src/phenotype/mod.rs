use std::fmt::{self, Display, Formatter};

use crate::{Allele, Genotype};

/// Observable trait classification of a genotype.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Phenotype { Dominant, Recessive }

/// Classify a genotype: `Dominant` as soon as one dominant allele is carried, `Recessive` otherwise.
#[must_use]
pub fn classify(genotype: &Genotype) -> Phenotype {
    match genotype.contains(Allele::Dominant) {
        true  => Phenotype::Dominant,
        false => Phenotype::Recessive,
    }
}

impl From<&Genotype> for Phenotype {
    fn from(genotype: &Genotype) -> Self {
        classify(genotype)
    }
}

impl Display for Phenotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Dominant  => "Dominant",
            Self::Recessive => "Recessive",
        })
    }
}
