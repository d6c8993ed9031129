use thiserror::Error;

use genome::{gene::GeneError, genotype::GenotypeError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one gene must be simulated")]
    EmptyGeneSet,

    #[error("Gene '{0}' was provided more than once")]
    DuplicateGene(String),

    #[error(transparent)]
    InvalidGene(#[from] GeneError),

    #[error("At least one genotype must be available for parents")]
    EmptyGenotypeSet,

    #[error("Genotype '{0}' was provided more than once")]
    DuplicateGenotype(String),

    #[error(transparent)]
    InvalidGenotype(#[from] GenotypeError),

    #[error("The number of families must be strictly positive")]
    ZeroFamilies,

    #[error("The number of children per family must be strictly positive")]
    ZeroChildren,
}
