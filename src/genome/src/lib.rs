pub mod allele;
pub use allele::Allele;

pub mod genotype;
pub use genotype::Genotype;

pub mod phenotype;
pub use phenotype::{Phenotype, classify};

pub mod gene;
pub use gene::Gene;
