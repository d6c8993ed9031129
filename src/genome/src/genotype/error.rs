use thiserror::Error;

use crate::allele::ParseAlleleError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenotypeError {
    #[error("Invalid genotype '{0}': a genotype must contain exactly two alleles")]
    InvalidLength(String),

    #[error("Invalid genotype '{genotype}'. [{source}]")]
    InvalidAllele{genotype: String, source: ParseAlleleError},
}
