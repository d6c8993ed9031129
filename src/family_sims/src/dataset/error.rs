use thiserror::Error;

use crate::family::FamilyId;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Family {0} has children records, but no parent record")]
    MissingParentRecord(FamilyId),

    #[error("Gene '{0}' is not part of the simulated genes")]
    UnknownGene(String),

    #[error("Failed to write the dataset")]
    WriteDataset,

    #[error("Failed to render the genotype distribution chart")]
    WriteChart,
}
