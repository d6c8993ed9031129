use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneError {
    #[error("Gene identifiers cannot be empty")]
    Empty,

    #[error("Invalid gene identifier {0:?}: identifiers cannot contain commas, double quotes, line breaks or path separators")]
    ForbiddenCharacter(String),
}
