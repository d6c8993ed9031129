use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Failed to parse '{0}' into a valid allele. Expected either 'A' (dominant) or 'a' (recessive)")]
pub struct ParseAlleleError(pub String);
