use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("Invalid value '{arg}'. [{err}]")]
    ParseArg{arg: String, err: String},

    #[error("'{0}' must be strictly greater than 0")]
    NonPositive(String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("'{0}' is not a valid filename. Use --output-dir to specify a directory")]
    InvalidFilename(String),

    #[error("Failed to serialize command line arguments")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to deserialize command line arguments")]
    Deserialize(#[source] serde_yaml::Error),
}
