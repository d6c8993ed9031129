use std::{fmt::{self, Display, Formatter}, str::FromStr};

mod error;
pub use error::GeneError;

/// Characters which would corrupt a delimited output row if used within a column name,
/// or escape the output directory once a gene name is used within a filename.
const FORBIDDEN_CHARS: [char; 7] = [',', '"', '\n', '\r', '/', '\\', '\0'];

/// Identifier of a simulated gene (e.g. "Gene1").
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gene(String);

impl Gene {
    /// # Errors
    /// - if `name` is empty or contains a character listed in `FORBIDDEN_CHARS`
    pub fn new(name: &str) -> Result<Self, GeneError> {
        if name.is_empty() {
            return Err(GeneError::Empty)
        }
        if name.contains(FORBIDDEN_CHARS) {
            return Err(GeneError::ForbiddenCharacter(name.to_string()))
        }
        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Gene {
    type Err = GeneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
