use std::{fmt::{self, Display, Formatter}, str::FromStr};

mod error;
pub use error::ParseAlleleError;

/// A single inherited unit of a gene.
/// - `Dominant` : 'A'
/// - `Recessive`: 'a'
///
/// Variant order follows character order ('A' < 'a'), so that sorting a pair
/// of alleles always yields the canonical genotype notation.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Allele { Dominant, Recessive }

impl Allele {
    #[must_use]
    pub fn is_dominant(&self) -> bool {
        matches!(self, Self::Dominant)
    }
}

impl From<&Allele> for char {
    fn from(value: &Allele) -> Self {
        match value {
            Allele::Dominant  => 'A',
            Allele::Recessive => 'a',
        }
    }
}

impl TryFrom<char> for Allele {
    type Error = ParseAlleleError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Self::Dominant),
            'a' => Ok(Self::Recessive),
             _  => Err(ParseAlleleError(value.to_string()))
        }
    }
}

impl FromStr for Allele {
    type Err = ParseAlleleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let char = s.parse::<char>().map_err(|_| ParseAlleleError(s.to_string()))?;
        Self::try_from(char)
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&char::from(self), f)
    }
}
