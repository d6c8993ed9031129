use std::fmt::{self, Display, Formatter};

use genome::Genotype;

/// Unique, 1-based identifier of a simulated family.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FamilyId(pub u32);

impl Display for FamilyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// 1-based rank of a child within its family. Displayed as `Child<n>`
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChildId(pub u32);

impl Display for ChildId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!("Child{}", self.0))
    }
}

/// Slot of a parent within a family. Used to prefix flattened parent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSlot { Parent1, Parent2 }

impl ParentSlot {
    pub const ALL: [Self; 2] = [Self::Parent1, Self::Parent2];

    /// Position of the slot within a `[Parent; 2]` record.
    pub fn index(self) -> usize {
        match self {
            Self::Parent1 => 0,
            Self::Parent2 => 1,
        }
    }
}

impl Display for ParentSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Parent1 => "Parent1",
            Self::Parent2 => "Parent2",
        })
    }
}

/// Founder individual. Genotypes are indexed by gene position, following the configured gene order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    genotypes: Vec<Genotype>,
}

impl Parent {
    pub fn new(genotypes: Vec<Genotype>) -> Self {
        Self{genotypes}
    }

    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }
}

/// A pair of parents, sharing a unique family identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub id     : FamilyId,
    pub parents: [Parent; 2],
}

impl Family {
    pub fn parent(&self, slot: ParentSlot) -> &Parent {
        &self.parents[slot.index()]
    }
}

/// Simulated offspring of a family. Phenotypes are derived from genotypes, and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub family_id: FamilyId,
    pub child_id : ChildId,
    genotypes    : Vec<Genotype>,
}

impl Child {
    pub fn new(family_id: FamilyId, child_id: ChildId, genotypes: Vec<Genotype>) -> Self {
        Self{family_id, child_id, genotypes}
    }

    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }
}
