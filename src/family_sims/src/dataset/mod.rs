use std::cmp::Reverse;

use ahash::AHashMap;
use genome::{Gene, Genotype, Phenotype};
use parser::ChartOrder;

use crate::family::{ChildId, FamilyId, Parent, ParentSlot};

mod assembler;
pub use assembler::{DatasetAssembler, ParentTable};

mod error;
pub use error::DatasetError;

pub const FAMILY_ID_COLUMN: &str = "Family_ID";
pub const CHILD_ID_COLUMN : &str = "Child_ID";

/// One flattened dataset row: a child, joined with both of its parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub family_id: FamilyId,
    pub child_id : ChildId,
    pub child    : Vec<Genotype>,
    pub parents  : [Parent; 2],
}

impl DatasetRow {
    /// Row values, in the same order as `Dataset::header()`
    pub fn fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(2 + self.child.len() * 4);
        fields.push(self.family_id.to_string());
        fields.push(self.child_id.to_string());
        for genotype in &self.child {
            fields.push(genotype.to_string());
            fields.push(genotype.phenotype().to_string());
        }
        for slot in ParentSlot::ALL {
            fields.extend(self.parent(slot).genotypes().iter().map(Genotype::to_string));
        }
        fields
    }

    pub fn parent(&self, slot: ParentSlot) -> &Parent {
        &self.parents[slot.index()]
    }
}

/// Flattened multi-gene family dataset. One row per simulated child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    genes: Vec<Gene>,
    rows : Vec<DatasetRow>,
}

impl Dataset {
    pub fn new(genes: Vec<Gene>, rows: Vec<DatasetRow>) -> Self {
        Self{genes, rows}
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names:
    /// `Family_ID`, `Child_ID`, then `<Gene>_Genotype`, `<Gene>_Phenotype` for each gene,
    /// then `Parent1_<Gene>` for each gene, then `Parent2_<Gene>` for each gene.
    pub fn header(&self) -> Vec<String> {
        let mut header = vec![FAMILY_ID_COLUMN.to_string(), CHILD_ID_COLUMN.to_string()];
        for gene in &self.genes {
            header.push(format!("{gene}_Genotype"));
            header.push(format!("{gene}_Phenotype"));
        }
        for slot in ParentSlot::ALL {
            header.extend(self.genes.iter().map(|gene| format!("{slot}_{gene}")));
        }
        header
    }

    /// Children genotype distribution of a gene. Only observed genotypes are reported.
    /// - `ChartOrder::Count`   : descending count. Ties are sorted by genotype.
    /// - `ChartOrder::Genotype`: `AA`, `Aa`, `aa`
    pub fn genotype_counts(&self, gene_idx: usize, order: ChartOrder) -> Vec<(Genotype, usize)> {
        let mut counts: AHashMap<Genotype, usize> = AHashMap::new();
        for genotype in self.rows.iter().filter_map(|row| row.child.get(gene_idx)) {
            *counts.entry(*genotype).or_insert(0) += 1;
        }

        let mut counts: Vec<(Genotype, usize)> = counts.into_iter().collect();
        match order {
            ChartOrder::Count    => counts.sort_unstable_by_key(|&(genotype, count)| (Reverse(count), genotype)),
            ChartOrder::Genotype => counts.sort_unstable_by_key(|&(genotype, _)| genotype),
        }
        counts
    }

    /// Children phenotype tally of a gene: `[(Dominant, n), (Recessive, m)]`
    pub fn phenotype_counts(&self, gene_idx: usize) -> [(Phenotype, usize); 2] {
        let dominant = self.rows.iter()
            .filter_map(|row| row.child.get(gene_idx))
            .filter(|genotype| genotype.phenotype() == Phenotype::Dominant)
            .count();
        let total = self.rows.iter().filter(|row| row.child.get(gene_idx).is_some()).count();
        [(Phenotype::Dominant, dominant), (Phenotype::Recessive, total - dominant)]
    }
}
