use genome::{Gene, Genotype};

use crate::{
    config::SimConfig,
    dataset::{Dataset, DatasetRow},
    family::{ChildId, FamilyId, Parent},
};

/// Mock an ordered list of genes.
pub fn mock_genes(names: &[&str]) -> Vec<Gene> {
    names.iter().map(|name| Gene::new(name).expect("Invalid mock gene")).collect()
}

fn mock_genotypes<const N: usize>(genotypes: [&str; N]) -> Vec<Genotype> {
    genotypes.iter().map(|g| g.parse().expect("Invalid mock genotype")).collect()
}

/// Mock a simulation configuration, using every possible genotype for founders.
pub fn mock_config(genes: &[&str], num_families: u32, children_per_family: u32) -> SimConfig {
    SimConfig::new(mock_genes(genes), Genotype::ALL.to_vec(), num_families, children_per_family)
        .expect("Invalid mock configuration")
}

/// Mock a dataset row.
/// # Arguments:
/// - `child`  : child genotypes, one per gene (e.g. `["Aa", "aa"]`)
/// - `parents`: `[Parent1, Parent2]` genotypes, one per gene.
pub fn mock_row<const N: usize>(family_id: u32, child_id: u32, child: [&str; N], parents: [[&str; N]; 2]) -> DatasetRow {
    DatasetRow {
        family_id: FamilyId(family_id),
        child_id : ChildId(child_id),
        child    : mock_genotypes(child),
        parents  : parents.map(|genotypes| Parent::new(mock_genotypes(genotypes))),
    }
}

/// Mock a two-gene ("G1", "G2"), two-family, four-children dataset.
/// - G1 children genotypes: Aa, Aa, AA, aa
/// - G2 children genotypes: aa, aa, aa, aa
pub fn mock_dataset() -> Dataset {
    let parents = [["Aa", "aa"], ["Aa", "aa"]];
    Dataset::new(mock_genes(&["G1", "G2"]), vec![
        mock_row(1, 1, ["Aa", "aa"], parents),
        mock_row(1, 2, ["Aa", "aa"], parents),
        mock_row(2, 1, ["AA", "aa"], parents),
        mock_row(2, 2, ["aa", "aa"], parents),
    ])
}
