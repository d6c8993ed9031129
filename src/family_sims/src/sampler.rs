use genome::{Gene, Genotype};

use crate::family::Parent;

/// Draw a random founder individual: for each gene, pick a genotype uniformly among `genotypes`,
/// independently of any other gene.
///
/// # Panics
/// - if `genotypes` is empty. `SimConfig` guarantees this never happens.
pub fn sample_parent_genotype(genes: &[Gene], genotypes: &[Genotype], rng: &mut fastrand::Rng) -> Parent {
    assert!(!genotypes.is_empty(), "Cannot sample a genotype from an empty set");
    let genotypes = genes.iter()
        .map(|_| genotypes[rng.usize(..genotypes.len())])
        .collect();
    Parent::new(genotypes)
}
