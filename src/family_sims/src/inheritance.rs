use genome::Genotype;

/// Simulate the genotype of a child for a single gene: one allele is drawn uniformly from each
/// parent, and both alleles are combined into a canonical genotype.
pub fn simulate_child_genotype(parent_a: &Genotype, parent_b: &Genotype, rng: &mut fastrand::Rng) -> Genotype {
    let allele_a = parent_a.meiosis(rng);
    let allele_b = parent_b.meiosis(rng);
    Genotype::fertilize(allele_a, allele_b)
}
