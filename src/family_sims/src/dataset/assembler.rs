use std::collections::BTreeMap;

use indicatif::ProgressBar;
use located_error::prelude::*;
use log::{debug, trace};

use crate::{
    config::SimConfig,
    family::{Child, ChildId, Family, FamilyId, Parent, ParentSlot},
    inheritance::simulate_child_genotype,
    sampler::sample_parent_genotype,
};
use super::{Dataset, DatasetError, DatasetRow};

/// Flattened parent records, keyed by family identifier. `[Parent1, Parent2]`
pub type ParentTable = BTreeMap<FamilyId, [Parent; 2]>;

/// Builds a `Dataset` out of a `SimConfig`, by sampling founders, simulating their offspring
/// and joining both tables.
/// # Fields
/// - `config`: simulation parameters
/// - `rng`   : random number generator. Every random draw of the run is taken from this instance.
pub struct DatasetAssembler<'a> {
    config: &'a SimConfig,
    rng   : fastrand::Rng,
}

impl<'a> DatasetAssembler<'a> {
    /// Instantiate an assembler, using the seed of `config`, if any.
    pub fn new(config: &'a SimConfig) -> Self {
        Self{config, rng: config.rng()}
    }

    /// Instantiate an assembler with an externally provided RNG.
    pub fn with_rng(config: &'a SimConfig, rng: fastrand::Rng) -> Self {
        Self{config, rng}
    }

    /// Run the full generation pass.
    ///
    /// # Arguments
    /// - `progress`: optional progress bar, incremented once per simulated family.
    ///
    /// # Errors
    /// - if a child record cannot be matched with its parents during the final join.
    pub fn assemble(mut self, progress: Option<&ProgressBar>) -> Result<Dataset> {
        let families = self.sample_families();
        debug!("Sampled {} families", families.len());

        let mut children = Vec::with_capacity(self.config.num_children());
        for family in &families {
            children.extend(self.simulate_children(family));
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        let parents = Self::flatten_parents(families);
        let rows = Self::join(children, &parents).loc("While joining children and parent records")?;
        Ok(Dataset::new(self.config.genes().to_vec(), rows))
    }

    /// Sample all `Parent1` records first, then all `Parent2` records, and pair them by family.
    pub fn sample_families(&mut self) -> Vec<Family> {
        let n = self.config.num_families();
        let parent1: Vec<Parent> = (0..n).map(|_| self.sample_parent()).collect();
        let parent2: Vec<Parent> = (0..n).map(|_| self.sample_parent()).collect();

        (1..=n).zip(parent1.into_iter().zip(parent2))
            .map(|(id, (p1, p2))| Family{id: FamilyId(id), parents: [p1, p2]})
            .collect()
    }

    fn sample_parent(&mut self) -> Parent {
        sample_parent_genotype(self.config.genes(), self.config.genotypes(), &mut self.rng)
    }

    /// Simulate `children_per_family` offspring for a family. Every gene is inherited independently.
    pub fn simulate_children(&mut self, family: &Family) -> Vec<Child> {
        let (parent1, parent2) = (family.parent(ParentSlot::Parent1), family.parent(ParentSlot::Parent2));
        (1..=self.config.children_per_family()).map(|child_num| {
            let genotypes = parent1.genotypes().iter().zip(parent2.genotypes())
                .map(|(a, b)| simulate_child_genotype(a, b, &mut self.rng))
                .collect();
            let child = Child::new(family.id, ChildId(child_num), genotypes);
            trace!("Family {} - {}: {:?}", family.id, child.child_id, child.genotypes());
            child
        }).collect()
    }

    /// Index parent records by family identifier.
    pub fn flatten_parents(families: Vec<Family>) -> ParentTable {
        families.into_iter()
            .map(|family| (family.id, family.parents))
            .collect()
    }

    /// Inner join of children and parent records on the family identifier. Children order is preserved.
    ///
    /// # Errors
    /// - `DatasetError::MissingParentRecord` if a child's family is absent from `parents`
    pub fn join(children: Vec<Child>, parents: &ParentTable) -> Result<Vec<DatasetRow>> {
        children.into_iter().map(|child| {
            let family_parents = parents.get(&child.family_id)
                .ok_or(DatasetError::MissingParentRecord(child.family_id))
                .with_loc(|| format!("While joining {} of family {}", child.child_id, child.family_id))?;
            Ok(DatasetRow{
                family_id: child.family_id,
                child_id : child.child_id,
                child    : child.genotypes().to_vec(),
                parents  : family_parents.clone(),
            })
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use genome::{Allele, Genotype, Phenotype};
    use crate::tests::common;

    fn assemble(config: &SimConfig) -> Dataset {
        DatasetAssembler::new(config).assemble(None).expect("Failed to assemble dataset")
    }

    #[test]
    fn row_count() {
        for (families, children) in [(1, 1), (10, 3), (100, 3), (7, 5)] {
            let config = common::mock_config(&["Gene1", "Gene2", "Gene3"], families, children).with_seed(1);
            assert_eq!(assemble(&config).len(), families as usize * children as usize);
        }
    }

    #[test]
    fn single_family_single_child() {
        let config  = common::mock_config(&["Gene1", "Gene2", "Gene3"], 1, 1).with_seed(2);
        let dataset = assemble(&config);
        assert_eq!(dataset.len(), 1);

        let row = &dataset.rows()[0];
        assert_eq!(row.family_id, FamilyId(1));
        assert_eq!(row.child_id, ChildId(1));
        assert_eq!(row.fields().len(), dataset.header().len());
        assert_eq!(dataset.header().len(), 2 + 3 * 2 + 3 * 2);
    }

    #[test]
    fn children_ids_are_complete_and_unique() {
        let config  = common::mock_config(&["Gene1"], 20, 4).with_seed(3);
        let dataset = assemble(&config);
        for family_id in 1..=20 {
            let ids: Vec<String> = dataset.rows().iter()
                .filter(|row| row.family_id == FamilyId(family_id))
                .map(|row| row.child_id.to_string())
                .collect();
            assert_eq!(ids, ["Child1", "Child2", "Child3", "Child4"]);
            assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 4);
        }
    }

    #[test]
    fn family_ids_are_sequential() {
        let config = common::mock_config(&["Gene1"], 12, 1).with_seed(4);
        let ids: Vec<u32> = assemble(&config).rows().iter().map(|row| row.family_id.0).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn genotypes_and_phenotypes_are_well_formed() {
        let config  = common::mock_config(&["Gene1", "Gene2", "Gene3"], 100, 3).with_seed(5);
        let dataset = assemble(&config);
        for row in dataset.rows() {
            assert_eq!(row.child.len(), 3);
            for genotype in row.child.iter().chain(row.parents.iter().flat_map(|p| p.genotypes())) {
                let s = genotype.to_string();
                assert_eq!(s.len(), 2);
                assert!(s.chars().all(|c| c == 'A' || c == 'a'));
                let chars: Vec<char> = s.chars().collect();
                assert!(chars[0] <= chars[1]);
            }
            let fields = row.fields();
            for gene_idx in 0..3 {
                let genotype  = &fields[2 + 2 * gene_idx];
                let phenotype = &fields[3 + 2 * gene_idx];
                assert_eq!(phenotype == "Dominant", genotype.contains('A'));
                assert_eq!(row.child[gene_idx].phenotype() == Phenotype::Dominant, row.child[gene_idx].contains(Allele::Dominant));
            }
        }
    }

    #[test]
    fn children_alleles_trace_back_to_parents() {
        let config  = common::mock_config(&["Gene1", "Gene2"], 200, 3).with_seed(6);
        let dataset = assemble(&config);
        for row in dataset.rows() {
            for (gene_idx, child) in row.child.iter().enumerate() {
                let p1 = row.parent(ParentSlot::Parent1).genotypes()[gene_idx];
                let p2 = row.parent(ParentSlot::Parent2).genotypes()[gene_idx];
                let [x, y] = child.alleles();
                assert!((p1.contains(x) && p2.contains(y)) || (p1.contains(y) && p2.contains(x)));
            }
        }
    }

    #[test]
    fn siblings_share_parents() {
        let config  = common::mock_config(&["Gene1", "Gene2"], 30, 3).with_seed(7);
        let dataset = assemble(&config);
        for family in dataset.rows().chunks(3) {
            assert!(family.iter().all(|row| row.family_id == family[0].family_id));
            assert!(family.iter().all(|row| row.parents == family[0].parents));
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        let config = common::mock_config(&["Gene1", "Gene2", "Gene3"], 50, 3).with_seed(42);
        assert_eq!(assemble(&config), assemble(&config));
    }

    #[test]
    fn different_seeds_differ() {
        let a = assemble(&common::mock_config(&["Gene1", "Gene2", "Gene3"], 50, 3).with_seed(1));
        let b = assemble(&common::mock_config(&["Gene1", "Gene2", "Gene3"], 50, 3).with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn external_rng_matches_seeded_config() {
        let config = common::mock_config(&["Gene1"], 10, 2).with_seed(8);
        let external = DatasetAssembler::with_rng(&config, fastrand::Rng::with_seed(8))
            .assemble(None)
            .expect("Failed to assemble dataset");
        assert_eq!(external, assemble(&config));
    }

    #[test]
    fn parent1_records_are_drawn_before_parent2() {
        let config = common::mock_config(&["Gene1", "Gene2"], 5, 1).with_seed(9);
        let families = DatasetAssembler::new(&config).sample_families();

        let mut rng = fastrand::Rng::with_seed(9);
        let parent1: Vec<Parent> = (0..5).map(|_| sample_parent_genotype(config.genes(), config.genotypes(), &mut rng)).collect();
        let parent2: Vec<Parent> = (0..5).map(|_| sample_parent_genotype(config.genes(), config.genotypes(), &mut rng)).collect();
        for (i, family) in families.iter().enumerate() {
            assert_eq!(family.parent(ParentSlot::Parent1), &parent1[i]);
            assert_eq!(family.parent(ParentSlot::Parent2), &parent2[i]);
        }
    }

    #[test]
    fn homozygous_parents_yield_fixed_children() {
        let config = common::mock_config(&["Gene1"], 1, 50);
        let family = Family{id: FamilyId(1), parents: [
            Parent::new(vec![Genotype::HOMOZYGOUS_DOMINANT]),
            Parent::new(vec![Genotype::HOMOZYGOUS_RECESSIVE]),
        ]};
        let children = DatasetAssembler::new(&config).simulate_children(&family);
        assert_eq!(children.len(), 50);
        assert!(children.iter().all(|child| child.genotypes() == [Genotype::HETEROZYGOUS]));
    }

    #[test]
    fn join_with_missing_parents() {
        let children = vec![Child::new(FamilyId(3), ChildId(1), vec![Genotype::HETEROZYGOUS])];
        let err = DatasetAssembler::join(children, &ParentTable::new())
            .expect_err("Joining an orphan child should fail");
        assert!(matches!(err.downcast_ref::<DatasetError>(), Some(DatasetError::MissingParentRecord(FamilyId(3)))));
    }

    #[test]
    fn progress_is_incremented_per_family() -> Result<()> {
        let config = common::mock_config(&["Gene1"], 17, 2).with_seed(10);
        let pb = ProgressBar::hidden();
        DatasetAssembler::new(&config).assemble(Some(&pb))?;
        assert_eq!(pb.position(), 17);
        Ok(())
    }
}
