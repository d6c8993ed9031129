use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use family_sims::{config::SimConfig, inheritance, DatasetAssembler};
use genome::Genotype;

fn bench_inheritance(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    c.bench_function("simulate_child_genotype (Aa x Aa)", |b| b.iter(|| {
        inheritance::simulate_child_genotype(
            black_box(&Genotype::HETEROZYGOUS),
            black_box(&Genotype::HETEROZYGOUS),
            &mut rng,
        )
    }));
}

fn bench_assembler(c: &mut Criterion) {
    let mut group = c.benchmark_group("DatasetAssembler::assemble");
    for num_families in [100, 1_000, 10_000] {
        let defaults = SimConfig::default();
        let config = SimConfig::new(
            defaults.genes().to_vec(),
            defaults.genotypes().to_vec(),
            num_families,
            defaults.children_per_family()
        ).expect("Invalid benchmark configuration").with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(num_families), &config, |b, config| b.iter(|| {
            DatasetAssembler::new(black_box(config))
                .assemble(None)
                .expect("Failed to assemble dataset")
        }));
    }
    group.finish();
}

criterion_group!(benches, bench_inheritance, bench_assembler);
criterion_main!(benches);
