//! Criterion benchmarks for the eight queens GA.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_ga::ga::board::count_conflicts;
use queens_ga::ga::{Chromosome, Evolution, QueensConfig};
use queens_ga::random::create_rng;

fn bench_conflicts(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let genomes: Vec<Chromosome> = (0..1000).map(|_| Chromosome::random(&mut rng)).collect();

    c.bench_function("count_conflicts_1000", |b| {
        b.iter(|| {
            let total: usize = genomes
                .iter()
                .map(|g| count_conflicts(black_box(g.genes())))
                .sum();
            black_box(total)
        })
    });
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");
    group.sample_size(10);

    for &pop in &[100usize, 1000] {
        let config = QueensConfig::default()
            .with_population_size(pop)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, config| {
            b.iter_batched(
                || Evolution::new(config.clone()).expect("valid config"),
                |mut engine| {
                    engine.evolve();
                    black_box(engine)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for (pop, gen) in [(100usize, 50usize), (300, 100)] {
        let config = QueensConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_crossover_rate(0.7)
            .with_mutation_rate(0.9)
            .with_tournament_rate(0.01)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, config| {
                b.iter(|| {
                    let trace = Evolution::new(black_box(config.clone()))
                        .expect("valid config")
                        .run();
                    black_box(trace)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_conflicts, bench_evolve, bench_full_run);
criterion_main!(benches);
