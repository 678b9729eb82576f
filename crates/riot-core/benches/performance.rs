// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use riot_core::{Cell, CityMap, ModelParams, RiotModel};

fn build_model(seed: u64) -> RiotModel {
    let map = CityMap::new(100, 200, 5, 10, 10).expect("Failed to build city map");
    RiotModel::new(
        100,
        200,
        Cell::new(10, 0),
        Cell::new(90, 0),
        Some(map),
        ModelParams::default(),
        seed,
    )
    .expect("Failed to build model")
}

fn bench_init_population(c: &mut Criterion) {
    c.bench_function("init_population_1500", |b| {
        b.iter_batched(
            || build_model(1),
            |mut model| black_box(model.init_population()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_step(c: &mut Criterion) {
    let mut model = build_model(2);
    model
        .init_population()
        .expect("Failed to populate benchmark model");
    c.bench_function("step_1500_agents", |b| {
        b.iter_batched(
            || model.clone(),
            |mut model| {
                model.step();
                black_box(model.agent_count())
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_init_population, bench_step);
criterion_main!(benches);
