use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::{GameSession, Presets};

fn first_reveal(c: &mut Criterion) {
    let presets = Presets::default();
    let mut group = c.benchmark_group("first_reveal");

    for preset in presets.iter() {
        let config = preset.config().expect("default presets are valid");
        let center = (config.size() / 2, config.size() / 2);

        group.bench_with_input(BenchmarkId::from_parameter(&preset.name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut session = GameSession::new(config, seed);
                black_box(session.reveal(black_box(center)))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, first_reveal);
criterion_main!(benches);
