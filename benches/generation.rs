//! Performance measurement for a complete seeded generation run

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wangtiles::algorithm::generator::generate;
use wangtiles::algorithm::strategy::{RandomPlacement, RandomSelection};
use wangtiles::spatial::Size;
use wangtiles::tiles::Tileset;

/// Measures time to fill the default 16x12 grid with a generous cap
fn bench_generate_default_grid(c: &mut Criterion) {
    c.bench_function("generate_16x12", |b| {
        b.iter(|| {
            let Ok(tileset) = Tileset::build(2) else {
                return;
            };

            let selection = RandomSelection::new(Some(12345));
            let placement = RandomPlacement::new(Some(54321));

            let Ok(run) = generate(&tileset, Size::new(16, 12), selection, placement, 10_000)
            else {
                return;
            };
            black_box(run.attempts);
        });
    });
}

criterion_group!(benches, bench_generate_default_grid);
criterion_main!(benches);
