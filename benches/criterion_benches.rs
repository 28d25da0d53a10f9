use criterion::{black_box, criterion_group, criterion_main, Criterion};

use meowkoban::engine::PuzzleEngine;
use meowkoban::rooms::RoomCatalog;
use meowkoban::solver;

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_nudge(c: &mut Criterion) {
    // one block, one push
    bench_room(c, 0);
}

#[allow(unused)]
fn bench_two_glasses(c: &mut Criterion) {
    // two blocks, order matters
    bench_room(c, 2);
}

#[allow(unused)]
fn bench_wedged(c: &mut Criterion) {
    // exhausts the whole reachable state space
    bench_room(c, 3);
}

fn bench_room(c: &mut Criterion, index: usize) {
    let catalog = RoomCatalog::builtin();
    let engine = PuzzleEngine::from_catalog(&catalog, index).unwrap();
    let description = &catalog.get(index).unwrap().description;

    c.bench_function(description, |b| {
        b.iter(|| solver::find_hint(black_box(&engine), black_box(false)))
    });
}

criterion_group!(benches, bench_nudge, bench_two_glasses, bench_wedged);
criterion_main!(benches);
