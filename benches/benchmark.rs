use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use presence::flight::{Conflict, DEFAULT_CONFLICT_ID};
use presence::{Optional, filter_present_and_unwrap};

// stands in for a default that is costly to build
fn expensive_default() -> Conflict {
    let id = (0..256).fold(DEFAULT_CONFLICT_ID, |acc, n| black_box(acc ^ n));
    Conflict::new(id)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let present = Optional::present(Conflict::new(1));
    c.bench_function("or_else present", |b| b.iter(|| black_box(present).or_else(expensive_default())));
    c.bench_function("or_else_get present", |b| b.iter(|| black_box(present).or_else_get(expensive_default)));

    let absent: Optional<Conflict> = Optional::empty();
    c.bench_function("or_else absent", |b| b.iter(|| black_box(absent).or_else(expensive_default())));
    c.bench_function("or_else_get absent", |b| b.iter(|| black_box(absent).or_else_get(expensive_default)));

    for n in [1_000, 100_000] {
        let items: Vec<Optional<u32>> = (0..n)
            .map(|i| if i % 2 == 0 { Optional::present(i) } else { Optional::empty() })
            .collect();
        c.bench_function(&format!("flatten {n}"), |b| {
            b.iter(|| filter_present_and_unwrap(black_box(&items).iter().copied()).sum::<u32>())
        });
        c.bench_function(&format!("filter get {n}"), |b| {
            b.iter(|| {
                black_box(&items)
                    .iter()
                    .filter(|o| o.is_present())
                    .filter_map(|o| o.get().ok())
                    .sum::<u32>()
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
