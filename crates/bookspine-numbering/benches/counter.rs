use bookspine_locale::Catalog;
use bookspine_numbering::{Division, SectionCounter};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_counter_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");
    group.sample_size(10);

    let division = Division::chapter(3);
    let catalog = Catalog::builtin("en").unwrap();

    group.bench_function("walk_and_render", |b| {
        b.iter(|| {
            let mut counter = SectionCounter::new(5, &division);
            for level in [1, 2, 3, 4, 5, 2, 3, 3, 4, 2] {
                counter.inc(std::hint::black_box(level));
            }
            let anchor = counter.anchor(3);
            let prefix = counter.prefix(3, 5, &catalog);
            std::hint::black_box((anchor, prefix));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_counter_operations);
criterion_main!(benches);
