use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unicode_codepoints::{Dataset, Registry, UcdSources};

/// разбор текстов UCD и построение реестра вместе с проверкой инвариантов
fn load(c: &mut Criterion)
{
    let mut group = c.benchmark_group("load");
    unicode_codepoints_benches::configure(&mut group);

    let sources = UcdSources::bundled();

    group.bench_function("parse", |b| {
        b.iter(|| Dataset::parse(black_box(&sources)).unwrap())
    });

    group.bench_function("parse + build", |b| {
        b.iter(|| Registry::load(black_box(&sources)).unwrap())
    });

    let registry = Registry::load(&sources).unwrap();

    group.bench_function("audit", |b| b.iter(|| registry.audit()));

    group.finish();
}

criterion_group!(benches, load);
criterion_main!(benches);
