use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_codepoints::{bundled, Registry, Scope};
use unicode_codepoints_benches::{codepoints, configure, names};

#[inline(never)]
fn info_for(registry: &Registry, codepoints: &[u32]) -> usize
{
    codepoints
        .iter()
        .filter(|&&code| registry.info_for(code, Scope::Global).is_ok())
        .count()
}

#[inline(never)]
fn resolve_by_name(registry: &Registry, names: &[String], include_aliases: bool) -> usize
{
    names
        .iter()
        .filter_map(|name| registry.resolve_by_name(name, include_aliases))
        .count()
}

/// запросы к реестру
fn lookup(c: &mut Criterion)
{
    let mut group = c.benchmark_group("lookup");
    configure(&mut group);

    let registry = bundled().unwrap();
    let codepoints = codepoints(7);
    let names = names(registry, 3);

    group.bench_with_input(
        BenchmarkId::new("info_for", codepoints.len()),
        &codepoints,
        |b, codepoints| b.iter(|| info_for(registry, black_box(codepoints))),
    );

    group.bench_with_input(
        BenchmarkId::new("block_for_codepoint", codepoints.len()),
        &codepoints,
        |b, codepoints| {
            b.iter(|| {
                black_box(codepoints)
                    .iter()
                    .filter(|&&code| registry.block_for_codepoint(code).is_some())
                    .count()
            })
        },
    );

    for include_aliases in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("resolve_by_name", include_aliases),
            &names,
            |b, names| b.iter(|| resolve_by_name(registry, black_box(names), include_aliases)),
        );
    }

    group.finish();
}

/// перечисление общего представления и всех блоков
fn enumerate(c: &mut Criterion)
{
    let mut group = c.benchmark_group("enumerate");
    configure(&mut group);

    let registry = bundled().unwrap();

    group.bench_function("global", |b| {
        b.iter(|| registry.enumerate(black_box(Scope::Global)).count())
    });

    group.bench_function("per block", |b| {
        b.iter(|| {
            registry
                .blocks()
                .iter()
                .map(|block| registry.enumerate(Scope::Block(block)).count())
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, lookup, enumerate);
criterion_main!(benches);
