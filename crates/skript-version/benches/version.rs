use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skript_version::{compare, Comparator, Version};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2",
        "1.2.3",
        "2.10.4 beta",
        "  3.0 rc 1  ",
        "1.8.8 build 2314",
        "0.0.1alpha",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.0", "1.9.9"),
        ("1.0", "1.0 rc"),
        ("1.0 alpha", "1.0 beta"),
        ("1.2.0", "1.2"),
    ];

    c.bench_function("compare_strings", |b| {
        b.iter(|| {
            for (a, bver) in cases {
                black_box(compare(black_box(a), black_box(bver)).ok());
            }
        })
    });

    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .map(|(a, bver)| (Version::parse(a).unwrap(), Version::parse(bver).unwrap()))
        .collect();

    c.bench_function("compare_parsed", |b| {
        b.iter(|| {
            for (a, bver) in &parsed {
                black_box(a.compare_to(black_box(bver)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = [
        "1.10", "1.2 rc", "1.2", "0.9.9", "1.2 alpha", "2.0", "1.9.9", "1.0 beta", "1.0", "3.1.4 dev",
    ];

    c.bench_function("sort_versions", |b| {
        b.iter(|| black_box(Comparator::sort(black_box(&versions)).ok()))
    });
}

criterion_group!(benches, bench_parse, bench_compare, bench_sort);
criterion_main!(benches);
