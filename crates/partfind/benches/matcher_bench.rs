//! Benchmarks for the run matcher

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use partfind::{find_part, MatchRequest};

fn bench_password_check(c: &mut Criterion) {
    let term = "dfeprado@gmail.com";
    let needle = "Pass!2988prad";

    let mut group = c.benchmark_group("matcher");
    group.throughput(Throughput::Bytes((term.len() + needle.len()) as u64));

    group.bench_function("password_hit", |b| {
        b.iter(|| {
            let request = MatchRequest::new(black_box(term), black_box(needle), 4)
                .map(|r| r.case_insensitive(true));
            black_box(request.ok().and_then(|r| find_part(&r)))
        })
    });

    group.bench_function("password_miss", |b| {
        b.iter(|| {
            let request = MatchRequest::new(black_box(term), black_box("Pass!2988Pass"), 4)
                .map(|r| r.case_insensitive(true));
            black_box(request.ok().and_then(|r| find_part(&r)))
        })
    });

    group.finish();
}

fn bench_worst_case(c: &mut Criterion) {
    // Every seed hits every term position, no run qualifies
    let term = "ab".repeat(512);
    let needle = "ac".repeat(512);

    let mut group = c.benchmark_group("matcher");
    group.throughput(Throughput::Bytes((term.len() + needle.len()) as u64));

    group.bench_function("dense_miss_1k", |b| {
        b.iter(|| {
            let request = MatchRequest::new(black_box(&term), black_box(&needle), 3);
            black_box(request.ok().and_then(|r| find_part(&r)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_password_check, bench_worst_case);
criterion_main!(benches);
