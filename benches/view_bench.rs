//! Benchmarks for the view layer
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fleetview::view::{locale_cmp, paginate, PageSize, SortPolicy};
use fleetview::ClientSummary;

fn create_test_clients(count: usize) -> Vec<ClientSummary> {
    (0..count)
        .map(|i| {
            // Scatter names so the sort has work to do
            let n = (i * 7919) % count;
            ClientSummary::new(
                format!("Client {:05}", n),
                "Contact",
                "contact@example.com",
                (n % 12) as u32,
            )
        })
        .collect()
}

fn client_name(client: &ClientSummary) -> &str {
    &client.name
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let policy = SortPolicy::by_key(client_name);

    for size in [100, 1000, 10000] {
        let clients = create_test_clients(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("by_name_{}", size), |b| {
            b.iter(|| policy.apply(black_box(clients.clone())))
        });

        let sorted = policy.apply(clients.clone());
        group.bench_function(format!("already_sorted_{}", size), |b| {
            b.iter(|| policy.apply(black_box(sorted.clone())))
        });
    }

    group.finish();
}

fn bench_locale_cmp(c: &mut Criterion) {
    c.bench_function("locale_cmp_case_tie", |b| {
        b.iter(|| locale_cmp(black_box("23EFU4FW5678f39G"), black_box("23efu4fw5678F39G")))
    });
}

fn bench_paginate(c: &mut Criterion) {
    let clients = create_test_clients(10000);
    let mut group = c.benchmark_group("paginate");

    for size in PageSize::ALL {
        group.bench_function(format!("middle_page_size_{}", size), |b| {
            b.iter(|| paginate(black_box(&clients), black_box(150), size).items.len())
        });
    }

    group.bench_function("out_of_range", |b| {
        b.iter(|| paginate(black_box(&clients), black_box(1_000_000), PageSize::Five).items.len())
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_locale_cmp, bench_paginate);
criterion_main!(benches);
