//! Benchmarks for SDI registry operations.
//!
//! Dropdowns create and destroy a handful of named shapes on every open and
//! close, so churn is the pattern worth measuring.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pips_sdi::{SdiRegistry, Shape};
use pips_types::geometry::Point;

fn rect() -> Shape {
    Shape::Rect {
        p1: Point::new(0.0, 0.0),
        p2: Point::new(1.0, 1.0),
    }
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("sdi_create");

    for n in [10, 100, 1_000] {
        let names: Vec<String> = (0..n).map(|i| format!("obj_{i}")).collect();
        let label = format!("{n}");

        group.bench_function(BenchmarkId::new("create", &label), |b| {
            b.iter(|| {
                let mut reg = SdiRegistry::new();
                for name in &names {
                    reg.create(name, rect());
                }
                reg
            });
        });
    }

    group.finish();
}

fn bench_open_close_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("sdi_churn");

    for options in [5, 20] {
        let names: Vec<(String, String)> = (0..options)
            .map(|i| (format!("dd.opt{i}.rect"), format!("dd.opt{i}.label")))
            .collect();
        let label = format!("{options}");

        group.bench_function(BenchmarkId::new("open_close", &label), |b| {
            let mut reg = SdiRegistry::new();
            b.iter(|| {
                for (rect_name, label_name) in &names {
                    reg.create(rect_name, rect());
                    reg.create(
                        label_name,
                        Shape::Text {
                            anchor: Point::new(0.5, 0.5),
                        },
                    );
                }
                for (rect_name, label_name) in &names {
                    let _ = reg.destroy(rect_name);
                    let _ = reg.destroy(label_name);
                }
            });
        });
    }

    group.finish();
}

fn bench_move_to_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("sdi_move_to_top");

    for n in [100, 1_000] {
        let names: Vec<String> = (0..n).map(|i| format!("obj_{i}")).collect();
        let label = format!("{n}");

        group.bench_function(BenchmarkId::new("move_to_top", &label), |b| {
            b.iter_batched(
                || {
                    let mut reg = SdiRegistry::new();
                    for name in &names {
                        reg.create(name, rect());
                    }
                    reg
                },
                |mut reg| {
                    for name in &names {
                        let _ = reg.move_to_top(name);
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create, bench_open_close_churn, bench_move_to_top);
criterion_main!(benches);
