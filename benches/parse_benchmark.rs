//! Benchmarks for BOM artifact parsing.

use criterion::{criterion_group, criterion_main, Criterion};
use hwbom_tools::parse_bom;
use std::fmt::Write;
use std::hint::black_box;

fn synthetic_csv(rows: usize) -> String {
    let mut data = String::from("Designator,Value,Qty,Manufacturer,MPN,Unit Cost\n");
    for i in 0..rows {
        let _ = writeln!(data, "R{i},{}k,2,Yageo,RC0402-{i},$0.0{}", i % 100, i % 9 + 1);
    }
    data
}

fn benchmark_parse_csv(c: &mut Criterion) {
    let data = synthetic_csv(500);
    c.bench_function("parse_csv_500_rows", |b| {
        b.iter(|| parse_bom(black_box(data.as_bytes()), "bench/bom.csv"))
    });
}

fn benchmark_normalize_names(c: &mut Criterion) {
    let names = ["10kohm", "220R", "100n", "The 4.7 uF cap", "LM358 op-amp"];
    c.bench_function("normalize_component_names", |b| {
        b.iter(|| {
            for name in names {
                black_box(hwbom_tools::normalize::component::normalize(black_box(name)));
            }
        })
    });
}

criterion_group!(benches, benchmark_parse_csv, benchmark_normalize_names);
criterion_main!(benches);
