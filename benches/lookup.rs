#![allow(unused)]
extern crate v8heapconst;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::{fs, hint::black_box, path::PathBuf};
use v8heapconst::{HeapSpace, Snapshot};

/// Benchmark building the embedded snapshot and reading the generated file
fn bench_load(c: &mut Criterion) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/v8heapconst.py");
    let source = fs::read_to_string(&path).expect("Failed to read snapshot sample");

    let mut group = c.benchmark_group("load");
    group.bench_function("from_builtin", |b| {
        b.iter(|| black_box(Snapshot::from_builtin().unwrap()));
    });
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(Snapshot::parse(black_box(&source)).unwrap()));
    });
    group.finish();
}

/// Benchmark the lookups a dump annotator performs per tagged word
fn bench_lookup(c: &mut Criterion) {
    let snapshot = Snapshot::builtin().unwrap();
    let maps: Vec<(HeapSpace, u32)> = snapshot
        .known_maps()
        .iter()
        .map(|entry| (entry.key.space, entry.key.offset))
        .collect();

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(maps.len() as u64));
    group.bench_function("lookup_map", |b| {
        b.iter(|| {
            for &(space, offset) in &maps {
                black_box(snapshot.lookup_map(space, black_box(offset)));
            }
        });
    });
    group.bench_function("instance_type_name_of_map", |b| {
        b.iter(|| {
            for &(space, offset) in &maps {
                black_box(snapshot.instance_type_name_of_map(space, black_box(offset)));
            }
        });
    });
    group.finish();

    c.bench_function("lookup_instance_type_miss", |b| {
        b.iter(|| black_box(snapshot.lookup_instance_type(black_box(9999))));
    });
}

/// Benchmark rendering the generated format
fn bench_write(c: &mut Criterion) {
    let snapshot = Snapshot::builtin().unwrap();
    c.bench_function("to_source", |b| {
        b.iter(|| black_box(snapshot.to_source()));
    });
}

criterion_group!(benches, bench_load, bench_lookup, bench_write);
criterion_main!(benches);
