// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbmap::TreeMap;
use std::hint::black_box;

const SIZES: [usize; 2] = [100, 10_000];

fn rng() -> StdRng { StdRng::seed_from_u64(0x5eed) }

fn insert_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_rand");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::new();
            let mut rng = rng();

            for _ in 0..n {
                let i = rng.gen_range(0..n);
                map.insert(i, i).unwrap();
            }

            b.iter(|| {
                let k = rng.gen_range(0..n);
                map.insert(k, k).unwrap();
                map.remove(&k);
            });

            black_box(map);
        });
    }

    group.finish();
}

fn insert_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_seq");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::new();
            for i in 0..n { map.insert(i * 2, i * 2).unwrap(); }

            let mut i = 1;
            b.iter(|| {
                map.insert(i, i).unwrap();
                map.remove(&i);
                i = (i + 2) % n;
            });

            black_box(map);
        });
    }

    group.finish();
}

fn find_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_rand");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = rng();
            let mut keys: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            let map: TreeMap<_, _> = keys.iter().map(|&k| (k, k)).collect();

            keys.shuffle(&mut rng);

            let mut i = 0;
            b.iter(|| {
                let t = map.get(&keys[i]);
                i = (i + 1) % n;
                black_box(t);
            });
        });
    }

    group.finish();
}

fn navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let map: TreeMap<_, _> = (0..n).map(|i| (i * 2, i)).collect();

            let mut i = 0;
            b.iter(|| {
                black_box(map.floor_entry(&(i * 2 + 1)));
                i = (i + 1) % n;
            });
        });
    }

    group.finish();
}

fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("sorted", n), &n, |b, &n| {
            b.iter(|| TreeMap::from_sorted((0..n).map(|i| (i, i))).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("inserts", n), &n, |b, &n| {
            b.iter(|| (0..n).map(|i| (i, i)).collect::<TreeMap<_, _>>());
        });
    }

    group.finish();
}

fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for n in [100, 1000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = rng();
            let map: TreeMap<u32, u32> = (0..n).map(|_| (rng.gen(), rng.gen())).collect();

            b.iter(|| {
                for entry in map.iter() {
                    black_box(entry.unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, insert_rand, insert_seq, find_rand, navigate, build, iter);
criterion_main!(benches);
