// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tessera_core::math::interval::ClosedInterval;
use tessera_space::algebra::merge_by;
use tessera_space::axis::{AxisShifters, DiscreteShifters};
use tessera_space::identity::ItemIdentity;
use tessera_space::partition::distinct;
use tessera_space::spatial_box::SpatialBox;

type BenchBox = SpatialBox<i32, i32, i32, u64>;

const SHIFTERS: DiscreteShifters = AxisShifters::discrete();

/// Deterministic, heavily overlapping rule set.
fn make_rules(count: usize) -> Vec<BenchBox> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| {
            let offer = rng.random_range(0..60);
            let length = rng.random_range(0..10);
            let season = rng.random_range(0..120);
            SpatialBox::new(
                ClosedInterval::new(offer, offer + rng.random_range(1..=20)),
                ClosedInterval::new(length, length + rng.random_range(0..5)),
                ClosedInterval::new(season, season + rng.random_range(1..=40)),
                1u64 << (i % 64),
            )
        })
        .collect()
}

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");
    for count in [4usize, 8, 16, 32] {
        let rules = make_rules(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &rules, |b, rules| {
            b.iter(|| distinct(black_box(rules), |x, y| x | y, &SHIFTERS))
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_by");
    for count in [4usize, 8, 16] {
        let flat = distinct(&make_rules(count), |x, y| x | y, &SHIFTERS);
        group.throughput(Throughput::Elements(flat.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &flat, |b, flat| {
            b.iter(|| {
                merge_by(
                    black_box(flat.clone()),
                    &ItemIdentity::new(|c: &u64| *c),
                    &SHIFTERS,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distinct, bench_merge);
criterion_main!(benches);
