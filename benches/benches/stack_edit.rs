// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_stack::{Gaps, Stack, StackConfig};

fn filled(len: u32) -> Stack<u32> {
    let mut stack = Stack::new(StackConfig::default().with_spacing(8.0));
    stack.extend(0..len);
    stack
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/append");

    for len in [128_u32, 1_024, 8_192] {
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("default_gaps", len), &len, |b, &len| {
            b.iter_batched(
                || Stack::<u32>::new(StackConfig::default()),
                |mut stack| {
                    for child in 0..len {
                        stack.append(child, Gaps::DEFAULT);
                    }
                    black_box(stack);
                },
                BatchSize::LargeInput,
            );
        });

        // Every append writes an override for the previous child and the new one.
        group.bench_with_input(BenchmarkId::new("custom_gaps", len), &len, |b, &len| {
            b.iter_batched(
                || Stack::<u32>::new(StackConfig::default()),
                |mut stack| {
                    for child in 0..len {
                        stack.append(child, Gaps::new(4.0, 12.0));
                    }
                    black_box(stack);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/move");

    // Moving an existing child is a linear scan plus a remove/insert on the backing list.
    for len in [128_u32, 1_024, 8_192] {
        group.bench_with_input(
            BenchmarkId::new("insert_before_head", len),
            &len,
            |b, &len| {
                b.iter_batched(
                    || filled(len),
                    |mut stack| {
                        stack.insert_before(len - 1, 0, Gaps::prev(2.0));
                        black_box(stack);
                    },
                    BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("insert_after_tail", len),
            &len,
            |b, &len| {
                b.iter_batched(
                    || filled(len),
                    |mut stack| {
                        stack.insert_after(0, len - 1, Gaps::next(2.0));
                        black_box(stack);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/replace");

    for len in [128_u32, 1_024, 8_192] {
        group.bench_with_input(BenchmarkId::new("middle", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut stack = filled(len);
                    stack.insert_after(len / 2, len / 2 - 1, Gaps::new(3.0, 5.0));
                    stack
                },
                |mut stack| {
                    stack.replace(len / 2, len);
                    black_box(stack);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_move, bench_replace);
criterion_main!(benches);
