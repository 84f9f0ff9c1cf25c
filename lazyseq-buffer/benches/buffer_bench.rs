// Copyright 2026 The lazyseq Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lazyseq_buffer::SharedBuffer;
use lazyseq_core::SeqItem;

fn drain_all<T: Clone + Send + 'static>(buffer: &SharedBuffer<T>) {
    let mut reader = buffer.new_reader().unwrap();
    while reader.next().unwrap().is_some() {}
}

fn bench_single_reader(c: &mut Criterion) {
    c.bench_function("memoize_single_reader_10k", |b| {
        b.iter_batched(
            || SharedBuffer::memoize(|| (0..10_000u32).map(SeqItem::Value)),
            |buffer| drain_all(&buffer),
            BatchSize::SmallInput,
        );
    });
}

fn bench_cache_replay(c: &mut Criterion) {
    c.bench_function("memoize_cache_replay_10k", |b| {
        b.iter_batched(
            || {
                let buffer = SharedBuffer::memoize(|| (0..10_000u32).map(SeqItem::Value));
                drain_all(&buffer); // warm the cache
                buffer
            },
            |buffer| drain_all(&buffer), // second reader is pure cache hits
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_single_reader, bench_cache_replay);
criterion_main!(benches);
