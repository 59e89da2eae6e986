//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Benchmarks for the rendering pipeline

use ansimark_markup::{MarkupCodec, RenderConfig, render, strip_sgr};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;

fn colored_log(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "\x1b[1;3{}m[{:05}]\x1b[0m service <{}> reported \x1b[4mstatus\x1b[0m & exit\r\n",
                i % 8,
                i,
                i
            )
        })
        .collect()
}

// Benchmark rendering plain text
fn bench_render_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_plain_text");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);
            b.iter(|| black_box(render(black_box(&text))));
        });
    }
    group.finish();
}

// Benchmark rendering colored output
fn bench_render_colored(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_colored");

    for lines in [1, 10, 100, 1000].iter() {
        let text = colored_log(*lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| black_box(render(black_box(text))));
        });
    }
    group.finish();
}

// Benchmark malformed escape noise
fn bench_render_malformed(c: &mut Criterion) {
    let text = "\x1b[\x1b[1;\x1b]0;x\x07\x1b[99999".repeat(100);
    c.bench_function("render_malformed", |b| {
        b.iter(|| black_box(render(black_box(&text))));
    });
}

// Benchmark stripping
fn bench_strip(c: &mut Criterion) {
    let text = colored_log(100);
    c.bench_function("strip_sgr", |b| {
        b.iter(|| black_box(strip_sgr(black_box(&text))));
    });
}

// Benchmark streaming decode
fn bench_decode_stream(c: &mut Criterion) {
    let text = colored_log(100);
    c.bench_function("decode_stream", |b| {
        b.iter(|| {
            let mut codec = MarkupCodec::new(RenderConfig::default());
            let mut buffer = BytesMut::from(black_box(text.as_str()));
            let mut count = 0;
            while codec.decode(&mut buffer).unwrap().is_some() {
                count += 1;
            }
            black_box(count);
        });
    });
}

criterion_group!(
    benches,
    bench_render_plain_text,
    bench_render_colored,
    bench_render_malformed,
    bench_strip,
    bench_decode_stream
);
criterion_main!(benches);
