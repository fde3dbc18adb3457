// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 the vsmile-bridge authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use vsmile_bridge::bridge::convert::{convert_audio, convert_frame};
use vsmile_bridge::core_api::FRAME_PIXELS;

fn frame_conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_conversion");
    group.throughput(Throughput::Elements(FRAME_PIXELS as u64));

    // Worst-ish case input: every pixel different, all bits exercised.
    let src: Vec<u16> = (0..FRAME_PIXELS).map(|i| (i as u16).rotate_left(3)).collect();
    let mut dst = vec![0u16; FRAME_PIXELS];

    group.bench_function("rgb555_to_rgb565_full_frame", |b| {
        b.iter(|| {
            convert_frame(black_box(&src), &mut dst);
            black_box(&dst);
        });
    });
    group.finish();
}

fn audio_conversion_benchmark(c: &mut Criterion) {
    // Roughly one NTSC frame of 44.1 kHz stereo.
    const SAMPLES: usize = 1470;
    let src: Vec<u16> = (0..SAMPLES).map(|i| (i * 977) as u16).collect();
    let mut dst = Vec::with_capacity(SAMPLES);

    c.bench_function("audio_sign_flip_frame", |b| {
        b.iter(|| {
            convert_audio(black_box(&src), &mut dst);
            black_box(&dst);
        });
    });
}

criterion_group!(
    benches,
    frame_conversion_benchmark,
    audio_conversion_benchmark
);
criterion_main!(benches);
