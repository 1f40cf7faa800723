use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mcut::{Color, ColorHist, ColorQuantizer, MedianCutQuantizer};
use std::collections::BTreeSet;

fn quantize(colors: &ColorHist, max_colors: usize) -> BTreeSet<Color> {
    MedianCutQuantizer.quantize(colors, max_colors).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let colors: ColorHist = (0..1u32 << 16)
        .map(|i| Color::from_packed(i.wrapping_mul(2_654_435_761) & 0xffffff))
        .collect();

    for max_colors in [16, 256] {
        c.bench_function(&format!("median_cut 65536 colors -> {max_colors}"), |b| {
            b.iter(|| quantize(black_box(&colors), black_box(max_colors)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
