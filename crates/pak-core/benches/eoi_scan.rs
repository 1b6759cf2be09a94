use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::codecs::jpeg::JpegEncoder;
use image::ColorType;
use pak_core::jpeg::{first_eoi, walk_to_eoi};

fn carrier_with_payload() -> Vec<u8> {
    let (w, h) = (512, 512);
    let pixels: Vec<u8> = (0..w * h * 3).map(|i| (i * 31 % 253) as u8).collect();
    let mut data = Vec::new();
    JpegEncoder::new_with_quality(&mut data, 90)
        .encode(&pixels, w, h, ColorType::Rgb8)
        .expect("Failed to encode JPEG");
    data.extend_from_slice(&[0x50, 0x4B, 0x03, 0x04]);
    data.extend(std::iter::repeat(0xAB).take(64 * 1024));
    data
}

pub fn eoi_scan(c: &mut Criterion) {
    let data = carrier_with_payload();

    c.bench_function("EOI First Marker", |b| {
        b.iter(|| first_eoi(black_box(&data)).expect("No EOI found"))
    });
    c.bench_function("EOI Segment Walk", |b| {
        b.iter(|| walk_to_eoi(black_box(&data)).expect("No EOI found"))
    });
}

criterion_group!(benches, eoi_scan);
criterion_main!(benches);
