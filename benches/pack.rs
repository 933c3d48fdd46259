use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use texel_codec::*;

const WIDTH: usize = 1024;
const HEIGHT: usize = 1024;

fn random_floats(len: usize) -> Vec<[f32; 4]> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<[f32; 4]>()).collect()
}
fn random_ubytes(len: usize) -> Vec<[u8; 4]> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<[u8; 4]>()).collect()
}

fn bench_pack_float(c: &mut Criterion, format: FormatId) {
    c.bench_function(&format!("f32 -> {:?}", format), |b| {
        let src = random_floats(WIDTH * HEIGHT);
        let pitch = format.row_stride(WIDTH as u32);
        let mut out = vec![0; pitch * HEIGHT];
        let rect = Rect::new(0, 0, WIDTH as u32, HEIGHT as u32);
        b.iter(|| {
            let result = pack_float_rgba_rect(format, black_box(&src), WIDTH, rect, &mut out, pitch);
            black_box(result).unwrap();
        });
    });
}
fn bench_pack_ubyte(c: &mut Criterion, format: FormatId) {
    c.bench_function(&format!("u8 -> {:?}", format), |b| {
        let src = random_ubytes(WIDTH * HEIGHT);
        let pitch = format.row_stride(WIDTH as u32);
        let mut out = vec![0; pitch * HEIGHT];
        let rect = Rect::new(0, 0, WIDTH as u32, HEIGHT as u32);
        b.iter(|| {
            let result = pack_ubyte_rgba_rect(format, black_box(&src), WIDTH, rect, &mut out, pitch);
            black_box(result).unwrap();
        });
    });
}

fn bench_downsample(c: &mut Criterion, format: FormatId) {
    c.bench_function(&format!("downsample {:?}", format), |b| {
        let row_len = format.row_stride(WIDTH as u32);
        let mut rng = rand::thread_rng();
        let mut row_a = vec![0; row_len];
        let mut row_b = vec![0; row_len];
        rng.fill(row_a.as_mut_slice());
        rng.fill(row_b.as_mut_slice());
        let mut out = vec![0; row_len / 2];
        b.iter(|| {
            let result = downsample_row(format, black_box(&row_a), &row_b, WIDTH, &mut out);
            black_box(result).unwrap();
        });
    });
}

pub fn pack_benchmarks(c: &mut Criterion) {
    bench_pack_ubyte(c, FormatId::A8B8G8R8_UNORM);
    bench_pack_ubyte(c, FormatId::B8G8R8A8_UNORM);
    bench_pack_ubyte(c, FormatId::R5G6B5_UNORM);
    bench_pack_ubyte(c, FormatId::RGB_UNORM8);
    bench_pack_ubyte(c, FormatId::R8G8B8A8_SRGB);

    bench_pack_float(c, FormatId::A8B8G8R8_UNORM);
    bench_pack_float(c, FormatId::R5G6B5_UNORM);
    bench_pack_float(c, FormatId::B10G10R10A2_UNORM);
    bench_pack_float(c, FormatId::R8G8B8A8_SNORM);
    bench_pack_float(c, FormatId::R8G8B8A8_SRGB);
    bench_pack_float(c, FormatId::RGBA_UNORM16);
    bench_pack_float(c, FormatId::RGBA_FLOAT16);
    bench_pack_float(c, FormatId::RGBA_FLOAT32);
    bench_pack_float(c, FormatId::R11G11B10_FLOAT);
    bench_pack_float(c, FormatId::R9G9B9E5_FLOAT);

    bench_downsample(c, FormatId::A8B8G8R8_UNORM);
    bench_downsample(c, FormatId::R8G8B8A8_SRGB);
    bench_downsample(c, FormatId::RGBA_FLOAT16);
}

criterion_group!(benches, pack_benchmarks);
criterion_main!(benches);
