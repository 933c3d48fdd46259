use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::RngCore;
use texel_codec::*;

const WIDTH: usize = 1024;
const HEIGHT: usize = 1024;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut out = vec![0; len];
    let mut rng = rand::thread_rng();
    rng.fill_bytes(&mut out);
    out
}

#[derive(Clone, Copy, Debug)]
enum Target {
    Ubyte,
    Float,
    Uint,
}

fn bench_unpack(c: &mut Criterion, format: FormatId, target: Target) {
    let name = format!("{:?} -> {:?}", format, target);

    c.bench_function(&name, |b| {
        let pitch = format.row_stride(WIDTH as u32);
        let src = random_bytes(pitch * HEIGHT).into_boxed_slice();
        let rect = Rect::new(0, 0, WIDTH as u32, HEIGHT as u32);

        match target {
            Target::Ubyte => {
                let mut out = vec![[0_u8; 4]; WIDTH * HEIGHT];
                b.iter(|| {
                    let result =
                        unpack_ubyte_rgba_rect(format, black_box(&src), pitch, rect, &mut out, WIDTH);
                    black_box(result).unwrap();
                });
            }
            Target::Float => {
                let mut out = vec![[0.0_f32; 4]; WIDTH * HEIGHT];
                b.iter(|| {
                    let result =
                        unpack_float_rgba_rect(format, black_box(&src), pitch, rect, &mut out, WIDTH);
                    black_box(result).unwrap();
                });
            }
            Target::Uint => {
                let mut out = vec![[0_u32; 4]; WIDTH * HEIGHT];
                b.iter(|| {
                    let result =
                        unpack_uint_rgba_rect(format, black_box(&src), pitch, rect, &mut out, WIDTH);
                    black_box(result).unwrap();
                });
            }
        }
    });
}

fn bench_depth(c: &mut Criterion, format: FormatId) {
    c.bench_function(&format!("{:?} -> depth", format), |b| {
        let src = random_bytes(format.byte_size() * WIDTH * HEIGHT);
        let mut out = vec![0.0_f32; WIDTH * HEIGHT];
        b.iter(|| {
            let result = unpack_float_z_row(format, black_box(&src), &mut out);
            black_box(result).unwrap();
        });
    });
}

pub fn unpack_benchmarks(c: &mut Criterion) {
    use Target::*;

    // packed formats
    bench_unpack(c, FormatId::A8B8G8R8_UNORM, Ubyte);
    bench_unpack(c, FormatId::A8B8G8R8_UNORM, Float);
    bench_unpack(c, FormatId::B8G8R8A8_UNORM, Ubyte);
    bench_unpack(c, FormatId::R5G6B5_UNORM, Ubyte);
    bench_unpack(c, FormatId::R5G6B5_UNORM, Float);
    bench_unpack(c, FormatId::B4G4R4A4_UNORM, Ubyte);
    bench_unpack(c, FormatId::B10G10R10A2_UNORM, Float);
    bench_unpack(c, FormatId::R8G8B8A8_SNORM, Float);
    bench_unpack(c, FormatId::R8G8B8A8_SRGB, Ubyte);
    bench_unpack(c, FormatId::R8G8B8A8_SRGB, Float);

    // array formats
    bench_unpack(c, FormatId::RGB_UNORM8, Ubyte);
    bench_unpack(c, FormatId::L_UNORM8, Float);
    bench_unpack(c, FormatId::RGBA_UNORM16, Float);
    bench_unpack(c, FormatId::RGBA_FLOAT16, Float);
    bench_unpack(c, FormatId::RGBA_FLOAT32, Ubyte);
    bench_unpack(c, FormatId::RGBA_FLOAT32, Float);

    // HDR formats
    bench_unpack(c, FormatId::R11G11B10_FLOAT, Float);
    bench_unpack(c, FormatId::R9G9B9E5_FLOAT, Float);
    bench_unpack(c, FormatId::R9G9B9E5_FLOAT, Ubyte);

    // integer formats
    bench_unpack(c, FormatId::RGBA_UINT8, Uint);
    bench_unpack(c, FormatId::RGBA_SINT16, Uint);
    bench_unpack(c, FormatId::R10G10B10A2_UINT, Uint);

    // depth
    bench_depth(c, FormatId::Z24_UNORM_S8_UINT);
    bench_depth(c, FormatId::Z_UNORM16);
    bench_depth(c, FormatId::Z32_FLOAT_S8X24_UINT);
}

criterion_group!(benches, unpack_benchmarks);
criterion_main!(benches);
