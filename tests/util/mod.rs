#![allow(unused)]

use rand::{Rng, SeedableRng};
use texel_codec::*;

pub fn create_rng() -> impl Rng {
    rand_chacha::ChaChaRng::seed_from_u64(123456789)
}

/// Formats with float and ubyte pack and unpack functions.
pub fn color_formats() -> impl Iterator<Item = FormatId> {
    FormatId::ALL.into_iter().filter(|f| {
        f.is_supported() && !f.is_integer() && !f.is_depth_or_stencil() && !f.is_compressed()
    })
}
/// Pure-integer formats.
pub fn integer_formats() -> impl Iterator<Item = FormatId> {
    FormatId::ALL.into_iter().filter(|f| f.is_integer())
}
/// Formats with a depth or stencil channel.
pub fn depth_stencil_formats() -> impl Iterator<Item = FormatId> {
    FormatId::ALL.into_iter().filter(|f| f.is_depth_or_stencil())
}
/// Formats without any codec.
pub fn unsupported_formats() -> impl Iterator<Item = FormatId> {
    FormatId::ALL.into_iter().filter(|f| !f.is_supported())
}

pub fn random_bytes(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    let mut out = vec![0; len];
    rng.fill(out.as_mut_slice());
    out
}
pub fn random_rgba(rng: &mut impl Rng, min: f32, max: f32) -> [f32; 4] {
    [(); 4].map(|_| rng.gen_range(min..=max))
}

pub fn pack_float(format: FormatId, rgba: [f32; 4]) -> Vec<u8> {
    let mut out = vec![0; format.byte_size()];
    pack_float_rgba(format, &rgba, &mut out).unwrap();
    out
}
pub fn pack_ubyte(format: FormatId, rgba: [u8; 4]) -> Vec<u8> {
    let mut out = vec![0; format.byte_size()];
    pack_ubyte_rgba(format, &rgba, &mut out).unwrap();
    out
}
pub fn pack_uint(format: FormatId, rgba: [u32; 4]) -> Vec<u8> {
    let mut out = vec![0; format.byte_size()];
    pack_uint_rgba(format, &rgba, &mut out).unwrap();
    out
}
