//! Packers for uncompressed formats.
//!
//! The layouts here mirror the unpackers field for field.

use std::mem::size_of;

use super::{for_each_canonical, Args, PackFn, PackSet};
use crate::cast;
use crate::color::*;

macro_rules! count {
    () => (0_usize);
    ($x:tt $($xs:tt)*) => (1_usize + count!($($xs)*));
}

/// Reads the canonical value a field is packed from.
macro_rules! get {
    ($c:ident, r) => {
        $c[0]
    };
    ($c:ident, g) => {
        $c[1]
    };
    ($c:ident, b) => {
        $c[2]
    };
    ($c:ident, a) => {
        $c[3]
    };
    // luminance and intensity are stored from red
    ($c:ident, l) => {
        $c[0]
    };
    ($c:ident, i) => {
        $c[0]
    };
    // padding packs to zero no matter the input
    ($c:ident, x) => {
        $c[0]
    };
}

macro_rules! packed_fn {
    ($word:ty, $kind_trait:ident::$conv:ident; $($ch:ident: $kind:ty => $shift:literal),+) => {
        |Args(src, dst)| {
            for_each_canonical(src, dst, |c| -> [u8; size_of::<$word>()] {
                let mut word: u32 = 0;
                $(
                    word |= (<$kind as $kind_trait>::$conv(get!(c, $ch)) & <$kind as $kind_trait>::MASK) << $shift;
                )+
                (word as $word).to_le_bytes()
            })
        }
    };
}

macro_rules! array_fn {
    ($comp:ty, $kind_trait:ident::$conv:ident; $($ch:ident: $kind:ty),+) => {
        |Args(src, dst)| {
            const C: usize = count!($($ch)+);
            for_each_canonical(src, dst, |c| -> [u8; C * size_of::<$comp>()] {
                let components: [$comp; C] = [$(
                    (<$kind as $kind_trait>::$conv(get!(c, $ch)) as $comp).to_le()
                ),+];
                cast::components_texel(components)
            })
        }
    };
}

macro_rules! packed {
    ($word:ty; $($fields:tt)+) => {
        PackSet {
            float: packed_fn!($word, ChannelKind::from_f32; $($fields)+),
            ubyte: packed_fn!($word, ChannelKind::from_n8; $($fields)+),
        }
    };
}
macro_rules! array {
    ($comp:ty; $($fields:tt)+) => {
        PackSet {
            float: array_fn!($comp, ChannelKind::from_f32; $($fields)+),
            ubyte: array_fn!($comp, ChannelKind::from_n8; $($fields)+),
        }
    };
}
macro_rules! int_packed {
    ($word:ty; $($fields:tt)+) => {
        packed_fn!($word, IntChannelKind::from_u32; $($fields)+)
    };
}
macro_rules! int_array {
    ($comp:ty; $($fields:tt)+) => {
        array_fn!($comp, IntChannelKind::from_u32; $($fields)+)
    };
}

// unorm

pub(crate) const A8B8G8R8_UNORM_SET: PackSet = packed!(u32; a: Unorm<8> => 24, b: Unorm<8> => 16, g: Unorm<8> => 8, r: Unorm<8> => 0);
pub(crate) const X8B8G8R8_UNORM_SET: PackSet = packed!(u32; x: Pad => 24, b: Unorm<8> => 16, g: Unorm<8> => 8, r: Unorm<8> => 0);
pub(crate) const R8G8B8A8_UNORM_SET: PackSet = packed!(u32; r: Unorm<8> => 24, g: Unorm<8> => 16, b: Unorm<8> => 8, a: Unorm<8> => 0);
pub(crate) const R8G8B8X8_UNORM_SET: PackSet = packed!(u32; r: Unorm<8> => 24, g: Unorm<8> => 16, b: Unorm<8> => 8, x: Pad => 0);
pub(crate) const B8G8R8A8_UNORM_SET: PackSet = packed!(u32; b: Unorm<8> => 24, g: Unorm<8> => 16, r: Unorm<8> => 8, a: Unorm<8> => 0);
pub(crate) const B8G8R8X8_UNORM_SET: PackSet = packed!(u32; b: Unorm<8> => 24, g: Unorm<8> => 16, r: Unorm<8> => 8, x: Pad => 0);
pub(crate) const A8R8G8B8_UNORM_SET: PackSet = packed!(u32; a: Unorm<8> => 24, r: Unorm<8> => 16, g: Unorm<8> => 8, b: Unorm<8> => 0);
pub(crate) const X8R8G8B8_UNORM_SET: PackSet = packed!(u32; x: Pad => 24, r: Unorm<8> => 16, g: Unorm<8> => 8, b: Unorm<8> => 0);
pub(crate) const L16A16_UNORM_SET: PackSet = packed!(u32; l: Unorm<16> => 16, a: Unorm<16> => 0);
pub(crate) const A16L16_UNORM_SET: PackSet = packed!(u32; a: Unorm<16> => 16, l: Unorm<16> => 0);
pub(crate) const B5G6R5_UNORM_SET: PackSet = packed!(u16; b: Unorm<5> => 11, g: Unorm<6> => 5, r: Unorm<5> => 0);
pub(crate) const R5G6B5_UNORM_SET: PackSet = packed!(u16; r: Unorm<5> => 11, g: Unorm<6> => 5, b: Unorm<5> => 0);
pub(crate) const B4G4R4A4_UNORM_SET: PackSet = packed!(u16; b: Unorm<4> => 12, g: Unorm<4> => 8, r: Unorm<4> => 4, a: Unorm<4> => 0);
pub(crate) const B4G4R4X4_UNORM_SET: PackSet = packed!(u16; b: Unorm<4> => 12, g: Unorm<4> => 8, r: Unorm<4> => 4, x: Pad => 0);
pub(crate) const A4R4G4B4_UNORM_SET: PackSet = packed!(u16; a: Unorm<4> => 12, r: Unorm<4> => 8, g: Unorm<4> => 4, b: Unorm<4> => 0);
pub(crate) const A1B5G5R5_UNORM_SET: PackSet = packed!(u16; a: Unorm<1> => 15, b: Unorm<5> => 10, g: Unorm<5> => 5, r: Unorm<5> => 0);
pub(crate) const B5G5R5A1_UNORM_SET: PackSet = packed!(u16; b: Unorm<5> => 11, g: Unorm<5> => 6, r: Unorm<5> => 1, a: Unorm<1> => 0);
pub(crate) const B5G5R5X1_UNORM_SET: PackSet = packed!(u16; b: Unorm<5> => 11, g: Unorm<5> => 6, r: Unorm<5> => 1, x: Pad => 0);
pub(crate) const A1R5G5B5_UNORM_SET: PackSet = packed!(u16; a: Unorm<1> => 15, r: Unorm<5> => 10, g: Unorm<5> => 5, b: Unorm<5> => 0);
pub(crate) const L8A8_UNORM_SET: PackSet = packed!(u16; l: Unorm<8> => 8, a: Unorm<8> => 0);
pub(crate) const A8L8_UNORM_SET: PackSet = packed!(u16; a: Unorm<8> => 8, l: Unorm<8> => 0);
pub(crate) const R8G8_UNORM_SET: PackSet = packed!(u16; r: Unorm<8> => 8, g: Unorm<8> => 0);
pub(crate) const G8R8_UNORM_SET: PackSet = packed!(u16; g: Unorm<8> => 8, r: Unorm<8> => 0);
pub(crate) const L4A4_UNORM_SET: PackSet = packed!(u8; l: Unorm<4> => 4, a: Unorm<4> => 0);
pub(crate) const B2G3R3_UNORM_SET: PackSet = packed!(u8; b: Unorm<2> => 6, g: Unorm<3> => 3, r: Unorm<3> => 0);
pub(crate) const R16G16_UNORM_SET: PackSet = packed!(u32; r: Unorm<16> => 16, g: Unorm<16> => 0);
pub(crate) const G16R16_UNORM_SET: PackSet = packed!(u32; g: Unorm<16> => 16, r: Unorm<16> => 0);
pub(crate) const B10G10R10A2_UNORM_SET: PackSet = packed!(u32; b: Unorm<10> => 22, g: Unorm<10> => 12, r: Unorm<10> => 2, a: Unorm<2> => 0);
pub(crate) const B10G10R10X2_UNORM_SET: PackSet = packed!(u32; b: Unorm<10> => 22, g: Unorm<10> => 12, r: Unorm<10> => 2, x: Pad => 0);
pub(crate) const R10G10B10A2_UNORM_SET: PackSet = packed!(u32; r: Unorm<10> => 22, g: Unorm<10> => 12, b: Unorm<10> => 2, a: Unorm<2> => 0);
pub(crate) const DUDV8_SET: PackSet = packed!(u16; g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const A_UNORM8_SET: PackSet = array!(u8; a: Unorm<8>);
pub(crate) const A_UNORM16_SET: PackSet = array!(u16; a: Unorm<16>);
pub(crate) const L_UNORM8_SET: PackSet = array!(u8; l: Unorm<8>);
pub(crate) const L_UNORM16_SET: PackSet = array!(u16; l: Unorm<16>);
pub(crate) const I_UNORM8_SET: PackSet = array!(u8; i: Unorm<8>);
pub(crate) const I_UNORM16_SET: PackSet = array!(u16; i: Unorm<16>);
pub(crate) const R_UNORM8_SET: PackSet = array!(u8; r: Unorm<8>);
pub(crate) const R_UNORM16_SET: PackSet = array!(u16; r: Unorm<16>);
pub(crate) const BGR_UNORM8_SET: PackSet = array!(u8; b: Unorm<8>, g: Unorm<8>, r: Unorm<8>);
pub(crate) const RGB_UNORM8_SET: PackSet = array!(u8; r: Unorm<8>, g: Unorm<8>, b: Unorm<8>);
pub(crate) const RGBA_UNORM16_SET: PackSet = array!(u16; r: Unorm<16>, g: Unorm<16>, b: Unorm<16>, a: Unorm<16>);
pub(crate) const RGBX_UNORM16_SET: PackSet = array!(u16; r: Unorm<16>, g: Unorm<16>, b: Unorm<16>, x: Pad);

// snorm

pub(crate) const A8B8G8R8_SNORM_SET: PackSet = packed!(u32; a: Snorm8 => 24, b: Snorm8 => 16, g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const X8B8G8R8_SNORM_SET: PackSet = packed!(u32; x: Pad => 24, b: Snorm8 => 16, g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const R8G8B8A8_SNORM_SET: PackSet = packed!(u32; r: Snorm8 => 24, g: Snorm8 => 16, b: Snorm8 => 8, a: Snorm8 => 0);
pub(crate) const R8G8B8X8_SNORM_SET: PackSet = packed!(u32; r: Snorm8 => 24, g: Snorm8 => 16, b: Snorm8 => 8, x: Pad => 0);
pub(crate) const R16G16_SNORM_SET: PackSet = packed!(u32; r: Snorm16 => 16, g: Snorm16 => 0);
pub(crate) const G16R16_SNORM_SET: PackSet = packed!(u32; g: Snorm16 => 16, r: Snorm16 => 0);
pub(crate) const R8G8_SNORM_SET: PackSet = packed!(u16; r: Snorm8 => 8, g: Snorm8 => 0);
pub(crate) const G8R8_SNORM_SET: PackSet = packed!(u16; g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const L8A8_SNORM_SET: PackSet = packed!(u16; l: Snorm8 => 8, a: Snorm8 => 0);
pub(crate) const A_SNORM8_SET: PackSet = array!(u8; a: Snorm8);
pub(crate) const A_SNORM16_SET: PackSet = array!(u16; a: Snorm16);
pub(crate) const L_SNORM8_SET: PackSet = array!(u8; l: Snorm8);
pub(crate) const L_SNORM16_SET: PackSet = array!(u16; l: Snorm16);
pub(crate) const I_SNORM8_SET: PackSet = array!(u8; i: Snorm8);
pub(crate) const I_SNORM16_SET: PackSet = array!(u16; i: Snorm16);
pub(crate) const R_SNORM8_SET: PackSet = array!(u8; r: Snorm8);
pub(crate) const R_SNORM16_SET: PackSet = array!(u16; r: Snorm16);
pub(crate) const LA_SNORM16_SET: PackSet = array!(u16; l: Snorm16, a: Snorm16);
pub(crate) const RGB_SNORM16_SET: PackSet = array!(u16; r: Snorm16, g: Snorm16, b: Snorm16);
pub(crate) const RGBA_SNORM16_SET: PackSet = array!(u16; r: Snorm16, g: Snorm16, b: Snorm16, a: Snorm16);
pub(crate) const RGBX_SNORM16_SET: PackSet = array!(u16; r: Snorm16, g: Snorm16, b: Snorm16, x: Pad);

// srgb

pub(crate) const A8B8G8R8_SRGB_SET: PackSet = packed!(u32; a: Unorm<8> => 24, b: Srgb8 => 16, g: Srgb8 => 8, r: Srgb8 => 0);
pub(crate) const B8G8R8A8_SRGB_SET: PackSet = packed!(u32; b: Srgb8 => 24, g: Srgb8 => 16, r: Srgb8 => 8, a: Unorm<8> => 0);
pub(crate) const B8G8R8X8_SRGB_SET: PackSet = packed!(u32; b: Srgb8 => 24, g: Srgb8 => 16, r: Srgb8 => 8, x: Pad => 0);
pub(crate) const R8G8B8A8_SRGB_SET: PackSet = packed!(u32; r: Srgb8 => 24, g: Srgb8 => 16, b: Srgb8 => 8, a: Unorm<8> => 0);
pub(crate) const R8G8B8X8_SRGB_SET: PackSet = packed!(u32; r: Srgb8 => 24, g: Srgb8 => 16, b: Srgb8 => 8, x: Pad => 0);
pub(crate) const L8A8_SRGB_SET: PackSet = packed!(u16; l: Srgb8 => 8, a: Unorm<8> => 0);
pub(crate) const L_SRGB8_SET: PackSet = array!(u8; l: Srgb8);
pub(crate) const BGR_SRGB8_SET: PackSet = array!(u8; b: Srgb8, g: Srgb8, r: Srgb8);

// float

pub(crate) const R11G11B10_FLOAT_SET: PackSet = packed!(u32; r: Ufloat11 => 21, g: Ufloat11 => 10, b: Ufloat10 => 0);
pub(crate) const A_FLOAT16_SET: PackSet = array!(u16; a: Half);
pub(crate) const L_FLOAT16_SET: PackSet = array!(u16; l: Half);
pub(crate) const LA_FLOAT16_SET: PackSet = array!(u16; l: Half, a: Half);
pub(crate) const I_FLOAT16_SET: PackSet = array!(u16; i: Half);
pub(crate) const R_FLOAT16_SET: PackSet = array!(u16; r: Half);
pub(crate) const RG_FLOAT16_SET: PackSet = array!(u16; r: Half, g: Half);
pub(crate) const RGB_FLOAT16_SET: PackSet = array!(u16; r: Half, g: Half, b: Half);
pub(crate) const RGBA_FLOAT16_SET: PackSet = array!(u16; r: Half, g: Half, b: Half, a: Half);
pub(crate) const RGBX_FLOAT16_SET: PackSet = array!(u16; r: Half, g: Half, b: Half, x: Pad);
pub(crate) const A_FLOAT32_SET: PackSet = array!(u32; a: Float);
pub(crate) const L_FLOAT32_SET: PackSet = array!(u32; l: Float);
pub(crate) const LA_FLOAT32_SET: PackSet = array!(u32; l: Float, a: Float);
pub(crate) const I_FLOAT32_SET: PackSet = array!(u32; i: Float);
pub(crate) const R_FLOAT32_SET: PackSet = array!(u32; r: Float);
pub(crate) const RG_FLOAT32_SET: PackSet = array!(u32; r: Float, g: Float);
pub(crate) const RGB_FLOAT32_SET: PackSet = array!(u32; r: Float, g: Float, b: Float);
pub(crate) const RGBA_FLOAT32_SET: PackSet = array!(u32; r: Float, g: Float, b: Float, a: Float);
pub(crate) const RGBX_FLOAT32_SET: PackSet = array!(u32; r: Float, g: Float, b: Float, x: Pad);

pub(crate) const R9G9B9E5_FLOAT_SET: PackSet = PackSet {
    float: |Args(src, dst)| {
        for_each_canonical(src, dst, |[r, g, b, _]: [f32; 4]| {
            rgb9e5::from_f32([r, g, b]).to_le_bytes()
        })
    },
    ubyte: |Args(src, dst)| {
        for_each_canonical(src, dst, |[r, g, b, _]: [u8; 4]| {
            rgb9e5::from_f32([r, g, b].map(n8::f32)).to_le_bytes()
        })
    },
};

// integer

pub(crate) const B10G10R10A2_UINT_PACK: PackFn<[u32; 4]> = int_packed!(u32; b: Uint<10> => 22, g: Uint<10> => 12, r: Uint<10> => 2, a: Uint<2> => 0);
pub(crate) const R10G10B10A2_UINT_PACK: PackFn<[u32; 4]> = int_packed!(u32; r: Uint<10> => 22, g: Uint<10> => 12, b: Uint<10> => 2, a: Uint<2> => 0);
pub(crate) const A_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; a: Uint<8>);
pub(crate) const A_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; a: Uint<16>);
pub(crate) const A_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; a: Uint<32>);
pub(crate) const A_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; a: Sint<8>);
pub(crate) const A_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; a: Sint<16>);
pub(crate) const A_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; a: Sint<32>);
pub(crate) const I_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; i: Uint<8>);
pub(crate) const I_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; i: Uint<16>);
pub(crate) const I_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; i: Uint<32>);
pub(crate) const I_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; i: Sint<8>);
pub(crate) const I_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; i: Sint<16>);
pub(crate) const I_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; i: Sint<32>);
pub(crate) const L_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; l: Uint<8>);
pub(crate) const L_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; l: Uint<16>);
pub(crate) const L_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; l: Uint<32>);
pub(crate) const L_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; l: Sint<8>);
pub(crate) const L_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; l: Sint<16>);
pub(crate) const L_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; l: Sint<32>);
pub(crate) const LA_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; l: Uint<8>, a: Uint<8>);
pub(crate) const LA_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; l: Uint<16>, a: Uint<16>);
pub(crate) const LA_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; l: Uint<32>, a: Uint<32>);
pub(crate) const LA_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; l: Sint<8>, a: Sint<8>);
pub(crate) const LA_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; l: Sint<16>, a: Sint<16>);
pub(crate) const LA_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; l: Sint<32>, a: Sint<32>);
pub(crate) const R_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Uint<8>);
pub(crate) const R_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Uint<16>);
pub(crate) const R_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Uint<32>);
pub(crate) const R_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Sint<8>);
pub(crate) const R_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Sint<16>);
pub(crate) const R_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Sint<32>);
pub(crate) const RG_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Uint<8>, g: Uint<8>);
pub(crate) const RG_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Uint<16>, g: Uint<16>);
pub(crate) const RG_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Uint<32>, g: Uint<32>);
pub(crate) const RG_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Sint<8>, g: Sint<8>);
pub(crate) const RG_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Sint<16>, g: Sint<16>);
pub(crate) const RG_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Sint<32>, g: Sint<32>);
pub(crate) const RGB_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Uint<8>, g: Uint<8>, b: Uint<8>);
pub(crate) const RGB_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Uint<16>, g: Uint<16>, b: Uint<16>);
pub(crate) const RGB_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Uint<32>, g: Uint<32>, b: Uint<32>);
pub(crate) const RGB_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Sint<8>, g: Sint<8>, b: Sint<8>);
pub(crate) const RGB_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Sint<16>, g: Sint<16>, b: Sint<16>);
pub(crate) const RGB_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Sint<32>, g: Sint<32>, b: Sint<32>);
pub(crate) const RGBA_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Uint<8>, g: Uint<8>, b: Uint<8>, a: Uint<8>);
pub(crate) const RGBA_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Uint<16>, g: Uint<16>, b: Uint<16>, a: Uint<16>);
pub(crate) const RGBA_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Uint<32>, g: Uint<32>, b: Uint<32>, a: Uint<32>);
pub(crate) const RGBA_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Sint<8>, g: Sint<8>, b: Sint<8>, a: Sint<8>);
pub(crate) const RGBA_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Sint<16>, g: Sint<16>, b: Sint<16>, a: Sint<16>);
pub(crate) const RGBA_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Sint<32>, g: Sint<32>, b: Sint<32>, a: Sint<32>);
pub(crate) const RGBX_UINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Uint<8>, g: Uint<8>, b: Uint<8>, x: Pad);
pub(crate) const RGBX_UINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Uint<16>, g: Uint<16>, b: Uint<16>, x: Pad);
pub(crate) const RGBX_UINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Uint<32>, g: Uint<32>, b: Uint<32>, x: Pad);
pub(crate) const RGBX_SINT8_PACK: PackFn<[u32; 4]> = int_array!(u8; r: Sint<8>, g: Sint<8>, b: Sint<8>, x: Pad);
pub(crate) const RGBX_SINT16_PACK: PackFn<[u32; 4]> = int_array!(u16; r: Sint<16>, g: Sint<16>, b: Sint<16>, x: Pad);
pub(crate) const RGBX_SINT32_PACK: PackFn<[u32; 4]> = int_array!(u32; r: Sint<32>, g: Sint<32>, b: Sint<32>, x: Pad);

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_float<const N: usize>(set: PackSet, rgba: [f32; 4]) -> [u8; N] {
        let mut out = [0; N];
        (set.float)(Args(&[rgba], &mut out));
        out
    }
    fn pack_ubyte<const N: usize>(set: PackSet, rgba: [u8; 4]) -> [u8; N] {
        let mut out = [0; N];
        (set.ubyte)(Args(&[rgba], &mut out));
        out
    }
    fn pack_uint<const N: usize>(pack: PackFn<[u32; 4]>, rgba: [u32; 4]) -> [u8; N] {
        let mut out = [0; N];
        pack(Args(&[rgba], &mut out));
        out
    }

    #[test]
    fn packed_bit_positions() {
        let word = pack_float(A8B8G8R8_UNORM_SET, [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(u32::from_le_bytes(word), 0xFF00_80FF);
        let word = pack_ubyte(B8G8R8A8_UNORM_SET, [1, 2, 3, 4]);
        assert_eq!(u32::from_le_bytes(word), 0x0302_0104);
        let word = pack_float(R5G6B5_UNORM_SET, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(u16::from_le_bytes(word), 0xF800);
        let word = pack_ubyte(B5G5R5A1_UNORM_SET, [0, 0, 0, 255]);
        assert_eq!(u16::from_le_bytes(word), 0x0001);
        let word = pack_ubyte(A1B5G5R5_UNORM_SET, [0, 0, 0, 255]);
        assert_eq!(u16::from_le_bytes(word), 0x8000);
        assert_eq!(pack_ubyte::<1>(B2G3R3_UNORM_SET, [255, 0, 0, 0]), [0b111]);
    }

    #[test]
    fn padding_is_zero() {
        let word = pack_float(X8B8G8R8_UNORM_SET, [1.0; 4]);
        assert_eq!(u32::from_le_bytes(word), 0x00FF_FFFF);
        let texel: [u8; 8] = pack_ubyte(RGBX_UNORM16_SET, [255; 4]);
        assert_eq!(texel, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0]);
    }

    #[test]
    fn luminance_comes_from_red() {
        assert_eq!(pack_ubyte::<1>(L_UNORM8_SET, [10, 20, 30, 40]), [10]);
        assert_eq!(pack_ubyte::<1>(I_UNORM8_SET, [10, 20, 30, 40]), [10]);
        assert_eq!(pack_ubyte::<2>(L8A8_UNORM_SET, [10, 20, 30, 40]), [40, 10]);
    }

    #[test]
    fn unorm_rounding() {
        assert_eq!(pack_float::<1>(R_UNORM8_SET, [0.5, 0.0, 0.0, 0.0]), [128]);
        assert_eq!(pack_float::<1>(R_UNORM8_SET, [2.0, 0.0, 0.0, 0.0]), [255]);
        assert_eq!(pack_float::<1>(R_UNORM8_SET, [-2.0, 0.0, 0.0, 0.0]), [0]);
        assert_eq!(pack_ubyte::<2>(R_UNORM16_SET, [255, 0, 0, 0]), [0xFF, 0xFF]);
        assert_eq!(pack_ubyte::<2>(R_UNORM16_SET, [1, 0, 0, 0]), 257_u16.to_le_bytes());
    }

    #[test]
    fn snorm_rounding() {
        assert_eq!(pack_float::<1>(R_SNORM8_SET, [-1.0, 0.0, 0.0, 0.0]), [0x81]);
        assert_eq!(pack_float::<1>(R_SNORM8_SET, [-5.0, 0.0, 0.0, 0.0]), [0x81]);
        assert_eq!(pack_float::<1>(R_SNORM8_SET, [1.0, 0.0, 0.0, 0.0]), [0x7F]);
        assert_eq!(pack_float::<2>(R_SNORM16_SET, [-1.0, 0.0, 0.0, 0.0]), 0x8001_u16.to_le_bytes());
    }

    #[test]
    fn srgb_alpha_is_linear() {
        let word = pack_ubyte(R8G8B8A8_SRGB_SET, [128, 128, 128, 128]);
        assert_eq!(u32::from_le_bytes(word), 0xBCBC_BC80);
    }

    #[test]
    fn floats() {
        let word = pack_float(R11G11B10_FLOAT_SET, [1.0, 1.0, 1.0, 0.0]);
        let word = u32::from_le_bytes(word);
        assert_eq!(word >> 21, 0x3C0);
        assert_eq!(word >> 10 & 0x7FF, 0x3C0);
        assert_eq!(word & 0x3FF, 0x1E0);

        let texel: [u8; 4] = pack_float(RG_FLOAT16_SET, [1.0, -2.0, 0.0, 0.0]);
        assert_eq!(texel, [0x00, 0x3C, 0x00, 0xC0]);

        assert_eq!(pack_float::<4>(R9G9B9E5_FLOAT_SET, [0.0; 4]), [0; 4]);
    }

    #[test]
    fn integers_clamp() {
        assert_eq!(pack_uint::<2>(RG_UINT8_PACK, [300, 7, 0, 0]), [255, 7]);
        assert_eq!(pack_uint::<2>(RG_SINT8_PACK, [-300_i32 as u32, 300, 0, 0]), [0x80, 0x7F]);
        assert_eq!(
            pack_uint::<2>(R_SINT16_PACK, [-2_i32 as u32, 0, 0, 0]),
            (-2_i16).to_le_bytes()
        );
        let word = pack_uint(R10G10B10A2_UINT_PACK, [1, 2, 3, 7]);
        assert_eq!(u32::from_le_bytes(word), 1 << 22 | 2 << 12 | 3 << 2 | 3);
    }
}
