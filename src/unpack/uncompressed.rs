//! Unpackers for uncompressed formats.
//!
//! Every format is described by its stored fields. Packed formats list the
//! fields of a little-endian word together with their bit offset. Array
//! formats list one field per component in memory order.

use std::mem::size_of;

use super::{for_each_texel, Args, UnpackFn, UnpackSet};
use crate::cast;
use crate::color::*;

/// The unpackers of a pure-integer format.
#[derive(Clone, Copy)]
pub(crate) struct IntUnpackSet {
    pub color: UnpackSet,
    pub uint: UnpackFn<[u32; 4]>,
}

macro_rules! count {
    () => (0_usize);
    ($x:tt $($xs:tt)*) => (1_usize + count!($($xs)*));
}

/// Stores a channel value into an RGBA texel.
macro_rules! set {
    ($out:ident, r, $v:expr) => {
        $out[0] = $v;
    };
    ($out:ident, g, $v:expr) => {
        $out[1] = $v;
    };
    ($out:ident, b, $v:expr) => {
        $out[2] = $v;
    };
    ($out:ident, a, $v:expr) => {
        $out[3] = $v;
    };
    ($out:ident, l, $v:expr) => {
        let v = $v;
        $out[0] = v;
        $out[1] = v;
        $out[2] = v;
    };
    ($out:ident, i, $v:expr) => {
        let v = $v;
        $out[0] = v;
        $out[1] = v;
        $out[2] = v;
        $out[3] = v;
    };
    ($out:ident, x, $v:expr) => {
        let _ = $v;
    };
}

macro_rules! packed_fn {
    ($word:ty, $default:expr, $kind_trait:ident::$conv:ident; $($ch:ident: $kind:ty => $shift:literal),+) => {
        |Args(src, dst)| {
            for_each_texel(src, dst, |texel: [u8; size_of::<$word>()]| {
                let word = <$word>::from_le_bytes(texel) as u32;
                let mut out = $default;
                $(
                    set!(out, $ch, <$kind as $kind_trait>::$conv((word >> $shift) & <$kind as $kind_trait>::MASK));
                )+
                out
            })
        }
    };
}

macro_rules! array_fn {
    ($comp:ty, $default:expr, $kind_trait:ident::$conv:ident; $($ch:ident: $kind:ty),+) => {
        |Args(src, dst)| {
            const C: usize = count!($($ch)+);
            for_each_texel(src, dst, |texel: [u8; C * size_of::<$comp>()]| {
                let [$($ch),+]: [$comp; C] = cast::texel_components(texel);
                let mut out = $default;
                $(
                    set!(out, $ch, <$kind as $kind_trait>::$conv(<$comp>::from_le($ch) as u32));
                )+
                out
            })
        }
    };
}

macro_rules! packed {
    ($word:ty; $($fields:tt)+) => {
        UnpackSet {
            float: packed_fn!($word, [0.0, 0.0, 0.0, 1.0], ChannelKind::to_f32; $($fields)+),
            ubyte: packed_fn!($word, [0, 0, 0, u8::MAX], ChannelKind::to_n8; $($fields)+),
        }
    };
}
macro_rules! array {
    ($comp:ty; $($fields:tt)+) => {
        UnpackSet {
            float: array_fn!($comp, [0.0, 0.0, 0.0, 1.0], ChannelKind::to_f32; $($fields)+),
            ubyte: array_fn!($comp, [0, 0, 0, u8::MAX], ChannelKind::to_n8; $($fields)+),
        }
    };
}

// A missing alpha is the integer 1 in all three outputs of integer formats.
macro_rules! int_packed {
    ($word:ty; $($fields:tt)+) => {
        IntUnpackSet {
            color: UnpackSet {
                float: packed_fn!($word, [0.0, 0.0, 0.0, 1.0], IntChannelKind::to_f32; $($fields)+),
                ubyte: packed_fn!($word, [0, 0, 0, 1], IntChannelKind::to_n8; $($fields)+),
            },
            uint: packed_fn!($word, [0, 0, 0, 1], IntChannelKind::to_u32; $($fields)+),
        }
    };
}
macro_rules! int_array {
    ($comp:ty; $($fields:tt)+) => {
        IntUnpackSet {
            color: UnpackSet {
                float: array_fn!($comp, [0.0, 0.0, 0.0, 1.0], IntChannelKind::to_f32; $($fields)+),
                ubyte: array_fn!($comp, [0, 0, 0, 1], IntChannelKind::to_n8; $($fields)+),
            },
            uint: array_fn!($comp, [0, 0, 0, 1], IntChannelKind::to_u32; $($fields)+),
        }
    };
}

// unorm

pub(crate) const A8B8G8R8_UNORM_SET: UnpackSet = packed!(u32; a: Unorm<8> => 24, b: Unorm<8> => 16, g: Unorm<8> => 8, r: Unorm<8> => 0);
pub(crate) const X8B8G8R8_UNORM_SET: UnpackSet = packed!(u32; x: Pad => 24, b: Unorm<8> => 16, g: Unorm<8> => 8, r: Unorm<8> => 0);
pub(crate) const R8G8B8A8_UNORM_SET: UnpackSet = packed!(u32; r: Unorm<8> => 24, g: Unorm<8> => 16, b: Unorm<8> => 8, a: Unorm<8> => 0);
pub(crate) const R8G8B8X8_UNORM_SET: UnpackSet = packed!(u32; r: Unorm<8> => 24, g: Unorm<8> => 16, b: Unorm<8> => 8, x: Pad => 0);
pub(crate) const B8G8R8A8_UNORM_SET: UnpackSet = packed!(u32; b: Unorm<8> => 24, g: Unorm<8> => 16, r: Unorm<8> => 8, a: Unorm<8> => 0);
pub(crate) const B8G8R8X8_UNORM_SET: UnpackSet = packed!(u32; b: Unorm<8> => 24, g: Unorm<8> => 16, r: Unorm<8> => 8, x: Pad => 0);
pub(crate) const A8R8G8B8_UNORM_SET: UnpackSet = packed!(u32; a: Unorm<8> => 24, r: Unorm<8> => 16, g: Unorm<8> => 8, b: Unorm<8> => 0);
pub(crate) const X8R8G8B8_UNORM_SET: UnpackSet = packed!(u32; x: Pad => 24, r: Unorm<8> => 16, g: Unorm<8> => 8, b: Unorm<8> => 0);
pub(crate) const L16A16_UNORM_SET: UnpackSet = packed!(u32; l: Unorm<16> => 16, a: Unorm<16> => 0);
pub(crate) const A16L16_UNORM_SET: UnpackSet = packed!(u32; a: Unorm<16> => 16, l: Unorm<16> => 0);
pub(crate) const B5G6R5_UNORM_SET: UnpackSet = packed!(u16; b: Unorm<5> => 11, g: Unorm<6> => 5, r: Unorm<5> => 0);
pub(crate) const R5G6B5_UNORM_SET: UnpackSet = packed!(u16; r: Unorm<5> => 11, g: Unorm<6> => 5, b: Unorm<5> => 0);
pub(crate) const B4G4R4A4_UNORM_SET: UnpackSet = packed!(u16; b: Unorm<4> => 12, g: Unorm<4> => 8, r: Unorm<4> => 4, a: Unorm<4> => 0);
pub(crate) const B4G4R4X4_UNORM_SET: UnpackSet = packed!(u16; b: Unorm<4> => 12, g: Unorm<4> => 8, r: Unorm<4> => 4, x: Pad => 0);
pub(crate) const A4R4G4B4_UNORM_SET: UnpackSet = packed!(u16; a: Unorm<4> => 12, r: Unorm<4> => 8, g: Unorm<4> => 4, b: Unorm<4> => 0);
pub(crate) const A1B5G5R5_UNORM_SET: UnpackSet = packed!(u16; a: Unorm<1> => 15, b: Unorm<5> => 10, g: Unorm<5> => 5, r: Unorm<5> => 0);
pub(crate) const B5G5R5A1_UNORM_SET: UnpackSet = packed!(u16; b: Unorm<5> => 11, g: Unorm<5> => 6, r: Unorm<5> => 1, a: Unorm<1> => 0);
pub(crate) const B5G5R5X1_UNORM_SET: UnpackSet = packed!(u16; b: Unorm<5> => 11, g: Unorm<5> => 6, r: Unorm<5> => 1, x: Pad => 0);
pub(crate) const A1R5G5B5_UNORM_SET: UnpackSet = packed!(u16; a: Unorm<1> => 15, r: Unorm<5> => 10, g: Unorm<5> => 5, b: Unorm<5> => 0);
pub(crate) const L8A8_UNORM_SET: UnpackSet = packed!(u16; l: Unorm<8> => 8, a: Unorm<8> => 0);
pub(crate) const A8L8_UNORM_SET: UnpackSet = packed!(u16; a: Unorm<8> => 8, l: Unorm<8> => 0);
pub(crate) const R8G8_UNORM_SET: UnpackSet = packed!(u16; r: Unorm<8> => 8, g: Unorm<8> => 0);
pub(crate) const G8R8_UNORM_SET: UnpackSet = packed!(u16; g: Unorm<8> => 8, r: Unorm<8> => 0);
pub(crate) const L4A4_UNORM_SET: UnpackSet = packed!(u8; l: Unorm<4> => 4, a: Unorm<4> => 0);
pub(crate) const B2G3R3_UNORM_SET: UnpackSet = packed!(u8; b: Unorm<2> => 6, g: Unorm<3> => 3, r: Unorm<3> => 0);
pub(crate) const R16G16_UNORM_SET: UnpackSet = packed!(u32; r: Unorm<16> => 16, g: Unorm<16> => 0);
pub(crate) const G16R16_UNORM_SET: UnpackSet = packed!(u32; g: Unorm<16> => 16, r: Unorm<16> => 0);
pub(crate) const B10G10R10A2_UNORM_SET: UnpackSet = packed!(u32; b: Unorm<10> => 22, g: Unorm<10> => 12, r: Unorm<10> => 2, a: Unorm<2> => 0);
pub(crate) const B10G10R10X2_UNORM_SET: UnpackSet = packed!(u32; b: Unorm<10> => 22, g: Unorm<10> => 12, r: Unorm<10> => 2, x: Pad => 0);
pub(crate) const R10G10B10A2_UNORM_SET: UnpackSet = packed!(u32; r: Unorm<10> => 22, g: Unorm<10> => 12, b: Unorm<10> => 2, a: Unorm<2> => 0);
pub(crate) const DUDV8_SET: UnpackSet = packed!(u16; g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const A_UNORM8_SET: UnpackSet = array!(u8; a: Unorm<8>);
pub(crate) const A_UNORM16_SET: UnpackSet = array!(u16; a: Unorm<16>);
pub(crate) const L_UNORM8_SET: UnpackSet = array!(u8; l: Unorm<8>);
pub(crate) const L_UNORM16_SET: UnpackSet = array!(u16; l: Unorm<16>);
pub(crate) const I_UNORM8_SET: UnpackSet = array!(u8; i: Unorm<8>);
pub(crate) const I_UNORM16_SET: UnpackSet = array!(u16; i: Unorm<16>);
pub(crate) const R_UNORM8_SET: UnpackSet = array!(u8; r: Unorm<8>);
pub(crate) const R_UNORM16_SET: UnpackSet = array!(u16; r: Unorm<16>);
pub(crate) const BGR_UNORM8_SET: UnpackSet = array!(u8; b: Unorm<8>, g: Unorm<8>, r: Unorm<8>);
pub(crate) const RGB_UNORM8_SET: UnpackSet = array!(u8; r: Unorm<8>, g: Unorm<8>, b: Unorm<8>);
pub(crate) const RGBA_UNORM16_SET: UnpackSet = array!(u16; r: Unorm<16>, g: Unorm<16>, b: Unorm<16>, a: Unorm<16>);
pub(crate) const RGBX_UNORM16_SET: UnpackSet = array!(u16; r: Unorm<16>, g: Unorm<16>, b: Unorm<16>, x: Pad);

// snorm

pub(crate) const A8B8G8R8_SNORM_SET: UnpackSet = packed!(u32; a: Snorm8 => 24, b: Snorm8 => 16, g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const X8B8G8R8_SNORM_SET: UnpackSet = packed!(u32; x: Pad => 24, b: Snorm8 => 16, g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const R8G8B8A8_SNORM_SET: UnpackSet = packed!(u32; r: Snorm8 => 24, g: Snorm8 => 16, b: Snorm8 => 8, a: Snorm8 => 0);
pub(crate) const R8G8B8X8_SNORM_SET: UnpackSet = packed!(u32; r: Snorm8 => 24, g: Snorm8 => 16, b: Snorm8 => 8, x: Pad => 0);
pub(crate) const R16G16_SNORM_SET: UnpackSet = packed!(u32; r: Snorm16 => 16, g: Snorm16 => 0);
pub(crate) const G16R16_SNORM_SET: UnpackSet = packed!(u32; g: Snorm16 => 16, r: Snorm16 => 0);
pub(crate) const R8G8_SNORM_SET: UnpackSet = packed!(u16; r: Snorm8 => 8, g: Snorm8 => 0);
pub(crate) const G8R8_SNORM_SET: UnpackSet = packed!(u16; g: Snorm8 => 8, r: Snorm8 => 0);
pub(crate) const L8A8_SNORM_SET: UnpackSet = packed!(u16; l: Snorm8 => 8, a: Snorm8 => 0);
pub(crate) const A_SNORM8_SET: UnpackSet = array!(u8; a: Snorm8);
pub(crate) const A_SNORM16_SET: UnpackSet = array!(u16; a: Snorm16);
pub(crate) const L_SNORM8_SET: UnpackSet = array!(u8; l: Snorm8);
pub(crate) const L_SNORM16_SET: UnpackSet = array!(u16; l: Snorm16);
pub(crate) const I_SNORM8_SET: UnpackSet = array!(u8; i: Snorm8);
pub(crate) const I_SNORM16_SET: UnpackSet = array!(u16; i: Snorm16);
pub(crate) const R_SNORM8_SET: UnpackSet = array!(u8; r: Snorm8);
pub(crate) const R_SNORM16_SET: UnpackSet = array!(u16; r: Snorm16);
pub(crate) const LA_SNORM16_SET: UnpackSet = array!(u16; l: Snorm16, a: Snorm16);
pub(crate) const RGB_SNORM16_SET: UnpackSet = array!(u16; r: Snorm16, g: Snorm16, b: Snorm16);
pub(crate) const RGBA_SNORM16_SET: UnpackSet = array!(u16; r: Snorm16, g: Snorm16, b: Snorm16, a: Snorm16);
pub(crate) const RGBX_SNORM16_SET: UnpackSet = array!(u16; r: Snorm16, g: Snorm16, b: Snorm16, x: Pad);

// srgb

pub(crate) const A8B8G8R8_SRGB_SET: UnpackSet = packed!(u32; a: Unorm<8> => 24, b: Srgb8 => 16, g: Srgb8 => 8, r: Srgb8 => 0);
pub(crate) const B8G8R8A8_SRGB_SET: UnpackSet = packed!(u32; b: Srgb8 => 24, g: Srgb8 => 16, r: Srgb8 => 8, a: Unorm<8> => 0);
pub(crate) const B8G8R8X8_SRGB_SET: UnpackSet = packed!(u32; b: Srgb8 => 24, g: Srgb8 => 16, r: Srgb8 => 8, x: Pad => 0);
pub(crate) const R8G8B8A8_SRGB_SET: UnpackSet = packed!(u32; r: Srgb8 => 24, g: Srgb8 => 16, b: Srgb8 => 8, a: Unorm<8> => 0);
pub(crate) const R8G8B8X8_SRGB_SET: UnpackSet = packed!(u32; r: Srgb8 => 24, g: Srgb8 => 16, b: Srgb8 => 8, x: Pad => 0);
pub(crate) const L8A8_SRGB_SET: UnpackSet = packed!(u16; l: Srgb8 => 8, a: Unorm<8> => 0);
pub(crate) const L_SRGB8_SET: UnpackSet = array!(u8; l: Srgb8);
pub(crate) const BGR_SRGB8_SET: UnpackSet = array!(u8; b: Srgb8, g: Srgb8, r: Srgb8);

// float

pub(crate) const R11G11B10_FLOAT_SET: UnpackSet = packed!(u32; r: Ufloat11 => 21, g: Ufloat11 => 10, b: Ufloat10 => 0);
pub(crate) const A_FLOAT16_SET: UnpackSet = array!(u16; a: Half);
pub(crate) const L_FLOAT16_SET: UnpackSet = array!(u16; l: Half);
pub(crate) const LA_FLOAT16_SET: UnpackSet = array!(u16; l: Half, a: Half);
pub(crate) const I_FLOAT16_SET: UnpackSet = array!(u16; i: Half);
pub(crate) const R_FLOAT16_SET: UnpackSet = array!(u16; r: Half);
pub(crate) const RG_FLOAT16_SET: UnpackSet = array!(u16; r: Half, g: Half);
pub(crate) const RGB_FLOAT16_SET: UnpackSet = array!(u16; r: Half, g: Half, b: Half);
pub(crate) const RGBA_FLOAT16_SET: UnpackSet = array!(u16; r: Half, g: Half, b: Half, a: Half);
pub(crate) const RGBX_FLOAT16_SET: UnpackSet = array!(u16; r: Half, g: Half, b: Half, x: Pad);
pub(crate) const A_FLOAT32_SET: UnpackSet = array!(u32; a: Float);
pub(crate) const L_FLOAT32_SET: UnpackSet = array!(u32; l: Float);
pub(crate) const LA_FLOAT32_SET: UnpackSet = array!(u32; l: Float, a: Float);
pub(crate) const I_FLOAT32_SET: UnpackSet = array!(u32; i: Float);
pub(crate) const R_FLOAT32_SET: UnpackSet = array!(u32; r: Float);
pub(crate) const RG_FLOAT32_SET: UnpackSet = array!(u32; r: Float, g: Float);
pub(crate) const RGB_FLOAT32_SET: UnpackSet = array!(u32; r: Float, g: Float, b: Float);
pub(crate) const RGBA_FLOAT32_SET: UnpackSet = array!(u32; r: Float, g: Float, b: Float, a: Float);
pub(crate) const RGBX_FLOAT32_SET: UnpackSet = array!(u32; r: Float, g: Float, b: Float, x: Pad);

pub(crate) const R9G9B9E5_FLOAT_SET: UnpackSet = UnpackSet {
    float: |Args(src, dst)| {
        for_each_texel(src, dst, |texel: [u8; 4]| {
            let [r, g, b] = rgb9e5::f32(u32::from_le_bytes(texel));
            [r, g, b, 1.0]
        })
    },
    ubyte: |Args(src, dst)| {
        for_each_texel(src, dst, |texel: [u8; 4]| {
            let [r, g, b] = rgb9e5::n8(u32::from_le_bytes(texel));
            [r, g, b, u8::MAX]
        })
    },
};

// depth/stencil, read as (z, z, z, 1)

pub(crate) const S8_UINT_Z24_UNORM_SET: UnpackSet = packed!(u32; x: Pad => 24, l: Unorm<24> => 0);
pub(crate) const Z24_UNORM_S8_UINT_SET: UnpackSet = packed!(u32; l: Unorm<24> => 8, x: Pad => 0);
pub(crate) const Z_UNORM16_SET: UnpackSet = array!(u16; l: Unorm<16>);
pub(crate) const Z_UNORM32_SET: UnpackSet = array!(u32; l: Unorm<32>);
pub(crate) const Z_FLOAT32_SET: UnpackSet = array!(u32; l: Float);
pub(crate) const Z32_FLOAT_S8X24_UINT_SET: UnpackSet = array!(u32; l: Float, x: Pad);

// Stencil-only data has no color. It reads as opaque black.
pub(crate) const S_UINT8_SET: UnpackSet = UnpackSet {
    float: |Args(_, dst)| dst.fill([0.0, 0.0, 0.0, 1.0]),
    ubyte: |Args(_, dst)| dst.fill([0, 0, 0, u8::MAX]),
};

// integer

pub(crate) const B10G10R10A2_UINT_SET: IntUnpackSet = int_packed!(u32; b: Uint<10> => 22, g: Uint<10> => 12, r: Uint<10> => 2, a: Uint<2> => 0);
pub(crate) const R10G10B10A2_UINT_SET: IntUnpackSet = int_packed!(u32; r: Uint<10> => 22, g: Uint<10> => 12, b: Uint<10> => 2, a: Uint<2> => 0);
pub(crate) const A_UINT8_SET: IntUnpackSet = int_array!(u8; a: Uint<8>);
pub(crate) const A_UINT16_SET: IntUnpackSet = int_array!(u16; a: Uint<16>);
pub(crate) const A_UINT32_SET: IntUnpackSet = int_array!(u32; a: Uint<32>);
pub(crate) const A_SINT8_SET: IntUnpackSet = int_array!(u8; a: Sint<8>);
pub(crate) const A_SINT16_SET: IntUnpackSet = int_array!(u16; a: Sint<16>);
pub(crate) const A_SINT32_SET: IntUnpackSet = int_array!(u32; a: Sint<32>);
pub(crate) const I_UINT8_SET: IntUnpackSet = int_array!(u8; i: Uint<8>);
pub(crate) const I_UINT16_SET: IntUnpackSet = int_array!(u16; i: Uint<16>);
pub(crate) const I_UINT32_SET: IntUnpackSet = int_array!(u32; i: Uint<32>);
pub(crate) const I_SINT8_SET: IntUnpackSet = int_array!(u8; i: Sint<8>);
pub(crate) const I_SINT16_SET: IntUnpackSet = int_array!(u16; i: Sint<16>);
pub(crate) const I_SINT32_SET: IntUnpackSet = int_array!(u32; i: Sint<32>);
pub(crate) const L_UINT8_SET: IntUnpackSet = int_array!(u8; l: Uint<8>);
pub(crate) const L_UINT16_SET: IntUnpackSet = int_array!(u16; l: Uint<16>);
pub(crate) const L_UINT32_SET: IntUnpackSet = int_array!(u32; l: Uint<32>);
pub(crate) const L_SINT8_SET: IntUnpackSet = int_array!(u8; l: Sint<8>);
pub(crate) const L_SINT16_SET: IntUnpackSet = int_array!(u16; l: Sint<16>);
pub(crate) const L_SINT32_SET: IntUnpackSet = int_array!(u32; l: Sint<32>);
pub(crate) const LA_UINT8_SET: IntUnpackSet = int_array!(u8; l: Uint<8>, a: Uint<8>);
pub(crate) const LA_UINT16_SET: IntUnpackSet = int_array!(u16; l: Uint<16>, a: Uint<16>);
pub(crate) const LA_UINT32_SET: IntUnpackSet = int_array!(u32; l: Uint<32>, a: Uint<32>);
pub(crate) const LA_SINT8_SET: IntUnpackSet = int_array!(u8; l: Sint<8>, a: Sint<8>);
pub(crate) const LA_SINT16_SET: IntUnpackSet = int_array!(u16; l: Sint<16>, a: Sint<16>);
pub(crate) const LA_SINT32_SET: IntUnpackSet = int_array!(u32; l: Sint<32>, a: Sint<32>);
pub(crate) const R_UINT8_SET: IntUnpackSet = int_array!(u8; r: Uint<8>);
pub(crate) const R_UINT16_SET: IntUnpackSet = int_array!(u16; r: Uint<16>);
pub(crate) const R_UINT32_SET: IntUnpackSet = int_array!(u32; r: Uint<32>);
pub(crate) const R_SINT8_SET: IntUnpackSet = int_array!(u8; r: Sint<8>);
pub(crate) const R_SINT16_SET: IntUnpackSet = int_array!(u16; r: Sint<16>);
pub(crate) const R_SINT32_SET: IntUnpackSet = int_array!(u32; r: Sint<32>);
pub(crate) const RG_UINT8_SET: IntUnpackSet = int_array!(u8; r: Uint<8>, g: Uint<8>);
pub(crate) const RG_UINT16_SET: IntUnpackSet = int_array!(u16; r: Uint<16>, g: Uint<16>);
pub(crate) const RG_UINT32_SET: IntUnpackSet = int_array!(u32; r: Uint<32>, g: Uint<32>);
pub(crate) const RG_SINT8_SET: IntUnpackSet = int_array!(u8; r: Sint<8>, g: Sint<8>);
pub(crate) const RG_SINT16_SET: IntUnpackSet = int_array!(u16; r: Sint<16>, g: Sint<16>);
pub(crate) const RG_SINT32_SET: IntUnpackSet = int_array!(u32; r: Sint<32>, g: Sint<32>);
pub(crate) const RGB_UINT8_SET: IntUnpackSet = int_array!(u8; r: Uint<8>, g: Uint<8>, b: Uint<8>);
pub(crate) const RGB_UINT16_SET: IntUnpackSet = int_array!(u16; r: Uint<16>, g: Uint<16>, b: Uint<16>);
pub(crate) const RGB_UINT32_SET: IntUnpackSet = int_array!(u32; r: Uint<32>, g: Uint<32>, b: Uint<32>);
pub(crate) const RGB_SINT8_SET: IntUnpackSet = int_array!(u8; r: Sint<8>, g: Sint<8>, b: Sint<8>);
pub(crate) const RGB_SINT16_SET: IntUnpackSet = int_array!(u16; r: Sint<16>, g: Sint<16>, b: Sint<16>);
pub(crate) const RGB_SINT32_SET: IntUnpackSet = int_array!(u32; r: Sint<32>, g: Sint<32>, b: Sint<32>);
pub(crate) const RGBA_UINT8_SET: IntUnpackSet = int_array!(u8; r: Uint<8>, g: Uint<8>, b: Uint<8>, a: Uint<8>);
pub(crate) const RGBA_UINT16_SET: IntUnpackSet = int_array!(u16; r: Uint<16>, g: Uint<16>, b: Uint<16>, a: Uint<16>);
pub(crate) const RGBA_UINT32_SET: IntUnpackSet = int_array!(u32; r: Uint<32>, g: Uint<32>, b: Uint<32>, a: Uint<32>);
pub(crate) const RGBA_SINT8_SET: IntUnpackSet = int_array!(u8; r: Sint<8>, g: Sint<8>, b: Sint<8>, a: Sint<8>);
pub(crate) const RGBA_SINT16_SET: IntUnpackSet = int_array!(u16; r: Sint<16>, g: Sint<16>, b: Sint<16>, a: Sint<16>);
pub(crate) const RGBA_SINT32_SET: IntUnpackSet = int_array!(u32; r: Sint<32>, g: Sint<32>, b: Sint<32>, a: Sint<32>);
pub(crate) const RGBX_UINT8_SET: IntUnpackSet = int_array!(u8; r: Uint<8>, g: Uint<8>, b: Uint<8>, x: Pad);
pub(crate) const RGBX_UINT16_SET: IntUnpackSet = int_array!(u16; r: Uint<16>, g: Uint<16>, b: Uint<16>, x: Pad);
pub(crate) const RGBX_UINT32_SET: IntUnpackSet = int_array!(u32; r: Uint<32>, g: Uint<32>, b: Uint<32>, x: Pad);
pub(crate) const RGBX_SINT8_SET: IntUnpackSet = int_array!(u8; r: Sint<8>, g: Sint<8>, b: Sint<8>, x: Pad);
pub(crate) const RGBX_SINT16_SET: IntUnpackSet = int_array!(u16; r: Sint<16>, g: Sint<16>, b: Sint<16>, x: Pad);
pub(crate) const RGBX_SINT32_SET: IntUnpackSet = int_array!(u32; r: Sint<32>, g: Sint<32>, b: Sint<32>, x: Pad);
