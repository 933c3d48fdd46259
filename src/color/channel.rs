//! Per-channel codecs.
//!
//! A format is a list of stored fields, and each field has a channel kind
//! that knows how to convert its raw bits to and from canonical values. The
//! layout macros in `unpack` and `pack` are generic over these kinds, so
//! every format gets its own monomorphized, branch-free codec.
//!
//! Raw values are always passed as the field's bits in the low bits of a
//! `u32`, already shifted and masked.

use super::*;

const fn mask(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// A channel of a normalized or floating point format.
pub(crate) trait ChannelKind {
    const MASK: u32;

    fn to_f32(raw: u32) -> f32;
    fn to_n8(raw: u32) -> u8;
    fn from_f32(value: f32) -> u32;
    fn from_n8(value: u8) -> u32;
}

/// A channel of a pure-integer format.
pub(crate) trait IntChannelKind {
    const MASK: u32;

    /// The canonical value. Signed channels are sign-extended.
    fn to_u32(raw: u32) -> u32;
    /// Clamps a canonical value to the range of the channel.
    fn from_u32(value: u32) -> u32;
    fn to_f32(raw: u32) -> f32;
    fn to_n8(raw: u32) -> u8;
}

/// Unsigned normalized with `BITS` bits.
pub(crate) struct Unorm<const BITS: u32>;
impl<const BITS: u32> ChannelKind for Unorm<BITS> {
    const MASK: u32 = mask(BITS);

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        match BITS {
            1 => n1::f32(raw as u8),
            2 => n2::f32(raw as u8),
            3 => n3::f32(raw as u8),
            4 => n4::f32(raw as u8),
            5 => n5::f32(raw as u8),
            6 => n6::f32(raw as u8),
            8 => n8::f32(raw as u8),
            10 => n10::f32(raw as u16),
            16 => n16::f32(raw as u16),
            // 24 and 32 bit depth
            _ => (raw as f64 / Self::MASK as f64) as f32,
        }
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        match BITS {
            1 => n1::n8(raw as u8),
            2 => n2::n8(raw as u8),
            3 => n3::n8(raw as u8),
            4 => n4::n8(raw as u8),
            5 => n5::n8(raw as u8),
            6 => n6::n8(raw as u8),
            8 => raw as u8,
            10 => n10::n8(raw as u16),
            16 => n16::n8(raw as u16),
            _ => fp::n8(Self::to_f32(raw)),
        }
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        match BITS {
            1 => n1::from_f32(value) as u32,
            2 => n2::from_f32(value) as u32,
            3 => n3::from_f32(value) as u32,
            4 => n4::from_f32(value) as u32,
            5 => n5::from_f32(value) as u32,
            6 => n6::from_f32(value) as u32,
            8 => n8::from_f32(value) as u32,
            10 => n10::from_f32(value) as u32,
            16 => n16::from_f32(value) as u32,
            _ => (value.clamp(0.0, 1.0) as f64 * Self::MASK as f64 + 0.5) as u32,
        }
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        match BITS {
            1 => n1::from_n8(value) as u32,
            2 => n2::from_n8(value) as u32,
            3 => n3::from_n8(value) as u32,
            4 => n4::from_n8(value) as u32,
            5 => n5::from_n8(value) as u32,
            6 => n6::from_n8(value) as u32,
            8 => value as u32,
            10 => n10::from_n8(value) as u32,
            16 => n16::from_n8(value) as u32,
            _ => ((value as u64 * Self::MASK as u64 + 127) / 255) as u32,
        }
    }
}

/// Signed normalized, 8 bits.
pub(crate) struct Snorm8;
impl ChannelKind for Snorm8 {
    const MASK: u32 = 0xFF;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        s8::f32(raw as u8)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        s8::n8(raw as u8)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        s8::from_f32(value) as u32
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        s8::from_n8(value) as u32
    }
}

/// Signed normalized, 16 bits.
pub(crate) struct Snorm16;
impl ChannelKind for Snorm16 {
    const MASK: u32 = 0xFFFF;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        s16::f32(raw as u16)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        s16::n8(raw as u16)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        s16::from_f32(value) as u32
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        s16::from_n8(value) as u32
    }
}

/// An sRGB encoded 8-bit color channel. Canonical values are linear.
pub(crate) struct Srgb8;
impl ChannelKind for Srgb8 {
    const MASK: u32 = 0xFF;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        srgb8_to_linear(raw as u8)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        srgb8_to_linear8(raw as u8)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        linear_to_srgb8(value) as u32
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        linear8_to_srgb8(value) as u32
    }
}

/// IEEE binary16.
pub(crate) struct Half;
impl ChannelKind for Half {
    const MASK: u32 = 0xFFFF;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        fp16::f32(raw as u16)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        fp16::n8(raw as u16)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        fp16::from_f32(value) as u32
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        fp16::from_f32(n8::f32(value)) as u32
    }
}

/// IEEE binary32.
pub(crate) struct Float;
impl ChannelKind for Float {
    const MASK: u32 = u32::MAX;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        f32::from_bits(raw)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        fp::n8(f32::from_bits(raw))
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        value.to_bits()
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        n8::f32(value).to_bits()
    }
}

/// Unsigned 11-bit float.
pub(crate) struct Ufloat11;
impl ChannelKind for Ufloat11 {
    const MASK: u32 = 0x7FF;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        fp11::f32(raw as u16)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        fp11::n8(raw as u16)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        fp11::from_f32(value) as u32
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        fp11::from_f32(n8::f32(value)) as u32
    }
}

/// Unsigned 10-bit float.
pub(crate) struct Ufloat10;
impl ChannelKind for Ufloat10 {
    const MASK: u32 = 0x3FF;

    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        fp10::f32(raw as u16)
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        fp10::n8(raw as u16)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> u32 {
        fp10::from_f32(value) as u32
    }
    #[inline(always)]
    fn from_n8(value: u8) -> u32 {
        fp10::from_f32(n8::f32(value)) as u32
    }
}

/// Unsigned integer with `BITS` bits.
pub(crate) struct Uint<const BITS: u32>;
impl<const BITS: u32> IntChannelKind for Uint<BITS> {
    const MASK: u32 = mask(BITS);

    #[inline(always)]
    fn to_u32(raw: u32) -> u32 {
        raw
    }
    #[inline(always)]
    fn from_u32(value: u32) -> u32 {
        value.min(Self::MASK)
    }
    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        raw as f32
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        raw.min(u8::MAX as u32) as u8
    }
}

/// Two's complement signed integer with `BITS` bits.
pub(crate) struct Sint<const BITS: u32>;
impl<const BITS: u32> Sint<BITS> {
    const MIN: i32 = if BITS >= 32 { i32::MIN } else { -(1 << (BITS - 1)) };
    const MAX: i32 = if BITS >= 32 { i32::MAX } else { (1 << (BITS - 1)) - 1 };

    #[inline(always)]
    fn sign_extend(raw: u32) -> i32 {
        let shift = 32 - BITS;
        ((raw << shift) as i32) >> shift
    }
}
impl<const BITS: u32> IntChannelKind for Sint<BITS> {
    const MASK: u32 = mask(BITS);

    #[inline(always)]
    fn to_u32(raw: u32) -> u32 {
        Self::sign_extend(raw) as u32
    }
    #[inline(always)]
    fn from_u32(value: u32) -> u32 {
        (value as i32).clamp(Self::MIN, Self::MAX) as u32 & Self::MASK
    }
    #[inline(always)]
    fn to_f32(raw: u32) -> f32 {
        Self::sign_extend(raw) as f32
    }
    #[inline(always)]
    fn to_n8(raw: u32) -> u8 {
        Self::sign_extend(raw).clamp(0, u8::MAX as i32) as u8
    }
}

/// Padding. Ignored when read and written as zero.
pub(crate) struct Pad;
impl ChannelKind for Pad {
    const MASK: u32 = 0;

    #[inline(always)]
    fn to_f32(_: u32) -> f32 {
        0.0
    }
    #[inline(always)]
    fn to_n8(_: u32) -> u8 {
        0
    }
    #[inline(always)]
    fn from_f32(_: f32) -> u32 {
        0
    }
    #[inline(always)]
    fn from_n8(_: u8) -> u32 {
        0
    }
}
impl IntChannelKind for Pad {
    const MASK: u32 = 0;

    #[inline(always)]
    fn to_u32(_: u32) -> u32 {
        0
    }
    #[inline(always)]
    fn from_u32(_: u32) -> u32 {
        0
    }
    #[inline(always)]
    fn to_f32(_: u32) -> f32 {
        0.0
    }
    #[inline(always)]
    fn to_n8(_: u32) -> u8 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_integers() {
        assert_eq!(Sint::<8>::to_u32(0xFF) as i32, -1);
        assert_eq!(Sint::<8>::to_u32(0x80) as i32, -128);
        assert_eq!(Sint::<8>::to_f32(0x7F), 127.0);
        assert_eq!(Sint::<8>::from_u32(-1000_i32 as u32), 0x80);
        assert_eq!(Sint::<8>::from_u32(1000), 0x7F);
        assert_eq!(Sint::<16>::from_u32(-2_i32 as u32), 0xFFFE);
        assert_eq!(Sint::<32>::to_u32(0x8000_0000) as i32, i32::MIN);
        assert_eq!(Sint::<32>::from_u32(0x8000_0000), 0x8000_0000);
        assert_eq!(Sint::<16>::to_n8(0x8000), 0);
        assert_eq!(Sint::<16>::to_n8(300), 255);
    }

    #[test]
    fn unsigned_integers() {
        assert_eq!(Uint::<2>::from_u32(7), 3);
        assert_eq!(Uint::<10>::from_u32(5000), 1023);
        assert_eq!(Uint::<32>::from_u32(u32::MAX), u32::MAX);
        assert_eq!(Uint::<16>::to_n8(1000), 255);
    }

    #[test]
    fn wide_unorm() {
        assert_eq!(Unorm::<24>::from_f32(1.0), 0xFF_FFFF);
        assert_eq!(Unorm::<24>::to_f32(0xFF_FFFF), 1.0);
        assert_eq!(Unorm::<32>::from_f32(1.0), u32::MAX);
        assert_eq!(Unorm::<32>::from_f32(-1.0), 0);
        assert_eq!(Unorm::<32>::to_f32(u32::MAX), 1.0);
        assert_eq!(Unorm::<24>::from_n8(255), 0xFF_FFFF);
    }
}
