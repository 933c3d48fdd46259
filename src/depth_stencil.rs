//! Depth and stencil packing.
//!
//! All packing functions here only touch the bits of the channel they write.
//! Packing depth into a combined depth/stencil texel keeps the stencil and
//! vice versa, so the two channels can be written in separate passes.
//!
//! Rows are tightly packed: texel `i` starts at byte `i * byte_size`.

use crate::color::{n16, ChannelKind, Unorm};
use crate::unpack::for_each_texel;
use crate::{cast, CodecError, FormatId};

/// One texel of [`FormatId::Z32_FLOAT_S8X24_UINT`].
///
/// The stencil is stored in the low 8 bits of `x24s8`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Z32FloatS8X24 {
    pub z: f32,
    pub x24s8: u32,
}
impl Z32FloatS8X24 {
    pub fn new(z: f32, stencil: u8) -> Self {
        Self {
            z,
            x24s8: stencil as u32,
        }
    }
    pub fn stencil(&self) -> u8 {
        self.x24s8 as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    /// `S << 24 | Z`
    S8Z24,
    /// `Z << 8 | S`
    Z24S8,
    Z16,
    Z32,
    Z32Float,
    /// An `f32` followed by a word with the stencil in its low 8 bits.
    Z32FloatS8X24,
    S8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Depth,
    Stencil,
    DepthStencil,
}

const Z24_MASK: u32 = 0x00FF_FFFF;

fn layout(format: FormatId) -> Option<Layout> {
    use FormatId::*;
    Some(match format {
        S8_UINT_Z24_UNORM | X8_UINT_Z24_UNORM => Layout::S8Z24,
        Z24_UNORM_S8_UINT | Z24_UNORM_X8_UINT => Layout::Z24S8,
        Z_UNORM16 => Layout::Z16,
        Z_UNORM32 => Layout::Z32,
        Z_FLOAT32 => Layout::Z32Float,
        Z32_FLOAT_S8X24_UINT => Layout::Z32FloatS8X24,
        S_UINT8 => Layout::S8,
        _ => return None,
    })
}

/// Finds the layout of `format` and checks that it has the accessed
/// channels and that `buffer_len` bytes hold `texels` texels.
fn prepare(
    format: FormatId,
    access: Access,
    texels: usize,
    buffer_len: usize,
) -> Result<Layout, CodecError> {
    let has_channel = match access {
        Access::Depth => format.has_depth(),
        Access::Stencil => format.has_stencil(),
        Access::DepthStencil => format.is_packed_depth_stencil(),
    };
    let layout = layout(format).filter(|_| has_channel).ok_or_else(|| {
        log::warn!("Cannot access {:?} of {:?}", access, format);
        CodecError::UnsupportedFormat(format)
    })?;

    let expected = texels
        .checked_mul(format.byte_size())
        .ok_or(CodecError::UnexpectedBufferSize {
            expected: usize::MAX,
        })?;
    if buffer_len < expected {
        return Err(CodecError::UnexpectedBufferSize { expected });
    }
    Ok(layout)
}

/// Replaces every 32-bit word of `dst` with `f(old_word, value)`.
#[inline(always)]
fn update_words<T: Copy>(dst: &mut [u8], src: &[T], f: impl Fn(u32, T) -> u32) {
    for (texel, value) in cast::as_array_chunks_mut::<4>(dst).iter_mut().zip(src) {
        *texel = f(u32::from_le_bytes(*texel), *value).to_le_bytes();
    }
}
/// Replaces the stencil word of every [`Layout::Z32FloatS8X24`] texel.
#[inline(always)]
fn update_z32f_words<T: Copy>(dst: &mut [u8], src: &[T], f: impl Fn([u32; 2], T) -> [u32; 2]) {
    for (texel, value) in cast::as_array_chunks_mut::<8>(dst).iter_mut().zip(src) {
        let words: [u32; 2] = cast::texel_components(*texel);
        let words = f(words.map(u32::from_le), *value);
        *texel = cast::components_texel(words.map(u32::to_le));
    }
}
#[inline(always)]
fn read_words<T>(src: &[u8], dst: &mut [T], f: impl Fn(u32) -> T) {
    for_each_texel(src, dst, |texel: [u8; 4]| f(u32::from_le_bytes(texel)));
}
#[inline(always)]
fn read_z32f_words<T>(src: &[u8], dst: &mut [T], f: impl Fn([u32; 2]) -> T) {
    for_each_texel(src, dst, |texel: [u8; 8]| {
        let words: [u32; 2] = cast::texel_components(texel);
        f(words.map(u32::from_le))
    });
}

fn u32_to_unit_f32(z: u32) -> f32 {
    (z as f64 / u32::MAX as f64) as f32
}
fn unit_f32_to_u32(z: f32) -> u32 {
    // NaN becomes 0, and the cast saturates
    (z.clamp(0.0, 1.0) as f64 * u32::MAX as f64 + 0.5) as u32
}

/// Packs depth values in `[0, 1]` and keeps the stencil bits of `dst`.
///
/// Values are clamped for normalized formats. Float formats store the value
/// as is.
pub fn pack_float_z_row(format: FormatId, src: &[f32], dst: &mut [u8]) -> Result<(), CodecError> {
    match prepare(format, Access::Depth, src.len(), dst.len())? {
        Layout::S8Z24 => update_words(dst, src, |word, z| {
            word & !Z24_MASK | Unorm::<24>::from_f32(z)
        }),
        Layout::Z24S8 => update_words(dst, src, |word, z| {
            word & 0xFF | Unorm::<24>::from_f32(z) << 8
        }),
        Layout::Z16 => {
            for (texel, &z) in cast::as_array_chunks_mut::<2>(dst).iter_mut().zip(src) {
                *texel = n16::from_f32(z).to_le_bytes();
            }
        }
        Layout::Z32 => update_words(dst, src, |_, z| Unorm::<32>::from_f32(z)),
        Layout::Z32Float => update_words(dst, src, |_, z| z.to_bits()),
        Layout::Z32FloatS8X24 => update_z32f_words(dst, src, |[_, s], z| [z.to_bits(), s]),
        Layout::S8 => unreachable_layout(format)?,
    }
    Ok(())
}

/// Packs full-scale 32-bit depth values and keeps the stencil bits of
/// `dst`. Narrower formats keep the most significant bits.
pub fn pack_uint_z_row(format: FormatId, src: &[u32], dst: &mut [u8]) -> Result<(), CodecError> {
    match prepare(format, Access::Depth, src.len(), dst.len())? {
        Layout::S8Z24 => update_words(dst, src, |word, z| word & !Z24_MASK | z >> 8),
        Layout::Z24S8 => update_words(dst, src, |word, z| word & 0xFF | z & !0xFF),
        Layout::Z16 => {
            for (texel, &z) in cast::as_array_chunks_mut::<2>(dst).iter_mut().zip(src) {
                *texel = ((z >> 16) as u16).to_le_bytes();
            }
        }
        Layout::Z32 => update_words(dst, src, |_, z| z),
        Layout::Z32Float => update_words(dst, src, |_, z| u32_to_unit_f32(z).to_bits()),
        Layout::Z32FloatS8X24 => update_z32f_words(dst, src, |[_, s], z| {
            [u32_to_unit_f32(z).to_bits(), s]
        }),
        Layout::S8 => unreachable_layout(format)?,
    }
    Ok(())
}

/// Packs stencil values and keeps the depth bits of `dst`.
pub fn pack_stencil_row(format: FormatId, src: &[u8], dst: &mut [u8]) -> Result<(), CodecError> {
    match prepare(format, Access::Stencil, src.len(), dst.len())? {
        Layout::S8Z24 => update_words(dst, src, |word, s| word & Z24_MASK | (s as u32) << 24),
        Layout::Z24S8 => update_words(dst, src, |word, s| word & !0xFF | s as u32),
        Layout::Z32FloatS8X24 => update_z32f_words(dst, src, |[z, x24s8], s| {
            [z, x24s8 & !0xFF | s as u32]
        }),
        Layout::S8 => dst[..src.len()].copy_from_slice(src),
        Layout::Z16 | Layout::Z32 | Layout::Z32Float => unreachable_layout(format)?,
    }
    Ok(())
}

/// Packs words with the depth in the upper 24 bits and the stencil in the
/// lower 8 bits. Both channels are overwritten.
///
/// Only combined depth/stencil formats are supported.
pub fn pack_uint_24_8_depth_stencil_row(
    format: FormatId,
    src: &[u32],
    dst: &mut [u8],
) -> Result<(), CodecError> {
    match prepare(format, Access::DepthStencil, src.len(), dst.len())? {
        Layout::S8Z24 => update_words(dst, src, |_, zs| zs.rotate_right(8)),
        Layout::Z24S8 => update_words(dst, src, |_, zs| zs),
        Layout::Z32FloatS8X24 => update_z32f_words(dst, src, |_, zs| {
            let z = Unorm::<24>::to_f32(zs >> 8);
            [z.to_bits(), zs & 0xFF]
        }),
        Layout::Z16 | Layout::Z32 | Layout::Z32Float | Layout::S8 => {
            unreachable_layout(format)?
        }
    }
    Ok(())
}

/// Unpacks depth values to `[0, 1]`. Float formats return the stored value.
pub fn unpack_float_z_row(format: FormatId, src: &[u8], dst: &mut [f32]) -> Result<(), CodecError> {
    match prepare(format, Access::Depth, dst.len(), src.len())? {
        Layout::S8Z24 => read_words(src, dst, |word| Unorm::<24>::to_f32(word & Z24_MASK)),
        Layout::Z24S8 => read_words(src, dst, |word| Unorm::<24>::to_f32(word >> 8)),
        Layout::Z16 => for_each_texel(src, dst, |texel: [u8; 2]| {
            n16::f32(u16::from_le_bytes(texel))
        }),
        Layout::Z32 => read_words(src, dst, Unorm::<32>::to_f32),
        Layout::Z32Float => read_words(src, dst, f32::from_bits),
        Layout::Z32FloatS8X24 => read_z32f_words(src, dst, |[z, _]| f32::from_bits(z)),
        Layout::S8 => unreachable_layout(format)?,
    }
    Ok(())
}

/// Unpacks depth values to full-scale 32-bit integers.
///
/// Narrower values are widened by bit replication, so the maximum depth
/// becomes `u32::MAX`.
pub fn unpack_uint_z_row(format: FormatId, src: &[u8], dst: &mut [u32]) -> Result<(), CodecError> {
    match prepare(format, Access::Depth, dst.len(), src.len())? {
        Layout::S8Z24 => read_words(src, dst, |word| {
            let z = word & Z24_MASK;
            z << 8 | z >> 16
        }),
        Layout::Z24S8 => read_words(src, dst, |word| word & !0xFF | word >> 24),
        Layout::Z16 => for_each_texel(src, dst, |texel: [u8; 2]| {
            let z = u16::from_le_bytes(texel) as u32;
            z << 16 | z
        }),
        Layout::Z32 => read_words(src, dst, |word| word),
        Layout::Z32Float => read_words(src, dst, |word| unit_f32_to_u32(f32::from_bits(word))),
        Layout::Z32FloatS8X24 => read_z32f_words(src, dst, |[z, _]| {
            unit_f32_to_u32(f32::from_bits(z))
        }),
        Layout::S8 => unreachable_layout(format)?,
    }
    Ok(())
}

/// Reads the stencil value of `dst.len()` tightly packed texels.
pub fn unpack_stencil_row(format: FormatId, src: &[u8], dst: &mut [u8]) -> Result<(), CodecError> {
    match prepare(format, Access::Stencil, dst.len(), src.len())? {
        Layout::S8Z24 => read_words(src, dst, |word| (word >> 24) as u8),
        Layout::Z24S8 => read_words(src, dst, |word| word as u8),
        Layout::Z32FloatS8X24 => read_z32f_words(src, dst, |[_, x24s8]| x24s8 as u8),
        Layout::S8 => {
            let n = dst.len();
            dst.copy_from_slice(&src[..n]);
        }
        Layout::Z16 | Layout::Z32 | Layout::Z32Float => unreachable_layout(format)?,
    }
    Ok(())
}

/// Unpacks combined depth/stencil texels to words with the depth in the
/// upper 24 bits and the stencil in the lower 8 bits.
pub fn unpack_uint_24_8_depth_stencil_row(
    format: FormatId,
    src: &[u8],
    dst: &mut [u32],
) -> Result<(), CodecError> {
    match prepare(format, Access::DepthStencil, dst.len(), src.len())? {
        Layout::S8Z24 => read_words(src, dst, |word| word.rotate_left(8)),
        Layout::Z24S8 => read_words(src, dst, |word| word),
        Layout::Z32FloatS8X24 => read_z32f_words(src, dst, |[z, x24s8]| {
            Unorm::<24>::from_f32(f32::from_bits(z)) << 8 | x24s8 & 0xFF
        }),
        Layout::Z16 | Layout::Z32 | Layout::Z32Float | Layout::S8 => {
            unreachable_layout(format)?
        }
    }
    Ok(())
}

/// Unpacks combined depth/stencil texels to float depth and stencil pairs.
pub fn unpack_float_32_uint_24_8_depth_stencil_row(
    format: FormatId,
    src: &[u8],
    dst: &mut [Z32FloatS8X24],
) -> Result<(), CodecError> {
    match prepare(format, Access::DepthStencil, dst.len(), src.len())? {
        Layout::S8Z24 => read_words(src, dst, |word| Z32FloatS8X24 {
            z: Unorm::<24>::to_f32(word & Z24_MASK),
            x24s8: word >> 24,
        }),
        Layout::Z24S8 => read_words(src, dst, |word| Z32FloatS8X24 {
            z: Unorm::<24>::to_f32(word >> 8),
            x24s8: word & 0xFF,
        }),
        Layout::Z32FloatS8X24 => read_z32f_words(src, dst, |[z, x24s8]| Z32FloatS8X24 {
            z: f32::from_bits(z),
            x24s8,
        }),
        Layout::Z16 | Layout::Z32 | Layout::Z32Float | Layout::S8 => {
            unreachable_layout(format)?
        }
    }
    Ok(())
}

/// `prepare` already rejects layouts without the accessed channel. This
/// only exists so the matches above stay exhaustive without panicking.
#[cold]
fn unreachable_layout(format: FormatId) -> Result<(), CodecError> {
    debug_assert!(false, "unexpected depth/stencil layout for {:?}", format);
    Err(CodecError::UnsupportedFormat(format))
}

/// Packs one depth value. See [`pack_float_z_row`].
///
/// ```
/// use texel_codec::{pack_float_z, FormatId};
///
/// let mut texel = 0x0000_0042_u32.to_le_bytes();
/// pack_float_z(FormatId::Z24_UNORM_S8_UINT, 1.0, &mut texel).unwrap();
/// assert_eq!(u32::from_le_bytes(texel), 0xFFFF_FF42);
/// ```
pub fn pack_float_z(format: FormatId, z: f32, dst: &mut [u8]) -> Result<(), CodecError> {
    pack_float_z_row(format, &[z], dst)
}
/// Writes the depth of one texel from a full-range `u32`, keeping its stencil.
pub fn pack_uint_z(format: FormatId, z: u32, dst: &mut [u8]) -> Result<(), CodecError> {
    pack_uint_z_row(format, &[z], dst)
}
/// Writes the stencil of one texel, keeping its depth.
pub fn pack_stencil(format: FormatId, stencil: u8, dst: &mut [u8]) -> Result<(), CodecError> {
    pack_stencil_row(format, &[stencil], dst)
}
/// Reads the depth of one texel as a float.
pub fn unpack_float_z(format: FormatId, src: &[u8]) -> Result<f32, CodecError> {
    let mut out = [0.0];
    unpack_float_z_row(format, src, &mut out)?;
    Ok(out[0])
}
/// Reads the depth of one texel scaled to the full `u32` range.
pub fn unpack_uint_z(format: FormatId, src: &[u8]) -> Result<u32, CodecError> {
    let mut out = [0];
    unpack_uint_z_row(format, src, &mut out)?;
    Ok(out[0])
}
/// Reads the stencil of one texel.
pub fn unpack_stencil(format: FormatId, src: &[u8]) -> Result<u8, CodecError> {
    let mut out = [0];
    unpack_stencil_row(format, src, &mut out)?;
    Ok(out[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z24_keeps_stencil() {
        let mut texel = 0x0000_0042_u32.to_le_bytes();
        pack_float_z(FormatId::Z24_UNORM_S8_UINT, 1.0, &mut texel).unwrap();
        assert_eq!(u32::from_le_bytes(texel), 0xFFFF_FF42);

        let mut texel = 0x4200_0000_u32.to_le_bytes();
        pack_float_z(FormatId::S8_UINT_Z24_UNORM, 1.0, &mut texel).unwrap();
        assert_eq!(u32::from_le_bytes(texel), 0x42FF_FFFF);
    }

    #[test]
    fn stencil_keeps_depth() {
        let mut texel = 0xABCD_EF00_u32.to_le_bytes();
        pack_stencil(FormatId::Z24_UNORM_S8_UINT, 0x17, &mut texel).unwrap();
        assert_eq!(u32::from_le_bytes(texel), 0xABCD_EF17);

        let mut texel = [0; 8];
        texel[..4].copy_from_slice(&0.25_f32.to_le_bytes());
        texel[4..].copy_from_slice(&0xFFFF_FF00_u32.to_le_bytes());
        pack_stencil(FormatId::Z32_FLOAT_S8X24_UINT, 9, &mut texel).unwrap();
        assert_eq!(unpack_float_z(FormatId::Z32_FLOAT_S8X24_UINT, &texel), Ok(0.25));
        assert_eq!(&texel[4..], &0xFFFF_FF09_u32.to_le_bytes());
    }

    #[test]
    fn uint_depth_widening() {
        let texel = 0x0000_FFFF_u16.to_le_bytes();
        assert_eq!(unpack_uint_z(FormatId::Z_UNORM16, &texel), Ok(u32::MAX));
        let texel = 0xFFFF_FF00_u32.to_le_bytes();
        assert_eq!(unpack_uint_z(FormatId::Z24_UNORM_S8_UINT, &texel), Ok(u32::MAX));
        let texel = 0x00FF_FFFF_u32.to_le_bytes();
        assert_eq!(unpack_uint_z(FormatId::S8_UINT_Z24_UNORM, &texel), Ok(u32::MAX));

        let mut texel = [0; 2];
        pack_uint_z(FormatId::Z_UNORM16, 0x1234_5678, &mut texel).unwrap();
        assert_eq!(u16::from_le_bytes(texel), 0x1234);
    }

    #[test]
    fn packed_24_8_words() {
        let words = [0x1234_5678_u32];
        let mut texel = [0; 4];
        pack_uint_24_8_depth_stencil_row(FormatId::S8_UINT_Z24_UNORM, &words, &mut texel).unwrap();
        assert_eq!(u32::from_le_bytes(texel), 0x7812_3456);

        let mut out = [0];
        unpack_uint_24_8_depth_stencil_row(FormatId::S8_UINT_Z24_UNORM, &texel, &mut out).unwrap();
        assert_eq!(out, words);

        let mut texel = [0; 8];
        let words = [0xFFFF_FF42];
        pack_uint_24_8_depth_stencil_row(FormatId::Z32_FLOAT_S8X24_UINT, &words, &mut texel)
            .unwrap();
        let mut out = [Z32FloatS8X24::default()];
        unpack_float_32_uint_24_8_depth_stencil_row(FormatId::Z32_FLOAT_S8X24_UINT, &texel, &mut out)
            .unwrap();
        assert_eq!(out, [Z32FloatS8X24::new(1.0, 0x42)]);
    }

    #[test]
    fn missing_channels() {
        let mut texel = [0x55; 4];
        assert_eq!(
            pack_stencil(FormatId::Z_FLOAT32, 1, &mut texel),
            Err(CodecError::UnsupportedFormat(FormatId::Z_FLOAT32))
        );
        assert_eq!(
            pack_stencil(FormatId::Z24_UNORM_X8_UINT, 1, &mut texel),
            Err(CodecError::UnsupportedFormat(FormatId::Z24_UNORM_X8_UINT))
        );
        assert_eq!(
            pack_float_z(FormatId::S_UINT8, 1.0, &mut texel),
            Err(CodecError::UnsupportedFormat(FormatId::S_UINT8))
        );
        assert_eq!(
            pack_float_z(FormatId::RGBA_UNORM16, 1.0, &mut texel),
            Err(CodecError::UnsupportedFormat(FormatId::RGBA_UNORM16))
        );
        assert_eq!(texel, [0x55; 4]);
    }

    #[test]
    fn short_buffers() {
        let mut texel = [0; 3];
        assert_eq!(
            pack_float_z(FormatId::Z_FLOAT32, 1.0, &mut texel),
            Err(CodecError::UnexpectedBufferSize { expected: 4 })
        );
    }
}
