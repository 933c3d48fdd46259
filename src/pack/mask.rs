use crate::{cast, ChannelMask, CodecError, FormatId, NumericClass};

use super::packers;

/// Packs a write mask for the given channels.
///
/// The result has all bits of the masked channels set and all other bits
/// cleared, so it can be used to merge a texel into existing data with
/// `(old & !mask) | (new & mask)`. Channels the format does not store have
/// no bits, and padding is never part of the mask.
///
/// Only UNORM, SNORM, and FLOAT formats have a mask. For SNORM and FLOAT
/// formats, all channels must be stored in units of 8, 16, or 32 bits.
///
/// ```
/// use texel_codec::{pack_color_mask, ChannelMask, FormatId};
///
/// let mut mask = [0; 2];
/// pack_color_mask(FormatId::R5G6B5_UNORM, ChannelMask::G, &mut mask).unwrap();
/// assert_eq!(u16::from_le_bytes(mask), 0x07E0);
/// ```
pub fn pack_color_mask(
    format: FormatId,
    mask: impl Into<ChannelMask>,
    dst: &mut [u8],
) -> Result<(), CodecError> {
    let mask = mask.into();
    let set = packers(format)?;

    let byte_size = format.byte_size();
    if dst.len() < byte_size {
        return Err(CodecError::UnexpectedBufferSize {
            expected: byte_size,
        });
    }

    let (value, unit_bits) = match format.numeric_class() {
        NumericClass::Unorm => (1.0, None),
        NumericClass::Snorm | NumericClass::Float => (-1.0, Some(format.max_channel_bits())),
        _ => {
            log::warn!("Cannot pack a color mask for {:?}", format);
            return Err(CodecError::UnsupportedFormat(format));
        }
    };
    let rgba = mask.to_array().map(|on| if on { value } else { 0.0 });

    let mut texel = [0_u8; 16];
    let texel = &mut texel[..byte_size];
    (set.float)(super::Args(&[rgba], &mut *texel));

    // -1.0 does not have all bits set, so every storage unit that holds a
    // masked channel is filled.
    match unit_bits {
        None => {}
        Some(8) => fill_nonzero_units::<1>(texel),
        Some(16) => fill_nonzero_units::<2>(texel),
        Some(32) => fill_nonzero_units::<4>(texel),
        Some(bits) => {
            log::warn!(
                "Cannot pack a color mask for {:?}: {}-bit channels",
                format,
                bits
            );
            return Err(CodecError::UnsupportedFormat(format));
        }
    }

    dst[..byte_size].copy_from_slice(texel);
    Ok(())
}

fn fill_nonzero_units<const N: usize>(texel: &mut [u8]) {
    for unit in cast::as_array_chunks_mut::<N>(texel) {
        if unit.iter().any(|&b| b != 0) {
            *unit = [0xFF; N];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(format: FormatId, mask: ChannelMask) -> Vec<u8> {
        let mut out = vec![0; format.byte_size()];
        pack_color_mask(format, mask, &mut out).unwrap();
        out
    }

    #[test]
    fn unorm_masks() {
        let m = mask_of(FormatId::A8B8G8R8_UNORM, ChannelMask::R | ChannelMask::A);
        assert_eq!(m, 0xFF00_00FF_u32.to_le_bytes());
        let m = mask_of(FormatId::B10G10R10A2_UNORM, ChannelMask::A);
        assert_eq!(m, 0x0000_0003_u32.to_le_bytes());
        let m = mask_of(FormatId::X8B8G8R8_UNORM, ChannelMask::RGBA);
        assert_eq!(m, 0x00FF_FFFF_u32.to_le_bytes());
    }

    #[test]
    fn signed_and_float_masks() {
        let m = mask_of(FormatId::R8G8B8A8_SNORM, ChannelMask::G);
        assert_eq!(m, 0x00FF_0000_u32.to_le_bytes());
        let m = mask_of(FormatId::RGBA_FLOAT16, ChannelMask::R | ChannelMask::B);
        assert_eq!(m, [0xFF, 0xFF, 0, 0, 0xFF, 0xFF, 0, 0]);
        let m = mask_of(FormatId::R_FLOAT32, ChannelMask::RGBA);
        assert_eq!(m, [0xFF; 4]);
    }

    #[test]
    fn odd_unit_sizes_are_unsupported() {
        let mut dst = [0x55; 4];
        let result = pack_color_mask(FormatId::R11G11B10_FLOAT, ChannelMask::R, &mut dst);
        assert_eq!(
            result,
            Err(CodecError::UnsupportedFormat(FormatId::R11G11B10_FLOAT))
        );
        assert_eq!(dst, [0x55; 4]);
    }

    #[test]
    fn bool_arrays() {
        let mut dst = [0; 2];
        pack_color_mask(FormatId::R5G6B5_UNORM, [true, false, true, false], &mut dst).unwrap();
        assert_eq!(u16::from_le_bytes(dst), 0xF81F);
    }
}
