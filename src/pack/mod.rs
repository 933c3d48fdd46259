use crate::util::strided_len;
use crate::{cast, CodecError, FormatId};

mod mask;
mod uncompressed;

pub use mask::*;
use uncompressed::*;

/// See `unpack::Args`. Same hack, reversed direction.
pub(crate) struct Args<'a, 'b, T>(pub &'a [T], pub &'b mut [u8]);

/// Encodes `src.len()` canonical texels into a tightly packed `dst`.
///
/// `dst` must hold at least `src.len() * byte_size` bytes.
pub(crate) type PackFn<T> = fn(args: Args<T>);

#[derive(Clone, Copy)]
pub(crate) struct PackSet {
    pub float: PackFn<[f32; 4]>,
    pub ubyte: PackFn<[u8; 4]>,
}

/// Calls `f` for each canonical texel of `src` and stores the result in the
/// corresponding texel of `dst`.
#[inline(always)]
pub(crate) fn for_each_canonical<const N: usize, T: Copy>(
    src: &[T],
    dst: &mut [u8],
    f: impl Fn(T) -> [u8; N],
) {
    let texels = cast::as_array_chunks_mut::<N>(dst);
    debug_assert!(texels.len() >= src.len());
    for (texel, c) in texels.iter_mut().zip(src) {
        *texel = f(*c);
    }
}

pub(crate) const fn get_packers(format: FormatId) -> Option<PackSet> {
    use FormatId::*;

    Some(match format {
        // packed unorm
        A8B8G8R8_UNORM => A8B8G8R8_UNORM_SET,
        X8B8G8R8_UNORM => X8B8G8R8_UNORM_SET,
        R8G8B8A8_UNORM => R8G8B8A8_UNORM_SET,
        R8G8B8X8_UNORM => R8G8B8X8_UNORM_SET,
        B8G8R8A8_UNORM => B8G8R8A8_UNORM_SET,
        B8G8R8X8_UNORM => B8G8R8X8_UNORM_SET,
        A8R8G8B8_UNORM => A8R8G8B8_UNORM_SET,
        X8R8G8B8_UNORM => X8R8G8B8_UNORM_SET,
        L16A16_UNORM => L16A16_UNORM_SET,
        A16L16_UNORM => A16L16_UNORM_SET,
        B5G6R5_UNORM => B5G6R5_UNORM_SET,
        R5G6B5_UNORM => R5G6B5_UNORM_SET,
        B4G4R4A4_UNORM => B4G4R4A4_UNORM_SET,
        B4G4R4X4_UNORM => B4G4R4X4_UNORM_SET,
        A4R4G4B4_UNORM => A4R4G4B4_UNORM_SET,
        A1B5G5R5_UNORM => A1B5G5R5_UNORM_SET,
        B5G5R5A1_UNORM => B5G5R5A1_UNORM_SET,
        B5G5R5X1_UNORM => B5G5R5X1_UNORM_SET,
        A1R5G5B5_UNORM => A1R5G5B5_UNORM_SET,
        L8A8_UNORM => L8A8_UNORM_SET,
        A8L8_UNORM => A8L8_UNORM_SET,
        R8G8_UNORM => R8G8_UNORM_SET,
        G8R8_UNORM => G8R8_UNORM_SET,
        L4A4_UNORM => L4A4_UNORM_SET,
        B2G3R3_UNORM => B2G3R3_UNORM_SET,
        R16G16_UNORM => R16G16_UNORM_SET,
        G16R16_UNORM => G16R16_UNORM_SET,
        B10G10R10A2_UNORM => B10G10R10A2_UNORM_SET,
        B10G10R10X2_UNORM => B10G10R10X2_UNORM_SET,
        R10G10B10A2_UNORM => R10G10B10A2_UNORM_SET,

        DUDV8 => DUDV8_SET,

        // array unorm
        A_UNORM8 => A_UNORM8_SET,
        A_UNORM16 => A_UNORM16_SET,
        L_UNORM8 => L_UNORM8_SET,
        L_UNORM16 => L_UNORM16_SET,
        I_UNORM8 => I_UNORM8_SET,
        I_UNORM16 => I_UNORM16_SET,
        R_UNORM8 => R_UNORM8_SET,
        R_UNORM16 => R_UNORM16_SET,
        BGR_UNORM8 => BGR_UNORM8_SET,
        RGB_UNORM8 => RGB_UNORM8_SET,
        RGBA_UNORM16 => RGBA_UNORM16_SET,
        RGBX_UNORM16 => RGBX_UNORM16_SET,

        // snorm
        A8B8G8R8_SNORM => A8B8G8R8_SNORM_SET,
        X8B8G8R8_SNORM => X8B8G8R8_SNORM_SET,
        R8G8B8A8_SNORM => R8G8B8A8_SNORM_SET,
        R8G8B8X8_SNORM => R8G8B8X8_SNORM_SET,
        R16G16_SNORM => R16G16_SNORM_SET,
        G16R16_SNORM => G16R16_SNORM_SET,
        R8G8_SNORM => R8G8_SNORM_SET,
        G8R8_SNORM => G8R8_SNORM_SET,
        L8A8_SNORM => L8A8_SNORM_SET,
        A_SNORM8 => A_SNORM8_SET,
        A_SNORM16 => A_SNORM16_SET,
        L_SNORM8 => L_SNORM8_SET,
        L_SNORM16 => L_SNORM16_SET,
        I_SNORM8 => I_SNORM8_SET,
        I_SNORM16 => I_SNORM16_SET,
        R_SNORM8 => R_SNORM8_SET,
        R_SNORM16 => R_SNORM16_SET,
        LA_SNORM16 => LA_SNORM16_SET,
        RGB_SNORM16 => RGB_SNORM16_SET,
        RGBA_SNORM16 => RGBA_SNORM16_SET,
        RGBX_SNORM16 => RGBX_SNORM16_SET,

        // srgb
        A8B8G8R8_SRGB => A8B8G8R8_SRGB_SET,
        B8G8R8A8_SRGB => B8G8R8A8_SRGB_SET,
        B8G8R8X8_SRGB => B8G8R8X8_SRGB_SET,
        R8G8B8A8_SRGB => R8G8B8A8_SRGB_SET,
        R8G8B8X8_SRGB => R8G8B8X8_SRGB_SET,
        L8A8_SRGB => L8A8_SRGB_SET,
        L_SRGB8 => L_SRGB8_SET,
        BGR_SRGB8 => BGR_SRGB8_SET,

        // float
        R9G9B9E5_FLOAT => R9G9B9E5_FLOAT_SET,
        R11G11B10_FLOAT => R11G11B10_FLOAT_SET,
        A_FLOAT16 => A_FLOAT16_SET,
        A_FLOAT32 => A_FLOAT32_SET,
        L_FLOAT16 => L_FLOAT16_SET,
        L_FLOAT32 => L_FLOAT32_SET,
        LA_FLOAT16 => LA_FLOAT16_SET,
        LA_FLOAT32 => LA_FLOAT32_SET,
        I_FLOAT16 => I_FLOAT16_SET,
        I_FLOAT32 => I_FLOAT32_SET,
        R_FLOAT16 => R_FLOAT16_SET,
        R_FLOAT32 => R_FLOAT32_SET,
        RG_FLOAT16 => RG_FLOAT16_SET,
        RG_FLOAT32 => RG_FLOAT32_SET,
        RGB_FLOAT16 => RGB_FLOAT16_SET,
        RGB_FLOAT32 => RGB_FLOAT32_SET,
        RGBA_FLOAT16 => RGBA_FLOAT16_SET,
        RGBA_FLOAT32 => RGBA_FLOAT32_SET,
        RGBX_FLOAT16 => RGBX_FLOAT16_SET,
        RGBX_FLOAT32 => RGBX_FLOAT32_SET,

        // Depth/stencil goes through the depth/stencil codec. Integer formats
        // only have the uint path.
        _ => return None,
    })
}

pub(crate) const fn get_uint_packer(format: FormatId) -> Option<PackFn<[u32; 4]>> {
    use FormatId::*;

    Some(match format {
        B10G10R10A2_UINT => B10G10R10A2_UINT_PACK,
        R10G10B10A2_UINT => R10G10B10A2_UINT_PACK,
        A_UINT8 => A_UINT8_PACK,
        A_UINT16 => A_UINT16_PACK,
        A_UINT32 => A_UINT32_PACK,
        A_SINT8 => A_SINT8_PACK,
        A_SINT16 => A_SINT16_PACK,
        A_SINT32 => A_SINT32_PACK,
        I_UINT8 => I_UINT8_PACK,
        I_UINT16 => I_UINT16_PACK,
        I_UINT32 => I_UINT32_PACK,
        I_SINT8 => I_SINT8_PACK,
        I_SINT16 => I_SINT16_PACK,
        I_SINT32 => I_SINT32_PACK,
        L_UINT8 => L_UINT8_PACK,
        L_UINT16 => L_UINT16_PACK,
        L_UINT32 => L_UINT32_PACK,
        L_SINT8 => L_SINT8_PACK,
        L_SINT16 => L_SINT16_PACK,
        L_SINT32 => L_SINT32_PACK,
        LA_UINT8 => LA_UINT8_PACK,
        LA_UINT16 => LA_UINT16_PACK,
        LA_UINT32 => LA_UINT32_PACK,
        LA_SINT8 => LA_SINT8_PACK,
        LA_SINT16 => LA_SINT16_PACK,
        LA_SINT32 => LA_SINT32_PACK,
        R_UINT8 => R_UINT8_PACK,
        R_UINT16 => R_UINT16_PACK,
        R_UINT32 => R_UINT32_PACK,
        R_SINT8 => R_SINT8_PACK,
        R_SINT16 => R_SINT16_PACK,
        R_SINT32 => R_SINT32_PACK,
        RG_UINT8 => RG_UINT8_PACK,
        RG_UINT16 => RG_UINT16_PACK,
        RG_UINT32 => RG_UINT32_PACK,
        RG_SINT8 => RG_SINT8_PACK,
        RG_SINT16 => RG_SINT16_PACK,
        RG_SINT32 => RG_SINT32_PACK,
        RGB_UINT8 => RGB_UINT8_PACK,
        RGB_UINT16 => RGB_UINT16_PACK,
        RGB_UINT32 => RGB_UINT32_PACK,
        RGB_SINT8 => RGB_SINT8_PACK,
        RGB_SINT16 => RGB_SINT16_PACK,
        RGB_SINT32 => RGB_SINT32_PACK,
        RGBA_UINT8 => RGBA_UINT8_PACK,
        RGBA_UINT16 => RGBA_UINT16_PACK,
        RGBA_UINT32 => RGBA_UINT32_PACK,
        RGBA_SINT8 => RGBA_SINT8_PACK,
        RGBA_SINT16 => RGBA_SINT16_PACK,
        RGBA_SINT32 => RGBA_SINT32_PACK,
        RGBX_UINT8 => RGBX_UINT8_PACK,
        RGBX_UINT16 => RGBX_UINT16_PACK,
        RGBX_UINT32 => RGBX_UINT32_PACK,
        RGBX_SINT8 => RGBX_SINT8_PACK,
        RGBX_SINT16 => RGBX_SINT16_PACK,
        RGBX_SINT32 => RGBX_SINT32_PACK,
        _ => return None,
    })
}

pub(crate) fn packers(format: FormatId) -> Result<PackSet, CodecError> {
    get_packers(format).ok_or_else(|| {
        log::warn!("Cannot pack {:?}: format is not supported", format);
        CodecError::UnsupportedFormat(format)
    })
}
pub(crate) fn uint_packer(format: FormatId) -> Result<PackFn<[u32; 4]>, CodecError> {
    get_uint_packer(format).ok_or_else(|| {
        log::warn!("Cannot pack {:?} as integers: not an integer format", format);
        CodecError::UnsupportedFormat(format)
    })
}

/// Validates the buffers of a strided row and runs `pack_fn` over it.
///
/// Nothing is written if validation fails.
pub(crate) fn pack_row_with<T>(
    format: FormatId,
    pack_fn: PackFn<T>,
    src: &[T],
    dst: &mut [u8],
    dst_stride: usize,
) -> Result<(), CodecError> {
    let byte_size = format.byte_size();
    if dst_stride < byte_size {
        return Err(CodecError::StrideTooSmall {
            required_minimum: byte_size,
        });
    }
    let expected = strided_len(src.len(), dst_stride, byte_size).ok_or(
        CodecError::UnexpectedBufferSize {
            expected: usize::MAX,
        },
    )?;
    if dst.len() < expected {
        return Err(CodecError::UnexpectedBufferSize { expected });
    }

    if dst_stride == byte_size {
        pack_fn(Args(src, &mut dst[..expected]));
    } else {
        log::trace!(
            "Packing {} texels of {:?} with stride {}",
            src.len(),
            format,
            dst_stride
        );
        for (i, c) in src.iter().enumerate() {
            let start = i * dst_stride;
            pack_fn(Args(
                std::slice::from_ref(c),
                &mut dst[start..start + byte_size],
            ));
        }
    }
    Ok(())
}

/// Packs one RGBA float texel into the first `byte_size` bytes of `dst`.
///
/// Values outside the range of the format are clamped. Channels the format
/// does not store are dropped, and padding is written as zero. Luminance and
/// intensity are taken from the red channel.
///
/// ```
/// use texel_codec::{pack_float_rgba, FormatId};
///
/// let mut texel = [0; 4];
/// pack_float_rgba(FormatId::A8B8G8R8_UNORM, &[1.0, 0.5, 0.0, 1.0], &mut texel).unwrap();
/// assert_eq!(u32::from_le_bytes(texel), 0xFF00_80FF);
/// ```
pub fn pack_float_rgba(format: FormatId, src: &[f32; 4], dst: &mut [u8]) -> Result<(), CodecError> {
    pack_float_rgba_row(format, std::slice::from_ref(src), dst, format.byte_size())
}

/// Packs one RGBA byte texel into the first `byte_size` bytes of `dst`.
pub fn pack_ubyte_rgba(format: FormatId, src: &[u8; 4], dst: &mut [u8]) -> Result<(), CodecError> {
    pack_ubyte_rgba_row(format, std::slice::from_ref(src), dst, format.byte_size())
}

/// Packs one texel of raw integers into a pure-integer format.
///
/// Unsigned channels clamp to their maximum. Signed channels read the
/// values as `i32` and clamp to their range.
pub fn pack_uint_rgba(format: FormatId, src: &[u32; 4], dst: &mut [u8]) -> Result<(), CodecError> {
    pack_uint_rgba_row(format, std::slice::from_ref(src), dst, format.byte_size())
}

/// Packs `src.len()` texels into `dst`, placing them `dst_stride` bytes
/// apart. Bytes between texels are left untouched.
pub fn pack_float_rgba_row(
    format: FormatId,
    src: &[[f32; 4]],
    dst: &mut [u8],
    dst_stride: usize,
) -> Result<(), CodecError> {
    let set = packers(format)?;
    pack_row_with(format, set.float, src, dst, dst_stride)
}

/// Packs `src.len()` texels into `dst`, placing them `dst_stride` bytes
/// apart. Bytes between texels are left untouched.
pub fn pack_ubyte_rgba_row(
    format: FormatId,
    src: &[[u8; 4]],
    dst: &mut [u8],
    dst_stride: usize,
) -> Result<(), CodecError> {
    let set = packers(format)?;
    pack_row_with(format, set.ubyte, src, dst, dst_stride)
}

/// Packs `src.len()` integer texels into `dst`, `dst_stride` bytes apart.
pub fn pack_uint_rgba_row(
    format: FormatId,
    src: &[[u32; 4]],
    dst: &mut [u8],
    dst_stride: usize,
) -> Result<(), CodecError> {
    let pack_fn = uint_packer(format)?;
    pack_row_with(format, pack_fn, src, dst, dst_stride)
}
