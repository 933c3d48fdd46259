use crate::util::strided_len;
use crate::{cast, CodecError, FormatId};

mod uncompressed;

use uncompressed::*;

/// This is a silly hack to make [UnpackFn] `const`-compatible on MSRV.
///
/// `const fn`s on older compilers reject function pointer types with mutable
/// references in their signature, even though the pointers are never called
/// in `const`. Wrapping the references in a struct hides them.
pub(crate) struct Args<'a, 'b, T>(pub &'a [u8], pub &'b mut [T]);

/// Decodes `dst.len()` texels from a tightly packed `src`.
///
/// `src` must hold at least `dst.len() * byte_size` bytes.
pub(crate) type UnpackFn<T> = fn(args: Args<T>);

#[derive(Clone, Copy)]
pub(crate) struct UnpackSet {
    pub float: UnpackFn<[f32; 4]>,
    pub ubyte: UnpackFn<[u8; 4]>,
}

/// Calls `f` for each whole texel of `src` and stores the result in `dst`.
#[inline(always)]
pub(crate) fn for_each_texel<const N: usize, T>(
    src: &[u8],
    dst: &mut [T],
    f: impl Fn([u8; N]) -> T,
) {
    let texels = cast::as_array_chunks::<N>(src);
    debug_assert!(texels.len() >= dst.len());
    for (texel, out) in texels.iter().zip(dst.iter_mut()) {
        *out = f(*texel);
    }
}

pub(crate) const fn get_unpackers(format: FormatId) -> Option<UnpackSet> {
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

        // depth/stencil as color
        S8_UINT_Z24_UNORM | X8_UINT_Z24_UNORM => S8_UINT_Z24_UNORM_SET,
        Z24_UNORM_S8_UINT | Z24_UNORM_X8_UINT => Z24_UNORM_S8_UINT_SET,
        Z_UNORM16 => Z_UNORM16_SET,
        Z_UNORM32 => Z_UNORM32_SET,
        Z_FLOAT32 => Z_FLOAT32_SET,
        Z32_FLOAT_S8X24_UINT => Z32_FLOAT_S8X24_UINT_SET,
        S_UINT8 => S_UINT8_SET,

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

        // integer
        B10G10R10A2_UINT => B10G10R10A2_UINT_SET.color,
        R10G10B10A2_UINT => R10G10B10A2_UINT_SET.color,
        A_UINT8 => A_UINT8_SET.color,
        A_UINT16 => A_UINT16_SET.color,
        A_UINT32 => A_UINT32_SET.color,
        A_SINT8 => A_SINT8_SET.color,
        A_SINT16 => A_SINT16_SET.color,
        A_SINT32 => A_SINT32_SET.color,
        I_UINT8 => I_UINT8_SET.color,
        I_UINT16 => I_UINT16_SET.color,
        I_UINT32 => I_UINT32_SET.color,
        I_SINT8 => I_SINT8_SET.color,
        I_SINT16 => I_SINT16_SET.color,
        I_SINT32 => I_SINT32_SET.color,
        L_UINT8 => L_UINT8_SET.color,
        L_UINT16 => L_UINT16_SET.color,
        L_UINT32 => L_UINT32_SET.color,
        L_SINT8 => L_SINT8_SET.color,
        L_SINT16 => L_SINT16_SET.color,
        L_SINT32 => L_SINT32_SET.color,
        LA_UINT8 => LA_UINT8_SET.color,
        LA_UINT16 => LA_UINT16_SET.color,
        LA_UINT32 => LA_UINT32_SET.color,
        LA_SINT8 => LA_SINT8_SET.color,
        LA_SINT16 => LA_SINT16_SET.color,
        LA_SINT32 => LA_SINT32_SET.color,
        R_UINT8 => R_UINT8_SET.color,
        R_UINT16 => R_UINT16_SET.color,
        R_UINT32 => R_UINT32_SET.color,
        R_SINT8 => R_SINT8_SET.color,
        R_SINT16 => R_SINT16_SET.color,
        R_SINT32 => R_SINT32_SET.color,
        RG_UINT8 => RG_UINT8_SET.color,
        RG_UINT16 => RG_UINT16_SET.color,
        RG_UINT32 => RG_UINT32_SET.color,
        RG_SINT8 => RG_SINT8_SET.color,
        RG_SINT16 => RG_SINT16_SET.color,
        RG_SINT32 => RG_SINT32_SET.color,
        RGB_UINT8 => RGB_UINT8_SET.color,
        RGB_UINT16 => RGB_UINT16_SET.color,
        RGB_UINT32 => RGB_UINT32_SET.color,
        RGB_SINT8 => RGB_SINT8_SET.color,
        RGB_SINT16 => RGB_SINT16_SET.color,
        RGB_SINT32 => RGB_SINT32_SET.color,
        RGBA_UINT8 => RGBA_UINT8_SET.color,
        RGBA_UINT16 => RGBA_UINT16_SET.color,
        RGBA_UINT32 => RGBA_UINT32_SET.color,
        RGBA_SINT8 => RGBA_SINT8_SET.color,
        RGBA_SINT16 => RGBA_SINT16_SET.color,
        RGBA_SINT32 => RGBA_SINT32_SET.color,
        RGBX_UINT8 => RGBX_UINT8_SET.color,
        RGBX_UINT16 => RGBX_UINT16_SET.color,
        RGBX_UINT32 => RGBX_UINT32_SET.color,
        RGBX_SINT8 => RGBX_SINT8_SET.color,
        RGBX_SINT16 => RGBX_SINT16_SET.color,
        RGBX_SINT32 => RGBX_SINT32_SET.color,

        // YCbCr and compressed formats
        _ => return None,
    })
}

pub(crate) const fn get_uint_unpacker(format: FormatId) -> Option<UnpackFn<[u32; 4]>> {
    use FormatId::*;

    Some(match format {
        B10G10R10A2_UINT => B10G10R10A2_UINT_SET.uint,
        R10G10B10A2_UINT => R10G10B10A2_UINT_SET.uint,
        A_UINT8 => A_UINT8_SET.uint,
        A_UINT16 => A_UINT16_SET.uint,
        A_UINT32 => A_UINT32_SET.uint,
        A_SINT8 => A_SINT8_SET.uint,
        A_SINT16 => A_SINT16_SET.uint,
        A_SINT32 => A_SINT32_SET.uint,
        I_UINT8 => I_UINT8_SET.uint,
        I_UINT16 => I_UINT16_SET.uint,
        I_UINT32 => I_UINT32_SET.uint,
        I_SINT8 => I_SINT8_SET.uint,
        I_SINT16 => I_SINT16_SET.uint,
        I_SINT32 => I_SINT32_SET.uint,
        L_UINT8 => L_UINT8_SET.uint,
        L_UINT16 => L_UINT16_SET.uint,
        L_UINT32 => L_UINT32_SET.uint,
        L_SINT8 => L_SINT8_SET.uint,
        L_SINT16 => L_SINT16_SET.uint,
        L_SINT32 => L_SINT32_SET.uint,
        LA_UINT8 => LA_UINT8_SET.uint,
        LA_UINT16 => LA_UINT16_SET.uint,
        LA_UINT32 => LA_UINT32_SET.uint,
        LA_SINT8 => LA_SINT8_SET.uint,
        LA_SINT16 => LA_SINT16_SET.uint,
        LA_SINT32 => LA_SINT32_SET.uint,
        R_UINT8 => R_UINT8_SET.uint,
        R_UINT16 => R_UINT16_SET.uint,
        R_UINT32 => R_UINT32_SET.uint,
        R_SINT8 => R_SINT8_SET.uint,
        R_SINT16 => R_SINT16_SET.uint,
        R_SINT32 => R_SINT32_SET.uint,
        RG_UINT8 => RG_UINT8_SET.uint,
        RG_UINT16 => RG_UINT16_SET.uint,
        RG_UINT32 => RG_UINT32_SET.uint,
        RG_SINT8 => RG_SINT8_SET.uint,
        RG_SINT16 => RG_SINT16_SET.uint,
        RG_SINT32 => RG_SINT32_SET.uint,
        RGB_UINT8 => RGB_UINT8_SET.uint,
        RGB_UINT16 => RGB_UINT16_SET.uint,
        RGB_UINT32 => RGB_UINT32_SET.uint,
        RGB_SINT8 => RGB_SINT8_SET.uint,
        RGB_SINT16 => RGB_SINT16_SET.uint,
        RGB_SINT32 => RGB_SINT32_SET.uint,
        RGBA_UINT8 => RGBA_UINT8_SET.uint,
        RGBA_UINT16 => RGBA_UINT16_SET.uint,
        RGBA_UINT32 => RGBA_UINT32_SET.uint,
        RGBA_SINT8 => RGBA_SINT8_SET.uint,
        RGBA_SINT16 => RGBA_SINT16_SET.uint,
        RGBA_SINT32 => RGBA_SINT32_SET.uint,
        RGBX_UINT8 => RGBX_UINT8_SET.uint,
        RGBX_UINT16 => RGBX_UINT16_SET.uint,
        RGBX_UINT32 => RGBX_UINT32_SET.uint,
        RGBX_SINT8 => RGBX_SINT8_SET.uint,
        RGBX_SINT16 => RGBX_SINT16_SET.uint,
        RGBX_SINT32 => RGBX_SINT32_SET.uint,
        _ => return None,
    })
}

pub(crate) fn unpackers(format: FormatId) -> Result<UnpackSet, CodecError> {
    get_unpackers(format).ok_or_else(|| {
        log::warn!("Cannot unpack {:?}: format is not supported", format);
        CodecError::UnsupportedFormat(format)
    })
}
pub(crate) fn uint_unpacker(format: FormatId) -> Result<UnpackFn<[u32; 4]>, CodecError> {
    get_uint_unpacker(format).ok_or_else(|| {
        log::warn!("Cannot unpack {:?} as integers: not an integer format", format);
        CodecError::UnsupportedFormat(format)
    })
}

/// Validates the buffers of a strided row and runs `unpack_fn` over it.
pub(crate) fn unpack_row_with<T>(
    format: FormatId,
    unpack_fn: UnpackFn<T>,
    src: &[u8],
    src_stride: usize,
    dst: &mut [T],
) -> Result<(), CodecError> {
    let byte_size = format.byte_size();
    if src_stride < byte_size {
        return Err(CodecError::StrideTooSmall {
            required_minimum: byte_size,
        });
    }
    let expected = strided_len(dst.len(), src_stride, byte_size).ok_or(
        CodecError::UnexpectedBufferSize {
            expected: usize::MAX,
        },
    )?;
    if src.len() < expected {
        return Err(CodecError::UnexpectedBufferSize { expected });
    }

    if src_stride == byte_size {
        unpack_fn(Args(&src[..expected], dst));
    } else {
        log::trace!(
            "Unpacking {} texels of {:?} with stride {}",
            dst.len(),
            format,
            src_stride
        );
        for (i, out) in dst.iter_mut().enumerate() {
            let start = i * src_stride;
            unpack_fn(Args(
                &src[start..start + byte_size],
                std::slice::from_mut(out),
            ));
        }
    }
    Ok(())
}

/// Unpacks one texel to RGBA floats.
///
/// UNORM channels map to `[0, 1]`, SNORM channels to `[-1, 1]`, and integer
/// channels to their value. Channels the format does not store are 0 for
/// RGB and 1 for alpha. Depth formats unpack to `(z, z, z, 1)`.
///
/// ```
/// use texel_codec::{unpack_float_rgba, FormatId};
///
/// let rgba = unpack_float_rgba(FormatId::R5G6B5_UNORM, &0xF800_u16.to_le_bytes()).unwrap();
/// assert_eq!(rgba, [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn unpack_float_rgba(format: FormatId, src: &[u8]) -> Result<[f32; 4], CodecError> {
    let mut out = [[0.0; 4]];
    unpack_float_rgba_row(format, src, format.byte_size(), &mut out)?;
    Ok(out[0])
}

/// Unpacks one texel to RGBA bytes.
///
/// UNORM channels are expanded exactly. Other channels are clamped to
/// `[0, 1]` and rounded.
pub fn unpack_ubyte_rgba(format: FormatId, src: &[u8]) -> Result<[u8; 4], CodecError> {
    let mut out = [[0; 4]];
    unpack_ubyte_rgba_row(format, src, format.byte_size(), &mut out)?;
    Ok(out[0])
}

/// Unpacks one texel of a pure-integer format to raw RGBA integers.
///
/// Signed formats return the two's complement bits of the `i32` value. A
/// missing alpha channel is 1.
pub fn unpack_uint_rgba(format: FormatId, src: &[u8]) -> Result<[u32; 4], CodecError> {
    let mut out = [[0; 4]];
    unpack_uint_rgba_row(format, src, format.byte_size(), &mut out)?;
    Ok(out[0])
}

/// Unpacks `dst.len()` texels that are `src_stride` bytes apart.
pub fn unpack_float_rgba_row(
    format: FormatId,
    src: &[u8],
    src_stride: usize,
    dst: &mut [[f32; 4]],
) -> Result<(), CodecError> {
    let set = unpackers(format)?;
    unpack_row_with(format, set.float, src, src_stride, dst)
}

/// Unpacks `dst.len()` texels that are `src_stride` bytes apart.
pub fn unpack_ubyte_rgba_row(
    format: FormatId,
    src: &[u8],
    src_stride: usize,
    dst: &mut [[u8; 4]],
) -> Result<(), CodecError> {
    let set = unpackers(format)?;
    unpack_row_with(format, set.ubyte, src, src_stride, dst)
}

/// Unpacks `dst.len()` texels of a pure-integer format that are
/// `src_stride` bytes apart.
pub fn unpack_uint_rgba_row(
    format: FormatId,
    src: &[u8],
    src_stride: usize,
    dst: &mut [[u32; 4]],
) -> Result<(), CodecError> {
    let unpack_fn = uint_unpacker(format)?;
    unpack_row_with(format, unpack_fn, src, src_stride, dst)
}
