use crate::{BaseFormat, ChannelBits, FormatFlags, FormatId, NumericClass};

/// Static metadata of one [`FormatId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    pub id: FormatId,
    /// The canonical name, e.g. `"R5G6B5_UNORM"`.
    pub name: &'static str,
    pub base_format: BaseFormat,
    pub class: NumericClass,
    pub bits: ChannelBits,
    pub block_width: u8,
    pub block_height: u8,
    /// Bytes per texel, or per block for compressed formats.
    pub bytes_per_block: u8,
    pub flags: FormatFlags,
}

/// Returns the descriptor of the given format.
pub fn describe(format: FormatId) -> &'static FormatDescriptor {
    &DESCRIPTORS[format as usize]
}

/// Returns the descriptor of the format with the given raw id.
///
/// Unknown ids return the descriptor of [`FormatId::NONE`].
pub fn describe_raw(raw: u32) -> &'static FormatDescriptor {
    match FormatId::try_from(raw) {
        Ok(format) => describe(format),
        Err(_) => {
            log::warn!("Unknown format id {}, using NONE", raw);
            describe(FormatId::NONE)
        }
    }
}

macro_rules! d {
    (
        $id:ident, $base:ident, $class:ident,
        [$r:literal, $g:literal, $b:literal, $a:literal, $l:literal, $i:literal, $z:literal, $s:literal],
        ($bw:literal, $bh:literal, $bytes:literal),
        $flags:expr
    ) => {
        FormatDescriptor {
            id: FormatId::$id,
            name: stringify!($id),
            base_format: BaseFormat::$base,
            class: NumericClass::$class,
            bits: ChannelBits {
                red: $r,
                green: $g,
                blue: $b,
                alpha: $a,
                luminance: $l,
                intensity: $i,
                depth: $z,
                stencil: $s,
            },
            block_width: $bw,
            block_height: $bh,
            bytes_per_block: $bytes,
            flags: $flags,
        }
    };
}

static DESCRIPTORS: [FormatDescriptor; FormatId::COUNT] = FORMAT_TABLE;

/// Indexed by the discriminant of [`FormatId`].
pub(crate) const FORMAT_TABLE: [FormatDescriptor; FormatId::COUNT] = [
    d!(NONE, None, None, [0, 0, 0, 0, 0, 0, 0, 0], (1, 1, 0), FormatFlags::UNSUPPORTED),
    d!(A8B8G8R8_UNORM, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(X8B8G8R8_UNORM, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R8G8B8A8_UNORM, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R8G8B8X8_UNORM, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(B8G8R8A8_UNORM, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(B8G8R8X8_UNORM, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(A8R8G8B8_UNORM, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(X8R8G8B8_UNORM, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(L16A16_UNORM, LuminanceAlpha, Unorm, [0, 0, 0, 16, 16, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(A16L16_UNORM, LuminanceAlpha, Unorm, [0, 0, 0, 16, 16, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(B5G6R5_UNORM, Rgb, Unorm, [5, 6, 5, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(R5G6B5_UNORM, Rgb, Unorm, [5, 6, 5, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(B4G4R4A4_UNORM, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(B4G4R4X4_UNORM, Rgb, Unorm, [4, 4, 4, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(A4R4G4B4_UNORM, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(A1B5G5R5_UNORM, Rgba, Unorm, [5, 5, 5, 1, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(B5G5R5A1_UNORM, Rgba, Unorm, [5, 5, 5, 1, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(B5G5R5X1_UNORM, Rgb, Unorm, [5, 5, 5, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(A1R5G5B5_UNORM, Rgba, Unorm, [5, 5, 5, 1, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(L8A8_UNORM, LuminanceAlpha, Unorm, [0, 0, 0, 8, 8, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(A8L8_UNORM, LuminanceAlpha, Unorm, [0, 0, 0, 8, 8, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(R8G8_UNORM, Rg, Unorm, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(G8R8_UNORM, Rg, Unorm, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(L4A4_UNORM, LuminanceAlpha, Unorm, [0, 0, 0, 4, 4, 0, 0, 0], (1, 1, 1), FormatFlags::PACKED),
    d!(B2G3R3_UNORM, Rgb, Unorm, [3, 3, 2, 0, 0, 0, 0, 0], (1, 1, 1), FormatFlags::PACKED),
    d!(R16G16_UNORM, Rg, Unorm, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(G16R16_UNORM, Rg, Unorm, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(B10G10R10A2_UNORM, Rgba, Unorm, [10, 10, 10, 2, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(B10G10R10X2_UNORM, Rgb, Unorm, [10, 10, 10, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R10G10B10A2_UNORM, Rgba, Unorm, [10, 10, 10, 2, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(S8_UINT_Z24_UNORM, DepthStencil, Unorm, [0, 0, 0, 0, 0, 0, 24, 8], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::DEPTH_STENCIL)),
    d!(X8_UINT_Z24_UNORM, DepthComponent, Unorm, [0, 0, 0, 0, 0, 0, 24, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(Z24_UNORM_S8_UINT, DepthStencil, Unorm, [0, 0, 0, 0, 0, 0, 24, 8], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::DEPTH_STENCIL)),
    d!(Z24_UNORM_X8_UINT, DepthComponent, Unorm, [0, 0, 0, 0, 0, 0, 24, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(YCBCR, YCbCr, Unorm, [0, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED.union(FormatFlags::UNSUPPORTED)),
    d!(YCBCR_REV, YCbCr, Unorm, [0, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED.union(FormatFlags::UNSUPPORTED)),
    d!(DUDV8, DuDv, Snorm, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(A_UNORM8, Alpha, Unorm, [0, 0, 0, 8, 0, 0, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(A_UNORM16, Alpha, Unorm, [0, 0, 0, 16, 0, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(L_UNORM8, Luminance, Unorm, [0, 0, 0, 0, 8, 0, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(L_UNORM16, Luminance, Unorm, [0, 0, 0, 0, 16, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(I_UNORM8, Intensity, Unorm, [0, 0, 0, 0, 0, 8, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(I_UNORM16, Intensity, Unorm, [0, 0, 0, 0, 0, 16, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(R_UNORM8, Red, Unorm, [8, 0, 0, 0, 0, 0, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(R_UNORM16, Red, Unorm, [16, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(BGR_UNORM8, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 3), FormatFlags::empty()),
    d!(RGB_UNORM8, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 3), FormatFlags::empty()),
    d!(RGBA_UNORM16, Rgba, Unorm, [16, 16, 16, 16, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(RGBX_UNORM16, Rgb, Unorm, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(Z_UNORM16, DepthComponent, Unorm, [0, 0, 0, 0, 0, 0, 16, 0], (1, 1, 2), FormatFlags::empty()),
    d!(Z_UNORM32, DepthComponent, Unorm, [0, 0, 0, 0, 0, 0, 32, 0], (1, 1, 4), FormatFlags::empty()),
    d!(S_UINT8, StencilIndex, Uint, [0, 0, 0, 0, 0, 0, 0, 8], (1, 1, 1), FormatFlags::empty()),
    d!(A8B8G8R8_SNORM, Rgba, Snorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(X8B8G8R8_SNORM, Rgb, Snorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R8G8B8A8_SNORM, Rgba, Snorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R8G8B8X8_SNORM, Rgb, Snorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R16G16_SNORM, Rg, Snorm, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(G16R16_SNORM, Rg, Snorm, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R8G8_SNORM, Rg, Snorm, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(G8R8_SNORM, Rg, Snorm, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(L8A8_SNORM, LuminanceAlpha, Snorm, [0, 0, 0, 8, 8, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED),
    d!(A_SNORM8, Alpha, Snorm, [0, 0, 0, 8, 0, 0, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(A_SNORM16, Alpha, Snorm, [0, 0, 0, 16, 0, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(L_SNORM8, Luminance, Snorm, [0, 0, 0, 0, 8, 0, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(L_SNORM16, Luminance, Snorm, [0, 0, 0, 0, 16, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(I_SNORM8, Intensity, Snorm, [0, 0, 0, 0, 0, 8, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(I_SNORM16, Intensity, Snorm, [0, 0, 0, 0, 0, 16, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(R_SNORM8, Red, Snorm, [8, 0, 0, 0, 0, 0, 0, 0], (1, 1, 1), FormatFlags::empty()),
    d!(R_SNORM16, Red, Snorm, [16, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(LA_SNORM16, LuminanceAlpha, Snorm, [0, 0, 0, 16, 16, 0, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(RGB_SNORM16, Rgb, Snorm, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 6), FormatFlags::empty()),
    d!(RGBA_SNORM16, Rgba, Snorm, [16, 16, 16, 16, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(RGBX_SNORM16, Rgb, Snorm, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(A8B8G8R8_SRGB, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::SRGB)),
    d!(B8G8R8A8_SRGB, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::SRGB)),
    d!(B8G8R8X8_SRGB, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::SRGB)),
    d!(R8G8B8A8_SRGB, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::SRGB)),
    d!(R8G8B8X8_SRGB, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::SRGB)),
    d!(L8A8_SRGB, LuminanceAlpha, Unorm, [0, 0, 0, 8, 8, 0, 0, 0], (1, 1, 2), FormatFlags::PACKED.union(FormatFlags::SRGB)),
    d!(L_SRGB8, Luminance, Unorm, [0, 0, 0, 0, 8, 0, 0, 0], (1, 1, 1), FormatFlags::SRGB),
    d!(BGR_SRGB8, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 3), FormatFlags::SRGB),
    d!(R9G9B9E5_FLOAT, Rgb, Float, [9, 9, 9, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(R11G11B10_FLOAT, Rgb, Float, [11, 11, 10, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED),
    d!(Z32_FLOAT_S8X24_UINT, DepthStencil, Float, [0, 0, 0, 0, 0, 0, 32, 8], (1, 1, 8), FormatFlags::DEPTH_STENCIL),
    d!(A_FLOAT16, Alpha, Float, [0, 0, 0, 16, 0, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(A_FLOAT32, Alpha, Float, [0, 0, 0, 32, 0, 0, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(L_FLOAT16, Luminance, Float, [0, 0, 0, 0, 16, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(L_FLOAT32, Luminance, Float, [0, 0, 0, 0, 32, 0, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(LA_FLOAT16, LuminanceAlpha, Float, [0, 0, 0, 16, 16, 0, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(LA_FLOAT32, LuminanceAlpha, Float, [0, 0, 0, 32, 32, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(I_FLOAT16, Intensity, Float, [0, 0, 0, 0, 0, 16, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(I_FLOAT32, Intensity, Float, [0, 0, 0, 0, 0, 32, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(R_FLOAT16, Red, Float, [16, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::empty()),
    d!(R_FLOAT32, Red, Float, [32, 0, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(RG_FLOAT16, Rg, Float, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::empty()),
    d!(RG_FLOAT32, Rg, Float, [32, 32, 0, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(RGB_FLOAT16, Rgb, Float, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 6), FormatFlags::empty()),
    d!(RGB_FLOAT32, Rgb, Float, [32, 32, 32, 0, 0, 0, 0, 0], (1, 1, 12), FormatFlags::empty()),
    d!(RGBA_FLOAT16, Rgba, Float, [16, 16, 16, 16, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(RGBA_FLOAT32, Rgba, Float, [32, 32, 32, 32, 0, 0, 0, 0], (1, 1, 16), FormatFlags::empty()),
    d!(RGBX_FLOAT16, Rgb, Float, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::empty()),
    d!(RGBX_FLOAT32, Rgb, Float, [32, 32, 32, 0, 0, 0, 0, 0], (1, 1, 16), FormatFlags::empty()),
    d!(Z_FLOAT32, DepthComponent, Float, [0, 0, 0, 0, 0, 0, 32, 0], (1, 1, 4), FormatFlags::empty()),
    d!(B10G10R10A2_UINT, Rgba, Uint, [10, 10, 10, 2, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::INTEGER)),
    d!(R10G10B10A2_UINT, Rgba, Uint, [10, 10, 10, 2, 0, 0, 0, 0], (1, 1, 4), FormatFlags::PACKED.union(FormatFlags::INTEGER)),
    d!(A_UINT8, Alpha, Uint, [0, 0, 0, 8, 0, 0, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(A_UINT16, Alpha, Uint, [0, 0, 0, 16, 0, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(A_UINT32, Alpha, Uint, [0, 0, 0, 32, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(A_SINT8, Alpha, Sint, [0, 0, 0, 8, 0, 0, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(A_SINT16, Alpha, Sint, [0, 0, 0, 16, 0, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(A_SINT32, Alpha, Sint, [0, 0, 0, 32, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(I_UINT8, Intensity, Uint, [0, 0, 0, 0, 0, 8, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(I_UINT16, Intensity, Uint, [0, 0, 0, 0, 0, 16, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(I_UINT32, Intensity, Uint, [0, 0, 0, 0, 0, 32, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(I_SINT8, Intensity, Sint, [0, 0, 0, 0, 0, 8, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(I_SINT16, Intensity, Sint, [0, 0, 0, 0, 0, 16, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(I_SINT32, Intensity, Sint, [0, 0, 0, 0, 0, 32, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(L_UINT8, Luminance, Uint, [0, 0, 0, 0, 8, 0, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(L_UINT16, Luminance, Uint, [0, 0, 0, 0, 16, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(L_UINT32, Luminance, Uint, [0, 0, 0, 0, 32, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(L_SINT8, Luminance, Sint, [0, 0, 0, 0, 8, 0, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(L_SINT16, Luminance, Sint, [0, 0, 0, 0, 16, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(L_SINT32, Luminance, Sint, [0, 0, 0, 0, 32, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(LA_UINT8, LuminanceAlpha, Uint, [0, 0, 0, 8, 8, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(LA_UINT16, LuminanceAlpha, Uint, [0, 0, 0, 16, 16, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(LA_UINT32, LuminanceAlpha, Uint, [0, 0, 0, 32, 32, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(LA_SINT8, LuminanceAlpha, Sint, [0, 0, 0, 8, 8, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(LA_SINT16, LuminanceAlpha, Sint, [0, 0, 0, 16, 16, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(LA_SINT32, LuminanceAlpha, Sint, [0, 0, 0, 32, 32, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(R_UINT8, Red, Uint, [8, 0, 0, 0, 0, 0, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(R_UINT16, Red, Uint, [16, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(R_UINT32, Red, Uint, [32, 0, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(R_SINT8, Red, Sint, [8, 0, 0, 0, 0, 0, 0, 0], (1, 1, 1), FormatFlags::INTEGER),
    d!(R_SINT16, Red, Sint, [16, 0, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(R_SINT32, Red, Sint, [32, 0, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RG_UINT8, Rg, Uint, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(RG_UINT16, Rg, Uint, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RG_UINT32, Rg, Uint, [32, 32, 0, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(RG_SINT8, Rg, Sint, [8, 8, 0, 0, 0, 0, 0, 0], (1, 1, 2), FormatFlags::INTEGER),
    d!(RG_SINT16, Rg, Sint, [16, 16, 0, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RG_SINT32, Rg, Sint, [32, 32, 0, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(RGB_UINT8, Rgb, Uint, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 3), FormatFlags::INTEGER),
    d!(RGB_UINT16, Rgb, Uint, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 6), FormatFlags::INTEGER),
    d!(RGB_UINT32, Rgb, Uint, [32, 32, 32, 0, 0, 0, 0, 0], (1, 1, 12), FormatFlags::INTEGER),
    d!(RGB_SINT8, Rgb, Sint, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 3), FormatFlags::INTEGER),
    d!(RGB_SINT16, Rgb, Sint, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 6), FormatFlags::INTEGER),
    d!(RGB_SINT32, Rgb, Sint, [32, 32, 32, 0, 0, 0, 0, 0], (1, 1, 12), FormatFlags::INTEGER),
    d!(RGBA_UINT8, Rgba, Uint, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RGBA_UINT16, Rgba, Uint, [16, 16, 16, 16, 0, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(RGBA_UINT32, Rgba, Uint, [32, 32, 32, 32, 0, 0, 0, 0], (1, 1, 16), FormatFlags::INTEGER),
    d!(RGBA_SINT8, Rgba, Sint, [8, 8, 8, 8, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RGBA_SINT16, Rgba, Sint, [16, 16, 16, 16, 0, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(RGBA_SINT32, Rgba, Sint, [32, 32, 32, 32, 0, 0, 0, 0], (1, 1, 16), FormatFlags::INTEGER),
    d!(RGBX_UINT8, Rgb, Uint, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RGBX_UINT16, Rgb, Uint, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(RGBX_UINT32, Rgb, Uint, [32, 32, 32, 0, 0, 0, 0, 0], (1, 1, 16), FormatFlags::INTEGER),
    d!(RGBX_SINT8, Rgb, Sint, [8, 8, 8, 0, 0, 0, 0, 0], (1, 1, 4), FormatFlags::INTEGER),
    d!(RGBX_SINT16, Rgb, Sint, [16, 16, 16, 0, 0, 0, 0, 0], (1, 1, 8), FormatFlags::INTEGER),
    d!(RGBX_SINT32, Rgb, Sint, [32, 32, 32, 0, 0, 0, 0, 0], (1, 1, 16), FormatFlags::INTEGER),
    d!(RGB_DXT1, Rgb, Unorm, [4, 4, 4, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(RGBA_DXT1, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(RGBA_DXT3, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(RGBA_DXT5, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(SRGB_DXT1, Rgb, Unorm, [4, 4, 4, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
    d!(SRGBA_DXT1, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
    d!(SRGBA_DXT3, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
    d!(SRGBA_DXT5, Rgba, Unorm, [4, 4, 4, 4, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
    d!(RGB_FXT1, Rgb, Unorm, [4, 4, 4, 0, 0, 0, 0, 0], (8, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(RGBA_FXT1, Rgba, Unorm, [4, 4, 4, 1, 0, 0, 0, 0], (8, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(R_RGTC1_UNORM, Red, Unorm, [8, 0, 0, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(R_RGTC1_SNORM, Red, Snorm, [8, 0, 0, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(RG_RGTC2_UNORM, Rg, Unorm, [8, 8, 0, 0, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(RG_RGTC2_SNORM, Rg, Snorm, [8, 8, 0, 0, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(L_LATC1_UNORM, Luminance, Unorm, [0, 0, 0, 0, 4, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(L_LATC1_SNORM, Luminance, Snorm, [0, 0, 0, 0, 4, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(LA_LATC2_UNORM, LuminanceAlpha, Unorm, [0, 0, 0, 4, 4, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(LA_LATC2_SNORM, LuminanceAlpha, Snorm, [0, 0, 0, 4, 4, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC1_RGB8, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_RGB8, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_SRGB8, Rgb, Unorm, [8, 8, 8, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_RGBA8_EAC, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_SRGB8_ALPHA8_EAC, Rgba, Unorm, [8, 8, 8, 8, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_R11_EAC, Red, Unorm, [11, 0, 0, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_RG11_EAC, Rg, Unorm, [11, 11, 0, 0, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_SIGNED_R11_EAC, Red, Snorm, [11, 0, 0, 0, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_SIGNED_RG11_EAC, Rg, Snorm, [11, 11, 0, 0, 0, 0, 0, 0], (4, 4, 16), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_RGB8_PUNCHTHROUGH_ALPHA1, Rgba, Unorm, [8, 8, 8, 1, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::UNSUPPORTED)),
    d!(ETC2_SRGB8_PUNCHTHROUGH_ALPHA1, Rgba, Unorm, [8, 8, 8, 1, 0, 0, 0, 0], (4, 4, 8), FormatFlags::COMPRESSED.union(FormatFlags::SRGB).union(FormatFlags::UNSUPPORTED)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for (index, descriptor) in FORMAT_TABLE.iter().enumerate() {
            assert_eq!(u32::from(descriptor.id) as usize, index, "{}", descriptor.name);
        }
    }

    #[test]
    fn names_match_debug() {
        for format in FormatId::ALL {
            assert_eq!(format.name(), format!("{:?}", format));
        }
    }

    #[test]
    fn combined_flags() {
        const SRGB_DXT5: FormatFlags = FORMAT_TABLE[FormatId::SRGBA_DXT5 as usize].flags;
        assert_eq!(
            SRGB_DXT5,
            FormatFlags::COMPRESSED | FormatFlags::SRGB | FormatFlags::UNSUPPORTED
        );
        assert_eq!(
            FormatId::Z24_UNORM_S8_UINT.flags(),
            FormatFlags::PACKED | FormatFlags::DEPTH_STENCIL
        );
        assert_eq!(FormatId::RGBA_SINT8.flags(), FormatFlags::INTEGER);
        assert_eq!(FormatId::RGB_UNORM8.flags(), FormatFlags::empty());
    }

    #[test]
    fn unknown_raw_ids() {
        assert_eq!(describe_raw(5).id, FormatId::B8G8R8A8_UNORM);
        assert_eq!(describe_raw(FormatId::COUNT as u32).id, FormatId::NONE);
        assert_eq!(describe_raw(u32::MAX).id, FormatId::NONE);
    }
}
