use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{descriptor, CodecError, FormatDescriptor};

/// The native encodings known to the codec.
///
/// Packed formats (e.g. `A8B8G8R8_UNORM`, `R5G6B5_UNORM`) name their channels
/// from the most significant to the least significant bit of one
/// little-endian word. `A8B8G8R8_UNORM` is `A << 24 | B << 16 | G << 8 | R`,
/// so its bytes in memory are R, G, B, A.
///
/// Array formats (e.g. `RGB_UNORM8`, `LA_FLOAT16`) name their channels in
/// memory order. Each component is a little-endian scalar.
///
/// `X` channels are padding. They are written as zero and ignored when read.
///
/// The discriminants are stable and may be persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum FormatId {
    /// No format. Describes nothing and has no codec.
    NONE = 0,

    // packed unsigned normalized formats
    A8B8G8R8_UNORM = 1,
    X8B8G8R8_UNORM = 2,
    R8G8B8A8_UNORM = 3,
    R8G8B8X8_UNORM = 4,
    B8G8R8A8_UNORM = 5,
    B8G8R8X8_UNORM = 6,
    A8R8G8B8_UNORM = 7,
    X8R8G8B8_UNORM = 8,
    L16A16_UNORM = 9,
    A16L16_UNORM = 10,
    B5G6R5_UNORM = 11,
    R5G6B5_UNORM = 12,
    B4G4R4A4_UNORM = 13,
    B4G4R4X4_UNORM = 14,
    A4R4G4B4_UNORM = 15,
    A1B5G5R5_UNORM = 16,
    B5G5R5A1_UNORM = 17,
    B5G5R5X1_UNORM = 18,
    A1R5G5B5_UNORM = 19,
    L8A8_UNORM = 20,
    A8L8_UNORM = 21,
    R8G8_UNORM = 22,
    G8R8_UNORM = 23,
    L4A4_UNORM = 24,
    B2G3R3_UNORM = 25,
    R16G16_UNORM = 26,
    G16R16_UNORM = 27,
    B10G10R10A2_UNORM = 28,
    B10G10R10X2_UNORM = 29,
    R10G10B10A2_UNORM = 30,
    /// Stencil in the high byte, 24-bit depth in the low bits.
    S8_UINT_Z24_UNORM = 31,
    X8_UINT_Z24_UNORM = 32,
    /// 24-bit depth in the high bits, stencil in the low byte.
    Z24_UNORM_S8_UINT = 33,
    Z24_UNORM_X8_UINT = 34,

    // video formats
    /// 4:2:2 luma/chroma pairs. Registered, but has no codec.
    YCBCR = 35,
    YCBCR_REV = 36,
    /// Signed 8-bit du/dv pair, du in the low byte.
    DUDV8 = 37,

    // array unsigned normalized formats
    A_UNORM8 = 38,
    A_UNORM16 = 39,
    L_UNORM8 = 40,
    L_UNORM16 = 41,
    I_UNORM8 = 42,
    I_UNORM16 = 43,
    R_UNORM8 = 44,
    R_UNORM16 = 45,
    BGR_UNORM8 = 46,
    RGB_UNORM8 = 47,
    RGBA_UNORM16 = 48,
    RGBX_UNORM16 = 49,

    // depth and stencil
    Z_UNORM16 = 50,
    Z_UNORM32 = 51,
    S_UINT8 = 52,

    // signed normalized formats
    A8B8G8R8_SNORM = 53,
    X8B8G8R8_SNORM = 54,
    R8G8B8A8_SNORM = 55,
    R8G8B8X8_SNORM = 56,
    R16G16_SNORM = 57,
    G16R16_SNORM = 58,
    R8G8_SNORM = 59,
    G8R8_SNORM = 60,
    L8A8_SNORM = 61,
    A_SNORM8 = 62,
    A_SNORM16 = 63,
    L_SNORM8 = 64,
    L_SNORM16 = 65,
    I_SNORM8 = 66,
    I_SNORM16 = 67,
    R_SNORM8 = 68,
    R_SNORM16 = 69,
    LA_SNORM16 = 70,
    RGB_SNORM16 = 71,
    RGBA_SNORM16 = 72,
    RGBX_SNORM16 = 73,

    // sRGB formats
    A8B8G8R8_SRGB = 74,
    B8G8R8A8_SRGB = 75,
    B8G8R8X8_SRGB = 76,
    R8G8B8A8_SRGB = 77,
    R8G8B8X8_SRGB = 78,
    L8A8_SRGB = 79,
    L_SRGB8 = 80,
    BGR_SRGB8 = 81,

    // floating point formats
    /// Three 9-bit mantissas sharing a 5-bit exponent (exponent in the low bits).
    R9G9B9E5_FLOAT = 82,
    /// Two unsigned 11-bit floats and one unsigned 10-bit float.
    R11G11B10_FLOAT = 83,
    /// An `f32` depth followed by a 32-bit word with the stencil in its low byte.
    Z32_FLOAT_S8X24_UINT = 84,
    A_FLOAT16 = 85,
    A_FLOAT32 = 86,
    L_FLOAT16 = 87,
    L_FLOAT32 = 88,
    LA_FLOAT16 = 89,
    LA_FLOAT32 = 90,
    I_FLOAT16 = 91,
    I_FLOAT32 = 92,
    R_FLOAT16 = 93,
    R_FLOAT32 = 94,
    RG_FLOAT16 = 95,
    RG_FLOAT32 = 96,
    RGB_FLOAT16 = 97,
    RGB_FLOAT32 = 98,
    RGBA_FLOAT16 = 99,
    RGBA_FLOAT32 = 100,
    RGBX_FLOAT16 = 101,
    RGBX_FLOAT32 = 102,
    Z_FLOAT32 = 103,

    // pure integer formats
    B10G10R10A2_UINT = 104,
    R10G10B10A2_UINT = 105,
    A_UINT8 = 106,
    A_UINT16 = 107,
    A_UINT32 = 108,
    A_SINT8 = 109,
    A_SINT16 = 110,
    A_SINT32 = 111,
    I_UINT8 = 112,
    I_UINT16 = 113,
    I_UINT32 = 114,
    I_SINT8 = 115,
    I_SINT16 = 116,
    I_SINT32 = 117,
    L_UINT8 = 118,
    L_UINT16 = 119,
    L_UINT32 = 120,
    L_SINT8 = 121,
    L_SINT16 = 122,
    L_SINT32 = 123,
    LA_UINT8 = 124,
    LA_UINT16 = 125,
    LA_UINT32 = 126,
    LA_SINT8 = 127,
    LA_SINT16 = 128,
    LA_SINT32 = 129,
    R_UINT8 = 130,
    R_UINT16 = 131,
    R_UINT32 = 132,
    R_SINT8 = 133,
    R_SINT16 = 134,
    R_SINT32 = 135,
    RG_UINT8 = 136,
    RG_UINT16 = 137,
    RG_UINT32 = 138,
    RG_SINT8 = 139,
    RG_SINT16 = 140,
    RG_SINT32 = 141,
    RGB_UINT8 = 142,
    RGB_UINT16 = 143,
    RGB_UINT32 = 144,
    RGB_SINT8 = 145,
    RGB_SINT16 = 146,
    RGB_SINT32 = 147,
    RGBA_UINT8 = 148,
    RGBA_UINT16 = 149,
    RGBA_UINT32 = 150,
    RGBA_SINT8 = 151,
    RGBA_SINT16 = 152,
    RGBA_SINT32 = 153,
    RGBX_UINT8 = 154,
    RGBX_UINT16 = 155,
    RGBX_UINT32 = 156,
    RGBX_SINT8 = 157,
    RGBX_SINT16 = 158,
    RGBX_SINT32 = 159,

    // block-compressed formats (unsupported)
    RGB_DXT1 = 160,
    RGBA_DXT1 = 161,
    RGBA_DXT3 = 162,
    RGBA_DXT5 = 163,
    SRGB_DXT1 = 164,
    SRGBA_DXT1 = 165,
    SRGBA_DXT3 = 166,
    SRGBA_DXT5 = 167,
    RGB_FXT1 = 168,
    RGBA_FXT1 = 169,
    R_RGTC1_UNORM = 170,
    R_RGTC1_SNORM = 171,
    RG_RGTC2_UNORM = 172,
    RG_RGTC2_SNORM = 173,
    L_LATC1_UNORM = 174,
    L_LATC1_SNORM = 175,
    LA_LATC2_UNORM = 176,
    LA_LATC2_SNORM = 177,
    ETC1_RGB8 = 178,
    ETC2_RGB8 = 179,
    ETC2_SRGB8 = 180,
    ETC2_RGBA8_EAC = 181,
    ETC2_SRGB8_ALPHA8_EAC = 182,
    ETC2_R11_EAC = 183,
    ETC2_RG11_EAC = 184,
    ETC2_SIGNED_R11_EAC = 185,
    ETC2_SIGNED_RG11_EAC = 186,
    ETC2_RGB8_PUNCHTHROUGH_ALPHA1 = 187,
    ETC2_SRGB8_PUNCHTHROUGH_ALPHA1 = 188,
}

impl FormatId {
    /// The number of format ids, including [`FormatId::NONE`].
    pub const COUNT: usize = 189;

    /// All format ids in discriminant order.
    pub const ALL: [FormatId; Self::COUNT] = {
        let mut all = [FormatId::NONE; Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            all[i] = descriptor::FORMAT_TABLE[i].id;
            i += 1;
        }
        all
    };

    /// Converts a raw id into a format id.
    pub fn from_raw(raw: u32) -> Result<FormatId, CodecError> {
        FormatId::try_from(raw).map_err(|_| CodecError::InvalidFormatId(raw))
    }

    /// The static description of this format.
    pub fn descriptor(self) -> &'static FormatDescriptor {
        descriptor::describe(self)
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
    /// The number of bytes of one texel, or of one block for compressed
    /// formats.
    pub fn byte_size(self) -> usize {
        self.descriptor().bytes_per_block as usize
    }
    pub fn numeric_class(self) -> NumericClass {
        self.descriptor().class
    }
    pub fn base_format(self) -> BaseFormat {
        self.descriptor().base_format
    }
    /// The width and height of one block in texels. `(1, 1)` for all
    /// uncompressed formats.
    pub fn block_size(self) -> (u32, u32) {
        let d = self.descriptor();
        (d.block_width as u32, d.block_height as u32)
    }
    pub fn channel_bits(self) -> ChannelBits {
        self.descriptor().bits
    }
    /// The largest bit width of any color channel.
    pub fn max_channel_bits(self) -> u32 {
        self.descriptor().bits.max_color_bits()
    }
    pub fn flags(self) -> FormatFlags {
        self.descriptor().flags
    }

    pub fn is_compressed(self) -> bool {
        self.flags().contains(FormatFlags::COMPRESSED)
    }
    /// Whether both depth and stencil live in one texel.
    pub fn is_packed_depth_stencil(self) -> bool {
        self.flags().contains(FormatFlags::DEPTH_STENCIL)
    }
    pub fn has_depth(self) -> bool {
        self.descriptor().bits.depth > 0
    }
    pub fn has_stencil(self) -> bool {
        self.descriptor().bits.stencil > 0
    }
    pub fn is_depth_or_stencil(self) -> bool {
        self.has_depth() || self.has_stencil()
    }
    /// Whether this is a pure-integer color format.
    pub fn is_integer(self) -> bool {
        self.flags().contains(FormatFlags::INTEGER)
    }
    pub fn is_srgb(self) -> bool {
        self.flags().contains(FormatFlags::SRGB)
    }
    /// Whether the format has any codec at all.
    pub fn is_supported(self) -> bool {
        !self.flags().contains(FormatFlags::UNSUPPORTED)
    }

    /// The number of color components, counting luminance and intensity as
    /// one component each.
    pub fn component_count(self) -> u32 {
        let bits = self.descriptor().bits;
        let mut count = 0;
        if bits.red > 0 {
            count += 1;
        }
        if bits.green > 0 {
            count += 1;
        }
        if bits.blue > 0 {
            count += 1;
        }
        if bits.alpha > 0 {
            count += 1;
        }
        if bits.luminance > 0 {
            count += 1;
        }
        if bits.intensity > 0 {
            count += 1;
        }
        count
    }

    /// Whether unpacking this format yields a stored (not defaulted) value for
    /// the given RGBA component index.
    pub fn has_color_component(self, component: usize) -> bool {
        let bits = self.descriptor().bits;
        if bits.intensity > 0 {
            return component < 4;
        }
        match component {
            0 => bits.red > 0 || bits.luminance > 0,
            1 => bits.green > 0 || bits.luminance > 0,
            2 => bits.blue > 0 || bits.luminance > 0,
            3 => bits.alpha > 0,
            _ => false,
        }
    }

    /// The linear format with the same layout as this sRGB format.
    ///
    /// Non-sRGB formats are returned unchanged.
    pub fn linear_equivalent(self) -> FormatId {
        use FormatId::*;
        match self {
            A8B8G8R8_SRGB => A8B8G8R8_UNORM,
            B8G8R8A8_SRGB => B8G8R8A8_UNORM,
            B8G8R8X8_SRGB => B8G8R8X8_UNORM,
            R8G8B8A8_SRGB => R8G8B8A8_UNORM,
            R8G8B8X8_SRGB => R8G8B8X8_UNORM,
            L8A8_SRGB => L8A8_UNORM,
            L_SRGB8 => L_UNORM8,
            BGR_SRGB8 => BGR_UNORM8,
            SRGB_DXT1 => RGB_DXT1,
            SRGBA_DXT1 => RGBA_DXT1,
            SRGBA_DXT3 => RGBA_DXT3,
            SRGBA_DXT5 => RGBA_DXT5,
            ETC2_SRGB8 => ETC2_RGB8,
            ETC2_SRGB8_ALPHA8_EAC => ETC2_RGBA8_EAC,
            ETC2_SRGB8_PUNCHTHROUGH_ALPHA1 => ETC2_RGB8_PUNCHTHROUGH_ALPHA1,
            other => other,
        }
    }

    /// The number of bytes of one row of `width` texels, rounded up to whole
    /// blocks.
    pub fn row_stride(self, width: u32) -> usize {
        let (block_width, _) = self.block_size();
        crate::util::div_ceil(width, block_width) as usize * self.byte_size()
    }
    /// The number of bytes of a `width`×`height` image, rounded up to whole
    /// blocks.
    pub fn image_size(self, width: u32, height: u32) -> usize {
        let (_, block_height) = self.block_size();
        self.row_stride(width) * crate::util::div_ceil(height, block_height) as usize
    }
}

/// How the stored channel values are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericClass {
    None,
    /// Unsigned normalized: `[0, 1]`.
    Unorm,
    /// Signed normalized: `[-1, 1]`.
    Snorm,
    Float,
    Uint,
    Sint,
}

/// The logical channel set of a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseFormat {
    None,
    Rgba,
    Rgb,
    Rg,
    Red,
    Alpha,
    Luminance,
    LuminanceAlpha,
    Intensity,
    DepthComponent,
    StencilIndex,
    DepthStencil,
    YCbCr,
    DuDv,
}

/// The number of bits stored for each channel. Zero if the channel is
/// absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelBits {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub luminance: u8,
    pub intensity: u8,
    pub depth: u8,
    pub stencil: u8,
}
impl ChannelBits {
    pub const fn total(&self) -> u32 {
        self.red as u32
            + self.green as u32
            + self.blue as u32
            + self.alpha as u32
            + self.luminance as u32
            + self.intensity as u32
            + self.depth as u32
            + self.stencil as u32
    }

    const fn max_color_bits(&self) -> u32 {
        let mut max = self.red;
        let others = [
            self.green,
            self.blue,
            self.alpha,
            self.luminance,
            self.intensity,
        ];
        let mut i = 0;
        while i < others.len() {
            if others[i] > max {
                max = others[i];
            }
            i += 1;
        }
        max as u32
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        /// Texels are stored in blocks larger than 1x1.
        const COMPRESSED = 0x1;
        /// Channels are bit fields of one machine word.
        const PACKED = 0x2;
        /// RGB channels are sRGB encoded.
        const SRGB = 0x4;
        /// Depth and stencil share one texel.
        const DEPTH_STENCIL = 0x8;
        /// A pure-integer color format.
        const INTEGER = 0x10;
        /// The format has no codec.
        const UNSUPPORTED = 0x20;
    }
}

bitflags! {
    /// A set of RGBA channels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelMask: u8 {
        const R = 0x1;
        const G = 0x2;
        const B = 0x4;
        const A = 0x8;
        const RGB = Self::R.bits() | Self::G.bits() | Self::B.bits();
        const RGBA = Self::RGB.bits() | Self::A.bits();
    }
}
impl ChannelMask {
    /// The mask as one flag per RGBA component.
    pub const fn to_array(self) -> [bool; 4] {
        [
            self.contains(Self::R),
            self.contains(Self::G),
            self.contains(Self::B),
            self.contains(Self::A),
        ]
    }
}
impl From<[bool; 4]> for ChannelMask {
    fn from([r, g, b, a]: [bool; 4]) -> Self {
        let mut mask = ChannelMask::empty();
        mask.set(ChannelMask::R, r);
        mask.set(ChannelMask::G, g);
        mask.set(ChannelMask::B, b);
        mask.set(ChannelMask::A, a);
        mask
    }
}
