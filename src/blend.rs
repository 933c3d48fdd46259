//! Averaging of texels, the building block of mipmap generation.

use glam::Vec4;

use crate::pack::{pack_row_with, packers, uint_packer};
use crate::unpack::{unpack_row_with, uint_unpacker, unpackers};
use crate::{CodecError, FormatId, NumericClass};

/// Averages the texels of several sample rows.
///
/// Texel `i` of `dst` is set to the average of texel `i` of every sample.
/// `dst` determines the number of texels, and every sample must hold at
/// least as many. If `samples` is empty, `dst` is left untouched.
///
/// UNORM formats with channels of at most 8 bits are averaged as bytes with
/// rounding, integer formats are averaged as integers, and all other formats
/// as floats. sRGB formats are averaged in linear space.
///
/// ```
/// use texel_codec::{blend_texels, FormatId};
///
/// let a = [0_u8, 10];
/// let b = [255_u8, 20];
/// let mut dst = [0; 2];
/// blend_texels(FormatId::R_UNORM8, &[&a, &b], &mut dst).unwrap();
/// assert_eq!(dst, [128, 15]);
/// ```
pub fn blend_texels(format: FormatId, samples: &[&[u8]], dst: &mut [u8]) -> Result<(), CodecError> {
    blend_strided(format, samples, format.byte_size(), dst)
}

/// Halves a row pair in both dimensions with a box filter.
///
/// Output texel `j` is the average of texels `2j` and `2j + 1` of both rows.
/// A row of width 1 is only averaged vertically. For the last row of an
/// image with odd height, pass the same row twice.
///
/// `dst` must hold `max(src_width / 2, 1)` texels.
pub fn downsample_row(
    format: FormatId,
    row_a: &[u8],
    row_b: &[u8],
    src_width: usize,
    dst: &mut [u8],
) -> Result<(), CodecError> {
    let byte_size = format.byte_size();
    let dst_width = (src_width / 2).max(1);
    let dst_len = dst_width * byte_size;
    if dst.len() < dst_len {
        return Err(CodecError::UnexpectedBufferSize { expected: dst_len });
    }
    let dst = &mut dst[..dst_len];

    if src_width <= 1 {
        return blend_strided(format, &[row_a, row_b], byte_size, dst);
    }

    let src_len = dst_width * 2 * byte_size;
    for row in [row_a, row_b] {
        if row.len() < src_len {
            return Err(CodecError::UnexpectedBufferSize { expected: src_len });
        }
    }
    let samples = [
        row_a,
        &row_a[byte_size..],
        row_b,
        &row_b[byte_size..],
    ];
    blend_strided(format, &samples, 2 * byte_size, dst)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlendPath {
    Ubyte,
    Uint,
    Sint,
    Float,
}
impl BlendPath {
    fn of(format: FormatId) -> Self {
        let class = format.numeric_class();
        if format.is_integer() {
            if class == NumericClass::Sint {
                Self::Sint
            } else {
                Self::Uint
            }
        } else if class == NumericClass::Unorm && format.max_channel_bits() <= 8 {
            Self::Ubyte
        } else {
            Self::Float
        }
    }
}

/// Texel `i` of each sample starts at byte `i * stride`.
fn blend_strided(
    format: FormatId,
    samples: &[&[u8]],
    stride: usize,
    dst: &mut [u8],
) -> Result<(), CodecError> {
    let byte_size = format.byte_size();
    if samples.is_empty() || byte_size == 0 {
        return Ok(());
    }
    let width = dst.len() / byte_size;
    let n = samples.len();

    match BlendPath::of(format) {
        BlendPath::Ubyte => {
            let set = packers(format)?;
            let unpack_fn = unpackers(format)?.ubyte;
            let mut texels = vec![[0_u8; 4]; width];
            let mut sums = vec![[0_u32; 4]; width];
            for sample in samples {
                unpack_row_with(format, unpack_fn, sample, stride, &mut texels)?;
                for (sum, texel) in sums.iter_mut().zip(&texels) {
                    for (s, &c) in sum.iter_mut().zip(texel) {
                        *s += c as u32;
                    }
                }
            }
            let n = n as u32;
            for (texel, sum) in texels.iter_mut().zip(&sums) {
                *texel = sum.map(|s| ((s + n / 2) / n) as u8);
            }
            pack_row_with(format, set.ubyte, &texels, dst, byte_size)
        }
        BlendPath::Uint | BlendPath::Sint => {
            let pack_fn = uint_packer(format)?;
            let unpack_fn = uint_unpacker(format)?;
            let signed = BlendPath::of(format) == BlendPath::Sint;
            let mut texels = vec![[0_u32; 4]; width];
            let mut sums = vec![[0_i64; 4]; width];
            for sample in samples {
                unpack_row_with(format, unpack_fn, sample, stride, &mut texels)?;
                for (sum, texel) in sums.iter_mut().zip(&texels) {
                    for (s, &c) in sum.iter_mut().zip(texel) {
                        *s += if signed { c as i32 as i64 } else { c as i64 };
                    }
                }
            }
            let n = n as i64;
            for (texel, sum) in texels.iter_mut().zip(&sums) {
                *texel = sum.map(|s| (s + n / 2).div_euclid(n) as u32);
            }
            pack_row_with(format, pack_fn, &texels, dst, byte_size)
        }
        BlendPath::Float => {
            let set = packers(format)?;
            let unpack_fn = unpackers(format)?.float;
            let mut texels = vec![[0.0_f32; 4]; width];
            let mut sums = vec![Vec4::ZERO; width];
            for sample in samples {
                unpack_row_with(format, unpack_fn, sample, stride, &mut texels)?;
                for (sum, texel) in sums.iter_mut().zip(&texels) {
                    *sum += Vec4::from_array(*texel);
                }
            }
            let scale = 1.0 / n as f32;
            for (texel, sum) in texels.iter_mut().zip(&sums) {
                *texel = (*sum * scale).to_array();
            }
            pack_row_with(format, set.float, &texels, dst, byte_size)
        }
    }
}
