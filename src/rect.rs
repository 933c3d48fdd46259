//! Rectangle packing and unpacking.
//!
//! The native side of every operation is an image with an explicit row pitch
//! in bytes, and the rectangle selects the texels of that image to process.
//! The canonical side is a tightly sized `width`×`height` grid with its own
//! row stride in texels.

use crate::pack::{self, PackFn};
use crate::unpack::{self, UnpackFn};
use crate::{CodecError, FormatId};

/// A rectangle of texels. `x` and `y` are the offset of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Column of the leftmost texel.
    pub x: u32,
    /// Row of the topmost texel.
    pub y: u32,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}
impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
    /// Whether the rectangle covers no texels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The validated layout of the rectangle in a native image.
struct NativeRows {
    /// Byte offset of the first texel of the rectangle.
    offset: usize,
    pitch: usize,
    row_bytes: usize,
}
impl NativeRows {
    fn new(
        format: FormatId,
        buffer_len: usize,
        pitch: usize,
        rect: Rect,
    ) -> Result<Self, CodecError> {
        let byte_size = format.byte_size();
        let row_bytes = usize::saturating_mul(rect.width as usize, byte_size);
        if pitch < row_bytes {
            return Err(CodecError::RowPitchTooSmall {
                required_minimum: row_bytes,
            });
        }

        // the rectangle has to fit into a row
        let x_offset = usize::saturating_mul(rect.x as usize, byte_size);
        if x_offset.saturating_add(row_bytes) > pitch {
            return Err(CodecError::RectOutOfBounds);
        }
        let offset = usize::saturating_mul(rect.y as usize, pitch).saturating_add(x_offset);

        // saturate to usize::MAX on overflow
        let required_bytes = usize::saturating_mul(pitch, (rect.height - 1) as usize)
            .saturating_add(offset)
            .saturating_add(row_bytes);
        if buffer_len < required_bytes {
            return Err(CodecError::RectBufferTooSmall {
                required_minimum: required_bytes,
            });
        }

        Ok(Self {
            offset,
            pitch,
            row_bytes,
        })
    }
}

/// Checks the canonical side of a non-empty rectangle.
fn check_canonical(buffer_len: usize, stride: usize, rect: Rect) -> Result<(), CodecError> {
    let width = rect.width as usize;
    if stride < width {
        return Err(CodecError::RowPitchTooSmall {
            required_minimum: width,
        });
    }
    let required = usize::saturating_mul(stride, (rect.height - 1) as usize).saturating_add(width);
    if buffer_len < required {
        return Err(CodecError::RectBufferTooSmall {
            required_minimum: required,
        });
    }
    Ok(())
}

/// Calls `f` with the index and buffer of each of the first `height` rows.
///
/// Rows are processed in parallel if the `rayon` feature is enabled.
fn for_each_row<T: Send>(
    buffer: &mut [T],
    stride: usize,
    height: usize,
    f: impl Fn(usize, &mut [T]) + Sync,
) {
    #[cfg(feature = "rayon")]
    {
        use rayon::iter::{IndexedParallelIterator, ParallelIterator};
        use rayon::slice::ParallelSliceMut;

        buffer
            .par_chunks_mut(stride)
            .take(height)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
    #[cfg(not(feature = "rayon"))]
    {
        buffer
            .chunks_mut(stride)
            .take(height)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

fn unpack_rect_with<T: Send>(
    format: FormatId,
    unpack_fn: UnpackFn<T>,
    src: &[u8],
    src_row_pitch: usize,
    rect: Rect,
    dst: &mut [T],
    dst_row_stride: usize,
) -> Result<(), CodecError> {
    if rect.is_empty() {
        return Ok(());
    }
    let rows = NativeRows::new(format, src.len(), src_row_pitch, rect)?;
    check_canonical(dst.len(), dst_row_stride, rect)?;

    let width = rect.width as usize;
    for_each_row(dst, dst_row_stride, rect.height as usize, |y, dst_row| {
        let start = rows.offset + y * rows.pitch;
        let src_row = &src[start..start + rows.row_bytes];
        unpack_fn(unpack::Args(src_row, &mut dst_row[..width]));
    });
    Ok(())
}

fn pack_rect_with<T: Sync>(
    format: FormatId,
    pack_fn: PackFn<T>,
    src: &[T],
    src_row_stride: usize,
    rect: Rect,
    dst: &mut [u8],
    dst_row_pitch: usize,
) -> Result<(), CodecError> {
    if rect.is_empty() {
        return Ok(());
    }
    let rows = NativeRows::new(format, dst.len(), dst_row_pitch, rect)?;
    check_canonical(src.len(), src_row_stride, rect)?;

    let width = rect.width as usize;
    let dst = &mut dst[rows.offset..];
    for_each_row(dst, rows.pitch, rect.height as usize, |y, dst_row| {
        let start = y * src_row_stride;
        let src_row = &src[start..start + width];
        pack_fn(pack::Args(src_row, &mut dst_row[..rows.row_bytes]));
    });
    Ok(())
}

/// Unpacks the texels of `rect` from a native image to RGBA floats.
///
/// The rectangle is given in texels of `src`, whose rows are `src_row_pitch`
/// bytes apart. Row `y` of the rectangle is written to
/// `dst[y * dst_row_stride..][..rect.width]`.
pub fn unpack_float_rgba_rect(
    format: FormatId,
    src: &[u8],
    src_row_pitch: usize,
    rect: Rect,
    dst: &mut [[f32; 4]],
    dst_row_stride: usize,
) -> Result<(), CodecError> {
    let set = unpack::unpackers(format)?;
    unpack_rect_with(format, set.float, src, src_row_pitch, rect, dst, dst_row_stride)
}

/// Unpacks the texels of `rect` from a native image to RGBA bytes.
///
/// See [`unpack_float_rgba_rect`].
pub fn unpack_ubyte_rgba_rect(
    format: FormatId,
    src: &[u8],
    src_row_pitch: usize,
    rect: Rect,
    dst: &mut [[u8; 4]],
    dst_row_stride: usize,
) -> Result<(), CodecError> {
    let set = unpack::unpackers(format)?;
    unpack_rect_with(format, set.ubyte, src, src_row_pitch, rect, dst, dst_row_stride)
}

/// Unpacks the texels of `rect` from a native integer image to RGBA `u32`s.
pub fn unpack_uint_rgba_rect(
    format: FormatId,
    src: &[u8],
    src_row_pitch: usize,
    rect: Rect,
    dst: &mut [[u32; 4]],
    dst_row_stride: usize,
) -> Result<(), CodecError> {
    let unpack_fn = unpack::uint_unpacker(format)?;
    unpack_rect_with(format, unpack_fn, src, src_row_pitch, rect, dst, dst_row_stride)
}

/// Packs a `rect.width`×`rect.height` grid of RGBA floats into the texels of
/// `rect` in a native image.
///
/// Row `y` of the grid is read from `src[y * src_row_stride..]`. Bytes of
/// `dst` outside the rectangle are left untouched.
///
/// ```
/// use texel_codec::{pack_float_rgba_rect, FormatId, Rect};
///
/// // a 4x2 image of R8G8_UNORM, fill its right half
/// let mut image = [0_u8; 16];
/// let src = [[1.0, 0.0, 0.0, 1.0]; 4];
/// pack_float_rgba_rect(FormatId::R8G8_UNORM, &src, 2, Rect::new(2, 0, 2, 2), &mut image, 8).unwrap();
/// assert_eq!(image, [0, 0, 0, 0, 0, 255, 0, 255, 0, 0, 0, 0, 0, 255, 0, 255]);
/// ```
pub fn pack_float_rgba_rect(
    format: FormatId,
    src: &[[f32; 4]],
    src_row_stride: usize,
    rect: Rect,
    dst: &mut [u8],
    dst_row_pitch: usize,
) -> Result<(), CodecError> {
    let set = pack::packers(format)?;
    pack_rect_with(format, set.float, src, src_row_stride, rect, dst, dst_row_pitch)
}

/// Packs a grid of RGBA bytes into the texels of `rect` in a native image.
///
/// See [`pack_float_rgba_rect`].
pub fn pack_ubyte_rgba_rect(
    format: FormatId,
    src: &[[u8; 4]],
    src_row_stride: usize,
    rect: Rect,
    dst: &mut [u8],
    dst_row_pitch: usize,
) -> Result<(), CodecError> {
    let set = pack::packers(format)?;
    pack_rect_with(format, set.ubyte, src, src_row_stride, rect, dst, dst_row_pitch)
}

/// Packs RGBA `u32`s into the texels of `rect` in a native integer image.
pub fn pack_uint_rgba_rect(
    format: FormatId,
    src: &[[u32; 4]],
    src_row_stride: usize,
    rect: Rect,
    dst: &mut [u8],
    dst_row_pitch: usize,
) -> Result<(), CodecError> {
    let pack_fn = pack::uint_packer(format)?;
    pack_rect_with(format, pack_fn, src, src_row_stride, rect, dst, dst_row_pitch)
}
