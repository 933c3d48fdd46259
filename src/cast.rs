//! An internal module for casting between types.
//!
//! This serves as a wrapper around `bytemuck` to provide panic safety. All
//! functions in this module are guaranteed to be safe and **NEVER** panic.

pub(crate) trait NonZeroSized {}
impl NonZeroSized for u8 {}
impl NonZeroSized for u16 {}
impl NonZeroSized for u32 {}
impl NonZeroSized for f32 {}
impl<const N: usize, T: NonZeroSized> NonZeroSized for [T; N] {}

pub(crate) trait Castable: bytemuck::Pod + NonZeroSized {}
impl<T: bytemuck::Pod + NonZeroSized> Castable for T {}

/// Casts a slice of `T` to a slice of `u8`.
pub(crate) fn as_bytes<T: Castable>(buffer: &[T]) -> &[u8] {
    bytemuck::cast_slice(buffer)
}
/// Casts a slice of `T` to a slice of `u8`.
pub(crate) fn as_bytes_mut<T: Castable>(buffer: &mut [T]) -> &mut [u8] {
    bytemuck::cast_slice_mut(buffer)
}

/// Groups the bytes into texels of `N` bytes each.
///
/// Trailing bytes that do not form a whole texel are ignored.
pub(crate) fn as_array_chunks<const N: usize>(bytes: &[u8]) -> &[[u8; N]] {
    if N == 0 {
        return &[];
    }
    let whole = bytes.len() / N * N;
    bytemuck::cast_slice(&bytes[..whole])
}
/// Groups the bytes into texels of `N` bytes each.
///
/// Trailing bytes that do not form a whole texel are ignored.
pub(crate) fn as_array_chunks_mut<const N: usize>(bytes: &mut [u8]) -> &mut [[u8; N]] {
    if N == 0 {
        return &mut [];
    }
    let whole = bytes.len() / N * N;
    bytemuck::cast_slice_mut(&mut bytes[..whole])
}

/// Reinterprets the bytes of a texel as `C` little-endian-stored scalars.
///
/// The caller is responsible for converting the scalars from little endian.
#[inline(always)]
pub(crate) fn texel_components<T: Castable + Default, const N: usize, const C: usize>(
    texel: [u8; N],
) -> [T; C] {
    let mut out = [T::default(); C];
    let out_bytes = as_bytes_mut(&mut out);
    if out_bytes.len() == N {
        out_bytes.copy_from_slice(&texel);
    }
    out
}

/// The inverse of [`texel_components`].
#[inline(always)]
pub(crate) fn components_texel<T: Castable, const N: usize, const C: usize>(
    components: [T; C],
) -> [u8; N] {
    let mut out = [0; N];
    let bytes = as_bytes(&components);
    if bytes.len() == N {
        out.copy_from_slice(bytes);
    }
    out
}
