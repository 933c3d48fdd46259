/// Computes `2^exp` for small exponents without going through `powi`.
///
/// `exp` must be in the range of normal f32 exponents.
#[inline(always)]
pub(crate) fn two_powi(exp: i8) -> f32 {
    debug_assert!((-126..=127).contains(&exp));
    f32::from_bits(((exp as i32 + 127) as u32) << 23)
}

/// A marker for branches that are rarely taken, e.g. NaN and infinity
/// handling in the minifloat decoders.
#[cold]
#[inline(always)]
pub(crate) fn unlikely_branch() {}

/// The number of bytes a row of `width` texels needs, where texels are
/// `stride` bytes apart and the last texel is `byte_size` bytes wide.
///
/// Returns `None` on overflow.
pub(crate) fn strided_len(width: usize, stride: usize, byte_size: usize) -> Option<usize> {
    if width == 0 {
        return Some(0);
    }
    (width - 1).checked_mul(stride)?.checked_add(byte_size)
}

/// An implementation of div_ceil to lower MSRV.
pub(crate) const fn div_ceil(a: u32, b: u32) -> u32 {
    debug_assert!(b > 0);

    let d = a / b;
    if a % b != 0 {
        d + 1
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two() {
        for exp in -126..=127_i8 {
            assert_eq!(two_powi(exp), 2_f32.powi(exp as i32), "exp: {}", exp);
        }
    }

    #[test]
    fn strided_lengths() {
        assert_eq!(strided_len(0, 8, 4), Some(0));
        assert_eq!(strided_len(1, 8, 4), Some(4));
        assert_eq!(strided_len(3, 8, 4), Some(20));
        assert_eq!(strided_len(usize::MAX, 2, 1), None);
    }

    #[test]
    fn div_ceil_rounds_up() {
        assert_eq!(div_ceil(0, 4), 0);
        assert_eq!(div_ceil(1, 4), 1);
        assert_eq!(div_ceil(4, 4), 1);
        assert_eq!(div_ceil(5, 4), 2);
    }
}
