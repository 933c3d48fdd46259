//! Internal module for converting between different number formats.
//!
//! Each `nX` module converts **from** an X-bit UNORM value, and `from_*`
//! functions convert **to** it. Most magic constants for the UNORM
//! conversions are from:
//! https://rundevelopment.github.io/projects/multiply-add-constants-finder
//!
//! Rounding rules:
//!
//! - float to UNORM: `floor(clamp(x, 0, 1) * max + 0.5)`
//! - UNORM8 to UNORM: `(x * max + 127) / 255`
//! - float to SNORM: `round(clamp(x, -1, 1) * max)`

/// Functions for converting **FROM Unorm1** values to other formats.
pub(crate) mod n1 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 1);
        if x == 0 {
            0
        } else {
            u8::MAX
        }
    }
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        debug_assert!(x <= 1);
        if x == 0 {
            0.0
        } else {
            1.0
        }
    }

    pub fn from_f32(x: f32) -> u8 {
        if x >= 0.5 {
            1
        } else {
            0
        }
    }
    pub fn from_n8(x: u8) -> u8 {
        x >> 7
    }
}

/// Functions for converting **FROM Unorm2** values to other formats.
pub(crate) mod n2 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 3);
        x * 85
    }
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        debug_assert!(x <= 3);
        // This turns out to be exact, so we don't need another method.
        const F: f32 = 1.0 / 3.0;
        x as f32 * F
    }

    pub fn from_f32(x: f32) -> u8 {
        (x.min(1.0) * 3.0 + 0.5) as u8
    }
    pub fn from_n8(x: u8) -> u8 {
        ((x as u16 * 3 + 127) / 255) as u8
    }
}

/// Functions for converting **FROM Unorm3** values to other formats.
pub(crate) mod n3 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 7);
        ((x as u16 * 255 + 3) / 7) as u8
    }
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        debug_assert!(x <= 7);
        x as f32 / 7.0
    }

    pub fn from_f32(x: f32) -> u8 {
        (x.min(1.0) * 7.0 + 0.5) as u8
    }
    pub fn from_n8(x: u8) -> u8 {
        ((x as u16 * 7 + 127) / 255) as u8
    }
}

/// Functions for converting **FROM Unorm4** values to other formats.
pub(crate) mod n4 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 15);
        x * 17
    }
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        debug_assert!(x <= 15);
        // Adopted from: https://fgiesen.wordpress.com/2024/11/06/exact-unorm8-to-float/
        // k0=3 was found by trial and error.
        const K0: f32 = 3.0;
        const K1: f32 = 1.0 / (15.0 * K0);
        (x as f32 * K0) * K1
    }

    pub fn from_f32(x: f32) -> u8 {
        (x.min(1.0) * 15.0 + 0.5) as u8
    }
    pub fn from_n8(x: u8) -> u8 {
        ((x as u16 * 15 + 127) / 255) as u8
    }
}

/// Functions for converting **FROM Unorm5** values to other formats.
pub(crate) mod n5 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 31);
        ((x as u16 * 2108 + 92) >> 8) as u8
    }
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        debug_assert!(x <= 31);
        // Adopted from: https://fgiesen.wordpress.com/2024/11/06/exact-unorm8-to-float/
        // k0=3 was found by trial and error.
        const K0: f32 = 3.0;
        const K1: f32 = 1.0 / (31.0 * K0);
        (x as f32 * K0) * K1
    }

    pub fn from_f32(x: f32) -> u8 {
        (x.min(1.0) * 31.0 + 0.5) as u8
    }
    pub fn from_n8(x: u8) -> u8 {
        ((x as u16 * 31 + 127) / 255) as u8
    }
}

/// Functions for converting **FROM Unorm6** values to other formats.
pub(crate) mod n6 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 63);
        ((x as u16 * 1036 + 132) >> 8) as u8
    }
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        debug_assert!(x <= 63);
        // Adopted from: https://fgiesen.wordpress.com/2024/11/06/exact-unorm8-to-float/
        // k0=5 was found by trial and error.
        const K0: f32 = 5.0;
        const K1: f32 = 1.0 / (63.0 * K0);
        (x as f32 * K0) * K1
    }

    pub fn from_f32(x: f32) -> u8 {
        (x.min(1.0) * 63.0 + 0.5) as u8
    }
    pub fn from_n8(x: u8) -> u8 {
        ((x as u16 * 63 + 127) / 255) as u8
    }
}

/// Functions for converting **FROM Unorm8** values to other formats.
pub(crate) mod n8 {
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        // https://fgiesen.wordpress.com/2024/11/06/exact-unorm8-to-float/
        const K0: f32 = 3.0;
        const K1: f32 = 1.0 / (255.0 * K0);
        (x as f32 * K0) * K1
    }

    pub fn from_f32(x: f32) -> u8 {
        (x * 255.0 + 0.5) as u8
    }
}

/// Functions for converting **FROM Unorm10** values to other formats.
pub(crate) mod n10 {
    #[inline(always)]
    pub fn n8(x: u16) -> u8 {
        debug_assert!(x <= 1023);
        ((x as u32 * 16336 + 32656) >> 16) as u8
    }
    #[inline(always)]
    pub fn f32(x: u16) -> f32 {
        debug_assert!(x <= 1023);
        // Adopted from: https://fgiesen.wordpress.com/2024/11/06/exact-unorm8-to-float/
        // k0=85 was found by trial and error.
        const K0: f32 = 85.0;
        const K1: f32 = 1.0 / (1023.0 * K0);
        (x as f32 * K0) * K1
    }

    pub fn from_f32(x: f32) -> u16 {
        (x.min(1.0) * 1023.0 + 0.5) as u16
    }
    pub fn from_n8(x: u8) -> u16 {
        ((x as u32 * 1023 + 127) / 255) as u16
    }
}

/// Functions for converting **FROM Unorm16** values to other formats.
pub(crate) mod n16 {
    #[inline(always)]
    pub fn n8(x: u16) -> u8 {
        ((x as u32 * 255 + 32895) >> 16) as u8
    }
    #[inline(always)]
    pub fn f32(x: u16) -> f32 {
        // Adopted from https://fgiesen.wordpress.com/2024/11/06/exact-unorm8-to-float/
        // No k0 works for 16 bits, so this uses the infinite sum approach
        // from the article instead.
        const C0: f32 = 1.0 / 65536.0;
        const C1: f32 = (1.0 + 65536.0) / 65536.0 / 65536.0 / 65536.0;
        let temp = x as f32;
        (temp * C0) + (temp * C1)
    }

    pub fn from_f32(x: f32) -> u16 {
        (x * 65535.0 + 0.5) as u16
    }
    #[inline(always)]
    pub fn from_n8(x: u8) -> u16 {
        x as u16 * 257
    }
}

/// Functions for converting **FROM Snorm8** values to other formats.
///
/// Both -128 and -127 decode to -1.0.
pub(crate) mod s8 {
    #[inline(always)]
    pub fn f32(x: u8) -> f32 {
        (x as i8 as f32 / 127.0).max(-1.0)
    }
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        // negative values clamp to zero
        let x = x as i8;
        if x <= 0 {
            0
        } else {
            // round(x / 127 * 255)
            ((x as u16 * 255 + 63) / 127) as u8
        }
    }

    pub fn from_f32(x: f32) -> u8 {
        (x.clamp(-1.0, 1.0) * 127.0).round() as i8 as u8
    }
    pub fn from_n8(x: u8) -> u8 {
        // round(x / 255 * 127)
        ((x as u16 * 127 + 127) / 255) as u8
    }
}

/// Functions for converting **FROM Snorm16** values to other formats.
///
/// Both -32768 and -32767 decode to -1.0.
pub(crate) mod s16 {
    #[inline(always)]
    pub fn f32(x: u16) -> f32 {
        (x as i16 as f32 / 32767.0).max(-1.0)
    }
    #[inline(always)]
    pub fn n8(x: u16) -> u8 {
        super::fp::n8(f32(x))
    }

    pub fn from_f32(x: f32) -> u16 {
        (x.clamp(-1.0, 1.0) * 32767.0).round() as i16 as u16
    }
    pub fn from_n8(x: u8) -> u16 {
        // round(x / 255 * 32767)
        ((x as u32 * 32767 + 127) / 255) as u16
    }
}

/// Functions for converting `f32` values to other formats.
pub(crate) mod fp {
    #[inline(always)]
    pub fn n8(x: f32) -> u8 {
        (x * 255.0 + 0.5) as u8
    }
}

/// Functions for converting `f16` values to other formats.
pub(crate) mod fp16 {
    use crate::util::{two_powi, unlikely_branch};

    #[inline]
    pub fn n8(x: u16) -> u8 {
        // This is optimized implementation, combining fp16::f32 -> fp::n8 into one step.
        let exp: u16 = x >> 10 & 0b1_1111;
        let mant: u16 = x & 0b11_1111_1111;
        // Note: denorm all go to zero after rounding, so they don't need an extra branch.
        let val: u8 = if exp != 31 {
            ((mant as f32 + 1024_f32) * two_powi(exp as i8 - 25) * 255.0 + 0.5) as u8
        } else {
            unlikely_branch();
            if mant == 0 {
                // Inf goes to u8::MAX
                u8::MAX
            } else {
                // NaN goes to zero
                0
            }
        };
        if x & 0x8000 != 0 {
            // negative numbers go to zero
            0
        } else {
            val
        }
    }
    #[inline]
    pub fn f32(x: u16) -> f32 {
        // https://stackoverflow.com/questions/36008434/how-can-i-decode-f16-to-f32-using-only-the-stable-standard-library
        let exp: u16 = x >> 10 & 0b1_1111;
        let mant: u16 = x & 0b11_1111_1111;
        let val: f32 = if exp == 0 {
            // denorm
            unlikely_branch();
            mant as f32 * two_powi(-24)
        } else if exp != 31 {
            (mant as f32 + 1024_f32) * two_powi(exp as i8 - 25)
        } else {
            unlikely_branch();
            if mant == 0 {
                f32::INFINITY
            } else {
                f32::NAN
            }
        };
        if x & 0x8000 != 0 {
            -val
        } else {
            val
        }
    }

    pub fn from_f32(value: f32) -> u16 {
        // Source: https://github.com/starkat99/half-rs/blob/2c4122db4e8f7d8ce030bb4b5ed8913bd6bbf2b1/src/binary16/arch.rs#L482
        // Author: Kathryn Long
        // License: MIT OR Apache-2.0

        let x: u32 = value.to_bits();

        let sign = x & 0x8000_0000u32;
        let exp = x & 0x7F80_0000u32;
        let man = x & 0x007F_FFFFu32;

        // Infinity or NaN
        if exp == 0x7F80_0000u32 {
            // Set mantissa MSB for NaN (and also keep shifted mantissa bits)
            let nan_bit = if man == 0 { 0 } else { 0x0200u32 };
            return ((sign >> 16) | 0x7C00u32 | nan_bit | (man >> 13)) as u16;
        }

        let half_sign = sign >> 16;
        let unbiased_exp = ((exp >> 23) as i32) - 127;
        let half_exp = unbiased_exp + 15;

        // overflow goes to +-infinity
        if half_exp >= 0x1F {
            return (half_sign | 0x7C00u32) as u16;
        }

        if half_exp <= 0 {
            if 14 - half_exp > 24 {
                // full underflow to signed zero
                return half_sign as u16;
            }
            // hidden leading mantissa bit
            let man = man | 0x0080_0000u32;
            let mut half_man = man >> (14 - half_exp);
            let round_bit = 1 << (13 - half_exp);
            if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
                half_man += 1;
            }
            return (half_sign | half_man) as u16;
        }

        let half_exp = (half_exp as u32) << 10;
        let half_man = man >> 13;
        let round_bit = 0x0000_1000u32;
        if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
            ((half_sign | half_exp | half_man) + 1) as u16
        } else {
            (half_sign | half_exp | half_man) as u16
        }
    }
}

/// Rounds the mantissa of the given `f32` value to `n` bits (not including
/// the implicit 1 bit). Ties round up.
///
/// All bits after the first `n` bits are set to zero.
#[inline]
fn f32_mantissa_round_half_up(n: u32, mut x: f32) -> f32 {
    debug_assert!(x >= 0.0);

    // Adds half a unit in the last place of an n-bit mantissa and truncates.
    // The addition may carry into the exponent, which is exactly the
    // rounded result.
    const MANTISSA_MASK: u32 = 0x007F_FFFF;

    // 2^exp
    let f_m0 = x.to_bits() & !MANTISSA_MASK;
    // 2^exp + 2^(exp - n - 1)
    let f_mn = f_m0 | (1 << (23 - n - 1));
    let f_0_5 = f32::from_bits(f_mn) - f32::from_bits(f_m0);

    x += f_0_5;

    f32::from_bits(x.to_bits() & !(MANTISSA_MASK >> n))
}

/// Encodes an unsigned float with a 5-bit exponent and an `n`-bit mantissa.
///
/// Negative values and -0 encode as 0, NaN encodes as all ones, and values
/// too large for the format encode as infinity.
fn f32_to_unsigned_fp_e5(n: u32, mut x: f32) -> u16 {
    if x.is_nan() {
        let nan: u16 = (1 << (n + 5)) - 1;
        return nan;
    }
    if x <= 0.0 {
        return 0;
    }

    // below the smallest normal, the format has a fixed step of 2^(-14 - n)
    if x < crate::util::two_powi(-14) {
        return (x * crate::util::two_powi(14 + n as i8) + 0.5) as u16;
    }
    x = f32_mantissa_round_half_up(n, x);

    let f16 = super::fp16::from_f32(x);
    let exp: u16 = f16 >> 10 & 0b1_1111;
    let mant: u16 = (f16 & 0b11_1111_1111) >> (10 - n);
    exp << n | mant
}

/// Functions for converting 11-bit unsigned floats (5-bit exponent, 6-bit
/// mantissa) to other formats.
pub(crate) mod fp11 {
    use crate::util::{two_powi, unlikely_branch};

    #[inline]
    pub fn n8(x: u16) -> u8 {
        let exp: u16 = x >> 6 & 0b1_1111;
        let mant: u16 = x & 0b11_1111;

        if exp != 31 {
            ((mant as f32 + 64_f32) * two_powi(exp as i8 - 21) * 255.0 + 0.5) as u8
        } else {
            unlikely_branch();
            if mant == 0 {
                255
            } else {
                0
            }
        }
    }
    #[inline]
    pub fn f32(x: u16) -> f32 {
        let exp: u16 = x >> 6 & 0b1_1111;
        let mant: u16 = x & 0b11_1111;

        if exp == 0 {
            // denorm
            mant as f32 * two_powi(-20)
        } else if exp != 31 {
            (mant as f32 + 64_f32) * two_powi(exp as i8 - 21)
        } else {
            unlikely_branch();
            if mant == 0 {
                f32::INFINITY
            } else {
                f32::NAN
            }
        }
    }

    #[inline]
    pub fn from_f32(x: f32) -> u16 {
        super::f32_to_unsigned_fp_e5(6, x)
    }

    #[cfg(test)]
    mod tests {
        use super::super::*;

        #[test]
        fn creation() {
            // all negative values should go to zero
            let negative_values = [-0.0, -1.0, -1e-20, f32::NEG_INFINITY];
            for value in negative_values {
                assert_eq!(fp11::from_f32(value), 0, "value: {}", value);
            }

            // the following can be presented exactly
            let exact_values = [
                0.0,
                0.5,
                1.0,
                1.5,
                33.0,
                65.0,
                127.0,
                128.0,
                130.0,
                65024.0,
                f32::INFINITY,
            ];
            for value in exact_values {
                let f11 = fp11::from_f32(value);
                assert_eq!(value, fp11::f32(f11), "value: {}", value);
            }
            assert_eq!(fp11::from_f32(f32::NAN), 0b11111_111111);
            assert!(fp11::f32(fp11::from_f32(f32::NAN)).is_nan());

            // overflow goes to infinity
            assert_eq!(fp11::from_f32(1e10), 0b11111_000000);

            // ties round up
            let inexact_values = [
                (129.0, 130.0),
                (131.0, 132.0),
                (133.0, 134.0),
                (255.0, 256.0),
                (257.0, 256.0),
            ];
            for (value, expected) in inexact_values {
                let f11 = fp11::from_f32(value);
                assert_eq!(expected, fp11::f32(f11), "value: {}", value);
            }
        }

        #[test]
        fn denormals_round_to_nearest() {
            let step = crate::util::two_powi(-20);
            let cases = [(46.25, 46.0), (46.5, 47.0), (46.75, 47.0), (0.4, 0.0), (63.7, 64.0)];
            for (steps, expected) in cases {
                let value = steps * step;
                assert_eq!(fp11::f32(fp11::from_f32(value)), expected * step, "steps: {}", steps);
            }
            // rounding up past the last denormal gives the smallest normal
            assert_eq!(fp11::from_f32(63.7 * step), 1 << 6);
            assert_eq!(fp11::from_f32(4.4569668e-5), 47);
        }
    }
}

/// Functions for converting 10-bit unsigned floats (5-bit exponent, 5-bit
/// mantissa) to other formats.
pub(crate) mod fp10 {
    use crate::util::{two_powi, unlikely_branch};

    #[inline]
    pub fn n8(x: u16) -> u8 {
        let exp: u16 = x >> 5 & 0b1_1111;
        let mant: u16 = x & 0b1_1111;

        if exp != 31 {
            ((mant as f32 + 32_f32) * two_powi(exp as i8 - 20) * 255.0 + 0.5) as u8
        } else {
            unlikely_branch();
            if mant == 0 {
                255
            } else {
                0
            }
        }
    }
    #[inline]
    pub fn f32(x: u16) -> f32 {
        let exp: u16 = x >> 5 & 0b1_1111;
        let mant: u16 = x & 0b1_1111;

        if exp == 0 {
            // denorm
            mant as f32 * two_powi(-19)
        } else if exp != 31 {
            (mant as f32 + 32_f32) * two_powi(exp as i8 - 20)
        } else {
            unlikely_branch();
            if mant == 0 {
                f32::INFINITY
            } else {
                f32::NAN
            }
        }
    }

    #[inline]
    pub fn from_f32(x: f32) -> u16 {
        super::f32_to_unsigned_fp_e5(5, x)
    }

    #[cfg(test)]
    mod tests {
        use super::super::*;

        #[test]
        fn creation() {
            for value in [-0.0, -2.0, f32::NEG_INFINITY] {
                assert_eq!(fp10::from_f32(value), 0, "value: {}", value);
            }
            for value in [0.0, 0.25, 1.0, 3.0, 64512.0, f32::INFINITY] {
                assert_eq!(value, fp10::f32(fp10::from_f32(value)), "value: {}", value);
            }
            assert_eq!(fp10::from_f32(f32::NAN), 0b11111_11111);
            assert_eq!(fp10::from_f32(1e10), 0b11111_00000);
        }

        #[test]
        fn denormals_round_to_nearest() {
            let step = crate::util::two_powi(-19);
            for code in 0..32_u16 {
                assert_eq!(fp10::from_f32(code as f32 * step), code);
                // just below the midpoint to the next code
                let below = (code as f32 + 0.49) * step;
                assert_eq!(fp10::from_f32(below), code, "code: {}", code);
                let above = (code as f32 + 0.51) * step;
                assert_eq!(fp10::from_f32(above), code + 1, "code: {}", code);
            }
        }
    }
}

/// Functions for the shared-exponent layout `R << 23 | G << 14 | B << 5 | E`.
///
/// Each channel has a 9-bit mantissa without an implicit leading one and all
/// share the 5-bit exponent `E` with a bias of 15.
pub(crate) mod rgb9e5 {
    use crate::util::two_powi;

    /// The largest representable value: `511/512 * 2^16`.
    pub const MAX: f32 = 65408.0;

    #[inline(always)]
    fn split(rgb: u32) -> ([u32; 3], u32) {
        let r_mant = (rgb >> 23) & 0x1FF;
        let g_mant = (rgb >> 14) & 0x1FF;
        let b_mant = (rgb >> 5) & 0x1FF;
        let exp = rgb & 0x1F;
        ([r_mant, g_mant, b_mant], exp)
    }

    #[inline]
    pub fn f32(rgb: u32) -> [f32; 3] {
        let ([r_mant, g_mant, b_mant], exp) = split(rgb);

        let f = two_powi(exp as i8 - 24);
        [r_mant as f32 * f, g_mant as f32 * f, b_mant as f32 * f]
    }
    #[inline]
    pub fn n8(rgb: u32) -> [u8; 3] {
        let ([r_mant, g_mant, b_mant], exp) = split(rgb);

        // f32 conversion and f32 -> UNORM8 combined into one step
        let f = two_powi(exp as i8 - 24) * 255.0;
        [
            (r_mant as f32 * f + 0.5) as u8,
            (g_mant as f32 * f + 0.5) as u8,
            (b_mant as f32 * f + 0.5) as u8,
        ]
    }

    #[inline]
    pub fn from_f32(rgb: [f32; 3]) -> u32 {
        // values are now either in range or NaN
        let [r, g, b] = rgb.map(|c| c.clamp(0.0, MAX));
        let max = r.max(g).max(b);

        if max.is_nan() || max == 0.0 || max.is_subnormal() {
            // all channels are either NaN or zero
            // sub-normal numbers also map to zero
            return 0;
        }

        // the f32 exponent of max
        let raw_exp = max.to_bits() >> 23 & 0xFF;
        let mut exp = (raw_exp as i32 - 127 + 16).max(0) as u32;
        debug_assert!(exp <= 31);

        let f = two_powi(-(exp as i8 - 24));
        let mut r_mant = (r * f + 0.5) as u32;
        let mut g_mant = (g * f + 0.5) as u32;
        let mut b_mant = (b * f + 0.5) as u32;
        if r_mant == 512 || g_mant == 512 || b_mant == 512 {
            // The mantissa overflowed to 10 bits while rounding.
            exp += 1;
            debug_assert!(exp <= 31);

            let f = two_powi(-(exp as i8 - 24));
            r_mant = (r * f + 0.5) as u32;
            g_mant = (g * f + 0.5) as u32;
            b_mant = (b * f + 0.5) as u32;
        }
        debug_assert!(r_mant <= 511);
        debug_assert!(g_mant <= 511);
        debug_assert!(b_mant <= 511);

        r_mant << 23 | g_mant << 14 | b_mant << 5 | exp
    }

    #[cfg(test)]
    mod tests {
        use super::super::*;

        #[test]
        fn creation() {
            // these values are presented by zero
            let go_to_zero = [0.0, -1.0, 1e-20, f32::NAN, f32::NEG_INFINITY];
            for value in go_to_zero {
                assert_eq!(rgb9e5::f32(rgb9e5::from_f32([value, 0.0, 0.0]))[0], 0.0);
            }
            assert_eq!(rgb9e5::from_f32([0.0, 0.0, 0.0]), 0);

            // all 9-bit values should be presented exactly
            for value in (0..=512).map(|v| v as f32) {
                let actual = rgb9e5::f32(rgb9e5::from_f32([value, 0.0, 0.0]));
                assert_eq!(actual, [value, 0.0, 0.0]);
            }

            // overflow when rounding should be handled correctly
            let actual = rgb9e5::f32(rgb9e5::from_f32([1023.0, 0.0, 0.0]));
            assert_eq!(actual, [1024.0, 0.0, 0.0]);

            // values clamp to the largest representable value
            let actual = rgb9e5::f32(rgb9e5::from_f32([f32::INFINITY, 1e9, 0.0]));
            assert_eq!(actual, [rgb9e5::MAX, rgb9e5::MAX, 0.0]);

            // doesn't crash for any u16 values
            for value in (0..65556).map(|v| v as f32) {
                _ = rgb9e5::from_f32([value, 0.0, 1.0]);
            }
        }

        #[test]
        fn layout() {
            // 1.0 = 256 * 2^(16 - 24)
            assert_eq!(rgb9e5::from_f32([1.0, 0.0, 0.0]), 256 << 23 | 16);
            assert_eq!(rgb9e5::from_f32([0.0, 1.0, 0.0]), 256 << 14 | 16);
            assert_eq!(rgb9e5::from_f32([0.0, 0.0, 1.0]), 256 << 5 | 16);
        }
    }
}
