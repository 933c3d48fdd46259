//! The sRGB transfer function for 8-bit channels.
//!
//! Decoding uses a 256-entry table that is built on first use. Encoding is
//! computed analytically, since its input is continuous.

use std::sync::OnceLock;

fn decode_table() -> &'static [f32; 256] {
    static TABLE: OnceLock<[f32; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0.0; 256];
        for (i, value) in table.iter_mut().enumerate() {
            let cs = i as f64 / 255.0;
            let linear = if cs <= 0.04045 {
                cs / 12.92
            } else {
                ((cs + 0.055) / 1.055).powf(2.4)
            };
            *value = linear as f32;
        }
        table
    })
}

/// Converts an sRGB-encoded byte to a linear value in `[0, 1]`.
#[inline]
pub(crate) fn srgb8_to_linear(x: u8) -> f32 {
    decode_table()[x as usize]
}

/// Converts an sRGB-encoded byte to a linear byte.
#[inline]
pub(crate) fn srgb8_to_linear8(x: u8) -> u8 {
    super::fp::n8(srgb8_to_linear(x))
}

/// Converts a linear value to the closest sRGB-encoded byte.
///
/// Values outside `[0, 1]` are clamped. NaN encodes as 0.
pub(crate) fn linear_to_srgb8(x: f32) -> u8 {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    let cs = if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    };
    (cs * 255.0 + 0.5) as u8
}

/// Converts a linear byte to an sRGB-encoded byte.
#[inline]
pub(crate) fn linear8_to_srgb8(x: u8) -> u8 {
    linear_to_srgb8(super::n8::f32(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_endpoints() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert_eq!(srgb8_to_linear(255), 1.0);
        assert_eq!(srgb8_to_linear8(0), 0);
        assert_eq!(srgb8_to_linear8(255), 255);
        assert_eq!(srgb8_to_linear8(188), 128);
    }

    #[test]
    fn decode_is_monotonic() {
        for i in 1..=255_u8 {
            assert!(srgb8_to_linear(i - 1) < srgb8_to_linear(i), "i: {}", i);
        }
    }

    #[test]
    fn encode_inverts_decode() {
        for i in 0..=255_u8 {
            assert_eq!(linear_to_srgb8(srgb8_to_linear(i)), i, "i: {}", i);
        }
    }

    #[test]
    fn encode_clamps() {
        assert_eq!(linear_to_srgb8(-1.0), 0);
        assert_eq!(linear_to_srgb8(2.0), 255);
        assert_eq!(linear_to_srgb8(f32::INFINITY), 255);
        assert_eq!(linear_to_srgb8(f32::NAN), 0);
        assert_eq!(linear8_to_srgb8(255), 255);
    }
}
