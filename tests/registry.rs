use texel_codec::*;

mod util;

#[test]
fn raw_ids_round_trip() {
    for format in FormatId::ALL {
        let raw: u32 = format.into();
        assert_eq!(FormatId::from_raw(raw), Ok(format));
        assert_eq!(describe_raw(raw).id, format);
    }

    let unknown = FormatId::COUNT as u32;
    assert_eq!(
        FormatId::from_raw(unknown),
        Err(CodecError::InvalidFormatId(unknown))
    );
    assert_eq!(describe_raw(unknown).id, FormatId::NONE);
    assert_eq!(describe_raw(u32::MAX).id, FormatId::NONE);
}

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = FormatId::ALL.iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), FormatId::COUNT);

    assert_eq!(FormatId::R5G6B5_UNORM.name(), "R5G6B5_UNORM");
}

#[test]
fn bits_fit_into_texels() {
    for format in FormatId::ALL {
        if format.is_compressed() || format == FormatId::NONE {
            continue;
        }
        let bits = format.channel_bits().total();
        assert!(
            bits <= format.byte_size() as u32 * 8,
            "{:?} stores {} bits in {} bytes",
            format,
            bits,
            format.byte_size()
        );
    }
}

#[test]
fn compressed_formats_use_blocks() {
    for format in FormatId::ALL {
        let (w, h) = format.block_size();
        if format.is_compressed() {
            assert!(w > 1 && h > 1, "{:?}", format);
            assert!(!format.is_supported(), "{:?}", format);
        } else {
            assert_eq!((w, h), (1, 1), "{:?}", format);
        }
    }

    assert_eq!(FormatId::RGBA_DXT5.row_stride(5), 32);
    assert_eq!(FormatId::RGBA_DXT5.image_size(5, 5), 64);
    assert_eq!(FormatId::RGB_UNORM8.row_stride(5), 15);
}

#[test]
fn srgb_formats_have_linear_equivalents() {
    for format in FormatId::ALL {
        let linear = format.linear_equivalent();
        assert!(!linear.is_srgb(), "{:?}", format);
        assert_eq!(linear.byte_size(), format.byte_size(), "{:?}", format);
        assert_eq!(linear.base_format(), format.base_format(), "{:?}", format);
        if !format.is_srgb() {
            assert_eq!(linear, format);
        }
    }
}

#[test]
fn unsupported_formats_have_no_codec() {
    let texel = [0_u8; 16];
    let mut out = [0_u8; 16];
    for format in util::unsupported_formats() {
        let expected = Err(CodecError::UnsupportedFormat(format));
        assert_eq!(unpack_float_rgba(format, &texel).map(|_| ()), expected);
        assert_eq!(unpack_ubyte_rgba(format, &texel).map(|_| ()), expected);
        assert_eq!(pack_float_rgba(format, &[0.0; 4], &mut out), expected);
        assert_eq!(pack_ubyte_rgba(format, &[0; 4], &mut out), expected);
        assert_eq!(pack_color_mask(format, ChannelMask::RGBA, &mut out), expected);
    }
    assert_eq!(out, [0; 16]);
}

#[test]
fn integer_formats_have_no_color_packers() {
    let mut out = [0_u8; 16];
    for format in util::integer_formats() {
        let expected = Err(CodecError::UnsupportedFormat(format));
        assert_eq!(pack_float_rgba(format, &[0.0; 4], &mut out), expected);
        assert_eq!(pack_ubyte_rgba(format, &[0; 4], &mut out), expected);

        assert!(unpack_float_rgba(format, &out).is_ok(), "{:?}", format);
        assert!(pack_uint_rgba(format, &[0; 4], &mut out).is_ok(), "{:?}", format);
    }

    for format in util::color_formats() {
        assert_eq!(
            pack_uint_rgba(format, &[0; 4], &mut out),
            Err(CodecError::UnsupportedFormat(format))
        );
    }
}

#[test]
fn depth_formats_only_unpack_as_color() {
    let mut out = [0_u8; 16];
    for format in util::depth_stencil_formats() {
        let expected = Err(CodecError::UnsupportedFormat(format));
        assert_eq!(pack_float_rgba(format, &[0.0; 4], &mut out), expected);
        assert_eq!(pack_ubyte_rgba(format, &[0; 4], &mut out), expected);

        assert!(unpack_float_rgba(format, &out).is_ok(), "{:?}", format);
        assert!(unpack_ubyte_rgba(format, &out).is_ok(), "{:?}", format);
    }
}
