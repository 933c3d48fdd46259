use rand::Rng;
use texel_codec::*;

mod util;

const WIDTH: usize = 64;

fn combined_formats() -> impl Iterator<Item = FormatId> {
    util::depth_stencil_formats().filter(|f| f.has_depth() && f.has_stencil())
}

#[test]
fn depth_writes_keep_stencil() {
    let mut rng = util::create_rng();
    for format in combined_formats() {
        let mut texels = util::random_bytes(&mut rng, WIDTH * format.byte_size());
        let mut before = vec![0; WIDTH];
        unpack_stencil_row(format, &texels, &mut before).unwrap();

        let depth: Vec<f32> = (0..WIDTH).map(|_| rng.gen_range(0.0..=1.0)).collect();
        pack_float_z_row(format, &depth, &mut texels).unwrap();
        let mut after = vec![0; WIDTH];
        unpack_stencil_row(format, &texels, &mut after).unwrap();
        assert_eq!(before, after, "{:?}", format);

        let depth: Vec<u32> = (0..WIDTH).map(|_| rng.gen()).collect();
        pack_uint_z_row(format, &depth, &mut texels).unwrap();
        unpack_stencil_row(format, &texels, &mut after).unwrap();
        assert_eq!(before, after, "{:?}", format);
    }
}

#[test]
fn stencil_writes_keep_depth() {
    let mut rng = util::create_rng();
    for format in combined_formats() {
        let mut texels = util::random_bytes(&mut rng, WIDTH * format.byte_size());
        let original = texels.clone();
        let mut before = vec![0; WIDTH];
        unpack_uint_z_row(format, &texels, &mut before).unwrap();

        let stencil = util::random_bytes(&mut rng, WIDTH);
        pack_stencil_row(format, &stencil, &mut texels).unwrap();

        let mut after = vec![0; WIDTH];
        unpack_uint_z_row(format, &texels, &mut after).unwrap();
        assert_eq!(before, after, "{:?}", format);

        let mut read_back = vec![0; WIDTH];
        unpack_stencil_row(format, &texels, &mut read_back).unwrap();
        assert_eq!(stencil, read_back, "{:?}", format);

        if format == FormatId::Z32_FLOAT_S8X24_UINT {
            // the depth and the unused 24 bits stay as they were
            for (new, old) in texels.chunks_exact(8).zip(original.chunks_exact(8)) {
                assert_eq!(new[..4], old[..4]);
                assert_eq!(new[5..], old[5..]);
            }
        }
    }
}

#[test]
fn uint_depth_keeps_most_significant_bits() {
    let mut rng = util::create_rng();
    for format in util::depth_stencil_formats().filter(|f| f.has_depth()) {
        if format.numeric_class() == NumericClass::Float {
            continue;
        }
        let bits = format.channel_bits().depth as u32;
        let mut texels = vec![0; WIDTH * format.byte_size()];
        let depth: Vec<u32> = (0..WIDTH).map(|_| rng.gen()).collect();
        pack_uint_z_row(format, &depth, &mut texels).unwrap();

        let mut read_back = vec![0; WIDTH];
        unpack_uint_z_row(format, &texels, &mut read_back).unwrap();
        for (&z, &actual) in depth.iter().zip(&read_back) {
            assert_eq!(actual >> (32 - bits), z >> (32 - bits), "{:?}", format);
        }
    }
}

#[test]
fn float_depth_is_clamped_for_normalized_formats() {
    for format in util::depth_stencil_formats().filter(|f| f.has_depth()) {
        let mut texel = vec![0; format.byte_size()];
        pack_float_z(format, 2.0, &mut texel).unwrap();
        let z = unpack_float_z(format, &texel).unwrap();
        if format.numeric_class() == NumericClass::Float {
            assert_eq!(z, 2.0, "{:?}", format);
        } else {
            assert_eq!(z, 1.0, "{:?}", format);
            assert_eq!(unpack_uint_z(format, &texel), Ok(u32::MAX), "{:?}", format);
        }

        pack_float_z(format, -1.0, &mut texel).unwrap();
        if format.numeric_class() != NumericClass::Float {
            assert_eq!(unpack_float_z(format, &texel), Ok(0.0), "{:?}", format);
        }
    }
}

#[test]
fn combined_words() {
    let words = [0x1234_5678_u32, 0xFFFF_FF00, 0x0000_00FF];
    for format in [FormatId::S8_UINT_Z24_UNORM, FormatId::Z24_UNORM_S8_UINT] {
        let mut texels = [0; 12];
        pack_uint_24_8_depth_stencil_row(format, &words, &mut texels).unwrap();

        let mut read_back = [0; 3];
        unpack_uint_24_8_depth_stencil_row(format, &texels, &mut read_back).unwrap();
        assert_eq!(read_back, words, "{:?}", format);

        let mut stencil = [0; 3];
        unpack_stencil_row(format, &texels, &mut stencil).unwrap();
        assert_eq!(stencil, [0x78, 0x00, 0xFF], "{:?}", format);

        let mut pairs = [Z32FloatS8X24::default(); 3];
        unpack_float_32_uint_24_8_depth_stencil_row(format, &texels, &mut pairs).unwrap();
        assert_eq!(pairs[1].z, 1.0);
        assert_eq!(pairs[2].z, 0.0);
        assert_eq!(pairs.map(|p| p.stencil()), [0x78, 0x00, 0xFF]);
    }

    let format = FormatId::Z32_FLOAT_S8X24_UINT;
    let mut texels = [0; 24];
    pack_uint_24_8_depth_stencil_row(format, &words, &mut texels).unwrap();
    let mut pairs = [Z32FloatS8X24::default(); 3];
    unpack_float_32_uint_24_8_depth_stencil_row(format, &texels, &mut pairs).unwrap();
    assert_eq!(pairs[1], Z32FloatS8X24::new(1.0, 0x00));
    assert_eq!(pairs[2], Z32FloatS8X24::new(0.0, 0xFF));
}

#[test]
fn missing_channels_are_unsupported() {
    let mut texel = [0; 8];
    for format in [FormatId::Z_UNORM16, FormatId::Z_FLOAT32, FormatId::X8_UINT_Z24_UNORM] {
        assert_eq!(
            pack_stencil(format, 1, &mut texel),
            Err(CodecError::UnsupportedFormat(format))
        );
        assert_eq!(
            pack_uint_24_8_depth_stencil_row(format, &[0], &mut texel),
            Err(CodecError::UnsupportedFormat(format))
        );
    }
    assert_eq!(
        pack_float_z(FormatId::S_UINT8, 1.0, &mut texel),
        Err(CodecError::UnsupportedFormat(FormatId::S_UINT8))
    );
    assert_eq!(
        pack_float_z(FormatId::R8G8B8A8_UNORM, 1.0, &mut texel),
        Err(CodecError::UnsupportedFormat(FormatId::R8G8B8A8_UNORM))
    );
    assert_eq!(
        pack_float_z(FormatId::Z_UNORM16, 1.0, &mut texel[..1]),
        Err(CodecError::UnexpectedBufferSize { expected: 2 })
    );
}
