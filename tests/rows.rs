use texel_codec::*;

mod util;

const WIDTH: usize = 13;

#[test]
fn strided_rows_match_single_texels() {
    let mut rng = util::create_rng();
    for format in util::color_formats() {
        let byte_size = format.byte_size();
        let texels: Vec<[f32; 4]> = (0..WIDTH)
            .map(|_| util::random_rgba(&mut rng, 0.0, 1.0))
            .collect();

        for stride in [byte_size, byte_size + 1, 2 * byte_size + 3] {
            let len = (WIDTH - 1) * stride + byte_size;
            let mut row = vec![0xCD_u8; len];
            pack_float_rgba_row(format, &texels, &mut row, stride).unwrap();

            for (i, texel) in texels.iter().enumerate() {
                let start = i * stride;
                let single = util::pack_float(format, *texel);
                assert_eq!(&row[start..start + byte_size], single, "{:?}", format);

                // gaps between texels are untouched
                if i + 1 < WIDTH {
                    assert!(row[start + byte_size..start + stride]
                        .iter()
                        .all(|&b| b == 0xCD));
                }
            }

            let mut floats = vec![[0.0; 4]; WIDTH];
            unpack_float_rgba_row(format, &row, stride, &mut floats).unwrap();
            let mut bytes = vec![[0; 4]; WIDTH];
            unpack_ubyte_rgba_row(format, &row, stride, &mut bytes).unwrap();
            for i in 0..WIDTH {
                let texel = &row[i * stride..];
                assert_eq!(unpack_float_rgba(format, texel), Ok(floats[i]), "{:?}", format);
                assert_eq!(unpack_ubyte_rgba(format, texel), Ok(bytes[i]), "{:?}", format);
            }
        }
    }
}

#[test]
fn ubyte_unpack_matches_rounded_float() {
    let mut rng = util::create_rng();
    for format in util::color_formats() {
        let byte_size = format.byte_size();
        let src = util::random_bytes(&mut rng, 500 * byte_size);
        for texel in src.chunks_exact(byte_size) {
            let expected = unpack_float_rgba(format, texel)
                .unwrap()
                .map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
            assert_eq!(
                unpack_ubyte_rgba(format, texel),
                Ok(expected),
                "{:?}: {:?}",
                format,
                texel
            );
        }
    }
}

#[test]
fn integer_rows_match_single_texels() {
    let mut rng = util::create_rng();
    for format in util::integer_formats() {
        let byte_size = format.byte_size();
        let stride = byte_size + 2;
        let src = util::random_bytes(&mut rng, WIDTH * stride);

        let mut uints = vec![[0; 4]; WIDTH];
        unpack_uint_rgba_row(format, &src, stride, &mut uints).unwrap();

        let mut packed = vec![0; WIDTH * byte_size];
        pack_uint_rgba_row(format, &uints, &mut packed, byte_size).unwrap();

        for (i, texel) in uints.iter().enumerate() {
            assert_eq!(unpack_uint_rgba(format, &src[i * stride..]), Ok(*texel));
            assert_eq!(
                &packed[i * byte_size..(i + 1) * byte_size],
                util::pack_uint(format, *texel),
                "{:?}",
                format
            );
        }
    }
}

#[test]
fn invalid_rows_write_nothing() {
    let format = FormatId::R8G8B8A8_UNORM;
    let src = [[0.5_f32; 4]; 4];
    let mut dst = [0_u8; 16];

    assert_eq!(
        pack_float_rgba_row(format, &src, &mut dst, 3),
        Err(CodecError::StrideTooSmall {
            required_minimum: 4
        })
    );
    assert_eq!(
        pack_float_rgba_row(format, &src, &mut dst[..15], 4),
        Err(CodecError::UnexpectedBufferSize { expected: 16 })
    );
    assert_eq!(
        pack_float_rgba_row(FormatId::RGB_FXT1, &src, &mut dst, 4),
        Err(CodecError::UnsupportedFormat(FormatId::RGB_FXT1))
    );
    assert_eq!(dst, [0; 16]);

    let mut out = [[0.0; 4]; 4];
    assert_eq!(
        unpack_float_rgba_row(format, &dst, 5, &mut out),
        Err(CodecError::UnexpectedBufferSize { expected: 19 })
    );
    assert_eq!(unpack_float_rgba_row(format, &dst, 4, &mut []), Ok(()));
}

#[test]
fn rect_round_trip() {
    let format = FormatId::B5G6R5_UNORM;
    let (width, height) = (7_u32, 5_u32);
    let pitch = format.row_stride(width) + 6;
    let mut rng = util::create_rng();
    let image = util::random_bytes(&mut rng, pitch * height as usize);

    let rect = Rect::new(2, 1, 4, 3);
    let mut texels = vec![[0_u8; 4]; 4 * 3];
    unpack_ubyte_rgba_rect(format, &image, pitch, rect, &mut texels, 4).unwrap();

    let mut copy = vec![0_u8; image.len()];
    pack_ubyte_rgba_rect(format, &texels, 4, rect, &mut copy, pitch).unwrap();

    for y in 0..height as usize {
        for x in 0..width as usize {
            let start = y * pitch + x * 2;
            let inside = (1..4).contains(&y) && (2..6).contains(&x);
            let expected = if inside { &image[start..start + 2] } else { &[0, 0][..] };
            assert_eq!(&copy[start..start + 2], expected, "x: {}, y: {}", x, y);
        }
    }

    assert_eq!(
        unpack_ubyte_rgba_rect(format, &image, pitch, Rect::new(8, 0, 4, 1), &mut texels, 4),
        Err(CodecError::RectOutOfBounds)
    );
    assert_eq!(
        unpack_ubyte_rgba_rect(format, &image, 6, rect, &mut texels, 4),
        Err(CodecError::RowPitchTooSmall {
            required_minimum: 8
        })
    );
    assert_eq!(
        pack_ubyte_rgba_rect(format, &texels, 4, Rect::new(0, 0, 0, 0), &mut copy, pitch),
        Ok(())
    );
}

#[test]
fn integer_rect_round_trip() {
    let format = FormatId::RGBA_UINT16;
    let pitch = format.row_stride(3);
    let rect = Rect::new(1, 1, 2, 2);
    let src = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [65535, 0, 1, 2]];

    let mut image = vec![0_u8; pitch * 3];
    pack_uint_rgba_rect(format, &src, 2, rect, &mut image, pitch).unwrap();
    assert_eq!(&image[..pitch], vec![0; pitch]);

    let mut texels = [[0_u32; 4]; 4];
    unpack_uint_rgba_rect(format, &image, pitch, rect, &mut texels, 2).unwrap();
    assert_eq!(texels, src);
}
