use texel_codec::*;

mod util;

const CHANNELS: [ChannelMask; 4] = [ChannelMask::R, ChannelMask::G, ChannelMask::B, ChannelMask::A];

fn mask_of(format: FormatId, channels: ChannelMask) -> Option<Vec<u8>> {
    let mut mask = vec![0; format.byte_size()];
    pack_color_mask(format, channels, &mut mask).ok()?;
    Some(mask)
}

#[test]
fn channel_masks_partition_the_texel() {
    for format in util::color_formats() {
        let Some(all) = mask_of(format, ChannelMask::RGBA) else {
            continue;
        };
        let mut union = vec![0; format.byte_size()];
        for (i, &a) in CHANNELS.iter().enumerate() {
            let Some(mask_a) = mask_of(format, a) else {
                panic!("{:?}: no mask for {:?}", format, a);
            };
            for &b in &CHANNELS[i + 1..] {
                let Some(mask_b) = mask_of(format, b) else {
                    panic!("{:?}: no mask for {:?}", format, b);
                };
                for (x, y) in mask_a.iter().zip(&mask_b) {
                    assert_eq!(x & y, 0, "{:?}: {:?} overlaps {:?}", format, a, b);
                }
            }
            for (u, m) in union.iter_mut().zip(&mask_a) {
                *u |= m;
            }
        }
        assert_eq!(union, all, "{:?}", format);
        assert_eq!(mask_of(format, ChannelMask::empty()), Some(vec![0; format.byte_size()]));
    }
}

#[test]
fn masks_cover_whole_channels() {
    let cases: &[(FormatId, ChannelMask, &[u8])] = &[
        (FormatId::A8B8G8R8_UNORM, ChannelMask::R | ChannelMask::A, &[0xFF, 0, 0, 0xFF]),
        (FormatId::B8G8R8X8_UNORM, ChannelMask::RGBA, &[0, 0xFF, 0xFF, 0xFF]),
        (FormatId::B10G10R10A2_UNORM, ChannelMask::A, &[0x03, 0, 0, 0]),
        (FormatId::R8G8B8A8_SNORM, ChannelMask::G, &[0, 0, 0xFF, 0]),
        (FormatId::LA_FLOAT16, ChannelMask::A, &[0, 0, 0xFF, 0xFF]),
        (FormatId::RG_FLOAT32, ChannelMask::R, &[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]),
        (FormatId::L8A8_SRGB, ChannelMask::R, &[0, 0xFF]),
        (FormatId::I_UNORM8, ChannelMask::R, &[0xFF]),
        (FormatId::I_UNORM8, ChannelMask::G, &[0]),
    ];
    for &(format, channels, expected) in cases {
        assert_eq!(mask_of(format, channels).as_deref(), Some(expected), "{:?}", format);
    }
}

#[test]
fn unsupported_mask_layouts() {
    let mut mask = [0; 4];
    for format in [FormatId::R11G11B10_FLOAT, FormatId::R9G9B9E5_FLOAT, FormatId::RGBA_UINT8] {
        assert_eq!(
            pack_color_mask(format, ChannelMask::RGBA, &mut mask),
            Err(CodecError::UnsupportedFormat(format))
        );
    }
    assert_eq!(mask, [0; 4]);
}
