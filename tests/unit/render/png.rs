use super::*;

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = vec![64u8, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..12], &[0, 0, 0, 0]);
}

#[test]
fn encodes_png_with_signature_and_dimensions() {
    let frame = FrameRGBA {
        width: 3,
        height: 2,
        data: [255u8, 0, 0, 255].repeat(6),
        premultiplied: true,
    };
    let bytes = encode_png(&frame).expect("encode");
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0, 255]);
}

#[test]
fn rejects_mismatched_buffer() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 7],
        premultiplied: false,
    };
    let err = encode_png(&frame).expect_err("bad size");
    assert!(err.to_string().contains("encode error:"));
}
