use super::*;

#[test]
fn every_code_round_trips() {
    for code in 0..=255u8 {
        assert_eq!(encode_srgb8(decode_srgb8(code)), code, "code {code}");
    }
}

#[test]
fn decode_is_strictly_increasing() {
    for code in 1..=255u8 {
        assert!(decode_srgb8(code) > decode_srgb8(code - 1));
    }
    assert_eq!(decode_srgb8(0), 0.0);
    assert_eq!(decode_srgb8(255), 1.0);
}

#[test]
fn out_of_range_inputs_clamp() {
    assert_eq!(encode_srgb8(-1.0), 0);
    assert_eq!(encode_srgb8(-0.0), 0);
    assert_eq!(encode_srgb8(f32::NAN), 0);
    assert_eq!(encode_srgb8(f32::NEG_INFINITY), 0);
    assert_eq!(encode_srgb8(1.0), 255);
    assert_eq!(encode_srgb8(3.5), 255);
    assert_eq!(encode_srgb8(f32::INFINITY), 255);
}

#[test]
fn encode_is_monotonic_and_close_to_reference() {
    // Sweep [0, 1] through the float bit patterns so every table segment is visited.
    let end = 1.0f32.to_bits();
    let mut prev = 0u8;
    let mut bits = 0u32;
    while bits <= end {
        let x = f32::from_bits(bits);
        let code = encode_srgb8(x);
        assert!(code >= prev, "not monotonic at {x}");
        let err = (f32::from(code) - reference_srgb8(x)).abs();
        assert!(err < 0.6, "error {err} at {x}");
        prev = code;
        bits += 4099;
    }
}

#[test]
fn opaque_encode_sets_alpha() {
    assert_eq!(encode_rgb_opaque([0.0, 1.0, 2.0]), [0, 255, 255, 255]);
    assert_eq!(encode_rgb_opaque([0.5; 3])[3], 255);
}
