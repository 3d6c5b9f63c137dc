use super::*;

fn cube(res: u32, num_mips: u32, flags: DdsFlags) -> DdsImage {
    let mut image = DdsImage {
        format: DdsFormat::Rgba8,
        flags: flags | DdsFlags::CUBEMAP,
        width: res,
        height: res,
        num_mips,
        data: Vec::new(),
    };
    image.data = (0..image.expected_payload_len().unwrap())
        .map(|i| (i % 253) as u8)
        .collect();
    image
}

#[test]
fn cubemap_round_trips_through_bytes() {
    for flags in [DdsFlags::empty(), DdsFlags::SRGB] {
        let image = cube(8, 4, flags);
        assert_eq!(image.data.len(), 6 * (64 + 16 + 4 + 1) * 4);
        let bytes = image.to_bytes().unwrap();
        assert_eq!(&bytes[..4], b"DDS ");
        let back = DdsImage::from_bytes(&bytes).unwrap();
        assert_eq!(back, image);
    }
}

#[test]
fn srgb_output_carries_a_dx10_header() {
    let plain = cube(4, 1, DdsFlags::empty()).to_bytes().unwrap();
    let srgb = cube(4, 1, DdsFlags::SRGB).to_bytes().unwrap();
    assert_eq!(srgb.len(), plain.len() + DX10_HEADER_LEN);
}

#[test]
fn mip_count_is_truncated_on_save() {
    let mut image = cube(4, 3, DdsFlags::empty());
    image.num_mips = 9;
    let back = DdsImage::from_bytes(&image.to_bytes().unwrap()).unwrap();
    assert_eq!(back.num_mips, 3);
    assert_eq!(back.data, image.data);
}

#[test]
fn short_payload_is_rejected() {
    let bytes = cube(4, 2, DdsFlags::empty()).to_bytes().unwrap();
    let err = DdsImage::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, GgxError::Format(_)));

    let mut image = cube(4, 2, DdsFlags::empty());
    image.data.pop();
    assert!(matches!(image.to_bytes(), Err(GgxError::Validation(_))));
}

#[test]
fn trailing_bytes_are_ignored() {
    let image = cube(2, 1, DdsFlags::empty());
    let mut bytes = image.to_bytes().unwrap();
    bytes.extend_from_slice(&[9, 9, 9]);
    assert_eq!(DdsImage::from_bytes(&bytes).unwrap(), image);
}

#[test]
fn bad_magic_and_short_files_are_format_errors() {
    assert!(matches!(DdsImage::from_bytes(b"DDS "), Err(GgxError::Format(_))));
    let mut bytes = cube(2, 1, DdsFlags::empty()).to_bytes().unwrap();
    bytes[0] = b'X';
    assert!(matches!(DdsImage::from_bytes(&bytes), Err(GgxError::Format(_))));
}

fn with_dimensions(mut bytes: Vec<u8>, width: u32, height: u32) -> Vec<u8> {
    bytes[12..16].copy_from_slice(&height.to_le_bytes());
    bytes[16..20].copy_from_slice(&width.to_le_bytes());
    bytes
}

#[test]
fn huge_dimensions_are_format_errors() {
    let bytes = cube(1, 1, DdsFlags::empty()).to_bytes().unwrap();

    // One face alone overflows.
    let err = DdsImage::from_bytes(&with_dimensions(bytes.clone(), 1 << 31, 1 << 31)).unwrap_err();
    assert!(matches!(err, GgxError::Format(_)), "{err}");
    assert!(err.to_string().contains("overflow"));

    // One face fits, six do not.
    let err = DdsImage::from_bytes(&with_dimensions(bytes.clone(), 1 << 30, 1 << 30)).unwrap_err();
    assert!(matches!(err, GgxError::Format(_)), "{err}");

    // Large but addressable: a short payload, not an overflow.
    let err = DdsImage::from_bytes(&with_dimensions(bytes, 1 << 16, 1 << 16)).unwrap_err();
    assert!(matches!(err, GgxError::Format(_)), "{err}");
    assert!(!err.to_string().contains("overflow"));
}

#[test]
fn saving_huge_dimensions_fails_cleanly() {
    let mut image = cube(1, 1, DdsFlags::empty());
    image.width = u32::MAX;
    image.height = u32::MAX;
    assert!(matches!(image.expected_payload_len(), Err(GgxError::Format(_))));
    assert!(matches!(image.to_bytes(), Err(GgxError::Format(_))));
}

#[test]
fn save_and_load_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.dds");
    let image = cube(4, 3, DdsFlags::SRGB);
    image.save(&path).unwrap();
    assert_eq!(DdsImage::load(&path).unwrap(), image);

    let missing = dir.path().join("missing.dds");
    let err = DdsImage::load(&missing).unwrap_err();
    assert!(matches!(err, GgxError::Io { .. }));
    assert!(err.to_string().contains("missing.dds"));
}
