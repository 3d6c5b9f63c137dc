use super::*;

#[test]
fn rgba_levels_halve_and_clamp() {
    assert_eq!(mip_size(DdsFormat::Rgba8, 16, 16, 0), Some(16 * 16 * 4));
    assert_eq!(mip_size(DdsFormat::Rgba8, 16, 16, 2), Some(4 * 4 * 4));
    assert_eq!(mip_size(DdsFormat::Rgba8, 16, 4, 3), Some(2 * 4));
    assert_eq!(mip_size(DdsFormat::Rgba8, 16, 16, 4), Some(4));
    assert_eq!(mip_size(DdsFormat::Rgba8, 16, 16, 5), Some(0));
    assert_eq!(mip_size(DdsFormat::Rgba8, 16, 16, 40), Some(0));
}

#[test]
fn block_formats_round_up_to_whole_blocks() {
    assert_eq!(mip_size(DdsFormat::Bc1, 16, 16, 0), Some(16 * 8));
    assert_eq!(mip_size(DdsFormat::Bc4, 16, 16, 0), Some(16 * 8));
    assert_eq!(mip_size(DdsFormat::Bc3, 16, 16, 0), Some(16 * 16));
    assert_eq!(mip_size(DdsFormat::Bc7, 5, 5, 0), Some(4 * 16));
    assert_eq!(mip_size(DdsFormat::Bc5, 16, 16, 4), Some(16));
}

#[test]
fn mip_count_stops_at_one_by_one() {
    assert_eq!(clamp_mip_count(16, 16, 99), 5);
    assert_eq!(clamp_mip_count(16, 4, 99), 5);
    assert_eq!(clamp_mip_count(16, 16, 3), 3);
    assert_eq!(clamp_mip_count(1, 1, 4), 1);
    assert_eq!(clamp_mip_count(0, 0, 4), 1);
}

#[test]
fn surface_size_sums_levels() {
    assert_eq!(
        surface_size(DdsFormat::Rgba8, 4, 4, 3),
        Some((16 + 4 + 1) * 4)
    );
    assert_eq!(surface_size(DdsFormat::Rgba8, 4, 4, 10), Some((16 + 4 + 1) * 4));
}

#[test]
fn oversized_surfaces_report_overflow() {
    assert_eq!(mip_size(DdsFormat::Rgba8, 1 << 31, 1 << 31, 0), None);
    assert_eq!(mip_size(DdsFormat::Rgba8, 1 << 31, 1 << 31, 1), Some((1 << 30) * (1 << 30) * 4));
    assert_eq!(surface_size(DdsFormat::Rgba8, u32::MAX, u32::MAX, 32), None);
    assert!(surface_size(DdsFormat::Bc1, u32::MAX, u32::MAX, 1).is_some());
}

#[test]
fn format_names() {
    assert_eq!(DdsFormat::Bc6h.to_string(), "BC6H");
    assert_eq!(DdsFormat::Rgba8.to_string(), "RGBA8");
    assert_eq!(DdsFormat::Rgba8.block_bytes(), None);
}
