use super::*;

fn solid_faces(res: u32, colors: [[u8; 4]; 6]) -> Vec<u8> {
    let mut out = Vec::with_capacity((res * res * 24) as usize);
    for color in colors {
        for _ in 0..res * res {
            out.extend_from_slice(&color);
        }
    }
    out
}

#[test]
fn rejects_wrong_sizes() {
    assert!(SourceBuffer::from_rgba8(0, &[]).is_err());
    assert!(SourceBuffer::from_rgba8(2, &[0u8; 95]).is_err());
    assert!(SourceBuffer::from_rgba8(2, &[0u8; 96]).is_ok());
}

#[test]
fn rows_are_padded_to_lane_width() {
    let buf = SourceBuffer::from_rgba8(3, &solid_faces(3, [[0; 4]; 6])).unwrap();
    assert_eq!(buf.resolution(), 3);
    assert_eq!(buf.stride(), 4);

    let row = buf.row(CubeFace::NegY, 2);
    assert_eq!(row.inv_dist.len(), 4);
    assert_eq!(row.solid_angle[3], 0.0);
    assert_eq!(row.inv_dist[3], 0.0);
    assert!(row.solid_angle[2] > 0.0);
}

#[test]
fn colors_are_linearized_per_face() {
    let colors = [
        [255, 0, 0, 7],
        [0, 255, 0, 7],
        [0, 0, 255, 7],
        [128, 128, 128, 7],
        [1, 2, 3, 7],
        [0, 0, 0, 7],
    ];
    let buf = SourceBuffer::from_rgba8(4, &solid_faces(4, colors)).unwrap();
    for (face, color) in CubeFace::ALL.into_iter().zip(colors) {
        let t = buf.texel(face, 1, 2).unwrap();
        assert_eq!(
            t.color,
            [
                decode_srgb8(color[0]),
                decode_srgb8(color[1]),
                decode_srgb8(color[2])
            ]
        );
    }
    assert!(buf.texel(CubeFace::PosX, 4, 0).is_none());
}

#[test]
fn inv_dist_is_reciprocal_hemicube_distance() {
    let res = 8u32;
    let buf = SourceBuffer::from_rgba8(res, &solid_faces(res, [[0; 4]; 6])).unwrap();
    for y in 0..res as usize {
        for x in 0..res as usize {
            let u = (2 * x + 1) as f32 / res as f32 - 1.0;
            let v = (2 * y + 1) as f32 / res as f32 - 1.0;
            let expected = 1.0 / (u * u + v * v + 1.0).sqrt();
            let t = buf.texel(CubeFace::PosZ, x, y).unwrap();
            assert!((t.inv_dist - expected).abs() < 1e-6);
            assert!(t.inv_dist <= 1.0 && t.inv_dist > 0.57);
        }
    }
}

#[test]
fn face_solid_angles_sum_to_a_sixth_of_the_sphere() {
    let res = 16u32;
    let buf = SourceBuffer::from_rgba8(res, &solid_faces(res, [[0; 4]; 6])).unwrap();
    for face in CubeFace::ALL {
        let mut sum = 0.0f64;
        for y in 0..res as usize {
            for x in 0..res as usize {
                sum += f64::from(buf.texel(face, x, y).unwrap().solid_angle);
            }
        }
        let expected = 4.0 * std::f64::consts::PI / 6.0;
        assert!((sum - expected).abs() / expected < 1e-4, "{face}: {sum}");
    }
}
