use super::*;

fn sample_directions() -> Vec<Vec3> {
    let mut dirs = vec![
        Vec3::X,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(-0.3, 0.8, 0.1).normalize(),
        Vec3::new(0.05, -0.02, -1.0).normalize(),
    ];
    for i in 0..24 {
        let t = i as f32 * 0.61;
        dirs.push(Vec3::new(t.sin(), (t * 1.7).cos(), (t * 0.3).sin() - 0.2).normalize());
    }
    dirs
}

#[test]
fn lobe_peaks_at_the_normal() {
    let lobe = GgxLobe::new(0.4);
    let peak = lobe.distribution(1.0);
    assert!(peak > lobe.distribution(0.9));
    assert!(lobe.distribution(0.9) > lobe.distribution(0.2));
    // d == aa at nl == 1
    assert!((peak - 1.0 / lobe.aa).abs() / peak < 1e-5);
}

#[test]
fn roughness_one_is_uniform() {
    let lobe = GgxLobe::new(1.0);
    assert_eq!(lobe.c1, 0.0);
    assert_eq!(lobe.distribution(0.1), lobe.distribution(0.9));
}

#[test]
fn coefficients_match_full_dot_product() {
    let res = 7;
    for n in sample_directions() {
        for face in CubeFace::ALL {
            let scan = FaceScan::new(n, face, res);
            let frame = face.frame();
            for y in 0..res {
                for x in 0..res {
                    let (u, v) = (scan.coord(x), scan.coord(y));
                    let expected = n.dot(frame.point(u, v));
                    assert!((scan.raw_nl(u, v) - expected).abs() < 1e-5);
                }
            }
        }
    }
}

#[test]
fn stepped_rows_track_direct_evaluation() {
    let res = 32;
    for n in sample_directions() {
        for face in CubeFace::ALL {
            let scan = FaceScan::new(n, face, res);
            for row in scan.rows() {
                let direct = scan.b * scan.coord(row.y) + scan.c;
                assert!((row.offset - direct).abs() < 1e-4, "{face} row {}", row.y);

                let mut nl = scan.nl_at(row.offset, row.columns.start);
                for x in row.columns.clone() {
                    let expected = scan.raw_nl(scan.coord(x), scan.coord(row.y));
                    assert!((nl - expected).abs() < 1e-4);
                    nl += scan.dx();
                }
            }
        }
    }
}

#[test]
fn scan_covers_every_positive_texel() {
    for res in [1, 2, 5, 16] {
        for n in sample_directions() {
            for face in CubeFace::ALL {
                let scan = FaceScan::new(n, face, res);
                let rows: Vec<ScanRow> = scan.rows().collect();
                for y in 0..res {
                    for x in 0..res {
                        if scan.raw_nl(scan.coord(x), scan.coord(y)) <= 1e-6 {
                            continue;
                        }
                        let covered = rows
                            .iter()
                            .any(|row| row.y == y && row.columns.contains(&x));
                        assert!(covered, "res {res} {face} texel ({x}, {y}) missed for {n}");
                    }
                }
            }
        }
    }
}

#[test]
fn back_facing_face_is_skipped_entirely() {
    let scan = FaceScan::new(Vec3::Z, CubeFace::NegZ, 8);
    assert_eq!(scan.rows().count(), 0);
    assert!(scan.row_range().is_empty());
}

#[test]
fn facing_face_is_scanned_entirely() {
    let scan = FaceScan::new(Vec3::Z, CubeFace::PosZ, 8);
    let rows: Vec<ScanRow> = scan.rows().collect();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.columns == (0..8)));
}

#[test]
fn positive_span_edges() {
    assert_eq!(positive_span(0.0, 1.0, 4), 0..4);
    assert_eq!(positive_span(0.0, -1.0, 4), 0..0);
    assert_eq!(positive_span(1.0, -2.0, 4), 0..0);
    assert_eq!(positive_span(f32::NAN, 1.0, 4), 0..0);

    // f(i) = center(i): positive for i >= 2 when n == 4
    let span = positive_span(1.0, 0.0, 4);
    assert!(span.start <= 2 && span.end == 4);
    // f(i) = -center(i): positive for i < 2
    let span = positive_span(-1.0, 0.0, 4);
    assert!(span.start == 0 && span.end >= 2 && span.end <= 4);
}
