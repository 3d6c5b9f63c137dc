use std::f64::consts::PI;

use super::*;

fn sphere_sum(res: u32) -> f64 {
    let inv = 1.0 / res as f32;
    let mut face_sum = 0.0f64;
    for y in 0..res {
        for x in 0..res {
            face_sum += f64::from(solid_angle_term(x, y, inv));
        }
    }
    face_sum * 6.0
}

#[test]
fn area_element_is_zero_on_the_axes() {
    assert_eq!(area_element(0.0, 0.7), 0.0);
    assert_eq!(area_element(0.3, 0.0), 0.0);
}

#[test]
fn solid_angle_is_positive_over_the_face() {
    for res in [1u32, 2, 3, 8, 64] {
        let inv = 1.0 / res as f32;
        for y in 0..res {
            for x in 0..res {
                assert!(solid_angle_term(x, y, inv) > 0.0, "res {res} ({x},{y})");
            }
        }
    }
}

#[test]
fn center_texels_subtend_more_than_corners() {
    let res = 16;
    let inv = 1.0 / res as f32;
    let center = solid_angle_term(8, 8, inv);
    let corner = solid_angle_term(0, 0, inv);
    assert!(center > corner);
}

#[test]
fn whole_face_is_a_sixth_of_the_sphere() {
    let one = f64::from(solid_angle_term(0, 0, 1.0));
    assert!((one - 4.0 * PI / 6.0).abs() < 1e-5);
}

#[test]
fn faces_sum_to_full_sphere() {
    let mut best_err = f64::INFINITY;
    for res in [4u32, 16, 64] {
        let err = (sphere_sum(res) - 4.0 * PI).abs() / (4.0 * PI);
        assert!(err < 1e-3, "res {res}: relative error {err}");
        best_err = best_err.min(err);
    }
    assert!(best_err < 1e-4);
}
