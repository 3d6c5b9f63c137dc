use super::*;

#[test]
fn first_level_uses_min_roughness_and_last_is_one() {
    for num_mips in 4..=14 {
        let s = RoughnessSchedule::new(num_mips);
        assert_eq!(s.roughness(0), s.min_roughness());
        assert!(s.min_roughness() > 0.0);
        assert_eq!(s.roughness(num_mips - 1), 1.0);
    }
}

#[test]
fn schedule_is_non_decreasing() {
    let s = RoughnessSchedule::new(9);
    let mut prev = 0.0;
    for mip in 0..9 {
        let r = s.roughness(mip);
        assert!(r >= prev);
        assert!((0.0..=1.0).contains(&r));
        prev = r;
    }
}

#[test]
fn last_three_levels_collapse_to_one() {
    let s = RoughnessSchedule::new(9);
    assert_eq!(s.roughness(6), 1.0);
    assert_eq!(s.roughness(7), 1.0);
    assert_eq!(s.roughness(8), 1.0);
    assert!(s.roughness(5) < 1.0);
}

#[test]
fn matches_linear_ramp_in_the_middle() {
    let s = RoughnessSchedule::new(9);
    assert_eq!(s.min_roughness(), 0.5 / 6.0);
    assert_eq!(s.roughness(3), 0.5);
}

#[test]
fn short_chains_are_guarded() {
    for num_mips in 0..4 {
        let s = RoughnessSchedule::new(num_mips);
        assert!(s.min_roughness().is_finite());
        assert_eq!(s.min_roughness(), 0.5);
        assert_eq!(s.roughness(0), 0.5);
        assert_eq!(s.roughness(1), 1.0);
    }
}
