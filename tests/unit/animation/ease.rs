use super::*;

const ALL: [Ease; 4] = [
    Ease::Linear,
    Ease::InOutQuad,
    Ease::OutPow(4.0),
    Ease::OutPow(7.0),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn in_out_quad_is_symmetric_around_half() {
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.75) - 0.875).abs() < 1e-12);
}

#[test]
fn out_pow_is_front_loaded() {
    let sharp = Ease::OutPow(7.0);
    assert!(sharp.apply(0.1) > 0.5);
    assert!(sharp.apply(0.1) > Ease::OutPow(2.0).apply(0.1));
}

#[test]
fn inputs_are_clamped() {
    assert_eq!(Ease::InOutQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::OutPow(3.0).apply(9.0), 1.0);
}

#[test]
fn progress_clamps_and_handles_zero_duration() {
    assert_eq!(progress(125.0, 250.0), 0.5);
    assert_eq!(progress(400.0, 250.0), 1.0);
    assert_eq!(progress(-5.0, 250.0), 0.0);
    assert_eq!(progress(0.0, 0.0), 1.0);
}
