use super::*;

#[test]
fn rotation_from_degrees_converts_each_axis() {
    let r = Rotation::from_degrees(180.0, 90.0, -45.0);
    assert!((r.x - std::f64::consts::PI).abs() < 1e-12);
    assert!((r.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((r.z + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn rotation_accumulates_without_wrapping() {
    let mut r = Rotation::default();
    for _ in 0..10_000 {
        r.accumulate(Rotation::new(0.002, 0.003, 0.001));
    }
    assert!((r.x - 20.0).abs() < 1e-9);
    assert!((r.y - 30.0).abs() < 1e-9);
    assert!((r.z - 10.0).abs() < 1e-9);
}

#[test]
fn rgba_css_and_premul() {
    let c = Rgba::rgb(255, 105, 105).with_alpha(0.5);
    assert_eq!(c.to_css(), "rgba(255, 105, 105, 0.5)");
    assert_eq!(c.to_premul_rgba8(), [128, 53, 53, 128]);
    assert_eq!(Rgba::BLACK.to_premul_rgba8(), [0, 0, 0, 255]);
}

#[test]
fn rgba_alpha_is_clamped() {
    assert_eq!(Rgba::BLACK.with_alpha(3.0).a, 1.0);
    assert_eq!(Rgba::BLACK.with_alpha(-1.0).a, 0.0);
    assert_eq!(Rgba::BLACK.with_alpha(0.8).fade(0.5).a, 0.4);
}

#[test]
fn depth_reads_z() {
    assert_eq!(Point3D::new(1.0, 2.0, -3.0).depth(), Some(-3.0));
    let p = ProjectedPoint {
        x: 0.0,
        y: 0.0,
        z: 7.0,
        scale: None,
    };
    assert_eq!((&p).depth(), Some(7.0));
}
