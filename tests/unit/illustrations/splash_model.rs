use super::*;

const SHAPES: &str = r#"<svg viewBox="0 0 200 200">
  <polygon class="cls-1" points="100,50 150,150 50,150"/>
  <rect class="cls-1" x="20" y="20" width="40" height="30"/>
  <polygon class="cls-1" points="10,10 20,20"/>
  <polygon class="cls-2" points="0,0 5,5 10,0"/>
</svg>"#;

fn config() -> SplashConfig {
    SplashConfig {
        background_color: Some("--bg".into()),
        ..SplashConfig::default()
    }
}

fn loaded(config: SplashConfig) -> SplashModel {
    let mut m = SplashModel::new(config);
    m.load_text(SHAPES).unwrap();
    m
}

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(f64::total_cmp);
    v
}

#[test]
fn rects_come_first_and_take_pool_depths_in_order() {
    let m = loaded(SplashConfig {
        scale: Some(1.0),
        ..config()
    });
    let kinds: Vec<SplashObjectKind> = m.objects().iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SplashObjectKind::Rect,
            SplashObjectKind::Polygon,
            SplashObjectKind::Polygon
        ]
    );
    assert_eq!(m.depths(), vec![-75.0, 15.0, -105.0]);
    assert_eq!(m.objects()[0].original_points[0], Point::new(-80.0, -80.0));
    assert_eq!(m.objects()[0].original_points.len(), 4);
}

#[test]
fn objects_past_the_pool_sit_at_zero() {
    let mut text = String::from(r#"<svg viewBox="0 0 100 100">"#);
    for i in 0..12 {
        text.push_str(&format!(
            r#"<rect class="cls-1" x="{i}" y="0" width="5" height="5"/>"#
        ));
    }
    text.push_str("</svg>");
    let mut m = SplashModel::new(config());
    m.load_text(&text).unwrap();
    let depths = m.depths();
    assert_eq!(depths.len(), 12);
    assert_eq!(&depths[..10], &DEFAULT_Z[..]);
    assert_eq!(&depths[10..], &[0.0, 0.0]);
}

const DEFAULT_Z: [f64; 10] = crate::illustrations::splash::config::DEFAULT_Z_COORDINATES;

#[test]
fn auto_scale_is_clamped() {
    let m = loaded(config());
    assert!((0.1..=10.0).contains(&m.scale()));
}

#[test]
fn sway_runs_a_full_round_trip() {
    let cfg = config();
    let a = 30f64.to_radians();
    assert!((sway_angle(0.0, &cfg) + a).abs() < 1e-12);
    assert!(sway_angle(4_000.0, &cfg).abs() < 1e-12);
    assert!((sway_angle(8_000.0, &cfg) - a).abs() < 1e-12);
    assert!(sway_angle(12_000.0, &cfg).abs() < 1e-12);
    assert!((sway_angle(16_000.0, &cfg) + a).abs() < 1e-12);
}

#[test]
fn first_update_latches_without_reshuffling() {
    let mut m = loaded(config());
    m.update(5_000.0);
    assert!(m.depth_change().is_none());
    assert!((m.rotation_y() + 30f64.to_radians()).abs() < 1e-12);
    m.update(5_999.0);
    assert!(m.depth_change().is_none());
    m.update(6_000.0);
    assert!(m.depth_change().is_some());
}

#[test]
fn reshuffle_completes_exactly_on_its_targets() {
    let mut m = loaded(config());
    m.update(0.0);
    m.update(1_000.0);
    let change = m.depth_change().cloned().unwrap();
    assert_eq!(change.start_z, vec![-75.0, 15.0, -105.0]);

    m.update(2_500.0);
    for (obj, (s, t)) in m.objects().iter().zip(change.start_z.iter().zip(&change.target_z)) {
        let lo = s.min(*t);
        let hi = s.max(*t);
        assert!(obj.z >= lo - 1e-9 && obj.z <= hi + 1e-9);
    }
    // A change in flight blocks the next one even when the interval elapsed.
    assert_eq!(m.depth_change().unwrap().started_at, 1_000.0);

    m.update(4_000.0);
    assert!(m.depth_change().is_none());
    assert_eq!(m.depths(), change.target_z);
}

#[test]
fn depth_multiset_survives_many_reshuffles() {
    let mut m = loaded(config());
    let baseline = sorted(m.depths());
    let mut now = 0.0;
    let mut completed = 0;
    while now < 120_000.0 {
        let was_changing = m.depth_change().is_some();
        m.update(now);
        if was_changing && m.depth_change().is_none() {
            completed += 1;
            assert_eq!(sorted(m.depths()), baseline);
        }
        now += 16.0;
    }
    assert!(completed > 10);
    assert_eq!(sorted(m.assigned_depths().to_vec()), baseline);
}

#[test]
fn render_objects_carry_perspective_and_depth() {
    let mut m = loaded(SplashConfig {
        scale: Some(1.0),
        animation_angle: 0.0,
        ..config()
    });
    m.update(0.0);
    let objs = m.get_objects_for_render();
    assert_eq!(objs.len(), 3);
    let rect = &objs[0];
    assert_eq!(rect.z, -75.0);
    let expected_scale = 1000.0 / (1000.0 - 75.0);
    let p = rect.points[0];
    assert!((p.scale.unwrap() - expected_scale).abs() < 1e-12);
    assert!((p.x - (500.0 - 80.0 * expected_scale)).abs() < 1e-9);
}

#[test]
fn unloaded_model_does_not_advance() {
    let mut m = SplashModel::new(config());
    m.update(10_000.0);
    assert!(!m.is_loaded());
    assert_eq!(m.rotation_y(), 0.0);
    assert!(m.get_objects_for_render().is_empty());
}
