use super::*;
use crate::foundation::error::IllustraError;
use crate::render::RecordingSurface;

fn sphere(width: f64) -> SphereIllustration<RecordingSurface> {
    SphereIllustration::new(
        RecordingSurface::new(),
        Container::new(width, width),
        SphereConfig::default(),
    )
    .unwrap()
}

fn css_size(s: &SphereIllustration<RecordingSurface>) -> f64 {
    s.renderer().base().surface().desc().unwrap().css_size
}

#[test]
fn invalid_config_fails_construction() {
    let err = SphereIllustration::new(
        RecordingSurface::new(),
        Container::new(100.0, 100.0),
        SphereConfig {
            radius: -1.0,
            ..SphereConfig::default()
        },
    )
    .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn frames_only_run_while_started() {
    let mut s = sphere(400.0);
    assert_eq!(s.kind(), IllustrationKind::Sphere);
    assert_eq!(s.tick(0.0).unwrap(), FrameOutcome::Idle);
    assert!(!s.is_loaded());

    s.start(0.0).unwrap();
    assert!(s.is_running() && s.is_loaded());
    assert_eq!(s.model().len(), 45);
    assert_eq!(s.model().pending_tasks(), 2);
    assert_eq!(s.renderer().base().surface().clear_count(), 0);

    assert_eq!(s.tick(16.0).unwrap(), FrameOutcome::Drawn);
    assert_eq!(s.tick(32.0).unwrap(), FrameOutcome::Drawn);
    assert_eq!(s.renderer().base().surface().clear_count(), 2);
    assert_ne!(s.model().rotation(), crate::foundation::core::Rotation::default());

    s.stop();
    assert!(!s.is_running());
    assert_eq!(s.model().pending_tasks(), 0);
    assert_eq!(s.tick(48.0).unwrap(), FrameOutcome::Idle);
}

#[test]
fn restart_keeps_the_existing_population() {
    let mut s = sphere(400.0);
    s.start(0.0).unwrap();
    for i in 1..200 {
        s.tick(i as f64 * 16.0).unwrap();
    }
    s.stop();
    let ids: Vec<u64> = s.model().lines().map(|l| l.id).collect();
    s.start(5_000.0).unwrap();
    s.start(5_000.0).unwrap();
    let after: Vec<u64> = s.model().lines().map(|l| l.id).collect();
    assert_eq!(ids, after);
    assert_eq!(s.model().pending_tasks(), 2);
}

#[test]
fn resize_is_debounced_while_running() {
    let mut s = sphere(400.0);
    s.start(0.0).unwrap();
    s.resize(Container::new(200.0, 300.0), 100.0);
    s.tick(150.0).unwrap();
    assert_eq!(css_size(&s), 400.0);
    s.tick(200.0).unwrap();
    assert_eq!(css_size(&s), 200.0);
    assert_eq!(s.renderer().base().container().height, 300.0);
}

#[test]
fn resize_applies_immediately_when_stopped() {
    let mut s = sphere(400.0);
    s.start(0.0).unwrap();
    s.stop();
    s.resize(Container::new(120.0, 120.0), 10.0);
    assert_eq!(css_size(&s), 120.0);
}

#[test]
fn zero_sized_container_fails_to_start() {
    let mut s = sphere(0.0);
    assert!(matches!(s.start(0.0), Err(IllustraError::Surface(_))));
    assert!(!s.is_running());
}

#[test]
fn recording_surface_has_no_pixels() {
    let mut s = sphere(100.0);
    s.start(0.0).unwrap();
    s.tick(16.0).unwrap();
    assert!(s.read_frames().unwrap().is_empty());
}
