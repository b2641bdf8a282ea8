use super::*;
use crate::assets::{FileShapeSource, InlineShapeSource, StyleVars};
use crate::foundation::error::IllustraError;
use crate::render::RecordingSurface;

const HOUSE: &str = r#"<svg viewBox="0 0 400 315">
  <g>
    <polygon class="cls-2" points="150,107.5 250,107.5 250,207.5 150,207.5"/>
    <line class="cls-1" x1="150" y1="157.5" x2="250" y2="157.5"/>
  </g>
</svg>"#;

fn config() -> LayeredHouseConfig {
    LayeredHouseConfig {
        background_color: Some("--bg".into()),
        ..LayeredHouseConfig::default()
    }
}

fn container() -> Container {
    Container::new(300.0, 300.0).with_styles(StyleVars::new().with("--bg", "250, 250, 245"))
}

fn house(source: Box<dyn ShapeSource>) -> LayeredHouseIllustration<RecordingSurface> {
    LayeredHouseIllustration::new(RecordingSurface::new(), container(), config(), source).unwrap()
}

#[test]
fn missing_background_is_rejected_at_construction() {
    let err = LayeredHouseIllustration::new(
        RecordingSurface::new(),
        container(),
        LayeredHouseConfig::default(),
        Box::new(InlineShapeSource::new(HOUSE)),
    )
    .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn start_loads_geometry_then_ticks_draw() {
    let mut h = house(Box::new(InlineShapeSource::new(HOUSE)));
    assert_eq!(h.kind(), IllustrationKind::LayeredHouse);
    assert!(!h.is_loaded());
    h.start(0.0).unwrap();
    assert!(h.is_loaded() && h.is_running());
    assert_eq!(h.model().layers().len(), LAYER_COUNT);

    assert_eq!(h.tick(0.0).unwrap(), FrameOutcome::Drawn);
    assert_eq!(h.tick(1_000.0).unwrap(), FrameOutcome::Drawn);
    let a = h.model().animations()[0];
    assert_eq!(a.phase, LayerPhase::Forward);
    assert!((a.current_angle - 5.0).abs() < 1e-12);

    h.stop();
    assert_eq!(h.tick(2_000.0).unwrap(), FrameOutcome::Idle);
}

#[test]
fn unreadable_source_leaves_the_instance_unloaded() {
    let mut h = house(Box::new(FileShapeSource::new("/nonexistent/house.svg")));
    let err = h.start(0.0).unwrap_err();
    assert!(matches!(err, IllustraError::GeometryLoad(_)));
    assert!(!h.is_loaded());
    assert!(!h.is_running());
}

#[test]
fn malformed_numbers_are_geometry_errors() {
    let bad = r#"<svg><polygon class="cls-2" points="1,2 x,4"/></svg>"#;
    let mut h = house(Box::new(InlineShapeSource::new(bad)));
    assert!(matches!(h.start(0.0), Err(IllustraError::GeometryLoad(_))));
}

#[test]
fn set_rotation_redraws_once_loaded() {
    let mut h = house(Box::new(InlineShapeSource::new(HOUSE)));
    assert_eq!(h.set_rotation(0.0, 0.0, 0.0, 50.0), FrameOutcome::NotLoaded);

    h.start(0.0).unwrap();
    let clears = h.renderer().base().surface().clear_count();
    assert_eq!(h.set_rotation(-30.0, -20.0, -10.0, 50.0), FrameOutcome::Drawn);
    assert_eq!(h.renderer().base().surface().clear_count(), clears + 1);
    assert_eq!(h.model().config().layer_spacing, 50.0);
    assert_eq!(h.model().layers()[4].z, 200.0);
}
