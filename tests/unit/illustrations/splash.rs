use super::*;
use crate::assets::{InlineShapeSource, StyleVars};
use crate::render::RecordingSurface;

const SHAPES: &str = r#"<svg viewBox="0 0 200 200">
  <rect class="cls-1" x="20" y="20" width="40" height="30"/>
  <polygon class="cls-1" points="100,50 150,150 50,150"/>
</svg>"#;

fn config() -> SplashConfig {
    SplashConfig {
        background_color: Some("--bg".into()),
        ..SplashConfig::default()
    }
}

fn styled(w: f64, h: f64) -> Container {
    Container::new(w, h).with_styles(StyleVars::new().with("--bg", "1, 2, 3"))
}

fn source() -> Box<dyn ShapeSource> {
    Box::new(InlineShapeSource::new(SHAPES))
}

#[test]
fn single_layout_runs_and_reshuffles() {
    let mut s = SplashIllustration::new(
        SurfaceLayout::Single(SurfaceSlot::new(RecordingSurface::new(), styled(300.0, 300.0))),
        config(),
        source(),
    )
    .unwrap();
    assert_eq!(s.kind(), IllustrationKind::Splash);
    s.start(0.0).unwrap();
    assert!(s.is_loaded());

    let mut now = 0.0;
    let mut reshuffled = false;
    while now <= 2_000.0 {
        assert_eq!(s.tick(now).unwrap(), FrameOutcome::Drawn);
        reshuffled |= s.model().depth_change().is_some();
        now += 16.0;
    }
    assert!(reshuffled);
    s.stop();
    assert!(!s.is_running());
}

#[test]
fn paired_resize_updates_both_surfaces_after_debounce() {
    let mut s = SplashIllustration::new(
        SurfaceLayout::Paired {
            primary: SurfaceSlot::new(RecordingSurface::new(), styled(300.0, 300.0)),
            secondary: SurfaceSlot::new(RecordingSurface::new(), Container::new(300.0, 300.0)),
        },
        config(),
        source(),
    )
    .unwrap();
    s.start(0.0).unwrap();
    s.resize_paired(styled(500.0, 500.0), Container::new(50.0, 50.0), 10.0);
    s.tick(50.0).unwrap();
    assert_eq!(s.renderer().primary().size(), 300.0);

    s.tick(110.0).unwrap();
    assert_eq!(s.renderer().primary().size(), 500.0);
    let secondary = s.renderer().secondary().unwrap();
    assert_eq!(secondary.size(), PAIRED_MIN_SIZE);
    assert_eq!(secondary.mapping(), s.renderer().primary().mapping());
}

#[test]
fn missing_background_is_a_config_error() {
    let err = SplashIllustration::new(
        SurfaceLayout::Single(SurfaceSlot::new(RecordingSurface::new(), styled(300.0, 300.0))),
        SplashConfig::default(),
        source(),
    )
    .unwrap_err();
    assert!(err.is_config());
}
