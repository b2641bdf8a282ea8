use super::*;
use crate::illustrations::layered_house::LAYER_COUNT;
use crate::assets::StyleVars;
use crate::render::{DrawOp, RecordingSurface};

const SQUARE: &str = r#"<svg viewBox="0 0 400 315">
  <polygon class="cls-2" points="150,107.5 250,107.5 250,207.5 150,207.5"/>
  <line class="cls-1" x1="150" y1="157.5" x2="250" y2="157.5"/>
</svg>"#;

fn flat_config() -> LayeredHouseConfig {
    LayeredHouseConfig {
        background_color: Some("--bg".into()),
        rotation_x: 0.0,
        rotation_y: 0.0,
        rotation_z: 0.0,
        scale: Some(1.0),
        ..LayeredHouseConfig::default()
    }
}

fn setup(styles: StyleVars) -> (LayeredHouseModel, LayeredHouseRenderer<RecordingSurface>) {
    let cfg = flat_config();
    let mut model = LayeredHouseModel::new(cfg.clone());
    model.load_text(SQUARE).unwrap();
    let mut r = LayeredHouseRenderer::new(
        RecordingSurface::new(),
        Container::new(400.0, 400.0).with_styles(styles),
        cfg,
    );
    r.setup_canvas().unwrap();
    (model, r)
}

#[test]
fn missing_background_skips_the_frame() {
    let (model, mut r) = setup(StyleVars::new());
    assert_eq!(r.render(&model), FrameOutcome::Skipped);
    assert!(r.base().surface().ops().is_empty());
}

#[test]
fn unloaded_model_is_not_drawn() {
    let (_, mut r) = setup(StyleVars::new().with("--bg", "10, 20, 30"));
    let empty = LayeredHouseModel::new(flat_config());
    assert_eq!(r.render(&empty), FrameOutcome::NotLoaded);
}

#[test]
fn backdrop_then_fill_stroke_and_lines_per_layer() {
    let (model, mut r) = setup(StyleVars::new().with("--bg", "10, 20, 30"));
    assert_eq!(r.render(&model), FrameOutcome::Drawn);
    let ops = r.base().surface().ops();
    assert_eq!(ops.len(), 1 + LAYER_COUNT * 3);

    match &ops[0] {
        DrawOp::FillRect { rect, color, .. } => {
            assert_eq!(*rect, Rect::new(0.0, 0.0, 400.0, 400.0));
            assert_eq!((color.r, color.g, color.b, color.a), (10, 20, 30, 1.0));
        }
        other => panic!("expected backdrop, got {other:?}"),
    }
    assert!(matches!(ops[1], DrawOp::FillPath { .. }));
    assert_eq!(ops[1].color().a, FILL_ALPHA);
    assert_eq!(ops[2].color(), Rgba::FALLBACK_ACCENT);
    match &ops[3] {
        DrawOp::StrokePath { width, .. } => assert!((width - 1.6).abs() < 1e-12),
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn front_layer_is_last_and_offset_in_surface_pixels() {
    let (model, mut r) = setup(StyleVars::new().with("--bg", "#0a141e"));
    r.render(&model);
    let ops = r.base().surface().ops();
    // The z = 0 layer is drawn last: its fill sits three ops from the end.
    let DrawOp::FillPath { path, .. } = &ops[ops.len() - 3] else {
        panic!("expected the front layer's fill");
    };
    let bbox = kurbo::Shape::bounding_box(path);
    // Logical (400, 230) maps to (160, 92), shifted right by 15 * 0.4.
    assert!((bbox.x0 - 166.0).abs() < 1e-9);
    assert!((bbox.y0 - 92.0).abs() < 1e-9);
    assert!((bbox.width() - 40.0).abs() < 1e-9);
}
