use super::*;

#[test]
fn square_desc_rounds_device_pixels() {
    let d = SurfaceDesc::square(333.0, 1.5).unwrap();
    assert_eq!((d.width_px, d.height_px), (500, 500));
    assert_eq!(d.css_size, 333.0);

    assert!(SurfaceDesc::square(0.0, 2.0).unwrap_err().to_string().contains("no pixels"));
    assert!(SurfaceDesc::square(f64::NAN, 1.0).is_err());
    assert!(SurfaceDesc::square(40_000.0, 2.0).is_err());
}

#[test]
fn recording_surface_tracks_ops_since_clear() {
    let mut s = RecordingSurface::new();
    s.configure(SurfaceDesc::square(100.0, 2.0).unwrap()).unwrap();
    s.set_transform(Affine::scale(2.0));
    s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba::BLACK);
    s.fill_circle(Point::new(5.0, 5.0), 2.0, Rgba::FALLBACK_ACCENT);
    assert_eq!(s.ops().len(), 2);
    match &s.ops()[0] {
        DrawOp::FillRect { transform, .. } => assert_eq!(*transform, Affine::scale(2.0)),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(s.ops()[1].color(), Rgba::FALLBACK_ACCENT);

    s.clear();
    assert!(s.ops().is_empty());
    assert_eq!(s.clear_count(), 1);
}

#[test]
fn reconfigure_resets_transform_and_contents() {
    let mut s = RecordingSurface::new();
    s.configure(SurfaceDesc::square(10.0, 1.0).unwrap()).unwrap();
    s.set_transform(Affine::scale(3.0));
    s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba::BLACK);
    s.configure(SurfaceDesc::square(20.0, 1.0).unwrap()).unwrap();
    assert!(s.ops().is_empty());
    assert_eq!(s.transform(), Affine::IDENTITY);
    assert_eq!(s.desc().map(|d| d.width_px), Some(20));
    assert!(s.read_pixels().unwrap().is_none());
}

#[test]
fn straight_alpha_conversion_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 32, 128, 9, 9, 9, 0],
        premultiplied: true,
    };
    let straight = frame.to_straight_alpha();
    assert!(!straight.premultiplied);
    assert_eq!(straight.pixel(0, 0), Some([128, 0, 64, 128]));
    assert_eq!(straight.pixel(1, 0), Some([9, 9, 9, 0]));
    assert_eq!(straight.pixel(2, 0), None);
    assert!(!frame.is_blank());
}
