use sketchtile_designer::canvas::{Canvas, CanvasSettings, DrawingMode, PointerEvent};
use sketchtile_designer::model::Point;
use sketchtile_designer::surface::{ItemKind, LayeredSurface};

fn setup() -> (Canvas, LayeredSurface) {
    (
        Canvas::new(CanvasSettings::default()),
        LayeredSurface::new(400.0, 400.0),
    )
}

#[test]
fn test_free_draw_stroke_is_simplified_on_release() {
    let (mut canvas, mut surface) = setup();
    let mode = DrawingMode::FreeDraw;

    canvas
        .handle_pointer(mode, PointerEvent::down(0.0, 0.0), &mut surface)
        .unwrap();
    for i in 1..=50 {
        let x = f64::from(i) * 2.0;
        // Jitter well inside the 15px free-draw tolerance.
        let y = if i % 2 == 0 { 1.0 } else { -1.0 };
        canvas
            .handle_pointer(mode, PointerEvent::moved(x, y), &mut surface)
            .unwrap();
    }
    assert_eq!(canvas.active_stroke_len(), Some(51));

    let committed = canvas
        .handle_pointer(mode, PointerEvent::up(100.0, 0.0), &mut surface)
        .unwrap()
        .expect("release should register the stroke");

    assert_eq!(committed.report.input_len, 51);
    assert_eq!(committed.report.output_len, 2);
    assert_eq!(committed.report.removed(), 49);
    assert_eq!(canvas.active_stroke_len(), None);

    let store = canvas.shape_store();
    assert_eq!(store.len(), 1);
    let curve = store.get(committed.id).unwrap();
    assert_eq!(curve.first(), Some(Point::new(0.0, 0.0)));
    assert_eq!(curve.last(), Some(Point::new(100.0, 1.0)));

    assert_eq!(surface.items_of_kind(ItemKind::Curve).count(), 1);
}

#[test]
fn test_drag_and_release_without_down_are_ignored() {
    let (mut canvas, mut surface) = setup();
    let mode = DrawingMode::FreeDraw;

    let moved = canvas
        .handle_pointer(mode, PointerEvent::moved(5.0, 5.0), &mut surface)
        .unwrap();
    let released = canvas
        .handle_pointer(mode, PointerEvent::up(5.0, 5.0), &mut surface)
        .unwrap();

    assert!(moved.is_none());
    assert!(released.is_none());
    assert!(canvas.shape_store().is_empty());
    assert!(surface.is_empty());
}

#[test]
fn test_click_without_drag_registers_single_point_curve() {
    let (mut canvas, mut surface) = setup();
    let mode = DrawingMode::FreeDraw;

    canvas
        .handle_pointer(mode, PointerEvent::down(7.0, 8.0), &mut surface)
        .unwrap();
    let committed = canvas
        .handle_pointer(mode, PointerEvent::up(7.0, 8.0), &mut surface)
        .unwrap()
        .unwrap();

    assert_eq!(committed.report.input_len, 1);
    assert_eq!(committed.report.output_len, 1);
    assert_eq!(canvas.shape_store().len(), 1);
}

#[test]
fn test_path_draw_collects_clicks_until_commit() {
    let (mut canvas, mut surface) = setup();
    let mode = DrawingMode::PathDraw;

    for (x, y) in [(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)] {
        let result = canvas
            .handle_pointer(mode, PointerEvent::down(x, y), &mut surface)
            .unwrap();
        assert!(result.is_none());
        // Releases and drags do not end a path.
        canvas
            .handle_pointer(mode, PointerEvent::moved(x + 1.0, y), &mut surface)
            .unwrap();
        canvas
            .handle_pointer(mode, PointerEvent::up(x, y), &mut surface)
            .unwrap();
    }

    assert_eq!(canvas.pending_path_len(), Some(3));
    assert_eq!(canvas.indicator_count(), 3);
    assert_eq!(surface.items_of_kind(ItemKind::Indicator).count(), 3);
    assert!(canvas.shape_store().is_empty());

    let committed = canvas.commit_path(&mut surface).unwrap().unwrap();

    // Commit tolerance defaults to 0, so every click survives.
    assert_eq!(committed.report.input_len, 3);
    assert_eq!(committed.report.output_len, 3);
    assert_eq!(canvas.pending_path_len(), None);
    assert_eq!(canvas.indicator_count(), 0);
    assert_eq!(surface.items_of_kind(ItemKind::Indicator).count(), 0);
    assert_eq!(surface.items_of_kind(ItemKind::Curve).count(), 1);
    assert_eq!(canvas.shape_store().len(), 1);
}

#[test]
fn test_commit_without_pending_path_is_noop() {
    let (mut canvas, mut surface) = setup();
    assert!(canvas.commit_path(&mut surface).unwrap().is_none());
    assert!(canvas.shape_store().is_empty());
}

#[test]
fn test_pending_path_survives_free_draw_stroke() {
    let (mut canvas, mut surface) = setup();

    canvas
        .handle_pointer(DrawingMode::PathDraw, PointerEvent::down(0.0, 0.0), &mut surface)
        .unwrap();
    canvas
        .handle_pointer(DrawingMode::PathDraw, PointerEvent::down(20.0, 0.0), &mut surface)
        .unwrap();

    canvas
        .handle_pointer(DrawingMode::FreeDraw, PointerEvent::down(100.0, 100.0), &mut surface)
        .unwrap();
    canvas
        .handle_pointer(DrawingMode::FreeDraw, PointerEvent::moved(150.0, 150.0), &mut surface)
        .unwrap();
    canvas
        .handle_pointer(DrawingMode::FreeDraw, PointerEvent::up(150.0, 150.0), &mut surface)
        .unwrap();

    assert_eq!(canvas.shape_store().len(), 1);
    assert_eq!(canvas.pending_path_len(), Some(2));

    canvas.commit_path(&mut surface).unwrap();
    assert_eq!(canvas.shape_store().len(), 2);
}

#[test]
fn test_invalid_tolerance_keeps_pending_path() {
    let settings = CanvasSettings {
        path_commit_tolerance: -1.0,
        ..CanvasSettings::default()
    };
    let mut canvas = Canvas::new(settings);
    let mut surface = LayeredSurface::new(100.0, 100.0);

    canvas
        .handle_pointer(DrawingMode::PathDraw, PointerEvent::down(1.0, 1.0), &mut surface)
        .unwrap();
    assert!(canvas.commit_path(&mut surface).is_err());
    assert_eq!(canvas.pending_path_len(), Some(1));
    assert_eq!(canvas.indicator_count(), 1);
    assert!(canvas.shape_store().is_empty());
}

#[test]
fn test_drawing_mode_display() {
    assert_eq!(DrawingMode::FreeDraw.to_string(), "FREE");
    assert_eq!(DrawingMode::PathDraw.to_string(), "PATH");
    assert_eq!(DrawingMode::default(), DrawingMode::FreeDraw);
}

#[test]
fn test_second_press_restarts_the_active_stroke() {
    let (mut canvas, mut surface) = setup();
    let mode = DrawingMode::FreeDraw;

    canvas
        .handle_pointer(mode, PointerEvent::down(0.0, 0.0), &mut surface)
        .unwrap();
    for (x, y) in [(10.0, 10.0), (20.0, 20.0)] {
        canvas
            .handle_pointer(mode, PointerEvent::moved(x, y), &mut surface)
            .unwrap();
    }
    assert_eq!(canvas.active_stroke_len(), Some(3));

    let pressed = canvas
        .handle_pointer(mode, PointerEvent::down(200.0, 200.0), &mut surface)
        .unwrap();
    assert!(pressed.is_none());
    assert_eq!(canvas.active_stroke_len(), Some(1));
    assert!(canvas.shape_store().is_empty());
    assert!(surface.is_empty());

    canvas
        .handle_pointer(mode, PointerEvent::moved(250.0, 200.0), &mut surface)
        .unwrap();
    let committed = canvas
        .handle_pointer(mode, PointerEvent::up(250.0, 200.0), &mut surface)
        .unwrap()
        .unwrap();

    assert_eq!(committed.report.input_len, 2);
    let store = canvas.shape_store();
    assert_eq!(store.len(), 1);
    let curve = store.get(committed.id).unwrap();
    assert_eq!(curve.first(), Some(Point::new(200.0, 200.0)));
    assert_eq!(curve.last(), Some(Point::new(250.0, 200.0)));
    assert_eq!(surface.len(), 1);
}
