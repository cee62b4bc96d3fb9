use lyon::path::Event;
use sketchtile_designer::model::{Bounds, Color, Curve, DesignerShape, Point, StrokeStyle};

fn curve(points: &[(f64, f64)]) -> Curve {
    Curve::new(
        points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        StrokeStyle::default(),
    )
}

#[test]
fn test_point_distance() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_bounds_from_points() {
    let points = [
        Point::new(3.0, -1.0),
        Point::new(-2.0, 4.0),
        Point::new(1.0, 1.0),
    ];
    let bounds = Bounds::from_points(&points).unwrap();
    assert_eq!(bounds, Bounds::new(-2.0, -1.0, 3.0, 4.0));
    assert_eq!(bounds.width(), 5.0);
    assert_eq!(bounds.height(), 5.0);
    assert_eq!(bounds.center(), Point::new(0.5, 1.5));

    assert!(Bounds::from_points(std::iter::empty::<&Point>()).is_none());
}

#[test]
fn test_bounds_degenerate() {
    let point = Bounds::new(1.0, 1.0, 1.0, 1.0);
    assert!(point.is_degenerate());

    // A horizontal line still has a usable longest side.
    let line = Bounds::new(0.0, 5.0, 10.0, 5.0);
    assert!(!line.is_degenerate());
    assert_eq!(line.longest_side(), 10.0);
}

#[test]
fn test_curve_scale_about_center() {
    let mut c = curve(&[(0.0, 0.0), (10.0, 0.0), (10.0, 20.0)]);
    let center = c.bounds().unwrap().center();
    c.scale(0.5, center);

    let bounds = c.bounds().unwrap();
    assert!((bounds.width() - 5.0).abs() < 1e-12);
    assert!((bounds.height() - 10.0).abs() < 1e-12);
    assert!((bounds.center().x - center.x).abs() < 1e-12);
    assert!((bounds.center().y - center.y).abs() < 1e-12);
}

#[test]
fn test_curve_translate_and_rotate() {
    let mut c = curve(&[(0.0, 0.0), (10.0, 0.0)]);
    c.translate(5.0, -5.0);
    assert_eq!(c.first(), Some(Point::new(5.0, -5.0)));

    c.rotate(90.0, Point::new(5.0, -5.0));
    let end = c.last().unwrap();
    assert!((end.x - 5.0).abs() < 1e-9);
    assert!((end.y - 5.0).abs() < 1e-9);
}

#[test]
fn test_curve_render_is_a_polyline() {
    let c = curve(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let events: Vec<_> = c.render().iter().collect();

    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], Event::Begin { .. }));
    assert!(matches!(events[1], Event::Line { .. }));
    assert!(matches!(events[3], Event::End { close: false, .. }));
}

#[test]
fn test_curve_serialization() {
    let mut c = curve(&[(1.0, 2.0), (3.0, 4.0)]);
    c.style = StrokeStyle::new(Color::GOLD, 3.0);
    let json = serde_json::to_string(&c).unwrap();
    let back: Curve = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_color_display() {
    assert_eq!(Color::GOLD.to_string(), "rgba(255, 215, 0, 0.5)");
}
