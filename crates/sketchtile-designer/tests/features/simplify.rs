use proptest::prelude::*;
use sketchtile_core::GeometryError;
use sketchtile_designer::model::{Curve, Point, StrokeStyle};
use sketchtile_designer::simplify::{simplify_points, SimplifyReport};

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_short_input_is_unchanged() {
    assert!(simplify_points(&[], 5.0).unwrap().is_empty());

    let single = points(&[(1.0, 1.0)]);
    assert_eq!(simplify_points(&single, 5.0).unwrap(), single);

    let pair = points(&[(0.0, 0.0), (3.0, 3.0)]);
    assert_eq!(simplify_points(&pair, 5.0).unwrap(), pair);
}

#[test]
fn test_zero_tolerance_is_identity() {
    let input = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    assert_eq!(simplify_points(&input, 0.0).unwrap(), input);
}

#[test]
fn test_collinear_points_collapse_to_endpoints() {
    let input = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    assert_eq!(
        simplify_points(&input, 0.5).unwrap(),
        points(&[(0.0, 0.0), (3.0, 0.0)])
    );
}

#[test]
fn test_corner_beyond_tolerance_is_kept() {
    let input = points(&[(0.0, 0.0), (5.0, 0.1), (10.0, 0.0), (10.0, 5.0), (10.0, 10.0)]);
    assert_eq!(
        simplify_points(&input, 1.0).unwrap(),
        points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
    );
}

#[test]
fn test_deviation_equal_to_tolerance_is_dropped() {
    let input = points(&[(0.0, 0.0), (5.0, 2.0), (10.0, 0.0)]);
    assert_eq!(simplify_points(&input, 2.0).unwrap().len(), 2);
    assert_eq!(simplify_points(&input, 1.9).unwrap().len(), 3);
}

#[test]
fn test_invalid_tolerance() {
    let input = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    assert_eq!(
        simplify_points(&input, -1.0),
        Err(GeometryError::InvalidTolerance { tolerance: -1.0 })
    );
    assert!(simplify_points(&input, f64::NAN).is_err());
}

#[test]
fn test_curve_simplify_in_place_keeps_identity() {
    let mut curve = Curve::new(
        points(&[(0.0, 0.0), (1.0, 0.2), (2.0, -0.2), (3.0, 0.0)]),
        StrokeStyle::default(),
    );
    curve.id = 42;
    let style = curve.style;

    let report = curve.simplify(1.0).unwrap();
    assert_eq!(report, SimplifyReport::new(4, 2));
    assert_eq!(curve.id, 42);
    assert_eq!(curve.style, style);
    assert_eq!(curve.len(), 2);
}

#[test]
fn test_report_metrics() {
    let report = SimplifyReport::new(51, 2);
    assert_eq!(report.removed(), 49);
    // 100 - 100 * 2 / 51 = 96.08
    assert_eq!(report.percent_saved(), 96);
    assert_eq!(
        report.to_string(),
        "49 of the 51 segments were removed. Saving 96%"
    );

    assert_eq!(SimplifyReport::new(3, 3).percent_saved(), 0);
    assert_eq!(SimplifyReport::new(0, 0).percent_saved(), 0);
    // 100 - 100 * 1 / 3 = 66.67
    assert_eq!(SimplifyReport::new(3, 1).percent_saved(), 67);
}

proptest! {
    #[test]
    fn prop_never_grows_and_keeps_endpoints(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..200),
        tolerance in 0.0f64..50.0,
    ) {
        let input = points(&coords);
        let output = simplify_points(&input, tolerance).unwrap();

        prop_assert!(output.len() <= input.len());
        prop_assert!(output.len() >= 2);
        prop_assert_eq!(output.first(), input.first());
        prop_assert_eq!(output.last(), input.last());
    }

    #[test]
    fn prop_output_is_ordered_subset(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..100),
        tolerance in 0.0f64..50.0,
    ) {
        let input = points(&coords);
        let output = simplify_points(&input, tolerance).unwrap();

        let mut remaining = input.iter();
        for p in &output {
            prop_assert!(remaining.any(|q| q == p));
        }
    }

    #[test]
    fn prop_zero_tolerance_is_identity(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..100),
    ) {
        let input = points(&coords);
        prop_assert_eq!(simplify_points(&input, 0.0).unwrap(), input);
    }

    #[test]
    fn prop_report_matches_lengths(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..100),
        tolerance in 0.0f64..50.0,
    ) {
        let mut curve = Curve::new(points(&coords), StrokeStyle::default());
        let report = curve.simplify(tolerance).unwrap();

        prop_assert_eq!(report.removed(), coords.len() - curve.len());
        let expected = (100.0 - 100.0 * curve.len() as f64 / coords.len() as f64).round() as i64;
        prop_assert_eq!(report.percent_saved(), expected);
    }
}
