use chart_geom::data_types::{SeriesHandle, VecSeries};
use chart_geom::highlight::{
    stack_ranges, HighlightQuery, HighlightScratch, Highlighter, IndexRecovery, Range,
};
use chart_geom::transform::LinearTransform;

fn stacked_series() -> VecSeries {
    VecSeries::from_stacks(&[0.0], vec![vec![-3.0, 5.0, -2.0, 4.0]]).unwrap()
}

fn query_at(pixel_y: f64) -> HighlightQuery {
    HighlightQuery::new(0.0, pixel_y, LinearTransform::IDENTITY)
}

#[test]
fn test_partition_layout_matches_reference() {
    let ranges = stack_ranges(&[-3.0, 5.0, -2.0, 4.0]);
    assert_eq!(
        ranges,
        vec![
            Range::new(-5.0, -2.0),
            Range::new(0.0, 5.0),
            Range::new(-2.0, 0.0),
            Range::new(5.0, 9.0),
        ]
    );
}

#[test]
fn test_query_inside_positive_run() {
    let s = stacked_series();
    let list: Vec<&dyn SeriesHandle> = vec![&s];
    let highlighter = Highlighter::new(IndexRecovery::Rounding);
    let mut scratch = HighlightScratch::new();

    let hit = highlighter
        .highlight(&query_at(3.0), &list, &mut scratch)
        .unwrap();

    assert_eq!(hit.stack_index, Some(1));
    assert_eq!(hit.stack_range, Some(Range::new(0.0, 5.0)));
}

#[test]
fn test_query_inside_negative_run() {
    let s = stacked_series();
    let list: Vec<&dyn SeriesHandle> = vec![&s];
    let highlighter = Highlighter::new(IndexRecovery::Rounding);
    let mut scratch = HighlightScratch::new();

    let hit = highlighter
        .highlight(&query_at(-4.0), &list, &mut scratch)
        .unwrap();
    assert_eq!(hit.stack_index, Some(0));
    assert_eq!(hit.stack_range, Some(Range::new(-5.0, -2.0)));

    let hit = highlighter
        .highlight(&query_at(-1.0), &list, &mut scratch)
        .unwrap();
    assert_eq!(hit.stack_index, Some(2));
    assert_eq!(hit.stack_range, Some(Range::new(-2.0, 0.0)));
}

#[test]
fn test_query_outside_stack_clamps_to_boundary_segments() {
    let s = stacked_series();
    let list: Vec<&dyn SeriesHandle> = vec![&s];
    let highlighter = Highlighter::new(IndexRecovery::Rounding);
    let mut scratch = HighlightScratch::new();

    let below = highlighter
        .highlight(&query_at(-50.0), &list, &mut scratch)
        .unwrap();
    assert_eq!(below.stack_index, Some(0));

    let above = highlighter
        .highlight(&query_at(50.0), &list, &mut scratch)
        .unwrap();
    assert_eq!(above.stack_index, Some(3));
}

#[test]
fn test_unstacked_series_has_no_stack_fields() {
    let s = VecSeries::new(vec![chart_geom::data_types::PlotPoint::new(0.0, 4.0)]);
    let list: Vec<&dyn SeriesHandle> = vec![&s];
    let highlighter = Highlighter::new(IndexRecovery::Rounding);
    let mut scratch = HighlightScratch::new();

    let hit = highlighter
        .highlight(&query_at(4.0), &list, &mut scratch)
        .unwrap();
    assert_eq!(hit.stack_index, None);
    assert_eq!(hit.stack_range, None);
}

#[test]
fn test_stacked_query_on_scaled_axis() {
    // Pixel transform: pixel = 10 * value. A pixel query of 30 must
    // invert to data y = 3 before range resolution.
    let s = stacked_series();
    let list: Vec<&dyn SeriesHandle> = vec![&s];
    let highlighter = Highlighter::new(IndexRecovery::Rounding);
    let mut scratch = HighlightScratch::new();

    let transform = LinearTransform::from_coefficients(10.0, 0.0);
    let query = HighlightQuery::new(0.0, 30.0, transform);
    let hit = highlighter.highlight(&query, &list, &mut scratch).unwrap();

    assert_eq!(hit.stack_index, Some(1));
    assert_eq!(hit.stack_range, Some(Range::new(0.0, 5.0)));
}
