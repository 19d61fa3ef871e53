//! Walkthrough of the reduction + highlight pipeline on synthetic data.
//!
//! Run with `cargo run --example demo`.

use chart_geom::data_types::{nearest_index_by_x, AxisDomain, PlotPoint, SeriesHandle, VecSeries};
use chart_geom::highlight::{HighlightQuery, HighlightScratch, Highlighter, IndexRecovery};
use chart_geom::simplify::{compute_tolerance, simplify_rdp_slice_into, zoom_level, RdpScratch};
use chart_geom::transform::LinearTransform;

fn main() -> eyre::Result<()> {
    // A dense series: slow carrier plus fast ripple.
    let points: Vec<PlotPoint> = (0..10_000)
        .map(|i| {
            let x = i as f64;
            PlotPoint::new(x, (x * 0.003).sin() * 40.0 + (x * 0.7).sin())
        })
        .collect();

    let domain = AxisDomain::of_points(&points);

    let mut scratch = RdpScratch::new();
    let mut reduced = Vec::new();

    for (scale_x, scale_y) in [(1.0, 1.0), (3.5, 2.0), (7.0, 7.0)] {
        let tolerance =
            compute_tolerance(scale_x, scale_y, domain.y_min, domain.y_max, points.len());
        reduced.clear();
        simplify_rdp_slice_into(&points, tolerance, &mut scratch, &mut reduced);
        println!(
            "zoom ({}, {}) -> levels ({}, {}), tolerance {:.3}: {} -> {} points",
            scale_x,
            scale_y,
            zoom_level(scale_x),
            zoom_level(scale_y),
            tolerance,
            points.len(),
            reduced.len()
        );
    }

    // Hit-testing: two stacked entries, pointer over the second one.
    let stacked = VecSeries::from_stacks(
        &[0.0, 1.0],
        vec![vec![1.0, 2.0], vec![-3.0, 5.0, -2.0, 4.0]],
    )?;
    let series: Vec<&dyn SeriesHandle> = vec![&stacked];

    // Value axis rendered at 10 px per unit.
    let transform = LinearTransform::from_domain_range((0.0, 10.0), (0.0, 100.0))?;
    let highlighter = Highlighter::new(IndexRecovery::Rounding);
    let mut highlight_scratch = HighlightScratch::new();

    let query = HighlightQuery::new(1.2, transform.map(3.0), transform);
    match highlighter.highlight(&query, &series, &mut highlight_scratch) {
        Some(hit) => println!(
            "hit: series {}, entry {}, y {}, stack segment {:?} {:?}",
            hit.series_index, hit.x_index, hit.y_value, hit.stack_index, hit.stack_range
        ),
        None => println!("no hit"),
    }

    // Nearest-index lookup over sorted x positions.
    let sparse = [
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(2.5, 1.0),
        PlotPoint::new(9.0, 2.0),
    ];
    println!(
        "nearest entry to x=3.1: {:?}",
        nearest_index_by_x(&sparse, 3.1)
    );

    Ok(())
}
