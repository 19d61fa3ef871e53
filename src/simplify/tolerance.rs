use tracing::debug;

use super::rdp::{simplify_rdp_slice_into, RdpScratch};
use crate::data_types::{AxisDomain, PlotPoint};

pub const MIN_ZOOM_LEVEL: u32 = 1;
pub const MAX_ZOOM_LEVEL: u32 = 7;

/// Buckets a continuous scale factor into the closed level range by
/// truncation. Casting saturates, so NaN and infinities clamp too.
pub fn zoom_level(scale: f64) -> u32 {
    (scale as i64).clamp(MIN_ZOOM_LEVEL as i64, MAX_ZOOM_LEVEL as i64) as u32
}

/// Derives a reduction tolerance from the current zoom so that
/// simplification backs off as the user zooms in.
///
/// Each axis contributes its span weighted by the other axis' share of
/// the total scale; an axis at [`MAX_ZOOM_LEVEL`] contributes nothing.
/// Both axes maxed out yields exactly 0.0, the simplifier's
/// pass-through signal.
pub fn compute_tolerance(
    scale_x: f64,
    scale_y: f64,
    y_min: f64,
    y_max: f64,
    x_count: usize,
) -> f64 {
    let total = scale_x + scale_y;
    if total.is_nan() || total <= 0.0 {
        return 0.0;
    }
    let weight_x = scale_x / total;
    let weight_y = scale_y / total;

    let y_tolerance = if zoom_level(scale_y) < MAX_ZOOM_LEVEL {
        (y_max - y_min) * (1.0 - weight_y)
    } else {
        0.0
    };
    let x_tolerance = if zoom_level(scale_x) < MAX_ZOOM_LEVEL {
        x_count as f64 * (1.0 - weight_x)
    } else {
        0.0
    };

    (y_tolerance * weight_y + x_tolerance * weight_x) / 2.0
}

/// Reduction policy applied before rendering. The default derives a
/// tolerance from the zoom and feeds Douglas-Peucker; callers
/// substitute any other policy here without touching the pipeline.
pub trait Approximator {
    fn approximate(
        &self,
        points: &[PlotPoint],
        scale_x: f64,
        scale_y: f64,
        scratch: &mut RdpScratch,
        output: &mut Vec<PlotPoint>,
    );
}

/// Zoom-driven tolerance feeding [`simplify_rdp_slice_into`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomApproximator;

impl Approximator for ZoomApproximator {
    fn approximate(
        &self,
        points: &[PlotPoint],
        scale_x: f64,
        scale_y: f64,
        scratch: &mut RdpScratch,
        output: &mut Vec<PlotPoint>,
    ) {
        let domain = AxisDomain::of_points(points);
        let tolerance =
            compute_tolerance(scale_x, scale_y, domain.y_min, domain.y_max, points.len());
        debug!(tolerance, n = points.len(), scale_x, scale_y, "zoom approximation");
        simplify_rdp_slice_into(points, tolerance, scratch, output);
    }
}

/// Adapter lifting a closure into the policy seat.
pub struct FnApproximator<F>(pub F);

impl<F> Approximator for FnApproximator<F>
where
    F: Fn(&[PlotPoint], f64, f64, &mut RdpScratch, &mut Vec<PlotPoint>),
{
    fn approximate(
        &self,
        points: &[PlotPoint],
        scale_x: f64,
        scale_y: f64,
        scratch: &mut RdpScratch,
        output: &mut Vec<PlotPoint>,
    ) {
        (self.0)(points, scale_x, scale_y, scratch, output)
    }
}
