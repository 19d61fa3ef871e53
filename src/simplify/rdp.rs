use crate::data_types::PlotPoint;
use rayon::prelude::*;
use tracing::trace;

/// Segment length above which the max-distance scan switches to rayon.
const PAR_SCAN_CUTOFF: usize = 4096;

/// Reusable state for repeated reduction calls: the keep flags and the
/// explicit segment stack. Caller-owned so concurrent calls on
/// independent inputs stay safe.
#[derive(Debug, Default)]
pub struct RdpScratch {
    keep: Vec<bool>,
    stack: Vec<(usize, usize)>,
}

impl RdpScratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, n: usize) {
        self.keep.clear();
        self.keep.resize(n, false);
        self.stack.clear();
    }
}

/// Ramer-Douglas-Peucker reduction of a polyline to the subsequence
/// whose discarded points all lie within `tolerance` perpendicular
/// distance of the surviving chords. Endpoints always survive.
pub fn simplify_rdp_slice(points: &[PlotPoint], tolerance: f64) -> Vec<PlotPoint> {
    let mut scratch = RdpScratch::new();
    let mut output = Vec::new();
    simplify_rdp_slice_into(points, tolerance, &mut scratch, &mut output);
    output
}

/// Same as [`simplify_rdp_slice`] but appends into a caller-owned
/// output buffer and reuses the given scratch.
///
/// `tolerance <= 0.0` or fewer than 3 points is the pass-through
/// signal: the input is appended verbatim.
pub fn simplify_rdp_slice_into(
    points: &[PlotPoint],
    tolerance: f64,
    scratch: &mut RdpScratch,
    output: &mut Vec<PlotPoint>,
) {
    if tolerance <= 0.0 || points.len() < 3 {
        output.extend_from_slice(points);
        return;
    }

    mark_kept_slice(points, tolerance, scratch);

    let before = output.len();
    output.extend(
        scratch
            .keep
            .iter()
            .enumerate()
            .filter(|(_, kept)| **kept)
            .map(|(i, _)| points[i]),
    );
    trace!(
        input = points.len(),
        output = output.len() - before,
        tolerance,
        "rdp reduction"
    );
}

/// Closure-parameterized variant for arbitrary point carriers.
/// Serial only; the slice variant is the fast path.
pub fn simplify_rdp_generic<T, FX, FY>(
    data: &[T],
    tolerance: f64,
    get_x: FX,
    get_y: FY,
) -> Vec<T>
where
    T: Clone,
    FX: Fn(&T) -> f64,
    FY: Fn(&T) -> f64,
{
    if tolerance <= 0.0 || data.len() < 3 {
        return data.to_vec();
    }

    let mut scratch = RdpScratch::new();
    mark_kept_generic(data, tolerance, &mut scratch, &get_x, &get_y);

    scratch
        .keep
        .iter()
        .enumerate()
        .filter(|(_, kept)| **kept)
        .map(|(i, _)| data[i].clone())
        .collect()
}

fn mark_kept_slice(points: &[PlotPoint], tolerance: f64, scratch: &mut RdpScratch) {
    let n = points.len();
    scratch.reset(n);
    scratch.keep[0] = true;
    scratch.keep[n - 1] = true;
    scratch.stack.push((0, n - 1));

    while let Some((start, end)) = scratch.stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let (max_dist, max_idx) = max_distance_slice(points, start, end);
        if max_dist > tolerance {
            scratch.keep[max_idx] = true;
            scratch.stack.push((start, max_idx));
            scratch.stack.push((max_idx, end));
        }
    }
}

fn mark_kept_generic<T, FX, FY>(
    data: &[T],
    tolerance: f64,
    scratch: &mut RdpScratch,
    get_x: &FX,
    get_y: &FY,
) where
    FX: Fn(&T) -> f64,
    FY: Fn(&T) -> f64,
{
    let n = data.len();
    scratch.reset(n);
    scratch.keep[0] = true;
    scratch.keep[n - 1] = true;
    scratch.stack.push((0, n - 1));

    while let Some((start, end)) = scratch.stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let x1 = get_x(&data[start]);
        let y1 = get_y(&data[start]);
        let x2 = get_x(&data[end]);
        let y2 = get_y(&data[end]);
        let chord = Chord::new(x1, y1, x2, y2);

        let mut max_dist = f64::NEG_INFINITY;
        let mut max_idx = start + 1;
        for i in start + 1..end {
            let d = chord.distance_to(get_x(&data[i]), get_y(&data[i]));
            if d.is_nan() {
                continue;
            }
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }

        if max_dist > tolerance {
            scratch.keep[max_idx] = true;
            scratch.stack.push((start, max_idx));
            scratch.stack.push((max_idx, end));
        }
    }
}

/// Perpendicular distance of interior points to the chord (start, end).
/// A zero-length chord falls back to the point-to-point distance from
/// the shared endpoint, so coincident endpoints never divide by zero.
struct Chord {
    x1: f64,
    y1: f64,
    dx: f64,
    dy: f64,
    inv_len: Option<f64>,
}

impl Chord {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let len_sq = dx * dx + dy * dy;
        let inv_len = if len_sq < f64::EPSILON {
            None
        } else {
            Some(1.0 / len_sq.sqrt())
        };
        Self {
            x1,
            y1,
            dx,
            dy,
            inv_len,
        }
    }

    #[inline]
    fn distance_to(&self, px: f64, py: f64) -> f64 {
        match self.inv_len {
            Some(inv_len) => ((px - self.x1) * self.dy - (py - self.y1) * self.dx).abs() * inv_len,
            None => (px - self.x1).hypot(py - self.y1),
        }
    }
}

fn max_distance_slice(points: &[PlotPoint], start: usize, end: usize) -> (f64, usize) {
    let first = points[start];
    let last = points[end];
    let chord = Chord::new(first.x, first.y, last.x, last.y);

    if end - start - 1 >= PAR_SCAN_CUTOFF {
        // Combine keeps the lowest index on equal distances, matching
        // the serial scan.
        return (start + 1..end)
            .into_par_iter()
            .map(|i| {
                let d = chord.distance_to(points[i].x, points[i].y);
                if d.is_nan() {
                    (f64::NEG_INFINITY, i)
                } else {
                    (d, i)
                }
            })
            .reduce(
                || (f64::NEG_INFINITY, usize::MAX),
                |a, b| {
                    if b.0 > a.0 || (b.0 == a.0 && b.1 < a.1) {
                        b
                    } else {
                        a
                    }
                },
            );
    }

    let mut max_dist = f64::NEG_INFINITY;
    let mut max_idx = start + 1;
    for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = chord.distance_to(p.x, p.y);
        if d.is_nan() {
            continue;
        }
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }
    (max_dist, max_idx)
}
