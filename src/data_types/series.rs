use eyre::{ensure, Result};

use super::axis::ValueAxis;
use super::data::PlotPoint;

/// Read-only view of one series as seen by the highlighter.
///
/// `y_at` returns NaN for holes; the highlighter skips those entries.
pub trait SeriesHandle {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn y_at(&self, index: usize) -> f64;

    fn axis(&self) -> ValueAxis;

    fn highlight_enabled(&self) -> bool;

    /// Signed stack sub-values at the index, if the series is stacked.
    fn stack_values(&self, index: usize) -> Option<&[f64]>;
}

/// In-memory series backed by a point vector, with optional stacked
/// sub-values per entry.
#[derive(Clone, Debug)]
pub struct VecSeries {
    points: Vec<PlotPoint>,
    stacks: Option<Vec<Vec<f64>>>,
    axis: ValueAxis,
    highlight_enabled: bool,
}

impl VecSeries {
    pub fn new(points: Vec<PlotPoint>) -> Self {
        Self {
            points,
            stacks: None,
            axis: ValueAxis::Primary,
            highlight_enabled: true,
        }
    }

    /// Builds a stacked series: the entry y is the signed sum of its
    /// sub-values, the x positions are taken verbatim.
    pub fn from_stacks(xs: &[f64], stacks: Vec<Vec<f64>>) -> Result<Self> {
        ensure!(
            xs.len() == stacks.len(),
            "x count ({}) must match stack row count ({})",
            xs.len(),
            stacks.len()
        );
        let points = xs
            .iter()
            .zip(stacks.iter())
            .map(|(&x, row)| PlotPoint::new(x, row.iter().sum()))
            .collect();
        Ok(Self {
            points,
            stacks: Some(stacks),
            axis: ValueAxis::Primary,
            highlight_enabled: true,
        })
    }

    pub fn with_axis(mut self, axis: ValueAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_highlight_enabled(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    pub fn with_stacks(mut self, stacks: Vec<Vec<f64>>) -> Result<Self> {
        ensure!(
            stacks.len() == self.points.len(),
            "stack row count ({}) must match point count ({})",
            stacks.len(),
            self.points.len()
        );
        self.stacks = Some(stacks);
        Ok(self)
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }
}

impl SeriesHandle for VecSeries {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn y_at(&self, index: usize) -> f64 {
        self.points[index].y
    }

    fn axis(&self) -> ValueAxis {
        self.axis
    }

    fn highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    fn stack_values(&self, index: usize) -> Option<&[f64]> {
        self.stacks.as_ref().map(|rows| rows[index].as_slice())
    }
}

/// Nearest entry index for a query x over points sorted by x.
///
/// Equidistant neighbors resolve to the earlier entry.
pub fn nearest_index_by_x(points: &[PlotPoint], x: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let upper = points.partition_point(|p| p.x < x);
    if upper == 0 {
        return Some(0);
    }
    if upper == points.len() {
        return Some(points.len() - 1);
    }
    let below = upper - 1;
    if x - points[below].x <= points[upper].x - x {
        Some(below)
    } else {
        Some(upper)
    }
}
