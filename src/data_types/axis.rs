use serde::{Deserialize, Serialize};

use super::data::PlotPoint;

/// Which value axis a series is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValueAxis {
    #[default]
    Primary,
    Secondary,
}

/// Visible domain (data space) of the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisDomain {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounding domain of a point run. NaN coordinates are skipped;
    /// an empty or all-NaN run collapses to the zero domain.
    pub fn of_points(points: &[PlotPoint]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points {
            if !p.x.is_nan() {
                x_min = x_min.min(p.x);
                x_max = x_max.max(p.x);
            }
            if !p.y.is_nan() {
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
            }
        }
        Self {
            x_min: if x_min <= x_max { x_min } else { 0.0 },
            x_max: if x_min <= x_max { x_max } else { 0.0 },
            y_min: if y_min <= y_max { y_min } else { 0.0 },
            y_max: if y_min <= y_max { y_max } else { 0.0 },
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
