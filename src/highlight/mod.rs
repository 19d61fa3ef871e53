//! Maps a query position to the nearest data point across the visible
//! series, with axis disambiguation and stacked sub-segment resolution.

pub mod grouped;
pub mod stacked;

pub use grouped::{recover_group_index, GroupIndex};
pub use stacked::{range_index_for, stack_ranges, stack_ranges_into, Range};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data_types::{SeriesHandle, ValueAxis};
use crate::transform::LinearTransform;

/// How a logical query x is turned back into an entry index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum IndexRecovery {
    /// Round to the nearest entry index (line, scatter, plain bars).
    Rounding,
    /// Undo grouped-bar spacing before indexing; also pins the series
    /// within the group.
    Grouped {
        series_count: usize,
        group_spacing: f64,
    },
}

/// Axis picked when candidates exist on both value axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSelection {
    /// Smaller minimum pixel distance wins, ties go to the primary axis.
    #[default]
    NearestAxis,
    /// Only primary-axis candidates are considered.
    PrimaryOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Hits farther than this many pixels from the query are dropped.
    /// `None` disables the gate.
    pub max_pixel_distance: Option<f64>,
}

/// One pointer query. `x` is already inverse-transformed into logical
/// units by the caller; the y side stays in pixels together with the
/// per-axis transforms so candidate distances and stacked ranges can be
/// resolved on either axis.
#[derive(Clone, Copy, Debug)]
pub struct HighlightQuery {
    pub x: f64,
    pub pixel_y: f64,
    pub primary: LinearTransform,
    pub secondary: LinearTransform,
}

impl HighlightQuery {
    pub fn new(x: f64, pixel_y: f64, primary: LinearTransform) -> Self {
        Self {
            x,
            pixel_y,
            primary,
            secondary: primary,
        }
    }

    pub fn with_secondary(mut self, secondary: LinearTransform) -> Self {
        self.secondary = secondary;
        self
    }

    fn axis_transform(&self, axis: ValueAxis) -> LinearTransform {
        match axis {
            ValueAxis::Primary => self.primary,
            ValueAxis::Secondary => self.secondary,
        }
    }
}

/// The selected entry. Constructed fresh per query; carries no
/// persistent identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightResult {
    pub series_index: usize,
    pub x_index: usize,
    pub y_value: f64,
    pub axis: ValueAxis,
    pub stack_index: Option<usize>,
    pub stack_range: Option<Range>,
}

#[derive(Clone, Copy, Debug)]
struct SelectionCandidate {
    series_index: usize,
    x_index: usize,
    y_value: f64,
    axis: ValueAxis,
    pixel_distance: f64,
}

/// Caller-owned buffers reused across queries.
#[derive(Debug, Default)]
pub struct HighlightScratch {
    candidates: Vec<SelectionCandidate>,
    ranges: Vec<Range>,
}

impl HighlightScratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Nearest-entry selection, parameterized per chart family by an index
/// recovery strategy and an axis selection strategy.
#[derive(Clone, Copy, Debug)]
pub struct Highlighter {
    index_recovery: IndexRecovery,
    axis_selection: AxisSelection,
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(index_recovery: IndexRecovery) -> Self {
        Self {
            index_recovery,
            axis_selection: AxisSelection::default(),
            config: HighlightConfig::default(),
        }
    }

    pub fn with_axis_selection(mut self, axis_selection: AxisSelection) -> Self {
        self.axis_selection = axis_selection;
        self
    }

    pub fn with_config(mut self, config: HighlightConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves the query to the nearest enabled entry, or `None` when
    /// nothing qualifies. Never an error: empty data, disabled series
    /// and out-of-range indices all degrade to `None` or clamping.
    pub fn highlight(
        &self,
        query: &HighlightQuery,
        series: &[&dyn SeriesHandle],
        scratch: &mut HighlightScratch,
    ) -> Option<HighlightResult> {
        scratch.candidates.clear();
        scratch.ranges.clear();

        let (index_raw, series_hint) = match self.index_recovery {
            IndexRecovery::Rounding => (query.x.round().max(0.0) as usize, None),
            IndexRecovery::Grouped {
                series_count,
                group_spacing,
            } => {
                let g = recover_group_index(query.x, series_count, group_spacing);
                (g.x_index, Some(g.series_index))
            }
        };

        for (series_index, handle) in series.iter().enumerate() {
            if !handle.highlight_enabled() || handle.is_empty() {
                continue;
            }
            if let Some(hint) = series_hint {
                if series_index != hint {
                    continue;
                }
            }
            let x_index = index_raw.min(handle.len() - 1);
            let y_value = handle.y_at(x_index);
            if y_value.is_nan() {
                continue;
            }
            let axis = handle.axis();
            let pixel_distance = (query.axis_transform(axis).map(y_value) - query.pixel_y).abs();
            scratch.candidates.push(SelectionCandidate {
                series_index,
                x_index,
                y_value,
                axis,
                pixel_distance,
            });
        }

        if scratch.candidates.is_empty() {
            return None;
        }

        let chosen_axis = match self.axis_selection {
            AxisSelection::PrimaryOnly => ValueAxis::Primary,
            AxisSelection::NearestAxis => {
                let min_primary = min_distance_on(&scratch.candidates, ValueAxis::Primary);
                let min_secondary = min_distance_on(&scratch.candidates, ValueAxis::Secondary);
                if min_secondary < min_primary {
                    ValueAxis::Secondary
                } else {
                    ValueAxis::Primary
                }
            }
        };

        let mut best: Option<SelectionCandidate> = None;
        for candidate in scratch.candidates.iter().filter(|c| c.axis == chosen_axis) {
            if best.is_none_or(|b| candidate.pixel_distance < b.pixel_distance) {
                best = Some(*candidate);
            }
        }
        let best = best?;

        if let Some(max) = self.config.max_pixel_distance {
            if best.pixel_distance > max {
                return None;
            }
        }

        let handle = series[best.series_index];
        let (stack_index, stack_range) = match handle.stack_values(best.x_index) {
            Some(values) if !values.is_empty() => {
                stack_ranges_into(values, &mut scratch.ranges);
                let y_query = query.axis_transform(best.axis).invert(query.pixel_y);
                let index = range_index_for(&scratch.ranges, y_query);
                (Some(index), Some(scratch.ranges[index]))
            }
            _ => (None, None),
        };

        trace!(
            series = best.series_index,
            x_index = best.x_index,
            ?stack_index,
            "highlight hit"
        );

        Some(HighlightResult {
            series_index: best.series_index,
            x_index: best.x_index,
            y_value: best.y_value,
            axis: best.axis,
            stack_index,
            stack_range,
        })
    }
}

fn min_distance_on(candidates: &[SelectionCandidate], axis: ValueAxis) -> f64 {
    candidates
        .iter()
        .filter(|c| c.axis == axis)
        .fold(f64::INFINITY, |acc, c| acc.min(c.pixel_distance))
}
