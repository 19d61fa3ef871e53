//! chart_geom crate: geometric data reduction and hit-testing for charts

pub mod data_types;
pub mod highlight;
pub mod simplify;
pub mod transform;

pub use data_types::{AxisDomain, PlotPoint, SeriesHandle, ValueAxis, VecSeries};
pub use highlight::{
    HighlightQuery, HighlightResult, Highlighter, HighlightScratch, IndexRecovery,
};
pub use simplify::{compute_tolerance, simplify_rdp_slice, zoom_level, Approximator, RdpScratch};
pub use transform::LinearTransform;
