pub mod rdp;
pub mod tolerance;

// Re-export public functions to keep the call sites flat
pub use rdp::{
    simplify_rdp_generic, simplify_rdp_slice, simplify_rdp_slice_into, RdpScratch,
};
pub use tolerance::{
    compute_tolerance, zoom_level, Approximator, FnApproximator, ZoomApproximator,
    MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL,
};
