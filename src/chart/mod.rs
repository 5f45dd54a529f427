/// Chart layer: artifact producers mapping the filtered view and scalar
/// inputs to renderer-independent chart descriptions. The `ui` module turns
/// these into egui shapes; nothing in here touches a screen.
pub mod histogram;
pub mod pie;
pub mod scatter;

pub use histogram::{BarLayout, HistogramBin, HistogramSpec};
pub use pie::PieSpec;
pub use scatter::ScatterSpec;

use thiserror::Error;

/// Errors surfaced by artifact construction. Inputs are not validated ahead
/// of time; a bad value fails here, at recompute, and the renderer presents
/// the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("bin count must be at least 1 (got {0})")]
    InvalidBinCount(u32),
}
