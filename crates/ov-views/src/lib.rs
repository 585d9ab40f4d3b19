//! Views for the ocean explorer
//!
//! Every view implements [`ov_core::ViewSurface`] so the synchronizer can
//! drive it, keeps its derived state behind a lock, and draws that state with
//! egui when the frame comes around.

pub mod calcite_chart;
pub mod chart;
pub mod format;
pub mod map_view;
pub mod readouts;
pub mod temperature_chart;
pub mod utils;

pub use calcite_chart::CalciteChartView;
pub use chart::{AxisDomain, ChartConfig, ChartModel};
pub use map_view::{MapResponse, SstMapView};
pub use readouts::{ReadoutText, ReadoutsView};
pub use temperature_chart::TemperatureChartView;
pub use utils::colors::{ColorBins, SST_PALETTE};
