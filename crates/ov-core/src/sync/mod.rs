//! View synchronization: keeps the map, both charts and the readouts
//! consistent with the current selection

mod engine;
mod plan;
mod surface;

pub use engine::ViewSynchronizer;
pub use plan::{render_plan, RenderOp, SelectionEvent, ViewKind};
pub use surface::{Readouts, ViewFrame, ViewSurface};

/// Lifecycle of an explorer session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    /// Datasets are still loading
    #[default]
    Uninitialized,
    /// Datasets loaded, map drawn, no region chosen yet
    Loaded,
    /// A region is selected and both charts are drawn
    RegionSelected,
    /// Loading failed; terminal for the session
    Failed,
}

impl SyncPhase {
    /// Whether selection operations are accepted
    pub fn accepts_selection(&self) -> bool {
        matches!(self, SyncPhase::Loaded | SyncPhase::RegionSelected)
    }
}
