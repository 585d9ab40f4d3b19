//! Core functionality for the ocean explorer
//!
//! This crate provides the datasets, the selection state machine, the
//! derived-value resolver and the synchronizer that keeps the map and the two
//! linked charts consistent.

pub mod dataset;
pub mod error;
pub mod events;
pub mod level;
pub mod region;
pub mod resolver;
pub mod selection;
pub mod sync;

// Re-export commonly used types
pub use dataset::{CalciteRecord, DataLoader, Datasets, GridPoint, TemperatureRecord};
pub use error::{DataLoadError, DatasetKind, LoadFailure, SelectionError};
pub use events::EventBus;
pub use level::{Level, LEVELS};
pub use region::{hit_test, region_names, Region, REGIONS};
pub use resolver::{
    extremum, AnnotationConfig, CalciteAnnotation, Resolver, SeriesPoint, TemperatureAnnotation,
};
pub use selection::SelectionState;
pub use sync::{
    render_plan, Readouts, RenderOp, SelectionEvent, SyncPhase, ViewFrame, ViewKind, ViewSurface,
    ViewSynchronizer,
};
