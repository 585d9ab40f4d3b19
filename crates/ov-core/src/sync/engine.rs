//! View synchronizer implementation

use std::sync::{Arc, Weak};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use super::plan::{render_plan, SelectionEvent};
use super::surface::{ViewFrame, ViewSurface};
use super::SyncPhase;
use crate::error::{DataLoadError, SelectionError};
use crate::events::{events, EventBus};
use crate::resolver::Resolver;
use crate::selection::SelectionState;

/// Synchronizer state stored internally
#[derive(Debug, Clone, Default)]
struct SyncState {
    phase: SyncPhase,
    selection: SelectionState,
    resolver: Option<Arc<Resolver>>,
    load_error: Option<DataLoadError>,
}

/// Owns the selection and drives every registered view
pub struct ViewSynchronizer {
    state: Arc<RwLock<SyncState>>,
    views: Arc<RwLock<Vec<Weak<dyn ViewSurface>>>>,
    event_bus: Arc<EventBus>,
}

impl ViewSynchronizer {
    /// Create a new synchronizer with its own event bus
    pub fn new() -> Self {
        Self::with_event_bus(Arc::new(EventBus::new()))
    }

    pub fn with_event_bus(event_bus: Arc<EventBus>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SyncState::default())),
            views: Arc::new(RwLock::new(Vec::new())),
            event_bus,
        }
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    /// Register a view. Held weakly; dropped views are pruned on dispatch.
    pub fn add_view(&self, view: Arc<dyn ViewSurface>) {
        self.views.write().push(Arc::downgrade(&view));
    }

    pub fn phase(&self) -> SyncPhase {
        self.state.read().phase
    }

    pub fn selection(&self) -> SelectionState {
        self.state.read().selection.clone()
    }

    pub fn resolver(&self) -> Option<Arc<Resolver>> {
        self.state.read().resolver.clone()
    }

    pub fn load_error(&self) -> Option<DataLoadError> {
        self.state.read().load_error.clone()
    }

    /// Datasets are ready: draw the map
    pub fn datasets_loaded(&self, resolver: Arc<Resolver>) {
        let mut state = self.state.write();
        if state.phase != SyncPhase::Uninitialized {
            warn!("Ignoring dataset load in phase {:?}", state.phase);
            return;
        }
        state.phase = SyncPhase::Loaded;
        state.resolver = Some(resolver.clone());
        let selection = state.selection.clone();
        drop(state);

        let datasets = resolver.datasets();
        self.event_bus.publish(events::DatasetsLoaded {
            grid_points: datasets.grid.len(),
            temperature_rows: datasets.temperature.len(),
            calcite_rows: datasets.calcite.len(),
        });

        self.dispatch(SelectionEvent::DatasetsLoaded, ViewFrame::new(selection, resolver));
    }

    /// Loading failed: the session stays in the failed phase
    pub fn load_failed(&self, load_error: DataLoadError) {
        let mut state = self.state.write();
        if state.phase != SyncPhase::Uninitialized {
            warn!("Ignoring load failure in phase {:?}", state.phase);
            return;
        }
        error!("Failed to load data: {}", load_error);
        state.phase = SyncPhase::Failed;
        state.load_error = Some(load_error.clone());
        drop(state);

        self.event_bus.publish(events::LoadFailed { error: load_error.to_string() });
    }

    /// Map click: redraw both charts for the region
    pub fn select_region(&self, name: &str) -> Result<(), SelectionError> {
        let frame = self.update(|selection, resolver| selection.select_region(name, resolver))?;
        self.state.write().phase = SyncPhase::RegionSelected;

        info!("Selected region {} (year {:?})", name, frame.selection.year);
        self.event_bus.publish(events::RegionSelected {
            region: name.to_string(),
            year: frame.selection.year,
        });

        self.dispatch(SelectionEvent::RegionSelected, frame);
        Ok(())
    }

    /// Level selector change. Without a region the level is only stored.
    pub fn select_level(&self, level: u32) -> Result<(), SelectionError> {
        let previous_year = self.state.read().selection.year;
        let frame = self.update(|selection, resolver| selection.select_level(level, resolver))?;
        let year_moved = frame.selection.year != previous_year;

        debug!("Selected level {} (year {:?})", level, frame.selection.year);
        self.event_bus.publish(events::LevelChanged {
            level,
            year: frame.selection.year,
        });

        if frame.selection.has_region() {
            self.dispatch(SelectionEvent::LevelChanged { year_moved }, frame);
        }
        Ok(())
    }

    /// Slider input: move markers and refresh readouts
    pub fn select_year(&self, year: i32) -> Result<(), SelectionError> {
        let frame = self.update(|selection, resolver| selection.select_year(year, resolver))?;

        debug!("Selected year {:?}", frame.selection.year);
        self.event_bus.publish(events::YearChanged { year: frame.selection.year });

        self.dispatch(SelectionEvent::YearChanged, frame);
        Ok(())
    }

    /// Apply a change to a copy of the selection and commit it only on success
    fn update<F>(&self, change: F) -> Result<ViewFrame, SelectionError>
    where
        F: FnOnce(&mut SelectionState, &Resolver) -> Result<(), SelectionError>,
    {
        let mut state = self.state.write();
        let resolver = match (&state.resolver, state.phase.accepts_selection()) {
            (Some(resolver), true) => resolver.clone(),
            _ => return Err(SelectionError::DatasetsNotLoaded),
        };

        let mut selection = state.selection.clone();
        change(&mut selection, &resolver)?;
        state.selection = selection.clone();
        drop(state);

        Ok(ViewFrame::new(selection, resolver))
    }

    /// Run the render plan against live views. No lock is held while views
    /// run, so they may read the synchronizer back.
    fn dispatch(&self, event: SelectionEvent, frame: ViewFrame) {
        let calcite_available = frame.selection.region.as_deref()
            .map(|region| frame.resolver.has_calcite(region, frame.selection.level))
            .unwrap_or(false);
        let plan = render_plan(event, calcite_available);

        let live: Vec<Arc<dyn ViewSurface>> = {
            let mut views = self.views.write();
            views.retain(|weak| weak.strong_count() > 0);
            views.iter().filter_map(|weak| weak.upgrade()).collect()
        };

        for (kind, op) in plan {
            for view in live.iter().filter(|v| v.kind() == kind) {
                view.on_selection_changed(op, &frame);
            }
        }
    }
}

impl Default for ViewSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}
