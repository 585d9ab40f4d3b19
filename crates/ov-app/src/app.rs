//! Application state: owns the runtime, the synchronizer and the shell

use std::sync::Arc;

use eframe::egui::Context;
use parking_lot::RwLock;
use tracing::{debug, error, info, Level};

use ov_core::events::{events, handler_from_fn, Event};
use ov_core::{DataLoadError, Datasets, Resolver, ViewSynchronizer};
use ov_data::{CsvDataLoader, DataConfig};
use ov_ui::{ExplorerShell, Theme};

/// Result slot written by the load task and drained by the UI thread
pub enum LoadStatus {
    Pending,
    Ready(Datasets),
    Failed(DataLoadError),
    Consumed,
}

impl LoadStatus {
    pub fn take(&mut self) -> LoadStatus {
        match self {
            LoadStatus::Pending => LoadStatus::Pending,
            _ => std::mem::replace(self, LoadStatus::Consumed),
        }
    }
}

pub struct OceanExplorerApp {
    sync: Arc<ViewSynchronizer>,
    shell: ExplorerShell,
    load_status: Arc<RwLock<LoadStatus>>,

    /// Kept alive for the load task
    _runtime: tokio::runtime::Runtime,
}

impl OceanExplorerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        config: DataConfig,
    ) -> Self {
        ov_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let sync = Arc::new(ViewSynchronizer::new());
        subscribe_logging(&sync);
        let shell = ExplorerShell::new(sync.clone());

        let load_status = Arc::new(RwLock::new(LoadStatus::Pending));
        spawn_load(&runtime, config, load_status.clone(), cc.egui_ctx.clone());

        Self {
            sync,
            shell,
            load_status,
            _runtime: runtime,
        }
    }

    /// Hand a finished load to the synchronizer, once
    fn poll_load(&self) {
        let status = self.load_status.write().take();
        match status {
            LoadStatus::Ready(datasets) => {
                self.sync.datasets_loaded(Arc::new(Resolver::new(Arc::new(datasets))));
            }
            LoadStatus::Failed(e) => self.sync.load_failed(e),
            LoadStatus::Pending | LoadStatus::Consumed => {}
        }
    }
}

fn spawn_load(
    runtime: &tokio::runtime::Runtime,
    config: DataConfig,
    status: Arc<RwLock<LoadStatus>>,
    ctx: Context,
) {
    runtime.spawn(async move {
        let loader = CsvDataLoader::new(config);
        let result = Datasets::load_all(&loader).await;

        *status.write() = match result {
            Ok(datasets) => LoadStatus::Ready(datasets),
            Err(e) => {
                error!("Failed to load datasets: {}", e);
                LoadStatus::Failed(e)
            }
        };
        ctx.request_repaint();
    });
}

/// Log every synchronizer event
fn subscribe_logging(sync: &ViewSynchronizer) {
    let bus = sync.event_bus();
    bus.subscribe::<events::DatasetsLoaded>(handler_from_fn(log_event));
    bus.subscribe::<events::LoadFailed>(handler_from_fn(log_event));
    bus.subscribe::<events::RegionSelected>(handler_from_fn(log_event));
    bus.subscribe::<events::LevelChanged>(handler_from_fn(log_event));
    bus.subscribe::<events::YearChanged>(handler_from_fn(log_event));
}

fn log_event(event: &dyn Event) {
    match event_message(event) {
        Some((Level::ERROR, message)) => error!("{}", message),
        Some((Level::INFO, message)) => info!("{}", message),
        Some((_, message)) => debug!("{}", message),
        None => {}
    }
}

fn event_message(event: &dyn Event) -> Option<(Level, String)> {
    let any = event.as_any();
    if let Some(e) = any.downcast_ref::<events::DatasetsLoaded>() {
        return Some((
            Level::INFO,
            format!(
                "Datasets ready: {} grid cells, {} temperature rows, {} calcite rows",
                e.grid_points, e.temperature_rows, e.calcite_rows
            ),
        ));
    }
    if let Some(e) = any.downcast_ref::<events::LoadFailed>() {
        return Some((Level::ERROR, format!("Session stopped: {}", e.error)));
    }
    if let Some(e) = any.downcast_ref::<events::RegionSelected>() {
        return Some((Level::INFO, format!("Region {} selected (year {:?})", e.region, e.year)));
    }
    if let Some(e) = any.downcast_ref::<events::LevelChanged>() {
        return Some((Level::DEBUG, format!("Level now {} (year {:?})", e.level, e.year)));
    }
    any.downcast_ref::<events::YearChanged>()
        .map(|e| (Level::DEBUG, format!("Year now {:?}", e.year)))
}

impl eframe::App for OceanExplorerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        self.shell.show(ctx);
    }
}
