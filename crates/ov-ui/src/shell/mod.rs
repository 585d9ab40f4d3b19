//! Page layout: header, map, controls, readouts and the two charts

use std::sync::Arc;

use egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel};
use ov_core::{ViewSurface, ViewSynchronizer};
use ov_views::{CalciteChartView, ReadoutsView, SstMapView, TemperatureChartView};
use tracing::warn;

use crate::control_panel::ControlPanel;
use crate::loader::LoadOverlay;

/// The four synchronized views. Owns the strong references; the
/// synchronizer only holds weak ones.
pub struct ExplorerViews {
    pub map: Arc<SstMapView>,
    pub temperature: Arc<TemperatureChartView>,
    pub calcite: Arc<CalciteChartView>,
    pub readouts: Arc<ReadoutsView>,
}

impl ExplorerViews {
    pub fn new() -> Self {
        Self {
            map: Arc::new(SstMapView::new()),
            temperature: Arc::new(TemperatureChartView::new()),
            calcite: Arc::new(CalciteChartView::new()),
            readouts: Arc::new(ReadoutsView::new()),
        }
    }

    pub fn register(&self, sync: &ViewSynchronizer) {
        sync.add_view(self.map.clone() as Arc<dyn ViewSurface>);
        sync.add_view(self.temperature.clone() as Arc<dyn ViewSurface>);
        sync.add_view(self.calcite.clone() as Arc<dyn ViewSurface>);
        sync.add_view(self.readouts.clone() as Arc<dyn ViewSurface>);
    }
}

impl Default for ExplorerViews {
    fn default() -> Self {
        Self::new()
    }
}

/// Application shell
pub struct ExplorerShell {
    sync: Arc<ViewSynchronizer>,
    views: ExplorerViews,
    controls: ControlPanel,
}

impl ExplorerShell {
    /// Create the shell and register its views with `sync`
    pub fn new(sync: Arc<ViewSynchronizer>) -> Self {
        let views = ExplorerViews::new();
        views.register(&sync);
        let controls = ControlPanel::new(sync.clone());
        Self { sync, views, controls }
    }

    pub fn views(&self) -> &ExplorerViews {
        &self.views
    }

    pub fn show(&mut self, ctx: &Context) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new("Ocean Explorer").heading().strong());
            ui.label(
                RichText::new("Click an ocean region to explore its temperature and calcite history")
                    .weak(),
            );
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            let phase = self.sync.phase();
            let load_error = self.sync.load_error();
            if LoadOverlay::ui(ui, phase, load_error.as_ref()) {
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                let selected = self.sync.selection().region;
                let response = self.views.map.ui(ui, selected.as_deref());
                if let Some(region) = response.clicked_region {
                    if let Err(e) = self.sync.select_region(region) {
                        warn!("Region selection rejected: {}", e);
                    }
                }

                ui.separator();
                self.controls.ui(ui);
                self.views.readouts.ui(ui);

                ui.separator();
                self.views.temperature.ui(ui);
                ui.separator();
                self.views.calcite.ui(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{CalciteRecord, Datasets, GridPoint, Resolver, TemperatureRecord};

    #[test]
    fn test_shell_views_follow_synchronizer() {
        let sync = Arc::new(ViewSynchronizer::new());
        let shell = ExplorerShell::new(sync.clone());

        let grid = vec![
            GridPoint { longitude: -30.0, latitude: 10.0, value: 295.0 },
            GridPoint { longitude: 70.0, latitude: -10.0, value: 300.0 },
        ];
        let temperature = vec![TemperatureRecord {
            region: "Atlantic".to_string(),
            year: 1850,
            temperature_k: 291.0,
        }];
        sync.datasets_loaded(Arc::new(Resolver::new(Arc::new(Datasets::new(
            grid,
            temperature,
            Vec::new(),
        )))));
        assert_eq!(shell.views().map.class_counts().iter().sum::<usize>(), 2);
        assert!(shell.views().temperature.model().is_none());

        sync.select_region("Atlantic").unwrap();
        assert_eq!(shell.views().temperature.region().as_deref(), Some("Atlantic"));
        assert_eq!(shell.views().readouts.text().year, "1850");
        // No calcite rows at the default level
        assert!(shell.views().calcite.model().is_none());
    }

    #[test]
    fn test_level_fallback_keeps_markers_together() {
        let sync = Arc::new(ViewSynchronizer::new());
        let shell = ExplorerShell::new(sync.clone());

        let mut temperature = Vec::new();
        let mut calcite = Vec::new();
        for year in 1850..=1950 {
            temperature.push(TemperatureRecord {
                region: "Atlantic".to_string(),
                year,
                temperature_k: 291.0,
            });
            if year >= 1900 {
                calcite.push(CalciteRecord {
                    region: "Atlantic".to_string(),
                    level: 1500,
                    year,
                    calcite: 4.0e-4,
                });
            }
        }
        sync.datasets_loaded(Arc::new(Resolver::new(Arc::new(Datasets::new(
            Vec::new(),
            temperature,
            calcite,
        )))));
        sync.select_region("Atlantic").unwrap();
        sync.select_level(1500).unwrap();

        let views = shell.views();
        assert_eq!(sync.selection().year, Some(1900));
        assert_eq!(views.readouts.text().year, "1900");
        assert_eq!(views.temperature.model().unwrap().marker.map(|p| p.year), Some(1900));
        assert_eq!(views.calcite.model().unwrap().marker.map(|p| p.year), Some(1900));
    }
}
