//! Mean annual sea surface temperature chart

use egui::Ui;
use parking_lot::RwLock;
use tracing::debug;

use ov_core::{RenderOp, TemperatureAnnotation, ViewFrame, ViewKind, ViewSurface};

use crate::chart::{draw_chart, draw_empty, ChartConfig, ChartModel};
use crate::format::{fmt_num, format_delta};

pub const TEMPERATURE_TITLE: &str = "A Century and a Half of Warmer Seas";

const TEMPERATURE_INTRO: &str = "Global sea surface temperatures started rising rapidly after the \
    middle of the 20th century, reflecting the impact of industrial growth and increased fossil \
    fuel emissions.";

#[derive(Default)]
struct TemperatureChartState {
    region: Option<String>,
    model: Option<ChartModel>,
    annotation: Option<TemperatureAnnotation>,
}

/// Temperature series of the selected region with a year marker
pub struct TemperatureChartView {
    pub config: ChartConfig,
    state: RwLock<TemperatureChartState>,
}

impl TemperatureChartView {
    pub fn new() -> Self {
        Self {
            config: ChartConfig {
                title: TEMPERATURE_TITLE.to_string(),
                intro: TEMPERATURE_INTRO.to_string(),
                y_label: "Sea Surface Temperature in Kelvin (K)".to_string(),
                ..Default::default()
            },
            state: RwLock::new(TemperatureChartState::default()),
        }
    }

    pub fn region(&self) -> Option<String> {
        self.state.read().region.clone()
    }

    pub fn model(&self) -> Option<ChartModel> {
        self.state.read().model.clone()
    }

    pub fn annotation_text(&self) -> Option<String> {
        let state = self.state.read();
        let region = state.region.as_deref()?;
        state.annotation.as_ref().map(|a| annotation_text(region, a))
    }

    fn redraw(&self, frame: &ViewFrame) {
        let Some(region) = frame.selection.region.clone() else {
            return;
        };
        let series = frame.resolver.temperature_series(&region);
        debug!("Redrawing temperature chart for {} ({} points)", region, series.len());

        let mut state = self.state.write();
        state.model = ChartModel::from_series(series);
        if let Some(model) = state.model.as_mut() {
            model.place_initial_marker(frame.selection.year);
        }
        state.annotation = frame.resolver.temperature_annotation(&region);
        state.region = Some(region);
    }

    fn update_marker(&self, frame: &ViewFrame) {
        let Some(year) = frame.selection.year else {
            return;
        };
        if let Some(model) = self.state.write().model.as_mut() {
            model.place_marker(year);
        }
    }

    pub fn ui(&self, ui: &mut Ui) {
        let state = self.state.read();
        match (&state.region, &state.model) {
            (Some(region), Some(model)) => {
                let annotation = state.annotation.as_ref().map(|a| annotation_text(region, a));
                draw_chart(
                    ui,
                    "temperature_chart",
                    &self.config,
                    &subtitle(region),
                    model,
                    annotation.as_deref(),
                );
            }
            (Some(region), None) => {
                draw_empty(ui, &self.config, &format!("No temperature data for {}", region));
            }
            _ => draw_empty(ui, &self.config, "Click an ocean region on the map"),
        }
    }
}

impl Default for TemperatureChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSurface for TemperatureChartView {
    fn kind(&self) -> ViewKind {
        ViewKind::TemperatureChart
    }

    fn on_selection_changed(&self, op: RenderOp, frame: &ViewFrame) {
        match op {
            RenderOp::Redraw => self.redraw(frame),
            RenderOp::UpdateMarker => self.update_marker(frame),
            RenderOp::Refresh => {}
        }
    }
}

pub fn subtitle(region: &str) -> String {
    format!("Simulated {} Ocean Mean Annual Sea Surface Temperature", region)
}

pub fn annotation_text(region: &str, annotation: &TemperatureAnnotation) -> String {
    format!(
        "Since {}, the {} Ocean's mean sea surface temperature changed by {} K, \
         while reaching a peak of {} K in {}.",
        annotation.baseline_year,
        region,
        format_delta(annotation.delta, 2),
        fmt_num(Some(annotation.peak.value), 2),
        annotation.peak.year,
    )
}
