//! Calcite concentration chart for the selected region and level

use egui::Ui;
use parking_lot::RwLock;
use tracing::debug;

use ov_core::{CalciteAnnotation, Level, RenderOp, ViewFrame, ViewKind, ViewSurface};

use crate::chart::{draw_chart, draw_empty, ChartConfig, ChartModel};
use crate::format::{format_sci, format_sci_delta};

pub const CALCITE_TITLE: &str = "The Sea's Barrier is Weakening";

const CALCITE_INTRO: &str = "Calcite concentration, a major indicator of the ocean's ability to \
    neutralize acidity, has changed unevenly since industrialization. In places where it has \
    declined, this change has left coral ecosystems and countless marine species more vulnerable \
    to environmental degradation.";

#[derive(Default)]
struct CalciteChartState {
    region: Option<String>,
    level: Level,
    model: Option<ChartModel>,
    annotation: Option<CalciteAnnotation>,
}

/// Calcite series of the selected region at the selected level
pub struct CalciteChartView {
    pub config: ChartConfig,
    state: RwLock<CalciteChartState>,
}

impl CalciteChartView {
    pub fn new() -> Self {
        Self {
            config: ChartConfig {
                title: CALCITE_TITLE.to_string(),
                intro: CALCITE_INTRO.to_string(),
                y_label: "Calcite concentration (mol m⁻³)".to_string(),
                line_color: egui::Color32::from_rgb(0x1a, 0x96, 0x41),
                y_format: |v| format!("{:.1e}", v),
                ..Default::default()
            },
            state: RwLock::new(CalciteChartState::default()),
        }
    }

    pub fn region(&self) -> Option<String> {
        self.state.read().region.clone()
    }

    pub fn level(&self) -> Level {
        self.state.read().level
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
        let level = frame.selection.level;
        let series = frame.resolver.calcite_series(&region, level);
        debug!("Redrawing calcite chart for {} at level {} ({} points)", region, level, series.len());

        let mut state = self.state.write();
        state.model = ChartModel::from_series(series);
        if let Some(model) = state.model.as_mut() {
            model.place_initial_marker(frame.selection.year);
        }
        state.annotation = frame.resolver.calcite_annotation(&region, level);
        state.region = Some(region);
        state.level = level;
    }

    fn update_marker(&self, frame: &ViewFrame) {
        let Some(year) = frame.selection.year else {
            return;
        };
        if let Some(model) = self.state.write().model.as_mut() {
            if !model.place_marker(year) {
                debug!("No calcite value for {}; marker unchanged", year);
            }
        }
    }

    pub fn ui(&self, ui: &mut Ui) {
        let state = self.state.read();
        match (&state.region, &state.model) {
            (Some(region), Some(model)) => {
                let annotation = state.annotation.as_ref().map(|a| annotation_text(region, a));
                draw_chart(
                    ui,
                    "calcite_chart",
                    &self.config,
                    &subtitle(region, state.level),
                    model,
                    annotation.as_deref(),
                );
            }
            (Some(region), None) => {
                let message = format!("No calcite data for {} at level {}", region, state.level);
                draw_empty(ui, &self.config, &message);
            }
            _ => draw_empty(ui, &self.config, "Click an ocean region on the map"),
        }
    }
}

impl Default for CalciteChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSurface for CalciteChartView {
    fn kind(&self) -> ViewKind {
        ViewKind::CalciteChart
    }

    fn on_selection_changed(&self, op: RenderOp, frame: &ViewFrame) {
        match op {
            RenderOp::Redraw => self.redraw(frame),
            RenderOp::UpdateMarker => self.update_marker(frame),
            RenderOp::Refresh => {}
        }
    }
}

pub fn subtitle(region: &str, level: Level) -> String {
    format!(
        "Simulated {} Ocean Calcite Concentration at Level {} ({} m)",
        region,
        level,
        level.depth_m()
    )
}

pub fn annotation_text(region: &str, annotation: &CalciteAnnotation) -> String {
    format!(
        "Since {}, the {} Ocean's calcite concentration at level {} ({} m) changed by {} mol m⁻³. \
         Calcite concentration reached a low of {} mol m⁻³ in {}.",
        annotation.baseline_year,
        region,
        annotation.level,
        annotation.level.depth_m(),
        format_sci_delta(annotation.delta, 2),
        format_sci(Some(annotation.low.value), 2),
        annotation.low.year,
    )
}
