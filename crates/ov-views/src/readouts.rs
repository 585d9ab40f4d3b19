//! Year, temperature and calcite readout pills

use egui::{Frame, Margin, RichText, Rounding, Ui};
use parking_lot::RwLock;

use ov_core::{Readouts, RenderOp, ViewFrame, ViewKind, ViewSurface};

use crate::format::{calcite_text, temperature_text, PLACEHOLDER};

/// Pill labels; units come with the formatted values
pub const PILL_LABELS: [&str; 3] = ["Year", "Temp", "Calc"];

/// Readouts formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutText {
    pub year: String,
    pub temperature: String,
    pub calcite: String,
}

impl From<&Readouts> for ReadoutText {
    fn from(readouts: &Readouts) -> Self {
        Self {
            year: readouts.year.map_or_else(|| PLACEHOLDER.to_string(), |y| y.to_string()),
            temperature: temperature_text(readouts.temperature),
            calcite: calcite_text(readouts.calcite),
        }
    }
}

#[derive(Default)]
pub struct ReadoutsView {
    readouts: RwLock<Readouts>,
}

impl ReadoutsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readouts(&self) -> Readouts {
        *self.readouts.read()
    }

    pub fn text(&self) -> ReadoutText {
        ReadoutText::from(&*self.readouts.read())
    }

    pub fn ui(&self, ui: &mut Ui) {
        let text = self.text();
        ui.horizontal(|ui| {
            pill(ui, PILL_LABELS[0], &text.year);
            pill(ui, PILL_LABELS[1], &text.temperature);
            pill(ui, PILL_LABELS[2], &text.calcite);
        });
    }
}

fn pill(ui: &mut Ui, label: &str, value: &str) {
    Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).weak());
                ui.label(RichText::new(value).strong());
            });
        });
}

impl ViewSurface for ReadoutsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Readouts
    }

    fn on_selection_changed(&self, op: RenderOp, frame: &ViewFrame) {
        if op == RenderOp::Refresh {
            *self.readouts.write() = frame.readouts;
        }
    }
}
