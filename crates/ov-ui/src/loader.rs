//! Loading and failure overlay shown until the datasets are ready

use egui::{Align, Layout, RichText, Ui};
use ov_core::{DataLoadError, SyncPhase};

use crate::theme::error_color;

/// Status line for phases that have nothing else to show
pub fn loader_message(phase: SyncPhase) -> Option<&'static str> {
    match phase {
        SyncPhase::Uninitialized => Some("Loading data…"),
        SyncPhase::Failed => Some("Failed to load data."),
        SyncPhase::Loaded | SyncPhase::RegionSelected => None,
    }
}

pub struct LoadOverlay;

impl LoadOverlay {
    /// Draw the overlay for `phase`. Returns `true` if it covered the page.
    pub fn ui(ui: &mut Ui, phase: SyncPhase, load_error: Option<&DataLoadError>) -> bool {
        let Some(message) = loader_message(phase) else {
            return false;
        };

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(ui.available_height() / 3.0);
            if phase == SyncPhase::Failed {
                ui.label(RichText::new(message).heading().color(error_color()));
                if let Some(err) = load_error {
                    ui.label(RichText::new(err.to_string()).weak());
                }
            } else {
                ui.spinner();
                ui.label(RichText::new(message).heading());
            }
        });
        true
    }
}
