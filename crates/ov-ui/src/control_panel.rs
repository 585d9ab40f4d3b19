//! Level selector and year slider

use std::ops::RangeInclusive;
use std::sync::Arc;

use egui::{ComboBox, Slider, Ui};
use ov_core::{Level, SelectionError, ViewSynchronizer};
use tracing::debug;

/// Controls that feed the synchronizer
pub struct ControlPanel {
    sync: Arc<ViewSynchronizer>,
    /// Slider position while dragging; re-read from the selection each frame
    year: i32,
}

impl ControlPanel {
    pub fn new(sync: Arc<ViewSynchronizer>) -> Self {
        Self { sync, year: 0 }
    }

    /// Slider bounds for the selected region
    pub fn year_range(&self) -> Option<RangeInclusive<i32>> {
        let region = self.sync.selection().region?;
        let (first, last) = self.sync.resolver()?.year_range(&region)?;
        Some(first..=last)
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let selection = self.sync.selection();

        ui.horizontal(|ui| {
            ui.label("Level:");
            let current = selection.level;
            ComboBox::from_id_source("level_selector")
                .selected_text(level_label(current))
                .show_ui(ui, |ui| {
                    for level in Level::all() {
                        if ui.selectable_label(level == current, level_label(level)).clicked() {
                            report(self.sync.select_level(level.value()));
                        }
                    }
                });

            ui.separator();

            match (self.year_range(), selection.year) {
                (Some(range), Some(year)) => {
                    self.year = year;
                    let slider = Slider::new(&mut self.year, range).step_by(1.0).text("Year");
                    if ui.add(slider).changed() {
                        report(self.sync.select_year(self.year));
                    }
                }
                _ => {
                    ui.add_enabled(false, Slider::new(&mut self.year, 1850..=2014).text("Year"));
                }
            }
        });
    }
}

pub fn level_label(level: Level) -> String {
    format!("{} ({} m)", level, level.depth_m())
}

fn report(result: Result<(), SelectionError>) {
    if let Err(e) = result {
        debug!("Selection ignored: {}", e);
    }
}
