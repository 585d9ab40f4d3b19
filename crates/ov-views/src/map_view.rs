//! Binned sea surface temperature map with clickable ocean regions

use egui::{Color32, RichText, Sense, Stroke, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use parking_lot::RwLock;
use tracing::{debug, info};

use ov_core::{hit_test, GridPoint, RenderOp, ViewFrame, ViewKind, ViewSurface, REGIONS};

use crate::utils::colors::{ColorBins, SST_PALETTE};

/// What happened on the map this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapResponse {
    pub hovered_region: Option<&'static str>,
    pub clicked_region: Option<&'static str>,
}

#[derive(Default)]
struct SstMapState {
    bins: Option<ColorBins>,
    /// Cell centres grouped by color class
    cells: [Vec<[f64; 2]>; 5],
}

/// Mean surface temperature grid drawn as colored cells
pub struct SstMapView {
    pub cell_radius: f32,
    state: RwLock<SstMapState>,
}

impl SstMapView {
    pub fn new() -> Self {
        Self {
            cell_radius: 2.5,
            state: RwLock::new(SstMapState::default()),
        }
    }

    pub fn bins(&self) -> Option<ColorBins> {
        self.state.read().bins.clone()
    }

    /// Number of cells in each color class
    pub fn class_counts(&self) -> [usize; 5] {
        let state = self.state.read();
        let mut counts = [0; 5];
        for (count, cells) in counts.iter_mut().zip(state.cells.iter()) {
            *count = cells.len();
        }
        counts
    }

    fn redraw(&self, grid: &[GridPoint]) {
        let bins = ColorBins::from_values(grid.iter().map(|p| p.value));
        let mut cells: [Vec<[f64; 2]>; 5] = Default::default();

        if let Some(bins) = &bins {
            for point in grid.iter().filter(|p| p.value.is_finite()) {
                cells[bins.bin_index(point.value)].push([point.longitude, point.latitude]);
            }
        }
        info!("Map drawn with {} grid cells", cells.iter().map(Vec::len).sum::<usize>());

        let mut state = self.state.write();
        state.bins = bins;
        state.cells = cells;
    }

    /// Draw the map. `selected` is outlined more strongly.
    pub fn ui(&self, ui: &mut Ui, selected: Option<&str>) -> MapResponse {
        let state = self.state.read();
        let cell_radius = self.cell_radius;

        let plot = Plot::new("sst_map")
            .data_aspect(1.0)
            .height(380.0)
            .show_axes([false, false])
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-180.0)
            .include_x(180.0)
            .include_y(-90.0)
            .include_y(90.0);

        let response = plot.show(ui, |plot_ui| {
            for (class, cells) in state.cells.iter().enumerate() {
                if cells.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(PlotPoints::new(cells.clone()))
                        .color(SST_PALETTE[class])
                        .radius(cell_radius)
                        .shape(MarkerShape::Square)
                        .filled(true),
                );
            }

            let hovered = plot_ui.pointer_coordinate().and_then(|p| hit_test(p.x, p.y));

            for region in REGIONS.iter() {
                let emphasised = Some(region.name) == hovered || Some(region.name) == selected;
                let (width, fill) = if emphasised {
                    (2.5, Color32::from_rgba_unmultiplied(255, 255, 255, 40))
                } else {
                    (1.0, Color32::TRANSPARENT)
                };
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(region.outline().to_vec()))
                        .stroke(Stroke::new(width, Color32::from_gray(40)))
                        .fill_color(fill),
                );

                let (x, y) = region.center();
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(region.name).strong().size(15.0).color(Color32::BLACK),
                ));
            }

            let clicked = if plot_ui.response().clicked() { hovered } else { None };
            MapResponse {
                hovered_region: hovered,
                clicked_region: clicked,
            }
        });

        if let Some(bins) = &state.bins {
            draw_legend(ui, bins);
        }

        let result = response.inner;
        if let Some(region) = result.clicked_region {
            debug!("Map click in {}", region);
        }
        result
    }
}

fn draw_legend(ui: &mut Ui, bins: &ColorBins) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Mean SST (K)").small());
        for (color, label) in SST_PALETTE.iter().zip(bins.legend_labels()) {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, *color);
            ui.label(RichText::new(label).small());
        }
    });
}

impl Default for SstMapView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSurface for SstMapView {
    fn kind(&self) -> ViewKind {
        ViewKind::Map
    }

    fn on_selection_changed(&self, op: RenderOp, frame: &ViewFrame) {
        if op == RenderOp::Redraw {
            self.redraw(&frame.resolver.datasets().grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use ov_core::{Datasets, Resolver, SelectionState};

    fn frame(values: &[f64]) -> ViewFrame {
        let grid = values
            .iter()
            .enumerate()
            .map(|(i, v)| GridPoint { longitude: i as f64, latitude: 0.0, value: *v })
            .collect();
        let resolver = Resolver::new(Arc::new(Datasets::new(grid, Vec::new(), Vec::new())));
        ViewFrame::new(SelectionState::default(), Arc::new(resolver))
    }

    #[test]
    fn test_redraw_bins_every_cell() {
        let map = SstMapView::new();
        let values: Vec<f64> = (0..=10).map(|v| v as f64).collect();
        map.on_selection_changed(RenderOp::Redraw, &frame(&values));

        assert_eq!(map.class_counts(), [2, 2, 2, 2, 3]);
        assert_eq!(map.bins().unwrap().edges()[5], 10.0);
    }

    #[test]
    fn test_nan_cells_are_skipped() {
        let map = SstMapView::new();
        map.on_selection_changed(RenderOp::Redraw, &frame(&[290.0, f64::NAN, 300.0]));
        assert_eq!(map.class_counts().iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_empty_grid_has_no_bins() {
        let map = SstMapView::new();
        map.on_selection_changed(RenderOp::Redraw, &frame(&[]));
        assert!(map.bins().is_none());
        assert_eq!(map.class_counts(), [0; 5]);
    }

    #[test]
    fn test_other_ops_are_ignored() {
        let map = SstMapView::new();
        map.on_selection_changed(RenderOp::Refresh, &frame(&[1.0, 2.0]));
        assert!(map.bins().is_none());
    }
}
