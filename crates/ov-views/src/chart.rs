//! Shared model and drawing for the two linked line charts

use egui::{Color32, RichText, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};
use ov_core::SeriesPoint;

use crate::utils::stats::{extent, nice_domain};

/// Configuration for a line chart
#[derive(Clone)]
pub struct ChartConfig {
    pub title: String,
    /// Context paragraph shown above the annotation
    pub intro: String,
    pub y_label: String,
    pub line_color: Color32,
    pub line_width: f32,
    pub marker_color: Color32,
    pub marker_radius: f32,
    pub show_grid: bool,
    pub height: f32,
    /// Tick label formatter for the value axis
    pub y_format: fn(f64) -> String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            y_label: String::new(),
            line_color: Color32::from_rgb(0x2c, 0x7b, 0xb6),
            line_width: 2.0,
            marker_color: Color32::from_rgb(0xd7, 0x19, 0x1c),
            marker_radius: 5.0,
            show_grid: true,
            height: 260.0,
            y_format: |v| format!("{:.2}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Series plus the axis domains computed when the chart was last redrawn.
/// The marker is only ever placed against these domains.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub series: Vec<SeriesPoint>,
    pub x_domain: AxisDomain,
    pub y_domain: AxisDomain,
    pub marker: Option<SeriesPoint>,
}

impl ChartModel {
    /// `None` for an empty series
    pub fn from_series(series: Vec<SeriesPoint>) -> Option<Self> {
        let (x_min, x_max) = extent(series.iter().map(|p| p.year as f64))?;
        let (y_min, y_max) = extent(series.iter().map(|p| p.value))?;
        let (y_min, y_max) = nice_domain(y_min, y_max, 10);

        Some(Self {
            series,
            x_domain: AxisDomain { min: x_min, max: x_max },
            y_domain: AxisDomain { min: y_min, max: y_max },
            marker: None,
        })
    }

    pub fn point_at(&self, year: i32) -> Option<SeriesPoint> {
        self.series.iter().find(|p| p.year == year).copied()
    }

    /// Move the marker to `year`. A year without a point leaves the marker
    /// where it was and returns `false`.
    pub fn place_marker(&mut self, year: i32) -> bool {
        match self.point_at(year) {
            Some(point) => {
                self.marker = Some(point);
                true
            }
            None => false,
        }
    }

    /// Marker for a fresh redraw: the selected year if present, otherwise
    /// the first point.
    pub fn place_initial_marker(&mut self, year: Option<i32>) {
        let point = year.and_then(|y| self.point_at(y)).or_else(|| self.series.first().copied());
        self.marker = point;
    }

    fn line_points(&self) -> Vec<[f64; 2]> {
        self.series.iter().map(|p| [p.year as f64, p.value]).collect()
    }
}

/// Title, plot and annotation for one chart
pub fn draw_chart(
    ui: &mut Ui,
    id: &str,
    config: &ChartConfig,
    subtitle: &str,
    model: &ChartModel,
    annotation: Option<&str>,
) {
    ui.label(RichText::new(&config.title).heading().strong());
    ui.label(RichText::new(subtitle).weak());

    let y_format = config.y_format;
    let plot = Plot::new(id)
        .height(config.height)
        .show_grid(config.show_grid)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Year")
        .y_axis_label(config.y_label.clone())
        .include_x(model.x_domain.min)
        .include_x(model.x_domain.max)
        .include_y(model.y_domain.min)
        .include_y(model.y_domain.max)
        .x_axis_formatter(|val, _max_chars, _range| format!("{:.0}", val))
        .y_axis_formatter(move |val, _max_chars, _range| y_format(val));

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(PlotPoints::new(model.line_points()))
                .color(config.line_color)
                .width(config.line_width),
        );

        if let Some(marker) = model.marker {
            plot_ui.points(
                Points::new(vec![[marker.year as f64, marker.value]])
                    .color(config.marker_color)
                    .radius(config.marker_radius)
                    .shape(MarkerShape::Circle)
                    .filled(true),
            );
        }
    });

    if !config.intro.is_empty() {
        ui.label(config.intro.as_str());
    }
    if let Some(text) = annotation {
        ui.label(RichText::new(text).strong());
    }
}

/// Placeholder shown in place of a chart with nothing to draw
pub fn draw_empty(ui: &mut Ui, config: &ChartConfig, message: &str) {
    ui.label(RichText::new(&config.title).heading().strong());
    ui.label(RichText::new(message).weak());
}
