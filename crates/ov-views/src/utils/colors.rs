//! Color utilities for the surface temperature map

use egui::Color32;

use super::stats::quantile_sorted;

/// Five-class diverging palette, coolest first
pub const SST_PALETTE: [Color32; 5] = [
    Color32::from_rgb(0x2c, 0x7b, 0xb6),
    Color32::from_rgb(0xab, 0xd9, 0xe9),
    Color32::from_rgb(0xff, 0xff, 0xbf),
    Color32::from_rgb(0xfd, 0xae, 0x61),
    Color32::from_rgb(0xd7, 0x19, 0x1c),
];

/// Quantile classification of map values into [`SST_PALETTE`] classes.
///
/// The five class edges are the 0, 20, 40, 60, 80 and 100 percentiles of the
/// values; a value equal to an inner edge falls in the upper class.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBins {
    edges: [f64; 6],
}

impl ColorBins {
    /// Build bins from unsorted values. Non-finite values are ignored;
    /// `None` if nothing is left.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let mut edges = [0.0; 6];
        for (i, edge) in edges.iter_mut().enumerate() {
            *edge = quantile_sorted(&sorted, i as f64 / 5.0)?;
        }
        Some(Self { edges })
    }

    /// The four inner thresholds
    pub fn thresholds(&self) -> &[f64] {
        &self.edges[1..5]
    }

    /// Class edges from the minimum to the maximum
    pub fn edges(&self) -> &[f64; 6] {
        &self.edges
    }

    pub fn bin_index(&self, value: f64) -> usize {
        self.thresholds().partition_point(|t| *t <= value)
    }

    pub fn color(&self, value: f64) -> Color32 {
        SST_PALETTE[self.bin_index(value)]
    }

    /// Legend label for each class, e.g. `"290.1 – 295.4"`
    pub fn legend_labels(&self) -> Vec<String> {
        self.edges
            .windows(2)
            .map(|pair| format!("{:.1} – {:.1}", pair[0], pair[1]))
            .collect()
    }
}
