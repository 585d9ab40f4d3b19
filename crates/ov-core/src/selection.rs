//! The current (region, level, year) selection and its update rules

use crate::error::SelectionError;
use crate::level::Level;
use crate::region::is_known_region;
use crate::resolver::Resolver;

/// Selection shared by every view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Selected region name, `None` until the map is clicked
    pub region: Option<String>,

    /// Vertical level for the calcite chart
    pub level: Level,

    /// Slider year. When set, always a year of the region's temperature series.
    pub year: Option<i32>,
}

impl SelectionState {
    /// Select a region. The year resets to the region's first year and the
    /// level is kept.
    pub fn select_region(&mut self, name: &str, resolver: &Resolver) -> Result<(), SelectionError> {
        if !is_known_region(name) {
            return Err(SelectionError::UnknownRegion { name: name.to_string() });
        }

        self.region = Some(name.to_string());
        self.year = resolver.year_range(name).map(|(first, _)| first);
        Ok(())
    }

    /// Select a level. With a region selected, the year is kept if the new
    /// level's calcite series has it, otherwise it falls back to the first
    /// calcite year (snapped onto the temperature series).
    pub fn select_level(&mut self, level: u32, resolver: &Resolver) -> Result<(), SelectionError> {
        let level = Level::new(level)?;
        self.level = level;

        let (Some(region), Some(year)) = (self.region.as_deref(), self.year) else {
            return Ok(());
        };

        let series = resolver.calcite_series(region, level);
        if series.is_empty() || series.iter().any(|p| p.year == year) {
            return Ok(());
        }

        if let Some(fallback) = resolver.clamp_year(region, series[0].year) {
            self.year = Some(fallback);
        }
        Ok(())
    }

    /// Move the slider. The year is clamped into the region's range.
    pub fn select_year(&mut self, year: i32, resolver: &Resolver) -> Result<(), SelectionError> {
        let region = self.region.as_deref().ok_or(SelectionError::NoRegionSelected)?;
        if let Some(clamped) = resolver.clamp_year(region, year) {
            self.year = Some(clamped);
        }
        Ok(())
    }

    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }
}
