//! Derived-value lookups over the immutable datasets
//!
//! Every lookup is total: a missing (region, year) or (region, level, year)
//! combination is a `None`, never an error. Duplicate keys resolve to the
//! first matching row.

use std::sync::Arc;

use crate::dataset::Datasets;
use crate::level::Level;

/// One (year, value) sample of a filtered series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// Years used for the "change since" annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationConfig {
    pub baseline_year: i32,
    pub final_year: i32,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            baseline_year: 1850,
            final_year: 2014,
        }
    }
}

/// Summary statistics shown under the temperature chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureAnnotation {
    pub baseline_year: i32,
    pub delta: Option<f64>,
    pub peak: SeriesPoint,
}

/// Summary statistics shown under the calcite chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalciteAnnotation {
    pub baseline_year: i32,
    pub level: Level,
    pub delta: Option<f64>,
    pub low: SeriesPoint,
}

/// Reduce `series` to a single element. `keep(a, b)` returns true when the
/// running candidate `a` should be kept over `b`.
pub fn extremum<T>(series: &[T], mut keep: impl FnMut(&T, &T) -> bool) -> Option<&T> {
    let mut iter = series.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, next| if keep(best, next) { best } else { next }))
}

/// Stateless lookup layer shared by every view
#[derive(Debug, Clone)]
pub struct Resolver {
    datasets: Arc<Datasets>,
    annotation: AnnotationConfig,
}

impl Resolver {
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self {
            datasets,
            annotation: AnnotationConfig::default(),
        }
    }

    pub fn with_annotation_config(mut self, annotation: AnnotationConfig) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn annotation_config(&self) -> AnnotationConfig {
        self.annotation
    }

    pub fn temperature_at(&self, region: &str, year: i32) -> Option<f64> {
        self.datasets.temperature.iter()
            .find(|r| r.region == region && r.year == year)
            .map(|r| r.temperature_k)
    }

    pub fn calcite_at(&self, region: &str, level: Level, year: i32) -> Option<f64> {
        self.datasets.calcite.iter()
            .find(|r| r.region == region && r.level == level.value() && r.year == year)
            .map(|r| r.calcite)
    }

    /// `value(year_b) - value(year_a)`: temperature when `level` is `None`,
    /// calcite at `level` otherwise
    pub fn delta_since(&self, region: &str, level: Option<Level>, year_a: i32, year_b: i32) -> Option<f64> {
        let value_at = |year| match level {
            None => self.temperature_at(region, year),
            Some(level) => self.calcite_at(region, level, year),
        };
        Some(value_at(year_b)? - value_at(year_a)?)
    }

    /// Temperature series of a region in file order
    pub fn temperature_series(&self, region: &str) -> Vec<SeriesPoint> {
        self.datasets.temperature.iter()
            .filter(|r| r.region == region)
            .map(|r| SeriesPoint { year: r.year, value: r.temperature_k })
            .collect()
    }

    /// Calcite series of a region at one level, sorted by year
    pub fn calcite_series(&self, region: &str, level: Level) -> Vec<SeriesPoint> {
        let mut series: Vec<SeriesPoint> = self.datasets.calcite.iter()
            .filter(|r| r.region == region && r.level == level.value())
            .map(|r| SeriesPoint { year: r.year, value: r.calcite })
            .collect();
        series.sort_by_key(|p| p.year);
        series
    }

    /// Whether any calcite rows exist for the region at this level
    pub fn has_calcite(&self, region: &str, level: Level) -> bool {
        self.datasets.calcite.iter()
            .any(|r| r.region == region && r.level == level.value())
    }

    /// (min, max) temperature year of a region
    pub fn year_range(&self, region: &str) -> Option<(i32, i32)> {
        let mut years = self.datasets.temperature.iter()
            .filter(|r| r.region == region)
            .map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Clamp `year` into the region's year range, then snap to the nearest
    /// year that has a temperature row (earlier year on ties)
    pub fn clamp_year(&self, region: &str, year: i32) -> Option<i32> {
        let (lo, hi) = self.year_range(region)?;
        let clamped = year.clamp(lo, hi);
        self.datasets.temperature.iter()
            .filter(|r| r.region == region)
            .map(|r| r.year)
            .min_by_key(|&y| ((y - clamped).abs(), y))
    }

    pub fn temperature_annotation(&self, region: &str) -> Option<TemperatureAnnotation> {
        let series = self.temperature_series(region);
        let peak = *extremum(&series, |a, b| a.value > b.value)?;
        Some(TemperatureAnnotation {
            baseline_year: self.annotation.baseline_year,
            delta: self.delta_since(region, None, self.annotation.baseline_year, self.annotation.final_year),
            peak,
        })
    }

    pub fn calcite_annotation(&self, region: &str, level: Level) -> Option<CalciteAnnotation> {
        let series = self.calcite_series(region, level);
        let low = *extremum(&series, |a, b| a.value < b.value)?;
        Some(CalciteAnnotation {
            baseline_year: self.annotation.baseline_year,
            level,
            delta: self.delta_since(region, Some(level), self.annotation.baseline_year, self.annotation.final_year),
            low,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::dataset::{CalciteRecord, TemperatureRecord};

    fn temp(region: &str, year: i32, value: f64) -> TemperatureRecord {
        TemperatureRecord { region: region.to_string(), year, temperature_k: value }
    }

    fn calc(region: &str, level: u32, year: i32, value: f64) -> CalciteRecord {
        CalciteRecord { region: region.to_string(), level, year, calcite: value }
    }

    fn resolver() -> Resolver {
        let datasets = Datasets::new(
            Vec::new(),
            vec![
                temp("Atlantic", 1850, 18.00),
                temp("Atlantic", 1851, 18.10),
                temp("Atlantic", 2014, 18.64),
                temp("Atlantic", 1851, 99.0),
                temp("Pacific", 1850, 20.0),
            ],
            vec![
                calc("Atlantic", 500, 2014, 1.5e-3),
                calc("Atlantic", 500, 1850, 2.0e-3),
                calc("Atlantic", 500, 1900, 1.2e-3),
                calc("Atlantic", 1500, 1850, 4.0e-4),
            ],
        );
        Resolver::new(Arc::new(datasets))
    }

    #[test]
    fn test_temperature_lookup() {
        let r = resolver();
        assert_eq!(r.temperature_at("Atlantic", 1850), Some(18.00));
        assert_eq!(r.temperature_at("Atlantic", 1900), None);
        assert_eq!(r.temperature_at("Indian", 1850), None);
    }

    #[test]
    fn test_duplicate_key_first_match_wins() {
        assert_eq!(resolver().temperature_at("Atlantic", 1851), Some(18.10));
    }

    #[test]
    fn test_calcite_lookup_missing_is_none() {
        let r = resolver();
        let level = Level::new(1500).unwrap();
        assert_eq!(r.calcite_at("Atlantic", level, 1850), Some(4.0e-4));
        assert_eq!(r.calcite_at("Atlantic", level, 2014), None);
        assert_eq!(r.calcite_at("Atlantic", Level::new(14500).unwrap(), 1850), None);
    }

    #[test]
    fn test_delta_since() {
        let r = resolver();
        assert_abs_diff_eq!(r.delta_since("Atlantic", None, 1850, 2014).unwrap(), 0.64, epsilon = 1e-9);
        assert_abs_diff_eq!(
            r.delta_since("Atlantic", Some(Level::DEFAULT), 1850, 2014).unwrap(),
            -5.0e-4,
            epsilon = 1e-12
        );
        assert_eq!(r.delta_since("Pacific", None, 1850, 2014), None);
    }

    #[test]
    fn test_extremum() {
        let values = [3, 7, 1, 7];
        assert_eq!(extremum(&values, |a, b| a > b), Some(&7));
        assert_eq!(extremum(&values, |a, b| a < b), Some(&1));
        let empty: [i32; 0] = [];
        assert_eq!(extremum(&empty, |a, b| a > b), None);
    }

    #[test]
    fn test_calcite_series_sorted_by_year() {
        let years: Vec<i32> = resolver()
            .calcite_series("Atlantic", Level::DEFAULT)
            .iter()
            .map(|p| p.year)
            .collect();
        assert_eq!(years, vec![1850, 1900, 2014]);
    }

    #[test]
    fn test_year_range_and_clamp() {
        let r = resolver();
        assert_eq!(r.year_range("Atlantic"), Some((1850, 2014)));
        assert_eq!(r.year_range("Arctic"), None);
        assert_eq!(r.clamp_year("Atlantic", 1700), Some(1850));
        assert_eq!(r.clamp_year("Atlantic", 3000), Some(2014));
        // 1900 has no row: nearest present year is 1851
        assert_eq!(r.clamp_year("Atlantic", 1900), Some(1851));
    }

    #[test]
    fn test_annotations() {
        let r = resolver();
        let t = r.temperature_annotation("Atlantic").unwrap();
        assert_eq!(t.peak, SeriesPoint { year: 1851, value: 99.0 });
        assert_abs_diff_eq!(t.delta.unwrap(), 0.64, epsilon = 1e-9);

        let c = r.calcite_annotation("Atlantic", Level::DEFAULT).unwrap();
        assert_eq!(c.low, SeriesPoint { year: 1900, value: 1.2e-3 });
        assert!(r.calcite_annotation("Pacific", Level::DEFAULT).is_none());
    }
}
