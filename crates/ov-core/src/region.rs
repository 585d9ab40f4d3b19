//! Named ocean regions used for map hit-testing and labels
//!
//! Regions are plain longitude/latitude boxes. The Pacific wraps the
//! antimeridian and is therefore listed twice under one name. Data filtering
//! never looks at these boxes: a region selection matches the `region` field of
//! the datasets exactly.

/// A rectangular region on the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub lon_range: (f64, f64),
    pub lat_range: (f64, f64),
}

/// All region boxes in hit-test priority order
pub const REGIONS: [Region; 6] = [
    Region { name: "Atlantic", lon_range: (-80.0, 20.0), lat_range: (-60.0, 60.0) },
    Region { name: "Pacific", lon_range: (120.0, 180.0), lat_range: (-60.0, 60.0) },
    Region { name: "Pacific", lon_range: (-180.0, -80.0), lat_range: (-60.0, 60.0) },
    Region { name: "Indian", lon_range: (20.0, 120.0), lat_range: (-60.0, 30.0) },
    Region { name: "Arctic", lon_range: (-180.0, 180.0), lat_range: (60.0, 90.0) },
    Region { name: "Southern", lon_range: (-180.0, 180.0), lat_range: (-90.0, -60.0) },
];

impl Region {
    /// Closed-interval containment test
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.lon_range.0 && lon <= self.lon_range.1
            && lat >= self.lat_range.0 && lat <= self.lat_range.1
    }

    /// Center of the box, where the label goes
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lon_range.0 + self.lon_range.1) / 2.0,
            (self.lat_range.0 + self.lat_range.1) / 2.0,
        )
    }

    /// Corner points of the box, counter-clockwise from the south-west corner
    pub fn outline(&self) -> [[f64; 2]; 4] {
        let (w, e) = self.lon_range;
        let (s, n) = self.lat_range;
        [[w, s], [e, s], [e, n], [w, n]]
    }
}

/// Name of the first region whose box contains the point
pub fn hit_test(lon: f64, lat: f64) -> Option<&'static str> {
    REGIONS.iter().find(|r| r.contains(lon, lat)).map(|r| r.name)
}

/// Distinct region names in table order
pub fn region_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::with_capacity(REGIONS.len());
    for region in &REGIONS {
        if !names.contains(&region.name) {
            names.push(region.name);
        }
    }
    names
}

/// Whether `name` is one of the region names
pub fn is_known_region(name: &str) -> bool {
    REGIONS.iter().any(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacific_boxes_share_a_name() {
        assert_eq!(hit_test(150.0, 0.0), Some("Pacific"));
        assert_eq!(hit_test(-150.0, 0.0), Some("Pacific"));
        assert_eq!(region_names(), vec!["Atlantic", "Pacific", "Indian", "Arctic", "Southern"]);
    }

    #[test]
    fn test_hit_test_regions() {
        assert_eq!(hit_test(-30.0, 20.0), Some("Atlantic"));
        assert_eq!(hit_test(70.0, -10.0), Some("Indian"));
        assert_eq!(hit_test(0.0, 75.0), Some("Arctic"));
        assert_eq!(hit_test(0.0, -75.0), Some("Southern"));
    }

    #[test]
    fn test_shared_edge_goes_to_first_box() {
        // lon 20 is both the Atlantic east edge and the Indian west edge
        assert_eq!(hit_test(20.0, 0.0), Some("Atlantic"));
        // lat 60 is both the Atlantic north edge and the Arctic south edge
        assert_eq!(hit_test(0.0, 60.0), Some("Atlantic"));
    }

    #[test]
    fn test_gap_between_boxes_is_a_miss() {
        // Indian box stops at 30N, Arctic starts at 60N
        assert_eq!(hit_test(70.0, 45.0), None);
    }

    #[test]
    fn test_known_regions() {
        assert!(is_known_region("Pacific"));
        assert!(!is_known_region("pacific"));
        assert!(!is_known_region("Mediterranean"));
    }
}
