//! Region and data-source description attached to exported payloads
//!
//! The engine itself is region-agnostic; a [`RegionProfile`] only tells the
//! consumer which ROI-mean series was scored and with which model revision.

use serde::{Deserialize, Serialize};

/// Default region identifier
pub const DEFAULT_REGION_ID: &str = "JEJU_OFFSHORE";

/// Default SST product
pub const DEFAULT_DATASET: &str = "NOAA OISST v2.1 AVHRR daily (0.25deg)";

/// Default model revision string
pub const DEFAULT_MODEL_VERSION: &str = "hri-v1.1-levels";

/// Latitude/longitude box the series was averaged over (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge
    pub lat_min: f64,
    /// Northern edge
    pub lat_max: f64,
    /// Western edge
    pub lon_min: f64,
    /// Eastern edge
    pub lon_max: f64,
}

impl BoundingBox {
    /// Box from edges; inverted pairs are swapped
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        let (lat_min, lat_max) = if lat_min <= lat_max { (lat_min, lat_max) } else { (lat_max, lat_min) };
        let (lon_min, lon_max) = if lon_min <= lon_max { (lon_min, lon_max) } else { (lon_max, lon_min) };
        Self { lat_min, lat_max, lon_min, lon_max }
    }

    /// True if the point lies inside the box, edges included
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

impl Default for BoundingBox {
    /// Offshore Jeju box (32–35°N, 124–129°E)
    fn default() -> Self {
        Self::new(32.0, 35.0, 124.0, 129.0)
    }
}

/// Identity of the region and data source behind an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionProfile {
    /// Region identifier used in alert messages
    pub region_id: String,
    /// Name of the SST product
    pub dataset: String,
    /// Averaging box
    pub roi: BoundingBox,
    /// Model revision reported to consumers
    pub model_version: String,
}

impl RegionProfile {
    /// Profile for a custom region
    pub fn new(region_id: impl Into<String>, roi: BoundingBox) -> Self {
        Self {
            region_id: region_id.into(),
            roi,
            ..Self::default()
        }
    }

    /// Override the dataset name
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    /// Override the model revision
    pub fn with_model_version(mut self, model_version: impl Into<String>) -> Self {
        self.model_version = model_version.into();
        self
    }
}

impl Default for RegionProfile {
    fn default() -> Self {
        Self {
            region_id: DEFAULT_REGION_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            roi: BoundingBox::default(),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_jeju() {
        let profile = RegionProfile::default();
        assert_eq!(profile.region_id, "JEJU_OFFSHORE");
        assert_eq!(profile.roi.lat_min, 32.0);
        assert_eq!(profile.roi.lon_max, 129.0);
        assert!(profile.roi.contains(33.5, 126.5));
        assert!(!profile.roi.contains(36.0, 126.5));
    }

    #[test]
    fn inverted_box_is_swapped() {
        let b = BoundingBox::new(35.0, 32.0, 129.0, 124.0);
        assert_eq!(b, BoundingBox::default());
    }

    #[test]
    fn partial_profile_json_fills_defaults() {
        let profile: RegionProfile = serde_json::from_str(r#"{"region_id": "TONGYEONG"}"#).unwrap();
        assert_eq!(profile.region_id, "TONGYEONG");
        assert_eq!(profile.model_version, DEFAULT_MODEL_VERSION);
    }

    #[test]
    fn builder_overrides() {
        let profile = RegionProfile::new("EAST_SEA", BoundingBox::new(36.0, 38.0, 129.0, 131.0))
            .with_dataset("custom")
            .with_model_version("hri-v2");
        assert_eq!(profile.dataset, "custom");
        assert_eq!(profile.model_version, "hri-v2");
        assert_eq!(profile.roi.lat_max, 38.0);
    }
}
