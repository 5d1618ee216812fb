//! JSON engine configuration
//!
//! Lets a deployment change thresholds and weights without a rebuild.
//! Every section is optional; missing values fall back to the published
//! defaults.
//!
//! ```json
//! {
//!   "policy": { "exceedance_threshold": 28.0, "severe_threshold": 30.0,
//!               "persistence_threshold": 3, "hri_threshold": 3.0 },
//!   "weights": { "exceedance": 1.0, "persistence": 1.0, "variability": 0.3 },
//!   "initial_level": "NORMAL",
//!   "region": { "region_id": "JEJU_OFFSHORE" }
//! }
//! ```
//!
//! `"initial_level": null` suppresses the day-1 trigger event.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use seaheat_core::{
    AlertLevel, HeatRiskEngine, InitialLevel, PlausibleRange, RiskWeights, ThresholdPolicy,
};

use crate::{region::RegionProfile, ExportError, ExportResult};

/// Engine and export settings loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Alert thresholds
    pub policy: ThresholdPolicy,
    /// HRI weights
    pub weights: RiskWeights,
    /// Accepted SST range
    pub plausible_range: PlausibleRange,
    /// Level assumed before day 1, `None` to suppress the day-1 event
    pub initial_level: Option<AlertLevel>,
    /// Region metadata for exported payloads
    pub region: RegionProfile,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: ThresholdPolicy::default(),
            weights: RiskWeights::default(),
            plausible_range: PlausibleRange::default(),
            initial_level: Some(AlertLevel::Normal),
            region: RegionProfile::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> ExportResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.plausible_range.min > config.plausible_range.max {
            return Err(ExportError::Config(format!(
                "plausible_range min {} exceeds max {}",
                config.plausible_range.min, config.plausible_range.max
            )));
        }
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ExportResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded engine config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Initial-level setting in engine terms
    pub fn initial(&self) -> InitialLevel {
        match self.initial_level {
            Some(level) => InitialLevel::Assume(level),
            None => InitialLevel::Suppress,
        }
    }

    /// Build an engine, validating policy and weights
    pub fn build_engine(&self) -> ExportResult<HeatRiskEngine> {
        let engine = HeatRiskEngine::builder()
            .policy(self.policy)
            .weights(self.weights)
            .plausible_range(self.plausible_range)
            .initial_level(self.initial())
            .build()?;
        Ok(engine)
    }
}
