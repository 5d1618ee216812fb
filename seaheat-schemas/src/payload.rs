//! Final alert payload
//!
//! One JSON document per assessment for the downstream alerting system. It
//! describes the first day whose HRI reached the trigger threshold, or says
//! that no day did. Consumers key on `decision.triggered`; a payload is
//! always written so the integration never has to handle a missing file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use seaheat_core::{AlertLevel, Assessment, DailyRecord, RiskWeights, ThresholdPolicy};

use crate::{region::{BoundingBox, RegionProfile}, ExportResult};

/// Event type tag of every payload
pub const EVENT_TYPE: &str = "HRI_TRIGGER";

/// Indicator values on the trigger day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Daily SST (°C)
    #[serde(rename = "T_t")]
    pub temperature: f64,
    /// Consecutive hot days
    #[serde(rename = "D_con")]
    pub consecutive_hot_days: u32,
    /// Day-to-day variability (°C)
    #[serde(rename = "V_var")]
    pub variability: f64,
    /// Heat Risk Index
    #[serde(rename = "HRI")]
    pub hri: f64,
}

/// Thresholds in force for the assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// HRI trigger threshold
    #[serde(rename = "HRI")]
    pub hri: f64,
    /// Hot-day / exceedance base (°C)
    #[serde(rename = "T_base")]
    pub t_base: f64,
    /// SEVERE band threshold (°C)
    pub severe_temp: f64,
    /// Days of persistence for WARNING/SEVERE
    pub warning_duration_days: u32,
}

impl From<&ThresholdPolicy> for Thresholds {
    fn from(policy: &ThresholdPolicy) -> Self {
        Self {
            hri: policy.hri_threshold,
            t_base: policy.exceedance_threshold,
            severe_temp: policy.severe_threshold,
            warning_duration_days: policy.persistence_threshold,
        }
    }
}

/// HRI weights in force for the assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightsInfo {
    /// Exceedance weight
    #[serde(rename = "alpha")]
    pub exceedance: f64,
    /// Persistence weight
    #[serde(rename = "beta")]
    pub persistence: f64,
    /// Variability penalty weight
    #[serde(rename = "gamma")]
    pub variability: f64,
}

impl From<&RiskWeights> for WeightsInfo {
    fn from(w: &RiskWeights) -> Self {
        Self {
            exceedance: w.exceedance,
            persistence: w.persistence,
            variability: w.variability,
        }
    }
}

/// Data provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// SST product name
    pub dataset: String,
    /// Averaging box
    pub roi: BoundingBox,
    /// Model revision
    pub model_version: String,
}

/// Outcome of the assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// True if any day reached the HRI threshold
    pub triggered: bool,
    /// Alert level on the trigger day, NORMAL otherwise
    pub level: AlertLevel,
}

/// The single alert document handed to the alerting system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Always [`EVENT_TYPE`]
    pub event_type: String,
    /// Region identifier
    pub region: String,
    /// Trigger day, `null` when nothing triggered
    pub date: Option<NaiveDate>,
    /// Indicator values on the trigger day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    /// Thresholds in force
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Thresholds>,
    /// Weights in force
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightsInfo>,
    /// Data provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
    /// Outcome
    pub decision: Decision,
    /// Human-readable summary line
    pub message: String,
}

impl AlertPayload {
    /// Payload for the first HRI trigger day of `assessment`, if any
    pub fn from_assessment(assessment: &Assessment, region: &RegionProfile) -> Self {
        let first = assessment.hri_triggered_days().next();
        match first {
            Some(record) => Self::triggered(record, assessment.policy(), assessment.weights(), region),
            None => {
                let records = assessment.records();
                let period = records.first().zip(records.last()).map(|(a, b)| (a.date, b.date));
                Self::not_triggered(region, period)
            }
        }
    }

    /// Payload for a trigger day
    pub fn triggered(
        record: &DailyRecord,
        policy: &ThresholdPolicy,
        weights: &RiskWeights,
        region: &RegionProfile,
    ) -> Self {
        let message = format!(
            "[{}] {} - HRI trigger on {} (HRI≥{:.1})",
            region.region_id,
            record.alert_level,
            record.date.format("%Y-%m-%d"),
            policy.hri_threshold,
        );

        Self {
            event_type: EVENT_TYPE.to_string(),
            region: region.region_id.clone(),
            date: Some(record.date),
            metrics: Some(Metrics {
                temperature: record.temperature,
                consecutive_hot_days: record.consecutive_hot_days,
                variability: record.variability,
                hri: record.hri,
            }),
            threshold: Some(Thresholds::from(policy)),
            weights: Some(WeightsInfo::from(weights)),
            source: Some(SourceInfo {
                dataset: region.dataset.clone(),
                roi: region.roi,
                model_version: region.model_version.clone(),
            }),
            decision: Decision {
                triggered: true,
                level: record.alert_level,
            },
            message,
        }
    }

    /// Payload stating that no day in `period` reached the threshold
    pub fn not_triggered(region: &RegionProfile, period: Option<(NaiveDate, NaiveDate)>) -> Self {
        let message = match period {
            Some((start, end)) => format!(
                "[{}] No trigger in {} ~ {}. Adjust threshold if needed.",
                region.region_id, start, end
            ),
            None => format!("[{}] No trigger. Adjust threshold if needed.", region.region_id),
        };

        Self {
            event_type: EVENT_TYPE.to_string(),
            region: region.region_id.clone(),
            date: None,
            metrics: None,
            threshold: None,
            weights: None,
            source: None,
            decision: Decision {
                triggered: false,
                level: AlertLevel::Normal,
            },
            message,
        }
    }

    /// True if the payload reports a trigger
    pub fn is_triggered(&self) -> bool {
        self.decision.triggered
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
