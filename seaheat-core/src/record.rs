//! Per-day output record

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    alert::AlertLevel,
    indicators::DerivedIndicators,
    observation::DailyObservation,
    risk::RiskScore,
};

/// Everything the engine knows about one day
///
/// The union of the observation, its indicators, its HRI and its alert level,
/// in the shape handed to the export collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// Daily SST in °C
    pub temperature: f64,
    /// `max(0, T - exceedance_threshold)` in °C
    pub exceedance: f64,
    /// Current run of hot days
    pub consecutive_hot_days: u32,
    /// Day-to-day change in °C
    pub variability: f64,
    /// Heat Risk Index
    pub hri: f64,
    /// Policy alert level
    pub alert_level: AlertLevel,
    /// `hri >= hri_threshold`
    pub hri_triggered: bool,
}

impl DailyRecord {
    /// Assemble a record from the outputs of each stage
    pub fn assemble(
        obs: &DailyObservation,
        indicators: &DerivedIndicators,
        score: &RiskScore,
        alert_level: AlertLevel,
        hri_threshold: f64,
    ) -> Self {
        debug_assert_eq!(obs.date, indicators.date);
        debug_assert_eq!(obs.date, score.date);

        Self {
            date: obs.date,
            temperature: obs.temperature,
            exceedance: indicators.exceedance,
            consecutive_hot_days: indicators.consecutive_hot_days,
            variability: indicators.variability,
            hri: score.hri,
            alert_level,
            hri_triggered: score.hri >= hri_threshold,
        }
    }

    /// Indicators part of the record
    pub fn indicators(&self) -> DerivedIndicators {
        DerivedIndicators {
            date: self.date,
            exceedance: self.exceedance,
            consecutive_hot_days: self.consecutive_hot_days,
            variability: self.variability,
        }
    }

    /// HRI part of the record
    pub fn risk_score(&self) -> RiskScore {
        RiskScore { date: self.date, hri: self.hri }
    }
}
