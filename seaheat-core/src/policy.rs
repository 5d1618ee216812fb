//! Engine configuration: alert thresholds, HRI weights, plausible SST range
//!
//! All three are plain `Copy` values supplied by the caller when the engine is
//! built. The engine keeps its own copy, so a running assessment can never
//! observe a policy change; a new policy means a new engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        EXCEEDANCE_THRESHOLD_C, SEVERE_THRESHOLD_C, PERSISTENCE_THRESHOLD_DAYS,
        HRI_TRIGGER_THRESHOLD, WEIGHT_EXCEEDANCE, WEIGHT_PERSISTENCE, WEIGHT_VARIABILITY,
        SST_PLAUSIBLE_MIN_C, SST_PLAUSIBLE_MAX_C,
    },
    errors::{HeatRiskError, HeatRiskResult},
};

/// Alert thresholds from the published policy table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThresholdPolicy {
    /// Hot-day threshold and exceedance base (°C)
    pub exceedance_threshold: f64,
    /// SEVERE band threshold for persistent events (°C)
    pub severe_threshold: f64,
    /// Hot days in a row before WARNING/SEVERE
    pub persistence_threshold: u32,
    /// HRI at or above which a day is flagged as an HRI trigger day
    pub hri_threshold: f64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            exceedance_threshold: EXCEEDANCE_THRESHOLD_C,
            severe_threshold: SEVERE_THRESHOLD_C,
            persistence_threshold: PERSISTENCE_THRESHOLD_DAYS,
            hri_threshold: HRI_TRIGGER_THRESHOLD,
        }
    }
}

impl ThresholdPolicy {
    /// Policy with custom temperature thresholds and persistence
    ///
    /// The HRI trigger threshold keeps its default.
    pub fn new(
        exceedance_threshold: f64,
        severe_threshold: f64,
        persistence_threshold: u32,
    ) -> HeatRiskResult<Self> {
        let policy = Self {
            exceedance_threshold,
            severe_threshold,
            persistence_threshold,
            ..Self::default()
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Replace the HRI trigger threshold
    pub fn with_hri_threshold(mut self, hri_threshold: f64) -> Self {
        self.hri_threshold = hri_threshold;
        self
    }

    /// Check the policy can classify days consistently
    pub fn validate(&self) -> HeatRiskResult<()> {
        if !self.exceedance_threshold.is_finite() || !self.severe_threshold.is_finite() {
            return Err(HeatRiskError::InvalidPolicy {
                reason: "temperature thresholds must be finite",
            });
        }
        if self.severe_threshold < self.exceedance_threshold {
            return Err(HeatRiskError::InvalidPolicy {
                reason: "severe threshold is below the exceedance threshold",
            });
        }
        if self.persistence_threshold == 0 {
            return Err(HeatRiskError::InvalidPolicy {
                reason: "persistence threshold must be at least one day",
            });
        }
        if !self.hri_threshold.is_finite() || self.hri_threshold < 0.0 {
            return Err(HeatRiskError::InvalidPolicy {
                reason: "HRI threshold must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// True if `temperature` counts as a hot day
    #[inline]
    pub fn is_hot(&self, temperature: f64) -> bool {
        temperature >= self.exceedance_threshold
    }

    /// True if a run of `consecutive_hot_days` satisfies the persistence clause
    #[inline]
    pub fn is_persistent(&self, consecutive_hot_days: u32) -> bool {
        consecutive_hot_days >= self.persistence_threshold
    }
}

/// Weights of the three HRI terms
///
/// `hri = exceedance·e + persistence·ln(1 + D_con) − variability·v`, floored at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RiskWeights {
    /// w1, applied to exceedance above the threshold
    pub exceedance: f64,
    /// w2, applied to `ln(1 + consecutive_hot_days)`
    pub persistence: f64,
    /// w3, subtracted per °C of day-to-day change
    pub variability: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            exceedance: WEIGHT_EXCEEDANCE,
            persistence: WEIGHT_PERSISTENCE,
            variability: WEIGHT_VARIABILITY,
        }
    }
}

impl RiskWeights {
    /// Create validated weights
    pub fn new(exceedance: f64, persistence: f64, variability: f64) -> HeatRiskResult<Self> {
        let weights = Self { exceedance, persistence, variability };
        weights.validate()?;
        Ok(weights)
    }

    /// Weights must be finite and non-negative for the HRI to stay monotone
    pub fn validate(&self) -> HeatRiskResult<()> {
        let all = [self.exceedance, self.persistence, self.variability];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(HeatRiskError::InvalidWeights { reason: "weights must be finite" });
        }
        if all.iter().any(|w| *w < 0.0) {
            return Err(HeatRiskError::InvalidWeights { reason: "weights must be non-negative" });
        }
        Ok(())
    }
}

/// Plausible SST bounds used to reject broken upstream averages
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlausibleRange {
    /// Lowest accepted daily SST (°C)
    pub min: f64,
    /// Highest accepted daily SST (°C)
    pub max: f64,
}

impl Default for PlausibleRange {
    fn default() -> Self {
        Self {
            min: SST_PLAUSIBLE_MIN_C,
            max: SST_PLAUSIBLE_MAX_C,
        }
    }
}

impl PlausibleRange {
    /// Create range with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self { min, max }
    }

    /// True if `value` is a finite number inside the range (inclusive)
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}
