//! Heat Risk Index composition
//!
//! ```text
//! hri = w1·exceedance + w2·ln(1 + consecutive_hot_days) − w3·variability,  floored at 0
//! ```
//!
//! Properties held for any non-negative weights:
//! - zero whenever the day is below threshold with no running hot spell
//! - non-decreasing in exceedance and in persistence
//! - reduced by day-to-day variability (erratic readings are weaker evidence
//!   of sustained heat)
//!
//! `ln(1 + D)` gives diminishing returns on long runs: the 3-day persistence
//! clause is a threshold, not an unbounded multiplier.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{indicators::DerivedIndicators, policy::RiskWeights};

/// HRI for one day
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskScore {
    /// Calendar day
    pub date: NaiveDate,
    /// Heat Risk Index, always `>= 0`
    pub hri: f64,
}

/// Per-term contributions, for explaining a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBreakdown {
    /// `w1 · exceedance`
    pub exceedance_term: f64,
    /// `w2 · ln(1 + D_con)`
    pub persistence_term: f64,
    /// `w3 · variability`, subtracted
    pub variability_penalty: f64,
    /// Final clamped score
    pub hri: f64,
}

/// Stateless HRI calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskIndexComposer {
    weights: RiskWeights,
}

impl RiskIndexComposer {
    /// Composer with the given weights
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    /// Weights in effect
    pub fn weights(&self) -> RiskWeights {
        self.weights
    }

    /// Score one day from its indicators
    pub fn compose(&self, indicators: &DerivedIndicators) -> RiskScore {
        RiskScore {
            date: indicators.date,
            hri: self.breakdown(indicators).hri,
        }
    }

    /// Score one day and keep each term
    pub fn breakdown(&self, indicators: &DerivedIndicators) -> RiskBreakdown {
        let w = &self.weights;

        let exceedance_term = w.exceedance * indicators.exceedance;
        let persistence_term = w.persistence * libm::log1p(indicators.consecutive_hot_days as f64);
        let variability_penalty = w.variability * indicators.variability;

        let raw = exceedance_term + persistence_term - variability_penalty;
        let hri = if raw > 0.0 { raw } else { 0.0 };
        debug_assert!(hri.is_finite(), "HRI is not finite for {:?}", indicators);

        RiskBreakdown {
            exceedance_term,
            persistence_term,
            variability_penalty,
            hri,
        }
    }
}
