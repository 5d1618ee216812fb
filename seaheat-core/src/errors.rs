//! Error Types for Series Validation and Engine Configuration
//!
//! ## Design
//!
//! Every error the engine can return is raised at one of two points:
//!
//! 1. **Construction**: a [`ThresholdPolicy`] or [`RiskWeights`] that cannot
//!    produce a meaningful index is rejected when the engine is built.
//! 2. **Ingestion**: the [`SeriesValidator`] rejects the input series before
//!    any indicator is computed.
//!
//! Indicator, risk, alert and trigger stages are pure functions over
//! validated data and have no error path. A NaN reaching them is a broken
//! contract, caught by `debug_assert!`, not a recoverable condition.
//!
//! Nothing is retried and nothing is repaired. A missing day is never
//! interpolated: persistence counting is gap-sensitive, and a silently
//! skipped day would corrupt `consecutive_hot_days`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use seaheat_core::{HeatRiskEngine, HeatRiskError, DailyObservation};
//!
//! fn run(series: &[DailyObservation]) {
//!     match HeatRiskEngine::default().assess(series) {
//!         Ok(assessment) => {
//!             // hand records to the export collaborator
//!             let _ = assessment.records();
//!         }
//!         Err(HeatRiskError::Gap { previous, current, .. }) => {
//!             // upstream averaging dropped a day - refetch, do not interpolate
//!             let _ = (previous, current);
//!         }
//!         Err(HeatRiskError::InvalidTemperature { date, .. }) => {
//!             // bad ROI mean for `date`
//!             let _ = date;
//!         }
//!         Err(_) => {
//!             // empty or unordered input
//!         }
//!     }
//! }
//! ```
//!
//! [`ThresholdPolicy`]: crate::policy::ThresholdPolicy
//! [`RiskWeights`]: crate::policy::RiskWeights
//! [`SeriesValidator`]: crate::validator::SeriesValidator

use chrono::NaiveDate;
use thiserror_no_std::Error;

/// Result type for engine operations
pub type HeatRiskResult<T> = Result<T, HeatRiskError>;

/// Engine errors - all `Copy`, no heap data
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HeatRiskError {
    /// Input series has no observations
    #[error("Empty series: at least one daily observation is required")]
    EmptySeries,

    /// Dates are not strictly increasing (duplicate or reversed day)
    #[error("Out of order: {current} does not follow {previous}")]
    Order {
        /// Date of the preceding observation
        previous: NaiveDate,
        /// Offending date, equal to or earlier than `previous`
        current: NaiveDate,
    },

    /// One or more calendar days missing between consecutive observations
    #[error("Gap: {missing_days} day(s) missing between {previous} and {current}")]
    Gap {
        /// Date of the preceding observation
        previous: NaiveDate,
        /// Date of the observation after the gap
        current: NaiveDate,
        /// Number of calendar days absent from the series
        missing_days: i64,
    },

    /// Temperature is NaN, infinite or outside the plausible SST range
    #[error("Invalid temperature {value}°C on {date} (plausible range [{min}, {max}])")]
    InvalidTemperature {
        /// Day carrying the bad value
        date: NaiveDate,
        /// The rejected value
        value: f64,
        /// Lower plausible bound in effect
        min: f64,
        /// Upper plausible bound in effect
        max: f64,
    },

    /// Threshold policy cannot be used to classify days
    #[error("Invalid threshold policy: {reason}")]
    InvalidPolicy {
        /// What is wrong with the policy
        reason: &'static str,
    },

    /// Risk weights are negative or non-finite
    #[error("Invalid risk weights: {reason}")]
    InvalidWeights {
        /// What is wrong with the weights
        reason: &'static str,
    },
}

impl HeatRiskError {
    /// True for errors raised while validating an input series
    pub fn is_series_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySeries | Self::Order { .. } | Self::Gap { .. } | Self::InvalidTemperature { .. }
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HeatRiskError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptySeries =>
                defmt::write!(fmt, "Empty series"),
            Self::Order { previous, current } =>
                defmt::write!(fmt, "Out of order: {} after {}",
                    defmt::Display2Format(current), defmt::Display2Format(previous)),
            Self::Gap { previous, current, missing_days } =>
                defmt::write!(fmt, "Gap of {} day(s) between {} and {}", missing_days,
                    defmt::Display2Format(previous), defmt::Display2Format(current)),
            Self::InvalidTemperature { date, value, .. } =>
                defmt::write!(fmt, "Invalid temperature {} on {}", value, defmt::Display2Format(date)),
            Self::InvalidPolicy { reason } =>
                defmt::write!(fmt, "Invalid policy: {}", reason),
            Self::InvalidWeights { reason } =>
                defmt::write!(fmt, "Invalid weights: {}", reason),
        }
    }
}
