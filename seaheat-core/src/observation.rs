//! Daily observation input type

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One representative SST value for the region on one calendar day
///
/// Produced by the spatial-averaging collaborator. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyObservation {
    /// Calendar day
    pub date: NaiveDate,
    /// ROI-mean sea-surface temperature in °C
    pub temperature: f64,
}

impl DailyObservation {
    /// Create an observation
    pub const fn new(date: NaiveDate, temperature: f64) -> Self {
        Self { date, temperature }
    }
}

impl From<(NaiveDate, f64)> for DailyObservation {
    fn from((date, temperature): (NaiveDate, f64)) -> Self {
        Self::new(date, temperature)
    }
}
