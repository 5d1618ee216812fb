//! Heat Risk Index engine for daily sea-surface temperature series
//!
//! Turns a gap-free daily SST series for one coastal region into per-day
//! indicators, a continuous Heat Risk Index (HRI), a discrete alert level
//! and trigger events on level transitions.
//!
//! Data flows strictly forward:
//!
//! ```text
//! observations → SeriesValidator → IndicatorCalculator → RiskIndexComposer
//!              → AlertLevelClassifier → TriggerEventEmitter
//! ```
//!
//! The engine never touches files or grids. It consumes `(date, temperature)`
//! pairs and produces in-memory records; rendering them is the job of
//! `seaheat-schemas`.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use seaheat_core::{DailyObservation, HeatRiskEngine};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
//! let series: Vec<DailyObservation> = [27.5, 28.2, 29.1, 30.4]
//!     .iter()
//!     .zip(start.iter_days())
//!     .map(|(t, d)| DailyObservation::new(d, *t))
//!     .collect();
//!
//! let engine = HeatRiskEngine::default();
//! let assessment = engine.assess(&series)?;
//! for event in assessment.trigger_events() {
//!     println!("{}: {} -> {}", event.date, event.previous_level, event.new_level);
//! }
//! # Ok::<(), seaheat_core::HeatRiskError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod alert;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod indicators;
pub mod observation;
pub mod policy;
pub mod record;
pub mod risk;
pub mod stage;
pub mod summary;
pub mod triggers;
pub mod validator;

// Public API
pub use alert::{AlertLevel, AlertLevelClassifier, ClassifierInput, Rule};
pub use engine::{Assessment, EngineBuilder, EngineSession, HeatRiskEngine};
pub use errors::{HeatRiskError, HeatRiskResult};
pub use indicators::{compute_indicators, DerivedIndicators, IndicatorCalculator, IndicatorState};
pub use observation::DailyObservation;
pub use policy::{PlausibleRange, RiskWeights, ThresholdPolicy};
pub use record::DailyRecord;
pub use risk::{RiskBreakdown, RiskIndexComposer, RiskScore};
pub use stage::Stage;
pub use summary::SeasonSummary;
pub use triggers::{Direction, InitialLevel, TransitionTracker, TriggerEvent, TriggerEventEmitter, TriggerEvents};
pub use validator::SeriesValidator;

/// Crate version, embedded in exported payloads
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
