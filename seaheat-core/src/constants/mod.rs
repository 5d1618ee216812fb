//! Constants for SeaHeat Core
//!
//! Every numeric default used by the engine lives here, with the source of
//! the value next to it. Callers override them through [`ThresholdPolicy`],
//! [`RiskWeights`] and [`PlausibleRange`]; these constants only seed the
//! `Default` impls.
//!
//! ## Organization
//!
//! - **Policy**: published alert thresholds and HRI weights
//! - **Physics**: plausible sea-surface temperature bounds for the region
//!
//! [`ThresholdPolicy`]: crate::policy::ThresholdPolicy
//! [`RiskWeights`]: crate::policy::RiskWeights
//! [`PlausibleRange`]: crate::policy::PlausibleRange

/// Published alert-policy thresholds and reference HRI weights.
pub mod policy;

/// Physical bounds for daily regional SST.
pub mod physics;

pub use policy::{
    EXCEEDANCE_THRESHOLD_C, SEVERE_THRESHOLD_C, PERSISTENCE_THRESHOLD_DAYS,
    HRI_TRIGGER_THRESHOLD, WEIGHT_EXCEEDANCE, WEIGHT_PERSISTENCE, WEIGHT_VARIABILITY,
};

pub use physics::{SST_PLAUSIBLE_MIN_C, SST_PLAUSIBLE_MAX_C};
