//! Alert Policy Thresholds and HRI Weights
//!
//! Values mirror the published high-water-temperature advisory table used for
//! aquaculture heat alerts: a watch starts at 28°C, a warning requires the
//! 28°C condition to hold for 72 hours, and 30°C sustained is the lethal band
//! for farmed fish.

// ===== ALERT THRESHOLDS =====

/// Daily SST at or above which a day counts as "hot" (°C).
///
/// Also the base of the exceedance indicator: `max(0, T - 28.0)`.
pub const EXCEEDANCE_THRESHOLD_C: f64 = 28.0;

/// Daily SST at or above which a persistent event is SEVERE rather than WARNING (°C).
pub const SEVERE_THRESHOLD_C: f64 = 30.0;

/// Consecutive hot days required before WARNING/SEVERE can be issued.
///
/// Three daily values = the 72-hour persistence clause of the advisory.
pub const PERSISTENCE_THRESHOLD_DAYS: u32 = 3;

/// HRI value at or above which a day is flagged as an HRI trigger day.
///
/// Policy-tunable. Independent from the alert levels: it marks days whose
/// continuous score alone would fire a parametric payout.
pub const HRI_TRIGGER_THRESHOLD: f64 = 3.0;

// ===== HRI WEIGHTS =====

/// Weight on the exceedance term (w1, °C⁻¹ · HRI).
pub const WEIGHT_EXCEEDANCE: f64 = 1.0;

/// Weight on the `ln(1 + D_con)` persistence term (w2).
pub const WEIGHT_PERSISTENCE: f64 = 1.0;

/// Penalty weight on day-to-day variability (w3).
///
/// Erratic readings are less convincing evidence of sustained heat, so the
/// variability term is subtracted.
pub const WEIGHT_VARIABILITY: f64 = 0.3;
