//! Physical Bounds for Regional SST
//!
//! A daily ROI-mean SST outside these bounds is not a heatwave, it is a broken
//! upstream average (land pixels, fill values, unit mix-ups).

/// Lowest plausible daily mean SST for the region (°C).
///
/// Seawater freezes near -1.9°C; the extra margin tolerates coastal
/// brackish cells without letting fill values (-999) through.
pub const SST_PLAUSIBLE_MIN_C: f64 = -5.0;

/// Highest plausible daily mean SST for the region (°C).
///
/// Open-ocean SST has not been observed above ~35°C; 45°C leaves room for
/// shallow-water cells while rejecting Kelvin values (~300).
pub const SST_PLAUSIBLE_MAX_C: f64 = 45.0;
