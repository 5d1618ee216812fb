//! Per-day indicators: exceedance, consecutive hot days, variability
//!
//! This is the only stage with genuine history. Day `t` depends on day `t-1`
//! through two values, kept together in [`IndicatorState`]:
//!
//! | Field                  | Initial | Transition on day t                     |
//! |------------------------|---------|-----------------------------------------|
//! | `previous_temperature` | `None`  | `Some(T_t)`                             |
//! | `run_length`           | `0`     | `run + 1` if `T_t >= 28.0`, else `0`    |
//!
//! A single day below threshold resets the run completely. There is no grace
//! window: the policy says "persists for 72 hours", read literally.
//!
//! The state is an explicit value, not a global, so two regions can be
//! processed side by side as long as each owns its own state.

use alloc::vec::Vec;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    observation::DailyObservation,
    policy::ThresholdPolicy,
    stage::Stage,
};

/// Indicators derived for one day
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedIndicators {
    /// Calendar day
    pub date: NaiveDate,
    /// `max(0, T - exceedance_threshold)` in °C
    pub exceedance: f64,
    /// Length of the current run of hot days, including today
    pub consecutive_hot_days: u32,
    /// `|T_t - T_{t-1}|` in °C, 0 on the first day
    pub variability: f64,
}

/// Carried state between two consecutive days
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorState {
    /// Temperature of the previous day, `None` before the first day
    pub previous_temperature: Option<f64>,
    /// Current run of hot days
    pub run_length: u32,
}

impl IndicatorState {
    /// Fresh state for the start of a series
    pub const fn new() -> Self {
        Self {
            previous_temperature: None,
            run_length: 0,
        }
    }

    /// Consume one observation, update the state, return its indicators
    pub fn advance(&mut self, obs: &DailyObservation, policy: &ThresholdPolicy) -> DerivedIndicators {
        let t = obs.temperature;
        debug_assert!(t.is_finite(), "non-finite temperature reached the indicator pass");

        let exceedance = exceedance(t, policy.exceedance_threshold);

        let variability = match self.previous_temperature {
            Some(prev) => libm::fabs(t - prev),
            None => 0.0,
        };

        self.run_length = if policy.is_hot(t) {
            self.run_length.saturating_add(1)
        } else {
            0
        };
        self.previous_temperature = Some(t);

        DerivedIndicators {
            date: obs.date,
            exceedance,
            consecutive_hot_days: self.run_length,
            variability,
        }
    }
}

/// `max(0, temperature - threshold)`
#[inline]
pub fn exceedance(temperature: f64, threshold: f64) -> f64 {
    if temperature > threshold {
        temperature - threshold
    } else {
        0.0
    }
}

/// Indicators for a whole validated series, from a fresh state
pub fn compute_indicators(series: &[DailyObservation], policy: &ThresholdPolicy) -> Vec<DerivedIndicators> {
    let mut state = IndicatorState::new();
    series.iter().map(|obs| state.advance(obs, policy)).collect()
}

/// Single forward pass producing [`DerivedIndicators`] per day
#[derive(Debug, Clone)]
pub struct IndicatorCalculator {
    policy: ThresholdPolicy,
    state: IndicatorState,
}

impl IndicatorCalculator {
    /// Calculator starting from a fresh state
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self {
            policy,
            state: IndicatorState::new(),
        }
    }

    /// Indicators for a whole validated series
    ///
    /// Always starts from a fresh state, whatever this calculator has
    /// already stepped through. Output length equals input length.
    pub fn compute(&self, series: &[DailyObservation]) -> Vec<DerivedIndicators> {
        compute_indicators(series, &self.policy)
    }

    /// Current carried state
    pub fn state(&self) -> IndicatorState {
        self.state
    }
}

impl Stage for IndicatorCalculator {
    type Input = DailyObservation;
    type Output = DerivedIndicators;

    fn step(&mut self, input: DailyObservation) -> DerivedIndicators {
        self.state.advance(&input, &self.policy)
    }

    fn reset(&mut self) {
        self.state = IndicatorState::new();
    }

    fn name(&self) -> &'static str {
        "IndicatorCalculator"
    }
}
