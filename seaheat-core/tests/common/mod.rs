//! Common test utilities for integration tests
//!
//! This module provides:
//! - Series builders anchored on a calendar day
//! - A synthetic summer season with a realistic marine heatwave
//! - Helpers to pull single columns out of an assessment

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use seaheat_core::{AlertLevel, Assessment, DailyObservation};

/// Start of the synthetic season (matches the 2024 Jeju analysis window)
pub fn season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 20).unwrap()
}

/// Consecutive daily observations starting at `start`
pub fn series_from(start: NaiveDate, temps: &[f64]) -> Vec<DailyObservation> {
    temps
        .iter()
        .enumerate()
        .map(|(i, t)| DailyObservation::new(start + Duration::days(i as i64), *t))
        .collect()
}

/// Consecutive daily observations starting at the season start
pub fn series(temps: &[f64]) -> Vec<DailyObservation> {
    series_from(season_start(), temps)
}

/// Alert levels of an assessment, in order
pub fn levels(assessment: &Assessment) -> Vec<AlertLevel> {
    assessment.alert_levels().collect()
}

/// Hot-day run lengths of an assessment, in order
pub fn runs(assessment: &Assessment) -> Vec<u32> {
    assessment.records().iter().map(|r| r.consecutive_hot_days).collect()
}

/// Synthetic season generator
///
/// Deterministic: a warming ramp, a heatwave plateau and a cool-down, with a
/// small fixed oscillation standing in for day-to-day noise.
pub struct SeasonGenerator {
    base: f64,
    noise: f64,
}

impl SeasonGenerator {
    pub fn new(base: f64, noise: f64) -> Self {
        Self { base, noise }
    }

    /// `ramp` warming days, `plateau` heatwave days at `peak`, `cool` cooling days
    pub fn heatwave(&self, ramp: usize, plateau: usize, peak: f64, cool: usize) -> Vec<f64> {
        let mut temps = Vec::with_capacity(ramp + plateau + cool);
        for i in 0..ramp {
            let f = i as f64 / ramp.max(1) as f64;
            temps.push(self.base + (peak - self.base) * f + self.wobble(i));
        }
        for i in 0..plateau {
            temps.push(peak + self.wobble(ramp + i));
        }
        for i in 0..cool {
            let f = (i + 1) as f64 / cool.max(1) as f64;
            temps.push(peak - (peak - self.base) * f + self.wobble(ramp + plateau + i));
        }
        temps
    }

    fn wobble(&self, i: usize) -> f64 {
        match i % 4 {
            0 => 0.0,
            1 => self.noise,
            2 => 0.0,
            _ => -self.noise,
        }
    }
}

/// 78-day season (Jul 20 – Oct 5) with one sustained heatwave above 30°C
pub fn summer_2024() -> Vec<DailyObservation> {
    let temps = SeasonGenerator::new(26.0, 0.1).heatwave(20, 30, 30.6, 28);
    series(&temps)
}
