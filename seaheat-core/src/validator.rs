//! Series validator
//!
//! Rejects any input the indicator pass cannot handle faithfully:
//! - empty series
//! - dates that repeat or go backwards
//! - missing calendar days
//! - temperatures that are NaN, infinite or outside the plausible SST range
//!
//! Validation is pure. On success the input slice is handed back unchanged.

use chrono::NaiveDate;

use crate::{
    errors::{HeatRiskError, HeatRiskResult},
    observation::DailyObservation,
    policy::PlausibleRange,
};

/// Validator for ordered, gap-free daily series
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesValidator {
    range: PlausibleRange,
}

impl SeriesValidator {
    /// Validator with the default plausible SST range
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with custom plausible SST limits
    pub fn with_range(range: PlausibleRange) -> Self {
        Self { range }
    }

    /// Plausible range in effect
    pub fn range(&self) -> PlausibleRange {
        self.range
    }

    /// Validate a whole series, returning it unchanged on success
    pub fn validate<'a>(&self, series: &'a [DailyObservation]) -> HeatRiskResult<&'a [DailyObservation]> {
        if series.is_empty() {
            log_warn!("Series rejected: no observations");
            return Err(HeatRiskError::EmptySeries);
        }

        let mut previous = None;
        for obs in series {
            self.check_next(previous, obs)?;
            previous = Some(obs.date);
        }

        Ok(series)
    }

    /// Validate one observation against the date of the one before it
    ///
    /// `previous` is `None` for the first day of a series. The date relation
    /// is checked before the temperature.
    pub fn check_next(&self, previous: Option<NaiveDate>, obs: &DailyObservation) -> HeatRiskResult<()> {
        if let Some(previous) = previous {
            check_consecutive(previous, obs.date)?;
        }

        if !self.range.contains(obs.temperature) {
            log_warn!(
                "Series rejected: temperature {} on {} outside [{}, {}]",
                obs.temperature, obs.date, self.range.min, self.range.max
            );
            return Err(HeatRiskError::InvalidTemperature {
                date: obs.date,
                value: obs.temperature,
                min: self.range.min,
                max: self.range.max,
            });
        }

        Ok(())
    }
}

/// `current` must be exactly one calendar day after `previous`
fn check_consecutive(previous: NaiveDate, current: NaiveDate) -> HeatRiskResult<()> {
    let days = current.signed_duration_since(previous).num_days();

    if days <= 0 {
        log_warn!("Series rejected: {} does not follow {}", current, previous);
        return Err(HeatRiskError::Order { previous, current });
    }

    if days > 1 {
        log_warn!("Series rejected: {} day(s) missing after {}", days - 1, previous);
        return Err(HeatRiskError::Gap {
            previous,
            current,
            missing_days: days - 1,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
    }

    fn obs(d: u32, t: f64) -> DailyObservation {
        DailyObservation::new(day(d), t)
    }

    #[test]
    fn valid_series_returned_unchanged() {
        let series = [obs(1, 27.0), obs(2, 28.0), obs(3, 29.0)];
        let validated = SeriesValidator::new().validate(&series).unwrap();
        assert_eq!(validated, &series[..]);
    }

    #[test]
    fn empty_series_rejected() {
        assert_eq!(SeriesValidator::new().validate(&[]), Err(HeatRiskError::EmptySeries));
    }

    #[test]
    fn missing_day_is_gap() {
        let series = [obs(1, 27.0), obs(3, 28.0)];
        assert_eq!(
            SeriesValidator::new().validate(&series),
            Err(HeatRiskError::Gap { previous: day(1), current: day(3), missing_days: 1 })
        );
    }

    #[test]
    fn reversed_days_are_order_error() {
        let series = [obs(2, 27.0), obs(1, 28.0)];
        assert_eq!(
            SeriesValidator::new().validate(&series),
            Err(HeatRiskError::Order { previous: day(2), current: day(1) })
        );
    }

    #[test]
    fn duplicate_day_is_order_error() {
        let series = [obs(2, 27.0), obs(2, 27.5)];
        assert!(matches!(
            SeriesValidator::new().validate(&series),
            Err(HeatRiskError::Order { .. })
        ));
    }

    #[test]
    fn nan_and_out_of_range_rejected() {
        let validator = SeriesValidator::new();
        for bad in [f64::NAN, f64::INFINITY, -5.1, 45.1, -999.0] {
            let series = [obs(1, 27.0), obs(2, bad)];
            assert!(
                matches!(validator.validate(&series), Err(HeatRiskError::InvalidTemperature { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let series = [obs(1, -5.0), obs(2, 45.0)];
        assert!(SeriesValidator::new().validate(&series).is_ok());
    }

    #[test]
    fn custom_range_applies() {
        let validator = SeriesValidator::with_range(PlausibleRange::new_with_limits(10.0, 35.0));
        assert!(validator.validate(&[obs(1, 5.0)]).is_err());
        assert!(validator.validate(&[obs(1, 15.0)]).is_ok());
    }

    #[test]
    fn month_boundary_is_consecutive() {
        let series = [
            DailyObservation::new(NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(), 28.0),
            DailyObservation::new(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(), 28.5),
        ];
        assert!(SeriesValidator::new().validate(&series).is_ok());
    }
}
