//! Trigger events on alert-level transitions
//!
//! A trigger event marks a day whose alert level differs from the day before.
//! It carries both levels, whether the change is an escalation or a
//! de-escalation, and the HRI on the day of the change.
//!
//! ## The day before day 1
//!
//! The published policy does not say what level is in force before the first
//! observation. [`InitialLevel`] makes the choice explicit:
//!
//! - `Assume(NORMAL)` (default): a series that opens at WATCH or above emits a
//!   day-1 escalation from NORMAL.
//! - `Suppress`: day 1 never emits; the first event can only be a change
//!   between two observed days.
//!
//! ## Laziness
//!
//! [`TriggerEventEmitter::emit`] returns an iterator that walks the records on
//! demand. It is `Clone`, and running it twice over the same records yields
//! the same events.

use core::fmt;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{alert::AlertLevel, record::DailyRecord, stage::Stage};

/// Direction of a level change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// New level is more severe
    Escalation,
    /// New level is less severe
    DeEscalation,
}

impl Direction {
    /// Direction from `previous` to `new`, `None` if they are equal
    pub fn between(previous: AlertLevel, new: AlertLevel) -> Option<Self> {
        match new.cmp(&previous) {
            core::cmp::Ordering::Greater => Some(Direction::Escalation),
            core::cmp::Ordering::Less => Some(Direction::DeEscalation),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Label used in exported records
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::Escalation => "escalation",
            Direction::DeEscalation => "de-escalation",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change of alert level between two consecutive days
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriggerEvent {
    /// Day the new level took effect
    pub date: NaiveDate,
    /// Level on the previous day (or the assumed prior level on day 1)
    pub previous_level: AlertLevel,
    /// Level on `date`
    pub new_level: AlertLevel,
    /// Escalation or de-escalation
    pub direction: Direction,
    /// HRI on `date`
    pub hri: f64,
}

/// Level assumed in force before the first observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialLevel {
    /// Compare day 1 against this level
    Assume(AlertLevel),
    /// Never emit on day 1
    Suppress,
}

impl Default for InitialLevel {
    fn default() -> Self {
        InitialLevel::Assume(AlertLevel::Normal)
    }
}

/// Single-step transition detector
///
/// Carries the previous day's level. Used directly by the incremental
/// engine session, and wrapped by [`TriggerEvents`] for whole series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTracker {
    initial: InitialLevel,
    previous_level: Option<AlertLevel>,
}

impl TransitionTracker {
    /// Tracker positioned before the first day
    pub fn new(initial: InitialLevel) -> Self {
        let previous_level = match initial {
            InitialLevel::Assume(level) => Some(level),
            InitialLevel::Suppress => None,
        };
        Self { initial, previous_level }
    }

    /// Level of the last day seen, or the assumed prior level
    pub fn previous_level(&self) -> Option<AlertLevel> {
        self.previous_level
    }

    /// Record one day's level, returning an event if it changed
    pub fn observe(&mut self, date: NaiveDate, level: AlertLevel, hri: f64) -> Option<TriggerEvent> {
        let previous = self.previous_level.replace(level)?;
        let direction = Direction::between(previous, level)?;

        Some(TriggerEvent {
            date,
            previous_level: previous,
            new_level: level,
            direction,
            hri,
        })
    }
}

impl Stage for TransitionTracker {
    type Input = DailyRecord;
    type Output = Option<TriggerEvent>;

    fn step(&mut self, input: DailyRecord) -> Option<TriggerEvent> {
        self.observe(input.date, input.alert_level, input.hri)
    }

    fn reset(&mut self) {
        *self = Self::new(self.initial);
    }

    fn name(&self) -> &'static str {
        "TransitionTracker"
    }
}

/// Scans classified records for level transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerEventEmitter {
    initial: InitialLevel,
}

impl TriggerEventEmitter {
    /// Emitter with an explicit prior-level policy
    pub fn new(initial: InitialLevel) -> Self {
        Self { initial }
    }

    /// Prior-level policy in effect
    pub fn initial_level(&self) -> InitialLevel {
        self.initial
    }

    /// Lazy sequence of events over `records`
    pub fn emit<'a>(&self, records: &'a [DailyRecord]) -> TriggerEvents<'a> {
        TriggerEvents {
            records,
            position: 0,
            tracker: TransitionTracker::new(self.initial),
        }
    }
}

/// Iterator over the trigger events of a record slice
#[derive(Debug, Clone)]
pub struct TriggerEvents<'a> {
    records: &'a [DailyRecord],
    position: usize,
    tracker: TransitionTracker,
}

impl<'a> Iterator for TriggerEvents<'a> {
    type Item = TriggerEvent;

    fn next(&mut self) -> Option<TriggerEvent> {
        while let Some(record) = self.records.get(self.position) {
            self.position += 1;
            if let Some(event) = self.tracker.step(*record) {
                return Some(event);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len() - self.position))
    }
}

impl core::iter::FusedIterator for TriggerEvents<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn records(levels: &[AlertLevel]) -> Vec<DailyRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        levels
            .iter()
            .zip(start.iter_days())
            .enumerate()
            .map(|(i, (level, date))| DailyRecord {
                date,
                temperature: 28.0,
                exceedance: 0.0,
                consecutive_hot_days: 0,
                variability: 0.0,
                hri: i as f64,
                alert_level: *level,
                hri_triggered: false,
            })
            .collect()
    }

    use AlertLevel::*;

    #[test]
    fn direction_follows_severity() {
        assert_eq!(Direction::between(Normal, Watch), Some(Direction::Escalation));
        assert_eq!(Direction::between(Severe, Warning), Some(Direction::DeEscalation));
        assert_eq!(Direction::between(Watch, Watch), None);
    }

    #[test]
    fn emits_only_on_changes() {
        let recs = records(&[Normal, Watch, Watch, Severe, Normal]);
        let events: Vec<_> = TriggerEventEmitter::default().emit(&recs).collect();

        assert_eq!(events.len(), 3);
        assert_eq!((events[0].previous_level, events[0].new_level), (Normal, Watch));
        assert_eq!((events[1].previous_level, events[1].new_level), (Watch, Severe));
        assert_eq!(events[2].direction, Direction::DeEscalation);
        assert_eq!(events[1].hri, 3.0);
        assert_eq!(events[1].date, recs[3].date);
    }

    #[test]
    fn assumed_normal_emits_on_first_hot_day() {
        let recs = records(&[Watch, Watch]);
        let events: Vec<_> = TriggerEventEmitter::default().emit(&recs).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, recs[0].date);
        assert_eq!(events[0].previous_level, Normal);
    }

    #[test]
    fn assumed_normal_is_silent_on_normal_first_day() {
        let recs = records(&[Normal, Normal]);
        assert_eq!(TriggerEventEmitter::default().emit(&recs).count(), 0);
    }

    #[test]
    fn suppressed_first_day_never_emits() {
        let recs = records(&[Severe, Severe, Warning]);
        let events: Vec<_> = TriggerEventEmitter::new(InitialLevel::Suppress).emit(&recs).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, recs[2].date);
    }

    #[test]
    fn custom_assumed_level() {
        let recs = records(&[Warning]);
        let emitter = TriggerEventEmitter::new(InitialLevel::Assume(Severe));
        let events: Vec<_> = emitter.emit(&recs).collect();
        assert_eq!(events[0].direction, Direction::DeEscalation);
    }

    #[test]
    fn iterator_is_restartable() {
        let recs = records(&[Normal, Watch, Warning, Watch]);
        let iter = TriggerEventEmitter::default().emit(&recs);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn tracker_reset_restores_assumption() {
        let recs = records(&[Watch]);
        let mut tracker = TransitionTracker::new(InitialLevel::default());
        assert!(tracker.step(recs[0]).is_some());
        assert!(tracker.step(recs[0]).is_none());
        tracker.reset();
        assert!(tracker.step(recs[0]).is_some());
    }
}
