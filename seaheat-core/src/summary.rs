//! Season-level statistics over an assessment

use crate::{alert::AlertLevel, record::DailyRecord};

/// Summary of one assessed series
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeasonSummary {
    /// Number of days assessed
    pub days: usize,
    /// First day with `hri >= hri_threshold`
    pub first_hri_trigger: Option<DailyRecord>,
    /// Day with the highest HRI (earliest on ties)
    pub peak_hri: Option<DailyRecord>,
    /// Highest alert level reached
    pub highest_level: AlertLevel,
    /// Days spent at each level, indexed by [`AlertLevel::severity`]
    pub days_per_level: [usize; 4],
    /// Longest run of consecutive hot days
    pub longest_hot_run: u32,
    /// Number of HRI trigger days
    pub hri_trigger_days: usize,
    /// Number of level-transition events
    pub trigger_event_count: usize,
}

impl SeasonSummary {
    /// Build from records and the number of transition events
    pub fn from_records(records: &[DailyRecord], trigger_event_count: usize) -> Self {
        let mut summary = Self {
            days: records.len(),
            trigger_event_count,
            ..Self::default()
        };

        for record in records {
            summary.days_per_level[record.alert_level.severity() as usize] += 1;

            if record.alert_level > summary.highest_level {
                summary.highest_level = record.alert_level;
            }
            if record.consecutive_hot_days > summary.longest_hot_run {
                summary.longest_hot_run = record.consecutive_hot_days;
            }
            if record.hri_triggered {
                summary.hri_trigger_days += 1;
                if summary.first_hri_trigger.is_none() {
                    summary.first_hri_trigger = Some(*record);
                }
            }
            match summary.peak_hri {
                Some(peak) if peak.hri >= record.hri => {}
                _ => summary.peak_hri = Some(*record),
            }
        }

        summary
    }

    /// Days spent at `level`
    pub fn days_at(&self, level: AlertLevel) -> usize {
        self.days_per_level[level.severity() as usize]
    }

    /// True if any day crossed the HRI threshold
    pub fn triggered(&self) -> bool {
        self.first_hri_trigger.is_some()
    }
}
