//! Alert level classification
//!
//! ## Policy Table
//!
//! Evaluated top to bottom, first match wins:
//!
//! | # | Level   | Condition                                   |
//! |---|---------|---------------------------------------------|
//! | 1 | SEVERE  | `D_con >= 3` and `T >= 30.0`                |
//! | 2 | WARNING | `D_con >= 3` and `T < 30.0`                 |
//! | 3 | WATCH   | `T >= 28.0` and `D_con < 3`                 |
//! | 4 | NORMAL  | otherwise (`T < 28.0`)                      |
//!
//! The ranked list is kept as data ([`Rule`]s in a fixed-capacity vector)
//! rather than as independent flags, so the tie-break order of the published
//! table is the evaluation order. All threshold comparisons are `>=`.
//!
//! Classification is stateless per day. The history it needs already sits in
//! `consecutive_hot_days`.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::ThresholdPolicy;

/// Number of rows in the policy table
pub const RULE_COUNT: usize = 4;

/// Alert levels, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum AlertLevel {
    /// Below the hot-day threshold
    #[default]
    Normal = 0,
    /// Hot, but not yet persistent
    Watch = 1,
    /// Persistent heat below the severe band
    Warning = 2,
    /// Persistent heat in the severe band
    Severe = 3,
}

impl AlertLevel {
    /// All levels in ascending severity
    pub const ALL: [AlertLevel; 4] = [
        AlertLevel::Normal,
        AlertLevel::Watch,
        AlertLevel::Warning,
        AlertLevel::Severe,
    ];

    /// Policy label, as published
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "NORMAL",
            AlertLevel::Watch => "WATCH",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Severe => "SEVERE",
        }
    }

    /// Severity rank, 0 (NORMAL) to 3 (SEVERE)
    pub const fn severity(&self) -> u8 {
        *self as u8
    }

    /// Parse a policy label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two per-day quantities the policy table looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierInput {
    /// Daily SST in °C
    pub temperature: f64,
    /// Current run of hot days
    pub consecutive_hot_days: u32,
}

/// One row of the policy table
#[derive(Clone, Copy)]
pub struct Rule {
    /// Level issued when the predicate matches
    pub level: AlertLevel,
    /// Human-readable condition
    pub condition: &'static str,
    predicate: fn(&ClassifierInput, &ThresholdPolicy) -> bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("level", &self.level)
            .field("condition", &self.condition)
            .finish()
    }
}

impl Rule {
    /// Does this row match the day?
    #[inline]
    pub fn matches(&self, input: &ClassifierInput, policy: &ThresholdPolicy) -> bool {
        (self.predicate)(input, policy)
    }
}

fn severe(input: &ClassifierInput, policy: &ThresholdPolicy) -> bool {
    policy.is_persistent(input.consecutive_hot_days) && input.temperature >= policy.severe_threshold
}

fn warning(input: &ClassifierInput, policy: &ThresholdPolicy) -> bool {
    policy.is_persistent(input.consecutive_hot_days) && input.temperature < policy.severe_threshold
}

fn watch(input: &ClassifierInput, policy: &ThresholdPolicy) -> bool {
    policy.is_hot(input.temperature) && !policy.is_persistent(input.consecutive_hot_days)
}

fn otherwise(_: &ClassifierInput, _: &ThresholdPolicy) -> bool {
    true
}

/// Ordered decision list over [`ClassifierInput`]
#[derive(Debug, Clone)]
pub struct AlertLevelClassifier {
    policy: ThresholdPolicy,
    rules: Vec<Rule, RULE_COUNT>,
}

impl Default for AlertLevelClassifier {
    fn default() -> Self {
        Self::new(ThresholdPolicy::default())
    }
}

impl AlertLevelClassifier {
    /// Classifier for the given policy
    pub fn new(policy: ThresholdPolicy) -> Self {
        let rules = [
            Rule { level: AlertLevel::Severe, condition: "D_con >= persistence and T >= severe", predicate: severe },
            Rule { level: AlertLevel::Warning, condition: "D_con >= persistence and T < severe", predicate: warning },
            Rule { level: AlertLevel::Watch, condition: "T >= exceedance and D_con < persistence", predicate: watch },
            Rule { level: AlertLevel::Normal, condition: "otherwise", predicate: otherwise },
        ]
        .into_iter()
        .collect();

        Self { policy, rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Level for one day
    pub fn classify(&self, temperature: f64, consecutive_hot_days: u32) -> AlertLevel {
        let input = ClassifierInput { temperature, consecutive_hot_days };
        self.rules
            .iter()
            .find(|rule| rule.matches(&input, &self.policy))
            .map(|rule| rule.level)
            .unwrap_or(AlertLevel::Normal)
    }
}
