//! Heat risk engine: batch assessment and incremental sessions
//!
//! ## Data Flow
//!
//! ```text
//! &[DailyObservation]
//!        │ SeriesValidator        (fails: Empty / Order / Gap / InvalidTemperature)
//!        ▼
//!   compute_indicators            (carried: previous temperature, run length)
//!        ▼
//!   RiskIndexComposer             (stateless)
//!        ▼
//!   AlertLevelClassifier          (stateless)
//!        ▼
//!   Vec<DailyRecord>  ──►  TriggerEventEmitter (lazy)
//! ```
//!
//! Validation happens once, up front. After it succeeds nothing downstream
//! can fail, so an [`Assessment`] always has exactly one record per input day.
//!
//! ## Incremental Use
//!
//! [`EngineSession`] runs the same stages one observation at a time. It owns
//! the whole carried state (`previous date`, [`IndicatorState`], previous alert
//! level) and is the single writer of it. An observation that fails
//! validation is rejected without touching that state. Feeding a series
//! through a session yields exactly the records and events of a batch
//! [`HeatRiskEngine::assess`] over the same series.
//!
//! One engine can serve any number of series; each `assess` call and each
//! session starts from a fresh state.

use alloc::vec::Vec;

use chrono::NaiveDate;

use crate::{
    alert::{AlertLevel, AlertLevelClassifier},
    errors::HeatRiskResult,
    indicators::{compute_indicators, DerivedIndicators, IndicatorState},
    observation::DailyObservation,
    policy::{PlausibleRange, RiskWeights, ThresholdPolicy},
    risk::{RiskIndexComposer, RiskScore},
    summary::SeasonSummary,
    triggers::{InitialLevel, TransitionTracker, TriggerEvent, TriggerEventEmitter, TriggerEvents},
    validator::SeriesValidator,
};

pub use crate::record::DailyRecord;

fn log_transition(event: &TriggerEvent) {
    log_info!(
        "Alert level {} -> {} on {} (HRI {:.3})",
        event.previous_level, event.new_level, event.date, event.hri
    );
    #[cfg(not(feature = "log"))]
    let _ = event;
}

/// Stateless part of the per-day pipeline: HRI and alert level
#[derive(Debug, Clone)]
struct DayScorer {
    composer: RiskIndexComposer,
    classifier: AlertLevelClassifier,
    hri_threshold: f64,
}

impl DayScorer {
    fn new(policy: ThresholdPolicy, weights: RiskWeights) -> Self {
        Self {
            composer: RiskIndexComposer::new(weights),
            classifier: AlertLevelClassifier::new(policy),
            hri_threshold: policy.hri_threshold,
        }
    }

    fn score(&self, obs: &DailyObservation, indicators: &DerivedIndicators) -> DailyRecord {
        let score = self.composer.compose(indicators);
        let level = self.classifier.classify(obs.temperature, indicators.consecutive_hot_days);
        DailyRecord::assemble(obs, indicators, &score, level, self.hri_threshold)
    }
}

/// Heat risk engine for one policy and one set of weights
///
/// Configuration is fixed at construction. Changing the policy means building
/// a new engine.
#[derive(Debug, Clone)]
pub struct HeatRiskEngine {
    policy: ThresholdPolicy,
    weights: RiskWeights,
    validator: SeriesValidator,
    scorer: DayScorer,
    emitter: TriggerEventEmitter,
}

impl Default for HeatRiskEngine {
    /// Published policy, reference weights, NORMAL assumed before day 1
    fn default() -> Self {
        Self::from_parts(
            ThresholdPolicy::default(),
            RiskWeights::default(),
            PlausibleRange::default(),
            InitialLevel::default(),
        )
    }
}

impl HeatRiskEngine {
    /// Engine with a custom policy and weights
    ///
    /// Fails with `InvalidPolicy` / `InvalidWeights` if either cannot produce
    /// a meaningful index.
    pub fn new(policy: ThresholdPolicy, weights: RiskWeights) -> HeatRiskResult<Self> {
        Self::builder().policy(policy).weights(weights).build()
    }

    /// Start building an engine from the published defaults
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn from_parts(
        policy: ThresholdPolicy,
        weights: RiskWeights,
        range: PlausibleRange,
        initial: InitialLevel,
    ) -> Self {
        Self {
            policy,
            weights,
            validator: SeriesValidator::with_range(range),
            scorer: DayScorer::new(policy, weights),
            emitter: TriggerEventEmitter::new(initial),
        }
    }

    /// Threshold policy in effect
    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// HRI weights in effect
    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    /// Prior-level assumption used for trigger emission
    pub fn initial_level(&self) -> InitialLevel {
        self.emitter.initial_level()
    }

    /// Validate and score a whole series
    pub fn assess(&self, series: &[DailyObservation]) -> HeatRiskResult<Assessment> {
        let series = self.validator.validate(series)?;

        let indicators = compute_indicators(series, &self.policy);
        let records: Vec<DailyRecord> = series
            .iter()
            .zip(indicators.iter())
            .map(|(obs, ind)| self.scorer.score(obs, ind))
            .collect();

        debug_assert_eq!(records.len(), series.len());
        log_debug!(
            "Assessed {} day(s) from {} to {}",
            records.len(),
            series[0].date,
            series[series.len() - 1].date
        );

        let assessment = Assessment {
            records,
            policy: self.policy,
            weights: self.weights,
            emitter: self.emitter,
        };
        #[cfg(feature = "log")]
        assessment.trigger_events().for_each(|event| log_transition(&event));

        Ok(assessment)
    }

    /// Open an incremental session starting from a fresh state
    pub fn session(&self) -> EngineSession {
        EngineSession {
            policy: self.policy,
            validator: self.validator,
            scorer: self.scorer.clone(),
            state: IndicatorState::new(),
            tracker: TransitionTracker::new(self.emitter.initial_level()),
            previous_date: None,
            days: 0,
        }
    }
}

/// Fluent construction of a [`HeatRiskEngine`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineBuilder {
    policy: ThresholdPolicy,
    weights: RiskWeights,
    range: PlausibleRange,
    initial: InitialLevel,
}

impl EngineBuilder {
    /// Set the threshold policy
    pub fn policy(mut self, policy: ThresholdPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the HRI weights
    pub fn weights(mut self, weights: RiskWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the plausible SST range used by the validator
    pub fn plausible_range(mut self, range: PlausibleRange) -> Self {
        self.range = range;
        self
    }

    /// Set the level assumed before day 1
    pub fn initial_level(mut self, initial: InitialLevel) -> Self {
        self.initial = initial;
        self
    }

    /// Validate the configuration and build the engine
    pub fn build(self) -> HeatRiskResult<HeatRiskEngine> {
        self.policy.validate()?;
        self.weights.validate()?;
        Ok(HeatRiskEngine::from_parts(self.policy, self.weights, self.range, self.initial))
    }
}

/// Result of assessing one series
#[derive(Debug, Clone)]
pub struct Assessment {
    records: Vec<DailyRecord>,
    policy: ThresholdPolicy,
    weights: RiskWeights,
    emitter: TriggerEventEmitter,
}

impl Assessment {
    /// One record per input day, in date order
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<DailyRecord> {
        self.records
    }

    /// Number of days assessed
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: an assessment covers at least one day
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Policy the assessment was computed with
    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// Weights the assessment was computed with
    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    /// Prior-level assumption used by [`Assessment::trigger_events`]
    pub fn initial_level(&self) -> InitialLevel {
        self.emitter.initial_level()
    }

    /// Lazy trigger events; call again to restart
    pub fn trigger_events(&self) -> TriggerEvents<'_> {
        self.emitter.emit(&self.records)
    }

    /// Per-day indicators
    pub fn indicators(&self) -> impl Iterator<Item = DerivedIndicators> + '_ {
        self.records.iter().map(DailyRecord::indicators)
    }

    /// Per-day HRI
    pub fn risk_scores(&self) -> impl Iterator<Item = RiskScore> + '_ {
        self.records.iter().map(DailyRecord::risk_score)
    }

    /// Per-day alert levels
    pub fn alert_levels(&self) -> impl Iterator<Item = AlertLevel> + '_ {
        self.records.iter().map(|r| r.alert_level)
    }

    /// Days flagged by the HRI threshold
    pub fn hri_triggered_days(&self) -> impl Iterator<Item = &DailyRecord> + '_ {
        self.records.iter().filter(|r| r.hri_triggered)
    }

    /// Record for a given date
    pub fn record_for(&self, date: NaiveDate) -> Option<&DailyRecord> {
        let first = self.records.first()?.date;
        let offset = usize::try_from(date.signed_duration_since(first).num_days()).ok()?;
        self.records.get(offset)
    }

    /// Season-level summary
    pub fn summary(&self) -> SeasonSummary {
        SeasonSummary::from_records(&self.records, self.trigger_events().count())
    }
}

/// Incremental, one-observation-at-a-time engine state
///
/// Holds the complete carried state for one region. Never share a session
/// between two series.
#[derive(Debug, Clone)]
pub struct EngineSession {
    policy: ThresholdPolicy,
    validator: SeriesValidator,
    scorer: DayScorer,
    state: IndicatorState,
    tracker: TransitionTracker,
    previous_date: Option<NaiveDate>,
    days: usize,
}

impl EngineSession {
    /// Validate and score the next day
    ///
    /// On error the session is unchanged and the next observation is still
    /// expected to follow the last accepted day.
    pub fn ingest(&mut self, obs: DailyObservation) -> HeatRiskResult<(DailyRecord, Option<TriggerEvent>)> {
        self.validator.check_next(self.previous_date, &obs)?;

        let indicators = self.state.advance(&obs, &self.policy);
        let record = self.scorer.score(&obs, &indicators);
        let event = self.tracker.observe(record.date, record.alert_level, record.hri);
        if let Some(event) = &event {
            log_transition(event);
        }

        self.previous_date = Some(obs.date);
        self.days += 1;

        Ok((record, event))
    }

    /// Date of the last accepted observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.previous_date
    }

    /// Carried indicator state
    pub fn indicator_state(&self) -> IndicatorState {
        self.state
    }

    /// Level of the last accepted day (or the assumed prior level)
    pub fn current_level(&self) -> Option<AlertLevel> {
        self.tracker.previous_level()
    }

    /// Number of accepted observations
    pub fn days_ingested(&self) -> usize {
        self.days
    }
}
