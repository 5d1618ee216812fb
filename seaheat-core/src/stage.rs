//! Sequential stage abstraction
//!
//! A stage consumes one day at a time and may carry state from the previous
//! day. The engine drives stages strictly in date order, one input per call.
//!
//! ```text
//! day t ──► [Stage] ──► output t
//!              │
//!            state ──► carried to day t+1
//! ```
//!
//! Stages that need no history ([`RiskIndexComposer`], [`AlertLevelClassifier`])
//! are plain functions; only the components with carried state implement
//! this trait.
//!
//! ## Implementation Guidelines
//!
//! 1. **Own your state**: never share it between two series
//! 2. **No failure path**: inputs are validated before they reach a stage
//! 3. **Reset to construction state**: `reset` must make the stage
//!    indistinguishable from a freshly built one
//!
//! [`RiskIndexComposer`]: crate::risk::RiskIndexComposer
//! [`AlertLevelClassifier`]: crate::alert::AlertLevelClassifier

/// Stateful per-day processing step
pub trait Stage {
    /// Value consumed for one day
    type Input;

    /// Value produced for the same day
    type Output;

    /// Advance by one day
    fn step(&mut self, input: Self::Input) -> Self::Output;

    /// Return to the initial state
    fn reset(&mut self);

    /// Stage name for logs
    fn name(&self) -> &'static str;

    /// Feed a sequence through the stage in order
    ///
    /// Default implementation calls [`Stage::step`] per element.
    fn run<I>(&mut self, inputs: I) -> alloc::vec::Vec<Self::Output>
    where
        I: IntoIterator<Item = Self::Input>,
        Self: Sized,
    {
        inputs.into_iter().map(|input| self.step(input)).collect()
    }
}
