//! Transition logging
//!
//! Each level change is logged once per `assess` call and once per session
//! ingest, however often the trigger events are walked afterwards. Kept in
//! its own test binary because the global logger can be installed only once.

#![cfg(feature = "log")]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};
use seaheat_core::HeatRiskEngine;

use common::series;

static TRANSITIONS: AtomicUsize = AtomicUsize::new(0);

struct TransitionCounter;

impl Log for TransitionCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Info && record.args().to_string().starts_with("Alert level") {
            TRANSITIONS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: TransitionCounter = TransitionCounter;

#[test]
fn transitions_logged_once_per_run() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    // NORMAL -> WATCH -> NORMAL
    let input = series(&[27.0, 28.5, 27.0]);
    let engine = HeatRiskEngine::default();

    let assessment = engine.assess(&input).unwrap();
    assert_eq!(TRANSITIONS.load(Ordering::SeqCst), 2);

    for _ in 0..3 {
        assert_eq!(assessment.trigger_events().count(), 2);
    }
    assessment.summary();
    assert_eq!(TRANSITIONS.load(Ordering::SeqCst), 2);

    let mut session = engine.session();
    for obs in &input {
        session.ingest(*obs).unwrap();
    }
    assert_eq!(TRANSITIONS.load(Ordering::SeqCst), 4);
}
