//! End-to-end export tests
//!
//! Assess a season, write the bundle into a temporary directory and read
//! every file back the way a downstream consumer would.

use std::fs;

use chrono::NaiveDate;
use seaheat_core::{Assessment, DailyObservation, HeatRiskEngine};
use seaheat_schemas::{
    decode_daily_records, decode_trigger_events, export, AlertPayload, EngineConfig, ExportBundle,
    RegionProfile, CSV_HEADER,
};
use serde_json::Value;
use tempfile::TempDir;

fn season(temps: &[f64]) -> Vec<DailyObservation> {
    let start = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
    temps
        .iter()
        .zip(start.iter_days())
        .map(|(t, d)| DailyObservation::new(d, *t))
        .collect()
}

fn heatwave() -> Assessment {
    let temps = [
        26.8, 27.3, 27.9, 28.3, 28.9, 29.4, 29.8, 30.2, 30.6, 30.9, 30.7, 30.1, 29.2, 28.4, 27.6, 27.0,
    ];
    HeatRiskEngine::default().assess(&season(&temps)).unwrap()
}

#[test]
fn bundle_writes_all_files() {
    let dir = TempDir::new().unwrap();
    let assessment = heatwave();

    let written = ExportBundle::new(&assessment, RegionProfile::default())
        .write_to(dir.path())
        .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            export::DAILY_CSV_FILE,
            export::TRIGGER_EVENTS_FILE,
            export::TRIGGERED_DAYS_FILE,
            export::FINAL_ALERT_FILE,
        ]
    );
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn csv_has_one_row_per_day() {
    let dir = TempDir::new().unwrap();
    let assessment = heatwave();
    ExportBundle::new(&assessment, RegionProfile::default())
        .write_to(dir.path())
        .unwrap();

    let text = fs::read_to_string(dir.path().join(export::DAILY_CSV_FILE)).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(lines.count(), assessment.len());
}

#[test]
fn json_files_agree_with_assessment() {
    let dir = TempDir::new().unwrap();
    let assessment = heatwave();
    ExportBundle::new(&assessment, RegionProfile::default())
        .write_to(dir.path())
        .unwrap();

    let events: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(export::TRIGGER_EVENTS_FILE)).unwrap())
            .unwrap();
    assert_eq!(events.as_array().unwrap().len(), assessment.trigger_events().count());

    let days: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(export::TRIGGERED_DAYS_FILE)).unwrap())
            .unwrap();
    assert_eq!(days.as_array().unwrap().len(), assessment.hri_triggered_days().count());

    let payload: AlertPayload =
        serde_json::from_str(&fs::read_to_string(dir.path().join(export::FINAL_ALERT_FILE)).unwrap())
            .unwrap();
    let first = assessment.hri_triggered_days().next().unwrap();
    assert!(payload.is_triggered());
    assert_eq!(payload.date, Some(first.date));
    assert_eq!(payload.decision.level, first.alert_level);
}

#[test]
fn quiet_season_still_writes_payload() {
    let dir = TempDir::new().unwrap();
    let assessment = HeatRiskEngine::default().assess(&season(&[25.0, 25.5, 26.0])).unwrap();
    ExportBundle::new(&assessment, RegionProfile::default())
        .write_to(dir.path())
        .unwrap();

    let payload: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(export::FINAL_ALERT_FILE)).unwrap())
            .unwrap();
    assert_eq!(payload["decision"]["triggered"], false);
    assert!(payload["date"].is_null());

    let days = fs::read_to_string(dir.path().join(export::TRIGGERED_DAYS_FILE)).unwrap();
    assert_eq!(days, "[]");
}

#[test]
fn avro_files_decode_back() {
    let dir = TempDir::new().unwrap();
    let assessment = heatwave();
    let written = ExportBundle::new(&assessment, RegionProfile::default())
        .with_avro(true)
        .write_to(dir.path())
        .unwrap();
    assert_eq!(written.len(), 6);

    let records = decode_daily_records(&fs::read(dir.path().join(export::DAILY_AVRO_FILE)).unwrap()).unwrap();
    assert_eq!(records, assessment.records());

    let events =
        decode_trigger_events(&fs::read(dir.path().join(export::TRIGGER_EVENTS_AVRO_FILE)).unwrap()).unwrap();
    assert_eq!(events, assessment.trigger_events().collect::<Vec<_>>());
}

#[test]
fn quiet_season_avro_files_decode_empty() {
    let dir = TempDir::new().unwrap();
    let assessment = HeatRiskEngine::default().assess(&season(&[25.0, 25.5, 26.0])).unwrap();
    assert_eq!(assessment.trigger_events().count(), 0);

    ExportBundle::new(&assessment, RegionProfile::default())
        .with_avro(true)
        .write_to(dir.path())
        .unwrap();

    let events =
        decode_trigger_events(&fs::read(dir.path().join(export::TRIGGER_EVENTS_AVRO_FILE)).unwrap()).unwrap();
    assert!(events.is_empty());

    let records = decode_daily_records(&fs::read(dir.path().join(export::DAILY_AVRO_FILE)).unwrap()).unwrap();
    assert_eq!(records, assessment.records());
}

#[test]
fn config_file_drives_engine_and_region() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("engine.json");
    fs::write(
        &config_path,
        r#"{
            "policy": { "hri_threshold": 1.0 },
            "initial_level": null,
            "region": { "region_id": "TEST_BAY" }
        }"#,
    )
    .unwrap();

    let config = EngineConfig::from_file(&config_path).unwrap();
    let engine = config.build_engine().unwrap();
    let assessment = engine.assess(&season(&[28.5, 29.0, 29.5])).unwrap();

    // Lower threshold flags day 1 (HRI = 0.5 + ln 2)
    assert!(assessment.records()[0].hri_triggered);
    // Day-1 WATCH is not reported when the prior level is suppressed
    let events: Vec<_> = assessment.trigger_events().collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].date, assessment.records()[2].date);

    let out = dir.path().join("out");
    let bundle = ExportBundle::new(&assessment, config.region.clone());
    bundle.write_to(&out).unwrap();
    assert!(bundle.final_payload().message.starts_with("[TEST_BAY]"));
}
