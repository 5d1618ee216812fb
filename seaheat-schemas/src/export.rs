//! Output directory layout for one assessment
//!
//! ```text
//! <dir>/seaheat_daily.csv        per-day table
//! <dir>/trigger_events.json      level transitions
//! <dir>/triggered_days.json      days with HRI >= threshold
//! <dir>/final_alert_event.json   single payload for the alerting system
//! <dir>/seaheat_daily.avro       optional, per-day records
//! <dir>/trigger_events.avro      optional, level transitions
//! ```

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use seaheat_core::Assessment;

use crate::{
    avro::{encode_daily_records, encode_trigger_events},
    csv::write_daily_csv,
    json::{trigger_events_json, triggered_days_json},
    payload::AlertPayload,
    region::RegionProfile,
    ExportResult,
};

/// Per-day CSV file name
pub const DAILY_CSV_FILE: &str = "seaheat_daily.csv";
/// Trigger event list file name
pub const TRIGGER_EVENTS_FILE: &str = "trigger_events.json";
/// Triggered-day list file name
pub const TRIGGERED_DAYS_FILE: &str = "triggered_days.json";
/// Final alert payload file name
pub const FINAL_ALERT_FILE: &str = "final_alert_event.json";
/// Avro per-day records file name
pub const DAILY_AVRO_FILE: &str = "seaheat_daily.avro";
/// Avro trigger events file name
pub const TRIGGER_EVENTS_AVRO_FILE: &str = "trigger_events.avro";

/// Everything written for one assessed series
#[derive(Debug, Clone)]
pub struct ExportBundle<'a> {
    assessment: &'a Assessment,
    region: RegionProfile,
    avro: bool,
}

impl<'a> ExportBundle<'a> {
    /// Bundle for `assessment` in `region`, without Avro files
    pub fn new(assessment: &'a Assessment, region: RegionProfile) -> Self {
        Self {
            assessment,
            region,
            avro: false,
        }
    }

    /// Also write the Avro containers
    pub fn with_avro(mut self, enabled: bool) -> Self {
        self.avro = enabled;
        self
    }

    /// Region the payload is attributed to
    pub fn region(&self) -> &RegionProfile {
        &self.region
    }

    /// Final alert payload for this assessment
    pub fn final_payload(&self) -> AlertPayload {
        AlertPayload::from_assessment(self.assessment, &self.region)
    }

    /// Write all files into `dir`, creating it if needed
    ///
    /// Returns the paths written, in write order.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> ExportResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        let csv_path = dir.join(DAILY_CSV_FILE);
        write_daily_csv(BufWriter::new(File::create(&csv_path)?), self.assessment.records())?;
        written.push(csv_path);

        let events_path = dir.join(TRIGGER_EVENTS_FILE);
        fs::write(&events_path, trigger_events_json(self.assessment.trigger_events())?)?;
        written.push(events_path);

        let days_path = dir.join(TRIGGERED_DAYS_FILE);
        fs::write(&days_path, triggered_days_json(self.assessment.records())?)?;
        written.push(days_path);

        let payload = self.final_payload();
        let payload_path = dir.join(FINAL_ALERT_FILE);
        fs::write(&payload_path, payload.to_json_string()?)?;
        written.push(payload_path);

        if self.avro {
            let path = dir.join(DAILY_AVRO_FILE);
            fs::write(&path, encode_daily_records(self.assessment.records())?)?;
            written.push(path);

            let path = dir.join(TRIGGER_EVENTS_AVRO_FILE);
            fs::write(&path, encode_trigger_events(self.assessment.trigger_events())?)?;
            written.push(path);
        }

        match payload.date {
            Some(date) => log::info!(
                "[{}] exported {} day(s) to {}; first HRI trigger {} ({})",
                self.region.region_id,
                self.assessment.len(),
                dir.display(),
                date,
                payload.decision.level,
            ),
            None => log::info!(
                "[{}] exported {} day(s) to {}; no HRI trigger",
                self.region.region_id,
                self.assessment.len(),
                dir.display(),
            ),
        }

        Ok(written)
    }
}
