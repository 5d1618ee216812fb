//! Avro object-container encoding of records and trigger events
//!
//! Files carry their writer schema in the header, so they stay readable
//! after the registry moves on to a newer version.
//!
//! A container with no values is encoded as zero bytes (the Avro writer
//! only emits the header together with the first block). The decoders
//! read zero bytes back as an empty list.

use apache_avro::{types::Value, Reader, Schema, Writer};
use chrono::{Datelike, NaiveDate};

use seaheat_core::{AlertLevel, DailyRecord, Direction, TriggerEvent};

use crate::{registry::GLOBAL_REGISTRY, ExportError, ExportResult};

/// `num_days_from_ce` of 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn date_value(date: NaiveDate) -> Value {
    Value::Date(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
}

fn level_value(level: AlertLevel) -> Value {
    Value::Enum(u32::from(level.severity()), level.as_str().to_string())
}

fn direction_value(direction: Direction) -> Value {
    match direction {
        Direction::Escalation => Value::Enum(0, "ESCALATION".to_string()),
        Direction::DeEscalation => Value::Enum(1, "DE_ESCALATION".to_string()),
    }
}

fn daily_record_value(r: &DailyRecord) -> Value {
    Value::Record(vec![
        ("date".to_string(), date_value(r.date)),
        ("temperature".to_string(), Value::Double(r.temperature)),
        ("exceedance".to_string(), Value::Double(r.exceedance)),
        ("consecutive_hot_days".to_string(), Value::Long(i64::from(r.consecutive_hot_days))),
        ("variability".to_string(), Value::Double(r.variability)),
        ("hri".to_string(), Value::Double(r.hri)),
        ("alert_level".to_string(), level_value(r.alert_level)),
        ("hri_triggered".to_string(), Value::Boolean(r.hri_triggered)),
    ])
}

fn trigger_event_value(e: &TriggerEvent) -> Value {
    Value::Record(vec![
        ("date".to_string(), date_value(e.date)),
        ("previous_level".to_string(), level_value(e.previous_level)),
        ("new_level".to_string(), level_value(e.new_level)),
        ("direction".to_string(), direction_value(e.direction)),
        ("hri".to_string(), Value::Double(e.hri)),
    ])
}

fn encode<I>(schema: &Schema, values: I) -> ExportResult<Vec<u8>>
where
    I: IntoIterator<Item = Value>,
{
    let mut writer = Writer::new(schema, Vec::new());
    for value in values {
        writer.append(value)?;
    }
    Ok(writer.into_inner()?)
}

/// Encode records with the latest `daily_record` schema
pub fn encode_daily_records(records: &[DailyRecord]) -> ExportResult<Vec<u8>> {
    let schema = GLOBAL_REGISTRY.get_latest("daily_record")?;
    encode(&schema, records.iter().map(daily_record_value))
}

/// Encode trigger events with the latest `trigger_event` schema
pub fn encode_trigger_events<I>(events: I) -> ExportResult<Vec<u8>>
where
    I: IntoIterator<Item = TriggerEvent>,
{
    let schema = GLOBAL_REGISTRY.get_latest("trigger_event")?;
    encode(&schema, events.into_iter().map(|e| trigger_event_value(&e)))
}

// ── Decoding ─────────────────────────────────────────────────────────────

fn decode_error(what: &str) -> ExportError {
    ExportError::Decode(format!("unexpected Avro value for {}", what))
}

fn field<'a>(fields: &'a [(String, Value)], name: &str) -> ExportResult<&'a Value> {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
        .ok_or_else(|| decode_error(name))
}

fn as_f64(fields: &[(String, Value)], name: &str) -> ExportResult<f64> {
    match field(fields, name)? {
        Value::Double(v) => Ok(*v),
        _ => Err(decode_error(name)),
    }
}

fn as_date(fields: &[(String, Value)], name: &str) -> ExportResult<NaiveDate> {
    match field(fields, name)? {
        Value::Date(days) => NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
            .ok_or_else(|| decode_error(name)),
        _ => Err(decode_error(name)),
    }
}

fn as_level(fields: &[(String, Value)], name: &str) -> ExportResult<AlertLevel> {
    match field(fields, name)? {
        Value::Enum(_, symbol) => AlertLevel::from_label(symbol).ok_or_else(|| decode_error(name)),
        _ => Err(decode_error(name)),
    }
}

/// Decode a daily-record container written by [`encode_daily_records`]
pub fn decode_daily_records(bytes: &[u8]) -> ExportResult<Vec<DailyRecord>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let reader = Reader::new(bytes)?;
    let mut records = Vec::new();

    for value in reader {
        let fields = match value? {
            Value::Record(fields) => fields,
            _ => return Err(decode_error("daily record")),
        };
        let consecutive_hot_days = match field(&fields, "consecutive_hot_days")? {
            Value::Long(v) => u32::try_from(*v).map_err(|_| decode_error("consecutive_hot_days"))?,
            _ => return Err(decode_error("consecutive_hot_days")),
        };
        let hri_triggered = match field(&fields, "hri_triggered")? {
            Value::Boolean(b) => *b,
            _ => return Err(decode_error("hri_triggered")),
        };

        records.push(DailyRecord {
            date: as_date(&fields, "date")?,
            temperature: as_f64(&fields, "temperature")?,
            exceedance: as_f64(&fields, "exceedance")?,
            consecutive_hot_days,
            variability: as_f64(&fields, "variability")?,
            hri: as_f64(&fields, "hri")?,
            alert_level: as_level(&fields, "alert_level")?,
            hri_triggered,
        });
    }

    Ok(records)
}

/// Decode a trigger-event container written by [`encode_trigger_events`]
pub fn decode_trigger_events(bytes: &[u8]) -> ExportResult<Vec<TriggerEvent>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let reader = Reader::new(bytes)?;
    let mut events = Vec::new();

    for value in reader {
        let fields = match value? {
            Value::Record(fields) => fields,
            _ => return Err(decode_error("trigger event")),
        };
        let direction = match field(&fields, "direction")? {
            Value::Enum(0, _) => Direction::Escalation,
            Value::Enum(1, _) => Direction::DeEscalation,
            _ => return Err(decode_error("direction")),
        };

        events.push(TriggerEvent {
            date: as_date(&fields, "date")?,
            previous_level: as_level(&fields, "previous_level")?,
            new_level: as_level(&fields, "new_level")?,
            direction,
            hri: as_f64(&fields, "hri")?,
        });
    }

    Ok(events)
}
