//! JSON documents for the alerting integration

use seaheat_core::{DailyRecord, TriggerEvent};

use crate::ExportResult;

/// Level-transition events as a pretty-printed JSON array
pub fn trigger_events_json<I>(events: I) -> ExportResult<String>
where
    I: IntoIterator<Item = TriggerEvent>,
{
    let events: Vec<TriggerEvent> = events.into_iter().collect();
    Ok(serde_json::to_string_pretty(&events)?)
}

/// Every day with `hri >= hri_threshold`, as a pretty-printed JSON array
pub fn triggered_days_json(records: &[DailyRecord]) -> ExportResult<String> {
    let triggered: Vec<&DailyRecord> = records.iter().filter(|r| r.hri_triggered).collect();
    Ok(serde_json::to_string_pretty(&triggered)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seaheat_core::{DailyObservation, HeatRiskEngine};
    use serde_json::Value;

    fn assessment(temps: &[f64]) -> seaheat_core::Assessment {
        let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let series: Vec<DailyObservation> = temps
            .iter()
            .zip(start.iter_days())
            .map(|(t, d)| DailyObservation::new(d, *t))
            .collect();
        HeatRiskEngine::default().assess(&series).unwrap()
    }

    #[test]
    fn events_use_labels_and_iso_dates() {
        let a = assessment(&[27.0, 28.5]);
        let json: Value = serde_json::from_str(&trigger_events_json(a.trigger_events()).unwrap()).unwrap();

        let events = json.as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["date"], "2024-08-02");
        assert_eq!(events[0]["previous_level"], "NORMAL");
        assert_eq!(events[0]["new_level"], "WATCH");
        assert_eq!(events[0]["direction"], "escalation");
    }

    #[test]
    fn only_triggered_days_listed() {
        let a = assessment(&[31.0, 31.5, 32.0, 27.0]);
        let json: Value = serde_json::from_str(&triggered_days_json(a.records()).unwrap()).unwrap();
        let days = json.as_array().unwrap();

        let expected = a.hri_triggered_days().count();
        assert!(expected > 0);
        assert_eq!(days.len(), expected);
        assert!(days.iter().all(|d| d["hri_triggered"] == true));
        assert!(days.iter().all(|d| d["hri"].as_f64().unwrap() >= 3.0));
    }

    #[test]
    fn empty_inputs_give_empty_arrays() {
        assert_eq!(trigger_events_json(Vec::<TriggerEvent>::new()).unwrap(), "[]");
        assert_eq!(triggered_days_json(&[]).unwrap(), "[]");
    }
}
