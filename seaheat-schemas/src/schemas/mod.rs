//! SeaHeat Avro schemas
//!
//! Versioned by name. Dates use the Avro `date` logical type (days since the
//! Unix epoch); alert levels are an enum whose symbol order matches
//! severity.

use apache_avro::Schema;
use serde_json::json;

use crate::SchemaError;

/// Namespace shared by all v1 schemas
pub const NAMESPACE_V1: &str = "io.seaheat.v1";

/// Per-day assessment record v1.0.0
pub fn daily_record_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE_V1,
        "type": "record",
        "name": "DailyRecord",
        "doc": "One assessed day: indicators, HRI and alert level",
        "fields": [
            {
                "name": "date",
                "type": { "type": "int", "logicalType": "date" }
            },
            {
                "name": "temperature",
                "type": "double",
                "doc": "ROI-mean daily SST in degrees Celsius"
            },
            {
                "name": "exceedance",
                "type": "double",
                "doc": "max(0, T - exceedance threshold)"
            },
            {
                "name": "consecutive_hot_days",
                "type": "long",
                "doc": "Hot days in a row ending on this day"
            },
            {
                "name": "variability",
                "type": "double",
                "doc": "Absolute change from the previous day, 0 on day 1"
            },
            {
                "name": "hri",
                "type": "double",
                "doc": "Heat Risk Index, never negative"
            },
            {
                "name": "alert_level",
                "type": {
                    "type": "enum",
                    "name": "AlertLevel",
                    "symbols": ["NORMAL", "WATCH", "WARNING", "SEVERE"]
                }
            },
            {
                "name": "hri_triggered",
                "type": "boolean",
                "default": false
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Alert-level transition event v1.0.0
pub fn trigger_event_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE_V1,
        "type": "record",
        "name": "TriggerEvent",
        "doc": "Change of alert level between consecutive days",
        "fields": [
            {
                "name": "date",
                "type": { "type": "int", "logicalType": "date" }
            },
            {
                "name": "previous_level",
                "type": {
                    "type": "enum",
                    "name": "AlertLevel",
                    "symbols": ["NORMAL", "WATCH", "WARNING", "SEVERE"]
                }
            },
            {
                "name": "new_level",
                "type": "AlertLevel"
            },
            {
                "name": "direction",
                "type": {
                    "type": "enum",
                    "name": "Direction",
                    "symbols": ["ESCALATION", "DE_ESCALATION"]
                }
            },
            {
                "name": "hri",
                "type": "double",
                "doc": "HRI on the transition day"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_record_schema_parses() {
        let schema = daily_record_v1().unwrap();
        let name = schema.name().unwrap();
        assert_eq!(name.name, "DailyRecord");
        assert_eq!(name.namespace.as_deref(), Some(NAMESPACE_V1));

        let canonical = schema.canonical_form();
        for field in ["date", "temperature", "consecutive_hot_days", "hri", "alert_level", "hri_triggered"] {
            assert!(canonical.contains(&format!("\"{}\"", field)), "missing {}", field);
        }
    }

    #[test]
    fn trigger_event_schema_reuses_level_enum() {
        let schema = trigger_event_v1().unwrap();
        assert_eq!(schema.name().unwrap().name, "TriggerEvent");

        let canonical = schema.canonical_form();
        assert!(canonical.contains("DE_ESCALATION"));
        assert_eq!(canonical.matches("\"SEVERE\"").count(), 1);
    }
}
