//! Export formats for SeaHeat assessments
//!
//! ## Overview
//!
//! `seaheat-core` produces in-memory records. This crate renders them for
//! the systems that sit downstream of the engine:
//!
//! - a per-day CSV table for analysts,
//! - JSON documents for the alerting integration (the triggered-day list and
//!   one final alert payload),
//! - Avro object-container files for long-term storage, with the schemas
//!   kept in a [`SchemaRegistry`],
//! - a JSON [`EngineConfig`] so thresholds and weights can be changed without
//!   recompiling.
//!
//! ## Schema Evolution
//!
//! Avro schemas carry their version in the name (`daily_record_v1`). New
//! fields are appended with defaults, never removed, so a v2 reader can still
//! decode v1 files.
//!
//! ## Usage Example
//!
//! ```no_run
//! use seaheat_core::{DailyObservation, HeatRiskEngine};
//! use seaheat_schemas::{ExportBundle, RegionProfile};
//!
//! # let series: Vec<DailyObservation> = Vec::new();
//! let assessment = HeatRiskEngine::default().assess(&series)?;
//! let bundle = ExportBundle::new(&assessment, RegionProfile::default());
//! let written = bundle.write_to("outputs")?;
//! println!("wrote {} files", written.len());
//! # Ok::<(), seaheat_schemas::ExportError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod avro;
pub mod config;
pub mod csv;
pub mod export;
pub mod json;
pub mod payload;
pub mod region;
pub mod registry;
pub mod schemas;

pub use avro::{decode_daily_records, decode_trigger_events, encode_daily_records, encode_trigger_events};
pub use config::EngineConfig;
pub use csv::{daily_csv_string, write_daily_csv, CSV_HEADER};
pub use export::ExportBundle;
pub use json::{trigger_events_json, triggered_days_json};
pub use payload::{AlertPayload, Decision, Metrics, SourceInfo, Thresholds, WeightsInfo};
pub use region::{BoundingBox, RegionProfile};
pub use registry::{SchemaMetadata, SchemaRegistry, GLOBAL_REGISTRY};

use seaheat_core::HeatRiskError;

/// Schema-related errors
#[derive(Debug, Clone, PartialEq, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Schema JSON was rejected by the Avro parser
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    /// No schema registered under this name
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// Registry lock was poisoned by a panicking writer
    #[error("Schema registry lock poisoned")]
    LockPoisoned,
}

/// Errors raised while rendering or writing an assessment
#[derive(Debug, thiserror_no_std::Error)]
pub enum ExportError {
    /// Filesystem or writer failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or config decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Avro encoding failure
    #[error("Avro error: {0}")]
    Avro(#[from] apache_avro::Error),

    /// Schema lookup or parse failure
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The engine rejected the input or configuration
    #[error("Engine error: {0}")]
    Engine(#[from] HeatRiskError),

    /// Stored content does not match the expected record layout
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration value outside its domain
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_convert() {
        let err: ExportError = HeatRiskError::EmptySeries.into();
        assert!(matches!(err, ExportError::Engine(HeatRiskError::EmptySeries)));
        assert!(err.to_string().starts_with("Engine error"));
    }

    #[test]
    fn schema_errors_display() {
        let err = SchemaError::NotFound("daily_record_v9".into());
        assert_eq!(err.to_string(), "Schema not found: daily_record_v9");
    }
}
