//! Export Bundle Example
//!
//! Assesses a short heatwave and writes the CSV table, JSON documents and
//! Avro containers into `./outputs`.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p seaheat-schemas --example 03_export_bundle
//! ```

use chrono::NaiveDate;
use seaheat_core::DailyObservation;
use seaheat_schemas::{EngineConfig, ExportBundle, ExportError};

const CONFIG: &str = r#"{
    "policy": { "hri_threshold": 3.0 },
    "weights": { "exceedance": 1.0, "persistence": 1.0, "variability": 0.3 },
    "initial_level": "NORMAL"
}"#;

fn main() -> Result<(), ExportError> {
    println!("SeaHeat Export Bundle Example");
    println!("=============================\n");

    let config = EngineConfig::from_json_str(CONFIG)?;
    let engine = config.build_engine()?;

    let start = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date");
    let temps = [27.6, 28.3, 29.0, 29.8, 30.4, 30.9, 31.2, 30.6, 29.5, 28.1, 27.4];
    let series: Vec<DailyObservation> = temps
        .iter()
        .zip(start.iter_days())
        .map(|(t, d)| DailyObservation::new(d, *t))
        .collect();

    let assessment = engine.assess(&series)?;
    let bundle = ExportBundle::new(&assessment, config.region.clone()).with_avro(true);

    for path in bundle.write_to("outputs")? {
        println!("  wrote {}", path.display());
    }

    let payload = bundle.final_payload();
    println!("\n{}", payload.to_json_string()?);
    Ok(())
}
