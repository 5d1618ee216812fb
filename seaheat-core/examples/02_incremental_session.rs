//! Incremental Session Example
//!
//! Feeds observations one at a time, the way a daily job appending the
//! latest satellite value would, and shows how a missing day is rejected
//! without disturbing the carried state.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_incremental_session
//! ```

use chrono::{Duration, NaiveDate};
use seaheat_core::{DailyObservation, HeatRiskEngine, HeatRiskError, InitialLevel};

fn main() -> Result<(), HeatRiskError> {
    println!("SeaHeat Incremental Session Example");
    println!("===================================\n");

    let engine = HeatRiskEngine::builder()
        .initial_level(InitialLevel::Suppress)
        .build()?;
    let mut session = engine.session();

    let start = NaiveDate::from_ymd_opt(2024, 8, 5).expect("valid date");
    let feed = [
        (0, 28.4),
        (1, 29.1),
        (3, 29.6), // day 2 missing upstream
        (2, 29.5),
        (3, 30.3),
        (4, 30.1),
    ];

    for (offset, temperature) in feed {
        let obs = DailyObservation::new(start + Duration::days(offset), temperature);
        match session.ingest(obs) {
            Ok((record, event)) => {
                println!(
                    "{}  T={:.1}  D={}  HRI={:.3}  {}",
                    record.date, record.temperature, record.consecutive_hot_days, record.hri, record.alert_level
                );
                if let Some(event) = event {
                    println!("    trigger: {} -> {} ({})", event.previous_level, event.new_level, event.direction);
                }
            }
            Err(e) => println!("{}  rejected: {}", obs.date, e),
        }
    }

    println!("\nAccepted {} day(s), last {:?}", session.days_ingested(), session.last_date());
    Ok(())
}
