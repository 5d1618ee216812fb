//! Season Assessment Example
//!
//! Scores one summer of daily ROI-mean SST values and prints the per-day
//! table, the trigger events and the season summary.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_season_assessment
//! ```

use chrono::NaiveDate;
use seaheat_core::{DailyObservation, HeatRiskEngine, HeatRiskError};

// Jeju offshore ROI mean, 2024-08-01 onwards (°C)
const SST: [f64; 21] = [
    27.4, 27.8, 28.1, 28.6, 28.9, 29.3, 29.8, 30.2, 30.5, 30.4,
    30.8, 31.0, 30.6, 29.9, 29.4, 28.7, 27.9, 28.2, 28.4, 27.6, 27.1,
];

fn main() -> Result<(), HeatRiskError> {
    println!("SeaHeat Season Assessment Example");
    println!("=================================\n");

    let start = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date");
    let series: Vec<DailyObservation> = SST
        .iter()
        .zip(start.iter_days())
        .map(|(t, d)| DailyObservation::new(d, *t))
        .collect();

    let engine = HeatRiskEngine::default();
    let policy = engine.policy();
    println!("Policy:");
    println!("  Hot day:     T >= {}°C", policy.exceedance_threshold);
    println!("  Severe band: T >= {}°C", policy.severe_threshold);
    println!("  Persistence: {} day(s)", policy.persistence_threshold);
    println!();

    let assessment = engine.assess(&series)?;

    println!("{:<12} {:>6} {:>6} {:>4} {:>6} {:>6}  {}", "date", "T", "exc", "D", "var", "HRI", "level");
    for r in assessment.records() {
        println!(
            "{:<12} {:>6.2} {:>6.2} {:>4} {:>6.2} {:>6.3}  {}{}",
            r.date.to_string(),
            r.temperature,
            r.exceedance,
            r.consecutive_hot_days,
            r.variability,
            r.hri,
            r.alert_level,
            if r.hri_triggered { "  *" } else { "" },
        );
    }

    println!("\nTrigger events:");
    for event in assessment.trigger_events() {
        println!(
            "  {}  {:>7} -> {:<7} ({}, HRI {:.3})",
            event.date, event.previous_level, event.new_level, event.direction, event.hri
        );
    }

    let summary = assessment.summary();
    println!("\nSummary:");
    println!("  Days:             {}", summary.days);
    println!("  Highest level:    {}", summary.highest_level);
    println!("  Longest hot run:  {} day(s)", summary.longest_hot_run);
    match summary.first_hri_trigger {
        Some(r) => println!("  First HRI trigger: {} (HRI {:.3})", r.date, r.hri),
        None => println!("  No HRI trigger day"),
    }

    Ok(())
}
