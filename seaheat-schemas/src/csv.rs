//! Per-day CSV table
//!
//! One row per assessed day in date order. All fields are numbers, ISO dates,
//! level labels or booleans, so no quoting is ever needed.

use std::io::Write;

use seaheat_core::DailyRecord;

use crate::ExportResult;

/// Header row, column order of every data row
pub const CSV_HEADER: &str =
    "date,temperature,exceedance,consecutive_hot_days,variability,hri,alert_level,hri_triggered";

/// Write the header and one row per record
pub fn write_daily_csv<W: Write>(mut writer: W, records: &[DailyRecord]) -> ExportResult<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            r.date.format("%Y-%m-%d"),
            r.temperature,
            r.exceedance,
            r.consecutive_hot_days,
            r.variability,
            r.hri,
            r.alert_level.as_str(),
            r.hri_triggered,
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// CSV table as a string
pub fn daily_csv_string(records: &[DailyRecord]) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_daily_csv(&mut buf, records)?;
    // Only ASCII is ever written
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
