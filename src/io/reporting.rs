// src/io/reporting.rs

use crate::model::record::DayRecord;
use std::error::Error;
use std::path::Path;

/// Writes the daily history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - The day records produced by the simulation engine.
pub fn write_simulation_log(file_path: &str, data: &[DayRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        data.len(),
        file_path
    );
    Ok(())
}
