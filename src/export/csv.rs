use crate::errors::AppResult;
use crate::export::model::Sheet;
use csv::Writer;
use std::path::Path;

/// Write a sheet as CSV.
pub fn write_csv(path: &Path, sheet: &Sheet) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
