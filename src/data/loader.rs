use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::StringRecord;

use super::model::{Dataset, Record};
use crate::error::{PrepError, Result};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file with a header row, resolving `column` as the value column.
///
/// Rows shorter than the header are kept; their missing cells read as empty,
/// so a missing value cell never coerces to a number.
///
/// * missing file → [`PrepError::FileNotFound`]
/// * column not in the header → [`PrepError::MissingColumn`]
/// * row longer than the header → [`PrepError::LongRow`]
/// * malformed CSV (bad quoting, bad UTF-8) → [`PrepError::Csv`]
pub fn load_csv(path: &Path, column: &str) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PrepError::FileNotFound(path.to_path_buf()),
        _ => PrepError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let csv_err = |source| PrepError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        if record.len() > headers.len() {
            return Err(PrepError::LongRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: record.len(),
            });
        }
        records.push(record);
    }

    let dataset = Dataset::new(headers, records, column).ok_or_else(|| PrepError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    })?;

    log::info!(
        "Loaded {} rows from {} (value column '{}')",
        dataset.len(),
        path.display(),
        dataset.value_column()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write a header row followed by `records`. No index column is added.
pub fn write_csv<'a, I>(path: &Path, headers: &StringRecord, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let csv_err = |source| PrepError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(headers).map_err(csv_err)?;

    let mut written = 0;
    for record in records {
        if record.len() < headers.len() {
            // Short input rows go out padded with empty cells.
            let padding = std::iter::repeat("").take(headers.len() - record.len());
            writer
                .write_record(record.iter().chain(padding))
                .map_err(csv_err)?;
        } else {
            writer.write_record(record).map_err(csv_err)?;
        }
        written += 1;
    }
    writer.flush().map_err(|source| PrepError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {written} rows to {}", path.display());
    Ok(written)
}
