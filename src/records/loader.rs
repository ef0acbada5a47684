//! Record loader - parses the scraper's CSV export into normalized records

use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{Record, SlugPool};

/// Column positions scanned for phone numbers, in priority order:
/// primary number, display number, then the link columns.
const PHONE_COLUMNS: [usize; 5] = [6, 10, 7, 8, 9];

/// Loader failures. Row-level problems never surface here; short rows
/// degrade to empty fields and unreadable rows are skipped with a warning.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Loads records from the CSV export
pub struct RecordLoader {
    data_path: PathBuf,
}

impl RecordLoader {
    /// Create a new loader for the given CSV file
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
        }
    }

    /// Load all records in input order.
    ///
    /// The first row is treated as a header and skipped; its content is
    /// unused. Column mapping is positional: map URL, name, rating,
    /// category, address, status, five phone candidates, image URL.
    pub fn load(&self) -> Result<Vec<Record>, LoadError> {
        if !self.data_path.exists() {
            return Err(LoadError::InputNotFound(self.data_path.clone()));
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.data_path)
            .map_err(|e| LoadError::Read {
                path: self.data_path.clone(),
                source: e,
            })?;

        let mut pool = SlugPool::default();
        let mut records = Vec::new();

        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!("Skipping unreadable row {}: {}", index + 2, e);
                    continue;
                }
            };

            if row.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            records.push(record_from_row(&row, index, &mut pool));
        }

        Ok(records)
    }
}

/// Build one record from a data row; missing positional fields read as empty
fn record_from_row(row: &StringRecord, index: usize, pool: &mut SlugPool) -> Record {
    let field = |i: usize| row.get(i).unwrap_or("").trim().to_string();

    let name = field(1);
    let slug = pool.assign(&name, index);

    Record {
        slug,
        name,
        rating: field(2),
        category: field(3),
        address: field(4),
        status: field(5),
        map_url: field(0),
        phones: collect_phones(row),
        image_url: field(11),
    }
}

/// Gather distinct phone numbers across the candidate columns
fn collect_phones(row: &StringRecord) -> Vec<String> {
    let mut phones: Vec<String> = Vec::new();

    for &col in &PHONE_COLUMNS {
        let value = row.get(col).unwrap_or("").trim();
        let value = value.strip_prefix("tel:").unwrap_or(value).trim();
        if !value.is_empty() && !phones.iter().any(|p| p == value) {
            phones.push(value.to_string());
        }
    }

    phones
}
