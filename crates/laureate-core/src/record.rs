// File: crates/laureate-core/src/record.rs
// Summary: Laureate records and the CSV / in-memory loaders that produce them.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::category::{categorize, CategoryGroup};
use crate::error::{ChartError, Result};

pub const YEAR_COLUMN: &str = "year";
pub const CATEGORY_COLUMN: &str = "category";
pub const NAME_COLUMN: &str = "fullname";

/// One laureate-award entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub year: i32,
    pub category: String,
    pub name: String,
}

impl Record {
    pub fn new(year: i32, category: impl Into<String>, name: impl Into<String>) -> Self {
        Self { year, category: category.into(), name: name.into() }
    }

    pub fn group(&self) -> CategoryGroup {
        categorize(&self.category)
    }
}

/// Parse a year cell. Surrounding whitespace is ignored; anything else that
/// is not a base-10 integer is a malformed record.
fn parse_year(raw: &str, row: usize) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|_| ChartError::MalformedRecord {
        row,
        column: YEAR_COLUMN.to_string(),
        value: raw.to_string(),
    })
}

/// Load records from a CSV file with a header row.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ChartError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loading laureates from {}", path.display());
    load_csv_reader(file)
}

/// Load records from any CSV byte source with a header row.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    debug!("headers: {:?}", headers);

    let idx = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ChartError::MissingColumn { column: name.to_string() })
    };
    let i_year = idx(YEAR_COLUMN)?;
    let i_category = idx(CATEGORY_COLUMN)?;
    let i_name = idx(NAME_COLUMN)?;

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = i + 1;
        let cell = |ix: usize| rec.get(ix).unwrap_or("");
        out.push(Record {
            year: parse_year(cell(i_year), row)?,
            category: cell(i_category).to_string(),
            name: cell(i_name).to_string(),
        });
    }
    info!("loaded {} records", out.len());
    Ok(out)
}

/// Build records from in-memory rows keyed by column name, preserving order.
pub fn records_from_rows<I>(rows: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = HashMap<String, String>>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| -> Result<Record> {
            let get = |column: &str| {
                row.get(column)
                    .ok_or_else(|| ChartError::MissingColumn { column: column.to_string() })
            };
            Ok(Record {
                year: parse_year(get(YEAR_COLUMN)?, i + 1)?,
                category: get(CATEGORY_COLUMN)?.clone(),
                name: get(NAME_COLUMN)?.clone(),
            })
        })
        .collect()
}
