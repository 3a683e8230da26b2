use std::collections::HashMap;
use std::io::Read;

use csv::StringRecord;

use super::domain::RawRecord;
use super::fields::{normalize_header, strip_quotes};
use super::MarketImportError;

const REQUIRED_COLUMNS: &[&str] = &["region", "state_code", "property_type", "period_end"];

/// Line-at-a-time reader over a tab-separated tracker extract.
///
/// Rows are borrowed from a single reusable buffer, so only rows the caller
/// decides to keep are ever copied out.
pub(crate) struct TrackerReader<R: Read> {
    inner: csv::Reader<R>,
    headers: Vec<String>,
    columns: HashMap<String, usize>,
    record: StringRecord,
}

impl<R: Read> TrackerReader<R> {
    pub(crate) fn new(reader: R) -> Result<Self, MarketImportError> {
        let mut inner = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = inner.headers()?.iter().map(normalize_header).collect();
        let columns: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .copied()
            .find(|column| !columns.contains_key(*column))
        {
            return Err(MarketImportError::MissingColumn(missing));
        }

        Ok(Self {
            inner,
            headers,
            columns,
            record: StringRecord::new(),
        })
    }

    pub(crate) fn read_row(&mut self) -> Result<Option<TrackerRow<'_>>, csv::Error> {
        if !self.inner.read_record(&mut self.record)? {
            return Ok(None);
        }

        Ok(Some(TrackerRow {
            headers: &self.headers,
            columns: &self.columns,
            record: &self.record,
        }))
    }
}

pub(crate) struct TrackerRow<'a> {
    headers: &'a [String],
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> TrackerRow<'a> {
    /// Unquoted cell for a normalized column; short rows read as blank.
    pub(crate) fn get(&self, column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|index| self.record.get(*index))
            .map(strip_quotes)
            .unwrap_or("")
    }

    pub(crate) fn to_raw(&self) -> RawRecord {
        self.headers
            .iter()
            .zip(self.record.iter())
            .map(|(column, value)| (column.as_str(), strip_quotes(value)))
            .collect()
    }
}
