use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::MarketImportError;

const ZIPCODE_WIDTH: usize = 5;

/// County (and optional city) a zip code belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipPlace {
    pub county: String,
    pub city: Option<String>,
}

/// Lookup table resolving zip codes to their containing county.
#[derive(Debug, Clone, Default)]
pub struct ZipGeography {
    places: HashMap<String, ZipPlace>,
}

impl ZipGeography {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MarketImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a `zipcode,county,city` CSV; rows without a county are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MarketImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut geography = Self::new();

        for row in csv_reader.deserialize::<GeographyRow>() {
            let row = row?;
            if let Some(county) = row.county {
                geography.insert(&row.zipcode, county, row.city);
            }
        }

        Ok(geography)
    }

    pub fn insert(&mut self, zipcode: &str, county: impl Into<String>, city: Option<String>) {
        self.places.insert(
            canonical_zipcode(zipcode),
            ZipPlace {
                county: county.into(),
                city,
            },
        );
    }

    pub fn resolve(&self, zipcode: &str) -> Option<&ZipPlace> {
        self.places.get(zipcode)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Spreadsheet exports drop leading zeros; numeric codes are padded back to five digits.
fn canonical_zipcode(value: &str) -> String {
    let trimmed = value.trim();
    if !trimmed.is_empty()
        && trimmed.len() < ZIPCODE_WIDTH
        && trimmed.chars().all(|ch| ch.is_ascii_digit())
    {
        format!("{trimmed:0>width$}", width = ZIPCODE_WIDTH)
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct GeographyRow {
    zipcode: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    county: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
