//! Market tracker pipeline: raw TSV extracts in, normalized region records out.

mod classify;
mod domain;
pub mod fields;
mod geography;
mod latest;
mod parser;
pub mod proximity;
mod scope;
mod snapshot;
pub mod transform;

pub use classify::{MarketType, TrendDirection};
pub use domain::{CountyRecord, RawRecord, RegionLevel, RegionMetrics, ZipcodeRecord};
pub use geography::{ZipGeography, ZipPlace};
pub use latest::LatestByKey;
pub use scope::MarketScope;
pub use snapshot::{read_insights, InsightCoverage, MarketSnapshot, COUNTIES_FILE, ZIPCODES_FILE};

use std::io::Read;
use std::path::Path;

use parser::TrackerReader;
use tracing::{debug, info};

#[derive(Debug)]
pub enum MarketImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    MissingColumn(&'static str),
}

impl std::fmt::Display for MarketImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketImportError::Io(err) => write!(f, "failed to read market data: {}", err),
            MarketImportError::Csv(err) => write!(f, "invalid market tracker data: {}", err),
            MarketImportError::Json(err) => write!(f, "invalid market JSON: {}", err),
            MarketImportError::MissingColumn(column) => {
                write!(f, "market tracker extract has no '{}' column", column)
            }
        }
    }
}

impl std::error::Error for MarketImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarketImportError::Io(err) => Some(err),
            MarketImportError::Csv(err) => Some(err),
            MarketImportError::Json(err) => Some(err),
            MarketImportError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for MarketImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for MarketImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for MarketImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Streams tracker extracts into deduplicated, normalized region records.
#[derive(Debug, Clone)]
pub struct MarketTrackerImporter {
    scope: MarketScope,
}

impl MarketTrackerImporter {
    pub fn new(scope: MarketScope) -> Self {
        Self { scope }
    }

    pub fn counties_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<CountyRecord>, MarketImportError> {
        let file = std::fs::File::open(path)?;
        self.counties_from_reader(std::io::BufReader::new(file))
    }

    pub fn counties_from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<Vec<CountyRecord>, MarketImportError> {
        let latest = self.latest_rows(reader, RegionLevel::County)?;
        let counties: Vec<CountyRecord> = latest
            .iter()
            .map(|row| transform::county_record(row, &self.scope))
            .collect();

        info!(counties = counties.len(), "county market records normalized");
        Ok(counties)
    }

    pub fn zipcodes_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        geography: &ZipGeography,
    ) -> Result<Vec<ZipcodeRecord>, MarketImportError> {
        let file = std::fs::File::open(path)?;
        self.zipcodes_from_reader(std::io::BufReader::new(file), geography)
    }

    /// Zip codes the geography cannot place in a county are dropped.
    pub fn zipcodes_from_reader<R: Read>(
        &self,
        reader: R,
        geography: &ZipGeography,
    ) -> Result<Vec<ZipcodeRecord>, MarketImportError> {
        let latest = self.latest_rows(reader, RegionLevel::Zipcode)?;
        let mut zipcodes = Vec::with_capacity(latest.len());

        for row in &latest {
            match transform::zipcode_record(row, &self.scope, geography) {
                Some(record) => zipcodes.push(record),
                None => debug!(
                    zipcode = transform::region_key(row.get("region")),
                    "zip code has no known county; skipping"
                ),
            }
        }

        proximity::link_nearby(&mut zipcodes);

        info!(
            zipcodes = zipcodes.len(),
            dropped = latest.len() - zipcodes.len(),
            "zip market records normalized"
        );
        Ok(zipcodes)
    }

    fn latest_rows<R: Read>(
        &self,
        reader: R,
        level: RegionLevel,
    ) -> Result<Vec<RawRecord>, MarketImportError> {
        let mut rows = TrackerReader::new(reader)?;
        let mut latest = LatestByKey::new();
        let mut scanned: u64 = 0;

        while let Some(row) = rows.read_row()? {
            scanned += 1;
            let Some(key) = self.scope.eligible_key(
                level,
                row.get("state_code"),
                row.get("region"),
                row.get("property_type"),
            ) else {
                continue;
            };

            latest.offer_with(&key, row.get("period_end").trim(), || row.to_raw());
        }

        info!(
            level = level.label(),
            scanned,
            regions = latest.len(),
            "market tracker extract scanned"
        );
        Ok(latest.into_values())
    }
}

impl Default for MarketTrackerImporter {
    fn default() -> Self {
        Self::new(MarketScope::south_jersey())
    }
}
