use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::domain::{CountyRecord, ZipcodeRecord};
use super::MarketImportError;

pub const COUNTIES_FILE: &str = "counties.json";
pub const ZIPCODES_FILE: &str = "zipcodes.json";

/// Output of one pipeline run: county and zip collections ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub counties: Vec<CountyRecord>,
    pub zipcodes: Vec<ZipcodeRecord>,
}

/// Counts of records touched by an insight overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InsightCoverage {
    pub counties: usize,
    pub zipcodes: usize,
}

impl MarketSnapshot {
    pub fn new(counties: Vec<CountyRecord>, zipcodes: Vec<ZipcodeRecord>) -> Self {
        Self { counties, zipcodes }
    }

    /// Fills `ai_insight` by `slug` or `zipcode`; unknown keys are ignored.
    pub fn apply_insights(&mut self, insights: &HashMap<String, String>) -> InsightCoverage {
        let mut coverage = InsightCoverage::default();

        for county in &mut self.counties {
            if let Some(text) = insights.get(&county.slug) {
                county.ai_insight = Some(text.clone());
                coverage.counties += 1;
            }
        }

        for zipcode in &mut self.zipcodes {
            if let Some(text) = insights.get(&zipcode.zipcode) {
                zipcode.ai_insight = Some(text.clone());
                coverage.zipcodes += 1;
            }
        }

        coverage
    }

    pub fn counties_json(&self) -> Result<String, MarketImportError> {
        Ok(serde_json::to_string_pretty(&self.counties)?)
    }

    pub fn zipcodes_json(&self) -> Result<String, MarketImportError> {
        Ok(serde_json::to_string_pretty(&self.zipcodes)?)
    }

    /// Writes `counties.json` and `zipcodes.json` into `dir`, creating it if needed.
    pub fn write_json<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>, MarketImportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let counties_path = dir.join(COUNTIES_FILE);
        fs::write(&counties_path, self.counties_json()?)?;

        let zipcodes_path = dir.join(ZIPCODES_FILE);
        fs::write(&zipcodes_path, self.zipcodes_json()?)?;

        Ok(vec![counties_path, zipcodes_path])
    }
}

/// Reads a JSON object of key to insight text.
pub fn read_insights<R: Read>(reader: R) -> Result<HashMap<String, String>, MarketImportError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::market::classify::{MarketType, TrendDirection};
    use crate::workflows::market::domain::RegionMetrics;
    use std::io::Cursor;

    fn county(slug: &str) -> CountyRecord {
        CountyRecord {
            region: "Camden County".to_string(),
            slug: slug.to_string(),
            county: "Camden County".to_string(),
            state: "New Jersey".to_string(),
            state_code: "NJ".to_string(),
            period_end: "2024-03-31".to_string(),
            last_updated: "2024-04-14".to_string(),
            metrics: RegionMetrics::default(),
            market_type: MarketType::Balanced,
            trend_direction: TrendDirection::Stable,
            ai_insight: None,
        }
    }

    #[test]
    fn insights_apply_by_key() {
        let mut snapshot = MarketSnapshot::new(vec![county("camden-county")], Vec::new());
        let insights = read_insights(Cursor::new(
            r#"{"camden-county": "Inventory remains tight.", "08054": "unused"}"#,
        ))
        .expect("insights parse");

        let coverage = snapshot.apply_insights(&insights);

        assert_eq!(coverage, InsightCoverage { counties: 1, zipcodes: 0 });
        assert_eq!(
            snapshot.counties[0].ai_insight.as_deref(),
            Some("Inventory remains tight.")
        );
    }

    #[test]
    fn absent_metrics_serialize_as_null_and_insight_is_omitted() {
        let snapshot = MarketSnapshot::new(vec![county("camden-county")], Vec::new());
        let json: serde_json::Value =
            serde_json::from_str(&snapshot.counties_json().expect("serialize")).expect("json");

        let record = &json[0];
        assert!(record["median_sale_price"].is_null());
        assert_eq!(record["market_type"], "balanced");
        assert_eq!(record["trend_direction"], "stable");
        assert!(record.get("ai_insight").is_none());
    }
}
