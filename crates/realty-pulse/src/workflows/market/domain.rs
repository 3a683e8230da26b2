use std::collections::HashMap;

use serde::Serialize;

use super::classify::{MarketType, TrendDirection};

/// One extract line keyed by normalized header name, cells already unquoted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Missing columns read as blank so they parse to absent values.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

/// Reporting-period metrics; every value is optional and absence is never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionMetrics {
    pub median_sale_price: Option<f64>,
    pub median_sale_price_yoy: Option<f64>,
    pub median_list_price: Option<f64>,
    pub median_list_price_yoy: Option<f64>,
    pub inventory: Option<f64>,
    pub inventory_yoy: Option<f64>,
    pub months_of_supply: Option<f64>,
    pub months_of_supply_yoy: Option<f64>,
    pub median_dom: Option<f64>,
    pub median_dom_yoy: Option<f64>,
    pub homes_sold: Option<f64>,
    pub homes_sold_yoy: Option<f64>,
    pub sold_above_list_pct: Option<f64>,
    pub sold_above_list_yoy: Option<f64>,
    pub price_drops_pct: Option<f64>,
    pub price_drops_yoy: Option<f64>,
}

/// Normalized county-level market snapshot for the latest reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyRecord {
    pub region: String,
    pub slug: String,
    pub county: String,
    pub state: String,
    pub state_code: String,
    pub period_end: String,
    pub last_updated: String,
    #[serde(flatten)]
    pub metrics: RegionMetrics,
    pub market_type: MarketType,
    pub trend_direction: TrendDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

/// Normalized zip-level market snapshot, linked to nearby zip codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZipcodeRecord {
    pub region: String,
    pub zipcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub county: String,
    pub state: String,
    pub state_code: String,
    pub period_end: String,
    pub last_updated: String,
    #[serde(flatten)]
    pub metrics: RegionMetrics,
    pub market_type: MarketType,
    pub trend_direction: TrendDirection,
    pub nearby_zips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

/// Granularity of a market tracker extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLevel {
    County,
    Zipcode,
}

impl RegionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RegionLevel::County => "county",
            RegionLevel::Zipcode => "zipcode",
        }
    }
}
