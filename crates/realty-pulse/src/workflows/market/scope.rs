use std::collections::BTreeSet;

use super::domain::RegionLevel;
use super::transform::{display_name, region_key, slugify};

const STANDARD_STATE_CODE: &str = "NJ";
const STANDARD_PROPERTY_TYPE: &str = "All Residential";

const SOUTH_JERSEY_COUNTIES: &[&str] = &[
    "Atlantic County",
    "Burlington County",
    "Camden County",
    "Cape May County",
    "Cumberland County",
    "Gloucester County",
    "Mercer County",
    "Ocean County",
    "Salem County",
];

const SOUTH_JERSEY_ZIPCODES: &[&str] = &[
    "08002", "08003", "08004", "08007", "08009", "08010", "08012", "08016", "08021", "08026",
    "08027", "08028", "08030", "08031", "08033", "08034", "08035", "08036", "08043", "08045",
    "08046", "08048", "08052", "08053", "08054", "08055", "08057", "08059", "08060", "08062",
    "08065", "08071", "08075", "08077", "08078", "08080", "08081", "08083", "08084", "08085",
    "08088", "08091", "08093", "08094", "08096", "08097", "08104", "08105", "08106", "08107",
    "08108", "08109", "08110", "08505", "08510", "08511", "08515", "08518", "08554",
];

/// Jurisdiction, property category, and region allow-lists an extract is filtered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketScope {
    pub state_code: String,
    pub property_type: String,
    pub counties: BTreeSet<String>,
    pub zipcodes: BTreeSet<String>,
}

impl MarketScope {
    pub fn south_jersey() -> Self {
        Self {
            state_code: STANDARD_STATE_CODE.to_string(),
            property_type: STANDARD_PROPERTY_TYPE.to_string(),
            counties: SOUTH_JERSEY_COUNTIES
                .iter()
                .map(|county| county.to_string())
                .collect(),
            zipcodes: SOUTH_JERSEY_ZIPCODES
                .iter()
                .map(|zipcode| zipcode.to_string())
                .collect(),
        }
    }

    /// Suffix stripped from display names, e.g. `", NJ"`.
    pub fn jurisdiction_suffix(&self) -> String {
        format!(", {}", self.state_code)
    }

    /// Returns the dedup key for an eligible row; ineligible rows yield `None`.
    pub fn eligible_key(
        &self,
        level: RegionLevel,
        state_code: &str,
        region: &str,
        property_type: &str,
    ) -> Option<String> {
        if state_code.trim() != self.state_code || property_type.trim() != self.property_type {
            return None;
        }

        match level {
            RegionLevel::County => {
                let suffix = self.jurisdiction_suffix();
                let name = display_name(region.trim(), &suffix);
                self.counties.contains(name).then(|| slugify(name))
            }
            RegionLevel::Zipcode => {
                let zipcode = region_key(region);
                self.zipcodes
                    .contains(zipcode)
                    .then(|| zipcode.to_string())
            }
        }
    }
}

impl Default for MarketScope {
    fn default() -> Self {
        Self::south_jersey()
    }
}
