use super::classify::{MarketType, TrendDirection};
use super::domain::{CountyRecord, RawRecord, RegionMetrics, ZipcodeRecord};
use super::fields::{parse_number, parse_percent};
use super::geography::ZipGeography;
use super::scope::MarketScope;

const ZIP_REGION_PREFIX: &str = "Zip Code:";

/// Reduces `"Zip Code: 08054"` to `"08054"`; other regions are only trimmed.
pub fn region_key(region: &str) -> &str {
    let trimmed = region.trim();
    trimmed
        .strip_prefix(ZIP_REGION_PREFIX)
        .map(str::trim)
        .unwrap_or(trimmed)
}

pub fn display_name<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Lower-cases, turns each whitespace run into one hyphen, then keeps only `[a-z0-9-]`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }

        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            slug.push(ch);
        }
    }

    slug
}

pub(crate) fn metrics_from(row: &RawRecord) -> RegionMetrics {
    RegionMetrics {
        median_sale_price: parse_number(row.get("median_sale_price")),
        median_sale_price_yoy: parse_percent(row.get("median_sale_price_yoy")),
        median_list_price: parse_number(row.get("median_list_price")),
        median_list_price_yoy: parse_percent(row.get("median_list_price_yoy")),
        inventory: parse_number(row.get("inventory")),
        inventory_yoy: parse_percent(row.get("inventory_yoy")),
        months_of_supply: parse_number(row.get("months_of_supply")),
        months_of_supply_yoy: parse_percent(row.get("months_of_supply_yoy")),
        median_dom: parse_number(row.get("median_dom")),
        median_dom_yoy: parse_percent(row.get("median_dom_yoy")),
        homes_sold: parse_number(row.get("homes_sold")),
        homes_sold_yoy: parse_percent(row.get("homes_sold_yoy")),
        sold_above_list_pct: parse_percent(row.get("sold_above_list")),
        sold_above_list_yoy: parse_percent(row.get("sold_above_list_yoy")),
        price_drops_pct: parse_percent(row.get("price_drops")),
        price_drops_yoy: parse_percent(row.get("price_drops_yoy")),
    }
}

fn classify(metrics: &RegionMetrics) -> (MarketType, TrendDirection) {
    (
        MarketType::from_months_of_supply(metrics.months_of_supply),
        TrendDirection::from_price_yoy(metrics.median_sale_price_yoy),
    )
}

pub(crate) fn county_record(row: &RawRecord, scope: &MarketScope) -> CountyRecord {
    let suffix = scope.jurisdiction_suffix();
    let name = display_name(row.get("region").trim(), &suffix).to_string();
    let metrics = metrics_from(row);
    let (market_type, trend_direction) = classify(&metrics);

    CountyRecord {
        slug: slugify(&name),
        county: name.clone(),
        region: name,
        state: row.get("state").trim().to_string(),
        state_code: row.get("state_code").trim().to_string(),
        period_end: row.get("period_end").trim().to_string(),
        last_updated: row.get("last_updated").trim().to_string(),
        metrics,
        market_type,
        trend_direction,
        ai_insight: None,
    }
}

/// Returns `None` when the zip code has no known county.
pub(crate) fn zipcode_record(
    row: &RawRecord,
    scope: &MarketScope,
    geography: &ZipGeography,
) -> Option<ZipcodeRecord> {
    let zipcode = region_key(row.get("region")).to_string();
    let place = geography.resolve(&zipcode)?;
    let suffix = scope.jurisdiction_suffix();

    let row_city = row.get("city").trim();
    let city = place
        .city
        .clone()
        .or_else(|| (!row_city.is_empty()).then(|| display_name(row_city, &suffix).to_string()));

    let metrics = metrics_from(row);
    let (market_type, trend_direction) = classify(&metrics);

    Some(ZipcodeRecord {
        region: zipcode.clone(),
        zipcode,
        city,
        county: display_name(&place.county, &suffix).to_string(),
        state: row.get("state").trim().to_string(),
        state_code: row.get("state_code").trim().to_string(),
        period_end: row.get("period_end").trim().to_string(),
        last_updated: row.get("last_updated").trim().to_string(),
        metrics,
        market_type,
        trend_direction,
        nearby_zips: Vec::new(),
        ai_insight: None,
    })
}
