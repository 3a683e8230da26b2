use std::fs;
use std::path::PathBuf;

use realty_pulse::workflows::market::{
    read_insights, MarketScope, MarketSnapshot, MarketTrackerImporter, MarketType,
    TrendDirection, ZipGeography, COUNTIES_FILE, ZIPCODES_FILE,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn importer() -> MarketTrackerImporter {
    MarketTrackerImporter::new(MarketScope::south_jersey())
}

fn geography() -> ZipGeography {
    ZipGeography::from_path(fixture("zip_geography.csv")).expect("geography loads")
}

fn build_snapshot() -> MarketSnapshot {
    let importer = importer();
    let counties = importer
        .counties_from_path(fixture("county_market_tracker.tsv"))
        .expect("county extract imports");
    let zipcodes = importer
        .zipcodes_from_path(fixture("zip_market_tracker.tsv"), &geography())
        .expect("zip extract imports");
    MarketSnapshot::new(counties, zipcodes)
}

#[test]
fn county_extract_keeps_latest_in_scope_rows() {
    let snapshot = build_snapshot();
    let slugs: Vec<&str> = snapshot
        .counties
        .iter()
        .map(|county| county.slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["burlington-county", "camden-county", "cape-may-county"]);

    let burlington = &snapshot.counties[0];
    assert_eq!(burlington.region, "Burlington County");
    assert_eq!(burlington.period_end, "2024-03-31");
    assert_eq!(burlington.last_updated, "2024-04-14 14:20:11");
    assert_eq!(burlington.metrics.median_sale_price, Some(372500.0));
    assert_eq!(burlington.metrics.inventory, Some(1302.0));
    assert_eq!(burlington.metrics.sold_above_list_pct, Some(50.0));
    assert_eq!(burlington.market_type, MarketType::Seller);
    assert_eq!(burlington.trend_direction, TrendDirection::Up);

    let camden = &snapshot.counties[1];
    assert_eq!(camden.metrics.months_of_supply, None);
    assert_eq!(camden.metrics.median_list_price_yoy, None);
    assert_eq!(camden.market_type, MarketType::Balanced);
    assert_eq!(camden.trend_direction, TrendDirection::Stable);

    let cape_may = &snapshot.counties[2];
    assert_eq!(cape_may.market_type, MarketType::Buyer);
    assert_eq!(cape_may.trend_direction, TrendDirection::Down);
}

#[test]
fn zip_extract_resolves_counties_and_links_neighbors() {
    let snapshot = build_snapshot();
    let zips: Vec<&str> = snapshot
        .zipcodes
        .iter()
        .map(|zip| zip.zipcode.as_str())
        .collect();
    assert_eq!(
        zips,
        vec!["08054", "08010", "08016", "08012", "08003", "08002", "08007", "08009"]
    );

    let mount_laurel = &snapshot.zipcodes[0];
    assert_eq!(mount_laurel.period_end, "2024-03-31");
    assert_eq!(mount_laurel.metrics.median_sale_price, Some(415000.0));
    assert_eq!(mount_laurel.county, "Burlington County");
    assert_eq!(mount_laurel.city.as_deref(), Some("Mount Laurel"));
    assert_eq!(mount_laurel.market_type, MarketType::Seller);
    assert_eq!(mount_laurel.trend_direction, TrendDirection::Up);
    assert!(mount_laurel.nearby_zips.is_empty());

    let beverly = &snapshot.zipcodes[1];
    assert_eq!(beverly.metrics.months_of_supply, None);
    assert_eq!(beverly.market_type, MarketType::Balanced);
    assert_eq!(beverly.trend_direction, TrendDirection::Stable);
    assert_eq!(beverly.nearby_zips, vec!["08016", "08012", "08003", "08002"]);

    let burlington = &snapshot.zipcodes[2];
    assert_eq!(burlington.market_type, MarketType::Buyer);
    assert_eq!(burlington.trend_direction, TrendDirection::Down);
    assert_eq!(burlington.nearby_zips, vec!["08010", "08012", "08007", "08009"]);

    let barrington = &snapshot.zipcodes[6];
    assert_eq!(barrington.county, "Camden County");
    assert!(snapshot.zipcodes[7].city.is_none());
    assert!(snapshot
        .zipcodes
        .iter()
        .all(|zip| zip.nearby_zips.len() <= 4));
}

#[test]
fn repeated_runs_produce_identical_output() {
    let first = build_snapshot();
    let second = build_snapshot();

    assert_eq!(
        first.counties_json().expect("serialize"),
        second.counties_json().expect("serialize")
    );
    assert_eq!(
        first.zipcodes_json().expect("serialize"),
        second.zipcodes_json().expect("serialize")
    );
}

#[test]
fn snapshot_writes_enriched_json_files() {
    let mut snapshot = build_snapshot();
    let insights =
        read_insights(fs::File::open(fixture("insights.json")).expect("insights fixture"))
            .expect("insights parse");
    let coverage = snapshot.apply_insights(&insights);
    assert_eq!(coverage.counties, 1);
    assert_eq!(coverage.zipcodes, 1);

    let dir = std::env::temp_dir().join(format!("realty-pulse-snapshot-{}", std::process::id()));
    let written = snapshot.write_json(&dir).expect("snapshot writes");
    assert_eq!(written, vec![dir.join(COUNTIES_FILE), dir.join(ZIPCODES_FILE)]);

    let counties: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join(COUNTIES_FILE)).expect("read"))
            .expect("json");
    assert_eq!(counties[0]["slug"], "burlington-county");
    assert!(counties[0]["ai_insight"]
        .as_str()
        .expect("insight present")
        .starts_with("Inventory is down"));
    assert!(counties[1].get("ai_insight").is_none());
    assert!(counties[1]["months_of_supply"].is_null());

    let zipcodes: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join(ZIPCODES_FILE)).expect("read"))
            .expect("json");
    assert_eq!(zipcodes[0]["zipcode"], "08054");
    assert_eq!(zipcodes[0]["market_type"], "seller");
    assert!(zipcodes[0]["ai_insight"].is_string());
    assert_eq!(zipcodes[1]["nearby_zips"].as_array().map(Vec::len), Some(4));

    fs::remove_dir_all(&dir).ok();
}
