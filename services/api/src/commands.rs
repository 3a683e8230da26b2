use clap::Args;
use realty_pulse::config::AppConfig;
use realty_pulse::error::AppError;
use realty_pulse::telemetry;
use realty_pulse::workflows::leads::{LeadScoreResult, LeadScorer, QualificationAnswers};
use realty_pulse::workflows::market::{
    read_insights, MarketScope, MarketSnapshot, MarketTrackerImporter, ZipGeography,
};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct MarketBuildArgs {
    /// County-level market tracker extract (tab-separated)
    #[arg(long)]
    pub(crate) county_tsv: PathBuf,
    /// Zip-level market tracker extract (tab-separated)
    #[arg(long)]
    pub(crate) zip_tsv: PathBuf,
    /// zipcode,county,city lookup used to place zip codes
    #[arg(long)]
    pub(crate) geography: PathBuf,
    /// Optional JSON object of slug or zip code to insight text
    #[arg(long)]
    pub(crate) insights: Option<PathBuf>,
    /// Directory receiving counties.json and zipcodes.json
    #[arg(long, default_value = "data")]
    pub(crate) out_dir: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LeadScoreArgs {
    /// JSON answers file; reads stdin when omitted
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

pub(crate) fn run_market_build(args: MarketBuildArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let snapshot = build_snapshot(&args, config.market)?;
    let written = snapshot.write_json(&args.out_dir)?;

    for line in snapshot_summary(&snapshot) {
        println!("{line}");
    }
    for path in written {
        println!("  wrote {}", path.display());
    }

    Ok(())
}

pub(crate) fn snapshot_summary(snapshot: &MarketSnapshot) -> Vec<String> {
    let mut lines = vec![
        "Market snapshot".to_string(),
        format!("  counties: {}", snapshot.counties.len()),
    ];
    for county in &snapshot.counties {
        lines.push(format!(
            "    {}: {}, {}",
            county.slug,
            county.market_type.label(),
            county.trend_direction.label()
        ));
    }
    lines.push(format!("  zip codes: {}", snapshot.zipcodes.len()));
    lines
}

pub(crate) fn build_snapshot(
    args: &MarketBuildArgs,
    scope: MarketScope,
) -> Result<MarketSnapshot, AppError> {
    let importer = MarketTrackerImporter::new(scope);
    let geography = ZipGeography::from_path(&args.geography)?;

    let counties = importer.counties_from_path(&args.county_tsv)?;
    let zipcodes = importer.zipcodes_from_path(&args.zip_tsv, &geography)?;
    let mut snapshot = MarketSnapshot::new(counties, zipcodes);

    if let Some(path) = &args.insights {
        let insights = read_insights(File::open(path)?)?;
        let coverage = snapshot.apply_insights(&insights);
        info!(
            counties = coverage.counties,
            zipcodes = coverage.zipcodes,
            "insights applied"
        );
    }

    Ok(snapshot)
}

pub(crate) fn run_lead_score(args: LeadScoreArgs) -> Result<(), AppError> {
    let result = match args.input {
        Some(path) => score_answers(File::open(path)?)?,
        None => score_answers(io::stdin().lock())?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn score_answers<R: Read>(reader: R) -> Result<LeadScoreResult, AppError> {
    let answers: QualificationAnswers = serde_json::from_reader(reader)?;
    Ok(LeadScorer::default().score(&answers))
}
