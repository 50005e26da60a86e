//! Predict command - one-shot prediction without a browser

use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;
use serde_json::json;

use crate::config::AppConfig;
use crate::domain::{LocationType, PredictionRequest, RegionCode, StoreType};
use crate::infrastructure::{ArtifactBundle, PredictorService};

/// Arguments for the predict command
#[derive(Args, Clone)]
pub struct PredictArgs {
    /// Store identifier (1-365)
    #[arg(long)]
    pub store_id: u32,

    /// Store type (S1-S4)
    #[arg(long)]
    pub store_type: StoreType,

    /// Location type (L1-L3)
    #[arg(long)]
    pub location_type: LocationType,

    /// Region code (R1-R4)
    #[arg(long)]
    pub region_code: RegionCode,

    /// Holiday on the selected date
    #[arg(long)]
    pub holiday: bool,

    /// Discount applied
    #[arg(long)]
    pub discount: bool,

    /// Date to predict for (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
}

/// Load the artifacts, run one prediction, print the result as JSON
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();

    if !(1..=365).contains(&args.store_id) {
        anyhow::bail!("store_id must be between 1 and 365");
    }

    let bundle = ArtifactBundle::load(&config.artifacts)?;
    let predictor = PredictorService::new(Arc::new(bundle));

    let request = PredictionRequest {
        store_id: args.store_id,
        store_type: args.store_type,
        location_type: args.location_type,
        region_code: args.region_code,
        holiday: args.holiday,
        discount: args.discount,
        date: args.date,
    };

    let prediction = predictor.predict(&request)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "request": request,
            "predicted_sales": prediction.sales,
        }))?
    );

    Ok(())
}
