use std::path::PathBuf;

use clap::Parser;

use marketday_inventory::OverstockPolicy;

/// Report on a market event described by a JSON manifest.
#[derive(Debug, Clone, Parser)]
#[command(name = "marketday", version)]
pub struct Args {
    /// Path to the market manifest (JSON).
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Aggregate quantity an item must exceed to count as overstocked.
    #[arg(long, env = "MARKETDAY_OVERSTOCK_THRESHOLD")]
    pub overstock_threshold: Option<u64>,

    /// Minimum number of trucks carrying an item for it to count as overstocked.
    #[arg(long, env = "MARKETDAY_MIN_SELLERS")]
    pub min_sellers: Option<usize>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Apply command-line overrides on top of `base`.
    pub fn overstock_policy(&self, base: OverstockPolicy) -> OverstockPolicy {
        OverstockPolicy {
            quantity_threshold: self.overstock_threshold.unwrap_or(base.quantity_threshold),
            min_sellers: self.min_sellers.unwrap_or(base.min_sellers),
        }
    }
}
