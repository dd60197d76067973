use anyhow::Context;
use clap::Parser;

use marketday_cli::{Args, Manifest};

fn main() -> anyhow::Result<()> {
    marketday_observability::init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("failed to read manifest {}", args.manifest.display()))?;
    let manifest = Manifest::from_json(&raw)?;

    let policy = args.overstock_policy(manifest.overstock_policy.unwrap_or_default());
    let event = manifest
        .build(policy)
        .with_context(|| format!("failed to build event from {}", args.manifest.display()))?;

    tracing::info!(
        event = %event.name(),
        trucks = event.food_trucks().len(),
        quantity_threshold = policy.quantity_threshold,
        min_sellers = policy.min_sellers,
        "loaded market"
    );

    let report = event.report();
    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");

    Ok(())
}
