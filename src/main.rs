mod cli;
mod tables;

use clap::{Parser, crate_version};
use evcharge::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, EstimateArgs, Report},
    tables::{build_curve_table, build_estimate_table, build_vehicles_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => {
            estimate(&args)?;
        }
        Command::Curve(args) => {
            let curve = args.source.load()?;
            println!("{}", build_curve_table(curve.sample(args.resolution)?));
        }
        Command::Vehicles => {
            println!("{}", build_vehicles_table());
        }
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(vehicle = %args.vehicle, charger = %args.charger))]
fn estimate(args: &EstimateArgs) -> Result {
    let session = args.session()?;
    let estimator = args.integration.estimator()?;
    let result = estimator.estimate(&session).context("failed to estimate the charging time")?;
    info!(elapsed = ?result.elapsed, duration = %result.duration(), "estimated");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&Report::new(args, &session, &result))?);
    } else {
        println!("{}", build_estimate_table(args.vehicle, args.charger, &session, &result));
    }
    Ok(())
}
