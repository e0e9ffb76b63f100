mod curve;
mod estimate;

use clap::{Parser, Subcommand};

pub use self::{
    curve::{CurveArgs, CurveSourceArgs},
    estimate::{EstimateArgs, Report},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the charging time, energy, and cost.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Print the taper curve.
    #[clap(name = "curve")]
    Curve(CurveArgs),

    /// List the built-in vehicle presets.
    #[clap(name = "vehicles")]
    Vehicles,
}
