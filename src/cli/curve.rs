use std::path::PathBuf;

use clap::Parser;
use evcharge::{TaperCurve, prelude::*, quantity::ratios::Percentage};

#[derive(Parser)]
pub struct CurveSourceArgs {
    /// TOML file with custom `[[points]]` of `soc` and `rate`, replaces the built-in taper curve.
    #[clap(long = "curve", env = "EVCHARGE_CURVE")]
    pub path: Option<PathBuf>,
}

impl CurveSourceArgs {
    pub fn load(&self) -> Result<TaperCurve> {
        self.path.as_deref().map_or_else(|| Ok(TaperCurve::default()), TaperCurve::read_from)
    }
}

#[derive(Parser)]
pub struct CurveArgs {
    /// Distance between the printed samples, in percentage points.
    #[clap(long = "resolution-percent", default_value = "10", env = "EVCHARGE_CURVE_RESOLUTION_PERCENT")]
    pub resolution: Percentage,

    #[clap(flatten)]
    pub source: CurveSourceArgs,
}
