use bon::Builder;
use serde::Serialize;

use crate::{
    core::{curve::TaperCurve, result::ChargingResult, session::ChargingSession},
    prelude::*,
    quantity::{power::Kilowatts, ratios::Percentage, time::Minutes},
};

/// Width of the last integration increment.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IncrementPolicy {
    /// Every increment is one full step wide, even if it runs past the target.
    ///
    /// This may overshoot the target by less than one step when the range is not a multiple of the step.
    #[default]
    FixedStep,

    /// The last increment stops exactly at the target.
    Clamped,
}

/// Integrates the taper curve over the requested state-of-charge range.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Estimator {
    #[builder(default)]
    curve: TaperCurve,

    /// Integration step in percentage points.
    #[builder(default = Estimator::DEFAULT_STEP)]
    step: Percentage,

    #[builder(default)]
    increment_policy: IncrementPolicy,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Estimator {
    pub const DEFAULT_STEP: Percentage = Percentage(0.5);

    /// Estimate the charging time, energy, and cost.
    ///
    /// The time is a [left Riemann sum][1]: the curve is queried at the start of every increment,
    /// and the power is assumed constant across the increment. Since the power only goes down as the state of
    /// charge rises, a smaller step results in a slightly longer and more accurate estimate.
    ///
    /// A target at or below the start yields a zero result.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Riemann_sum#Left_rule
    #[instrument(skip_all, fields(start = ?session.start, target = ?session.target))]
    pub fn estimate(&self, session: &ChargingSession) -> Result<ChargingResult> {
        session.validate()?;
        ensure!(
            self.step.is_finite() && self.step > Percentage::ZERO,
            "integration step must be positive, got {:?}",
            self.step,
        );

        let mut elapsed = Minutes::ZERO;
        let mut soc = session.start;
        while soc < session.target {
            let width = match self.increment_policy {
                IncrementPolicy::FixedStep => self.step,
                IncrementPolicy::Clamped => self.step.min(session.target - soc),
            };
            let rate = self.curve.rate_fraction(soc);
            let power = session.max_charging_power * rate;
            if power <= Kilowatts::ZERO {
                bail!("the battery does not accept any power at {soc:?}");
            }
            elapsed += Minutes::from(session.battery_capacity * width / power);
            trace!(?soc, ?rate, ?power, ?elapsed);
            soc += self.step;
        }

        let energy = session.energy();
        let result = ChargingResult { elapsed, energy, cost: energy * session.price };
        debug!(?result.elapsed, ?result.energy, ?result.cost, "estimated");
        Ok(result)
    }
}
