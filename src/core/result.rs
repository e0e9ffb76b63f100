use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::{cost::Cost, energy::KilowattHours, time::Minutes};

/// Outcome of a single estimation.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ChargingResult {
    /// Unrounded time to reach the target.
    pub elapsed: Minutes,

    pub energy: KilowattHours,
    pub cost: Cost,
}

impl ChargingResult {
    pub fn duration(&self) -> ChargingDuration {
        ChargingDuration::from(self.elapsed)
    }

    /// Energy as displayed, to one decimal place.
    pub fn rounded_energy(&self) -> KilowattHours {
        self.energy.round_to_tenths()
    }

    /// Cost as displayed, to cents.
    pub fn rounded_cost(&self) -> Cost {
        self.cost.round_to_cents()
    }
}

/// Elapsed time split into whole hours and the rounded remainder.
///
/// The remainder is rounded independently, so it may read 60 minutes.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChargingDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl From<Minutes> for ChargingDuration {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(elapsed: Minutes) -> Self {
        let elapsed = elapsed.0.max(0.0);
        Self { hours: (elapsed / 60.0).floor() as u32, minutes: (elapsed % 60.0).round() as u32 }
    }
}

impl Display for ChargingDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} h {} min", self.hours, self.minutes)
    }
}
