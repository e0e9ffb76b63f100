use std::ops::Mul;

use crate::quantity::ratios::Percentage;

quantity!(Kilowatts, via: f64, suffix: "kW", precision: 1);

/// Fraction of the nominal power.
impl Mul<Percentage> for Kilowatts {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        Self(self.0 * percentage.to_ratio())
    }
}
