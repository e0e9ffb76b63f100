use std::ops::Mul;

use crate::quantity::{
    cost::Cost,
    power::Kilowatts,
    price::KilowattHourPrice,
    ratios::Percentage,
    time::Hours,
};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 1);

implement_mul!(KilowattHours, KilowattHourPrice, Cost);
implement_div!(KilowattHours, Kilowatts, Hours);

impl KilowattHours {
    /// Round to one decimal place, as the energy is displayed.
    pub fn round_to_tenths(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }
}

/// Share of the energy, for example, of a battery capacity.
impl Mul<Percentage> for KilowattHours {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        Self(self.0 * percentage.0 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn share_of_capacity_ok() {
        assert_abs_diff_eq!((KilowattHours(82.0) * Percentage(60.0)).0, 49.2, epsilon = 1e-12);
    }

    #[test]
    fn time_to_deliver_ok() {
        assert_abs_diff_eq!((KilowattHours(23.0) / Kilowatts(11.5)).0, 2.0);
    }

    #[test]
    fn cost_ok() {
        assert_abs_diff_eq!((KilowattHours(60.0) * KilowattHourPrice(0.28)).0, 16.8, epsilon = 1e-12);
    }

    #[test]
    fn round_to_tenths_ok() {
        assert_abs_diff_eq!(KilowattHours(49.249_999).round_to_tenths().0, 49.2);
        assert_abs_diff_eq!(KilowattHours(0.06).round_to_tenths().0, 0.1);
    }
}
