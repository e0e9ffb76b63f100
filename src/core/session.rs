use bon::Builder;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{
        energy::KilowattHours,
        power::Kilowatts,
        price::KilowattHourPrice,
        ratios::Percentage,
    },
};

/// Parameters of a single charging calculation.
#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize)]
pub struct ChargingSession {
    pub battery_capacity: KilowattHours,

    /// Peak power that the charger and the vehicle can sustain together.
    pub max_charging_power: Kilowatts,

    /// Initial state of charge.
    pub start: Percentage,

    /// Requested state of charge.
    pub target: Percentage,

    pub price: KilowattHourPrice,
}

impl ChargingSession {
    pub fn validate(&self) -> Result {
        if !self.battery_capacity.is_finite() || self.battery_capacity <= KilowattHours::ZERO {
            bail!("battery capacity must be positive, got {:?}", self.battery_capacity);
        }
        if !self.max_charging_power.is_finite() || self.max_charging_power <= Kilowatts::ZERO {
            bail!("charging power must be positive, got {:?}", self.max_charging_power);
        }
        if !self.price.is_finite() || self.price < KilowattHourPrice::ZERO {
            bail!("electricity price must not be negative, got {:?}", self.price);
        }
        ensure!(self.start.is_within_bounds(), "invalid start state of charge: {:?}", self.start);
        ensure!(self.target.is_within_bounds(), "invalid target state of charge: {:?}", self.target);
        Ok(())
    }

    /// Energy needed to go from the start to the target state of charge.
    ///
    /// The taper only affects the time, not the energy. Reversed ranges deliver nothing.
    pub fn energy(&self) -> KilowattHours {
        (self.battery_capacity * (self.target - self.start)).max(KilowattHours::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn session() -> ChargingSession {
        ChargingSession::builder()
            .battery_capacity(KilowattHours(82.0))
            .max_charging_power(Kilowatts(11.5))
            .start(Percentage(20.0))
            .target(Percentage(80.0))
            .price(KilowattHourPrice(0.14))
            .build()
    }

    #[test]
    fn validate_ok() {
        session().validate().unwrap();
        ChargingSession { price: KilowattHourPrice::ZERO, ..session() }.validate().unwrap();
    }

    #[test]
    fn validate_rejects_capacity() {
        assert!(ChargingSession { battery_capacity: KilowattHours::ZERO, ..session() }.validate().is_err());
        assert!(
            ChargingSession { battery_capacity: KilowattHours(f64::NAN), ..session() }
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_rejects_power() {
        assert!(ChargingSession { max_charging_power: Kilowatts(-1.0), ..session() }.validate().is_err());
        assert!(
            ChargingSession { max_charging_power: Kilowatts(f64::INFINITY), ..session() }
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_rejects_price() {
        assert!(ChargingSession { price: KilowattHourPrice(-0.01), ..session() }.validate().is_err());
        assert!(ChargingSession { price: KilowattHourPrice(f64::NAN), ..session() }.validate().is_err());
    }

    #[test]
    fn validate_rejects_state_of_charge() {
        assert!(ChargingSession { start: Percentage(-1.0), ..session() }.validate().is_err());
        assert!(ChargingSession { target: Percentage(101.0), ..session() }.validate().is_err());
    }

    #[test]
    fn energy_ok() {
        assert_abs_diff_eq!(session().energy().0, 49.2, epsilon = 1e-12);
    }

    #[test]
    fn reversed_energy_is_zero() {
        let session = ChargingSession { start: Percentage(80.0), target: Percentage(20.0), ..session() };
        assert_eq!(session.energy(), KilowattHours::ZERO);
    }
}
