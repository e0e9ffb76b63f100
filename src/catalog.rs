//! Built-in vehicle and charger presets.

use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, price::KilowattHourPrice},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleModel {
    #[value(name = "model-3")]
    #[serde(rename = "model-3")]
    Model3,

    #[value(name = "model-y")]
    ModelY,

    #[value(name = "model-s")]
    ModelS,

    #[value(name = "model-x")]
    ModelX,
}

impl Display for VehicleModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model3 => write!(f, "Model 3"),
            Self::ModelY => write!(f, "Model Y"),
            Self::ModelS => write!(f, "Model S"),
            Self::ModelX => write!(f, "Model X"),
        }
    }
}

impl VehicleModel {
    pub const fn battery_capacity(self) -> KilowattHours {
        match self {
            Self::Model3 => KilowattHours(82.0),
            Self::ModelY => KilowattHours(75.0),
            Self::ModelS | Self::ModelX => KilowattHours(100.0),
        }
    }

    pub const fn charging_rates(self) -> ChargingRates {
        match self {
            Self::Model3 | Self::ModelY | Self::ModelS | Self::ModelX => ChargingRates {
                mobile: Kilowatts(7.6),
                wall: Kilowatts(11.5),
                super_charger: Kilowatts(250.0),
            },
        }
    }

    /// Peak power the vehicle accepts from the charger type.
    pub const fn charging_power(self, charger: ChargerType) -> Kilowatts {
        let rates = self.charging_rates();
        match charger {
            ChargerType::Mobile => rates.mobile,
            ChargerType::Wall => rates.wall,
            ChargerType::Super => rates.super_charger,
        }
    }
}

/// Peak charging power per charger type.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ChargingRates {
    pub mobile: Kilowatts,
    pub wall: Kilowatts,
    pub super_charger: Kilowatts,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChargerType {
    /// Portable charger plugged into a household outlet.
    Mobile,

    /// Home wall charger.
    Wall,

    /// Public DC fast charger with a fixed power and price.
    Super,
}

impl Display for ChargerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mobile => write!(f, "Mobile Charger"),
            Self::Wall => write!(f, "Wall Charger"),
            Self::Super => write!(f, "Super Charger"),
        }
    }
}

impl ChargerType {
    /// Lowest power one may request from a home charger.
    pub const MIN_CUSTOM_POWER: Kilowatts = Kilowatts(1.0);

    /// Default electricity price: the average home rate or the supercharger rate.
    pub const fn price(self) -> KilowattHourPrice {
        match self {
            Self::Mobile | Self::Wall => KilowattHourPrice(0.14),
            Self::Super => KilowattHourPrice(0.28),
        }
    }

    /// Supercharger power and price cannot be overridden.
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Super)
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Mobile => Color::Cyan,
            Self::Wall => Color::Green,
            Self::Super => Color::Red,
        }
    }

    /// Resolve the effective charging power, falling back to the vehicle's preset.
    pub fn resolve_power(
        self,
        vehicle: VehicleModel,
        requested: Option<Kilowatts>,
    ) -> Result<Kilowatts> {
        let preset = vehicle.charging_power(self);
        match requested {
            None => Ok(preset),
            Some(requested) if self.is_fixed() => {
                warn!(?requested, ?preset, "the supercharger power is fixed, ignoring the override");
                Ok(preset)
            }
            Some(requested) => {
                if !requested.is_finite() || !(Self::MIN_CUSTOM_POWER..=preset).contains(&requested) {
                    bail!(
                        "{} power must be within {}..={}, got {requested}",
                        self,
                        Self::MIN_CUSTOM_POWER,
                        preset,
                    );
                }
                Ok(requested)
            }
        }
    }

    /// Resolve the effective electricity price, falling back to the charger's default.
    pub fn resolve_price(self, requested: Option<KilowattHourPrice>) -> Result<KilowattHourPrice> {
        match requested {
            None => Ok(self.price()),
            Some(requested) if self.is_fixed() => {
                warn!(?requested, "the supercharger price is fixed, ignoring the override");
                Ok(self.price())
            }
            Some(requested) => {
                if !requested.is_finite() || requested < KilowattHourPrice::ZERO {
                    bail!("electricity price must not be negative, got {requested}");
                }
                Ok(requested)
            }
        }
    }
}
