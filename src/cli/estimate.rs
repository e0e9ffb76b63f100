use clap::Parser;
use evcharge::{
    ChargingDuration,
    ChargingResult,
    ChargingSession,
    Estimator,
    IncrementPolicy,
    catalog::{ChargerType, VehicleModel},
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        price::KilowattHourPrice,
        ratios::Percentage,
        time::Minutes,
    },
};
use serde::Serialize;

use crate::cli::CurveSourceArgs;

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(long, default_value = "model-3", env = "EVCHARGE_VEHICLE")]
    pub vehicle: VehicleModel,

    #[clap(long, default_value = "wall", env = "EVCHARGE_CHARGER")]
    pub charger: ChargerType,

    /// Initial state of charge.
    #[clap(long = "start-percent", default_value = "20", env = "EVCHARGE_START_PERCENT")]
    pub start: Percentage,

    /// Requested state of charge.
    #[clap(long = "target-percent", default_value = "80", env = "EVCHARGE_TARGET_PERCENT")]
    pub target: Percentage,

    /// Charging power override in kilowatts, up to the charger maximum. Ignored for superchargers.
    #[clap(long = "charging-power-kw", env = "EVCHARGE_CHARGING_POWER_KW")]
    pub charging_power: Option<Kilowatts>,

    /// Electricity price override per kilowatt-hour. Ignored for superchargers.
    #[clap(long = "price-per-kwh", env = "EVCHARGE_PRICE_PER_KWH")]
    pub price: Option<KilowattHourPrice>,

    #[clap(flatten)]
    pub integration: IntegrationArgs,

    /// Print the result as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl EstimateArgs {
    /// Build the session from the presets and the overrides.
    pub fn session(&self) -> Result<ChargingSession> {
        if self.target <= self.start {
            bail!(
                "the target state of charge ({}) must be above the start ({})",
                self.target,
                self.start,
            );
        }
        Ok(ChargingSession::builder()
            .battery_capacity(self.vehicle.battery_capacity())
            .max_charging_power(self.charger.resolve_power(self.vehicle, self.charging_power)?)
            .start(self.start)
            .target(self.target)
            .price(self.charger.resolve_price(self.price)?)
            .build())
    }
}

#[derive(Parser)]
pub struct IntegrationArgs {
    /// Integration step in percentage points.
    #[clap(long = "step-percent", default_value = "0.5", env = "EVCHARGE_STEP_PERCENT")]
    pub step: Percentage,

    #[clap(
        long = "increment-policy",
        value_enum,
        default_value = "fixed-step",
        env = "EVCHARGE_INCREMENT_POLICY"
    )]
    pub increment_policy: IncrementPolicy,

    #[clap(flatten)]
    pub curve: CurveSourceArgs,
}

impl IntegrationArgs {
    pub fn estimator(&self) -> Result<Estimator> {
        Ok(Estimator::builder()
            .curve(self.curve.load()?)
            .step(self.step)
            .increment_policy(self.increment_policy)
            .build())
    }
}

/// Machine-readable estimation output.
#[derive(Serialize)]
pub struct Report<'a> {
    pub vehicle: VehicleModel,
    pub charger: ChargerType,
    pub session: &'a ChargingSession,

    /// Unrounded.
    pub elapsed_minutes: Minutes,

    pub duration: ChargingDuration,
    pub energy_kwh: KilowattHours,
    pub cost: Cost,
}

impl<'a> Report<'a> {
    pub fn new(args: &EstimateArgs, session: &'a ChargingSession, result: &ChargingResult) -> Self {
        Self {
            vehicle: args.vehicle,
            charger: args.charger,
            session,
            elapsed_minutes: result.elapsed,
            duration: result.duration(),
            energy_kwh: result.rounded_energy(),
            cost: result.rounded_cost(),
        }
    }
}
