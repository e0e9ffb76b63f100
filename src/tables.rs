use clap::ValueEnum;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use evcharge::{
    ChargingResult,
    ChargingSession,
    catalog::{ChargerType, VehicleModel},
    quantity::ratios::Percentage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_estimate_table(
    vehicle: VehicleModel,
    charger: ChargerType,
    session: &ChargingSession,
    result: &ChargingResult,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Vehicle", "Charger", "Power", "Price", "Start", "Target", "Time", "Energy", "Cost",
    ]);
    table.add_row(vec![
        Cell::new(vehicle),
        Cell::new(charger).fg(charger.color()),
        Cell::new(session.max_charging_power).set_alignment(CellAlignment::Right),
        Cell::new(session.price).set_alignment(CellAlignment::Right),
        Cell::new(session.start).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        Cell::new(session.target).set_alignment(CellAlignment::Right),
        Cell::new(result.duration()).add_attribute(Attribute::Bold),
        Cell::new(result.rounded_energy()).set_alignment(CellAlignment::Right),
        Cell::new(result.rounded_cost()).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_curve_table(samples: impl IntoIterator<Item = (Percentage, Percentage)>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["SoC", "Rate", ""]);
    for (soc, rate) in samples {
        let color = if rate >= Percentage(85.0) {
            Color::Green
        } else if rate >= Percentage(40.0) {
            Color::DarkYellow
        } else {
            Color::Red
        };
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar = "█".repeat((rate.0 / 2.5).round() as usize);
        table.add_row(vec![
            Cell::new(soc).set_alignment(CellAlignment::Right),
            Cell::new(rate).set_alignment(CellAlignment::Right).fg(color),
            Cell::new(bar).fg(color),
        ]);
    }
    table
}

pub fn build_vehicles_table() -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Vehicle"),
        Cell::new("Capacity"),
        Cell::new(ChargerType::Mobile).fg(ChargerType::Mobile.color()),
        Cell::new(ChargerType::Wall).fg(ChargerType::Wall.color()),
        Cell::new(ChargerType::Super).fg(ChargerType::Super.color()),
    ]);
    for vehicle in VehicleModel::value_variants() {
        let rates = vehicle.charging_rates();
        table.add_row(vec![
            Cell::new(vehicle),
            Cell::new(vehicle.battery_capacity()).set_alignment(CellAlignment::Right),
            Cell::new(rates.mobile).set_alignment(CellAlignment::Right),
            Cell::new(rates.wall).set_alignment(CellAlignment::Right),
            Cell::new(rates.super_charger).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
