use crate::support::hx::FlowConfiguration;
use uom::si::{
    f64::{HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{ExchangerInput, FluidStream};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn water(inlet: f64, outlet: f64, mass_rate: f64) -> FluidStream {
    FluidStream::new(
        celsius(inlet),
        celsius(outlet),
        MassRate::new::<kilogram_per_second>(mass_rate),
        SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
    )
}

/// Hot water cooled from 150 °C to 90 °C at 2.5 kg/s.
pub(super) fn hot_stream() -> FluidStream {
    water(150.0, 90.0, 2.5)
}

pub(super) fn u() -> HeatTransfer {
    HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0)
}

/// The default operating point of the design form.
///
/// The cold stream (3 kg/s, 25 °C to 70 °C) absorbs 564.3 kW against the
/// 627 kW released by the hot stream, so the balances disagree by ~10.5 %.
pub(super) fn reference_input(configuration: FlowConfiguration) -> ExchangerInput {
    ExchangerInput::new(hot_stream(), water(25.0, 70.0, 3.0), u(), configuration)
        .expect("reference input is valid")
}

/// Like [`reference_input`] with the cold outlet at 75 °C, so both streams
/// carry 627 kW.
pub(super) fn balanced_input(configuration: FlowConfiguration) -> ExchangerInput {
    ExchangerInput::new(hot_stream(), water(25.0, 75.0, 3.0), u(), configuration)
        .expect("balanced input is valid")
}
