use crate::support::units::TemperatureDifference;
use uom::si::f64::ThermodynamicTemperature;

use super::{CapacitanceRate, HeatFlow};

/// What is known about a stream before it enters the exchanger.
///
/// The stream's specific heat is taken as constant through the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInlet {
    pub(crate) capacitance_rate: CapacitanceRate,
    pub(crate) temperature: ThermodynamicTemperature,
}

impl StreamInlet {
    /// Capture the inlet capacitance rate and temperature.
    #[must_use]
    pub fn new(capacitance_rate: CapacitanceRate, temperature: ThermodynamicTemperature) -> Self {
        Self {
            capacitance_rate,
            temperature,
        }
    }

    pub(crate) fn with_heat_flow(self, heat_flow: HeatFlow) -> Stream {
        Stream::new_from_heat_flow(self.capacitance_rate, self.temperature, heat_flow)
    }
}

/// A stream with both ends of the exchanger resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stream {
    pub capacitance_rate: CapacitanceRate,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    /// Heat gained or lost by the stream, `C * (T_out - T_in)`.
    pub heat_flow: HeatFlow,
}

impl Stream {
    /// Resolve the outlet temperature from a known heat flow.
    #[must_use]
    pub fn new_from_heat_flow(
        capacitance_rate: CapacitanceRate,
        inlet_temperature: ThermodynamicTemperature,
        heat_flow: HeatFlow,
    ) -> Self {
        Self {
            capacitance_rate,
            inlet_temperature,
            outlet_temperature: inlet_temperature + heat_flow.signed() / *capacitance_rate,
            heat_flow,
        }
    }

    /// Resolve the heat flow from known inlet and outlet temperatures.
    ///
    /// A stream that warms up gains heat ([`HeatFlow::In`]); one that cools
    /// down loses it ([`HeatFlow::Out`]).
    ///
    /// # Panics
    ///
    /// Panics if either temperature is `NaN`.
    #[must_use]
    pub fn new_from_outlet_temperature(
        capacitance_rate: CapacitanceRate,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
    ) -> Self {
        let heat_rate = *capacitance_rate * outlet_temperature.minus(inlet_temperature);

        Self {
            capacitance_rate,
            inlet_temperature,
            outlet_temperature,
            heat_flow: HeatFlow::from_signed(heat_rate)
                .expect("temperatures should be comparable"),
        }
    }
}
