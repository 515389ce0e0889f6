//! Outlet prediction for an exchanger of known size (ε-NTU rating).

use crate::support::hx::{
    Effectiveness, FlowConfiguration, Ntu, StreamInlet,
    functional::{self, KnownConductanceResult},
};
use uom::{
    ConstZero,
    si::f64::{Area, HeatTransfer, MassRate, Power, SpecificHeatCapacity, ThermodynamicTemperature},
};

use super::{
    EvaluateError, InputField,
    input::{finite_capacitance_rate, finite_temperature, positive_finite},
};

/// Inlet readings for one fluid of an exchanger being rated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletStream {
    pub temperature: ThermodynamicTemperature,
    pub mass_rate: MassRate,
    pub specific_heat: SpecificHeatCapacity,
}

/// An exchanger of known `U` and area with known inlets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingInput {
    hot: StreamInlet,
    cold: StreamInlet,
    overall_coefficient: HeatTransfer,
    area: Area,
    configuration: FlowConfiguration,
}

impl RatingInput {
    /// Constructs a validated rating problem.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::InvalidInput`] for non-finite temperatures or
    /// a flow rate, specific heat, coefficient or area that is not strictly
    /// positive and finite, and [`EvaluateError::NoDrivingTemperature`] if the
    /// hot inlet is not hotter than the cold inlet.
    pub fn new(
        hot: InletStream,
        cold: InletStream,
        overall_coefficient: HeatTransfer,
        area: Area,
        configuration: FlowConfiguration,
    ) -> Result<Self, EvaluateError> {
        let hot_inlet = inlet(
            &hot,
            [
                InputField::HotInletTemperature,
                InputField::HotMassRate,
                InputField::HotSpecificHeat,
                InputField::HotCapacitanceRate,
            ],
        )?;
        let cold_inlet = inlet(
            &cold,
            [
                InputField::ColdInletTemperature,
                InputField::ColdMassRate,
                InputField::ColdSpecificHeat,
                InputField::ColdCapacitanceRate,
            ],
        )?;
        positive_finite(
            InputField::OverallCoefficient,
            overall_coefficient,
            overall_coefficient.is_finite(),
        )?;
        positive_finite(InputField::Area, area, area.is_finite())?;

        if hot.temperature <= cold.temperature {
            return Err(EvaluateError::NoDrivingTemperature {
                hot_inlet: hot.temperature,
                cold_inlet: cold.temperature,
            });
        }

        Ok(Self {
            hot: hot_inlet,
            cold: cold_inlet,
            overall_coefficient,
            area,
            configuration,
        })
    }

    #[must_use]
    pub fn configuration(&self) -> FlowConfiguration {
        self.configuration
    }
}

fn inlet(stream: &InletStream, fields: [InputField; 4]) -> Result<StreamInlet, EvaluateError> {
    let [temperature, mass_rate, specific_heat, capacitance_rate] = fields;

    finite_temperature(temperature, stream.temperature)?;
    positive_finite(mass_rate, stream.mass_rate, stream.mass_rate.is_finite())?;
    positive_finite(
        specific_heat,
        stream.specific_heat,
        stream.specific_heat.is_finite(),
    )?;

    let rate = finite_capacitance_rate(capacitance_rate, stream.mass_rate, stream.specific_heat)?;

    Ok(StreamInlet::new(rate, stream.temperature))
}

/// Predicted performance of a rated exchanger.
#[derive(Debug, Clone, Copy)]
pub struct RatingResult {
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
    /// Heat transferred from the hot to the cold stream.
    pub q: Power,
    pub effectiveness: Effectiveness,
    pub ntu: Ntu,
}

/// Predicts both outlet temperatures of an exchanger from its inlets.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidInput`] for the area if the conductance
/// `U * A` is rejected by the NTU constraint.
pub fn predict(input: &RatingInput) -> Result<RatingResult, EvaluateError> {
    let ua = input.overall_coefficient * input.area;

    let KnownConductanceResult {
        streams: [hot, cold],
        effectiveness,
        ntu,
    } = functional::known_conductance_and_inlets(
        &input.configuration,
        ua,
        [input.hot, input.cold],
    )
    .map_err(|source| EvaluateError::InvalidInput {
        field: InputField::Area,
        source,
    })?;

    Ok(RatingResult {
        hot_outlet: hot.outlet_temperature,
        cold_outlet: cold.outlet_temperature,
        q: cold.heat_flow.signed().max(Power::ZERO),
        effectiveness,
        ntu,
    })
}
