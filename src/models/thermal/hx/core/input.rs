use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    hx::{CapacitanceRate, FlowConfiguration},
};
use num_traits::Zero;
use uom::si::{
    f64::{HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use super::{EvaluateError, InputField};

/// Readings for one fluid: both end temperatures, flow rate and specific heat.
///
/// This is plain data; it is checked when an [`ExchangerInput`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidStream {
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub mass_rate: MassRate,
    pub specific_heat: SpecificHeatCapacity,
}

impl FluidStream {
    #[must_use]
    pub fn new(
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> Self {
        Self {
            inlet_temperature,
            outlet_temperature,
            mass_rate,
            specific_heat,
        }
    }
}

/// Operating point of a two-stream heat exchanger.
///
/// Mass flow rates, specific heats, their products and the overall
/// coefficient are guaranteed strictly positive and finite, and every
/// temperature finite.
/// Temperature ordering is not checked here; inputs that cannot be sized are
/// reported by [`evaluate`](super::evaluate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangerInput {
    hot: FluidStream,
    cold: FluidStream,
    overall_coefficient: HeatTransfer,
    configuration: FlowConfiguration,
    c_hot: CapacitanceRate,
    c_cold: CapacitanceRate,
}

impl ExchangerInput {
    /// Constructs a validated operating point.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::InvalidInput`] naming the first quantity that
    /// is non-finite, or a flow rate, specific heat or coefficient that is
    /// not strictly positive.
    pub fn new(
        hot: FluidStream,
        cold: FluidStream,
        overall_coefficient: HeatTransfer,
        configuration: FlowConfiguration,
    ) -> Result<Self, EvaluateError> {
        let c_hot = validate_stream(
            &hot,
            [
                InputField::HotInletTemperature,
                InputField::HotOutletTemperature,
                InputField::HotMassRate,
                InputField::HotSpecificHeat,
                InputField::HotCapacitanceRate,
            ],
        )?;
        let c_cold = validate_stream(
            &cold,
            [
                InputField::ColdInletTemperature,
                InputField::ColdOutletTemperature,
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

        Ok(Self {
            hot,
            cold,
            overall_coefficient,
            configuration,
            c_hot,
            c_cold,
        })
    }

    #[must_use]
    pub fn hot(&self) -> &FluidStream {
        &self.hot
    }

    #[must_use]
    pub fn cold(&self) -> &FluidStream {
        &self.cold
    }

    /// Overall heat-transfer coefficient `U`.
    #[must_use]
    pub fn overall_coefficient(&self) -> HeatTransfer {
        self.overall_coefficient
    }

    #[must_use]
    pub fn configuration(&self) -> FlowConfiguration {
        self.configuration
    }

    /// The same operating point with the streams arranged differently.
    #[must_use]
    pub fn with_configuration(self, configuration: FlowConfiguration) -> Self {
        Self {
            configuration,
            ..self
        }
    }

    /// Capacitance rates `[C_hot, C_cold]`.
    #[must_use]
    pub fn capacitance_rates(&self) -> [CapacitanceRate; 2] {
        [self.c_hot, self.c_cold]
    }
}

/// Checks one stream's readings and returns its capacitance rate.
///
/// `fields` names the inlet temperature, outlet temperature, mass rate,
/// specific heat and capacitance rate, in that order.
fn validate_stream(
    stream: &FluidStream,
    fields: [InputField; 5],
) -> Result<CapacitanceRate, EvaluateError> {
    let [inlet, outlet, mass_rate, specific_heat, capacitance_rate] = fields;

    finite_temperature(inlet, stream.inlet_temperature)?;
    finite_temperature(outlet, stream.outlet_temperature)?;
    positive_finite(mass_rate, stream.mass_rate, stream.mass_rate.is_finite())?;
    positive_finite(
        specific_heat,
        stream.specific_heat,
        stream.specific_heat.is_finite(),
    )?;

    finite_capacitance_rate(capacitance_rate, stream.mass_rate, stream.specific_heat)
}

/// `m * cp`, which can overflow even when both factors are finite.
pub(super) fn finite_capacitance_rate(
    field: InputField,
    mass_rate: MassRate,
    specific_heat: SpecificHeatCapacity,
) -> Result<CapacitanceRate, EvaluateError> {
    let rate = CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)
        .map_err(|source| EvaluateError::InvalidInput { field, source })?;
    positive_finite(field, *rate, rate.is_finite())?;
    Ok(rate)
}

pub(super) fn positive_finite<T: PartialOrd + Zero>(
    field: InputField,
    value: T,
    is_finite: bool,
) -> Result<T, EvaluateError> {
    let value = StrictlyPositive::new(value)
        .map_err(|source| EvaluateError::InvalidInput { field, source })?
        .into_inner();

    if is_finite {
        Ok(value)
    } else {
        Err(EvaluateError::InvalidInput {
            field,
            source: ConstraintError::AboveMaximum,
        })
    }
}

pub(super) fn finite_temperature(
    field: InputField,
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, EvaluateError> {
    let value = temperature.get::<kelvin>();
    let source = if value.is_nan() {
        ConstraintError::NotANumber
    } else if value == f64::INFINITY {
        ConstraintError::AboveMaximum
    } else if value == f64::NEG_INFINITY {
        ConstraintError::BelowMinimum
    } else {
        return Ok(temperature);
    };
    Err(EvaluateError::InvalidInput { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::hx::core::test_support::{celsius, hot_stream, reference_input};
    use uom::si::{
        heat_transfer::watt_per_square_meter_kelvin, mass_rate::kilogram_per_second,
        specific_heat_capacity::{joule_per_kilogram_kelvin, kilojoule_per_kilogram_kelvin},
        thermal_conductance::watt_per_kelvin,
    };

    fn u() -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0)
    }

    #[test]
    fn reference_input_is_valid() {
        let input = reference_input(FlowConfiguration::Counterflow);
        let [c_hot, c_cold] = input.capacitance_rates();

        approx::assert_relative_eq!(c_hot.get::<watt_per_kelvin>(), 10_450.0, max_relative = 1e-12);
        approx::assert_relative_eq!(c_cold.get::<watt_per_kelvin>(), 12_540.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_flow_rate() {
        let cold = FluidStream::new(
            celsius(25.0),
            celsius(70.0),
            MassRate::new::<kilogram_per_second>(0.0),
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
        );

        let err = ExchangerInput::new(hot_stream(), cold, u(), FlowConfiguration::Counterflow)
            .unwrap_err();

        assert_eq!(
            err,
            EvaluateError::InvalidInput {
                field: InputField::ColdMassRate,
                source: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn rejects_negative_specific_heat() {
        let mut hot = hot_stream();
        hot.specific_heat = SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(-4.18);
        let cold = *reference_input(FlowConfiguration::Counterflow).cold();

        let err = ExchangerInput::new(hot, cold, u(), FlowConfiguration::Counterflow).unwrap_err();

        assert!(matches!(
            err,
            EvaluateError::InvalidInput {
                field: InputField::HotSpecificHeat,
                source: ConstraintError::Negative,
            }
        ));
    }

    #[test]
    fn rejects_bad_overall_coefficient() {
        let input = reference_input(FlowConfiguration::Counterflow);

        for (value, expected) in [
            (0.0, ConstraintError::Zero),
            (-500.0, ConstraintError::Negative),
            (f64::NAN, ConstraintError::NotANumber),
            (f64::INFINITY, ConstraintError::AboveMaximum),
        ] {
            let err = ExchangerInput::new(
                *input.hot(),
                *input.cold(),
                HeatTransfer::new::<watt_per_square_meter_kelvin>(value),
                FlowConfiguration::Counterflow,
            )
            .unwrap_err();

            assert_eq!(
                err,
                EvaluateError::InvalidInput {
                    field: InputField::OverallCoefficient,
                    source: expected,
                }
            );
        }
    }

    #[test]
    fn rejects_nan_temperature() {
        let mut hot = hot_stream();
        hot.outlet_temperature = celsius(f64::NAN);
        let cold = *reference_input(FlowConfiguration::Counterflow).cold();

        let err = ExchangerInput::new(hot, cold, u(), FlowConfiguration::Counterflow).unwrap_err();

        assert_eq!(
            err,
            EvaluateError::InvalidInput {
                field: InputField::HotOutletTemperature,
                source: ConstraintError::NotANumber,
            }
        );
    }

    #[test]
    fn accepts_second_law_violating_temperatures() {
        let mut hot = hot_stream();
        hot.outlet_temperature = celsius(200.0);
        let cold = *reference_input(FlowConfiguration::Counterflow).cold();

        assert!(ExchangerInput::new(hot, cold, u(), FlowConfiguration::ParallelFlow).is_ok());
    }

    #[test]
    fn rejects_overflowing_capacitance_rate() {
        let huge = |stream: FluidStream| FluidStream {
            mass_rate: MassRate::new::<kilogram_per_second>(1e200),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1e200),
            ..stream
        };
        let cold = *reference_input(FlowConfiguration::Counterflow).cold();

        let both = ExchangerInput::new(
            huge(hot_stream()),
            huge(cold),
            u(),
            FlowConfiguration::Counterflow,
        )
        .unwrap_err();
        let cold_only =
            ExchangerInput::new(hot_stream(), huge(cold), u(), FlowConfiguration::Counterflow)
                .unwrap_err();

        assert_eq!(
            both,
            EvaluateError::InvalidInput {
                field: InputField::HotCapacitanceRate,
                source: ConstraintError::AboveMaximum,
            }
        );
        assert_eq!(
            cold_only,
            EvaluateError::InvalidInput {
                field: InputField::ColdCapacitanceRate,
                source: ConstraintError::AboveMaximum,
            }
        );
    }

    #[test]
    fn switching_configuration_keeps_streams() {
        let counter = reference_input(FlowConfiguration::Counterflow);
        let parallel = counter.with_configuration(FlowConfiguration::ParallelFlow);

        assert_eq!(parallel.configuration(), FlowConfiguration::ParallelFlow);
        assert_eq!(parallel.hot(), counter.hot());
        assert_eq!(parallel.cold(), counter.cold());
    }
}
