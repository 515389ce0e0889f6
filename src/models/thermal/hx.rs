//! Heat exchanger models.
//!
//! This module provides [`twine_core::Model`] implementations for sizing and
//! rating two-stream heat exchangers. The computational core is in the
//! internal `core` module.
//!
//! - [`ThermalEngine`] sizes an exchanger from measured stream temperatures
//!   using the log-mean temperature difference, and reports effectiveness,
//!   NTU and the heat balance between the streams.
//! - [`OutletPrediction`] rates a known exchanger, predicting both outlet
//!   temperatures from the inlets and the installed area.
//!
//! # Example
//!
//! ```
//! use hx_design::models::thermal::hx::{
//!     ExchangerInput, FlowConfiguration, FluidStream, PerformanceRating, ThermalEngine,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     area::square_meter,
//!     f64::{HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     mass_rate::kilogram_per_second,
//!     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let water = |inlet: f64, outlet: f64, mass_rate: f64| {
//!     FluidStream::new(
//!         ThermodynamicTemperature::new::<degree_celsius>(inlet),
//!         ThermodynamicTemperature::new::<degree_celsius>(outlet),
//!         MassRate::new::<kilogram_per_second>(mass_rate),
//!         SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
//!     )
//! };
//!
//! let input = ExchangerInput::new(
//!     water(150.0, 90.0, 2.5),
//!     water(25.0, 75.0, 3.0),
//!     HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0),
//!     FlowConfiguration::Counterflow,
//! )?;
//!
//! let result = ThermalEngine::default().call(&input)?;
//!
//! assert!((result.area.get::<square_meter>() - 17.94).abs() < 0.01);
//! assert_eq!(result.rating(), PerformanceRating::Fair);
//! # Ok::<(), hx_design::models::thermal::hx::EvaluateError>(())
//! ```

pub(crate) mod core;

pub use crate::support::hx::{FlowConfiguration, TerminalDifferences};
pub use core::{
    DEFAULT_PROFILE_POINTS, EngineConfig, EvaluateError, ExchangerInput, ExchangerResult,
    FluidStream, HeatImbalance, InletStream, InputField, PerformanceRating, ProfileIter,
    ProfilePoint, RatingInput, RatingResult, TemperatureProfile, classify,
};

use twine_core::Model;

/// Sizes heat exchangers with the LMTD method.
///
/// The engine holds only its [`EngineConfig`]; every call is independent and
/// deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThermalEngine {
    config: EngineConfig,
}

impl ThermalEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sizes the exchanger described by `input`.
    ///
    /// # Errors
    ///
    /// See [`EvaluateError`] for the inputs that cannot be sized.
    pub fn evaluate(&self, input: &ExchangerInput) -> Result<ExchangerResult, EvaluateError> {
        core::evaluate(input, &self.config)
    }

    /// Samples the stream temperatures along the exchanger at the configured
    /// number of points.
    #[must_use]
    pub fn profile(&self, input: &ExchangerInput) -> TemperatureProfile {
        TemperatureProfile::generate(input, input.configuration(), self.config.profile_points)
    }
}

impl Model for ThermalEngine {
    type Input = ExchangerInput;
    type Output = ExchangerResult;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}

/// Predicts outlet temperatures of an exchanger of known area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutletPrediction;

impl OutletPrediction {
    /// Rates the exchanger described by `input` with the ε-NTU method.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::InvalidInput`] if the conductance `U * A`
    /// cannot form a valid NTU.
    pub fn predict(&self, input: &RatingInput) -> Result<RatingResult, EvaluateError> {
        core::predict(input)
    }
}

impl Model for OutletPrediction {
    type Input = RatingInput;
    type Output = RatingResult;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.predict(input)
    }
}

/// Sizes `input` with the default [`EngineConfig`].
///
/// # Errors
///
/// See [`ThermalEngine::evaluate`].
pub fn evaluate(input: &ExchangerInput) -> Result<ExchangerResult, EvaluateError> {
    ThermalEngine::default().evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        mass_rate::kilogram_per_second,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn cp() -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18)
    }

    fn u() -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0)
    }

    fn input(configuration: FlowConfiguration) -> ExchangerInput {
        let stream = |inlet, outlet, m| {
            FluidStream::new(
                celsius(inlet),
                celsius(outlet),
                MassRate::new::<kilogram_per_second>(m),
                cp(),
            )
        };
        ExchangerInput::new(
            stream(150.0, 90.0, 2.5),
            stream(25.0, 70.0, 3.0),
            u(),
            configuration,
        )
        .unwrap()
    }

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<ThermalEngine>();
        assert_send_sync::<ExchangerResult>();
        assert_send_sync::<TemperatureProfile>();
        assert_send_sync::<RatingResult>();
        assert_send_sync::<EvaluateError>();
    }

    #[test]
    fn model_call_matches_free_function() {
        let input = input(FlowConfiguration::ParallelFlow);

        let via_model = ThermalEngine::default().call(&input).unwrap();
        let direct = evaluate(&input).unwrap();

        assert_eq!(via_model.area, direct.area);
        assert_relative_eq!(
            via_model.lmtd.get::<delta_kelvin>(),
            105.0 / (125.0_f64 / 20.0).ln(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn tolerance_is_configurable() {
        // dT1 = 80 K and dT2 = 65 K are "equal" under a 20 K tolerance.
        let engine = ThermalEngine::new(EngineConfig {
            lmtd_tolerance: uom::si::f64::TemperatureInterval::new::<delta_kelvin>(20.0),
            ..EngineConfig::default()
        });

        let result = engine.call(&input(FlowConfiguration::Counterflow)).unwrap();

        assert_relative_eq!(result.lmtd.get::<delta_kelvin>(), 80.0, max_relative = 1e-9);
    }

    #[test]
    fn profile_uses_configured_points() {
        let engine = ThermalEngine::new(EngineConfig {
            profile_points: 11,
            ..EngineConfig::default()
        });
        let input = input(FlowConfiguration::Counterflow);

        assert_eq!(engine.profile(&input).len(), 11);
        assert_eq!(
            ThermalEngine::default().profile(&input).len(),
            DEFAULT_PROFILE_POINTS
        );
    }

    #[test]
    fn outlet_prediction_model() {
        let stream = |t, m| InletStream {
            temperature: celsius(t),
            mass_rate: MassRate::new::<kilogram_per_second>(m),
            specific_heat: cp(),
        };
        let rating = RatingInput::new(
            stream(150.0, 2.5),
            stream(25.0, 3.0),
            u(),
            Area::new::<square_meter>(10.0),
            FlowConfiguration::Counterflow,
        )
        .unwrap();

        let result = OutletPrediction.call(&rating).unwrap();

        assert!(result.hot_outlet < celsius(150.0));
        assert!(result.cold_outlet > celsius(25.0));
    }
}
