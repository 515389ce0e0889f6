//! LMTD sizing and ε-NTU rating of a two-stream heat exchanger.
//!
//! [`evaluate`] turns an [`ExchangerInput`] into an [`ExchangerResult`] in a
//! single pass:
//!
//! 1. hot and cold duties and their mean,
//! 2. terminal temperature differences and their log-mean,
//! 3. required area `Q / (U * LMTD)`,
//! 4. capacitance rates and their ratio,
//! 5. effectiveness `Q / (C_min * (Th_in - Tc_in))`,
//! 6. NTU `U * A / C_min`,
//! 7. the heat balance error between the two duties.
//!
//! Inputs the formulas cannot size are rejected with an [`EvaluateError`]
//! instead of being carried through as `NaN` or infinity.

mod config;
mod error;
mod input;
mod prediction;
mod profile;
mod rating;
mod results;

#[cfg(test)]
mod test_support;

pub use config::{DEFAULT_PROFILE_POINTS, EngineConfig};
pub use error::{EvaluateError, InputField};
pub use input::{ExchangerInput, FluidStream};
pub use prediction::{InletStream, RatingInput, RatingResult, predict};
pub use profile::{ProfileIter, ProfilePoint, TemperatureProfile};
pub use rating::{PerformanceRating, classify};
pub use results::{ExchangerResult, HeatImbalance};

use crate::support::{
    hx::{CapacitanceRate, CapacityRatio, Ntu, Stream, TerminalDifferences},
    units::TemperatureDifference,
};
use uom::{
    ConstZero,
    si::f64::{Area, Power, Ratio, ThermalConductance},
};

/// Sizes the exchanger described by `input`.
///
/// # Errors
///
/// - [`EvaluateError::UndefinedLmtd`] if either terminal difference is not
///   strictly positive for the configuration.
/// - [`EvaluateError::NoHeatDuty`] if the mean duty is not positive.
/// - [`EvaluateError::NoDrivingTemperature`] if the hot inlet is not hotter
///   than the cold inlet.
pub fn evaluate(input: &ExchangerInput, config: &EngineConfig) -> Result<ExchangerResult, EvaluateError> {
    let hot = input.hot();
    let cold = input.cold();
    let capacitance_rates @ [c_hot, c_cold] = input.capacitance_rates();

    let hot_stream =
        Stream::new_from_outlet_temperature(c_hot, hot.inlet_temperature, hot.outlet_temperature);
    let cold_stream = Stream::new_from_outlet_temperature(
        c_cold,
        cold.inlet_temperature,
        cold.outlet_temperature,
    );
    let q_hot = -hot_stream.heat_flow.signed();
    let q_cold = cold_stream.heat_flow.signed();
    let q_avg = (q_hot + q_cold) / 2.0;

    let terminal_differences = TerminalDifferences::new(
        input.configuration(),
        [hot.inlet_temperature, hot.outlet_temperature],
        [cold.inlet_temperature, cold.outlet_temperature],
    );
    let lmtd = terminal_differences.log_mean(config.lmtd_tolerance)?;

    if q_avg <= Power::ZERO {
        return Err(EvaluateError::NoHeatDuty { q_avg });
    }

    let area: Area = q_avg / (input.overall_coefficient() * *lmtd);

    let c_ratio = CapacityRatio::from_capacitance_rates(capacitance_rates);
    let (c_min, _) = CapacitanceRate::min_max(capacitance_rates);

    // Always positive once the LMTD and duty checks have passed.
    let q_max = *c_min * hot.inlet_temperature.minus(cold.inlet_temperature);
    if q_max <= Power::ZERO {
        return Err(EvaluateError::NoDrivingTemperature {
            hot_inlet: hot.inlet_temperature,
            cold_inlet: cold.inlet_temperature,
        });
    }
    let effectiveness: Ratio = q_avg / q_max;

    let ua: ThermalConductance = input.overall_coefficient() * area;
    let ntu = Ntu::from_conductance_and_capacitance_rates(ua, capacitance_rates)
        .expect("positive duty and lmtd should give a positive conductance");

    let heat_balance_error: Ratio = (q_hot - q_cold).abs() / q_avg;

    Ok(ExchangerResult {
        configuration: input.configuration(),
        q_hot,
        q_cold,
        q_avg,
        terminal_differences,
        lmtd,
        area,
        c_hot,
        c_cold,
        c_ratio,
        effectiveness,
        ntu,
        heat_balance_error,
    })
}
