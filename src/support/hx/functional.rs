//! Functional helpers for common heat exchanger calculations.

use crate::support::{constraint::ConstraintResult, units::TemperatureDifference};
use uom::si::f64::ThermalConductance;

use super::{
    CapacitanceRate, Effectiveness, HeatFlow, Ntu, StreamInlet,
    effectiveness_ntu::EffectivenessRelation, stream::Stream,
};

/// Rate an exchanger of known conductance from its inlet conditions.
///
/// The effectiveness follows from the arrangement's ε-NTU relation and the
/// heat transferred is `ε * C_min * (T_hot,in - T_cold,in)`, taken from the
/// hotter inlet and given to the colder one. Streams are returned in input
/// order.
///
/// # Errors
///
/// Returns `Err` if `ua` is negative or `NaN`.
pub fn known_conductance_and_inlets(
    arrangement: &impl EffectivenessRelation,
    ua: ThermalConductance,
    inlets: [StreamInlet; 2],
) -> ConstraintResult<KnownConductanceResult> {
    let capacitance_rates = [inlets[0].capacitance_rate, inlets[1].capacitance_rate];
    let ntu = Ntu::from_conductance_and_capacitance_rates(ua, capacitance_rates)?;
    let effectiveness = arrangement.effectiveness(ntu, capacitance_rates);

    let (c_min, _) = CapacitanceRate::min_max(capacitance_rates);
    let max_gain_of_first = *c_min * inlets[1].temperature.minus(inlets[0].temperature);
    let gain_of_first = *effectiveness * max_gain_of_first;

    Ok(KnownConductanceResult {
        streams: [
            inlets[0].with_heat_flow(HeatFlow::from_signed(gain_of_first)?),
            inlets[1].with_heat_flow(HeatFlow::from_signed(-gain_of_first)?),
        ],
        effectiveness,
        ntu,
    })
}

/// Resolved exchanger state returned from [`known_conductance_and_inlets`].
#[derive(Debug, Clone, Copy)]
pub struct KnownConductanceResult {
    /// Resolved streams, in the same order as the inlets.
    pub streams: [Stream; 2],
    pub effectiveness: Effectiveness,
    pub ntu: Ntu,
}
