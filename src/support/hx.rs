//! Heat exchanger analysis toolkit.
//!
//! Two ways of looking at the same exchanger live here:
//!
//! - **LMTD**: [`TerminalDifferences`] and [`Lmtd`] size an exchanger from
//!   four known stream temperatures.
//! - **Effectiveness-NTU**: [`Effectiveness`], [`Ntu`] and the
//!   [`EffectivenessRelation`]/[`NtuRelation`] implementations of each
//!   arrangement rate an exchanger of known size from its inlets.
//!
//! Both share [`CapacitanceRate`], [`CapacityRatio`] and the
//! [`FlowConfiguration`] of the streams.
//!
//! # Example
//!
//! ```
//! use hx_design::support::constraint::ConstraintResult;
//! use hx_design::support::hx::{
//!     CapacitanceRate, FlowConfiguration, StreamInlet,
//!     functional::known_conductance_and_inlets,
//! };
//! use uom::si::{
//!     f64::{ThermalConductance, ThermodynamicTemperature},
//!     thermal_conductance::watt_per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let result = known_conductance_and_inlets(
//!         &FlowConfiguration::Counterflow,
//!         ThermalConductance::new::<watt_per_kelvin>(8_972.4),
//!         [
//!             StreamInlet::new(
//!                 CapacitanceRate::new::<watt_per_kelvin>(10_450.0)?,
//!                 ThermodynamicTemperature::new::<degree_celsius>(150.0),
//!             ),
//!             StreamInlet::new(
//!                 CapacitanceRate::new::<watt_per_kelvin>(12_540.0)?,
//!                 ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!             ),
//!         ],
//!     )?;
//!
//!     let [hot, cold] = result.streams;
//!     assert!(hot.outlet_temperature > cold.inlet_temperature);
//!     Ok(())
//! }
//! ```

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod effectiveness_ntu;
mod flow;
pub mod functional;
mod lmtd;
mod stream;

pub use arrangement::{CounterFlow, FlowConfiguration, ParallelFlow};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu, NtuRelation};
pub use flow::HeatFlow;
pub use lmtd::{Lmtd, LmtdError, TerminalDifferences};
pub use stream::{Stream, StreamInlet};
