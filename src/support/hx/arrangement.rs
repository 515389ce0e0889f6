//! Flow arrangements supported by the heat exchanger utilities.
//!
//! [`CounterFlow`] and [`ParallelFlow`] are zero-sized types for code that
//! fixes its arrangement at compile time. [`FlowConfiguration`] picks one of
//! them at runtime, which is what a form-driven calculation needs.

mod counter_flow;
mod parallel_flow;

use std::fmt;

pub use counter_flow::CounterFlow;
pub use parallel_flow::ParallelFlow;

use super::{CapacitanceRate, Effectiveness, EffectivenessRelation, Ntu, NtuRelation};

/// Relative direction of the two streams, chosen at runtime.
///
/// The hot stream always enters at the start of the exchanger length. In
/// [`ParallelFlow`](FlowConfiguration::ParallelFlow) the cold stream enters at
/// the same end; in [`Counterflow`](FlowConfiguration::Counterflow) it enters
/// at the opposite end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlowConfiguration {
    /// Streams flow in opposite directions.
    #[default]
    Counterflow,
    /// Streams flow in the same direction.
    ParallelFlow,
}

impl FlowConfiguration {
    /// Orders the cold stream's inlet and outlet by position along the
    /// exchanger: `[at the hot inlet end, at the hot outlet end]`.
    #[must_use]
    pub fn cold_by_position<T>(self, inlet: T, outlet: T) -> [T; 2] {
        match self {
            Self::Counterflow => [outlet, inlet],
            Self::ParallelFlow => [inlet, outlet],
        }
    }
}

impl fmt::Display for FlowConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counterflow => f.write_str("Counterflow"),
            Self::ParallelFlow => f.write_str("Parallel Flow"),
        }
    }
}

impl EffectivenessRelation for FlowConfiguration {
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness {
        match self {
            Self::Counterflow => CounterFlow.effectiveness(ntu, capacitance_rates),
            Self::ParallelFlow => ParallelFlow.effectiveness(ntu, capacitance_rates),
        }
    }
}

impl NtuRelation for FlowConfiguration {
    fn ntu(&self, effectiveness: Effectiveness, capacitance_rates: [CapacitanceRate; 2]) -> Ntu {
        match self {
            Self::Counterflow => CounterFlow.ntu(effectiveness, capacitance_rates),
            Self::ParallelFlow => ParallelFlow.ntu(effectiveness, capacitance_rates),
        }
    }
}
