//! Counter-flow effectiveness-NTU relationships.

use crate::support::hx::{
    CapacitanceRate, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, NtuRelation, effectiveness_via, ntu_via},
};

/// Counter-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFlow;

impl EffectivenessRelation for CounterFlow {
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness {
        effectiveness_via(ntu, capacitance_rates, |ntu, cr| {
            if cr < 1. {
                let decay = (-ntu * (1. - cr)).exp();
                (1. - decay) / (1. - cr * decay)
            } else {
                // balanced streams
                ntu / (1. + ntu)
            }
        })
    }
}

impl NtuRelation for CounterFlow {
    fn ntu(&self, effectiveness: Effectiveness, capacitance_rates: [CapacitanceRate; 2]) -> Ntu {
        ntu_via(effectiveness, capacitance_rates, |eff, cr| {
            if cr < 1. {
                ((1. - eff * cr) / (1. - eff)).ln() / (1. - cr)
            } else {
                // balanced streams
                eff / (1. - eff)
            }
        })
    }
}
