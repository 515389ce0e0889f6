use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio};

/// Closed-form effectiveness of an arrangement as a function of NTU.
pub trait EffectivenessRelation {
    /// Effectiveness reached by an exchanger of size `ntu` between streams
    /// with the given capacitance rates.
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness;
}

/// Inverse of [`EffectivenessRelation`]: the NTU needed for an effectiveness.
pub trait NtuRelation {
    /// NTU an arrangement needs to reach `effectiveness` between streams with
    /// the given capacitance rates.
    fn ntu(&self, effectiveness: Effectiveness, capacitance_rates: [CapacitanceRate; 2]) -> Ntu;
}

/// Effectiveness of a physically consistent heat exchanger, in [0, 1].
///
/// This is the ratio of actual to maximum possible heat transfer as predicted
/// by an [`EffectivenessRelation`]. Effectiveness values computed from
/// measured temperatures may fall outside [0, 1] and are reported as a plain
/// [`Ratio`] instead.
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Number of transfer units, `UA / C_min`.
///
/// The dimensionless thermal size of a heat exchanger; never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create an [`Ntu`] from a conductance `UA` and both streams'
    /// capacitance rates (the smaller one is used).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ua` is negative or `NaN`.
    pub fn from_conductance_and_capacitance_rates(
        ua: ThermalConductance,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let (c_min, _) = CapacitanceRate::min_max(capacitance_rates);
        Self::from_quantity(ua / *c_min)
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates `relation(ntu, cr)`, handling the `cr == 0` limit shared by
/// every arrangement.
#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacitance_rates: [CapacitanceRate; 2],
    relation: impl Fn(f64, f64) -> f64,
) -> Effectiveness {
    let cr = CapacityRatio::from_capacitance_rates(capacitance_rates).get::<ratio>();
    let ntu = ntu.get::<ratio>();
    let eff = if cr == 0.0 {
        1. - (-ntu).exp()
    } else {
        relation(ntu, cr)
    };
    Effectiveness::new(eff).expect("ntu should always yield valid effectiveness")
}

/// Evaluates `relation(eff, cr)`, handling the `cr == 0` limit shared by
/// every arrangement.
#[inline]
pub(crate) fn ntu_via(
    effectiveness: Effectiveness,
    capacitance_rates: [CapacitanceRate; 2],
    relation: impl Fn(f64, f64) -> f64,
) -> Ntu {
    let cr = CapacityRatio::from_capacitance_rates(capacitance_rates).get::<ratio>();
    let eff = effectiveness.get::<ratio>();
    let ntu = if cr == 0.0 {
        -(1. - eff).ln()
    } else {
        relation(eff, cr)
    };
    Ntu::new(ntu).expect("effectiveness should always yield valid ntu")
}
