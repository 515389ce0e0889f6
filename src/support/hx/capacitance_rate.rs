use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

/// Capacitance rate (`m_dot * c_p`) of one stream, in W/K.
///
/// A strictly positive capacitance rate is what keeps `C_min / C_max` and
/// `UA / C_min` well defined.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar in unit `U`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(ThermalConductance::new::<U>(value))
    }

    /// Create a [`CapacitanceRate`] from a thermal-conductance quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass flow rate and a specific heat.
    ///
    /// Any units may be used for the operands; a flow in kg/s and a specific
    /// heat in kJ/(kg·K) give the same rate as the W/K form of the product.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }

    /// Returns the smaller and the larger of two rates, in that order.
    #[must_use]
    pub fn min_max(rates: [Self; 2]) -> (Self, Self) {
        let [first, second] = rates;
        if *first <= *second {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
