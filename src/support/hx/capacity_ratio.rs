use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::ratio};

use super::CapacitanceRate;

/// Capacity ratio (`C_min / C_max`) of a heat exchanger.
///
/// Lies in the closed interval [0, 1]. It equals one exactly when both
/// streams have the same capacitance rate and only reaches zero in the limit
/// of one infinite rate.
#[derive(Debug, Clone, Copy)]
pub struct CapacityRatio(Constrained<Ratio, UnitInterval>);

impl CapacityRatio {
    /// Create a [`CapacityRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`CapacityRatio`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Capacity ratio of two streams.
    ///
    /// # Panics
    ///
    /// Panics if both rates are infinite, since their ratio is undefined.
    #[must_use]
    pub fn from_capacitance_rates(capacitance_rates: [CapacitanceRate; 2]) -> Self {
        let (min, max) = CapacitanceRate::min_max(capacitance_rates);

        Self::from_quantity(*min / *max).expect("ratio of positive rates should lie in [0, 1]")
    }
}

impl Deref for CapacityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
