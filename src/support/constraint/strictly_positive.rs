use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that must be greater than zero.
///
/// Mass flow rates, specific heats, the overall heat-transfer coefficient and
/// capacitance rates all use this bound.
///
/// # Examples
///
/// ```
/// use hx_design::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(2.5).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-4.18).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{HeatTransfer, MassRate, SpecificHeatCapacity},
        heat_transfer::watt_per_square_meter_kelvin,
        mass_rate::kilogram_per_second,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn stream_properties() {
        let m_dot = MassRate::new::<kilogram_per_second>(2.5);
        assert!(StrictlyPositive::new(m_dot).is_ok());

        let cp = SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(0.0);
        assert!(matches!(
            StrictlyPositive::new(cp),
            Err(ConstraintError::Zero)
        ));

        let u = HeatTransfer::new::<watt_per_square_meter_kelvin>(-500.0);
        assert!(matches!(
            StrictlyPositive::new(u),
            Err(ConstraintError::Negative)
        ));
    }
}
