//! Numeric constraints checked once, at construction.
//!
//! Heat exchanger inputs carry physical bounds that the formulas rely on: a
//! mass flow rate or a specific heat of zero turns the capacity-rate ratio
//! into `0 / 0`, and a negative NTU has no meaning. The types here move those
//! bounds into the type system so the engine only ever sees values that
//! already satisfy them.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonNegative`]: Zero or greater
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper, where
//! `C` implements [`Constraint<T>`]. Every marker also offers an associated
//! `new()` shortcut, e.g. `StrictlyPositive::new(500.0)`.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for fallible constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use hx_design::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};
///
/// let u = HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0);
/// let u = Constrained::<_, StrictlyPositive>::new(u).unwrap();
/// assert_eq!(u.into_inner().get::<watt_per_square_meter_kelvin>(), 500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
