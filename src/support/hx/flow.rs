use std::cmp::Ordering;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};
use uom::{ConstZero, si::f64::Power};

/// Heat flow across a stream's boundary, with the direction made explicit.
///
/// A hot stream gives heat up ([`HeatFlow::Out`]) and a cold stream takes it
/// in ([`HeatFlow::In`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatFlow {
    /// Heat flowing into the stream.
    In(Constrained<Power, StrictlyPositive>),
    /// Heat flowing out of the stream.
    Out(Constrained<Power, StrictlyPositive>),
    /// No heat flow.
    None,
}

impl HeatFlow {
    /// Heat flowing into the stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn incoming(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::In(Constrained::new(heat_rate)?))
    }

    /// Heat flowing out of the stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn outgoing(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Out(Constrained::new(heat_rate)?))
    }

    /// Classifies a signed rate, positive meaning into the stream.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] if the rate is `NaN`.
    pub fn from_signed(heat_rate: Power) -> Result<Self, ConstraintError> {
        match heat_rate.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => Self::incoming(heat_rate),
            Some(Ordering::Less) => Self::outgoing(-heat_rate),
            Some(Ordering::Equal) => Ok(Self::None),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Signed rate, positive into the stream.
    #[must_use]
    pub fn signed(&self) -> Power {
        match self {
            Self::In(heat_rate) => heat_rate.into_inner(),
            Self::Out(heat_rate) => -heat_rate.into_inner(),
            Self::None => Power::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    #[test]
    fn signed_round_trip_keeps_direction() {
        let gained = HeatFlow::from_signed(Power::new::<kilowatt>(564.3)).unwrap();
        let lost = HeatFlow::from_signed(Power::new::<kilowatt>(-627.0)).unwrap();

        assert!(matches!(gained, HeatFlow::In(_)));
        assert!(matches!(lost, HeatFlow::Out(_)));
        assert_relative_eq!(gained.signed().get::<kilowatt>(), 564.3);
        assert_relative_eq!(lost.signed().get::<kilowatt>(), -627.0);
        assert_eq!(
            HeatFlow::from_signed(Power::ZERO).unwrap(),
            HeatFlow::None
        );
    }

    #[test]
    fn rejects_nan_and_non_positive_magnitudes() {
        assert!(matches!(
            HeatFlow::from_signed(Power::new::<kilowatt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        ));
        assert!(HeatFlow::incoming(Power::ZERO).is_err());
        assert!(HeatFlow::outgoing(Power::new::<kilowatt>(-1.0)).is_err());
    }
}
