use std::ops::Deref;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::TemperatureDifference,
};
use thiserror::Error;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
};

use super::FlowConfiguration;

/// Hot-to-cold temperature differences at the two ends of an exchanger.
///
/// `dt1` is taken at the end where the hot stream enters and `dt2` at the
/// end where it leaves, so for counterflow `dt1 = Th_in - Tc_out` and
/// `dt2 = Th_out - Tc_in`, while for parallel flow `dt1 = Th_in - Tc_in` and
/// `dt2 = Th_out - Tc_out`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalDifferences {
    pub dt1: TemperatureInterval,
    pub dt2: TemperatureInterval,
}

impl TerminalDifferences {
    /// Terminal differences for the given stream temperatures.
    #[must_use]
    pub fn new(
        configuration: FlowConfiguration,
        hot: [ThermodynamicTemperature; 2],
        cold: [ThermodynamicTemperature; 2],
    ) -> Self {
        let [hot_inlet, hot_outlet] = hot;
        let [cold_first, cold_second] = configuration.cold_by_position(cold[0], cold[1]);

        Self {
            dt1: hot_inlet.minus(cold_first),
            dt2: hot_outlet.minus(cold_second),
        }
    }

    /// Log-mean of the two differences.
    ///
    /// When the differences agree to within `tolerance` the logarithmic mean
    /// is `0 / 0`, and its limit `dt1` is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`LmtdError`] unless both differences are strictly positive.
    pub fn log_mean(self, tolerance: TemperatureInterval) -> Result<Lmtd, LmtdError> {
        let Self { dt1, dt2 } = self;
        let invalid = LmtdError::InvalidDifferential { dt1, dt2 };

        if StrictlyPositive::new(dt1).is_err() || StrictlyPositive::new(dt2).is_err() {
            return Err(invalid);
        }

        let mean = if (dt1 - dt2).abs() < tolerance {
            dt1
        } else {
            (dt1 - dt2) / (dt1 / dt2).get::<ratio>().ln()
        };

        StrictlyPositive::new(mean).map(Lmtd).map_err(|_| invalid)
    }
}

/// Log-mean temperature difference, always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Lmtd(Constrained<TemperatureInterval, StrictlyPositive>);

impl Deref for Lmtd {
    type Target = TemperatureInterval;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The log-mean of two terminal differences is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LmtdError {
    /// A terminal difference is zero or negative (a temperature cross or
    /// touch), or the two differences have opposite signs.
    #[error(
        "invalid temperature differential for selected configuration: dt1={dt1:?}, dt2={dt2:?}"
    )]
    InvalidDifferential {
        dt1: TemperatureInterval,
        dt2: TemperatureInterval,
    },
}
