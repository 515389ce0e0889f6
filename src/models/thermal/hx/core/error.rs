use std::fmt;

use thiserror::Error;
use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::{constraint::ConstraintError, hx::LmtdError};

/// Errors that can occur while evaluating or rating a heat exchanger.
///
/// Every variant describes an input the formulas cannot give a finite answer
/// for. None of them is transient.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    /// A supplied quantity is out of its physical range.
    #[error("invalid {field}: {source}")]
    InvalidInput {
        field: InputField,
        source: ConstraintError,
    },

    /// The terminal temperature differences do not admit a log-mean.
    #[error(transparent)]
    UndefinedLmtd(#[from] LmtdError),

    /// The hot inlet is not hotter than the cold inlet, so the maximum
    /// possible heat transfer is zero or negative.
    #[error("no driving temperature difference: hot inlet {hot_inlet:?}, cold inlet {cold_inlet:?}")]
    NoDrivingTemperature {
        hot_inlet: ThermodynamicTemperature,
        cold_inlet: ThermodynamicTemperature,
    },

    /// The mean of the hot and cold duties is zero or negative.
    #[error("no net heat duty: mean duty {q_avg:?}")]
    NoHeatDuty { q_avg: Power },
}

/// Names the input quantity behind an [`EvaluateError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    HotInletTemperature,
    HotOutletTemperature,
    HotMassRate,
    HotSpecificHeat,
    HotCapacitanceRate,
    ColdInletTemperature,
    ColdOutletTemperature,
    ColdMassRate,
    ColdSpecificHeat,
    ColdCapacitanceRate,
    OverallCoefficient,
    Area,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HotInletTemperature => "hot inlet temperature",
            Self::HotOutletTemperature => "hot outlet temperature",
            Self::HotMassRate => "hot mass flow rate",
            Self::HotSpecificHeat => "hot specific heat",
            Self::HotCapacitanceRate => "hot capacitance rate",
            Self::ColdInletTemperature => "cold inlet temperature",
            Self::ColdOutletTemperature => "cold outlet temperature",
            Self::ColdMassRate => "cold mass flow rate",
            Self::ColdSpecificHeat => "cold specific heat",
            Self::ColdCapacitanceRate => "cold capacitance rate",
            Self::OverallCoefficient => "overall heat transfer coefficient",
            Self::Area => "heat transfer area",
        })
    }
}
