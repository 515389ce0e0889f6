use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Number of samples in a temperature profile unless asked otherwise.
pub const DEFAULT_PROFILE_POINTS: usize = 50;

/// Tunables for a [`ThermalEngine`](crate::models::thermal::hx::ThermalEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Terminal differences closer than this are treated as equal, and the
    /// LMTD collapses to the first difference.
    pub lmtd_tolerance: TemperatureInterval,

    /// Number of samples in the temperature profile.
    pub profile_points: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lmtd_tolerance: TemperatureInterval::new::<delta_kelvin>(1e-6),
            profile_points: DEFAULT_PROFILE_POINTS,
        }
    }
}
