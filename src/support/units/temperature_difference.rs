use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures yielding a [`TemperatureInterval`].
///
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380) for why this
/// is not provided upstream.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn terminal_differences() {
        let hot_out = ThermodynamicTemperature::new::<degree_celsius>(90.0);
        let cold_in = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert_relative_eq!(
            hot_out.minus(cold_in).get::<delta_celsius>(),
            65.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            cold_in.minus(hot_out).get::<delta_kelvin>(),
            -65.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn mixed_scales() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(t_f.minus(t_c).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }
}
