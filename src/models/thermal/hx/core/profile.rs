use std::iter::FusedIterator;

use crate::support::hx::FlowConfiguration;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::{DEFAULT_PROFILE_POINTS, ExchangerInput};

/// Linear hot- and cold-side temperatures along the exchanger length.
///
/// Both streams are interpolated linearly between their end temperatures,
/// which is a display approximation of the true exponential profile. The
/// hot stream enters at position 0. The cold stream enters at position 0 in
/// parallel flow and at position 1 in counterflow.
///
/// The profile is a value: iterating it never changes it, and every pass
/// yields the same samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureProfile {
    hot: [ThermodynamicTemperature; 2],
    cold: [ThermodynamicTemperature; 2],
    points: usize,
}

impl TemperatureProfile {
    /// Profile of `points` evenly spaced samples from position 0 to 1.
    ///
    /// One point yields only position 0; zero points yield nothing.
    #[must_use]
    pub fn generate(
        input: &ExchangerInput,
        configuration: FlowConfiguration,
        points: usize,
    ) -> Self {
        let hot = input.hot();
        let cold = input.cold();

        Self {
            hot: [hot.inlet_temperature, hot.outlet_temperature],
            cold: configuration.cold_by_position(cold.inlet_temperature, cold.outlet_temperature),
            points,
        }
    }

    /// Profile for the input's own configuration with the default point count.
    #[must_use]
    pub fn from_input(input: &ExchangerInput) -> Self {
        Self::generate(input, input.configuration(), DEFAULT_PROFILE_POINTS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    #[must_use]
    pub fn iter(&self) -> ProfileIter {
        ProfileIter {
            profile: *self,
            next: 0,
        }
    }

    fn sample(&self, index: usize) -> ProfilePoint {
        #[allow(clippy::cast_precision_loss)]
        let x = if self.points > 1 {
            index as f64 / (self.points - 1) as f64
        } else {
            0.0
        };

        ProfilePoint {
            position: Ratio::new::<ratio>(x),
            hot: lerp(self.hot, x),
            cold: lerp(self.cold, x),
        }
    }
}

/// Interpolates between two temperatures, returning each end exactly at
/// `x = 0` and `x = 1`.
fn lerp(ends: [ThermodynamicTemperature; 2], x: f64) -> ThermodynamicTemperature {
    let [start, end] = ends.map(|t| t.get::<kelvin>());
    ThermodynamicTemperature::new::<kelvin>(start * (1.0 - x) + end * x)
}

/// One sample of a [`TemperatureProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Normalized position along the exchanger, in [0, 1].
    pub position: Ratio,
    pub hot: ThermodynamicTemperature,
    pub cold: ThermodynamicTemperature,
}

/// Iterator over the samples of a [`TemperatureProfile`].
#[derive(Debug, Clone)]
pub struct ProfileIter {
    profile: TemperatureProfile,
    next: usize,
}

impl Iterator for ProfileIter {
    type Item = ProfilePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.profile.points {
            return None;
        }
        let point = self.profile.sample(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.profile.points.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProfileIter {}

impl FusedIterator for ProfileIter {}

impl IntoIterator for TemperatureProfile {
    type Item = ProfilePoint;
    type IntoIter = ProfileIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &TemperatureProfile {
    type Item = ProfilePoint;
    type IntoIter = ProfileIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::models::thermal::hx::core::test_support::reference_input;

    #[test]
    fn counterflow_endpoints() {
        let input = reference_input(FlowConfiguration::Counterflow);
        let samples: Vec<_> = TemperatureProfile::from_input(&input).iter().collect();

        assert_eq!(samples.len(), 50);

        let first = samples[0];
        let last = samples[49];
        assert_eq!(first.position.get::<ratio>(), 0.0);
        assert_eq!(first.hot, input.hot().inlet_temperature);
        assert_eq!(first.cold, input.cold().outlet_temperature);
        assert_eq!(last.position.get::<ratio>(), 1.0);
        assert_eq!(last.hot, input.hot().outlet_temperature);
        assert_eq!(last.cold, input.cold().inlet_temperature);
    }

    #[test]
    fn parallel_flow_endpoints() {
        let input = reference_input(FlowConfiguration::ParallelFlow);
        let profile = TemperatureProfile::generate(&input, FlowConfiguration::ParallelFlow, 11);
        let samples: Vec<_> = profile.iter().collect();

        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0].cold, input.cold().inlet_temperature);
        assert_eq!(samples[10].cold, input.cold().outlet_temperature);
    }

    #[test]
    fn configuration_argument_overrides_input() {
        let input = reference_input(FlowConfiguration::ParallelFlow);
        let profile = TemperatureProfile::generate(&input, FlowConfiguration::Counterflow, 3);

        let first = profile.iter().next().unwrap();
        assert_eq!(first.cold, input.cold().outlet_temperature);
    }

    #[test]
    fn midpoint_is_linear() {
        let input = reference_input(FlowConfiguration::Counterflow);
        let profile = TemperatureProfile::generate(&input, FlowConfiguration::Counterflow, 3);

        let mid = profile.iter().nth(1).unwrap();
        assert_relative_eq!(mid.position.get::<ratio>(), 0.5);
        assert_relative_eq!(mid.hot.get::<degree_celsius>(), 120.0, max_relative = 1e-12);
        assert_relative_eq!(mid.cold.get::<degree_celsius>(), 47.5, max_relative = 1e-12);
    }

    #[test]
    fn restartable_and_exact_size() {
        let input = reference_input(FlowConfiguration::Counterflow);
        let profile = TemperatureProfile::from_input(&input);

        let mut iter = profile.iter();
        assert_eq!(iter.len(), 50);
        iter.next();
        assert_eq!(iter.len(), 49);

        let first_pass: Vec<_> = profile.into_iter().collect();
        let second_pass: Vec<_> = (&profile).into_iter().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn degenerate_point_counts() {
        let input = reference_input(FlowConfiguration::Counterflow);

        let empty = TemperatureProfile::generate(&input, FlowConfiguration::Counterflow, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.iter().next(), None);

        let single: Vec<_> =
            TemperatureProfile::generate(&input, FlowConfiguration::Counterflow, 1)
                .iter()
                .collect();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].hot, input.hot().inlet_temperature);
    }
}
