//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity, which is what
//! lets a specific heat in kJ/(kg·K) meet a heat-transfer coefficient in
//! W/(m²·K) without any manual ×1000 bookkeeping.
//!
//! [`uom`] does not subtract two absolute temperatures into a temperature
//! interval, which is the most common operation in heat exchanger work
//! (terminal differences, stream temperature changes). The
//! [`TemperatureDifference`] trait fills that gap:
//!
//! ```
//! use hx_design::support::units::TemperatureDifference;
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let hot_in = ThermodynamicTemperature::new::<degree_celsius>(150.0);
//! let cold_out = ThermodynamicTemperature::new::<degree_celsius>(70.0);
//! assert!((hot_in.minus(cold_out).get::<delta_kelvin>() - 80.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
