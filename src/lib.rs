//! # HX Design
//!
//! Thermal design calculations for two-stream heat exchangers, built on
//! [Twine](https://github.com/isentropic-dev/twine) models and [`uom`]
//! quantities.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for sizing (LMTD) and
//!   rating (ε-NTU) heat exchangers.
//! - [`support`]: Constrained numeric types, temperature helpers and the
//!   heat exchanger relations the models are built from.
//!
//! ## Stability
//!
//! Modules in [`support`] are public because they're useful on their own,
//! but their APIs are not stable. Each model keeps its computational logic
//! in a private `core` module; only the model types and their inputs and
//! outputs are re-exported.

pub mod models;
pub mod support;
