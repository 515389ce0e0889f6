//! Public Twine models.
//!
//! Each model lives in its own module with an internal `core` submodule where
//! the computation lives. The [`twine_core::Model`] implementations are thin
//! adapters over that core, and a single core may back several adapters.

pub mod thermal;
