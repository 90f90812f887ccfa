//! Domain models for stops.

pub mod types;

pub use types::{LocatorError, Result, Stop};
