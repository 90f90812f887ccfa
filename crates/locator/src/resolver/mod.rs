//! Nearest-stop resolution.
//!
//! Given a reference point (device location or a geocoded address) and the
//! fetched stop list, work out which stop the user most plausibly means.
//! Resolution is a pure function over immutable inputs; the only session
//! state is the [`AlternativeCycler`] cursor the UI drives.

pub mod candidates;
pub mod cycler;
pub mod strategy;

pub use candidates::{candidates_within, Candidate};
pub use cycler::AlternativeCycler;
pub use strategy::{resolve, resolve_geocoded, Resolution, FALLBACK_RADIUS_KM, NEARBY_RADIUS_KM};
