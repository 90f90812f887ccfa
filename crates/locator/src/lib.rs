//! # bus-locator
//!
//! Client-side stop location for a regional bus-schedule app.
//!
//! The backend REST API owns routes, schedules and auth; this crate owns
//! the pure logic the client needs on top of the fetched stop list.
//!
//! ## Features
//!
//! - **Nearest-stop resolution**: two-tier policy. Every stop within
//!   0.5 km is a pickable alternative; otherwise a single best-effort
//!   guess under 15 km; otherwise no match
//! - **Alternative cycling**: step through same-location alternatives
//!   (opposite street sides) with one repeated action
//! - **Spatial index**: R-tree backed radius and top-k nearby queries
//! - **Typeahead suggestions**: substring search over stop names
//! - **Pluggable fetching**: bring your own HTTP client via [`StopSource`]
//!
//! ## Example
//!
//! ```
//! use bus_locator::prelude::*;
//! use geo::Point;
//!
//! let stops = vec![
//!     Stop {
//!         id: StopId::new(1),
//!         name: "Urząd Gminy 01".into(),
//!         city: "Kłodawa".into(),
//!         location: Some(Point::new(15.2103, 52.7902)),
//!         directions: vec!["Gorzów Wlkp.".into()],
//!     },
//!     Stop {
//!         id: StopId::new(2),
//!         name: "Urząd Gminy 02".into(),
//!         city: "Kłodawa".into(),
//!         location: Some(Point::new(15.2099, 52.7899)),
//!         directions: vec!["Wojcieszyce".into()],
//!     },
//! ];
//!
//! // Both stops sit within 0.5 km: the user picks a street side.
//! let resolution = resolve(Point::new(15.2101, 52.7901), &stops);
//! assert!(resolution.matched());
//! assert_eq!(resolution.alternatives().len(), 2);
//!
//! let mut cycler = AlternativeCycler::from_resolution(resolution);
//! let first = cycler.current().unwrap().id;
//! cycler.advance();
//! assert_ne!(cycler.current().unwrap().id, first);
//! ```

pub mod identifiers;
pub mod models;
pub mod resolver;
pub mod source;
pub mod spatial;
pub mod suggest;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::StopId;
    pub use crate::models::{LocatorError, Result, Stop};
    pub use crate::resolver::{
        candidates_within, resolve, resolve_geocoded, AlternativeCycler, Candidate,
        Resolution, FALLBACK_RADIUS_KM, NEARBY_RADIUS_KM,
    };
    pub use crate::source::{load_stops, parse_stops, StopSource};
    pub use crate::spatial::{RankedStop, StopIndex, DEFAULT_NEARBY_LIMIT};
    pub use crate::suggest::{suggest_stops, SUGGESTION_LIMIT};
}

pub use prelude::*;
