//! Type-safe identifiers for backend entities.
//!
//! The backend hands out numeric database ids; wrapping them keeps a stop
//! id from being confused with any other number floating through the UI.

use std::fmt;

/// Backend identifier of a bus stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(u64);

impl StopId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StopId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_id_equality_and_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(StopId::new(7), "Urząd Gminy");

        assert_eq!(map.get(&StopId::new(7)), Some(&"Urząd Gminy"));
        assert_ne!(StopId::new(7), StopId::new(8));
    }

    #[test]
    fn test_stop_id_display() {
        assert_eq!(format!("{}", StopId::new(42)), "42");
    }

    #[test]
    fn test_stop_id_conversions() {
        let id: StopId = 3u64.into();
        assert_eq!(id.value(), 3);
    }
}
