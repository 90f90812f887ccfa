//! Cursor over the alternatives of one resolution.

use crate::models::Stop;
use crate::resolver::strategy::Resolution;

/// Steps through same-location alternatives in rotation.
///
/// Holds the alternatives of the most recent resolution plus a zero-based
/// cursor, reset to the nearest stop whenever a new resolution arrives.
/// Advancing never refetches and never reorders the sequence; it only
/// moves the cursor, wrapping around indefinitely. This is single-owner
/// session state: exactly one UI interaction drives it at a time.
#[derive(Clone, Debug, Default)]
pub struct AlternativeCycler {
    alternatives: Vec<Stop>,
    index: usize,
}

impl AlternativeCycler {
    /// Empty cycler with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_resolution(resolution: Resolution) -> Self {
        Self {
            alternatives: resolution.into_alternatives(),
            index: 0,
        }
    }

    /// Replace the alternatives with a fresh resolution; cursor back to 0.
    ///
    /// Any previous state is superseded, matched or not.
    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.alternatives = resolution.into_alternatives();
        self.index = 0;
    }

    /// Move to the next alternative; no-op with fewer than two.
    pub fn advance(&mut self) {
        if self.alternatives.len() > 1 {
            self.index = (self.index + 1) % self.alternatives.len();
        }
    }

    /// The currently selected stop, if any.
    pub fn current(&self) -> Option<&Stop> {
        self.alternatives.get(self.index)
    }

    /// Zero-based cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn alternatives(&self) -> &[Stop] {
        &self.alternatives
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}
