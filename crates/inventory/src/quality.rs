//! Item quality and its clamped single-step adjustments.

use core::fmt;

use gildedrose_core::ValueObject;

/// Quality of an item.
///
/// Every adjustment is a single clamped step. Larger changes are expressed as
/// repeated steps so the clamp only ever absorbs the overshoot of the last one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(i64);

impl ValueObject for Quality {}

impl Quality {
    /// Floor for every non-legendary item.
    pub const MIN: i64 = 0;
    /// Ceiling for every non-legendary item.
    pub const MAX: i64 = 50;
    /// Conventional quality of a legendary item.
    pub const LEGENDARY: i64 = 80;

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }

    /// `min(q + 1, 50)`.
    pub fn increased(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// `max(q - 1, 0)`.
    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// Unconditional reset, used for expired backstage passes.
    pub fn zeroed(self) -> Self {
        Self(0)
    }
}

impl From<i64> for Quality {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Quality> for i64 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
