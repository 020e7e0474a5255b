//! Item categories and how item names map onto them.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Closed set of update categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Generic,
    AgedBrie,
    BackstagePass,
    Legendary,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Generic,
        Category::AgedBrie,
        Category::BackstagePass,
        Category::Legendary,
    ];

    /// Resolve a category from an item name by exact match.
    ///
    /// Names other than the three special ones are generic goods.
    pub fn from_item_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASS => Category::BackstagePass,
            SULFURAS => Category::Legendary,
            _ => Category::Generic,
        }
    }

    /// Item name that identifies this category, if it has one.
    pub fn canonical_name(self) -> Option<&'static str> {
        match self {
            Category::Generic => None,
            Category::AgedBrie => Some(AGED_BRIE),
            Category::BackstagePass => Some(BACKSTAGE_PASS),
            Category::Legendary => Some(SULFURAS),
        }
    }

    /// Stable tag, as accepted by `FromStr` and used by serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::unknown_category(s))
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
