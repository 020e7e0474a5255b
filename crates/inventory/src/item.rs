use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::quality::Quality;

/// Externally supplied description of an item: `(name, sell_in, quality)`.
///
/// `category` is optional. When absent it is resolved from the name; when
/// present it must agree with any special name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub sell_in: i64,
    pub quality: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// An inventory item owned by the engine.
///
/// Fields are only readable from outside the crate; `sell_in` and `quality`
/// change only through `UpdateEngine::advance_one_day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    category: Category,
    sell_in: i64,
    quality: Quality,
}

impl Item {
    /// Create an item whose category is resolved from its name.
    ///
    /// A non-legendary quality outside `0..=50` is rejected here. Fields are
    /// private and only change through the engine's clamped steps, so
    /// construction is the only place an out-of-range quality could enter.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> DomainResult<Self> {
        let name = name.into();
        let category = Category::from_item_name(&name);
        Self::build(name, category, sell_in, quality)
    }

    /// Create an item with an explicit category.
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        sell_in: i64,
        quality: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let resolved = Category::from_item_name(&name);
        if resolved != Category::Generic && resolved != category {
            return Err(DomainError::validation(format!(
                "item {name:?} belongs to category {resolved}, not {category}"
            )));
        }
        Self::build(name, category, sell_in, quality)
    }

    fn build(name: String, category: Category, sell_in: i64, quality: i64) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let quality = Quality::new(quality);
        if !category.is_legendary() && !quality.is_in_range() {
            return Err(DomainError::validation(format!(
                "quality of {name:?} must be within {}..={}, got {quality}",
                Quality::MIN,
                Quality::MAX
            )));
        }
        Ok(Self {
            name,
            category,
            sell_in,
            quality,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality.value()
    }

    /// Past its sell date.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    pub fn view(&self) -> ItemView {
        ItemView {
            name: self.name.clone(),
            category: self.category,
            sell_in: self.sell_in,
            quality: self.quality.value(),
        }
    }

    pub(crate) fn state(&self) -> (i64, Quality) {
        (self.sell_in, self.quality)
    }

    pub(crate) fn set_state(&mut self, sell_in: i64, quality: Quality) {
        self.sell_in = sell_in;
        self.quality = quality;
    }
}

impl TryFrom<ItemSpec> for Item {
    type Error = DomainError;

    fn try_from(spec: ItemSpec) -> Result<Self, Self::Error> {
        match spec.category {
            Some(category) => Item::with_category(spec.name, category, spec.sell_in, spec.quality),
            None => Item::new(spec.name, spec.sell_in, spec.quality),
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Read-only snapshot of an item, for presentation and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub name: String,
    pub category: Category,
    pub sell_in: i64,
    pub quality: i64,
}
