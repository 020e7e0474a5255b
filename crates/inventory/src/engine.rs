//! The update engine: owns the inventory and ages it one day at a time.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::{Item, ItemSpec};
use crate::rules::{self, Rule};

/// Engine-owned, ordered inventory.
///
/// Each item's rule is looked up once, when the engine is built; a tick only
/// runs the stored rules. Updates are independent per item and run in list
/// order.
#[derive(Debug, Clone)]
pub struct UpdateEngine {
    items: Vec<Item>,
    rules: Vec<Rule>,
    days_elapsed: u64,
}

impl UpdateEngine {
    pub fn new(items: Vec<Item>) -> Self {
        let rules = items
            .iter()
            .map(|item| rules::rule_for(item.category()))
            .collect();
        Self {
            items,
            rules,
            days_elapsed: 0,
        }
    }

    /// Validate and take ownership of externally described items.
    ///
    /// Fails on the first invalid spec; the error names its position.
    pub fn from_specs<I>(specs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = ItemSpec>,
    {
        let items = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                Item::try_from(spec).map_err(|err| match err {
                    DomainError::Validation(msg) => {
                        DomainError::validation(format!("item #{index}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(items))
    }

    /// Apply exactly one day's update to every item.
    pub fn advance_one_day(&mut self) {
        for (item, rule) in self.items.iter_mut().zip(&self.rules) {
            let (sell_in, quality) = item.state();
            let (next_sell_in, next_quality) = rule(sell_in, quality);
            tracing::trace!(
                item = item.name(),
                category = %item.category(),
                sell_in,
                next_sell_in,
                quality = quality.value(),
                next_quality = next_quality.value(),
                "item aged"
            );
            item.set_state(next_sell_in, next_quality);
        }

        self.days_elapsed += 1;
        tracing::debug!(day = self.days_elapsed, items = self.items.len(), "advanced one day");
    }

    /// Apply `days` sequential ticks.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of ticks applied since construction.
    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    /// Verify that every non-legendary item's quality is within bounds.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.category().is_legendary() {
                continue;
            }
            if !crate::Quality::new(item.quality()).is_in_range() {
                return Err(DomainError::invariant(format!(
                    "item #{index} ({}) has quality {} after day {}",
                    item.name(),
                    item.quality(),
                    self.days_elapsed
                )));
            }
        }
        Ok(())
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl FromIterator<Item> for UpdateEngine {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a UpdateEngine {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
