//! Per-category daily update rules.
//!
//! Each rule is a pure function of `(sell_in, quality)` returning the next
//! day's `(sell_in, quality)`. Thresholds that look at `sell_in` before the
//! decrement use the value the day started with.

use crate::category::Category;
use crate::quality::Quality;

/// One day's transformation for a category.
pub type Rule = fn(i64, Quality) -> (i64, Quality);

/// Backstage passes gain an extra point while fewer than this many days remain.
const BACKSTAGE_FIRST_THRESHOLD: i64 = 11;
/// ...and another extra point below this one.
const BACKSTAGE_SECOND_THRESHOLD: i64 = 6;

pub fn rule_for(category: Category) -> Rule {
    match category {
        Category::Generic => generic,
        Category::AgedBrie => aged_brie,
        Category::BackstagePass => backstage_pass,
        Category::Legendary => legendary,
    }
}

/// One day closer to the sell date. Saturates at `i64::MIN`.
fn next_day(sell_in: i64) -> i64 {
    sell_in.saturating_sub(1)
}

pub fn generic(sell_in: i64, quality: Quality) -> (i64, Quality) {
    let mut quality = quality.decreased();
    let sell_in = next_day(sell_in);
    if sell_in < 0 {
        quality = quality.decreased();
    }
    (sell_in, quality)
}

pub fn aged_brie(sell_in: i64, quality: Quality) -> (i64, Quality) {
    let mut quality = quality.increased();
    let sell_in = next_day(sell_in);
    if sell_in < 0 {
        quality = quality.increased();
    }
    (sell_in, quality)
}

pub fn backstage_pass(sell_in: i64, quality: Quality) -> (i64, Quality) {
    let mut quality = quality.increased();
    if sell_in < BACKSTAGE_FIRST_THRESHOLD {
        quality = quality.increased();
    }
    if sell_in < BACKSTAGE_SECOND_THRESHOLD {
        quality = quality.increased();
    }
    let sell_in = next_day(sell_in);
    if sell_in < 0 {
        quality = quality.zeroed();
    }
    (sell_in, quality)
}

pub fn legendary(sell_in: i64, quality: Quality) -> (i64, Quality) {
    (sell_in, quality)
}
