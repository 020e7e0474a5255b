//! Black-box checks of one-day updates through the public engine API.

use gildedrose_inventory::{Item, ItemSpec, UpdateEngine};

const BRIE: &str = "Aged Brie";
const PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
const GENERIC: &str = "generic item";

fn after_one_day(specs: Vec<ItemSpec>) -> Vec<Item> {
    let mut engine = UpdateEngine::from_specs(specs).unwrap();
    engine.advance_one_day();
    engine.into_items()
}

fn single(name: &str, sell_in: i64, quality: i64) -> Item {
    after_one_day(vec![ItemSpec::new(name, sell_in, quality)]).remove(0)
}

#[test]
fn legendary_item_does_not_have_to_be_sold() {
    assert_eq!(single(SULFURAS, 20, 10).sell_in(), 20);
}

#[test]
fn non_legendary_items_have_to_be_sold() {
    let items = after_one_day(vec![
        ItemSpec::new(GENERIC, 20, 0),
        ItemSpec::new(BRIE, 20, 0),
        ItemSpec::new(PASS, 20, 0),
    ]);
    for item in &items {
        assert_eq!(item.sell_in(), 19, "{}", item.name());
    }
}

#[test]
fn generic_item_quality_decreases_by_one() {
    let item = single(GENERIC, 20, 10);
    assert_eq!((item.sell_in(), item.quality()), (19, 9));
}

#[test]
fn generic_item_quality_does_not_go_below_zero() {
    assert_eq!(single(GENERIC, 20, 0).quality(), 0);
    assert_eq!(single(GENERIC, -1, 0).quality(), 0);
}

#[test]
fn overdue_generic_item_quality_decreases_by_two() {
    assert_eq!(single(GENERIC, -1, 10).quality(), 8);
}

#[test]
fn legendary_quality_does_not_change() {
    assert_eq!(single(SULFURAS, 20, 10).quality(), 10);
    assert_eq!(single(SULFURAS, -1, 10).quality(), 10);
}

#[test]
fn aged_brie_quality_increases_by_one() {
    let item = single(BRIE, 20, 10);
    assert_eq!((item.sell_in(), item.quality()), (19, 11));
}

#[test]
fn overdue_aged_brie_quality_increases_by_two() {
    assert_eq!(single(BRIE, -1, 10).quality(), 12);
    assert_eq!(single(BRIE, -1, 49).quality(), 50);
    assert_eq!(single(BRIE, -1, 50).quality(), 50);
}

#[test]
fn quality_does_not_go_above_fifty() {
    let items = after_one_day(vec![ItemSpec::new(BRIE, 20, 50), ItemSpec::new(PASS, 20, 50)]);
    assert_eq!(items[0].quality(), 50);
    assert_eq!(items[1].quality(), 50);
}

#[test]
fn backstage_pass_gains_one_from_eleven_days_out() {
    assert_eq!(single(PASS, 11, 10).quality(), 11);
}

#[test]
fn backstage_pass_gains_two_from_ten_days_out() {
    assert_eq!(single(PASS, 10, 10).quality(), 12);
    assert_eq!(single(PASS, 10, 49).quality(), 50);
}

#[test]
fn backstage_pass_gains_three_from_five_days_out() {
    assert_eq!(single(PASS, 5, 10).quality(), 13);
    assert_eq!(single(PASS, 5, 48).quality(), 50);
}

#[test]
fn overdue_backstage_pass_drops_to_zero() {
    assert_eq!(single(PASS, -1, 10).quality(), 0);
}

#[test]
fn legendary_item_is_unchanged_after_many_days() {
    let mut engine = UpdateEngine::from_specs(vec![ItemSpec::new(SULFURAS, 0, 80)]).unwrap();
    engine.advance_days(365);
    let item = engine.get(0).unwrap();
    assert_eq!((item.sell_in(), item.quality()), (0, 80));
}

#[test]
fn unrecognized_names_follow_the_generic_rule() {
    for name in ["generic item", "Conjured Mana Cake", "aged brie"] {
        let item = single(name, 20, 10);
        assert_eq!((item.sell_in(), item.quality()), (19, 9), "{name}");
        assert_eq!(single(name, -1, 10).quality(), 8, "{name}");
        assert_eq!(single(name, 20, 0).quality(), 0, "{name}");
    }
}

#[test]
fn extreme_sell_in_values_tick_without_overflow() {
    let specs = |sell_in| {
        vec![
            ItemSpec::new(GENERIC, sell_in, 10),
            ItemSpec::new(BRIE, sell_in, 10),
            ItemSpec::new(PASS, sell_in, 10),
            ItemSpec::new(SULFURAS, sell_in, 80),
        ]
    };
    let state = |items: Vec<Item>| -> Vec<(i64, i64)> {
        items.iter().map(|i| (i.sell_in(), i.quality())).collect()
    };

    assert_eq!(
        state(after_one_day(specs(i64::MIN))),
        vec![(i64::MIN, 8), (i64::MIN, 12), (i64::MIN, 0), (i64::MIN, 80)]
    );
    assert_eq!(
        state(after_one_day(specs(i64::MAX))),
        vec![
            (i64::MAX - 1, 9),
            (i64::MAX - 1, 11),
            (i64::MAX - 1, 11),
            (i64::MAX, 80),
        ]
    );

    let mut engine = UpdateEngine::from_specs(specs(i64::MIN + 1)).unwrap();
    engine.advance_days(3);
    assert!(engine.items()[..3].iter().all(|i| i.sell_in() == i64::MIN));
    assert!(engine.check_invariants().is_ok());
}
