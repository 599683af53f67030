//! Black-box aging scenarios: a mixed inventory driven through many nightly
//! passes, observed only through the public shop API.

use std::collections::HashMap;

use gildedrose_core::{Item, LEGENDARY_QUALITY, QUALITY_MAX, QUALITY_MIN};
use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, GildedRose, SULFURAS, UpdateStrategy,
};

fn standard_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new(CONJURED_MANA_CAKE, 3, 6),
    ]
}

#[test]
fn thirty_days_keep_every_perishable_item_in_band() {
    gildedrose_observability::init();

    let mut shop = GildedRose::new(standard_stock());

    for _ in 0..30 {
        shop.update_quality();

        for item in shop.items() {
            if item.name == SULFURAS {
                assert_eq!(item.quality, LEGENDARY_QUALITY, "{item}");
            } else {
                assert!(item.quality >= QUALITY_MIN, "{item}");
                assert!(item.quality <= QUALITY_MAX, "{item}");
            }
        }
    }
}

#[test]
fn brie_appreciates_singly_then_doubly_until_the_ceiling() {
    gildedrose_observability::init();

    let mut shop = GildedRose::new(vec![Item::new(AGED_BRIE, 2, 0)]);

    shop.update_quality();
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (1, 1));

    shop.update_quality();
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (0, 2));

    // Past the sell-by date the gain doubles.
    shop.update_quality();
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (-1, 4));

    // ... and saturates at the ceiling, never beyond.
    for _ in 0..40 {
        shop.update_quality();
    }
    assert_eq!(shop.items()[0].quality, QUALITY_MAX);
}

#[test]
fn backstage_pass_spikes_through_the_tiers_then_collapses() {
    gildedrose_observability::init();

    let mut shop = GildedRose::new(vec![Item::new(BACKSTAGE_PASS, 15, 20)]);

    // Far out: +1 per day.
    for _ in 0..5 {
        shop.update_quality();
    }
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (10, 25));

    // Ten days out: +2 per day.
    for _ in 0..5 {
        shop.update_quality();
    }
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (5, 35));

    // Five days out: +3 per day, capped at the ceiling.
    for _ in 0..5 {
        shop.update_quality();
    }
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (0, 50));

    // The concert happens; the ticket is worthless from then on.
    shop.update_quality();
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (-1, 0));

    shop.update_quality();
    assert_eq!(shop.items()[0].quality, 0);
}

#[test]
fn conjured_goods_burn_out_at_double_speed() {
    gildedrose_observability::init();

    let mut shop = GildedRose::new(vec![Item::new(CONJURED_MANA_CAKE, 3, 10)]);

    let expected = [(2, 8), (1, 6), (0, 4), (-1, 0), (-2, 0)];
    for (sell_in, quality) in expected {
        shop.update_quality();
        assert_eq!(shop.items()[0].sell_in, sell_in);
        assert_eq!(shop.items()[0].quality, quality);
    }
}

#[test]
fn legendary_stock_survives_any_number_of_days() {
    gildedrose_observability::init();

    let mut shop = GildedRose::new(vec![
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
    ]);

    for _ in 0..100 {
        shop.update_quality();
    }

    assert_eq!(shop.items()[0], Item::new(SULFURAS, 0, LEGENDARY_QUALITY));
    assert_eq!(shop.items()[1], Item::new(SULFURAS, -1, LEGENDARY_QUALITY));
}

#[test]
fn injected_rules_drive_a_whole_run() {
    gildedrose_observability::init();

    /// Custom category: loses quality only on even remaining days.
    #[derive(Debug)]
    struct EveryOtherDay;

    impl UpdateStrategy for EveryOtherDay {
        fn update(&self, item: &mut Item) {
            item.sell_in -= 1;
            if item.sell_in % 2 == 0 {
                item.quality -= 1;
            }
            item.clamp_quality();
        }
    }

    let mut overrides: HashMap<String, Box<dyn UpdateStrategy>> = HashMap::new();
    overrides.insert("Thunderstone".to_string(), Box::new(EveryOtherDay));

    let mut shop = GildedRose::with_strategies(
        vec![
            Item::new("Thunderstone", 6, 10),
            Item::new(AGED_BRIE, 6, 10),
        ],
        overrides,
    );

    for _ in 0..4 {
        shop.update_quality();
    }

    // Four days, two of them even: -2 for the custom rule.
    assert_eq!((shop.items()[0].sell_in, shop.items()[0].quality), (2, 8));
    // Built-ins are untouched by the injection.
    assert_eq!((shop.items()[1].sell_in, shop.items()[1].quality), (2, 14));
}
