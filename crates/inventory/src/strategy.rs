use gildedrose_core::{Item, QUALITY_MAX};

/// Ages one item by one day.
///
/// Strategies are stateless and deterministic: they mutate only the item they
/// are handed, never read other items, and have no side effects beyond that
/// single mutation. `Send + Sync` lets a built registry be shared, but callers
/// must still serialize daily passes; concurrent passes over the same stock
/// are out of scope.
pub trait UpdateStrategy: core::fmt::Debug + Send + Sync {
    /// Advance the item by one day, adjusting `sell_in` and `quality`.
    fn update(&self, item: &mut Item);
}

/// Normal goods: lose one quality per day, two per day once expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Degrading;

impl UpdateStrategy for Degrading {
    fn update(&self, item: &mut Item) {
        item.sell_in -= 1;
        if item.is_expired() {
            item.quality -= 2;
        } else {
            item.quality -= 1;
        }
        item.clamp_quality();
    }
}

/// Appreciating goods (e.g. aged cheese): gain quality at the rate normal
/// goods lose it, capped at the band ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Appreciating;

impl UpdateStrategy for Appreciating {
    fn update(&self, item: &mut Item) {
        item.sell_in -= 1;
        if item.is_expired() {
            item.quality += 2;
        } else {
            item.quality += 1;
        }
        item.clamp_quality();
    }
}

/// Event tickets: desirability climbs as the date approaches, then collapses.
///
/// The urgency tiers are read from `sell_in` *before* today's decrement: with
/// any validity left the ticket gains +1, another +1 inside ten days, another
/// +1 inside five. Once the event has passed the ticket is worthless and
/// quality is forced to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackstagePass;

impl UpdateStrategy for BackstagePass {
    fn update(&self, item: &mut Item) {
        if item.sell_in > 0 {
            item.quality += 1;

            if item.sell_in <= 10 && item.quality < QUALITY_MAX {
                item.quality += 1;
            }

            if item.sell_in <= 5 && item.quality < QUALITY_MAX {
                item.quality += 1;
            }
        } else {
            item.quality = 0;
        }

        item.sell_in -= 1;

        if item.quality > QUALITY_MAX {
            item.quality = QUALITY_MAX;
        }
    }
}

/// Legendary stock: never ages, never loses quality.
///
/// The quality band is intentionally not applied here; a legendary item keeps
/// whatever quality it was stocked with (80 by convention).
#[derive(Debug, Clone, Copy, Default)]
pub struct Legendary;

impl UpdateStrategy for Legendary {
    fn update(&self, _item: &mut Item) {}
}

/// Conjured goods: decay twice as fast as normal goods in both phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conjured;

impl UpdateStrategy for Conjured {
    fn update(&self, item: &mut Item) {
        item.sell_in -= 1;
        if item.is_expired() {
            item.quality -= 4;
        } else {
            item.quality -= 2;
        }
        item.clamp_quality();
    }
}
