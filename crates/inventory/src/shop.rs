use std::collections::HashMap;

use gildedrose_core::{Entity, Item};

use crate::registry::StrategyRegistry;
use crate::strategy::UpdateStrategy;

/// The shop: owns the stock and ages it one day per call.
///
/// Items are supplied at construction and live for the whole run; the shop
/// never creates or removes them. One call to [`GildedRose::update_quality`]
/// is one simulated day. The shop itself is stateless across calls apart
/// from the fixed registry; all observable state lives in the items.
#[derive(Debug)]
pub struct GildedRose {
    items: Vec<Item>,
    registry: StrategyRegistry,
}

impl GildedRose {
    /// A shop over `items` using the built-in five-category rule table.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            registry: StrategyRegistry::builtin(),
        }
    }

    /// A shop with caller-supplied rule overrides merged over the built-in
    /// table (overrides win on matching names, including `"default"`).
    ///
    /// This is the injection point for custom categories; no subclassing,
    /// no registry mutation after construction.
    pub fn with_strategies(
        items: Vec<Item>,
        overrides: HashMap<String, Box<dyn UpdateStrategy>>,
    ) -> Self {
        Self {
            items,
            registry: StrategyRegistry::with_overrides(overrides),
        }
    }

    /// The held stock, in the order it was supplied.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the shop and reclaim the stock.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance the whole inventory by one day.
    ///
    /// Every item is aged exactly once, in input order, by the rule its name
    /// resolves to; unrecognized names age like normal goods. Callers must
    /// serialize these passes; the shop is not a concurrent structure.
    pub fn update_quality(&mut self) {
        for item in &mut self.items {
            self.registry.resolve(item.id()).update(item);
            tracing::debug!(
                "aged {}: sell_in={}, quality={}",
                item.name,
                item.sell_in,
                item.quality
            );
        }
    }
}
