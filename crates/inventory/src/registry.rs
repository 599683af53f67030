use std::collections::HashMap;

use crate::strategy::{
    Appreciating, BackstagePass, Conjured, Degrading, Legendary, UpdateStrategy,
};

/// Appreciating cheese.
pub const AGED_BRIE: &str = "Aged Brie";

/// Event tickets.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Legendary stock.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Fast-decaying conjured goods.
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Registry key for the fallback rule applied to any unrecognized name.
pub const DEFAULT_RULE: &str = "default";

/// Name → aging rule table.
///
/// Built once at construction by merging the built-in table with
/// caller-supplied overrides; overrides win on matching names, including
/// [`DEFAULT_RULE`]. The fallback rule lives in a dedicated slot, so every
/// lookup resolves — unknown names silently age like normal goods rather
/// than failing.
#[derive(Debug)]
pub struct StrategyRegistry {
    named: HashMap<String, Box<dyn UpdateStrategy>>,
    fallback: Box<dyn UpdateStrategy>,
}

impl StrategyRegistry {
    /// The built-in five-category table with no overrides.
    pub fn builtin() -> Self {
        Self::with_overrides(HashMap::new())
    }

    /// Build the registry from the built-in table plus caller overrides.
    ///
    /// An override under [`DEFAULT_RULE`] replaces the fallback itself;
    /// every other entry replaces or extends the named table.
    pub fn with_overrides(mut overrides: HashMap<String, Box<dyn UpdateStrategy>>) -> Self {
        let fallback = overrides
            .remove(DEFAULT_RULE)
            .unwrap_or_else(|| Box::new(Degrading));

        let mut named: HashMap<String, Box<dyn UpdateStrategy>> = HashMap::new();
        named.insert(AGED_BRIE.to_string(), Box::new(Appreciating));
        named.insert(BACKSTAGE_PASS.to_string(), Box::new(BackstagePass));
        named.insert(SULFURAS.to_string(), Box::new(Legendary));
        named.insert(CONJURED_MANA_CAKE.to_string(), Box::new(Conjured));
        named.extend(overrides);

        Self { named, fallback }
    }

    /// Resolve the aging rule for an item name (exact, case-sensitive match;
    /// anything else gets the fallback).
    pub fn resolve(&self, name: &str) -> &dyn UpdateStrategy {
        self.named
            .get(name)
            .map(Box::as_ref)
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
