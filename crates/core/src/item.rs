use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Lowest quality a perishable item can reach.
pub const QUALITY_MIN: i32 = 0;

/// Highest quality a perishable item can reach.
pub const QUALITY_MAX: i32 = 50;

/// Conventional quality of legendary stock. Legendary items sit outside the
/// perishable band and are never adjusted, so this value is preserved rather
/// than enforced.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stocked item.
///
/// - `name` is the item's identity (unique within a run by convention, not
///   enforced) and selects which aging rule applies to it.
/// - `sell_in` counts days remaining before the sell-by date; it goes
///   negative once the item has expired.
/// - `quality` is the desirability score, kept within
///   [`QUALITY_MIN`, `QUALITY_MAX`] by the aging rules for every category
///   except legendary stock.
///
/// Construction is the caller's responsibility and initial values are not
/// validated; the band is only re-established after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Pull `quality` back into the perishable band after an adjustment.
    ///
    /// Aging rules for legendary stock never call this; their quality is
    /// exempt from the band.
    pub fn clamp_quality(&mut self) {
        self.quality = self.quality.clamp(QUALITY_MIN, QUALITY_MAX);
    }

    /// Whether the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &String {
        &self.name
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
