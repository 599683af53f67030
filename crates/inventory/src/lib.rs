//! Inventory aging domain module.
//!
//! This crate contains the business rules for nightly stock aging, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Each item
//! category has one update rule; the shop dispatcher resolves the rule by item
//! name and applies it to every held item once per simulated day.

pub mod registry;
pub mod shop;
pub mod strategy;

pub use registry::{
    AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, DEFAULT_RULE, SULFURAS, StrategyRegistry,
};
pub use shop::GildedRose;
pub use strategy::{
    Appreciating, BackstagePass, Conjured, Degrading, Legendary, UpdateStrategy,
};
