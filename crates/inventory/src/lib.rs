//! Inventory domain module: the daily update engine.
//!
//! This crate contains the per-category aging rules for the inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod engine;
pub mod item;
pub mod quality;
pub mod rules;

pub use category::Category;
pub use engine::UpdateEngine;
pub use item::{Item, ItemSpec, ItemView};
pub use quality::Quality;
pub use rules::Rule;
