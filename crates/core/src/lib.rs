//! `gildedrose-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! engine (no infrastructure concerns).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
