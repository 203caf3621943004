//! `techstore-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no UI concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
