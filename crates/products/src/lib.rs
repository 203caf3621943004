//! Products domain module.
//!
//! This crate contains the product record and the view pipeline over it
//! (discount filtering, price sorting), implemented purely as deterministic
//! domain logic (no IO, no UI, no storage).

pub mod catalog;
pub mod filter;
pub mod option;
pub mod product;
pub mod sort;
pub mod view;

pub use catalog::builtin_catalog;
pub use filter::{DiscountBand, apply_filter};
pub use option::ViewOption;
pub use product::{HIGHLIGHT_THRESHOLD, Product};
pub use sort::{SortOrder, apply_sort};
pub use view::{CatalogView, ViewQuery, apply_view};
