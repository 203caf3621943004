//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Selector options (discount bands, sort orders) are the
//! value objects of this domain.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Copy**: selector options are plain values passed into pure functions
/// - **PartialEq**: compared by value
/// - **Debug**: visible in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum SortOrder { Unsorted, PriceAscending }
///
/// impl ValueObject for SortOrder {}
/// ```
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
