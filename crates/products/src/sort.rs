//! Price sort stage.

use serde::{Deserialize, Serialize};
use techstore_core::ValueObject;

use crate::option::ViewOption;
use crate::product::Product;

/// User-selectable ordering of the visible records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep the filtered order.
    #[default]
    Unsorted,
    PriceAscending,
    PriceDescending,
}

impl ValueObject for SortOrder {}

impl ViewOption for SortOrder {
    const ALL: &'static [Self] = &[Self::Unsorted, Self::PriceAscending, Self::PriceDescending];
    const KIND: &'static str = "sort order";

    fn label(&self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Без сортировки",
            SortOrder::PriceAscending => "Цена по возрастанию",
            SortOrder::PriceDescending => "Цена по убыванию",
        }
    }
}

/// Order `products` by raw (pre-discount) price.
///
/// The sort is stable in both directions: records with equal prices keep their
/// relative input order, including under `PriceDescending`.
pub fn apply_sort(mut products: Vec<Product>, order: SortOrder) -> Vec<Product> {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::PriceAscending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDescending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn prices(products: &[Product]) -> Vec<f64> {
        products.iter().map(|p| p.price).collect()
    }

    #[test]
    fn descending_on_builtin_catalog() {
        let sorted = apply_sort(builtin_catalog(), SortOrder::PriceDescending);
        assert_eq!(prices(&sorted), vec![45000.0, 32000.0, 28000.0, 12000.0, 7000.0]);
    }

    #[test]
    fn ascending_on_builtin_catalog() {
        let sorted = apply_sort(builtin_catalog(), SortOrder::PriceAscending);
        assert_eq!(prices(&sorted), vec![7000.0, 12000.0, 28000.0, 32000.0, 45000.0]);
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let catalog = builtin_catalog();
        assert_eq!(apply_sort(catalog.clone(), SortOrder::Unsorted), catalog);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let products = vec![
            Product::new(1, "first", 100.0),
            Product::new(2, "second", 50.0),
            Product::new(3, "third", 100.0),
        ];

        let ids = |list: &[Product]| list.iter().map(|p| p.id.as_number().unwrap_or_default()).collect::<Vec<_>>();

        assert_eq!(ids(&apply_sort(products.clone(), SortOrder::PriceAscending)), vec![2, 1, 3]);
        assert_eq!(ids(&apply_sort(products, SortOrder::PriceDescending)), vec![1, 3, 2]);
    }

    #[test]
    fn selector_indices_follow_display_order() {
        assert_eq!(SortOrder::from_index(2).unwrap(), SortOrder::PriceDescending);
        assert!(SortOrder::from_index(3).is_err());
        assert_eq!(SortOrder::labels(), vec!["Без сортировки", "Цена по возрастанию", "Цена по убыванию"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: sorted output is monotonic and a permutation of the input.
            #[test]
            fn sorted_prices_are_monotonic(raw in prop::collection::vec(0.0f64..1_000_000.0, 0..40)) {
                let products: Vec<Product> = raw
                    .iter()
                    .enumerate()
                    .map(|(i, price)| Product::new(i as i64, format!("item-{i}"), *price))
                    .collect();

                let ascending = apply_sort(products.clone(), SortOrder::PriceAscending);
                prop_assert!(ascending.windows(2).all(|w| w[0].price <= w[1].price));

                let descending = apply_sort(products.clone(), SortOrder::PriceDescending);
                prop_assert!(descending.windows(2).all(|w| w[0].price >= w[1].price));

                prop_assert_eq!(ascending.len(), products.len());
                prop_assert_eq!(descending.len(), products.len());
                prop_assert_eq!(apply_sort(products.clone(), SortOrder::Unsorted), products);
            }
        }
    }
}
