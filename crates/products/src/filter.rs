//! Discount-band filter stage.

use serde::{Deserialize, Serialize};
use techstore_core::ValueObject;

use crate::option::ViewOption;
use crate::product::Product;

/// User-selectable discount range.
///
/// Bounds are inclusive as listed. The two lower bands overlap at exactly 15%:
/// a record with a 15% discount is selected by both `UpTo15` and `From15To20`.
/// The overlap is kept as-is; changing it would change which records users see
/// under each band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBand {
    /// Every record.
    #[default]
    All,
    /// `0 <= discount <= 15.99`.
    #[serde(rename = "up_to_15")]
    UpTo15,
    /// `15 <= discount <= 20.99`.
    #[serde(rename = "from_15_to_20")]
    From15To20,
    /// `discount > 20`.
    #[serde(rename = "over_20")]
    Over20,
}

impl ValueObject for DiscountBand {}

impl ViewOption for DiscountBand {
    const ALL: &'static [Self] = &[Self::All, Self::UpTo15, Self::From15To20, Self::Over20];
    const KIND: &'static str = "discount band";

    fn label(&self) -> &'static str {
        match self {
            DiscountBand::All => "Все диапазоны",
            DiscountBand::UpTo15 => "0-15,99%",
            DiscountBand::From15To20 => "15-20,99%",
            DiscountBand::Over20 => "20% и более",
        }
    }
}

impl DiscountBand {
    /// Whether a discount value (percent) falls inside this band.
    pub fn contains(&self, discount: f64) -> bool {
        match self {
            DiscountBand::All => true,
            DiscountBand::UpTo15 => (0.0..=15.99).contains(&discount),
            DiscountBand::From15To20 => (15.0..=20.99).contains(&discount),
            DiscountBand::Over20 => discount > 20.0,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.contains(product.discount_or_zero())
    }
}

/// Select the records whose discount falls in `band`, preserving input order.
///
/// Always returns a fresh list; `DiscountBand::All` yields a copy of `products`.
pub fn apply_filter(products: &[Product], band: DiscountBand) -> Vec<Product> {
    products
        .iter()
        .filter(|product| band.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use techstore_core::DomainError;

    fn discounts(products: &[Product]) -> Vec<f64> {
        products.iter().map(Product::discount_or_zero).collect()
    }

    #[test]
    fn all_returns_every_record_in_order() {
        let catalog = builtin_catalog();
        assert_eq!(apply_filter(&catalog, DiscountBand::All), catalog);
    }

    #[test]
    fn over_20_selects_only_the_headphones() {
        let filtered = apply_filter(&builtin_catalog(), DiscountBand::Over20);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Наушники Sony");
        assert_eq!(filtered[0].discount_or_zero(), 25.0);
    }

    #[test]
    fn lower_bands_on_builtin_catalog() {
        let catalog = builtin_catalog();
        assert_eq!(
            discounts(&apply_filter(&catalog, DiscountBand::UpTo15)),
            vec![10.0, 5.0, 0.0, 15.0]
        );
        assert_eq!(
            discounts(&apply_filter(&catalog, DiscountBand::From15To20)),
            vec![15.0]
        );
    }

    #[test]
    fn fifteen_percent_belongs_to_both_lower_bands() {
        assert!(DiscountBand::UpTo15.contains(15.0));
        assert!(DiscountBand::From15To20.contains(15.0));
    }

    #[test]
    fn band_edges() {
        assert!(DiscountBand::UpTo15.contains(0.0));
        assert!(DiscountBand::UpTo15.contains(15.99));
        assert!(!DiscountBand::UpTo15.contains(16.0));
        assert!(!DiscountBand::UpTo15.contains(-1.0));

        assert!(!DiscountBand::From15To20.contains(14.99));
        assert!(DiscountBand::From15To20.contains(20.99));
        assert!(!DiscountBand::From15To20.contains(21.0));

        assert!(!DiscountBand::Over20.contains(20.0));
        assert!(DiscountBand::Over20.contains(20.5));
    }

    #[test]
    fn missing_discount_counts_as_zero() {
        let products = vec![Product::new(1, "Без скидки", 100.0)];
        assert_eq!(apply_filter(&products, DiscountBand::UpTo15).len(), 1);
        assert!(apply_filter(&products, DiscountBand::Over20).is_empty());
    }

    #[test]
    fn selector_indices_follow_display_order() {
        assert_eq!(DiscountBand::from_index(0).unwrap(), DiscountBand::All);
        assert_eq!(DiscountBand::from_index(3).unwrap(), DiscountBand::Over20);
        assert_eq!(DiscountBand::Over20.index(), 3);
        assert_eq!(
            DiscountBand::from_index(4).unwrap_err(),
            DomainError::validation("unknown discount band index 4")
        );
        assert_eq!(DiscountBand::labels()[2], "15-20,99%");
        assert_eq!(DiscountBand::from_label("20% и более").unwrap(), DiscountBand::Over20);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (0.0f64..100_000.0, prop::option::of(0.0f64..=100.0)),
                0..40,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (price, discount))| Product {
                        discount: discount.and_then(serde_json::Number::from_f64),
                        ..Product::new(i as i64, format!("item-{i}"), price)
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every selected record satisfies its band, and selection preserves order.
            #[test]
            fn filtered_records_satisfy_band(products in arb_products(), index in 0usize..4) {
                let band = DiscountBand::from_index(index).unwrap();
                let filtered = apply_filter(&products, band);

                prop_assert!(filtered.len() <= products.len());
                for product in &filtered {
                    prop_assert!(band.contains(product.discount_or_zero()));
                }

                let expected: Vec<_> = products.iter().filter(|p| band.matches(p)).cloned().collect();
                prop_assert_eq!(filtered, expected);
            }

            /// Property: the upper band holds exactly the highlighted records.
            #[test]
            fn over_20_is_exactly_the_highlighted_set(products in arb_products()) {
                let filtered = apply_filter(&products, DiscountBand::Over20);
                let highlighted = products.iter().filter(|p| p.is_highlighted()).count();
                prop_assert_eq!(filtered.len(), highlighted);
                prop_assert!(filtered.iter().all(Product::is_highlighted));
            }
        }
    }
}
