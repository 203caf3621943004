//! Built-in catalog used when no data file is available.

use crate::product::Product;

/// The fixed five-record fallback catalog.
pub fn builtin_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Ноутбук ASUS", 45000.0)
            .with_description("15.6 дюймов, 8GB RAM")
            .with_manufacturer("ASUS")
            .with_discount(10.0)
            .with_stock(5)
            .with_image(""),
        Product::new(2, "Смартфон Samsung", 32000.0)
            .with_description("6.2 дюйма, 128GB")
            .with_manufacturer("Samsung")
            .with_discount(5.0)
            .with_stock(8)
            .with_image(""),
        // Above the highlight threshold.
        Product::new(3, "Наушники Sony", 12000.0)
            .with_description("Беспроводные")
            .with_manufacturer("Sony")
            .with_discount(25.0)
            .with_stock(12)
            .with_image(""),
        Product::new(4, "Монитор LG", 28000.0)
            .with_description("27 дюймов, 4K")
            .with_manufacturer("LG")
            .with_discount(0.0)
            .with_stock(3)
            .with_image(""),
        Product::new(5, "Клавиатура Logitech", 7000.0)
            .with_description("Механическая")
            .with_manufacturer("Logitech")
            .with_discount(15.0)
            .with_stock(20)
            .with_image(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_five_records_with_expected_discounts() {
        let catalog = builtin_catalog();
        let discounts: Vec<f64> = catalog.iter().map(Product::discount_or_zero).collect();
        assert_eq!(discounts, vec![10.0, 5.0, 25.0, 0.0, 15.0]);
    }

    #[test]
    fn serializes_with_data_file_field_names() {
        let json = serde_json::to_value(&builtin_catalog()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ноутбук ASUS");
        assert_eq!(json["price"], 45000.0);
        assert_eq!(json["stock"], 5);
    }
}
