use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use techstore_core::ProductId;

/// Discount (percent) above which a record is highlighted in the grid.
///
/// The comparison is strict: a record at exactly 20% is not highlighted.
pub const HIGHLIGHT_THRESHOLD: f64 = 20.0;

/// One product record, as stored in the data file.
///
/// Only `name` and `price` are required. Missing or `null` optional fields fall
/// back to their defaults at read time (zero discount, zero stock, empty text),
/// so the record is kept exactly as loaded. Discount and stock keep the number
/// as written (`10` and `10.0` display differently).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Price before discount.
    pub price: f64,
    /// Discount in percent (0–100).
    #[serde(default)]
    pub discount: Option<Number>,
    #[serde(default)]
    pub stock: Option<Number>,
    /// Image reference. Rendered as a placeholder only, so any scalar is
    /// accepted and kept as text.
    #[serde(default, deserialize_with = "scalar_text")]
    pub image: Option<String>,
}

impl Product {
    /// Create a record with the required fields; everything else is absent.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: None,
            manufacturer: None,
            price,
            discount: None,
            stock: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Integral values are stored as integers, so `with_discount(10.0)` shows as `10%`.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(number_from_f64(discount));
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(Number::from(stock));
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn manufacturer_or_empty(&self) -> &str {
        self.manufacturer.as_deref().unwrap_or_default()
    }

    pub fn discount_or_zero(&self) -> f64 {
        self.discount.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
    }

    /// Discount as written in the source; `0` when absent.
    pub fn discount_text(&self) -> String {
        number_text(self.discount.as_ref())
    }

    /// Stock as written in the source; `0` when absent.
    pub fn stock_text(&self) -> String {
        number_text(self.stock.as_ref())
    }

    pub fn has_discount(&self) -> bool {
        self.discount_or_zero() > 0.0
    }

    /// Price after applying the discount.
    pub fn final_price(&self) -> f64 {
        self.price * (1.0 - self.discount_or_zero() / 100.0)
    }

    /// Whether the record's row gets the highlight background.
    pub fn is_highlighted(&self) -> bool {
        self.discount_or_zero() > HIGHLIGHT_THRESHOLD
    }
}

fn number_text(number: Option<&Number>) -> String {
    number.map_or_else(|| "0".to_string(), Number::to_string)
}

fn number_from_f64(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
