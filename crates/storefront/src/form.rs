//! Product form state and form-to-JSON marshaling.
//!
//! A [`ProductForm`] holds raw text exactly as typed. [`ProductForm::to_payload`]
//! coerces price and stock to numbers the way a browser's `parseFloat` and
//! `parseInt` would: the longest numeric prefix wins, and input with no
//! numeric prefix becomes "not a number", which is sent as JSON `null`.
//! Nothing else is validated client-side; the backend owns that.

use serde::Serialize;
use tracing::warn;

use crate::product::Product;

/// Raw field values of a product create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Name field.
    pub name: String,
    /// Description field.
    pub description: String,
    /// Category field.
    pub category: String,
    /// Price field, as typed.
    pub price: String,
    /// Size field.
    pub size: String,
    /// Color field.
    pub color: String,
    /// Stock field, as typed.
    pub stock: String,
    /// Image URL field.
    pub image_url: String,
}

/// JSON body for create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    /// Product name.
    pub name: String,
    /// Description (may be empty).
    pub description: String,
    /// Category.
    pub category: String,
    /// Coerced price; `None` serializes as `null`.
    pub price: Option<f64>,
    /// Size.
    pub size: String,
    /// Color.
    pub color: String,
    /// Coerced stock; `None` serializes as `null`.
    pub stock: Option<i64>,
    /// Image URL (may be empty).
    pub image_url: String,
}

impl ProductForm {
    /// Populate a form from an existing product, as the edit modal does.
    ///
    /// Optional text fields fall back to the empty string.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            category: product.category.clone(),
            price: product.price.to_string(),
            size: product.size.clone(),
            color: product.color.clone(),
            stock: product.stock.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Marshal the form into a request body.
    #[must_use]
    pub fn to_payload(&self) -> ProductPayload {
        let price = parse_float(&self.price);
        if price.is_none() {
            warn!(value = %self.price, "Price is not a number, submitting null");
        }

        let stock = parse_int(&self.stock);
        if stock.is_none() {
            warn!(value = %self.stock, "Stock is not a number, submitting null");
        }

        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price,
            size: self.size.clone(),
            color: self.color.clone(),
            stock,
            image_url: self.image_url.clone(),
        }
    }
}

/// Parse the longest leading decimal number, ignoring leading whitespace.
#[must_use]
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if digits + frac_digits > 0 {
            end += 1 + frac_digits;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parse the longest leading integer, ignoring leading whitespace.
///
/// A prefix that does not fit in an `i64` yields `None`, so an overflowing
/// stock value is submitted as `null` rather than as a float.
#[must_use]
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
