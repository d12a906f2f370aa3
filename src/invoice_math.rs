//! Pure arithmetic over invoice line items, plus the structured payload
//! carried in an invoice's `description` field.
//!
//! The persisted `amount` string always wins for the headline total; line
//! items are re-derived independently for the itemized table. The two are
//! deliberately never reconciled.

use serde::{Deserialize, Serialize};

/// One billable row composing an invoice's total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// The structured document serialized into `Invoice::description`. Opaque
/// to the storage layer; field names match the shareable wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    /// Missing in some hand-written payloads; an absent array renders an
    /// empty itemized table rather than triggering the opaque fallback.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub tax_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.quantity * i.unit_price).sum()
}

pub fn discount_amount(subtotal: f64, discount_percent: f64) -> f64 {
    subtotal * discount_percent / 100.0
}

/// Tax is computed on the post-discount amount.
pub fn tax_amount(subtotal: f64, discount_amount: f64, tax_percent: f64) -> f64 {
    (subtotal - discount_amount) * tax_percent / 100.0
}

pub fn total(subtotal: f64, discount_amount: f64, tax_amount: f64) -> f64 {
    subtotal - discount_amount + tax_amount
}

/// Two-decimal display rounding, presentation time only.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

impl InvoiceDetails {
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a description payload, tolerating anything that is not the
    /// structured document: the whole string becomes a single line item
    /// with quantity 1 and the parsed invoice amount as unit price.
    pub fn decode(description: &str, amount: &str) -> Self {
        match serde_json::from_str::<InvoiceDetails>(description) {
            Ok(details) => details,
            Err(_) => InvoiceDetails {
                line_items: vec![LineItem {
                    description: description.to_string(),
                    quantity: 1.0,
                    unit_price: amount.parse().unwrap_or(0.0),
                }],
                discount_percent: 0.0,
                tax_percent: 0.0,
                notes: None,
            },
        }
    }

    /// Re-derived total for the itemized table. May disagree with the
    /// persisted amount if line items were edited after persistence; the
    /// persisted amount stays authoritative and callers surface the
    /// divergence rather than reconcile it.
    pub fn derived_total(&self) -> f64 {
        let sub = subtotal(&self.line_items);
        let discount = discount_amount(sub, self.discount_percent);
        let tax = tax_amount(sub, discount, self.tax_percent);
        total(sub, discount, tax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let items = vec![LineItem {
            description: "Screen replacement".to_string(),
            quantity: 2.0,
            unit_price: 50.0,
        }];

        let sub = subtotal(&items);
        assert_eq!(sub, 100.0);

        let discount = discount_amount(sub, 10.0);
        assert_eq!(discount, 10.0);

        let tax = tax_amount(sub, discount, 5.0);
        assert_eq!(tax, 4.5);

        assert_eq!(total(sub, discount, tax), 94.5);
        assert_eq!(format_amount(total(sub, discount, tax)), "94.50");
    }

    #[test]
    fn empty_line_items() {
        assert_eq!(subtotal(&[]), 0.0);
    }

    #[test]
    fn encode_decode_structured() {
        let details = InvoiceDetails {
            line_items: vec![LineItem {
                description: "Battery".to_string(),
                quantity: 1.0,
                unit_price: 30.0,
            }],
            discount_percent: 0.0,
            tax_percent: 18.0,
            notes: Some("Warranty 3 months".to_string()),
        };

        let encoded = details.encode().unwrap();
        assert!(encoded.contains("\"lineItems\""));
        assert!(encoded.contains("\"unitPrice\""));

        let decoded = InvoiceDetails::decode(&encoded, "35.40");
        assert_eq!(decoded, details);
    }

    #[test]
    fn decode_falls_back_to_single_item() {
        let details = InvoiceDetails::decode("Screen repair and cleaning", "94.50");
        assert_eq!(details.line_items.len(), 1);
        assert_eq!(details.line_items[0].description, "Screen repair and cleaning");
        assert_eq!(details.line_items[0].quantity, 1.0);
        assert_eq!(details.line_items[0].unit_price, 94.5);
        assert_eq!(details.discount_percent, 0.0);
        assert_eq!(details.tax_percent, 0.0);
    }

    #[test]
    fn decode_tolerates_missing_line_items() {
        let details = InvoiceDetails::decode(r#"{"discountPercent":5,"taxPercent":18}"#, "94.50");
        assert!(details.line_items.is_empty());
        assert_eq!(details.discount_percent, 5.0);
        assert_eq!(details.tax_percent, 18.0);
    }

    #[test]
    fn decode_fallback_with_unparseable_amount() {
        let details = InvoiceDetails::decode("flat fee", "n/a");
        assert_eq!(details.line_items[0].unit_price, 0.0);
    }

    #[test]
    fn derived_total_matches_math() {
        let details = InvoiceDetails {
            line_items: vec![LineItem {
                description: "Repair".to_string(),
                quantity: 2.0,
                unit_price: 50.0,
            }],
            discount_percent: 10.0,
            tax_percent: 5.0,
            notes: None,
        };
        assert_eq!(details.derived_total(), 94.5);
    }
}
