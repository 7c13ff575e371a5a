//! Line items nested inside checkout and invoice requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DecimalAmount, NumericAmount};

/// Receipt line used for fiscalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Quantity or volume
    #[schema(example = 2.0)]
    pub amount: f64,
    /// Cost of all units (quantity * unit price)
    pub cost: DecimalAmount,
    /// Item ID from the merchant's goods catalogue
    #[schema(example = "1234")]
    pub id: String,
    /// Unit price
    pub price: DecimalAmount,
}

/// Fiscalization data attached to a checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RroInfo {
    /// Goods covered by the payment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Addresses that receive the receipt after fiscalization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_emails: Vec<String>,
}

/// Invoice line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceItem {
    /// Price per unit
    pub amount: NumericAmount,
    /// Number of units
    #[schema(example = 1)]
    pub count: i64,
    /// Unit of measurement
    #[schema(example = "pcs")]
    pub unit: String,
    /// Name of the product or service
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_cost_and_price_are_strings() {
        let item = Item {
            amount: 2.0,
            cost: "20.00".into(),
            id: "SKU-1".to_string(),
            price: "10.00".into(),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"amount": 2.0, "cost": "20.00", "id": "SKU-1", "price": "10.00"})
        );
    }

    #[test]
    fn test_rro_info_omits_empty_sequences() {
        let rro = RroInfo {
            items: vec![Item::default()],
            delivery_emails: Vec::new(),
        };
        let value = serde_json::to_value(&rro).unwrap();
        assert!(value.get("items").is_some());
        assert!(value.get("delivery_emails").is_none());

        assert_eq!(serde_json::to_value(RroInfo::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_rro_info_reads_missing_sequences_as_empty() {
        let rro: RroInfo =
            serde_json::from_value(json!({"delivery_emails": ["a@example.com"]})).unwrap();
        assert!(rro.items.is_empty());
        assert_eq!(rro.delivery_emails, vec!["a@example.com"]);
    }

    #[test]
    fn test_invoice_item_wire_shape() {
        let item = InvoiceItem {
            amount: NumericAmount::new(12.5),
            count: 3,
            unit: "pcs".to_string(),
            name: "Widget".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"amount": 12.5, "count": 3, "unit": "pcs", "name": "Widget"})
        );
    }
}
