//! Change detection between a product snapshot and an edited draft.

use serde::Deserialize;

use crate::domain::{Field, Product, ProductDraft};
use crate::validation::{parse_price, parse_stock, LenientInt};

/// How prices and stock levels are rendered in change summaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    pub currency_symbol: String,
    pub stock_unit: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "S/".to_string(),
            stock_unit: "units".to_string(),
        }
    }
}

impl DisplayFormat {
    pub fn price(&self, price: f64) -> String {
        format!("{} {:.2}", self.currency_symbol, price)
    }

    pub fn stock(&self, stock: i64) -> String {
        format!("{} {}", stock, self.stock_unit)
    }
}

/// One changed field, with old and new values ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: Field,
    pub old_display: String,
    pub new_display: String,
}

fn name_changed(original: &Product, draft: &ProductDraft) -> bool {
    original.name != draft.name
}

fn price_changed(original: &Product, draft: &ProductDraft) -> bool {
    parse_price(&draft.price) != Some(original.price)
}

fn stock_changed(original: &Product, draft: &ProductDraft) -> bool {
    parse_stock(&draft.stock) != LenientInt::Value(i64::from(original.stock))
}

/// Returns `true` when any field of `draft` differs from `original`.
///
/// Numbers are compared by value, so a draft of `"10.0"` equals a price of
/// `10`. Text that does not parse counts as a change.
pub fn has_changes(original: &Product, draft: &ProductDraft) -> bool {
    name_changed(original, draft) || price_changed(original, draft) || stock_changed(original, draft)
}

/// Lists every changed field in name, price, stock order.
///
/// Unparsable new values are shown as typed.
pub fn describe_changes(
    original: &Product,
    draft: &ProductDraft,
    format: &DisplayFormat,
) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if name_changed(original, draft) {
        changes.push(FieldChange {
            field: Field::Name,
            old_display: original.name.clone(),
            new_display: draft.name.clone(),
        });
    }

    if price_changed(original, draft) {
        changes.push(FieldChange {
            field: Field::Price,
            old_display: format.price(original.price),
            new_display: parse_price(&draft.price)
                .map(|price| format.price(price))
                .unwrap_or_else(|| draft.price.clone()),
        });
    }

    if stock_changed(original, draft) {
        let new_display = match parse_stock(&draft.stock) {
            LenientInt::Value(n) => format.stock(n),
            LenientInt::Invalid | LenientInt::Overflow => draft.stock.clone(),
        };
        changes.push(FieldChange {
            field: Field::Stock,
            old_display: format.stock(i64::from(original.stock)),
            new_display,
        });
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> Product {
        Product::new(4, "A", 10.0, 1)
    }

    #[test]
    fn test_value_equal_draft_has_no_changes() {
        assert!(!has_changes(&original(), &ProductDraft::new("A", "10", "1")));
        assert!(!has_changes(&original(), &ProductDraft::new("A", "10.00", "1")));
        assert!(!has_changes(&original(), &original().to_draft()));
    }

    #[test]
    fn test_each_field_is_detected() {
        let base = original().to_draft();
        assert!(has_changes(&original(), &base.with(Field::Name, "B")));
        assert!(has_changes(&original(), &base.with(Field::Price, "10.5")));
        assert!(has_changes(&original(), &base.with(Field::Stock, "2")));
    }

    #[test]
    fn test_unparsable_values_count_as_changes() {
        let base = original().to_draft();
        assert!(has_changes(&original(), &base.with(Field::Price, "")));
        assert!(has_changes(&original(), &base.with(Field::Stock, "many")));
    }

    #[test]
    fn test_describe_single_price_change() {
        let product = Product::new(4, "Lamp", 10.0, 3);
        let draft = product.to_draft().with(Field::Price, "12.5");

        let changes = describe_changes(&product, &draft, &DisplayFormat::default());
        assert_eq!(
            changes,
            vec![FieldChange {
                field: Field::Price,
                old_display: "S/ 10.00".to_string(),
                new_display: "S/ 12.50".to_string(),
            }]
        );
    }

    #[test]
    fn test_describe_changes_in_field_order() {
        let product = Product::new(4, "Lamp", 10.0, 3);
        let draft = ProductDraft::new("Desk lamp", "9.999", "7.8");
        let format = DisplayFormat {
            currency_symbol: "$".to_string(),
            stock_unit: "pcs".to_string(),
        };

        let changes = describe_changes(&product, &draft, &format);
        let fields: Vec<Field> = changes.iter().map(|c| c.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(changes[0].new_display, "Desk lamp");
        assert_eq!(changes[1].new_display, "$ 10.00");
        assert_eq!(changes[2].old_display, "3 pcs");
        assert_eq!(changes[2].new_display, "7 pcs");
    }

    #[test]
    fn test_describe_shows_raw_text_when_unparsable() {
        let product = Product::new(4, "Lamp", 10.0, 3);
        let draft = product.to_draft().with(Field::Stock, "lots");

        let changes = describe_changes(&product, &draft, &DisplayFormat::default());
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].new_display, "lots");
    }

    #[test]
    fn test_no_changes_describes_nothing() {
        let product = original();
        assert!(describe_changes(&product, &product.to_draft(), &DisplayFormat::default()).is_empty());
    }
}
