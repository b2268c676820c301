use std::fmt;

/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
/// The `code` is assigned by the actor when the product is created and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: u64,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `code` - Unique identifier (normally assigned by the actor system)
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `stock` - Units on hand
    pub fn new(code: u64, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            code,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Loads this product into an editable draft.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price.to_string(),
            stock: self.stock.to_string(),
        }
    }
}

/// A form field of a product draft.
///
/// The derived ordering is the display order used for errors and change
/// summaries: name, then price, then stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Price,
    Stock,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Price, Field::Stock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Stock => "stock",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated form state for a product.
///
/// Drafts are values: [`ProductDraft::with`] returns a new draft instead of
/// mutating the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>, stock: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Stock => &self.stock,
        }
    }

    /// Returns a copy of this draft with one field replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Name => next.name = value,
            Field::Price => next.price = value,
            Field::Stock => next.stock = value,
        }
        next
    }
}

/// Typed payload sent to the persistence actor on create and update.
///
/// Only produced by [`validate`](crate::validation::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_draft_renders_numbers_as_text() {
        let product = Product::new(7, "Lamp", 10.0, 3);
        let draft = product.to_draft();
        assert_eq!(draft, ProductDraft::new("Lamp", "10", "3"));

        let product = Product::new(8, "Desk", 149.95, 0);
        assert_eq!(product.to_draft().price, "149.95");
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let draft = ProductDraft::new("Lamp", "10", "3");
        let edited = draft.with(Field::Price, "12.5");

        assert_eq!(draft.price, "10");
        assert_eq!(edited.price, "12.5");
        assert_eq!(edited.get(Field::Name), "Lamp");
    }

    #[test]
    fn test_field_order() {
        let mut fields = vec![Field::Stock, Field::Name, Field::Price];
        fields.sort();
        assert_eq!(fields, Field::ALL.to_vec());
    }
}
