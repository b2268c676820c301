use crate::actor_framework::Entity;
use crate::domain::{Product, ProductInput};

/// Rechecks the persisted-record invariants for callers that skipped validation.
fn check_invariants(name: &str, price: f64) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name cannot be blank".to_string());
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(format!("Product price must be greater than 0, got {}", price));
    }
    Ok(())
}

impl Entity for Product {
    type Id = u64;
    type CreatePayload = ProductInput;
    type Patch = ProductInput;

    fn id(&self) -> &u64 {
        &self.code
    }

    /// Creates a new Product from a committed draft.
    ///
    /// # Arguments
    /// * `code` - Code assigned by the actor
    /// * `payload` - Validated name, price and stock
    fn from_create(code: u64, payload: ProductInput) -> Result<Self, String> {
        Ok(Self {
            code,
            name: payload.name,
            price: payload.price,
            stock: payload.stock,
        })
    }

    fn on_create(&mut self) -> Result<(), String> {
        check_invariants(&self.name, self.price)
    }

    /// Replaces name, price and stock. The code is kept.
    fn on_update(&mut self, patch: ProductInput) -> Result<(), String> {
        check_invariants(&patch.name, patch.price)?;
        self.name = patch.name;
        self.price = patch.price;
        self.stock = patch.stock;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64, stock: u32) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[test]
    fn test_update_keeps_code() {
        let mut product = Product::from_create(5, input("Lamp", 10.0, 1)).unwrap();
        product.on_update(input("Desk lamp", 12.0, 4)).unwrap();
        assert_eq!(product, Product::new(5, "Desk lamp", 12.0, 4));
        assert_eq!(*product.id(), 5);
    }

    #[test]
    fn test_invariants_are_enforced() {
        let mut blank = Product::from_create(1, input("  ", 10.0, 1)).unwrap();
        assert!(blank.on_create().is_err());

        let mut free = Product::from_create(2, input("Gift", 0.0, 1)).unwrap();
        assert!(free.on_create().is_err());

        let mut product = Product::new(3, "Lamp", 10.0, 1);
        assert!(product.on_update(input("Lamp", f64::NAN, 1)).is_err());
        assert_eq!(product.price, 10.0);
    }
}
