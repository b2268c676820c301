//! Stock level classification for list badges and the inventory summary.

use crate::domain::Product;

/// Default upper bound (inclusive) for a "low stock" badge.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    Low,
    Available,
}

impl StockStatus {
    /// `0` is out of stock, `1..=low_stock_threshold` is low, anything above is available.
    pub fn classify(stock: u32, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::Available
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::Low => "Low stock",
            StockStatus::Available => "Available",
        }
    }
}

/// Counts shown in the header of the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub low: usize,
    pub out_of_stock: usize,
}

impl InventorySummary {
    pub fn from_products(products: &[Product], low_stock_threshold: u32) -> Self {
        products.iter().fold(
            Self {
                total: products.len(),
                ..Self::default()
            },
            |mut summary, product| {
                match StockStatus::classify(product.stock, low_stock_threshold) {
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                    StockStatus::Low => summary.low += 1,
                    StockStatus::Available => summary.available += 1,
                }
                summary
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let threshold = DEFAULT_LOW_STOCK_THRESHOLD;
        assert_eq!(StockStatus::classify(0, threshold), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1, threshold), StockStatus::Low);
        assert_eq!(StockStatus::classify(10, threshold), StockStatus::Low);
        assert_eq!(StockStatus::classify(11, threshold), StockStatus::Available);
    }

    #[test]
    fn test_zero_threshold_has_no_low_band() {
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Available);
        assert_eq!(StockStatus::classify(0, 0), StockStatus::OutOfStock);
    }

    #[test]
    fn test_summary_counts() {
        let products = vec![
            Product::new(1, "A", 1.0, 0),
            Product::new(2, "B", 1.0, 4),
            Product::new(3, "C", 1.0, 10),
            Product::new(4, "D", 1.0, 50),
        ];
        let summary = InventorySummary::from_products(&products, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(
            summary,
            InventorySummary {
                total: 4,
                available: 1,
                low: 2,
                out_of_stock: 1,
            }
        );
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(InventorySummary::from_products(&[], 10), InventorySummary::default());
    }
}
