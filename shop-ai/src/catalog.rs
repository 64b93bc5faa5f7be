use std::fmt;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog product.
#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    From,
    Into,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct ProductId(u32);

/// Product category, one of a fixed enumerated set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Wearables,
    Furniture,
    Appliances,
    Sports,
    Fashion,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Wearables => "Wearables",
            Category::Furniture => "Furniture",
            Category::Appliances => "Appliances",
            Category::Sports => "Sports",
            Category::Fashion => "Fashion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product record.
///
/// Immutable after catalog load; the engine only ever reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// unique identifier of this product
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// price in currency units, positive
    pub price: f32,
    /// average review rating, 0 to 5
    pub rating: f32,
    pub tags: Vec<String>,
    pub description: String,
    /// popularity across all users, 0 to 100
    pub popularity: f32,
    /// fixed list of spec strings
    pub specs: Vec<String>,
    /// number of reviews
    pub reviews: u32,
}

/// Read-only sequence of products keyed by unique id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from products with unique ids, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Iterates over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{catalog_of, product};

    #[test]
    fn test_get_known_id() {
        let catalog = catalog_of(&[
            product(1, Category::Electronics, 100., 4.5, &["audio"], 50.),
            product(2, Category::Sports, 80., 4.0, &["yoga"], 70.),
        ]);

        let found = catalog.get(ProductId::from(2)).unwrap();
        assert_eq!(found.category, Category::Sports);
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = catalog_of(&[product(1, Category::Fashion, 100., 4.5, &[], 50.)]);
        assert!(catalog.get(ProductId::from(9)).is_none());
    }

    #[test]
    fn test_iter_keeps_catalog_order() {
        let catalog = catalog_of(&[
            product(3, Category::Fashion, 10., 4., &[], 10.),
            product(1, Category::Fashion, 10., 4., &[], 10.),
            product(2, Category::Fashion, 10., 4., &[], 10.),
        ]);

        let ids = catalog.iter().map(|product| product.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            [3, 1, 2].iter().copied().map(ProductId::from).collect::<Vec<_>>(),
        );
    }
}
