use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, Product, ProductId};

/// Per-user record of viewed and purchased products.
///
/// `viewed` keeps insertion order as recency and suppresses duplicates.
/// `purchased` is not required to be a subset of `viewed`. The record only
/// ever grows within a session; no removal operation exists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBehavior {
    viewed: Vec<ProductId>,
    purchased: Vec<ProductId>,
    recent_views: Vec<Category>,
}

impl UserBehavior {
    pub fn new(
        viewed: Vec<ProductId>,
        purchased: Vec<ProductId>,
        recent_views: Vec<Category>,
    ) -> Self {
        let mut behavior = Self {
            purchased,
            ..Self::default()
        };
        for id in viewed {
            if !behavior.viewed.contains(&id) {
                behavior.viewed.push(id);
            }
        }
        for category in recent_views {
            if !behavior.recent_views.contains(&category) {
                behavior.recent_views.push(category);
            }
        }
        behavior
    }

    /// The viewed product ids, most recent last.
    pub fn viewed(&self) -> &[ProductId] {
        &self.viewed
    }

    pub fn purchased(&self) -> &[ProductId] {
        &self.purchased
    }

    /// The categories of recently viewed products.
    pub fn recent_views(&self) -> &[Category] {
        &self.recent_views
    }

    pub fn has_viewed(&self, id: ProductId) -> bool {
        self.viewed.contains(&id)
    }

    pub fn has_purchased(&self, id: ProductId) -> bool {
        self.purchased.contains(&id)
    }

    /// Records a view event for the given product.
    ///
    /// Appends the id to the viewed list and the product's category to the
    /// recent views, both idempotently. An id unknown to the catalog is
    /// ignored.
    pub fn mark_viewed(&mut self, catalog: &Catalog, id: ProductId) {
        if let Some(product) = catalog.get(id) {
            if !self.viewed.contains(&id) {
                self.viewed.push(id);
            }
            if !self.recent_views.contains(&product.category) {
                self.recent_views.push(product.category);
            }
        }
    }

    /// Resolves the viewed ids against the catalog, dropping unknown ids.
    pub fn viewed_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.viewed
            .iter()
            .filter_map(|id| catalog.get(*id))
            .collect()
    }

    /// Resolves the purchased ids against the catalog, dropping unknown ids.
    pub fn purchased_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.purchased
            .iter()
            .filter_map(|id| catalog.get(*id))
            .collect()
    }

    /// The viewed or purchased products whose category is among the recent
    /// views, grouped by recent view order.
    pub fn category_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.recent_views
            .iter()
            .flat_map(|category| {
                catalog.iter().filter(move |product| {
                    product.category == *category
                        && (self.has_viewed(product.id) || self.has_purchased(product.id))
                })
            })
            .collect()
    }
}

/// A simulated user with a fixed starting behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub behavior: UserBehavior,
}
