use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64, // assigned by the store, never reused
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields of a product that is about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: f64,
}

/// Validated fields of an update. `stock` is never part of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    // None: keep the stored description, Some(None): clear it
    pub description: Option<Option<String>>,
    pub price: f64,
}

impl ProductChanges {
    pub fn apply(self, product: &mut Product) {
        product.name = self.name;
        if let Some(description) = self.description {
            product.description = description;
        }
        product.price = self.price;
    }
}
