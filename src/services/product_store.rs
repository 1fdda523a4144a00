//! Persistence seam for products.
//!
//! [`ProductService`](super::ProductService) only talks to a [`ProductStore`].
//! `PgProductStore` backs it with the `products` table, `InMemoryProductStore`
//! with an id-ordered map.

use crate::db;
use crate::models::{NewProduct, Product, ProductChanges};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, String>;

    /// Inserts a row and returns it with its freshly assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product, String>;

    /// `Ok(None)` when no row with `id` exists any more.
    async fn update_by_id(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> Result<Option<Product>, String>;

    /// `Ok(false)` when there was nothing to delete.
    async fn delete_by_id(&self, id: i64) -> Result<bool, String>;

    /// All products in id order.
    async fn list(&self) -> Result<Vec<Product>, String>;

    /// Products whose name contains `needle`, case-sensitive, in id order.
    async fn search_by_name(&self, needle: &str) -> Result<Vec<Product>, String>;
}

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, String> {
        db::product::fetch(&self.pool, id).await
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, String> {
        db::product::insert(&self.pool, product).await
    }

    async fn update_by_id(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> Result<Option<Product>, String> {
        db::product::update(&self.pool, id, changes).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, String> {
        db::product::delete(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<Product>, String> {
        db::product::fetch_all(&self.pool).await
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<Product>, String> {
        db::product::search_by_name(&self.pool, needle).await
    }
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

#[derive(Default)]
pub struct InMemoryProductStore {
    state: RwLock<MemoryState>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, String> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, String> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let now = Utc::now();
        let product = Product {
            id: state.last_id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(product.id, product.clone());
        tracing::debug!("Stored product {} in memory", product.id);

        Ok(product)
    }

    async fn update_by_id(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> Result<Option<Product>, String> {
        let mut state = self.state.write().await;
        Ok(state.rows.get_mut(&id).map(|product| {
            changes.apply(product);
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, String> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Product>, String> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<Product>, String> {
        Ok(self
            .state
            .read()
            .await
            .rows
            .values()
            .filter(|product| product.name.contains(needle))
            .cloned()
            .collect())
    }
}
