use crate::forms::{ProductForm, ProductUpdateForm};
use crate::models::Product;
use crate::services::{ProductError, ProductStore};
use std::sync::Arc;

/// Validates requests and performs exactly one store operation per mutation.
///
/// No transaction spans the lookup and the write in `update`/`delete`: a
/// concurrent delete between them makes `update` report not-found.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// All products, or those whose name contains `name` when given.
    pub async fn list(&self, name: Option<&str>) -> Result<Vec<Product>, ProductError> {
        let products = match name {
            Some(needle) => self.store.search_by_name(needle).await,
            None => self.store.list().await,
        };
        products.map_err(ProductError::Store)
    }

    /// A body that is not a JSON object is validated as `{}`.
    pub async fn create(&self, body: &[u8]) -> Result<Product, ProductError> {
        let form = ProductForm::from_body(body)?;
        self.store
            .insert(form.into())
            .await
            .map_err(ProductError::Store)
    }

    pub async fn get(&self, id: i64) -> Result<Product, ProductError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(ProductError::Store)?
            .ok_or(ProductError::NotFound)
    }

    /// Existence is checked before the body is parsed or validated.
    pub async fn update(&self, id: i64, body: &[u8]) -> Result<Product, ProductError> {
        let product = self.get(id).await?;
        let form = ProductUpdateForm::from_body(body)?;

        tracing::debug!("Updating product {} with {:?}", product.id, form);
        self.store
            .update_by_id(product.id, form.into())
            .await
            .map_err(ProductError::Store)?
            .ok_or(ProductError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProductError> {
        let product = self.get(id).await?;
        let deleted = self
            .store
            .delete_by_id(product.id)
            .await
            .map_err(ProductError::Store)?;

        if deleted {
            Ok(())
        } else {
            Err(ProductError::NotFound)
        }
    }
}
