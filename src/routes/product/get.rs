use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{ProductError, ProductService};
use actix_web::{get, web, HttpResponse, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    // present-but-empty still filters (and matches everything)
    pub name: Option<String>,
}

#[tracing::instrument(name = "List products.", skip(service))]
#[get("")]
pub async fn list(
    query: web::Query<ProductQuery>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    service
        .list(query.name.as_deref())
        .await
        .map(|products| {
            JsonResponse::<models::Product>::build()
                .set_list(products)
                .ok()
        })
}

#[tracing::instrument(name = "Get product.", skip(service))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<String>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let id = super::parse_id(&path)?;
    service
        .get(id)
        .await
        .map(|product| JsonResponse::build().set_item(product).ok())
}
