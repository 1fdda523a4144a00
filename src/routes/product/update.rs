use crate::helpers::JsonResponse;
use crate::services::{ProductError, ProductService};
use actix_web::{put, web, HttpResponse, Result};

#[tracing::instrument(name = "Update product.", skip(service))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<String>,
    body: web::Bytes,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let id = super::parse_id(&path)?;
    service
        .update(id, &body)
        .await
        .map(|product| JsonResponse::build().set_item(product).ok())
}
