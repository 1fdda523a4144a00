use crate::helpers::JsonResponse;
use crate::services::{ProductError, ProductService, DELETED_MESSAGE};
use actix_web::{delete, web, HttpResponse, Result};

#[tracing::instrument(name = "Delete product.", skip(service))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<String>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let id = super::parse_id(&path)?;
    service.delete(id).await?;

    Ok(JsonResponse::message(DELETED_MESSAGE).ok())
}
