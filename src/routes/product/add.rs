use crate::helpers::JsonResponse;
use crate::services::{ProductError, ProductService};
use actix_web::{post, web, HttpResponse, Result};

#[tracing::instrument(name = "Add product.", skip(service))]
#[post("")]
pub async fn item(
    body: web::Bytes,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, ProductError> {
    let product = service.create(&body).await?;
    tracing::info!("Product {} created", product.id);

    Ok(JsonResponse::build().set_item(product).created())
}
