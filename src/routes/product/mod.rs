pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use crate::services::ProductError;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .service(get::list)
            .service(add::item)
            .service(get::item)
            .service(update::item)
            .service(delete::item),
    );
}

// An id that is not an integer can never match a row.
fn parse_id(raw: &str) -> Result<i64, ProductError> {
    raw.parse::<i64>().map_err(|_| ProductError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{InMemoryProductStore, ProductService};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn service() -> web::Data<ProductService> {
        web::Data::new(ProductService::new(Arc::new(InMemoryProductStore::new())))
    }

    #[actix_web::test]
    async fn product_lifecycle() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({"name": "Pen", "price": 10, "stock": 5}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["name"], "Pen");
        assert_eq!(created["description"], Value::Null);
        assert_eq!(created["price"], 10.0);
        assert_eq!(created["stock"], 5.0);

        let req = test::TestRequest::get().uri("/products/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::put()
            .uri("/products/1")
            .set_json(json!({"name": "Pen Pro", "price": 12}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["name"], "Pen Pro");
        assert_eq!(updated["price"], 12.0);
        assert_eq!(updated["stock"], 5.0);

        let req = test::TestRequest::delete().uri("/products/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Produk berhasil dihapus"}));

        let req = test::TestRequest::get().uri("/products/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Produk tidak ditemukan"}));
    }

    #[actix_web::test]
    async fn list_with_and_without_filter() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        for name in ["Pen", "Pencil", "Eraser"] {
            let req = test::TestRequest::post()
                .uri("/products")
                .set_json(json!({"name": name, "price": 1, "stock": 1}))
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::CREATED
            );
        }

        let req = test::TestRequest::get().uri("/products").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);

        let req = test::TestRequest::get()
            .uri("/products?name=Pen")
            .to_request();
        let pens: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pens.len(), 2);

        let req = test::TestRequest::get().uri("/products?name=").to_request();
        let empty_filter: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(empty_filter.len(), 3);

        let req = test::TestRequest::get()
            .uri("/products?name=Stapler")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let none: Vec<Value> = test::read_body_json(resp).await;
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn create_validation_errors() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({"price": -1, "stock": 5}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["name"][0], "The name field is required.");
        assert_eq!(body["errors"]["price"][0], "The price field must be at least 0.");
        assert_eq!(
            body["message"],
            "The name field is required. (and 1 more error)"
        );

        let req = test::TestRequest::get().uri("/products").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn update_checks_existence_before_validation() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/products/999")
            .set_json(json!({"price": "not a number"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({"name": "Pen", "price": 10, "stock": 5}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/products/1")
            .set_json(json!({"price": "not a number"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["price"][0], "The price field must be a number.");
        assert!(body["errors"].get("stock").is_none());
    }

    #[actix_web::test]
    async fn update_of_missing_id_ignores_unparseable_body() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        for payload in ["", "{not json", "{\"name\":"] {
            let req = test::TestRequest::put()
                .uri("/products/999")
                .insert_header(("Content-Type", "application/json"))
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"message": "Produk tidak ditemukan"}));
        }

        let req = test::TestRequest::put().uri("/products/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unparseable_create_body_reports_required_fields() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["errors"],
            json!({
                "name": ["The name field is required."],
                "price": ["The price field is required."],
                "stock": ["The stock field is required."]
            })
        );
    }

    #[actix_web::test]
    async fn non_numeric_id_is_not_found() {
        let app = test::init_service(App::new().app_data(service()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/products/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/products/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Produk tidak ditemukan");
    }

    #[actix_web::test]
    async fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("1.5"), Err(ProductError::NotFound)));
        assert!(matches!(parse_id(""), Err(ProductError::NotFound)));
    }
}
