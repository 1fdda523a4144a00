use crate::configuration::{Settings, StoreKind};
use crate::routes;
use crate::services::{InMemoryProductStore, PgProductStore, ProductService, ProductStore};
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// Wires the configured `ProductStore` backend.
pub async fn build_store(settings: &Settings) -> Result<Arc<dyn ProductStore>, sqlx::Error> {
    match settings.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory product store");
            Ok(Arc::new(InMemoryProductStore::new()))
        }
        StoreKind::Postgres => {
            let db = &settings.database;
            tracing::info!(
                db_host = %db.host,
                db_port = db.port,
                db_name = %db.database_name,
                "Connecting to PostgreSQL"
            );

            let connect_options = PgConnectOptions::new()
                .host(&db.host)
                .port(db.port)
                .username(&db.username)
                .password(&db.password)
                .database(&db.database_name)
                .ssl_mode(PgSslMode::Disable);

            let pg_pool = PgPoolOptions::new()
                .max_connections(db.max_connections)
                .acquire_timeout(Duration::from_secs(30))
                .connect_with(connect_options)
                .await?;

            Ok(Arc::new(PgProductStore::new(pg_pool)))
        }
    }
}

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ProductStore>,
) -> Result<Server, std::io::Error> {
    let product_service = web::Data::new(ProductService::new(store));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .configure(routes::product::configure)
            .app_data(product_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
