use anyhow::Context;
use product_api::configuration::get_configuration;
use product_api::startup::{build_store, run};
use product_api::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("product_api".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;
    let store = build_store(&settings)
        .await
        .context("Failed to connect to database.")?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, store).await?.await?;
    Ok(())
}
