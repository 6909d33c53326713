use std::sync::Arc;

use mediashelf::{AppState, config::Config, db, routes, service::Catalog, store::Store};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,mediashelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = Store::with_slot(db, config.slot.clone());
    store.initialize().await?;

    let state = Arc::new(AppState { config: config.clone(), catalog: Mutex::new(Catalog::new(store)) });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
