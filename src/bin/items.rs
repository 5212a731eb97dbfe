use memstore_api::app;
use memstore_api::config::{Config, ITEMS_DEFAULT_PORT};
use memstore_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    tracing::info!("items-api starting");

    let config = Config::from_env(ITEMS_DEFAULT_PORT)?;
    config.log_startup("items-api");

    let router = app::items_router(AppState::new());
    app::serve(router, &config).await
}
